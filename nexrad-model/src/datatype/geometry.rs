//! Earth-model geometry primitives: [`Llh`] (lat/lon/height), [`Ijk`] (Cartesian displacement),
//! and [`Xyz`] (earth-centered Cartesian point), converting through a single spherical projection.

use std::f64::consts::PI;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean earth radius in kilometers, used for the spherical LLH<->XYZ projection.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// 4/3 effective-earth-radius factor applied to account for standard atmospheric refraction.
pub const EFFECTIVE_EARTH_RADIUS_KM: f64 = EARTH_RADIUS_KM * 4.0 / 3.0;

fn deg_to_rad(d: f64) -> f64 {
    d * PI / 180.0
}

fn rad_to_deg(r: f64) -> f64 {
    r * 180.0 / PI
}

/// (latitude degrees, longitude degrees, height kilometers) above the spherical earth model.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Llh {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub height_km: f64,
}

impl Llh {
    pub fn new(latitude_deg: f64, longitude_deg: f64, height_km: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            height_km,
        }
    }
}

impl Add<Ijk> for Llh {
    type Output = Llh;
    fn add(self, d: Ijk) -> Llh {
        (Xyz::from(self) + d).to_llh()
    }
}

impl Sub<Ijk> for Llh {
    type Output = Llh;
    fn sub(self, d: Ijk) -> Llh {
        (Xyz::from(self) - d).to_llh()
    }
}

impl Sub for Llh {
    type Output = Ijk;
    fn sub(self, rhs: Llh) -> Ijk {
        Xyz::from(self) - Xyz::from(rhs)
    }
}

/// A 3-D Cartesian displacement in kilometers relative to the spherical earth model.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ijk {
    pub i: f64,
    pub j: f64,
    pub k: f64,
}

impl Ijk {
    pub fn new(i: f64, j: f64, k: f64) -> Self {
        Self { i, j, k }
    }

    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    pub fn norm_squared(&self) -> f64 {
        self.i * self.i + self.j * self.j + self.k * self.k
    }

    pub fn unit(&self) -> Ijk {
        let n = self.norm();
        if n == 0.0 {
            *self
        } else {
            Ijk::new(self.i / n, self.j / n, self.k / n)
        }
    }

    pub fn dot(&self, rhs: &Ijk) -> f64 {
        self.i * rhs.i + self.j * rhs.j + self.k * rhs.k
    }

    pub fn cross(&self, rhs: &Ijk) -> Ijk {
        Ijk::new(
            self.j * rhs.k - self.k * rhs.j,
            self.k * rhs.i - self.i * rhs.k,
            self.i * rhs.j - self.j * rhs.i,
        )
    }
}

impl Add for Ijk {
    type Output = Ijk;
    fn add(self, rhs: Ijk) -> Ijk {
        Ijk::new(self.i + rhs.i, self.j + rhs.j, self.k + rhs.k)
    }
}

impl Sub for Ijk {
    type Output = Ijk;
    fn sub(self, rhs: Ijk) -> Ijk {
        Ijk::new(self.i - rhs.i, self.j - rhs.j, self.k - rhs.k)
    }
}

/// An absolute earth-centered Cartesian point in kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Project back to lat/lon/height via the inverse spherical projection.
    pub fn to_llh(&self) -> Llh {
        let r = EARTH_RADIUS_KM;
        let rho = (self.x * self.x + self.y * self.y + self.z * self.z).sqrt();
        let lat = (self.z / rho).asin();
        let lon = self.y.atan2(self.x);
        Llh::new(rad_to_deg(lat), rad_to_deg(lon), rho - r)
    }
}

impl From<Llh> for Xyz {
    fn from(loc: Llh) -> Xyz {
        let r = EARTH_RADIUS_KM + loc.height_km;
        let lat = deg_to_rad(loc.latitude_deg);
        let lon = deg_to_rad(loc.longitude_deg);
        Xyz::new(r * lat.cos() * lon.cos(), r * lat.cos() * lon.sin(), r * lat.sin())
    }
}

impl Sub for Xyz {
    type Output = Ijk;
    fn sub(self, rhs: Xyz) -> Ijk {
        Ijk::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add<Ijk> for Xyz {
    type Output = Xyz;
    fn add(self, d: Ijk) -> Xyz {
        Xyz::new(self.x + d.i, self.y + d.j, self.z + d.k)
    }
}

impl Sub<Ijk> for Xyz {
    type Output = Xyz;
    fn sub(self, d: Ijk) -> Xyz {
        Xyz::new(self.x - d.i, self.y - d.j, self.z - d.k)
    }
}

/// Great-circle bearing (degrees, clockwise from north) and distance (km) from `from` to `to`.
///
/// Used by [`crate::datatype::projection`]'s `lat_lon_to_az_range` to invert the azimuth/range
/// addressing of a [`crate::datatype::radial_set::RadialSet`] back to geographic coordinates;
/// not present in the upstream source under a dedicated name (see DESIGN.md).
pub fn great_circle_bearing_distance(from: Llh, to: Llh) -> (f64, f64) {
    let lat1 = deg_to_rad(from.latitude_deg);
    let lat2 = deg_to_rad(to.latitude_deg);
    let dlon = deg_to_rad(to.longitude_deg - from.longitude_deg);

    let central_angle = {
        let sin_lat1 = lat1.sin();
        let sin_lat2 = lat2.sin();
        let cos_lat1 = lat1.cos();
        let cos_lat2 = lat2.cos();
        (sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * dlon.cos())
            .clamp(-1.0, 1.0)
            .acos()
    };
    let distance_km = central_angle * EARTH_RADIUS_KM;

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    let bearing_deg = (rad_to_deg(y.atan2(x)) + 360.0) % 360.0;

    (bearing_deg, distance_km)
}

/// Inverse of [`great_circle_bearing_distance`]: destination point given a start, bearing, and
/// distance.
pub fn destination_point(from: Llh, bearing_deg: f64, distance_km: f64) -> Llh {
    let lat1 = deg_to_rad(from.latitude_deg);
    let lon1 = deg_to_rad(from.longitude_deg);
    let bearing = deg_to_rad(bearing_deg);
    let angular_distance = distance_km / EARTH_RADIUS_KM;

    let lat2 = (lat1.sin() * angular_distance.cos() + lat1.cos() * angular_distance.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * angular_distance.sin() * lat1.cos())
            .atan2(angular_distance.cos() - lat1.sin() * lat2.sin());

    Llh::new(rad_to_deg(lat2), rad_to_deg(lon2), from.height_km)
}

/// Height above ground (km) of a radar beam at the given ground range and elevation angle,
/// under the 4/3-effective-earth-radius model used throughout NEXRAD beam geometry.
///
/// See SPEC_FULL.md §10.1 for why this is hand-derived rather than copied from the source.
pub fn attenuation_height_km(station_height_km: f64, range_km: f64, elevation_deg: f64) -> f64 {
    let el = deg_to_rad(elevation_deg);
    let re = EFFECTIVE_EARTH_RADIUS_KM;
    (range_km * range_km + re * re + 2.0 * range_km * re * el.sin()).sqrt() - re + station_height_km
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn llh_xyz_round_trip() {
        let loc = Llh::new(35.3, -97.4, 0.417);
        let xyz = Xyz::from(loc);
        let back = xyz.to_llh();
        assert!((back.latitude_deg - loc.latitude_deg).abs() < 1e-6);
        assert!((back.longitude_deg - loc.longitude_deg).abs() < 1e-6);
        assert!((back.height_km - loc.height_km).abs() < 1e-6);
    }

    #[test]
    fn bearing_distance_round_trips_through_destination_point() {
        let from = Llh::new(35.3, -97.4, 0.0);
        let to = Llh::new(36.0, -96.5, 0.0);
        let (bearing, distance) = great_circle_bearing_distance(from, to);
        let reconstructed = destination_point(from, bearing, distance);
        assert!((reconstructed.latitude_deg - to.latitude_deg).abs() < 1e-4);
        assert!((reconstructed.longitude_deg - to.longitude_deg).abs() < 1e-4);
    }

    #[test]
    fn attenuation_height_increases_with_range_and_elevation() {
        let h0 = attenuation_height_km(0.417, 50.0, 0.5);
        let h1 = attenuation_height_km(0.417, 100.0, 0.5);
        let h2 = attenuation_height_km(0.417, 50.0, 2.0);
        assert!(h1 > h0);
        assert!(h2 > h0);
    }

    #[test]
    fn echo_top_interpolation_scenario() {
        // Spec scenario 5: tilts 0.5 / 1.5 deg, Za=10 (below), Zb=20 (above), THRESH=18.
        let (za, ta) = (10.0_f64, 0.5_f64);
        let (zb, tb) = (20.0_f64, 1.5_f64);
        let thresh = 18.0_f64;
        let crossing_elev = (thresh - za) * (tb - ta) / (zb - za) + tb;
        assert!((crossing_elev - 2.3).abs() < 1e-9);
    }
}
