//! [`RadialSetProjection`]: an O(1) azimuth/range lookup table bound to one [`RadialSet`] layer.

use super::array::DATA_UNAVAILABLE;
use super::geometry::{great_circle_bearing_distance, Llh};
use super::projection::{Coverage, DataProjection};
use super::radial_set::RadialSet;

/// Default table resolution: 1000 bins per degree (0.001-degree azimuth resolution).
pub const DEFAULT_ACCURACY: u32 = 1000;

/// `azBin -> radialIndex` lookup table built once per RadialSet, giving O(1) azimuth lookup
/// instead of a per-query linear scan over radials.
///
/// Table size is `367 * accuracy + 1`: a full circle (`360 * accuracy`) plus seven degrees of
/// headroom so a radial's gap-filled upper bound can spill slightly past 360 degrees before the
/// wraparound pass folds it back, matching the source's fixed-oversized allocation.
pub struct RadialSetLookup {
    accuracy: u32,
    az_to_radial: Vec<i64>,
}

impl RadialSetLookup {
    pub fn build(azimuths_deg: &[f64], beam_widths_deg: &[f64], accuracy: u32) -> Self {
        let full_circle = 360 * accuracy as i64;
        let table_len = 367 * accuracy as usize + 1;
        let mut table = vec![-1i64; table_len];
        let num_radials = azimuths_deg.len();
        let accuracy_f = accuracy as f64;

        for i in 0..num_radials {
            let az = azimuths_deg[i];
            let next_i = if i == num_radials - 1 { 0 } else { i + 1 };

            let minaz = (accuracy_f * az).floor() as i64;
            let mut maxaz = (accuracy_f * (beam_widths_deg[i] + az) + 0.5).floor() as i64;
            let mut nextaz = (accuracy_f * azimuths_deg[next_i]).floor() as i64;

            if nextaz < minaz {
                nextaz += full_circle;
            }

            if maxaz > minaz && nextaz > maxaz && (nextaz - maxaz) < accuracy as i64 {
                maxaz = nextaz;
            }

            let max_size = table_len as i64;
            if minaz < 0 || minaz >= max_size || maxaz < 0 || maxaz >= max_size {
                continue;
            }

            if maxaz > minaz {
                for j in minaz..maxaz {
                    table[j as usize] = i as i64;
                }
            } else {
                for j in maxaz..minaz {
                    table[j as usize] = i as i64;
                }
            }
        }

        for i in (full_circle as usize)..table.len() {
            if table[i] >= 0 {
                table[i - full_circle as usize] = table[i];
            }
        }

        Self { accuracy, az_to_radial: table }
    }

    /// `radialIndex` covering `az_deg`, or `None` if no radial's sweep reaches it.
    pub fn radial_at(&self, az_deg: f64) -> Option<usize> {
        let full_circle = 360 * self.accuracy as i64;
        let bin = ((self.accuracy as f64 * az_deg).floor() as i64).rem_euclid(full_circle);
        let value = *self.az_to_radial.get(bin as usize)?;
        if value < 0 {
            None
        } else {
            Some(value as usize)
        }
    }
}

/// A [`DataProjection`] bound to one float layer of a [`RadialSet`], backed by a
/// [`RadialSetLookup`] for O(1) azimuth lookup and simple division for range-to-gate.
pub struct RadialSetProjection<'a> {
    layer: &'a str,
    lookup: RadialSetLookup,
    center: Llh,
    dist_to_first_gate_m: f64,
    dist_to_last_gate_m: f64,
    gate_width_m: f64,
    num_gates: usize,
}

impl<'a> RadialSetProjection<'a> {
    pub fn new(layer: &'a str, rs: &RadialSet, center: Llh, accuracy: u32) -> Self {
        let num_radials = rs.num_radials();
        let azimuths: Vec<f64> = (0..num_radials).map(|r| rs.azimuth_deg(r)).collect();
        let beam_widths: Vec<f64> = (0..num_radials).map(|r| rs.beam_width_deg(r)).collect();
        let gate_width_m = if num_radials > 0 { rs.gate_width_m(0) } else { 0.0 };
        let num_gates = if num_radials > 0 { rs.num_gates() } else { 0 };
        let dist_to_first_gate_m = rs.distance_to_first_gate_m();
        Self {
            layer,
            lookup: RadialSetLookup::build(&azimuths, &beam_widths, accuracy),
            center,
            dist_to_first_gate_m,
            dist_to_last_gate_m: dist_to_first_gate_m + num_gates as f64 * gate_width_m,
            gate_width_m,
            num_gates,
        }
    }

    pub fn layer(&self) -> &str {
        self.layer
    }

    /// Query by azimuth/range, returning `(radial, gate)` if the point falls within the swept
    /// volume. Range rejection happens before azimuth lookup per §4.4.
    pub fn radial_gate_at(&self, az_deg: f64, range_m: f64) -> Option<(usize, usize)> {
        if range_m < self.dist_to_first_gate_m || range_m >= self.dist_to_last_gate_m {
            return None;
        }
        let radial = self.lookup.radial_at(az_deg)?;
        let gate = ((range_m - self.dist_to_first_gate_m) / self.gate_width_m).floor();
        if gate < 0.0 || gate as usize >= self.num_gates {
            return None;
        }
        Some((radial, gate as usize))
    }

    pub fn value_at_az_range(&self, rs: &RadialSet, az_deg: f64, range_m: f64) -> f64 {
        match self.radial_gate_at(az_deg, range_m) {
            Some((radial, gate)) => rs.value(radial, gate),
            None => DATA_UNAVAILABLE,
        }
    }
}

impl<'a> DataProjection for RadialSetProjectionView<'a> {
    fn value_at(&self, lat_deg: f64, lon_deg: f64) -> f64 {
        let (bearing_deg, distance_km) =
            great_circle_bearing_distance(self.projection.center, Llh::new(lat_deg, lon_deg, 0.0));
        self.projection.value_at_az_range(self.radial_set, bearing_deg, distance_km * 1000.0)
    }

    fn coverage_full(&self) -> Coverage {
        // There is no natural "full" extent for a polar RadialSet; mirror the 10-degree,
        // 1000x1000 default the source uses for LLCoverageFull.
        let rows = 1000;
        let cols = 1000;
        let degree_out = 10.0;
        let delta_lon = (2.0 * degree_out) / cols as f64;
        let delta_lat = -delta_lon;
        Coverage {
            rows,
            cols,
            top_lat_deg: self.projection.center.latitude_deg - delta_lat * (rows as f64) / 2.0,
            left_lon_deg: self.projection.center.longitude_deg - delta_lon * (cols as f64) / 2.0,
            delta_lat_deg: delta_lat,
            delta_lon_deg: delta_lon,
        }
    }
}

/// Bundles a [`RadialSetProjection`] with the [`RadialSet`] it reads values from, since
/// [`DataProjection::value_at`] needs both the lookup table and the backing data.
pub struct RadialSetProjectionView<'a> {
    pub projection: RadialSetProjection<'a>,
    pub radial_set: &'a RadialSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_covers_full_circle_with_no_gaps_for_contiguous_radials() {
        let num_radials = 360;
        let azimuths: Vec<f64> = (0..num_radials).map(|i| i as f64).collect();
        let beam_widths = vec![1.0; num_radials];
        let lookup = RadialSetLookup::build(&azimuths, &beam_widths, 10);
        for az_tenth in 0..3600 {
            let az = az_tenth as f64 / 10.0;
            assert!(lookup.radial_at(az).is_some(), "gap at {az}");
        }
    }

    #[test]
    fn first_radial_wins_tie_break() {
        let azimuths = vec![0.0, 0.5];
        let beam_widths = vec![1.0, 1.0];
        let lookup = RadialSetLookup::build(&azimuths, &beam_widths, 10);
        assert_eq!(lookup.radial_at(0.3), Some(0));
    }

    #[test]
    fn range_outside_gates_rejected() {
        let mut rs = RadialSet::new("Reflectivity", 4, 4, 0.5, 1000.0);
        for r in 0..4 {
            rs.set_azimuth_deg(r, r as f64 * 90.0);
            rs.set_gate_width_m(r, 250.0);
        }
        let center = Llh::new(35.0, -97.0, 0.4);
        let projection = RadialSetProjection::new("primary", &rs, center, 100);
        assert!(projection.radial_gate_at(0.0, 500.0).is_none());
        assert!(projection.radial_gate_at(0.0, 1100.0).is_some());
    }
}
