//! Echo-top polar algorithm (§4.9), grounded in `rEchoTop.cc`'s three `ElevationVolumeCallback`
//! specializations: `TraditionalET`, `InterpolatedET` (Lak 2014), and `VCC`
//! (vertical column coverage).

use std::rc::Rc;

use nexrad_model::datatype::{attenuation_height_km, is_good, RadialSet, RadialSetIterator, Time, DATA_UNAVAILABLE, MISSING_DATA};

use crate::callback::EchoTopCallback;
use crate::elevation_volume::ElevationVolume;
use crate::polar_algorithm::PolarAlgorithmState;

/// dBZ floor a tilt must meet to count as "echo" for the traditional and interpolated variants.
const DBZ_THRESH: f64 = 18.0;
/// Substituted for a missing/bad value one tilt above the crossing tilt (Lak 2014, §2).
const DBZ_MISSING: f64 = -14.0;

/// Which of the three algorithms named in §4.9 a [`EchoTopAlgorithm`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoTopVariant {
    Traditional,
    Interpolated,
    VerticalColumnCoverage,
}

/// Look top-down through the column; the first tilt with a good value at/above [`DBZ_THRESH`]
/// yields the top-of-3dB-beam height. Grounded in `rEchoTop.cc`'s `TraditionalET::handleGate`.
struct TraditionalEchoTop;

impl EchoTopCallback for TraditionalEchoTop {
    fn handle_gate(&mut self, volume: &ElevationVolume, az_deg: f64, gate: usize) -> f64 {
        let mut missing_mask = false;

        for i in (0..volume.len()).rev() {
            let tilt = volume.tilt(i);
            let range_km = volume.range_km(i, gate);
            if let Some((radial, g)) = tilt.projection.radial_gate_at(az_deg, range_km * 1000.0) {
                missing_mask = true;
                let value = tilt.radial_set.value(radial, g);
                if is_good(value) && value >= DBZ_THRESH {
                    let bw = tilt.beam_widths_deg[radial];
                    let elev_deg = tilt.radial_set.elevation_deg() + 0.5 * bw;
                    return attenuation_height_km(volume.center().height_km, range_km, elev_deg);
                }
            }
        }

        if missing_mask {
            MISSING_DATA
        } else {
            DATA_UNAVAILABLE
        }
    }
}

/// Lak/Kurt's interpolated 2014-paper echo top: the crossing elevation between the highest
/// over-threshold tilt and the tilt above it, or `elev + beamwidth/2` at the top of the volume.
/// Grounded in `rEchoTop.cc`'s `InterpolatedET::handleGate`.
struct InterpolatedEchoTop;

impl EchoTopCallback for InterpolatedEchoTop {
    fn handle_gate(&mut self, volume: &ElevationVolume, az_deg: f64, gate: usize) -> f64 {
        let mut missing_mask = false;

        for i in (0..volume.len()).rev() {
            let tilt = volume.tilt(i);
            let range_km = volume.range_km(i, gate);
            let Some((radial, g)) = tilt.projection.radial_gate_at(az_deg, range_km * 1000.0) else {
                continue;
            };
            missing_mask = true;
            let zb = tilt.radial_set.value(radial, g);
            if !(is_good(zb) && zb >= DBZ_THRESH) {
                continue;
            }

            let top_tilt = i + 1 >= volume.len();
            let elev_deg = if top_tilt {
                let bw = tilt.beam_widths_deg[radial];
                tilt.radial_set.elevation_deg() + 0.5 * bw
            } else {
                let above = volume.tilt(i + 1);
                let above_range_km = volume.range_km(i + 1, gate);
                let za = above
                    .projection
                    .radial_gate_at(az_deg, above_range_km * 1000.0)
                    .map(|(r, g)| above.radial_set.value(r, g))
                    .filter(|&za| is_good(za) && za >= DBZ_MISSING)
                    .unwrap_or(DBZ_MISSING);

                let tb = tilt.radial_set.elevation_deg();
                let ta = above.radial_set.elevation_deg();
                (DBZ_THRESH - za) * (tb - ta) / (zb - za) + tb
            };

            return attenuation_height_km(volume.center().height_km, range_km, elev_deg);
        }

        if missing_mask {
            MISSING_DATA
        } else {
            DATA_UNAVAILABLE
        }
    }
}

/// Sum beam-depth contributions across the column into a normalized coverage weight, coalescing
/// overlapping adjacent beam spreads. Grounded in `rEchoTop.cc`'s `VCC::handleGate`.
struct VerticalColumnCoverage {
    max_km_seen: f64,
}

impl VerticalColumnCoverage {
    fn new() -> Self {
        Self { max_km_seen: 0.0 }
    }
}

impl EchoTopCallback for VerticalColumnCoverage {
    fn handle_gate(&mut self, volume: &ElevationVolume, az_deg: f64, gate: usize) -> f64 {
        let mut total_km = 0.0;
        let mut prev_bot_km = 20_000.0;
        let mut found_one = false;
        let mut missing_mask = false;

        for i in (0..volume.len()).rev() {
            let tilt = volume.tilt(i);
            let range_km = volume.range_km(i, gate);
            let Some((radial, _)) = tilt.projection.radial_gate_at(az_deg, range_km * 1000.0) else {
                continue;
            };
            missing_mask = true;

            let elev_deg = tilt.radial_set.elevation_deg();
            let bw = tilt.beam_widths_deg[radial];
            let station_height_km = volume.center().height_km;

            let mut top_km = attenuation_height_km(station_height_km, range_km, elev_deg + 0.5 * bw);
            let bot_km = attenuation_height_km(station_height_km, range_km, elev_deg - 0.5 * bw);

            if top_km > prev_bot_km {
                top_km = prev_bot_km;
            }

            if top_km > bot_km {
                total_km += top_km - bot_km;
            }
            prev_bot_km = bot_km;
            found_one = true;
        }

        if found_one {
            if total_km > self.max_km_seen {
                self.max_km_seen = total_km;
            }
            total_km / 22.0
        } else if missing_mask {
            MISSING_DATA
        } else {
            DATA_UNAVAILABLE
        }
    }
}

/// Drives the polar-algorithm subscription model (§4.9) and dispatches `processVolume` to one of
/// the three echo-top variants, grounded in `EchoTop::processVolume`/`Traditional`/`Interpolated`/
/// `VerticalColumnCoverage` (`rEchoTop.cc`). The source hardcodes `Interpolated` with the other two
/// calls commented out; this exposes all three as a selectable variant instead.
pub struct EchoTopAlgorithm {
    state: PolarAlgorithmState,
    variant: EchoTopVariant,
}

impl EchoTopAlgorithm {
    pub fn new(upto_degs: f64, variant: EchoTopVariant) -> Self {
        Self { state: PolarAlgorithmState::new(upto_degs), variant }
    }

    pub fn state(&self) -> &PolarAlgorithmState {
        &self.state
    }

    /// Equivalent of `PolarAlgorithm::processNewData` + `EchoTop::processVolume`: accept a new
    /// tilt and, if it was added to the volume, produce the output echo-top RadialSet.
    pub fn process_new_data(&mut self, radar_name: &str, center: nexrad_model::datatype::Llh, radial_set: Rc<RadialSet>, time: Time) -> Option<RadialSet> {
        let accepted = self.state.process_new_data(radar_name, center, radial_set, time)?;
        self.process_volume(accepted.use_time, accepted.use_elevation_deg)
    }

    fn process_volume(&mut self, use_time: Time, use_elevation_deg: f64) -> Option<RadialSet> {
        let volume = self.state.volume();
        let base = volume.entries().first()?.radial_set.clone();
        let center = self.state.center().unwrap_or_default();

        let (type_name, units, color_map) = match self.variant {
            EchoTopVariant::Traditional | EchoTopVariant::Interpolated => (format!("{}_EchoTop", base.grid().type_name()), "km", "EchoTop"),
            EchoTopVariant::VerticalColumnCoverage => (format!("{}_VCC", base.grid().type_name()), "Km", "EchoTop"),
        };

        let mut out = create_output_radial_set(&base, &type_name, use_elevation_deg, use_time);
        out.grid_mut().set_units(units);
        out.grid_mut().attributes_mut().set("ColorMap", color_map);

        let elevation_volume = ElevationVolume::build(volume, center, out.num_gates(), out.distance_to_first_gate_m(), out.gate_width_m(0));

        let mut callback: Box<dyn EchoTopCallback> = match self.variant {
            EchoTopVariant::Traditional => Box::new(TraditionalEchoTop),
            EchoTopVariant::Interpolated => Box::new(InterpolatedEchoTop),
            EchoTopVariant::VerticalColumnCoverage => Box::new(VerticalColumnCoverage::new()),
        };

        RadialSetIterator::iterate(
            &mut out,
            |_| {},
            |rg, set_value| {
                let value = callback.handle_gate(&elevation_volume, rg.center_azimuth_deg, rg.gate);
                set_value(value);
            },
            |_| {},
        );

        Some(out)
    }
}

fn create_output_radial_set(base: &RadialSet, type_name: &str, elevation_deg: f64, _time: Time) -> RadialSet {
    let num_radials = base.num_radials();
    let num_gates = base.num_gates();
    let mut out = RadialSet::new(type_name, num_radials, num_gates, elevation_deg, base.distance_to_first_gate_m());
    for r in 0..num_radials {
        out.set_azimuth_deg(r, base.azimuth_deg(r));
        out.set_beam_width_deg(r, base.beam_width_deg(r));
        out.set_gate_width_m(r, base.gate_width_m(r));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexrad_model::datatype::Llh;

    fn tilt_with_value(elevation_deg: f64, value: f64) -> Rc<RadialSet> {
        let mut rs = RadialSet::new("Reflectivity", 4, 4, elevation_deg, 1000.0);
        for r in 0..4 {
            rs.set_azimuth_deg(r, r as f64 * 90.0);
            rs.set_gate_width_m(r, 1000.0);
            for g in 0..4 {
                rs.set_value(r, g, value);
            }
        }
        Rc::new(rs)
    }

    #[test]
    fn traditional_echo_top_uses_highest_good_tilt() {
        let mut alg = EchoTopAlgorithm::new(10.0, EchoTopVariant::Traditional);
        let center = Llh::new(35.3, -97.4, 0.417);

        alg.process_new_data("KTLX", center, tilt_with_value(0.5, 25.0), Time::from_epoch(0, 0.0));
        let out = alg
            .process_new_data("KTLX", center, tilt_with_value(1.5, 22.0), Time::from_epoch(1, 0.0))
            .expect("tilt accepted");

        assert_eq!(out.grid().type_name(), "Reflectivity_EchoTop");
        assert!(is_good(out.value(0, 0)));
    }

    #[test]
    fn traditional_echo_top_reports_missing_when_below_threshold() {
        let mut alg = EchoTopAlgorithm::new(10.0, EchoTopVariant::Traditional);
        let center = Llh::new(35.3, -97.4, 0.417);
        let out = alg
            .process_new_data("KTLX", center, tilt_with_value(0.5, 5.0), Time::from_epoch(0, 0.0))
            .expect("tilt accepted");
        assert_eq!(out.value(0, 0), MISSING_DATA);
    }

    #[test]
    fn interpolated_echo_top_uses_topmost_formula_with_one_tilt() {
        let mut alg = EchoTopAlgorithm::new(10.0, EchoTopVariant::Interpolated);
        let center = Llh::new(35.3, -97.4, 0.417);
        let out = alg
            .process_new_data("KTLX", center, tilt_with_value(0.5, 25.0), Time::from_epoch(0, 0.0))
            .expect("tilt accepted");
        assert!(is_good(out.value(0, 0)));
    }

    #[test]
    fn interpolated_echo_top_crosses_between_bracketing_tilts_when_not_topmost() {
        let mut alg = EchoTopAlgorithm::new(10.0, EchoTopVariant::Interpolated);
        let center = Llh::new(35.3, -97.4, 0.417);

        alg.process_new_data("KTLX", center, tilt_with_value(0.5, 5.0), Time::from_epoch(0, 0.0));
        alg.process_new_data("KTLX", center, tilt_with_value(1.0, 20.0), Time::from_epoch(1, 0.0));
        let out = alg
            .process_new_data("KTLX", center, tilt_with_value(1.5, DATA_UNAVAILABLE), Time::from_epoch(2, 0.0))
            .expect("tilt accepted");

        // Top-down scan skips the topmost (1.5, no coverage) tilt, finds 1.0 good, then
        // interpolates the crossing against the 1.5 neighbor rather than using the
        // topmost half-beamwidth shortcut.
        assert!(is_good(out.value(0, 0)));
    }

    #[test]
    fn vertical_column_coverage_produces_normalized_weight() {
        let mut alg = EchoTopAlgorithm::new(10.0, EchoTopVariant::VerticalColumnCoverage);
        let center = Llh::new(35.3, -97.4, 0.417);
        alg.process_new_data("KTLX", center, tilt_with_value(0.5, 25.0), Time::from_epoch(0, 0.0));
        let out = alg
            .process_new_data("KTLX", center, tilt_with_value(1.5, 25.0), Time::from_epoch(1, 0.0))
            .expect("tilt accepted");
        assert!(out.value(0, 0) > 0.0);
    }
}
