//! [`RadialSetIterator`]: a visitor-callback traversal of every (radial, gate) pair in a
//! [`RadialSet`], with per-radial metadata (center azimuth, gate width, slant range) computed
//! exactly once per radial rather than once per gate (§4.5).

use super::radial_set::RadialSet;

/// The current (radial, gate) position plus the metadata [`RadialSetIterator::iterate`]
/// precomputes once per radial.
#[derive(Debug, Clone, Copy)]
pub struct RadialGate {
    pub radial: usize,
    pub gate: usize,
    pub start_azimuth_deg: f64,
    pub beam_width_deg: f64,
    pub center_azimuth_deg: f64,
    pub gate_width_m: f64,
    pub range_m: f64,
    pub center_range_m: f64,
}

/// Visits every gate of a [`RadialSet`] in row-major (radial-major, gate-minor) order.
///
/// Unlike the source's pointer-caching C++ iterator, each call to [`Self::iterate`] takes a
/// `&mut RadialSet` directly and hands the callback a read-only [`RadialGate`] plus a setter
/// closure, so there is no separate cached-pointer lifetime to manage: the borrow checker plays
/// the role the source's "iterator invalidated by resize" caveat (§4.5) existed to warn about.
pub struct RadialSetIterator;

impl RadialSetIterator {
    /// Run `on_gate` over every (radial, gate) pair of `set`, calling `on_begin`/`on_end` once
    /// each around the loop. `on_gate` receives the current [`RadialGate`] and a setter that
    /// writes the primary array value at the current index (§4.5's `setValue`).
    pub fn iterate<FBegin, FGate, FEnd>(set: &mut RadialSet, mut on_begin: FBegin, mut on_gate: FGate, mut on_end: FEnd)
    where
        FBegin: FnMut(&RadialSet),
        FGate: FnMut(RadialGate, &mut dyn FnMut(f64)),
        FEnd: FnMut(&RadialSet),
    {
        on_begin(set);

        let num_radials = set.num_radials();
        let num_gates = set.num_gates();
        let first_gate_m = set.distance_to_first_gate_m();

        for r in 0..num_radials {
            let start_azimuth_deg = set.azimuth_deg(r);
            let beam_width_deg = set.beam_width_deg(r);
            let center_azimuth_deg = start_azimuth_deg + beam_width_deg / 2.0;
            let gate_width_m = set.gate_width_m(r);

            let mut range_m = first_gate_m;
            let mut center_range_m = first_gate_m + gate_width_m / 2.0;

            for g in 0..num_gates {
                let rg = RadialGate {
                    radial: r,
                    gate: g,
                    start_azimuth_deg,
                    beam_width_deg,
                    center_azimuth_deg,
                    gate_width_m,
                    range_m,
                    center_range_m,
                };
                let mut setter = |v: f64| set.set_value(r, g, v);
                on_gate(rg, &mut setter);

                range_m += gate_width_m;
                center_range_m += gate_width_m;
            }
        }

        on_end(set);
    }
}
