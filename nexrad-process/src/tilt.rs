//! [`Tilt`]: one elevation scan as stored in a polar algorithm's virtual volume, grounded in
//! `rPolarAlgorithm.cc`'s `myElevationVolume->addDataType(r)` (the volume holds `RadialSet`
//! pointers directly; this wraps one in the `VolumeItem`/`SubtypeValue` pair §4.6 requires).

use std::rc::Rc;

use nexrad_model::datatype::{RadialSet, SubtypeValue, Time, VolumeItem};

/// A single RadialSet tracked inside a polar algorithm's elevation volume, keyed by its
/// elevation angle rendered as a zero-padded decimal string (mirroring the source's `getSubType`
/// convention for polar tilts).
#[derive(Debug, Clone)]
pub struct Tilt {
    pub radial_set: Rc<RadialSet>,
    pub time: Time,
    pub subtype: String,
}

impl Tilt {
    pub fn new(radial_set: Rc<RadialSet>, time: Time) -> Self {
        let subtype = format!("{:05.2}", radial_set.elevation_deg());
        Self { radial_set, time, subtype }
    }
}

impl VolumeItem for Tilt {
    fn time(&self) -> Time {
        self.time
    }

    fn subtype(&self) -> &str {
        &self.subtype
    }
}

impl SubtypeValue for Tilt {
    fn subtype_value(&self) -> f64 {
        self.radial_set.elevation_deg()
    }
}
