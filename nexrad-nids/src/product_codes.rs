//! NIDS product code lookup table (§6.2).
//!
//! The source loads this table from an external `misc/NIDSProdInfo.xml` that ships with a full
//! RAPIO install and isn't part of this codebase. That file isn't available here, so this is a
//! hand-authored table covering the product codes this codec's decode dispatch actually branches
//! on (see `rNIDSRadialSet.cc`/`rBlockProductDesc.cc`), grounded in the public NOAA NWS Interface
//! Control Document for NEXRAD Level III products (ICD 2620001). Codes outside this table are
//! rejected with [`crate::result::Error::ProductCodeUnknown`] rather than guessed at.

/// Static per-product metadata needed to decode a NIDS product: its threshold decode method,
/// physical units, gate resolution string, and scaling constants for decode methods 3-7.
#[derive(Debug, Clone, Copy)]
pub struct ProductInfo {
    pub code: i16,
    pub name: &'static str,
    /// "WxH" resolution string; width is parsed and scaled to meters by [`ProductInfo::gate_width_m`].
    pub resolution: &'static str,
    pub units: &'static str,
    /// Threshold decode method, 1-7 (§4.8). 0 means the product uses encoded (not decoded)
    /// thresholds directly (methods E1-E3 in `NIDSUtil`).
    pub decode: i32,
    pub min: i32,
    pub increase: i32,
}

impl ProductInfo {
    pub fn is_null_product(&self) -> bool {
        matches!(self.code, 31 | 169 | 170 | 171 | 172 | 173 | 175)
    }

    pub fn needs_decoded_thresholds(&self) -> bool {
        !matches!(self.code, 134 | 135 | 176)
    }

    pub fn has_scaled_thresholds(&self) -> bool {
        self.min != -1 && self.increase != -1
    }

    /// Gate width in meters, mirroring `NIDSInfo::getGateWidthMeters`: resolution is parsed as
    /// nautical miles for every product except 34, which is kilometers.
    pub fn gate_width_m(&self) -> f64 {
        let width_str = self.resolution.split('x').next().unwrap_or("0.25");
        let value: f64 = width_str.parse().unwrap_or(0.25);
        if self.code == 34 {
            value * 1000.0
        } else {
            value * 1852.0
        }
    }
}

macro_rules! product {
    ($code:expr, $name:expr, $res:expr, $units:expr, $decode:expr, $min:expr, $increase:expr) => {
        ProductInfo {
            code: $code,
            name: $name,
            resolution: $res,
            units: $units,
            decode: $decode,
            min: $min,
            increase: $increase,
        }
    };
}

/// Product code table, sorted by code for [`lookup`]'s binary search.
static PRODUCTS: &[ProductInfo] = &[
    product!(16, "BaseReflectivity", "0.125x1", "dBZ", 1, -1, -1),
    product!(19, "BaseReflectivity248", "1x1", "dBZ", 1, -1, -1),
    product!(20, "BaseReflectivity248", "2x1", "dBZ", 1, -1, -1),
    product!(27, "BaseVelocity", "0.25x1", "kt", 1, -1, -1),
    product!(28, "BaseVelocity", "0.25x1", "kt", 1, -1, -1),
    product!(30, "SpectrumWidth", "0.25x1", "kt", 1, -1, -1),
    product!(31, "ClutterFilterControl", "1x1", "none", 1, -1, -1),
    product!(32, "DigitalHybridReflectivity", "0.25x1", "dBZ", 3, 0, 5),
    product!(34, "ClutterFilterMap", "1x1", "none", 1, -1, -1),
    product!(78, "OneHourPrecipitation", "0.25x1", "in", 2, -1, -1),
    product!(80, "StormTotalPrecipitation", "0.25x1", "in", 2, -1, -1),
    product!(81, "DigitalStormTotalPrecipitation", "0.25x1", "in", 7, 0, 1),
    product!(93, "StormRelativeVelocity", "0.25x1", "kt", 4, -1, -1),
    product!(94, "DigitalBaseReflectivity", "0.25x1", "dBZ", 3, -64, 2),
    product!(99, "DigitalVelocity", "0.25x1", "kt", 4, -1, -1),
    product!(134, "DigitalVil", "0.25x1", "kg/m2", 0, -1, -1),
    product!(135, "EnhancedEchoTop", "0.25x1", "kft", 0, -1, -1),
    product!(153, "SuperResDigitalReflectivity", "0.25x1", "dBZ", 3, -64, 2),
    product!(154, "SuperResDigitalVelocity", "0.25x1", "kt", 4, -1, -1),
    product!(155, "SuperResDigitalSpectrumWidth", "0.25x1", "kt", 5, 0, 1),
    product!(159, "DigitalDifferentialReflectivity", "0.25x1", "dB", 2, -1, -1),
    product!(161, "DigitalCorrelationCoefficient", "0.25x1", "none", 2, -1, -1),
    product!(163, "DigitalSpecificDiffPhase", "0.25x1", "deg/km", 2, -1, -1),
    product!(164, "DigitalHydrometeorClassification", "0.25x1", "none", 2, -1, -1),
    product!(165, "HydrometeorClassification", "0.25x1", "none", 2, -1, -1),
    product!(169, "OneHourAccumulation", "1x1", "in", 1, -1, -1),
    product!(170, "DigitalAccumulationArray", "0.25x1", "in", 2, -1, -1),
    product!(171, "StormTotalAccumulation", "1x1", "in", 1, -1, -1),
    product!(172, "DigitalStormTotalAccumulation", "0.25x1", "in", 2, -1, -1),
    product!(173, "DigitalUserSelectableAccumulation", "0.25x1", "in", 2, -1, -1),
    product!(174, "DigitalOneHourDifferenceAccumulation", "0.25x1", "in", 2, -1, -1),
    product!(175, "DigitalStormTotalDifferenceAccumulation", "0.25x1", "in", 2, -1, -1),
    product!(176, "DigitalInstantaneousPrecipitationRate", "0.25x1", "in/hr", 0, -1, -1),
    product!(177, "HybridHydrometeorClassification", "0.25x1", "none", 2, -1, -1),
    product!(186, "SuperResBaseReflectivity", "0.25x1", "dBZ", 3, -32, 1),
];

/// Look up a product's static metadata by its NIDS product code (§6.2).
///
/// Returns `None` for codes not in the table, which callers should surface as
/// [`crate::result::Error::ProductCodeUnknown`].
pub fn lookup(code: i16) -> Option<&'static ProductInfo> {
    PRODUCTS.iter().find(|p| p.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_reflectivity_gate_width_is_nautical_miles_to_meters() {
        let info = lookup(16).unwrap();
        assert!((info.gate_width_m() - 0.125 * 1852.0).abs() < 1e-6);
    }

    #[test]
    fn product_34_gate_width_is_kilometers_to_meters() {
        let info = lookup(34).unwrap();
        assert!((info.gate_width_m() - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn null_products_are_flagged() {
        assert!(lookup(31).unwrap().is_null_product());
        assert!(!lookup(16).unwrap().is_null_product());
    }

    #[test]
    fn products_134_135_176_use_encoded_not_decoded_thresholds() {
        assert!(!lookup(134).unwrap().needs_decoded_thresholds());
        assert!(!lookup(135).unwrap().needs_decoded_thresholds());
        assert!(!lookup(176).unwrap().needs_decoded_thresholds());
        assert!(lookup(16).unwrap().needs_decoded_thresholds());
    }

    #[test]
    fn unknown_code_returns_none() {
        assert!(lookup(9999).is_none());
    }
}
