//! Threshold decoding methods 1-7 (§4.8), grounded in `rBlockProductDesc.cc`'s
//! `decodeMethod1`..`decodeMethod7`/`DecodeThresholds`/`getValue`, plus the color-code-to-value
//! conversions D1-D4/E1-E3 from `rNIDSUtil.cc`.

use nexrad_model::datatype::{MISSING_DATA, RANGE_FOLDED};

/// Decode the 16 raw threshold halfwords into real values using the product's decode method
/// (1-7). Methods 3-7 need `min`/`increase`/`num_data_level` derived from the product table and
/// the first three threshold halfwords, per `getDecodedThresholds`.
pub fn decode_thresholds(method: i32, raw: &[i16; 16], min: f64, delta: f64, num_data_level: i32) -> Vec<f32> {
    match method {
        2 => decode_method_2(raw),
        3 => decode_method_3(min, delta, num_data_level),
        4 => decode_method_4(min, delta, num_data_level),
        5 => decode_method_5(min, delta, num_data_level),
        6 => decode_method_6(min, delta, num_data_level),
        7 => decode_method_7(min, delta, num_data_level),
        _ => decode_method_1(raw),
    }
}

/// Default fallback: each halfword independently decoded via [`decode_halfword`] (§4.8 Method 1).
fn decode_method_1(raw: &[i16; 16]) -> Vec<f32> {
    raw.iter().map(|&t| decode_halfword(t)).collect()
}

/// Products 159, 161, 163, 170, 172-176: linear `F = (N - offset) / scale` relationship, where
/// `scale`/`offset` are IEEE-754 floats packed across two threshold halfwords each.
fn decode_method_2(raw: &[i16; 16]) -> Vec<f32> {
    let scale = f32::from_bits(((raw[0] as u16 as u32) << 16) | (raw[1] as u16 as u32));
    let offset = f32::from_bits(((raw[2] as u16 as u32) << 16) | (raw[3] as u16 as u32));
    let leading_flags = raw[6] as i32;
    let num_values = raw[5] as i32 + leading_flags;

    let mut out = Vec::with_capacity((num_values + 2).max(0) as usize);
    out.push(MISSING_DATA as f32);
    // The source also special-cases 159/161/163 with a RangeFolded second slot and 176 with no
    // leading specials at all; this crate's callers already branch on product code before
    // invoking method 2 for those, so only the common `below threshold` slot is added here.
    for n in 0..num_values.max(0) {
        out.push((n as f32 - offset) / scale);
    }
    out
}

/// Products 32, 94, 153, 180, 182, 186: below-threshold + missing, then a linear ramp.
fn decode_method_3(min: f64, delta: f64, num_data_level: i32) -> Vec<f32> {
    let mut out = vec![MISSING_DATA as f32, MISSING_DATA as f32];
    let mut val = min;
    for _ in 0..num_data_level {
        out.push(val as f32);
        val += delta;
    }
    out
}

/// Products 93, 99, 154: same ramp as method 3 but the second special slot is range-folded.
fn decode_method_4(min: f64, delta: f64, num_data_level: i32) -> Vec<f32> {
    let mut out = vec![MISSING_DATA as f32, RANGE_FOLDED as f32];
    let mut val = min;
    for _ in 0..num_data_level {
        out.push(val as f32);
        val += delta;
    }
    out
}

/// Product 155: the ramp starts at a fixed bin offset of 129.
fn decode_method_5(min: f64, delta: f64, num_data_level: i32) -> Vec<f32> {
    let mut out = vec![MISSING_DATA as f32; (129 + num_data_level.max(0)) as usize];
    if out.len() < 2 {
        out.resize(2, MISSING_DATA as f32);
    }
    out[1] = RANGE_FOLDED as f32;
    let mut val = min;
    for i in 0..num_data_level {
        out[(129 + i) as usize] = val as f32;
        val += delta;
    }
    out
}

/// Product 33: ramp scaled by `250 / num_data_level`, bracketed by missing-data sentinels.
fn decode_method_6(min: f64, delta: f64, num_data_level: i32) -> Vec<f32> {
    let mut out = vec![MISSING_DATA as f32];
    for i in 0..num_data_level {
        out.push((min + delta * i as f64 * 250.0 / num_data_level as f64) as f32);
    }
    out.push(MISSING_DATA as f32);
    out
}

/// Product 81: ramp scaled by `256 / num_data_level`, bracketed by missing-data sentinels.
fn decode_method_7(min: f64, delta: f64, num_data_level: i32) -> Vec<f32> {
    let mut out = vec![MISSING_DATA as f32];
    for i in 0..num_data_level {
        out.push((min + delta * i as f64 * 256.0 / num_data_level as f64) as f32);
    }
    out.push(MISSING_DATA as f32);
    out
}

/// Decode a single raw threshold halfword per `DecodeThresholds`/`getValue` (bit15 is a special
/// flag selecting missing/range-folded/max-value sentinels; bits 8-14 otherwise select a scale
/// or sign transform applied to the low byte).
fn decode_halfword(raw: i16) -> f32 {
    let a = raw as u16;
    if (a & 0x8000) == 0 {
        get_value(raw)
    } else {
        let value = a & 0x00FF;
        match value {
            0 | 2 => MISSING_DATA as f32,
            3 => RANGE_FOLDED as f32,
            // The source returns `myDeps[3]` (the product's declared max value) for this case;
            // that dependency lives on the product description block, not the threshold table,
            // so callers needing the true max-value sentinel should special-case value == 1
            // themselves using the block's dep4. Here it falls back to the raw getValue path.
            _ => get_value(raw),
        }
    }
}

fn get_value(raw: i16) -> f32 {
    let a = raw as u16;
    let rtv = (a & 0x00FF) as f32;
    if a & 0x4000 != 0 {
        return rtv / 100.0;
    }
    if a & 0x2000 != 0 {
        return rtv / 20.0;
    }
    if a & 0x1000 != 0 {
        return rtv / 10.0;
    }
    if a & 0x0800 != 0 {
        return rtv + 0.5;
    }
    if a & 0x0400 != 0 {
        return rtv - 0.5;
    }
    if a & 0x0200 != 0 {
        return rtv.abs();
    }
    if a & 0x0100 != 0 {
        return -rtv;
    }
    rtv
}

// ------------------------------------------------------------------
// Color-code -> physical-value conversion (`NIDSUtil::colorToValue*`).

/// Method D1 (product 164): simple code levels scaled by 10.
pub fn color_to_value_d1(colors: &[i32]) -> Vec<f32> {
    colors.iter().map(|&c| c as f32 / 10.0).collect()
}

/// Method D2 (products 165, 176, 177): code levels passed through unchanged.
pub fn color_to_value_d2(colors: &[i32]) -> Vec<f32> {
    colors.iter().map(|&c| c as f32).collect()
}

/// Method D3 (products 94, 99, 153-155, 159, 161, 163): direct threshold-table lookup.
pub fn color_to_value_d3(colors: &[i32], thresholds: &[f32]) -> Vec<f32> {
    colors.iter().map(|&c| thresholds[c as usize]).collect()
}

/// Method D4 (fallback): average of the bracketing threshold pair, unless the looked-up
/// threshold is itself a missing-data sentinel.
pub fn color_to_value_d4(colors: &[i32], thresholds: &[f32]) -> Vec<f32> {
    colors
        .iter()
        .map(|&c| {
            let idx = c as usize;
            if !thresholds.is_empty() && thresholds[idx] <= -99900.0 {
                thresholds[idx]
            } else {
                let left = thresholds[idx];
                if idx + 1 >= thresholds.len() {
                    left
                } else {
                    (left + thresholds[idx + 1]) / 2.0
                }
            }
        })
        .collect()
}

/// Method E1 (product 134, Digital VIL): half-float-encoded linear/log transform using the
/// encoded threshold halfwords directly, bypassing threshold decoding entirely.
pub fn color_to_value_e1(colors: &[i32], encoded: &[i16; 16]) -> Vec<f32> {
    let linear_coeff = half_float(encoded[0]);
    let linear_offset = half_float(encoded[1]);
    let log_start = encoded[2] as f64;
    let log_coeff = half_float(encoded[3]);
    let log_offset = half_float(encoded[4]);

    colors
        .iter()
        .map(|&c| {
            if c == 255 {
                MISSING_DATA as f32
            } else if c == 254 {
                80.0
            } else if (c as f64) < log_start {
                ((c as f64 - linear_offset) / linear_coeff) as f32
            } else {
                (((c as f64 - log_offset) / log_coeff).exp()) as f32
            }
        })
        .collect()
}

/// Method E2 (product 135, Enhanced Echo Top): bitmask/scale/offset over encoded thresholds.
pub fn color_to_value_e2(colors: &[i32], encoded: &[i16; 16]) -> Vec<f32> {
    let mask = encoded[0] as u16 as i32;
    let scale = encoded[1] as u16 as i32;
    let offset = encoded[2] as u16 as i32;

    colors
        .iter()
        .map(|&c| {
            if c == 0 || c == 1 {
                MISSING_DATA as f32
            } else {
                (((c & mask) / scale) - offset) as f32
            }
        })
        .collect()
}

/// Method E3 (product 176, Digital Instantaneous Precipitation Rate): IEEE-754 scale/offset
/// packed across encoded halfwords, no special sentinel codes.
pub fn color_to_value_e3(colors: &[i32], encoded: &[i16; 16]) -> Vec<f32> {
    let scale = f32::from_bits(((encoded[0] as u16 as u32) << 16) | (encoded[1] as u16 as u32));
    let offset = f32::from_bits(((encoded[2] as u16 as u32) << 16) | (encoded[3] as u16 as u32));
    colors.iter().map(|&c| (c as f32 - offset) / scale).collect()
}

/// Pack two threshold halfwords (big-halfword-first) into an IEEE-754 double-precision-style
/// half-float per the source's `dvl_sign`/`dvl_exp`/`dvl_mant` bit layout.
fn half_float(raw: i16) -> f64 {
    let bits = raw as u16;
    let sign = ((bits & 0x8000) >> 15) as i32;
    let exp = (((bits & 0x7C00) >> 10) as i32) - 16;
    let mant = (bits & 0x03FF) as f64;
    (-1.0_f64).powi(sign) * 2.0_f64.powi(exp) * (1.0 + mant / 1024.0)
}
