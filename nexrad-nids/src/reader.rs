//! NIDS product reader (§4.7), grounded in `rIONIDS.cc::createDataType` and
//! `rNIDSRadialSet.cc::readNIDS`: skip WMO/AWIPS bulletin headers, read the Message Header,
//! Product Description, optionally BZIP2-decompress the rest of the message, read the Product
//! Symbology header and Radial Data block, decode colors to physical values per the product's
//! threshold method, and assemble a [`RadialSet`].

use crate::blocks::{MessageHeader, ProductDescription, ProductSymbology, RadialSetBlock};
use crate::colors;
use crate::cursor::Reader;
use crate::product_codes::{self, ProductInfo};
use crate::result::{Error, Result};
use crate::threshold;
use bzip2::read::BzDecoder;
use nexrad_model::datatype::RadialSet;
use std::io::Read;

const BZIP2_MAGIC: &[u8; 3] = b"BZh";
const MAX_HEADER_SKIP: usize = 2;
const HEADER_SCAN_LIMIT: usize = 100;

/// The decoded product plus the header fields a caller may want without reaching back into the
/// block structs (volume coverage pattern, sequence number, generation time).
#[derive(Debug, Clone)]
pub struct NidsProduct {
    pub radial_set: RadialSet,
    pub product_code: i16,
    pub vcp: i16,
    pub message_header: MessageHeader,
    pub product_description: ProductDescription,
}

/// Decode a complete NIDS product from its raw bytes, including any leading WMO/AWIPS text
/// bulletin header.
pub fn read_nids(buf: &[u8]) -> Result<NidsProduct> {
    let start = skip_bulletin_headers(buf);
    let mut r = Reader::new(&buf[start..]);

    let message_header = MessageHeader::read(&mut r)?;

    let data_size = buf.len() - start;
    if message_header.message_length as usize != data_size {
        log::warn!(
            "NIDS message length mismatch: header claims {} bytes, buffer has {}",
            message_header.message_length,
            data_size
        );
    }

    let product_description = ProductDescription::read(&mut r)?;

    let info = product_codes::lookup(product_description.product_code)
        .ok_or(Error::ProductCodeUnknown { code: product_description.product_code })?;

    if info.is_null_product() {
        return Err(Error::NullProductUnsupported { code: info.code });
    }

    let rest = r.remaining();
    let (symbology, radial_block) = if rest.starts_with(BZIP2_MAGIC) {
        log::info!("NIDS product {} is BZIP2-compressed, decompressing", info.code);
        let mut decompressed = Vec::new();
        BzDecoder::new(rest).read_to_end(&mut decompressed).map_err(|e| Error::Bzip2Error(e.to_string()))?;
        let mut zr = Reader::new(&decompressed);
        let symbology = ProductSymbology::read(&mut zr)?;
        let radial_block = RadialSetBlock::read(&mut zr)?;
        (symbology, radial_block)
    } else {
        let symbology = ProductSymbology::read(&mut r)?;
        let radial_block = RadialSetBlock::read(&mut r)?;
        (symbology, radial_block)
    };
    log::info!("NIDS symbology block has {} layer(s)", symbology.num_layers);

    let radial_set = build_radial_set(info, &product_description, &radial_block)?;

    Ok(NidsProduct {
        radial_set,
        product_code: product_description.product_code,
        vcp: product_description.vcp,
        message_header,
        product_description,
    })
}

/// WMO/AWIPS bulletin headers precede some NIDS feeds (NOAA/NCDC/NWS FTP). Each one ends with
/// `0x0D 0x0D 0x0A`; this mirrors `IONIDS::readHeaders`'s small state machine, scanning up to
/// two headers of at most 100 bytes each.
fn skip_bulletin_headers(buf: &[u8]) -> usize {
    let mut at = 0usize;
    for _ in 0..MAX_HEADER_SKIP {
        let mut state = 0u8;
        let mut found = None;
        for i in 0..HEADER_SCAN_LIMIT {
            let Some(&c) = buf.get(at + i) else { break };
            match state {
                0 => {
                    if c == 0x0D {
                        state = 1;
                    }
                }
                1 => {
                    if c == 0x0D {
                        state = 1;
                    } else if c == 0x0A {
                        found = Some(i + 1);
                        break;
                    } else {
                        state = 0;
                    }
                }
                _ => unreachable!(),
            }
        }
        match found {
            Some(advance) => at += advance,
            None => break,
        }
    }
    at
}

/// Elevation angle dependent-value scaling: product 84 stores it unscaled, everything else is
/// tenths of a degree (`NIDSRadialSet::getElevationAngleDegs`).
fn elevation_angle_deg(desc: &ProductDescription) -> f64 {
    let raw = desc.dep(3) as f64;
    if desc.product_code == 84 {
        raw
    } else {
        raw * 0.1
    }
}

fn decode_colors(radial: &crate::blocks::radial_set::RadialData, packet_code: i16) -> Vec<i32> {
    use crate::blocks::radial_set::{PACKET_RAW_RADIAL, PACKET_XDR};
    if packet_code == PACKET_RAW_RADIAL {
        colors::raw_colors(&radial.data)
    } else if packet_code == PACKET_XDR {
        colors::generic_colors(&radial.data)
    } else {
        colors::rle_colors(&radial.data)
    }
}

fn colors_to_values(info: &ProductInfo, desc: &ProductDescription, color_codes: &[i32]) -> Vec<f32> {
    if info.needs_decoded_thresholds() {
        let min = if info.has_scaled_thresholds() { desc.data_thresholds[0] as f64 / info.min as f64 } else { 0.0 };
        let delta = if info.has_scaled_thresholds() { desc.data_thresholds[1] as f64 / info.increase as f64 } else { 0.0 };
        let levels = if info.has_scaled_thresholds() { desc.data_thresholds[2] as i32 } else { 0 };
        let decoded = threshold::decode_thresholds(info.decode, &desc.data_thresholds, min, delta, levels);

        match info.code {
            164 => threshold::color_to_value_d1(color_codes),
            165 | 176 | 177 => threshold::color_to_value_d2(color_codes),
            94 | 99 | 153 | 154 | 155 | 159 | 161 | 163 => threshold::color_to_value_d3(color_codes, &decoded),
            _ => threshold::color_to_value_d4(color_codes, &decoded),
        }
    } else {
        match info.code {
            134 => threshold::color_to_value_e1(color_codes, &desc.data_thresholds),
            135 => threshold::color_to_value_e2(color_codes, &desc.data_thresholds),
            176 => threshold::color_to_value_e3(color_codes, &desc.data_thresholds),
            _ => color_codes.iter().map(|&c| c as f32).collect(),
        }
    }
}

fn build_radial_set(info: &ProductInfo, desc: &ProductDescription, block: &RadialSetBlock) -> Result<RadialSet> {
    let num_radials = block.radials.len();
    let mut per_radial_values = Vec::with_capacity(num_radials);
    let mut num_gates = 1usize;

    for radial in &block.radials {
        let color_codes = decode_colors(radial, block.packet_code);
        let values = colors_to_values(info, desc, &color_codes);
        num_gates = num_gates.max(values.len());
        per_radial_values.push(values);
    }

    let elevation_deg = elevation_angle_deg(desc);
    let gate_width_m = info.gate_width_m();
    let first_gate_m = block.first_range_bin_index as f64 * gate_width_m;

    let mut radial_set = RadialSet::new(info.name, num_radials, num_gates.max(1), elevation_deg, first_gate_m);

    for (i, radial) in block.radials.iter().enumerate() {
        radial_set.set_azimuth_deg(i, radial.start_angle_deg as f64);
        radial_set.set_beam_width_deg(i, radial.delta_angle_deg as f64);
        radial_set.set_gate_width_m(i, gate_width_m);

        let values = &per_radial_values[i];
        for (g, &v) in values.iter().enumerate() {
            radial_set.set_value(i, g, v as f64);
        }
    }

    Ok(radial_set)
}
