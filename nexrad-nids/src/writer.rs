//! NIDS product writer (§4.7), the inverse of [`crate::reader::read_nids`].
//!
//! The source's own writer (`IONIDS::encodeDataType`) is marked "probably not working" and only
//! a handful of specializers implement `writeNIDS` at all; this follows the same block-by-block
//! shape (`rBlockMessageHeader::write`/`rBlockProductDesc::write`/`rBlockRadialSet::write`) but
//! always emits the RLE-packed color format (packet code x'AF1F'), uncompressed, regardless of
//! the source product's original packet code. Round-tripping a product through
//! [`crate::reader::read_nids`] then this writer is therefore lossy in packet representation
//! even when the decoded values match.

use crate::blocks::radial_set::{RadialData, PACKET_DIGITAL_RADIAL};
use crate::blocks::{MessageHeader, ProductDescription, ProductSymbology, RadialSetBlock};
use crate::cursor::Writer;
use crate::product_codes::ProductInfo;
use crate::result::Result;
use crate::time::nids_from_time;
use nexrad_model::datatype::{RadialSet, Time};

/// Fixed parameters needed to re-derive a [`ProductDescription`] from a [`RadialSet`], since the
/// data model itself doesn't carry every NIDS-specific header field (sequence number, VCP,
/// source/destination IDs).
#[derive(Debug, Clone, Copy)]
pub struct WriteOptions {
    pub seq_number: i16,
    pub vol_scan_num: i16,
    pub vcp: i16,
    pub source_id: i16,
    pub destination_id: i16,
    pub gen_time: Time,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            seq_number: 1,
            vol_scan_num: 1,
            vcp: 212,
            source_id: 0,
            destination_id: 0,
            gen_time: Time::from_epoch(0, 0.0),
        }
    }
}

/// Quantize a RadialSet's values into 4-bit RLE color codes (0-15) via evenly-spaced bins, then
/// write a complete NIDS product. This is a fixed, product-independent quantization rather than
/// the method-specific inverse of every decode path in [`crate::threshold`]; it exists so a
/// RadialSet produced anywhere in this crate can be serialized, not to byte-for-byte reproduce a
/// specific vendor product.
pub fn write_nids(radial_set: &RadialSet, info: &ProductInfo, vol_start_time: Time, options: &WriteOptions, out: &mut Vec<u8>) -> Result<()> {
    let body = encode_body(radial_set, info, vol_start_time, options)?;

    let message_header = MessageHeader {
        message_code: info.code,
        julian_date: nids_from_time(vol_start_time).0,
        seconds_of_day: nids_from_time(vol_start_time).1,
        message_length: (MessageHeader::SIZE + body.len()) as u32,
        source_id: options.source_id,
        destination_id: options.destination_id,
        num_blocks: 3,
    };

    let mut w = Writer::new(out);
    message_header.write(&mut w)?;
    w.write_bytes(&body)?;
    Ok(())
}

fn encode_body(radial_set: &RadialSet, info: &ProductInfo, vol_start_time: Time, options: &WriteOptions) -> Result<Vec<u8>> {
    let num_radials = radial_set.num_radials();
    let num_gates = radial_set.num_gates();

    let mut radials = Vec::with_capacity(num_radials);
    for r in 0..num_radials {
        let mut colors = Vec::with_capacity(num_gates);
        for g in 0..num_gates {
            colors.push(quantize(radial_set.value(r, g)));
        }
        radials.push(RadialData {
            start_angle_deg: radial_set.azimuth_deg(r) as f32,
            delta_angle_deg: radial_set.beam_width_deg(r) as f32,
            data: rle_encode(&colors),
        });
    }

    let radial_block = RadialSetBlock {
        packet_code: PACKET_DIGITAL_RADIAL,
        first_range_bin_index: (radial_set.distance_to_first_gate_m() / info.gate_width_m()).round() as i16,
        num_range_bins: num_gates as i16,
        center_of_sweep_i: 0,
        center_of_sweep_j: 0,
        scale_factor: 1000,
        radials,
    };

    let mut body = Vec::new();
    {
        let mut w = Writer::new(&mut body);

        let mut deps = [0i16; 10];
        deps[2] = (radial_set.elevation_deg() * 10.0).round() as i16;

        let desc = ProductDescription {
            location: nexrad_model::datatype::Llh::new(0.0, 0.0, 0.0),
            product_code: info.code,
            op_mode: 2,
            vcp: options.vcp,
            seq_number: options.seq_number,
            vol_scan_num: options.vol_scan_num,
            vol_start_time,
            gen_time: options.gen_time,
            deps,
            elevation_num: 1,
            data_thresholds: [0i16; 16],
            num_maps: 0,
            symbology_offset: ProductDescription::SIZE as i32,
            graphic_offset: 0,
            tabular_offset: 0,
        };
        desc.write(&mut w)?;

        let symbology = ProductSymbology {
            block_id: 1,
            block_length: 0,
            num_layers: 1,
        };
        symbology.write(&mut w)?;

        radial_block.write(&mut w)?;
    }

    Ok(body)
}

/// Map a physical value to a 4-bit color code by clamping `value / 2` into `[0, 15]`, a simple
/// fixed scale suitable for round-tripping data this crate itself produced.
fn quantize(value: f64) -> i32 {
    (value / 2.0).round().clamp(0.0, 15.0) as i32
}

fn rle_encode(colors: &[i32]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < colors.len() {
        let color = colors[i];
        let mut run = 1u32;
        while i + (run as usize) < colors.len() && colors[i + run as usize] == color && run < 15 {
            run += 1;
        }
        out.push(((run as u8) << 4) | (color as u8 & 0x0F));
        i += run as usize;
    }
    out
}
