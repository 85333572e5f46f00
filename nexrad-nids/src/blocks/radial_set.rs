//! Radial Data Block (§6.1), grounded in `rBlockRadialSet.h`/`.cc`.
//!
//! Stores the raw per-radial byte chunks exactly as transmitted; [`super::colors`] turns those
//! chunks into color codes once the packet code is known.

use crate::cursor::{Reader, Writer};
use crate::result::{Error, Result};
use std::io::Write;

/// Packet Type x'AF1F', the common "digital radial data array" packet used by most RadialSet
/// products (Base Reflectivity, Base Velocity, Spectrum Width, ...).
pub const PACKET_DIGITAL_RADIAL: i16 = -20705;
/// Packet Type 16, raw byte-per-gate radial data.
pub const PACKET_RAW_RADIAL: i16 = 16;
/// Packet Type 1, a null product placeholder with no gate data.
pub const PACKET_NULL: i16 = 1;
/// Packet Type 28, XDR/RPC-compressed radial data (not supported by this codec).
pub const PACKET_XDR: i16 = 28;

#[derive(Debug, Clone, PartialEq)]
pub struct RadialData {
    pub start_angle_deg: f32,
    pub delta_angle_deg: f32,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadialSetBlock {
    pub packet_code: i16,
    pub first_range_bin_index: i16,
    pub num_range_bins: i16,
    pub center_of_sweep_i: i16,
    pub center_of_sweep_j: i16,
    pub scale_factor: i16,
    pub radials: Vec<RadialData>,
}

impl RadialSetBlock {
    pub fn scale_factor(&self) -> f32 {
        self.scale_factor as f32 * 0.001
    }

    pub(crate) fn read(r: &mut Reader<'_>) -> Result<Self> {
        r.check_divider()?;

        let length_of_data_layer = r.read_i32()?;
        if length_of_data_layer == 0 {
            return Err(Error::CorruptMessageLength { expected: 1, actual: 0 });
        }

        let packet_code = r.read_i16()?;
        match packet_code {
            PACKET_NULL => return Err(Error::NullProductUnsupported { code: packet_code }),
            PACKET_XDR => return Err(Error::XdrPacketUnsupported { code: packet_code }),
            PACKET_DIGITAL_RADIAL | PACKET_RAW_RADIAL => {}
            other => return Err(Error::UnsupportedPacketCode { code: other }),
        }

        let first_range_bin_index = r.read_i16()?;
        let num_range_bins = r.read_i16()?;
        let center_of_sweep_i = r.read_i16()?;
        let center_of_sweep_j = r.read_i16()?;
        let scale_factor = r.read_i16()?;
        let num_radials = r.read_i16()?;

        let mut radials = Vec::with_capacity(num_radials.max(0) as usize);
        for _ in 0..num_radials {
            let num_chunks = r.read_u16()? as usize;

            let mut start_raw = r.read_i16()?;
            if start_raw >= 3600 {
                start_raw -= 3600;
            }
            let start_angle_deg = start_raw as f32 * 0.1;

            let delta_raw = r.read_i16()?;
            let delta_angle_deg = delta_raw as f32 * 0.1;

            let data = r.read_bytes(num_chunks)?;

            radials.push(RadialData {
                start_angle_deg,
                delta_angle_deg,
                data,
            });
        }

        Ok(Self {
            packet_code,
            first_range_bin_index,
            num_range_bins,
            center_of_sweep_i,
            center_of_sweep_j,
            scale_factor,
            radials,
        })
    }

    pub(crate) fn write<W: Write>(&self, w: &mut Writer<W>) -> Result<()> {
        w.write_divider()?;
        // The length-of-data-layer field isn't reconstructed from content here; the source
        // itself writes a placeholder (`10000`) rather than the true encoded size.
        w.write_i32(10_000)?;

        w.write_i16(self.packet_code)?;
        w.write_i16(self.first_range_bin_index)?;
        w.write_i16(self.num_range_bins)?;
        w.write_i16(self.center_of_sweep_i)?;
        w.write_i16(self.center_of_sweep_j)?;
        w.write_i16(self.scale_factor)?;
        w.write_i16(self.radials.len() as i16)?;

        for radial in &self.radials {
            w.write_u16(radial.data.len() as u16)?;
            w.write_i16((radial.start_angle_deg * 10.0).round() as i16)?;
            w.write_i16((radial.delta_angle_deg * 10.0).round() as i16)?;
            w.write_bytes(&radial.data)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Reader, Writer};

    fn sample() -> RadialSetBlock {
        RadialSetBlock {
            packet_code: PACKET_DIGITAL_RADIAL,
            first_range_bin_index: 0,
            num_range_bins: 4,
            center_of_sweep_i: 500,
            center_of_sweep_j: 500,
            scale_factor: 1000,
            radials: vec![
                RadialData {
                    start_angle_deg: 10.0,
                    delta_angle_deg: 0.5,
                    data: vec![0x12, 0x34],
                },
                RadialData {
                    start_angle_deg: 10.5,
                    delta_angle_deg: 0.5,
                    data: vec![0x56],
                },
            ],
        }
    }

    #[test]
    fn round_trips_through_write_read() {
        let original = sample();
        let mut buf = Vec::new();
        {
            let mut w = Writer::new(&mut buf);
            original.write(&mut w).unwrap();
        }
        let mut r = Reader::new(buf.as_slice());
        let restored = RadialSetBlock::read(&mut r).unwrap();
        assert_eq!(restored.radials.len(), 2);
        assert_eq!(restored.radials[0].data, vec![0x12, 0x34]);
        assert_eq!(restored.radials[1].start_angle_deg, 10.5);
    }

    #[test]
    fn null_product_packet_is_rejected() {
        let mut buf = Vec::new();
        {
            let mut w = Writer::new(&mut buf);
            w.write_divider().unwrap();
            w.write_i32(10).unwrap();
            w.write_i16(PACKET_NULL).unwrap();
        }
        let mut r = Reader::new(buf.as_slice());
        assert!(matches!(RadialSetBlock::read(&mut r), Err(Error::NullProductUnsupported { .. })));
    }

    #[test]
    fn start_angle_wraps_above_3600() {
        let mut buf = Vec::new();
        {
            let mut w = Writer::new(&mut buf);
            w.write_divider().unwrap();
            w.write_i32(10).unwrap();
            w.write_i16(PACKET_RAW_RADIAL).unwrap();
            w.write_i16(0).unwrap();
            w.write_i16(1).unwrap();
            w.write_i16(0).unwrap();
            w.write_i16(0).unwrap();
            w.write_i16(1000).unwrap();
            w.write_i16(1).unwrap();
            w.write_u16(1).unwrap();
            w.write_i16(3605).unwrap();
            w.write_i16(5).unwrap();
            w.write_bytes(&[7]).unwrap();
        }
        let mut r = Reader::new(buf.as_slice());
        let block = RadialSetBlock::read(&mut r).unwrap();
        assert_eq!(block.radials[0].start_angle_deg, 0.5);
    }
}
