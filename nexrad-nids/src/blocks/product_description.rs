//! Product Description Block (§6.1), grounded in `rBlockProductDesc.h`/`.cc`.

use crate::cursor::{Reader, Writer};
use crate::result::Result;
use crate::time::{nids_from_time, time_from_nids};
use nexrad_model::datatype::{Llh, Time};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductDescription {
    pub location: Llh,
    pub product_code: i16,
    pub op_mode: i16,
    pub vcp: i16,
    pub seq_number: i16,
    pub vol_scan_num: i16,
    pub vol_start_time: Time,
    pub gen_time: Time,
    /// Product-dependent values 1-10 (1-based in the source, stored 0-based here).
    pub deps: [i16; 10],
    pub elevation_num: i16,
    pub data_thresholds: [i16; 16],
    pub num_maps: i16,
    pub symbology_offset: i32,
    pub graphic_offset: i32,
    pub tabular_offset: i32,
}

impl ProductDescription {
    pub const SIZE: usize = 102;

    /// 1-based dependent value accessor, matching `BlockProductDesc::getDep`/`setDep`.
    pub fn dep(&self, i: usize) -> i16 {
        self.deps[i - 1]
    }

    pub fn set_dep(&mut self, i: usize, value: i16) {
        self.deps[i - 1] = value;
    }

    pub(crate) fn read(r: &mut Reader<'_>) -> Result<Self> {
        r.check_divider()?;

        let lat_deg = r.read_i32()? as f64 / 1000.0;
        let lon_deg = r.read_i32()? as f64 / 1000.0;
        let height_km = r.read_i16()? as f64 / 3280.74;
        let location = Llh::new(lat_deg, lon_deg, height_km);

        let product_code = r.read_i16()?;
        let op_mode = r.read_i16()?;
        let vcp = r.read_i16()?;
        let seq_number = r.read_i16()?;
        let vol_scan_num = r.read_i16()?;

        let vol_scan_date = r.read_i16()?;
        let vol_scan_start_time = r.read_u32()?;
        let gen_date = r.read_i16()?;
        let gen_time_secs = r.read_u32()?;

        let vol_start_time = time_from_nids(vol_scan_date, vol_scan_start_time);
        let gen_time = if gen_date <= 1 {
            vol_start_time
        } else {
            time_from_nids(gen_date, gen_time_secs)
        };

        let mut deps = [0i16; 10];
        deps[0] = r.read_i16()?;
        deps[1] = r.read_i16()?;
        let elevation_num = r.read_i16()?;
        deps[2] = r.read_i16()?;

        let mut data_thresholds = [0i16; 16];
        for t in data_thresholds.iter_mut() {
            *t = r.read_i16()?;
        }

        for d in deps.iter_mut().skip(3) {
            *d = r.read_i16()?;
        }

        let num_maps = r.read_i16()?;
        let symbology_offset = r.read_i32()?;
        let graphic_offset = r.read_i32()?;
        let tabular_offset = r.read_i32()?;

        Ok(Self {
            location,
            product_code,
            op_mode,
            vcp,
            seq_number,
            vol_scan_num,
            vol_start_time,
            gen_time,
            deps,
            elevation_num,
            data_thresholds,
            num_maps,
            symbology_offset,
            graphic_offset,
            tabular_offset,
        })
    }

    pub(crate) fn write<W: Write>(&self, w: &mut Writer<W>) -> Result<()> {
        w.write_divider()?;

        w.write_i32((self.location.latitude_deg * 1000.0) as i32)?;
        w.write_i32((self.location.longitude_deg * 1000.0) as i32)?;
        w.write_i16((self.location.height_km * 3280.74) as i16)?;

        w.write_i16(self.product_code)?;
        w.write_i16(self.op_mode)?;
        w.write_i16(self.vcp)?;
        w.write_i16(self.seq_number)?;
        w.write_i16(self.vol_scan_num)?;

        let (vol_date, vol_secs) = nids_from_time(self.vol_start_time);
        w.write_i16(vol_date)?;
        w.write_u32(vol_secs)?;
        let (gen_date, gen_secs) = nids_from_time(self.gen_time);
        w.write_i16(gen_date)?;
        w.write_u32(gen_secs)?;

        w.write_i16(self.deps[0])?;
        w.write_i16(self.deps[1])?;
        w.write_i16(self.elevation_num)?;
        w.write_i16(self.deps[2])?;

        for t in self.data_thresholds.iter() {
            w.write_i16(*t)?;
        }

        for d in self.deps.iter().skip(3) {
            w.write_i16(*d)?;
        }

        w.write_i16(self.num_maps)?;
        w.write_i32(self.symbology_offset)?;
        w.write_i32(self.graphic_offset)?;
        w.write_i32(self.tabular_offset)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Reader, Writer};

    fn sample() -> ProductDescription {
        ProductDescription {
            location: Llh::new(35.333, -97.278, 0.417),
            product_code: 16,
            op_mode: 2,
            vcp: 212,
            seq_number: 1,
            vol_scan_num: 5,
            vol_start_time: time_from_nids(19299, 3600),
            gen_time: time_from_nids(19299, 3700),
            deps: [0, 0, 5, 0, 0, 0, 0, 0, 0, 0],
            elevation_num: 1,
            data_thresholds: [0; 16],
            num_maps: 0,
            symbology_offset: 102,
            graphic_offset: 0,
            tabular_offset: 0,
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
        assert_eq!(buf.len(), ProductDescription::SIZE);
        let mut r = Reader::new(buf.as_slice());
        let restored = ProductDescription::read(&mut r).unwrap();
        assert_eq!(restored.product_code, original.product_code);
        assert_eq!(restored.location.latitude_deg, original.location.latitude_deg);
        assert_eq!(restored.vol_start_time, original.vol_start_time);
    }

    #[test]
    fn dep_accessor_is_one_based() {
        let mut d = sample();
        d.set_dep(3, 42);
        assert_eq!(d.dep(3), 42);
        assert_eq!(d.elevation_num, 1);
    }
}
