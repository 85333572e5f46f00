//! Message Header Block (§6.1), grounded in `rBlockMessageHeader.h`/`.cc`. Always the first 18
//! bytes of a NIDS product and, uniquely among NIDS blocks, carries no `-1` divider.

use crate::cursor::{Reader, Writer};
use crate::result::Result;
use std::io::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MessageHeader {
    pub message_code: i16,
    /// Modified Julian Date of transmission (1 Jan 1970 == 1).
    pub julian_date: i16,
    /// Seconds past midnight GMT.
    pub seconds_of_day: u32,
    /// Total message length in bytes, including this header.
    pub message_length: u32,
    pub source_id: i16,
    pub destination_id: i16,
    pub num_blocks: i16,
}

impl MessageHeader {
    pub(crate) fn read(r: &mut Reader<'_>) -> Result<Self> {
        Ok(Self {
            message_code: r.read_i16()?,
            julian_date: r.read_i16()?,
            seconds_of_day: r.read_u32()?,
            message_length: r.read_u32()?,
            source_id: r.read_i16()?,
            destination_id: r.read_i16()?,
            num_blocks: r.read_i16()?,
        })
    }

    pub(crate) fn write<W: Write>(&self, w: &mut Writer<W>) -> Result<()> {
        w.write_i16(self.message_code)?;
        w.write_i16(self.julian_date)?;
        w.write_u32(self.seconds_of_day)?;
        w.write_u32(self.message_length)?;
        w.write_i16(self.source_id)?;
        w.write_i16(self.destination_id)?;
        w.write_i16(self.num_blocks)?;
        Ok(())
    }

    pub const SIZE: usize = 18;
}
