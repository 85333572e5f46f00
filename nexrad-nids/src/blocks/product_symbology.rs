//! Product Symbology Block header (§6.1), grounded in `rBlockProductSymbology.h`/`.cc`.
//! This crate reads only the symbology block's header; the radial payload that follows is
//! owned by [`crate::blocks::radial_set::RadialSetBlock`].

use crate::cursor::{Reader, Writer};
use crate::result::Result;
use std::io::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProductSymbology {
    pub block_id: i16,
    pub block_length: i32,
    pub num_layers: i16,
}

impl ProductSymbology {
    pub const SIZE: usize = 10;

    pub(crate) fn read(r: &mut Reader<'_>) -> Result<Self> {
        r.check_divider()?;
        Ok(Self {
            block_id: r.read_i16()?,
            block_length: r.read_i32()?,
            num_layers: r.read_i16()?,
        })
    }

    pub(crate) fn write<W: Write>(&self, w: &mut Writer<W>) -> Result<()> {
        w.write_divider()?;
        w.write_i16(self.block_id)?;
        w.write_i32(self.block_length)?;
        w.write_i16(self.num_layers)?;
        Ok(())
    }
}
