//! Big-endian binary cursor mirroring the source's `StreamBuffer`: `readShort`/`readInt`/
//! `writeShort`/`writeInt` plus the NIDS block-divider convention (§6.1).
//!
//! Reading operates on an in-memory slice (as the source itself loads a whole product into a
//! `MemoryStreamBuffer` before parsing it) so blocks can peek ahead, e.g. to detect the BZIP2
//! magic bytes that mark a compressed symbology block.

use crate::result::{Error, Result};
use std::io::Write;

pub(crate) struct Reader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn remaining(&self) -> &'a [u8] {
        &self.data[self.position..]
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.position + len > self.data.len() {
            return Err(Error::CorruptMessageLength {
                expected: self.position + len,
                actual: self.data.len(),
            });
        }
        let slice = &self.data[self.position..self.position + len];
        self.position += len;
        Ok(slice)
    }

    pub(crate) fn peek(&self, len: usize) -> Option<&'a [u8]> {
        if self.position + len > self.data.len() {
            None
        } else {
            Some(&self.data[self.position..self.position + len])
        }
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub(crate) fn read_i16(&mut self) -> Result<i16> {
        let b = self.take(2)?;
        Ok(i16::from_be_bytes([b[0], b[1]]))
    }

    pub(crate) fn read_u16(&mut self) -> Result<u16> {
        Ok(self.read_i16()? as u16)
    }

    pub(crate) fn read_i32(&mut self) -> Result<i32> {
        let b = self.take(4)?;
        Ok(i32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub(crate) fn read_u32(&mut self) -> Result<u32> {
        Ok(self.read_i32()? as u32)
    }

    pub(crate) fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        Ok(self.take(len)?.to_vec())
    }

    /// Check and consume the -1 block divider every non-header block starts with (§6.1).
    pub(crate) fn check_divider(&mut self) -> Result<()> {
        let divider = self.read_i16()?;
        if divider != -1 {
            return Err(Error::InvalidBlockDivider {
                found: divider,
                offset: self.position - 2,
            });
        }
        Ok(())
    }

    pub(crate) fn seek_to(&mut self, position: usize) {
        self.position = position.min(self.data.len());
    }
}

pub(crate) struct Writer<W> {
    inner: W,
}

impl<W: Write> Writer<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner }
    }

    pub(crate) fn write_i16(&mut self, v: i16) -> Result<()> {
        self.inner.write_all(&v.to_be_bytes())?;
        Ok(())
    }

    pub(crate) fn write_u16(&mut self, v: u16) -> Result<()> {
        self.write_i16(v as i16)
    }

    pub(crate) fn write_i32(&mut self, v: i32) -> Result<()> {
        self.inner.write_all(&v.to_be_bytes())?;
        Ok(())
    }

    pub(crate) fn write_u32(&mut self, v: u32) -> Result<()> {
        self.write_i32(v as i32)
    }

    pub(crate) fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
        self.inner.write_all(buf)?;
        Ok(())
    }

    pub(crate) fn write_divider(&mut self) -> Result<()> {
        self.write_i16(-1)
    }

    pub(crate) fn into_inner(self) -> W {
        self.inner
    }
}
