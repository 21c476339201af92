use std::ops::Range;

use super::error::IforceError;
use super::layout;
use crate::protocols::common::reader::{optional_unless, signed_u8, signed_u16};

pub struct IforceReader<'a> {
    payload: &'a [u8],
}

impl<'a> IforceReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), IforceError> {
        if self.payload.len() < needed {
            return Err(self.too_short(needed));
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, IforceError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or_else(|| self.too_short(offset + 1))
    }

    pub fn read_i8(&self, offset: usize) -> Result<i8, IforceError> {
        self.read_u8(offset).map(signed_u8)
    }

    pub fn read_u16_le(&self, range: Range<usize>) -> Result<u16, IforceError> {
        self.read_pair(range).map(u16::from_le_bytes)
    }

    pub fn read_u16_be(&self, range: Range<usize>) -> Result<u16, IforceError> {
        self.read_pair(range).map(u16::from_be_bytes)
    }

    pub fn read_i16_le(&self, range: Range<usize>) -> Result<i16, IforceError> {
        self.read_u16_le(range).map(signed_u16)
    }

    /// Read a little-endian parameter address; the reserved address maps to `None`.
    pub fn read_address(&self, range: Range<usize>) -> Result<Option<u16>, IforceError> {
        self.read_u16_le(range)
            .map(|address| optional_unless(address, layout::NO_PARAMETER))
    }

    pub fn read_slice(&self, range: Range<usize>) -> Result<&'a [u8], IforceError> {
        self.payload
            .get(range.clone())
            .ok_or_else(|| self.too_short(range.end))
    }

    fn read_pair(&self, range: Range<usize>) -> Result<[u8; 2], IforceError> {
        let end = range.end;
        self.read_slice(range)?
            .try_into()
            .map_err(|_| self.too_short(end))
    }

    fn too_short(&self, needed: usize) -> IforceError {
        IforceError::TooShort {
            needed,
            actual: self.payload.len(),
        }
    }
}
