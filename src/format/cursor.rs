// Bounded read cursor over an encoded buffer.
//
// Every read checks the remaining length first and reports the absolute
// offset on failure, so decoders never index past the end of the input.

use super::error::DecodeError;
use super::varint;

#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current absolute offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Fail with `TruncatedInput` unless `needed` bytes remain.
    pub fn require(&self, needed: usize) -> Result<(), DecodeError> {
        if needed > self.remaining() {
            return Err(DecodeError::TruncatedInput {
                offset: self.pos,
                needed,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        self.require(1)?;
        let byte = self.data[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    pub fn read_u16_be(&mut self) -> Result<u16, DecodeError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        self.require(len)?;
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    /// Read a byte that must equal `expected`.
    pub fn expect_tag(&mut self, expected: u8) -> Result<(), DecodeError> {
        let offset = self.pos;
        let found = self.read_u8()?;
        if found != expected {
            return Err(DecodeError::UnexpectedTag {
                offset,
                expected,
                found,
            });
        }
        Ok(())
    }

    /// Read a 0/1 flag byte.
    pub fn read_flag(&mut self) -> Result<bool, DecodeError> {
        let offset = self.pos;
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(DecodeError::InvalidFlag { offset, value }),
        }
    }

    pub fn read_unsigned(&mut self) -> Result<u64, DecodeError> {
        let (val, len) = varint::read_unsigned(&self.data[self.pos..]).map_err(|source| {
            DecodeError::MalformedVarint {
                offset: self.pos,
                source,
            }
        })?;
        self.pos += len;
        Ok(val)
    }

    pub fn read_signed(&mut self) -> Result<i64, DecodeError> {
        self.read_unsigned().map(varint::zigzag_decode)
    }

    pub fn read_usize(&mut self) -> Result<usize, DecodeError> {
        let offset = self.pos;
        let val = self.read_unsigned()?;
        usize::try_from(val).map_err(|_| DecodeError::MalformedVarint {
            offset,
            source: varint::VarintError::Overlong,
        })
    }

    /// Split off the next `len` bytes as an independent cursor that keeps
    /// reporting absolute offsets.
    pub fn sub_cursor(&mut self, len: usize) -> Result<ByteCursor<'a>, DecodeError> {
        self.require(len)?;
        let sub = ByteCursor {
            data: &self.data[..self.pos + len],
            pos: self.pos,
        };
        self.pos += len;
        Ok(sub)
    }
}
