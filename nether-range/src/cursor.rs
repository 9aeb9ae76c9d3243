//! Bounded write cursor over a caller-owned byte buffer

/// A write that would not fit in the remaining buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("write of {requested} bytes at offset {offset} exceeds buffer of {capacity} bytes")]
pub struct CursorOverflow {
    pub offset: usize,
    pub requested: usize,
    pub capacity: usize,
}

impl CursorOverflow {
    /// Offset the cursor would have reached had the write succeeded
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.requested
    }
}

/// Sequential writer that tracks how many bytes have been written
///
/// Never reads from the buffer and never writes past its end.
pub struct RangeCursor<'a> {
    buffer: &'a mut [u8],
    offset: usize,
}

impl<'a> RangeCursor<'a> {
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    /// Bytes written so far
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.offset
    }

    /// Copy bytes and advance
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), CursorOverflow> {
        let end = self.offset + bytes.len();
        let Some(dst) = self.buffer.get_mut(self.offset..end) else {
            return Err(CursorOverflow {
                offset: self.offset,
                requested: bytes.len(),
                capacity: self.buffer.len(),
            });
        };
        dst.copy_from_slice(bytes);
        self.offset = end;
        Ok(())
    }

    /// Write floats as little-endian f32 and advance
    pub fn write_f32s(&mut self, values: &[f32]) -> Result<(), CursorOverflow> {
        let requested = values.len() * size_of::<f32>();
        if requested > self.remaining() {
            return Err(CursorOverflow {
                offset: self.offset,
                requested,
                capacity: self.buffer.len(),
            });
        }
        for value in values {
            self.write_bytes(&value.to_le_bytes())?;
        }
        Ok(())
    }
}
