/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ZByteIoError, ZByteReaderTrait, ZSeekFrom};

/// An in memory cursor over anything that can be viewed as bytes
///
/// This is the preferred reader for data already in memory,
/// e.g a file read with `std::fs::read` or a memory map.
pub struct ZCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ZCursor<T> {
    pub fn new(buffer: T) -> ZCursor<T> {
        ZCursor {
            stream:   buffer,
            position: 0
        }
    }
    #[inline(always)]
    fn remaining(&self) -> &[u8] {
        let bytes = self.stream.as_ref();
        let start = core::cmp::min(self.position, bytes.len());
        &bytes[start..]
    }
}

impl<T: AsRef<[u8]>> ZByteReaderTrait for ZCursor<T> {
    #[inline(always)]
    fn read_byte_no_error(&mut self) -> u8 {
        match self.remaining().first().copied() {
            Some(byte) => {
                self.position += 1;
                byte
            }
            None => 0
        }
    }
    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        let remaining = self.remaining();

        if remaining.len() < buf.len() {
            // In case of an error, the position is not moved
            return Err(ZByteIoError::NotEnoughBytes(buf.len(), remaining.len()));
        }
        buf.copy_from_slice(&remaining[..buf.len()]);
        self.position += buf.len();
        Ok(())
    }
    #[inline(always)]
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ZByteIoError> {
        self.read_exact_bytes(buf)
    }
    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        let remaining = self.remaining();
        let size = core::cmp::min(remaining.len(), buf.len());

        buf[..size].copy_from_slice(&remaining[..size]);
        self.position += size;

        Ok(size)
    }
    #[inline(always)]
    fn z_seek(&mut self, from: ZSeekFrom) -> Result<u64, ZByteIoError> {
        let new_position = match from {
            ZSeekFrom::Start(position) => i64::try_from(position)?,
            ZSeekFrom::End(position) => {
                let end = i64::try_from(self.stream.as_ref().len())?;
                end.checked_add(position)
                    .ok_or(ZByteIoError::SeekError("Seek position overflowed"))?
            }
            ZSeekFrom::Current(position) => {
                let current_position = i64::try_from(self.position)?;
                current_position
                    .checked_add(position)
                    .ok_or(ZByteIoError::SeekError("Seek position overflowed"))?
            }
        };
        // it's an error to seek before byte 0
        self.position = usize::try_from(new_position)?;

        Ok(self.position as u64)
    }
    #[inline(always)]
    fn is_eof(&mut self) -> Result<bool, ZByteIoError> {
        Ok(self.position >= self.stream.as_ref().len())
    }
    #[inline(always)]
    fn z_position(&mut self) -> Result<u64, ZByteIoError> {
        Ok(self.position as u64)
    }
}
