#![allow(dead_code)]

use flatgeobuf_stream::*;
use std::io;

/// Property value decoded from a property record
#[derive(Debug, PartialEq)]
pub enum Decoded {
    Bool(bool),
    Int(i32),
    Double(f64),
    Text(String),
}

/// Split a stream into its header and feature frames (including size prefix).
pub fn split_stream(buf: &[u8]) -> (Header, Vec<&[u8]>) {
    assert_eq!(&buf[0..8], &MAGIC_BYTES);
    let header_size = u32::from_le_bytes(buf[8..12].try_into().unwrap()) as usize;
    let header = size_prefixed_root_as_header(&buf[8..12 + header_size]).unwrap();
    let mut frames = Vec::new();
    let mut offset = 12 + header_size;
    while offset < buf.len() {
        let size = u32::from_le_bytes(buf[offset..offset + 4].try_into().unwrap()) as usize;
        assert!(offset + 4 + size <= buf.len(), "truncated frame");
        frames.push(&buf[offset..offset + 4 + size]);
        offset += 4 + size;
    }
    assert_eq!(offset, buf.len());
    (header, frames)
}

pub fn column_types(header: &Header) -> Vec<ColumnType> {
    header
        .columns()
        .map(|cols| cols.iter().map(|col| col.type_()).collect())
        .unwrap_or_default()
}

pub fn decode_properties(types: &[ColumnType], bytes: &[u8]) -> Vec<(u16, Decoded)> {
    let mut entries = Vec::new();
    let mut offset = 0;
    while offset < bytes.len() {
        let i = u16::from_le_bytes(bytes[offset..offset + 2].try_into().unwrap());
        offset += 2;
        let value = match types[i as usize] {
            ColumnType::Bool => {
                offset += 1;
                Decoded::Bool(bytes[offset - 1] != 0)
            }
            ColumnType::Int => {
                offset += 4;
                Decoded::Int(i32::from_le_bytes(bytes[offset - 4..offset].try_into().unwrap()))
            }
            ColumnType::Double => {
                offset += 8;
                Decoded::Double(f64::from_le_bytes(bytes[offset - 8..offset].try_into().unwrap()))
            }
            ColumnType::String | ColumnType::DateTime => {
                let len = u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap()) as usize;
                offset += 4 + len;
                Decoded::Text(String::from_utf8(bytes[offset - len..offset].to_vec()).unwrap())
            }
            other => panic!("unexpected column type {other:?}"),
        };
        entries.push((i, value));
    }
    entries
}

/// Output failing as soon as more than `limit` bytes would be written
pub struct LimitedWriter {
    pub written: Vec<u8>,
    pub limit: usize,
}

impl LimitedWriter {
    pub fn new(limit: usize) -> Self {
        LimitedWriter {
            written: Vec::new(),
            limit,
        }
    }
}

impl io::Write for LimitedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written.len() + buf.len() > self.limit {
            return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
