//! Sparse property record encoding.
//!
//! A record is a sequence of `(column index: u16, payload)` entries in header column
//! order. Missing and null values have no entry.

use crate::header_writer::ColumnMeta;
use crate::value::{Attributes, PropertyValue};
use crate::ColumnType;
use byteorder::{ByteOrder, LittleEndian};
use std::borrow::Cow;
use std::mem::size_of;
use std::ops::{Deref, DerefMut};

/// Initial capacity of the property working buffer
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// Reusable working buffers.
#[derive(Debug, Default)]
pub struct BufferPool {
    free: Vec<Vec<u8>>,
}

/// Buffer borrowed from a [`BufferPool`], returned to the pool when dropped.
pub struct PooledBuffer<'a> {
    pool: &'a mut BufferPool,
    buf: Vec<u8>,
}

impl BufferPool {
    pub fn acquire(&mut self) -> PooledBuffer<'_> {
        let buf = self.free.pop().unwrap_or_default();
        PooledBuffer { pool: self, buf }
    }

    /// Number of buffers ready for reuse
    pub fn available(&self) -> usize {
        self.free.len()
    }
}

impl Deref for PooledBuffer<'_> {
    type Target = Vec<u8>;
    fn deref(&self) -> &Vec<u8> {
        &self.buf
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut Vec<u8> {
        &mut self.buf
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        let mut buf = std::mem::take(&mut self.buf);
        buf.clear();
        self.pool.free.push(buf);
    }
}

/// Encoded value of a single column
#[derive(Debug, PartialEq)]
enum Payload<'a> {
    Bool(bool),
    Int(i32),
    Double(f64),
    Text(Cow<'a, str>),
}

/// Fixed capacity output, every write checks the remaining space.
struct RecordWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl RecordWriter<'_> {
    fn reserve(&mut self, len: usize) -> Option<&mut [u8]> {
        let end = self.pos.checked_add(len)?;
        if end > self.buf.len() {
            return None;
        }
        let slice = &mut self.buf[self.pos..end];
        self.pos = end;
        Some(slice)
    }

    fn put_u8(&mut self, v: u8) -> Option<()> {
        self.reserve(1)?[0] = v;
        Some(())
    }

    fn put_u16(&mut self, v: u16) -> Option<()> {
        LittleEndian::write_u16(self.reserve(size_of::<u16>())?, v);
        Some(())
    }

    fn put_i32(&mut self, v: i32) -> Option<()> {
        LittleEndian::write_i32(self.reserve(size_of::<i32>())?, v);
        Some(())
    }

    fn put_f64(&mut self, v: f64) -> Option<()> {
        LittleEndian::write_f64(self.reserve(size_of::<f64>())?, v);
        Some(())
    }

    fn put_str(&mut self, v: &str) -> Option<()> {
        let len = u32::try_from(v.len()).ok()?;
        LittleEndian::write_u32(self.reserve(size_of::<u32>())?, len);
        self.reserve(v.len())?.copy_from_slice(v.as_bytes());
        Some(())
    }
}

/// Encode `entries` into `buf`. Returns the number of bytes written or `None` on overflow.
fn encode_record(buf: &mut [u8], entries: &[(u16, Payload)]) -> Option<usize> {
    let mut out = RecordWriter { buf, pos: 0 };
    for (i, payload) in entries {
        out.put_u16(*i)?;
        match payload {
            Payload::Bool(v) => out.put_u8(u8::from(*v))?,
            Payload::Int(v) => out.put_i32(*v)?,
            Payload::Double(v) => out.put_f64(*v)?,
            Payload::Text(v) => out.put_str(v)?,
        }
    }
    Some(out.pos)
}

fn payload<'a>(column: &ColumnMeta, value: &'a PropertyValue) -> Option<Payload<'a>> {
    let payload = match (column.type_, value) {
        (_, PropertyValue::Null) => return None,
        (ColumnType::Bool, PropertyValue::Bool(v)) => Payload::Bool(*v),
        (ColumnType::Int, PropertyValue::Int(v)) => Payload::Int(*v),
        // truncating like a Java `intValue()`
        (ColumnType::Int, PropertyValue::Long(v)) => Payload::Int(*v as i32),
        (ColumnType::Int, PropertyValue::Bool(v)) => Payload::Int(i32::from(*v)),
        (ColumnType::Double, PropertyValue::Double(v)) => Payload::Double(*v),
        (ColumnType::Double, PropertyValue::Int(v)) => Payload::Double(f64::from(*v)),
        (ColumnType::Double, PropertyValue::Long(v)) => Payload::Double(*v as f64),
        (
            ColumnType::String | ColumnType::DateTime,
            PropertyValue::String(v) | PropertyValue::DateTime(v),
        ) => Payload::Text(Cow::Borrowed(v.as_str())),
        (ColumnType::String | ColumnType::DateTime, v) => Payload::Text(Cow::Owned(v.to_string())),
        (type_, v) => {
            warn!(
                "Property `{}` with value {v:?} not encodable as {type_:?} - skipping",
                column.name
            );
            return None;
        }
    };
    if let Payload::Text(s) = &payload {
        if u32::try_from(s.len()).is_err() {
            warn!("Property `{}` exceeds maximum length - skipping", column.name);
            return None;
        }
    }
    Some(payload)
}

/// Encoder for the property records of a stream.
#[derive(Debug)]
pub struct PropertiesWriter {
    pool: BufferPool,
    initial_capacity: usize,
}

impl Default for PropertiesWriter {
    fn default() -> Self {
        PropertiesWriter::with_capacity(DEFAULT_BUFFER_SIZE)
    }
}

impl PropertiesWriter {
    /// Encoder starting each record with a working buffer of `initial_capacity` bytes
    pub fn with_capacity(initial_capacity: usize) -> Self {
        PropertiesWriter {
            pool: BufferPool::default(),
            initial_capacity: initial_capacity.max(1),
        }
    }

    pub fn pool(&self) -> &BufferPool {
        &self.pool
    }

    /// Encode the attribute values of one feature for `columns`.
    ///
    /// When the working buffer overflows, its capacity is doubled and the whole
    /// record is encoded again.
    pub fn encode(&mut self, columns: &[ColumnMeta], attributes: &Attributes) -> Vec<u8> {
        let entries = columns
            .iter()
            .enumerate()
            .filter_map(|(i, column)| {
                let value = attributes.get(&column.name)?;
                // Column count is checked when building the header
                let index = u16::try_from(i).ok()?;
                payload(column, value).map(|payload| (index, payload))
            })
            .collect::<Vec<_>>();

        let mut buf = self.pool.acquire();
        let mut capacity = self.initial_capacity;
        loop {
            buf.clear();
            buf.resize(capacity, 0);
            if let Some(len) = encode_record(&mut buf, &entries) {
                trace!(
                    "Encoded {} properties in {len} bytes",
                    entries.len()
                );
                return buf[..len].to_vec();
            }
            debug!(
                "Property buffer of {capacity} bytes too small - retrying with {} bytes",
                capacity * 2
            );
            capacity *= 2;
        }
    }
}
