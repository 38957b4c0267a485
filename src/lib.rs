//! Streaming [FlatGeobuf](https://flatgeobuf.org/) encoder.
//!
//! Turns a sequence of features with typed attributes and optional geometries into
//! FlatGeobuf output. Features are written in the order they are added, without
//! spatial index.

#[macro_use]
extern crate log;

mod error;
#[allow(dead_code, unused_imports, non_snake_case)]
mod feature_generated;
mod feature_writer;
mod file_writer;
mod flatten;
mod geometry_writer;
#[allow(dead_code, unused_imports, non_snake_case)]
mod header_generated;
mod header_writer;
mod properties_writer;
mod schema;
mod value;

pub use error::{Error, Result};
pub use feature_generated::flat_geobuf::*;
pub use feature_writer::FeatureFrame;
pub use file_writer::*;
pub use flatten::{flatten, FeatureSchema, GEOMETRY_PROPERTY};
pub use geometry_writer::{GeometryPart, GeometryWriter};
pub use header_generated::flat_geobuf::*;
pub use header_writer::{ColumnMeta, HeaderMeta, DEFAULT_SRID, MAX_COLUMNS};
pub use properties_writer::{BufferPool, PooledBuffer, PropertiesWriter, DEFAULT_BUFFER_SIZE};
pub use schema::*;
pub use value::*;

pub const VERSION: u8 = 3;
pub const MAGIC_BYTES: [u8; 8] = [b'f', b'g', b'b', VERSION, b'f', b'g', b'b', 0];

/// Media type of FlatGeobuf content
pub const MEDIA_TYPE: &str = "application/flatgeobuf";
/// File extension of FlatGeobuf files
pub const FILE_EXTENSION: &str = "fgb";
