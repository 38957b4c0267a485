use crate::error::{Error, Result};
use crate::{
    Column, ColumnArgs, ColumnType, Crs, CrsArgs, GeometryType, Header, HeaderArgs, MAGIC_BYTES,
};
use flatbuffers::FlatBufferBuilder;
use std::collections::HashSet;
use std::io::Write;

/// Default spatial reference system (WGS 84)
pub const DEFAULT_SRID: i32 = 4326;

/// Column indices are u16 in property records
pub const MAX_COLUMNS: usize = u16::MAX as usize + 1;

/// Column declaration of a FlatGeobuf header
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnMeta {
    pub name: String,
    pub type_: ColumnType,
    pub title: Option<String>,
    pub description: Option<String>,
    pub nullable: bool,
    pub unique: bool,
}

impl ColumnMeta {
    pub fn new(name: &str, type_: ColumnType) -> Self {
        ColumnMeta {
            name: name.to_string(),
            type_,
            title: None,
            description: None,
            nullable: true,
            unique: false,
        }
    }
}

/// Stream level metadata, written once before any feature.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderMeta {
    pub name: Option<String>,
    /// Number of features in the stream (0 = unknown)
    pub features_count: u64,
    pub geometry_type: GeometryType,
    /// EPSG code (0 = no CRS information)
    pub srid: i32,
    pub has_z: bool,
    pub columns: Vec<ColumnMeta>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Default for HeaderMeta {
    fn default() -> Self {
        HeaderMeta {
            name: None,
            features_count: 0,
            geometry_type: GeometryType::Unknown,
            srid: DEFAULT_SRID,
            has_z: false,
            columns: Vec::new(),
            title: None,
            description: None,
        }
    }
}

impl HeaderMeta {
    /// Index of column `name`
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|col| col.name == name)
    }

    /// Check that every column is addressable and has a unique name.
    pub fn validate_columns(&self) -> Result<()> {
        if self.columns.len() > MAX_COLUMNS {
            return Err(Error::TooManyColumns(self.columns.len()));
        }
        let mut names = HashSet::with_capacity(self.columns.len());
        for col in &self.columns {
            if !names.insert(col.name.as_str()) {
                return Err(Error::DuplicateColumn(col.name.clone()));
            }
        }
        Ok(())
    }

    /// Write magic bytes and the size prefixed header.
    ///
    /// `fbb` is reset before returning, so the builder can be reused for features.
    pub fn write(&self, out: &mut impl Write, fbb: &mut FlatBufferBuilder) -> Result<()> {
        let buf = self.to_bytes(fbb);
        out.write_all(&MAGIC_BYTES)?;
        let result = out.write_all(buf);
        fbb.reset();
        Ok(result?)
    }

    fn to_bytes<'a>(&self, fbb: &'a mut FlatBufferBuilder) -> &'a [u8] {
        fbb.reset();
        let columns = self
            .columns
            .iter()
            .map(|col| {
                let col_args = ColumnArgs {
                    name: Some(fbb.create_string(&col.name)),
                    type_: col.type_,
                    title: col.title.as_deref().map(|v| fbb.create_string(v)),
                    description: col.description.as_deref().map(|v| fbb.create_string(v)),
                    nullable: col.nullable,
                    unique: col.unique,
                    ..Default::default()
                };
                Column::create(fbb, &col_args)
            })
            .collect::<Vec<_>>();
        let crs = if self.srid != 0 {
            let crs_args = CrsArgs {
                code: self.srid,
                ..Default::default()
            };
            Some(Crs::create(fbb, &crs_args))
        } else {
            None
        };
        let header_args = HeaderArgs {
            name: self.name.as_deref().map(|v| fbb.create_string(v)),
            geometry_type: self.geometry_type,
            has_z: self.has_z,
            columns: Some(fbb.create_vector(&columns)),
            features_count: self.features_count,
            // No spatial index
            index_node_size: 0,
            crs,
            title: self.title.as_deref().map(|v| fbb.create_string(v)),
            description: self.description.as_deref().map(|v| fbb.create_string(v)),
            ..Default::default()
        };
        let header = Header::create(fbb, &header_args);
        fbb.finish_size_prefixed(header, None);
        fbb.finished_data()
    }
}
