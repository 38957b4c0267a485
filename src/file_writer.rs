use crate::error::{Error, Result};
use crate::feature_writer::FeatureFrame;
use crate::flatten::{flatten, FeatureSchema};
use crate::geometry_writer::{GeometryPart, GeometryWriter};
use crate::header_writer::{ColumnMeta, HeaderMeta, MAX_COLUMNS};
use crate::properties_writer::{PropertiesWriter, DEFAULT_BUFFER_SIZE};
use crate::schema::{SchemaProperty, TargetCrs};
use crate::value::Attributes;
use crate::ColumnType;
use flatbuffers::FlatBufferBuilder;
use geozero::GeozeroGeometry;
use std::io::Write;

/// Streaming FlatGeobuf writer
///
/// Every feature is encoded and written to the output as soon as it is added,
/// in the order it is added. No spatial index is written.
///
/// # Usage example:
///
/// ```
/// use flatgeobuf_stream::*;
/// use geozero::wkt::Wkt;
///
/// # fn stream_fgb() -> std::result::Result<(), Box<dyn std::error::Error>> {
/// let schema = [
///     SchemaProperty::new("name", PropertyType::String),
///     SchemaProperty::geometry("geometry", SimpleFeatureGeometry::Point),
/// ];
/// let mut fgb = FgbWriter::create(Vec::new(), &schema, None)?;
/// fgb.open()?;
/// let attributes = Attributes::from([("name".to_string(), "Zurich".into())]);
/// fgb.write_feature(&attributes, Some(&Wkt("POINT(8.54 47.37)")))?;
/// fgb.close()?;
/// let bytes = fgb.into_inner();
/// assert_eq!(&bytes[0..8], &MAGIC_BYTES);
/// # Ok(())
/// # }
/// # stream_fgb().unwrap();
/// ```
pub struct FgbWriter<'a, W: Write> {
    out: W,
    fbb: FlatBufferBuilder<'a>,
    header: HeaderMeta,
    prop_writer: PropertiesWriter,
    geom_writer: GeometryWriter,
    /// Attributes of the feature processed by geozero
    pending: Attributes,
    state: WriterState,
    features_written: u64,
}

/// Lifecycle of a [`FgbWriter`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriterState {
    /// Header not written yet, columns can still be added
    Unopened,
    /// Header written, ready for features
    HeaderWritten,
    Closed,
    /// Output failed, the stream is truncated after the last complete frame
    Failed,
}

/// Options for FlatGeobuf writer
#[derive(Debug)]
pub struct FgbWriterOptions<'a> {
    /// Dataset name
    pub name: Option<&'a str>,
    // Dataset title
    pub title: Option<&'a str>,
    // Dataset description (intended for free form long text)
    pub description: Option<&'a str>,
    /// Number of features in the stream, if known in advance (0 = unknown)
    pub features_count: u64,
    /// Initial capacity of the property buffer in bytes
    pub property_buffer_size: usize,
    /// Maximum number of elements expanded for array properties of nested feature types
    pub max_multiplicity: usize,
}

impl Default for FgbWriterOptions<'_> {
    fn default() -> Self {
        FgbWriterOptions {
            name: None,
            title: None,
            description: None,
            features_count: 0,
            property_buffer_size: DEFAULT_BUFFER_SIZE,
            max_multiplicity: 1,
        }
    }
}

impl<'a, W: Write> FgbWriter<'a, W> {
    /// Configure a FlatGeobuf stream from a flat schema with default options
    pub fn create(out: W, schema: &[SchemaProperty], crs: Option<&TargetCrs>) -> Result<Self> {
        FgbWriter::create_with_options(out, schema, crs, FgbWriterOptions::default())
    }

    /// Configure a FlatGeobuf stream from a flat schema
    ///
    /// # Usage example:
    ///
    /// ```
    /// # use flatgeobuf_stream::*;
    /// let schema = [
    ///     SchemaProperty::new("fid", PropertyType::Integer).with_role(Role::Id),
    ///     SchemaProperty::geometry("geometry", SimpleFeatureGeometry::MultiPolygon),
    /// ];
    /// let fgb = FgbWriter::create_with_options(
    ///     Vec::new(),
    ///     &schema,
    ///     Some(&TargetCrs::epsg(25832)),
    ///     FgbWriterOptions {
    ///         name: Some("countries"),
    ///         description: Some("Country polygons"),
    ///         features_count: 250,
    ///         ..Default::default()
    ///     },
    /// )
    /// .unwrap();
    /// assert_eq!(fgb.header().geometry_type, GeometryType::MultiPolygon);
    /// ```
    pub fn create_with_options(
        out: W,
        schema: &[SchemaProperty],
        crs: Option<&TargetCrs>,
        options: FgbWriterOptions,
    ) -> Result<Self> {
        let mut header = HeaderMeta::from_schema(schema, crs)?;
        header.name = options.name.map(str::to_string);
        header.title = options.title.map(str::to_string);
        header.description = options.description.map(str::to_string);
        header.features_count = options.features_count;
        FgbWriter::with_header(out, header, options.property_buffer_size)
    }

    /// Configure a FlatGeobuf stream from a nested feature type
    ///
    /// Nested properties are flattened to dotted column names, see [`flatten`].
    pub fn create_from_feature_type(
        out: W,
        feature_type: &FeatureSchema,
        crs: Option<&TargetCrs>,
        options: FgbWriterOptions,
    ) -> Result<Self> {
        let schema = flatten(feature_type, options.max_multiplicity);
        let options = FgbWriterOptions {
            name: options.name.or(Some(feature_type.name.as_str())),
            ..options
        };
        FgbWriter::create_with_options(out, &schema, crs, options)
    }

    /// Configure a FlatGeobuf stream from prepared header metadata
    ///
    /// Fails if the header has more than [`MAX_COLUMNS`] columns or repeats a column name.
    pub fn with_header(out: W, header: HeaderMeta, property_buffer_size: usize) -> Result<Self> {
        header.validate_columns()?;
        let geom_writer = GeometryWriter::new(header.has_z);
        Ok(FgbWriter {
            out,
            fbb: FlatBufferBuilder::new(),
            header,
            prop_writer: PropertiesWriter::with_capacity(property_buffer_size),
            geom_writer,
            pending: Attributes::new(),
            state: WriterState::Unopened,
            features_written: 0,
        })
    }

    /// Add a new column.
    ///
    /// Only possible before the header is written. Column names must be unique.
    ///
    /// # Usage example:
    ///
    /// ```
    /// # use flatgeobuf_stream::*;
    /// # let mut fgb = FgbWriter::create(Vec::new(), &[], None).unwrap();
    /// fgb.add_column("fid", ColumnType::Int, |col| {
    ///     col.nullable = false;
    /// })
    /// .unwrap();
    /// ```
    pub fn add_column<F>(&mut self, name: &str, col_type: ColumnType, cfgfn: F) -> Result<()>
    where
        F: FnOnce(&mut ColumnMeta),
    {
        self.expect_state(WriterState::Unopened, "columns must be added before `open`")?;
        if self.header.columns.len() >= MAX_COLUMNS {
            return Err(Error::TooManyColumns(self.header.columns.len() + 1));
        }
        if self.header.column_index(name).is_some() {
            return Err(Error::DuplicateColumn(name.to_string()));
        }
        let mut col = ColumnMeta::new(name, col_type);
        cfgfn(&mut col);
        self.header.columns.push(col);
        Ok(())
    }

    pub fn header(&self) -> &HeaderMeta {
        &self.header
    }

    pub fn state(&self) -> WriterState {
        self.state
    }

    /// Number of features written so far
    pub fn features_written(&self) -> u64 {
        self.features_written
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Unwrap the output, also possible in failed state
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write magic bytes and header.
    pub fn open(&mut self) -> Result<()> {
        self.expect_state(WriterState::Unopened, "`open` called twice")?;
        info!(
            "Writing FlatGeobuf header: {:?} with {} columns, SRID {}",
            self.header.geometry_type,
            self.header.columns.len(),
            self.header.srid
        );
        let result = self
            .header
            .write(&mut self.out, &mut self.fbb)
            .and_then(|_| Ok(self.out.flush()?));
        self.commit(result)?;
        self.state = WriterState::HeaderWritten;
        Ok(())
    }

    /// Encode a feature and write it to the output.
    ///
    /// The frame is completely written when this method returns. A geometry which
    /// can't be encoded is rejected before anything is written.
    pub fn write_feature<G: GeozeroGeometry>(
        &mut self,
        attributes: &Attributes,
        geometry: Option<&G>,
    ) -> Result<()> {
        self.expect_state(WriterState::HeaderWritten, "`write_feature` outside of open stream")?;
        let geometry = match geometry {
            Some(geom) => {
                GeometryWriter::encode(geom, self.header.geometry_type, self.header.has_z)?
            }
            None => None,
        };
        self.write_frame(attributes, geometry.as_ref())
    }

    /// Encode a feature without geometry and write it to the output.
    pub fn write_feature_without_geometry(&mut self, attributes: &Attributes) -> Result<()> {
        self.expect_state(WriterState::HeaderWritten, "`write_feature` outside of open stream")?;
        self.write_frame(attributes, None)
    }

    /// Finish the stream.
    ///
    /// FlatGeobuf has no trailer, the output is flushed.
    pub fn close(&mut self) -> Result<()> {
        self.expect_state(WriterState::HeaderWritten, "`close` without open stream")?;
        let result = self.out.flush().map_err(Error::from);
        self.commit(result)?;
        if self.header.features_count > 0 && self.header.features_count != self.features_written {
            warn!(
                "Header declares {} features, but {} were written",
                self.header.features_count, self.features_written
            );
        }
        info!("{} features written", self.features_written);
        self.state = WriterState::Closed;
        Ok(())
    }

    fn write_frame(&mut self, attributes: &Attributes, geometry: Option<&GeometryPart>) -> Result<()> {
        let properties = self.prop_writer.encode(&self.header.columns, attributes);
        let frame = FeatureFrame {
            geometry,
            properties: &properties,
        };
        let result = frame
            .write(&mut self.out, &mut self.fbb)
            .and_then(|size| {
                self.out.flush()?;
                Ok(size)
            });
        let size = self.commit(result)?;
        self.features_written += 1;
        trace!("Feature {} written ({size} bytes)", self.features_written);
        Ok(())
    }

    fn expect_state(&self, expected: WriterState, msg: &'static str) -> Result<()> {
        match self.state {
            WriterState::Failed => Err(Error::Aborted),
            state if state == expected => Ok(()),
            _ => Err(Error::InvalidState(msg)),
        }
    }

    /// Abort the stream on output errors
    fn commit<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            warn!("Writing FlatGeobuf output failed - aborting stream: {e}");
            self.state = WriterState::Failed;
        }
        result
    }
}

mod geozero_api {
    use crate::value::PropertyValue;
    use crate::{FgbWriter, WriterState};
    use geozero::error::GeozeroError;
    use geozero::{
        error::Result, ColumnValue, CoordDimensions, FeatureProcessor, GeomProcessor,
        GeozeroDatasource, PropertyProcessor,
    };
    use std::io::Write;

    impl<W: Write> FgbWriter<'_, W> {
        /// Add features from a geozero datasource.
        ///
        /// # Usage example:
        ///
        /// ```
        /// # use flatgeobuf_stream::*;
        /// use geozero::geojson::GeoJson;
        /// let schema = [
        ///     SchemaProperty::new("fid", PropertyType::Integer),
        ///     SchemaProperty::new("name", PropertyType::String),
        ///     SchemaProperty::geometry("geometry", SimpleFeatureGeometry::Point),
        /// ];
        /// let mut fgb = FgbWriter::create(Vec::new(), &schema, None).unwrap();
        /// fgb.open().unwrap();
        /// let geojson = GeoJson(r#"{"type": "Feature", "properties": {"fid": 42, "name": "New Zealand"}, "geometry": {"type": "Point", "coordinates": [1, 1]}}"#);
        /// fgb.add_feature(geojson).unwrap();
        /// assert_eq!(fgb.features_written(), 1);
        /// ```
        pub fn add_feature(&mut self, mut feature: impl GeozeroDatasource) -> Result<()> {
            feature.process(self)
        }

        fn check_open(&self) -> Result<()> {
            if self.state == WriterState::HeaderWritten {
                Ok(())
            } else {
                Err(GeozeroError::Feature(format!(
                    "Writer not ready for features ({:?})",
                    self.state
                )))
            }
        }
    }

    impl<W: Write> FeatureProcessor for FgbWriter<'_, W> {
        fn feature_begin(&mut self, _idx: u64) -> Result<()> {
            self.check_open()?;
            self.pending.clear();
            self.geom_writer.reset();
            Ok(())
        }
        fn feature_end(&mut self, _idx: u64) -> Result<()> {
            self.check_open()?;
            let attributes = std::mem::take(&mut self.pending);
            let result = self
                .geom_writer
                .finish(self.header.geometry_type)
                .and_then(|geometry| self.write_frame(&attributes, geometry.as_ref()));
            self.pending = attributes;
            result.map_err(|e| GeozeroError::Feature(e.to_string()))
        }
    }

    impl<W: Write> PropertyProcessor for FgbWriter<'_, W> {
        fn property(&mut self, i: usize, colname: &str, colval: &ColumnValue) -> Result<bool> {
            if self.header.column_index(colname).is_none() {
                debug!("Undefined property index {i}, column: `{colname}` - skipping");
                return Ok(false);
            }
            self.pending
                .insert(colname.to_string(), PropertyValue::from(colval));
            Ok(false)
        }
    }

    // Delegate GeomProcessor to self.geom_writer
    impl<W: Write> GeomProcessor for FgbWriter<'_, W> {
        fn dimensions(&self) -> CoordDimensions {
            self.geom_writer.dimensions()
        }
        fn xy(&mut self, x: f64, y: f64, idx: usize) -> Result<()> {
            self.geom_writer.xy(x, y, idx)
        }
        fn coordinate(
            &mut self,
            x: f64,
            y: f64,
            z: Option<f64>,
            m: Option<f64>,
            t: Option<f64>,
            tm: Option<u64>,
            idx: usize,
        ) -> Result<()> {
            self.geom_writer.coordinate(x, y, z, m, t, tm, idx)
        }
        fn point_begin(&mut self, idx: usize) -> Result<()> {
            self.geom_writer.point_begin(idx)
        }
        fn point_end(&mut self, idx: usize) -> Result<()> {
            self.geom_writer.point_end(idx)
        }
        fn multipoint_begin(&mut self, size: usize, idx: usize) -> Result<()> {
            self.geom_writer.multipoint_begin(size, idx)
        }
        fn multipoint_end(&mut self, idx: usize) -> Result<()> {
            self.geom_writer.multipoint_end(idx)
        }
        fn linestring_begin(&mut self, tagged: bool, size: usize, idx: usize) -> Result<()> {
            self.geom_writer.linestring_begin(tagged, size, idx)
        }
        fn linestring_end(&mut self, tagged: bool, idx: usize) -> Result<()> {
            self.geom_writer.linestring_end(tagged, idx)
        }
        fn multilinestring_begin(&mut self, size: usize, idx: usize) -> Result<()> {
            self.geom_writer.multilinestring_begin(size, idx)
        }
        fn multilinestring_end(&mut self, idx: usize) -> Result<()> {
            self.geom_writer.multilinestring_end(idx)
        }
        fn polygon_begin(&mut self, tagged: bool, size: usize, idx: usize) -> Result<()> {
            self.geom_writer.polygon_begin(tagged, size, idx)
        }
        fn polygon_end(&mut self, tagged: bool, idx: usize) -> Result<()> {
            self.geom_writer.polygon_end(tagged, idx)
        }
        fn multipolygon_begin(&mut self, size: usize, idx: usize) -> Result<()> {
            self.geom_writer.multipolygon_begin(size, idx)
        }
        fn multipolygon_end(&mut self, idx: usize) -> Result<()> {
            self.geom_writer.multipolygon_end(idx)
        }
        fn geometrycollection_begin(&mut self, size: usize, idx: usize) -> Result<()> {
            self.geom_writer.geometrycollection_begin(size, idx)
        }
        fn geometrycollection_end(&mut self, idx: usize) -> Result<()> {
            self.geom_writer.geometrycollection_end(idx)
        }
        fn circularstring_begin(&mut self, size: usize, idx: usize) -> Result<()> {
            self.geom_writer.circularstring_begin(size, idx)
        }
        fn compoundcurve_begin(&mut self, size: usize, idx: usize) -> Result<()> {
            self.geom_writer.compoundcurve_begin(size, idx)
        }
        fn curvepolygon_begin(&mut self, size: usize, idx: usize) -> Result<()> {
            self.geom_writer.curvepolygon_begin(size, idx)
        }
        fn multicurve_begin(&mut self, size: usize, idx: usize) -> Result<()> {
            self.geom_writer.multicurve_begin(size, idx)
        }
        fn multisurface_begin(&mut self, size: usize, idx: usize) -> Result<()> {
            self.geom_writer.multisurface_begin(size, idx)
        }
        fn triangle_begin(&mut self, tagged: bool, size: usize, idx: usize) -> Result<()> {
            self.geom_writer.triangle_begin(tagged, size, idx)
        }
        fn polyhedralsurface_begin(&mut self, size: usize, idx: usize) -> Result<()> {
            self.geom_writer.polyhedralsurface_begin(size, idx)
        }
        fn tin_begin(&mut self, size: usize, idx: usize) -> Result<()> {
            self.geom_writer.tin_begin(size, idx)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{PropertyType, SimpleFeatureGeometry};
    use crate::{size_prefixed_root_as_header, GeometryType, MAGIC_BYTES};
    use std::io;

    fn schema() -> Vec<SchemaProperty> {
        vec![
            SchemaProperty::new("name", PropertyType::String),
            SchemaProperty::geometry("geometry", SimpleFeatureGeometry::Point),
        ]
    }

    /// Output accepting `limit` bytes
    struct LimitedWriter {
        written: Vec<u8>,
        limit: usize,
    }

    impl Write for LimitedWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written.len() + buf.len() > self.limit {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "sink full"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn lifecycle() -> Result<()> {
        let mut fgb = FgbWriter::create(Vec::new(), &schema(), None)?;
        assert_eq!(fgb.state(), WriterState::Unopened);
        assert!(fgb.get_ref().is_empty());
        fgb.open()?;
        assert_eq!(fgb.state(), WriterState::HeaderWritten);
        let header_len = fgb.get_ref().len();
        assert_eq!(&fgb.get_ref()[0..8], &MAGIC_BYTES);

        fgb.write_feature_without_geometry(&Attributes::new())?;
        assert!(fgb.get_ref().len() > header_len);
        assert_eq!(fgb.features_written(), 1);
        fgb.close()?;
        assert_eq!(fgb.state(), WriterState::Closed);
        Ok(())
    }

    #[test]
    fn out_of_order() -> Result<()> {
        let mut fgb = FgbWriter::create(Vec::new(), &schema(), None)?;
        assert!(matches!(
            fgb.write_feature_without_geometry(&Attributes::new()),
            Err(Error::InvalidState(_))
        ));
        assert!(matches!(fgb.close(), Err(Error::InvalidState(_))));
        assert!(fgb.get_ref().is_empty());

        fgb.open()?;
        let len = fgb.get_ref().len();
        assert!(matches!(fgb.open(), Err(Error::InvalidState(_))));
        assert!(matches!(
            fgb.add_column("late", ColumnType::Int, |_| {}),
            Err(Error::InvalidState(_))
        ));
        fgb.close()?;
        assert!(matches!(
            fgb.write_feature_without_geometry(&Attributes::new()),
            Err(Error::InvalidState(_))
        ));
        assert!(matches!(fgb.close(), Err(Error::InvalidState(_))));
        assert_eq!(fgb.get_ref().len(), len);
        Ok(())
    }

    #[test]
    fn add_column_before_open() -> Result<()> {
        let mut fgb = FgbWriter::create(Vec::new(), &[], None)?;
        fgb.add_column("fid", ColumnType::Int, |col| {
            col.nullable = false;
            col.unique = true;
        })?;
        fgb.open()?;
        let out = fgb.into_inner();
        let header = size_prefixed_root_as_header(&out[8..]).unwrap();
        let columns = header.columns().unwrap();
        assert_eq!(columns.len(), 1);
        assert_eq!(columns.get(0).name(), "fid");
        assert!(!columns.get(0).nullable());
        assert!(columns.get(0).unique());
        Ok(())
    }

    #[test]
    fn duplicate_column_rejected() -> Result<()> {
        let mut fgb = FgbWriter::create(Vec::new(), &[], None)?;
        fgb.add_column("a", ColumnType::String, |_| {})?;
        assert!(matches!(
            fgb.add_column("a", ColumnType::Int, |_| {}),
            Err(Error::DuplicateColumn(name)) if name == "a"
        ));
        assert_eq!(fgb.header().columns.len(), 1);
        assert_eq!(fgb.state(), WriterState::Unopened);
        Ok(())
    }

    #[test]
    fn header_columns_checked() {
        let header = HeaderMeta {
            columns: (0..MAX_COLUMNS + 4)
                .map(|i| ColumnMeta::new(&format!("c{i}"), ColumnType::Int))
                .collect(),
            ..Default::default()
        };
        assert!(matches!(
            FgbWriter::with_header(Vec::new(), header, DEFAULT_BUFFER_SIZE),
            Err(Error::TooManyColumns(65540))
        ));

        let header = HeaderMeta {
            columns: vec![
                ColumnMeta::new("a", ColumnType::String),
                ColumnMeta::new("a", ColumnType::Int),
            ],
            ..Default::default()
        };
        assert!(matches!(
            FgbWriter::with_header(Vec::new(), header, DEFAULT_BUFFER_SIZE),
            Err(Error::DuplicateColumn(_))
        ));
    }

    #[test]
    fn last_addressable_column() -> Result<()> {
        let header = HeaderMeta {
            columns: (0..MAX_COLUMNS)
                .map(|i| ColumnMeta::new(&format!("c{i}"), ColumnType::Int))
                .collect(),
            ..Default::default()
        };
        let mut fgb = FgbWriter::with_header(Vec::new(), header, DEFAULT_BUFFER_SIZE)?;
        assert!(matches!(
            fgb.add_column("extra", ColumnType::Int, |_| {}),
            Err(Error::TooManyColumns(65537))
        ));
        fgb.open()?;
        let header_len = fgb.get_ref().len();
        let attributes = Attributes::from([("c65535".to_string(), 7.into())]);
        fgb.write_feature_without_geometry(&attributes)?;
        let out = fgb.into_inner();
        let feature = crate::size_prefixed_root_as_feature(&out[header_len..]).unwrap();
        assert_eq!(
            feature.properties().map(|p| p.bytes()),
            Some(&[0xff, 0xff, 7, 0, 0, 0][..])
        );
        Ok(())
    }

    #[test]
    fn failed_header_write() -> Result<()> {
        let out = LimitedWriter {
            written: Vec::new(),
            limit: 10,
        };
        let mut fgb = FgbWriter::create(out, &schema(), None)?;
        assert!(matches!(fgb.open(), Err(Error::IO(_))));
        assert_eq!(fgb.state(), WriterState::Failed);
        assert!(matches!(fgb.open(), Err(Error::Aborted)));
        assert!(matches!(
            fgb.write_feature_without_geometry(&Attributes::new()),
            Err(Error::Aborted)
        ));
        assert!(matches!(fgb.close(), Err(Error::Aborted)));
        Ok(())
    }

    #[test]
    fn rejected_geometry_keeps_stream_open() -> Result<()> {
        struct Tin;
        impl GeozeroGeometry for Tin {
            fn process_geom<P: geozero::GeomProcessor>(
                &self,
                processor: &mut P,
            ) -> geozero::error::Result<()> {
                processor.tin_begin(0, 0)?;
                processor.tin_end(0)
            }
        }

        let mut fgb = FgbWriter::create(Vec::new(), &schema(), None)?;
        fgb.open()?;
        let len = fgb.get_ref().len();
        assert!(matches!(
            fgb.write_feature(&Attributes::new(), Some(&Tin)),
            Err(Error::Geometry(_))
        ));
        assert_eq!(fgb.get_ref().len(), len);
        assert_eq!(fgb.state(), WriterState::HeaderWritten);
        fgb.write_feature_without_geometry(&Attributes::new())?;
        assert_eq!(fgb.features_written(), 1);
        Ok(())
    }

    #[test]
    fn options() -> Result<()> {
        let fgb = FgbWriter::create_with_options(
            Vec::new(),
            &schema(),
            Some(&TargetCrs::epsg_3d(4979)),
            FgbWriterOptions {
                name: Some("places"),
                title: Some("Places"),
                features_count: 3,
                ..Default::default()
            },
        )?;
        let header = fgb.header();
        assert_eq!(header.name.as_deref(), Some("places"));
        assert_eq!(header.title.as_deref(), Some("Places"));
        assert_eq!(header.features_count, 3);
        assert_eq!(header.srid, 4979);
        assert!(header.has_z);
        assert_eq!(header.geometry_type, GeometryType::Point);
        Ok(())
    }

    #[test]
    fn from_feature_type() -> Result<()> {
        let feature_type = FeatureSchema::object(
            "buildings",
            vec![
                FeatureSchema::new("id", PropertyType::String),
                FeatureSchema::object(
                    "address",
                    vec![FeatureSchema::new("city", PropertyType::String)],
                ),
                FeatureSchema::geometry("footprint", SimpleFeatureGeometry::Polygon),
            ],
        );
        let fgb = FgbWriter::create_from_feature_type(
            Vec::new(),
            &feature_type,
            None,
            FgbWriterOptions::default(),
        )?;
        let header = fgb.header();
        assert_eq!(header.name.as_deref(), Some("buildings"));
        assert_eq!(header.geometry_type, GeometryType::Polygon);
        let names: Vec<_> = header.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["id", "address.city"]);
        Ok(())
    }
}
