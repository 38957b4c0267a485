//! Collect geozero geometries and serialize them as FlatGeobuf `Geometry` tables.

use crate::error::Result;
use crate::{Geometry, GeometryArgs, GeometryType};
use flatbuffers::{FlatBufferBuilder, WIPOffset};
use geozero::error::{GeozeroError, Result as GeozeroResult};
use geozero::{CoordDimensions, GeomProcessor, GeozeroGeometry};

/// Owned geometry in FlatGeobuf layout.
///
/// Single part geometries store their coordinates in `xy`, MultiPolygon and
/// GeometryCollection store their members in `parts`.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryPart {
    pub type_: GeometryType,
    pub xy: Vec<f64>,
    /// Z ordinates, empty for 2D streams
    pub z: Vec<f64>,
    /// End index (in coordinates) of every ring or line string
    pub ends: Vec<u32>,
    pub parts: Vec<GeometryPart>,
}

impl GeometryPart {
    fn new(type_: GeometryType) -> Self {
        GeometryPart {
            type_,
            xy: Vec::new(),
            z: Vec::new(),
            ends: Vec::new(),
            parts: Vec::new(),
        }
    }

    /// No coordinates in any part
    pub fn is_empty(&self) -> bool {
        self.xy.is_empty() && self.parts.iter().all(|part| part.is_empty())
    }

    /// Number of coordinates, including all parts
    pub fn num_coords(&self) -> usize {
        self.xy.len() / 2 + self.parts.iter().map(|p| p.num_coords()).sum::<usize>()
    }

    /// Wrap a single part geometry into the multi type declared for the stream.
    pub fn promote(self, declared: GeometryType) -> GeometryPart {
        match (self.type_, declared) {
            (GeometryType::Point, GeometryType::MultiPoint) => GeometryPart {
                type_: GeometryType::MultiPoint,
                ..self
            },
            (GeometryType::LineString, GeometryType::MultiLineString) => GeometryPart {
                type_: GeometryType::MultiLineString,
                ..self
            },
            (GeometryType::Polygon, GeometryType::MultiPolygon) => GeometryPart {
                parts: vec![self],
                ..GeometryPart::new(GeometryType::MultiPolygon)
            },
            _ => self,
        }
    }

    pub fn build<'a>(&self, fbb: &mut FlatBufferBuilder<'a>) -> WIPOffset<Geometry<'a>> {
        let parts = if self.parts.is_empty() {
            None
        } else {
            let parts = self
                .parts
                .iter()
                .map(|part| part.build(fbb))
                .collect::<Vec<_>>();
            Some(fbb.create_vector(&parts))
        };
        // A single ring or line has no ends
        let ends = (self.ends.len() > 1).then(|| fbb.create_vector(&self.ends));
        let xy = (!self.xy.is_empty()).then(|| fbb.create_vector(&self.xy));
        let z = (!self.z.is_empty()).then(|| fbb.create_vector(&self.z));
        Geometry::create(
            fbb,
            &GeometryArgs {
                ends,
                xy,
                z,
                type_: self.type_,
                parts,
                ..Default::default()
            },
        )
    }
}

/// Geometry processor building a [`GeometryPart`] tree.
pub struct GeometryWriter {
    has_z: bool,
    stack: Vec<GeometryPart>,
    root: Option<GeometryPart>,
}

impl GeometryWriter {
    pub fn new(has_z: bool) -> Self {
        GeometryWriter {
            has_z,
            stack: Vec::new(),
            root: None,
        }
    }

    /// Collect `geom` and promote it to the `declared` stream geometry type.
    ///
    /// Returns `None` for empty geometries.
    pub fn encode<G: GeozeroGeometry>(
        geom: &G,
        declared: GeometryType,
        has_z: bool,
    ) -> Result<Option<GeometryPart>> {
        let mut writer = GeometryWriter::new(has_z);
        geom.process_geom(&mut writer)?;
        writer.finish(declared)
    }

    /// Take the collected geometry, leaving the writer ready for the next one.
    pub fn finish(&mut self, declared: GeometryType) -> Result<Option<GeometryPart>> {
        let root = self.root.take();
        if !self.stack.is_empty() {
            self.stack.clear();
            return Err(GeozeroError::Geometry("Unterminated geometry".to_string()).into());
        }
        Ok(root
            .filter(|geometry| !geometry.is_empty())
            .map(|geometry| geometry.promote(declared)))
    }

    /// Discard a partially collected geometry
    pub fn reset(&mut self) {
        self.stack.clear();
        self.root = None;
    }

    fn begin(&mut self, type_: GeometryType) {
        self.stack.push(GeometryPart::new(type_));
    }

    fn end(&mut self) -> GeozeroResult<()> {
        let part = self
            .stack
            .pop()
            .ok_or_else(|| GeozeroError::Geometry("Unbalanced geometry end".to_string()))?;
        match self.stack.last_mut() {
            Some(parent) => parent.parts.push(part),
            None => self.root = Some(part),
        }
        Ok(())
    }

    fn current(&mut self) -> GeozeroResult<&mut GeometryPart> {
        self.stack
            .last_mut()
            .ok_or_else(|| GeozeroError::Geometry("Coordinate outside of geometry".to_string()))
    }

    fn unsupported(kind: &str) -> GeozeroResult<()> {
        Err(GeozeroError::Geometry(format!(
            "{kind} geometries are not supported"
        )))
    }
}

impl GeomProcessor for GeometryWriter {
    fn dimensions(&self) -> CoordDimensions {
        if self.has_z {
            CoordDimensions::xyz()
        } else {
            CoordDimensions::xy()
        }
    }
    fn xy(&mut self, x: f64, y: f64, _idx: usize) -> GeozeroResult<()> {
        let has_z = self.has_z;
        let part = self.current()?;
        part.xy.extend([x, y]);
        if has_z {
            part.z.push(0.0);
        }
        Ok(())
    }
    fn coordinate(
        &mut self,
        x: f64,
        y: f64,
        z: Option<f64>,
        _m: Option<f64>,
        _t: Option<f64>,
        _tm: Option<u64>,
        _idx: usize,
    ) -> GeozeroResult<()> {
        let has_z = self.has_z;
        let part = self.current()?;
        part.xy.extend([x, y]);
        if has_z {
            part.z.push(z.unwrap_or(0.0));
        }
        Ok(())
    }
    fn point_begin(&mut self, _idx: usize) -> GeozeroResult<()> {
        self.begin(GeometryType::Point);
        Ok(())
    }
    fn point_end(&mut self, _idx: usize) -> GeozeroResult<()> {
        self.end()
    }
    fn multipoint_begin(&mut self, _size: usize, _idx: usize) -> GeozeroResult<()> {
        self.begin(GeometryType::MultiPoint);
        Ok(())
    }
    fn multipoint_end(&mut self, _idx: usize) -> GeozeroResult<()> {
        self.end()
    }
    fn linestring_begin(&mut self, tagged: bool, _size: usize, _idx: usize) -> GeozeroResult<()> {
        // Untagged line strings are rings or members of the enclosing geometry
        if tagged {
            self.begin(GeometryType::LineString);
        }
        Ok(())
    }
    fn linestring_end(&mut self, tagged: bool, _idx: usize) -> GeozeroResult<()> {
        if tagged {
            self.end()
        } else {
            let part = self.current()?;
            let end = u32::try_from(part.xy.len() / 2)
                .map_err(|_| GeozeroError::Geometry("Too many coordinates".to_string()))?;
            part.ends.push(end);
            Ok(())
        }
    }
    fn multilinestring_begin(&mut self, _size: usize, _idx: usize) -> GeozeroResult<()> {
        self.begin(GeometryType::MultiLineString);
        Ok(())
    }
    fn multilinestring_end(&mut self, _idx: usize) -> GeozeroResult<()> {
        self.end()
    }
    fn polygon_begin(&mut self, _tagged: bool, _size: usize, _idx: usize) -> GeozeroResult<()> {
        self.begin(GeometryType::Polygon);
        Ok(())
    }
    fn polygon_end(&mut self, _tagged: bool, _idx: usize) -> GeozeroResult<()> {
        self.end()
    }
    fn multipolygon_begin(&mut self, _size: usize, _idx: usize) -> GeozeroResult<()> {
        self.begin(GeometryType::MultiPolygon);
        Ok(())
    }
    fn multipolygon_end(&mut self, _idx: usize) -> GeozeroResult<()> {
        self.end()
    }
    fn geometrycollection_begin(&mut self, _size: usize, _idx: usize) -> GeozeroResult<()> {
        self.begin(GeometryType::GeometryCollection);
        Ok(())
    }
    fn geometrycollection_end(&mut self, _idx: usize) -> GeozeroResult<()> {
        self.end()
    }
    fn circularstring_begin(&mut self, _size: usize, _idx: usize) -> GeozeroResult<()> {
        Self::unsupported("CircularString")
    }
    fn compoundcurve_begin(&mut self, _size: usize, _idx: usize) -> GeozeroResult<()> {
        Self::unsupported("CompoundCurve")
    }
    fn curvepolygon_begin(&mut self, _size: usize, _idx: usize) -> GeozeroResult<()> {
        Self::unsupported("CurvePolygon")
    }
    fn multicurve_begin(&mut self, _size: usize, _idx: usize) -> GeozeroResult<()> {
        Self::unsupported("MultiCurve")
    }
    fn multisurface_begin(&mut self, _size: usize, _idx: usize) -> GeozeroResult<()> {
        Self::unsupported("MultiSurface")
    }
    fn triangle_begin(&mut self, _tagged: bool, _size: usize, _idx: usize) -> GeozeroResult<()> {
        Self::unsupported("Triangle")
    }
    fn polyhedralsurface_begin(&mut self, _size: usize, _idx: usize) -> GeozeroResult<()> {
        Self::unsupported("PolyhedralSurface")
    }
    fn tin_begin(&mut self, _size: usize, _idx: usize) -> GeozeroResult<()> {
        Self::unsupported("TIN")
    }
}
