use crate::error::Result;
use crate::geometry_writer::GeometryPart;
use crate::{Feature, FeatureArgs};
use flatbuffers::FlatBufferBuilder;
use std::io::Write;

/// One encoded feature, written as a size prefixed `Feature` flatbuffer.
#[derive(Debug)]
pub struct FeatureFrame<'a> {
    pub geometry: Option<&'a GeometryPart>,
    /// Sparse property record
    pub properties: &'a [u8],
}

impl FeatureFrame<'_> {
    /// Write the complete frame with a single `write_all`.
    ///
    /// Returns the number of bytes written, including the size prefix.
    pub fn write(&self, out: &mut impl Write, fbb: &mut FlatBufferBuilder) -> Result<usize> {
        let buf = self.to_bytes(fbb);
        let len = buf.len();
        let result = out.write_all(buf);
        fbb.reset();
        result?;
        Ok(len)
    }

    fn to_bytes<'b>(&self, fbb: &'b mut FlatBufferBuilder) -> &'b [u8] {
        fbb.reset();
        let geometry = self.geometry.map(|geometry| geometry.build(fbb));
        let properties = (!self.properties.is_empty()).then(|| fbb.create_vector(self.properties));
        let feature = Feature::create(
            fbb,
            &FeatureArgs {
                geometry,
                properties,
                columns: None,
            },
        );
        fbb.finish_size_prefixed(feature, None);
        fbb.finished_data()
    }
}
