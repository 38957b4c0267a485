use criterion::{criterion_group, criterion_main, Criterion};
use flatgeobuf_stream::*;
use geo_types::{Geometry, LineString, Polygon};
use std::io::sink;

fn schema() -> Vec<SchemaProperty> {
    vec![
        SchemaProperty::new("id", PropertyType::String).with_role(Role::Id),
        SchemaProperty::new("levels", PropertyType::Integer),
        SchemaProperty::new("height", PropertyType::Float),
        SchemaProperty::geometry("geometry", SimpleFeatureGeometry::MultiPolygon),
    ]
}

fn write_fgb(features: usize, property_buffer_size: usize) -> Result<()> {
    let mut fgb = FgbWriter::create_with_options(
        sink(),
        &schema(),
        None,
        FgbWriterOptions {
            property_buffer_size,
            ..Default::default()
        },
    )?;
    fgb.open()?;
    let ring = vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)];
    let geometry = Geometry::Polygon(Polygon::new(LineString::from(ring), vec![]));
    for i in 0..features {
        let attributes = Attributes::from([
            ("id".to_string(), format!("building-{i}").into()),
            ("levels".to_string(), PropertyValue::Int((i % 12) as i32)),
            ("height".to_string(), PropertyValue::Double(i as f64 * 0.5)),
        ]);
        fgb.write_feature(&attributes, Some(&geometry))?;
    }
    fgb.close()
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("write_fgb", |b| b.iter(|| write_fgb(10_000, DEFAULT_BUFFER_SIZE)));
    c.bench_function("write_fgb_growing_buffer", |b| {
        b.iter(|| write_fgb(10_000, 1))
    });
}

criterion_group!(name=benches; config=Criterion::default().sample_size(10); targets=criterion_benchmark);
criterion_main!(benches);
