use flatgeobuf_stream::*;
use geo_types::{LineString, Polygon};
use geozero::geojson::GeoJsonReader;
use geozero::GeozeroDatasource;
use rand::{Rng, SeedableRng};
use std::io::{BufWriter, Read, Seek};

mod common;
use common::{column_types, decode_properties, split_stream, Decoded, LimitedWriter};

fn building_schema() -> Vec<SchemaProperty> {
    vec![
        SchemaProperty::new("id", PropertyType::String)
            .with_role(Role::Id)
            .with_required(true),
        SchemaProperty::new("levels", PropertyType::Integer).with_label("Number of levels"),
        SchemaProperty::new("height", PropertyType::Float)
            .with_description("Height above ground in m"),
        SchemaProperty::new("residential", PropertyType::Boolean),
        SchemaProperty::geometry("footprint", SimpleFeatureGeometry::MultiPolygon),
        SchemaProperty::new("built", PropertyType::DateTime),
        SchemaProperty::new("tags", PropertyType::ValueArray),
    ]
}

fn square(x: f64, y: f64) -> Polygon<f64> {
    let ring = vec![(x, y), (x + 1.0, y), (x + 1.0, y + 1.0), (x, y + 1.0), (x, y)];
    Polygon::new(LineString::from(ring), vec![])
}

#[test]
fn header_round_trip() -> Result<()> {
    let schema = building_schema();
    let mapped = HeaderMeta::from_schema(&schema, None)?;
    let mut fgb = FgbWriter::create_with_options(
        Vec::new(),
        &schema,
        None,
        FgbWriterOptions {
            name: Some("buildings"),
            title: Some("Buildings"),
            features_count: 0,
            ..Default::default()
        },
    )?;
    fgb.open()?;
    fgb.close()?;
    let buf = fgb.into_inner();

    let (header, frames) = split_stream(&buf);
    assert!(frames.is_empty());
    assert_eq!(header.name(), Some("buildings"));
    assert_eq!(header.title(), Some("Buildings"));
    assert_eq!(header.geometry_type(), mapped.geometry_type);
    assert_eq!(header.geometry_type(), GeometryType::MultiPolygon);
    assert_eq!(header.index_node_size(), 0);
    assert_eq!(header.crs().map(|crs| crs.code()), Some(DEFAULT_SRID));

    let columns = header.columns().unwrap();
    assert_eq!(columns.len(), mapped.columns.len());
    for (col, meta) in columns.iter().zip(&mapped.columns) {
        assert_eq!(col.name(), meta.name);
        assert_eq!(col.type_(), meta.type_);
        assert_eq!(col.title(), meta.title.as_deref());
        assert_eq!(col.description(), meta.description.as_deref());
        assert_eq!(col.nullable(), meta.nullable);
        assert_eq!(col.unique(), meta.unique);
    }
    assert_eq!(
        column_types(&header),
        [
            ColumnType::String,
            ColumnType::Int,
            ColumnType::Double,
            ColumnType::Bool,
            ColumnType::DateTime,
            ColumnType::String
        ]
    );
    assert!(!columns.get(0).nullable());
    assert_eq!(columns.get(1).title(), Some("Number of levels"));
    Ok(())
}

#[test]
fn sparse_properties() -> Result<()> {
    let mut fgb = FgbWriter::create(Vec::new(), &building_schema(), None)?;
    fgb.open()?;
    let attributes = Attributes::from([
        ("id".to_string(), "b-17".into()),
        ("height".to_string(), PropertyValue::Null),
        ("residential".to_string(), true.into()),
        ("built".to_string(), PropertyValue::DateTime("1931-05-01".to_string())),
        ("unknown".to_string(), 5.into()),
    ]);
    fgb.write_feature_without_geometry(&attributes)?;
    fgb.close()?;
    let buf = fgb.into_inner();

    let (header, frames) = split_stream(&buf);
    let feature = size_prefixed_root_as_feature(frames[0]).unwrap();
    let entries = decode_properties(&column_types(&header), feature.properties().unwrap().bytes());
    assert_eq!(
        entries,
        [
            (0, Decoded::Text("b-17".to_string())),
            (3, Decoded::Bool(true)),
            (4, Decoded::Text("1931-05-01".to_string())),
        ]
    );
    Ok(())
}

#[test]
fn repeated_property_name() -> Result<()> {
    let schema = [
        SchemaProperty::new("a", PropertyType::String),
        SchemaProperty::new("a", PropertyType::Integer),
    ];
    let mut fgb = FgbWriter::create(Vec::new(), &schema, None)?;
    fgb.open()?;
    fgb.write_feature_without_geometry(&Attributes::from([("a".to_string(), 5.into())]))?;
    fgb.close()?;
    let buf = fgb.into_inner();

    let (header, frames) = split_stream(&buf);
    assert_eq!(column_types(&header), [ColumnType::String]);
    let feature = size_prefixed_root_as_feature(frames[0]).unwrap();
    assert_eq!(
        feature.properties().unwrap().bytes(),
        [0, 0, 1, 0, 0, 0, b'5']
    );
    Ok(())
}

#[test]
fn growth_with_tiny_buffer() -> Result<()> {
    let attributes = Attributes::from([
        ("id".to_string(), "x".repeat(3000).into()),
        ("levels".to_string(), 4.into()),
        ("height".to_string(), 12.5.into()),
    ]);
    let mut outputs = Vec::new();
    for size in [1, 1024 * 1024] {
        let mut fgb = FgbWriter::create_with_options(
            Vec::new(),
            &building_schema(),
            None,
            FgbWriterOptions {
                property_buffer_size: size,
                ..Default::default()
            },
        )?;
        fgb.open()?;
        fgb.write_feature_without_geometry(&attributes)?;
        fgb.close()?;
        outputs.push(fgb.into_inner());
    }
    assert_eq!(outputs[0], outputs[1]);
    Ok(())
}

#[test]
fn polygon_promoted_to_multipolygon() -> Result<()> {
    let polygon = square(2.0, 3.0);
    let mut fgb = FgbWriter::create(Vec::new(), &building_schema(), None)?;
    fgb.open()?;
    fgb.write_feature(&Attributes::new(), Some(&geo_types::Geometry::Polygon(polygon.clone())))?;
    fgb.close()?;
    let buf = fgb.into_inner();

    let (_, frames) = split_stream(&buf);
    let feature = size_prefixed_root_as_feature(frames[0]).unwrap();
    let geometry = feature.geometry().unwrap();
    assert_eq!(geometry.type_(), GeometryType::MultiPolygon);
    let parts = geometry.parts().unwrap();
    assert_eq!(parts.len(), 1);
    let xy: Vec<f64> = parts.get(0).xy().unwrap().iter().collect();
    let expected: Vec<f64> = polygon
        .exterior()
        .coords()
        .flat_map(|c| [c.x, c.y])
        .collect();
    assert_eq!(xy, expected);
    assert!(parts.get(0).ends().is_none());
    Ok(())
}

#[test]
fn frame_integrity() -> Result<()> {
    const FEATURES: usize = 1000;
    let mut rng = rand::rngs::StdRng::seed_from_u64(17);
    let mut fgb = FgbWriter::create_with_options(
        Vec::new(),
        &building_schema(),
        None,
        FgbWriterOptions {
            features_count: FEATURES as u64,
            property_buffer_size: 16,
            ..Default::default()
        },
    )?;
    fgb.open()?;
    let mut present = Vec::with_capacity(FEATURES);
    for i in 0..FEATURES {
        let mut attributes = Attributes::new();
        if rng.gen_bool(0.7) {
            let len = rng.gen_range(0..200);
            attributes.insert("id".to_string(), format!("{i}-{}", "y".repeat(len)).into());
        }
        if rng.gen_bool(0.5) {
            attributes.insert("levels".to_string(), rng.gen_range(-5..50i32).into());
        }
        if rng.gen_bool(0.5) {
            attributes.insert("height".to_string(), rng.gen::<f64>().into());
        }
        if rng.gen_bool(0.5) {
            attributes.insert("residential".to_string(), rng.gen_bool(0.5).into());
        }
        if rng.gen_bool(0.3) {
            attributes.insert("built".to_string(), PropertyValue::Null);
        }
        present.push(
            attributes
                .values()
                .filter(|value| !value.is_null())
                .count(),
        );
        if rng.gen_bool(0.8) {
            let polygon = square(rng.gen_range(-180.0..179.0), rng.gen_range(-90.0..89.0));
            fgb.write_feature(&attributes, Some(&geo_types::Geometry::Polygon(polygon)))?;
        } else {
            fgb.write_feature_without_geometry(&attributes)?;
        }
    }
    fgb.close()?;
    assert_eq!(fgb.features_written(), FEATURES as u64);
    let buf = fgb.into_inner();

    let (header, frames) = split_stream(&buf);
    assert_eq!(header.features_count(), FEATURES as u64);
    assert_eq!(frames.len(), FEATURES);
    let types = column_types(&header);
    for (frame, expected) in frames.iter().zip(present) {
        let size = u32::from_le_bytes(frame[0..4].try_into().unwrap()) as usize;
        assert_eq!(size, frame.len() - 4);
        let feature = size_prefixed_root_as_feature(frame).unwrap();
        let entries = feature
            .properties()
            .map(|p| decode_properties(&types, p.bytes()))
            .unwrap_or_default();
        assert_eq!(entries.len(), expected);
        assert!(entries.windows(2).all(|w| w[0].0 < w[1].0));
    }
    Ok(())
}

#[test]
fn sink_failure_aborts_stream() -> Result<()> {
    let schema = building_schema();
    let header_len = {
        let mut fgb = FgbWriter::create(Vec::new(), &schema, None)?;
        fgb.open()?;
        fgb.into_inner().len()
    };
    let mut fgb = FgbWriter::create(LimitedWriter::new(header_len + 500), &schema, None)?;
    fgb.open()?;
    let attributes = Attributes::from([("id".to_string(), "z".repeat(100).into())]);
    let mut written = 0;
    let err = loop {
        match fgb.write_feature_without_geometry(&attributes) {
            Ok(()) => written += 1,
            Err(e) => break e,
        }
    };
    assert!(matches!(err, Error::IO(_)));
    assert!(written > 0);
    assert_eq!(fgb.state(), WriterState::Failed);
    assert!(matches!(
        fgb.write_feature_without_geometry(&attributes),
        Err(Error::Aborted)
    ));
    assert!(matches!(fgb.close(), Err(Error::Aborted)));
    assert_eq!(fgb.features_written(), written);

    // Everything written so far is a valid stream
    let out = fgb.into_inner();
    let (_, frames) = split_stream(&out.written);
    assert_eq!(frames.len() as u64, written);
    Ok(())
}

#[test]
fn geojson_datasource() -> Result<()> {
    let geojson = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"id": "a", "levels": 2, "height": 7.5},
             "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]]}},
            {"type": "Feature", "properties": {"id": "b", "owner": "nobody"},
             "geometry": {"type": "MultiPolygon", "coordinates": [[[[0,0],[1,0],[1,1],[0,0]]], [[[5,5],[6,5],[6,6],[5,5]]]]}}
        ]
    }"#;
    let mut fgb = FgbWriter::create(Vec::new(), &building_schema(), None)?;
    fgb.open()?;
    GeoJsonReader(geojson.as_bytes()).process(&mut fgb)?;
    fgb.close()?;
    assert_eq!(fgb.features_written(), 2);
    let buf = fgb.into_inner();

    let (header, frames) = split_stream(&buf);
    let types = column_types(&header);
    let first = size_prefixed_root_as_feature(frames[0]).unwrap();
    assert_eq!(
        decode_properties(&types, first.properties().unwrap().bytes()),
        [
            (0, Decoded::Text("a".to_string())),
            (1, Decoded::Int(2)),
            (2, Decoded::Double(7.5)),
        ]
    );
    let geometry = first.geometry().unwrap();
    assert_eq!(geometry.type_(), GeometryType::MultiPolygon);
    assert_eq!(geometry.parts().unwrap().len(), 1);

    let second = size_prefixed_root_as_feature(frames[1]).unwrap();
    assert_eq!(
        decode_properties(&types, second.properties().unwrap().bytes()),
        [(0, Decoded::Text("b".to_string()))]
    );
    assert_eq!(second.geometry().unwrap().parts().unwrap().len(), 2);
    Ok(())
}

#[test]
fn datasource_before_open() -> Result<()> {
    let mut fgb = FgbWriter::create(Vec::new(), &building_schema(), None)?;
    let geojson = r#"{"type": "Feature", "properties": {"id": "a"}, "geometry": null}"#;
    assert!(fgb.add_feature(geozero::geojson::GeoJson(geojson)).is_err());
    assert!(fgb.get_ref().is_empty());
    Ok(())
}

#[test]
fn write_file() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::tempfile()?;
    let mut fgb = FgbWriter::create(BufWriter::new(&mut file), &building_schema(), None)?;
    fgb.open()?;
    for i in 0..10i32 {
        let attributes = Attributes::from([("levels".to_string(), i.into())]);
        fgb.write_feature(&attributes, Some(&geo_types::Geometry::Polygon(square(0.0, 0.0))))?;
    }
    fgb.close()?;
    drop(fgb);

    file.rewind()?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf)?;
    let (_, frames) = split_stream(&buf);
    assert_eq!(frames.len(), 10);
    Ok(())
}

#[test]
fn nested_feature_type() -> Result<()> {
    let feature_type = FeatureSchema::object(
        "parcels",
        vec![
            FeatureSchema::new("id", PropertyType::String).with_role(Role::Id),
            FeatureSchema::object_array(
                "owners",
                vec![FeatureSchema::new("name", PropertyType::String)],
            ),
            FeatureSchema::geometry("boundary", SimpleFeatureGeometry::Polygon),
        ],
    );
    let mut fgb = FgbWriter::create_from_feature_type(
        Vec::new(),
        &feature_type,
        Some(&TargetCrs::epsg(2056)),
        FgbWriterOptions {
            max_multiplicity: 2,
            ..Default::default()
        },
    )?;
    fgb.open()?;
    let attributes = Attributes::from([
        ("id".to_string(), "p1".into()),
        ("owners.2.name".to_string(), "Muster".into()),
    ]);
    fgb.write_feature_without_geometry(&attributes)?;
    fgb.close()?;
    let buf = fgb.into_inner();

    let (header, frames) = split_stream(&buf);
    assert_eq!(header.name(), Some("parcels"));
    assert_eq!(header.geometry_type(), GeometryType::Polygon);
    let names: Vec<_> = header.columns().unwrap().iter().map(|c| c.name()).collect();
    assert_eq!(names, ["id", "owners.1.name", "owners.2.name"]);
    let feature = size_prefixed_root_as_feature(frames[0]).unwrap();
    assert_eq!(
        decode_properties(&column_types(&header), feature.properties().unwrap().bytes()),
        [
            (0, Decoded::Text("p1".to_string())),
            (2, Decoded::Text("Muster".to_string())),
        ]
    );
    Ok(())
}

#[test]
fn media_type() {
    assert_eq!(MEDIA_TYPE, "application/flatgeobuf");
    assert_eq!(FILE_EXTENSION, "fgb");
}
