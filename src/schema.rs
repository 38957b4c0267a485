//! Map a flat feature schema to FlatGeobuf header metadata.

use crate::error::Result;
use crate::header_writer::{ColumnMeta, HeaderMeta, DEFAULT_SRID};
use crate::{ColumnType, GeometryType};
use std::collections::HashSet;

/// Semantic type of a schema property
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyType {
    Boolean,
    Integer,
    Float,
    String,
    DateTime,
    Geometry,
    ValueArray,
    Object,
    ObjectArray,
    Unknown,
}

/// Declared geometry subtype of a geometry property
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimpleFeatureGeometry {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
    Any,
    None,
}

/// Role of a property within its feature type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Id,
    PrimaryGeometry,
    PrimaryInstant,
}

/// One entry of the ordered flat schema.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaProperty {
    pub name: String,
    pub type_: PropertyType,
    /// Declared subtype, only used for geometry properties
    pub geometry_type: Option<SimpleFeatureGeometry>,
    pub label: Option<String>,
    pub description: Option<String>,
    /// `Some(true)` makes the column non-nullable
    pub required: Option<bool>,
    pub role: Option<Role>,
}

impl SchemaProperty {
    pub fn new(name: &str, type_: PropertyType) -> Self {
        SchemaProperty {
            name: name.to_string(),
            type_,
            geometry_type: None,
            label: None,
            description: None,
            required: None,
            role: None,
        }
    }

    pub fn geometry(name: &str, geometry_type: SimpleFeatureGeometry) -> Self {
        SchemaProperty {
            geometry_type: Some(geometry_type),
            ..SchemaProperty::new(name, PropertyType::Geometry)
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn is_geometry(&self) -> bool {
        self.type_ == PropertyType::Geometry
    }
}

/// Target coordinate reference system of the stream
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetCrs {
    /// EPSG code
    pub code: i32,
    /// Dimension of the CRS, `None` if it could not be determined
    pub is_3d: Option<bool>,
}

impl TargetCrs {
    pub fn epsg(code: i32) -> Self {
        TargetCrs {
            code,
            is_3d: Some(false),
        }
    }

    pub fn epsg_3d(code: i32) -> Self {
        TargetCrs {
            code,
            is_3d: Some(true),
        }
    }
}

/// FlatGeobuf geometry type for a declared geometry subtype
pub fn geometry_type(geometry: SimpleFeatureGeometry) -> GeometryType {
    match geometry {
        SimpleFeatureGeometry::Point => GeometryType::Point,
        SimpleFeatureGeometry::MultiPoint => GeometryType::MultiPoint,
        SimpleFeatureGeometry::LineString => GeometryType::LineString,
        SimpleFeatureGeometry::MultiLineString => GeometryType::MultiLineString,
        SimpleFeatureGeometry::Polygon => GeometryType::Polygon,
        SimpleFeatureGeometry::MultiPolygon => GeometryType::MultiPolygon,
        SimpleFeatureGeometry::GeometryCollection => GeometryType::GeometryCollection,
        SimpleFeatureGeometry::Any | SimpleFeatureGeometry::None => GeometryType::Unknown,
    }
}

/// FlatGeobuf column type for a semantic property type, `None` if there is no direct mapping
pub fn column_type(type_: PropertyType) -> Option<ColumnType> {
    match type_ {
        PropertyType::Boolean => Some(ColumnType::Bool),
        PropertyType::Integer => Some(ColumnType::Int),
        PropertyType::Float => Some(ColumnType::Double),
        PropertyType::DateTime => Some(ColumnType::DateTime),
        PropertyType::String => Some(ColumnType::String),
        _ => None,
    }
}

impl HeaderMeta {
    /// Build header metadata from an ordered flat schema.
    ///
    /// The first geometry property determines the geometry type of the stream and
    /// is not declared as column. Of properties sharing a name only the first one
    /// becomes a column. Without a target CRS, EPSG:4326 in 2D is assumed.
    pub fn from_schema(properties: &[SchemaProperty], crs: Option<&TargetCrs>) -> Result<Self> {
        let mut header = HeaderMeta {
            srid: crs.map(|crs| crs.code).unwrap_or(DEFAULT_SRID),
            has_z: match crs.map(|crs| crs.is_3d) {
                Some(Some(is_3d)) => is_3d,
                Some(None) => {
                    debug!("Dimension of target CRS unknown - assuming 2D");
                    false
                }
                None => false,
            },
            ..Default::default()
        };
        let mut geometry_seen = false;
        let mut names = HashSet::new();
        for property in properties {
            if property.is_geometry() {
                if geometry_seen {
                    debug!("Ignoring additional geometry property `{}`", property.name);
                    continue;
                }
                geometry_seen = true;
                header.geometry_type =
                    geometry_type(property.geometry_type.unwrap_or(SimpleFeatureGeometry::Any));
                continue;
            }
            if !names.insert(property.name.as_str()) {
                warn!("Duplicate property `{}` - skipping", property.name);
                continue;
            }
            let type_ = column_type(property.type_).unwrap_or_else(|| {
                warn!(
                    "Property `{}` with unknown type {:?} mapped to String",
                    property.name, property.type_
                );
                ColumnType::String
            });
            header.columns.push(ColumnMeta {
                name: property.name.clone(),
                type_,
                title: property.label.clone(),
                description: property.description.clone(),
                nullable: !property.required.unwrap_or(false),
                unique: property.role == Some(Role::Id),
            });
        }
        header.validate_columns()?;
        Ok(header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn schema() -> Vec<SchemaProperty> {
        vec![
            SchemaProperty::new("id", PropertyType::String).with_role(Role::Id),
            SchemaProperty::new("count", PropertyType::Integer).with_required(true),
            SchemaProperty::geometry("geom", SimpleFeatureGeometry::Point),
        ]
    }

    #[test]
    fn columns_exclude_geometry() -> Result<()> {
        let header = HeaderMeta::from_schema(&schema(), None)?;
        assert_eq!(header.geometry_type, GeometryType::Point);
        assert_eq!(header.srid, 4326);
        assert!(!header.has_z);
        let names: Vec<_> = header.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["id", "count"]);
        assert!(header.columns[0].unique);
        assert!(header.columns[0].nullable);
        assert!(!header.columns[1].unique);
        assert!(!header.columns[1].nullable);
        assert_eq!(header.columns[1].type_, ColumnType::Int);
        Ok(())
    }

    #[test]
    fn type_mapping() -> Result<()> {
        let properties = [
            SchemaProperty::new("b", PropertyType::Boolean),
            SchemaProperty::new("i", PropertyType::Integer),
            SchemaProperty::new("f", PropertyType::Float),
            SchemaProperty::new("s", PropertyType::String),
            SchemaProperty::new("d", PropertyType::DateTime),
            SchemaProperty::new("u", PropertyType::Unknown),
            SchemaProperty::new("o", PropertyType::Object),
        ];
        let header = HeaderMeta::from_schema(&properties, None)?;
        let types: Vec<_> = header.columns.iter().map(|c| c.type_).collect();
        assert_eq!(
            types,
            [
                ColumnType::Bool,
                ColumnType::Int,
                ColumnType::Double,
                ColumnType::String,
                ColumnType::DateTime,
                ColumnType::String,
                ColumnType::String,
            ]
        );
        assert_eq!(header.geometry_type, GeometryType::Unknown);
        Ok(())
    }

    #[test]
    fn first_geometry_wins() -> Result<()> {
        let properties = [
            SchemaProperty::geometry("footprint", SimpleFeatureGeometry::MultiPolygon),
            SchemaProperty::new("name", PropertyType::String),
            SchemaProperty::geometry("centroid", SimpleFeatureGeometry::Point),
        ];
        let header = HeaderMeta::from_schema(&properties, None)?;
        assert_eq!(header.geometry_type, GeometryType::MultiPolygon);
        assert_eq!(header.columns.len(), 1);
        assert_eq!(header.columns[0].name, "name");
        Ok(())
    }

    #[test]
    fn any_geometry_is_unknown() -> Result<()> {
        let properties = [SchemaProperty {
            geometry_type: None,
            ..SchemaProperty::geometry("geometry", SimpleFeatureGeometry::Any)
        }];
        let header = HeaderMeta::from_schema(&properties, None)?;
        assert_eq!(header.geometry_type, GeometryType::Unknown);
        Ok(())
    }

    #[test]
    fn label_and_description() -> Result<()> {
        let properties = [SchemaProperty::new("h", PropertyType::Float)
            .with_label("Height")
            .with_description("Height above ground in m")];
        let header = HeaderMeta::from_schema(&properties, None)?;
        assert_eq!(header.columns[0].title.as_deref(), Some("Height"));
        assert_eq!(
            header.columns[0].description.as_deref(),
            Some("Height above ground in m")
        );
        Ok(())
    }

    #[test]
    fn target_crs() -> Result<()> {
        let header = HeaderMeta::from_schema(&schema(), Some(&TargetCrs::epsg_3d(4979)))?;
        assert_eq!(header.srid, 4979);
        assert!(header.has_z);

        let header = HeaderMeta::from_schema(&schema(), Some(&TargetCrs::epsg(25832)))?;
        assert_eq!(header.srid, 25832);
        assert!(!header.has_z);

        let unresolved = TargetCrs {
            code: 5555,
            is_3d: None,
        };
        let header = HeaderMeta::from_schema(&schema(), Some(&unresolved))?;
        assert_eq!(header.srid, 5555);
        assert!(!header.has_z);
        Ok(())
    }

    #[test]
    fn duplicate_names_keep_first() -> Result<()> {
        let properties = [
            SchemaProperty::new("a", PropertyType::String),
            SchemaProperty::new("b", PropertyType::Float),
            SchemaProperty::new("a", PropertyType::Integer),
        ];
        let header = HeaderMeta::from_schema(&properties, None)?;
        let columns: Vec<_> = header
            .columns
            .iter()
            .map(|c| (c.name.as_str(), c.type_))
            .collect();
        assert_eq!(columns, [("a", ColumnType::String), ("b", ColumnType::Double)]);
        Ok(())
    }

    #[test]
    fn too_many_columns() {
        let properties: Vec<_> = (0..=u16::MAX as usize + 1)
            .map(|i| SchemaProperty::new(&format!("c{i}"), PropertyType::Integer))
            .collect();
        assert!(matches!(
            HeaderMeta::from_schema(&properties, None),
            Err(Error::TooManyColumns(65537))
        ));
    }
}
