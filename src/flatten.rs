//! Flatten a nested feature type into the ordered property list of a simple feature schema.
//!
//! Only leaf properties become columns, named by their dotted path. Every array level
//! adds a `[]` marker to the path, which is expanded to `.1` .. `.n` for up to
//! `max_multiplicity` elements. Only the first geometry is kept and named `geometry`.

use crate::schema::{PropertyType, Role, SchemaProperty, SimpleFeatureGeometry};

/// Name of the flattened geometry property
pub const GEOMETRY_PROPERTY: &str = "geometry";

const ARRAY_MARKER: &str = "[]";

/// Node of a nested feature type
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureSchema {
    pub name: String,
    pub type_: PropertyType,
    /// Element type of a value array
    pub value_type: Option<PropertyType>,
    pub geometry_type: Option<SimpleFeatureGeometry>,
    pub label: Option<String>,
    pub description: Option<String>,
    pub required: Option<bool>,
    pub role: Option<Role>,
    /// Nested properties of objects and object arrays
    pub properties: Vec<FeatureSchema>,
}

impl FeatureSchema {
    pub fn new(name: &str, type_: PropertyType) -> Self {
        FeatureSchema {
            name: name.to_string(),
            type_,
            value_type: None,
            geometry_type: None,
            label: None,
            description: None,
            required: None,
            role: None,
            properties: Vec::new(),
        }
    }

    pub fn object(name: &str, properties: Vec<FeatureSchema>) -> Self {
        FeatureSchema {
            properties,
            ..FeatureSchema::new(name, PropertyType::Object)
        }
    }

    pub fn object_array(name: &str, properties: Vec<FeatureSchema>) -> Self {
        FeatureSchema {
            properties,
            ..FeatureSchema::new(name, PropertyType::ObjectArray)
        }
    }

    pub fn value_array(name: &str, value_type: PropertyType) -> Self {
        FeatureSchema {
            value_type: Some(value_type),
            ..FeatureSchema::new(name, PropertyType::ValueArray)
        }
    }

    pub fn geometry(name: &str, geometry_type: SimpleFeatureGeometry) -> Self {
        FeatureSchema {
            geometry_type: Some(geometry_type),
            ..FeatureSchema::new(name, PropertyType::Geometry)
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

    fn is_array(&self) -> bool {
        matches!(
            self.type_,
            PropertyType::ValueArray | PropertyType::ObjectArray
        )
    }

    fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

struct Flattener {
    max_multiplicity: usize,
    properties: Vec<SchemaProperty>,
    has_geometry: bool,
}

/// Flatten the properties of `feature_type`.
///
/// With `max_multiplicity > 1` the result is sorted by property name, otherwise
/// it keeps the schema order.
pub fn flatten(feature_type: &FeatureSchema, max_multiplicity: usize) -> Vec<SchemaProperty> {
    let mut flattener = Flattener {
        max_multiplicity,
        properties: Vec::new(),
        has_geometry: false,
    };
    let mut parents = Vec::new();
    for property in &feature_type.properties {
        flattener.visit(property, &mut parents);
    }
    let mut properties = flattener.properties;
    if max_multiplicity > 1 {
        properties.sort_by(|a, b| a.name.cmp(&b.name));
    }
    properties
}

impl Flattener {
    fn visit<'a>(&mut self, property: &'a FeatureSchema, parents: &mut Vec<&'a FeatureSchema>) {
        match property.type_ {
            PropertyType::Object | PropertyType::ObjectArray => {
                // intermediate objects are not properties themselves
                parents.push(property);
                for child in &property.properties {
                    self.visit(child, parents);
                }
                parents.pop();
            }
            PropertyType::Geometry => {
                if self.has_geometry {
                    debug!("Skipping additional geometry `{}`", property.name);
                    return;
                }
                self.has_geometry = true;
                let mut flat = self.leaf(property, parents, PropertyType::Geometry);
                flat.name = GEOMETRY_PROPERTY.to_string();
                flat.geometry_type =
                    Some(property.geometry_type.unwrap_or(SimpleFeatureGeometry::Any));
                self.add(flat);
            }
            PropertyType::ValueArray => {
                let value_type = property.value_type.unwrap_or(PropertyType::Unknown);
                let flat = self.leaf(property, parents, value_type);
                self.expand(flat);
            }
            _ => {
                let flat = self.leaf(property, parents, property.type_);
                self.expand(flat);
            }
        }
    }

    fn leaf(
        &self,
        property: &FeatureSchema,
        parents: &[&FeatureSchema],
        type_: PropertyType,
    ) -> SchemaProperty {
        let mut name = String::new();
        for node in parents.iter().copied().chain(std::iter::once(property)) {
            if !name.is_empty() {
                name.push('.');
            }
            name.push_str(&node.name);
            if node.is_array() {
                name.push_str(ARRAY_MARKER);
            }
        }
        let label = property.label.as_ref().map(|label| {
            parents
                .iter()
                .map(|node| node.display_name())
                .chain(std::iter::once(label.as_str()))
                .collect::<Vec<_>>()
                .join(" > ")
        });
        SchemaProperty {
            name,
            type_,
            geometry_type: None,
            label,
            description: property.description.clone(),
            required: property.required,
            role: property.role,
        }
    }

    /// Replace the first array marker by each element position, recursively.
    fn expand(&mut self, property: SchemaProperty) {
        if property.name.contains(ARRAY_MARKER) {
            for i in 1..=self.max_multiplicity {
                let name = property.name.replacen(ARRAY_MARKER, &format!(".{i}"), 1);
                self.expand(SchemaProperty {
                    name,
                    ..property.clone()
                });
            }
        } else {
            self.add(property);
        }
    }

    fn add(&mut self, property: SchemaProperty) {
        if self.properties.iter().any(|p| p.name == property.name) {
            debug!("Duplicate property `{}` - skipping", property.name);
            return;
        }
        self.properties.push(property);
    }
}
