use geozero::ColumnValue;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Dynamically typed attribute value of a feature.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Int(i32),
    Long(i64),
    Double(f64),
    String(String),
    /// Date or date-time in its textual (ISO 8601) form
    DateTime(String),
}

/// Attribute values of one feature, keyed by column name.
///
/// Missing entries and `PropertyValue::Null` are both encoded as absent.
pub type Attributes = HashMap<String, PropertyValue>;

impl PropertyValue {
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }
}

impl Display for PropertyValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyValue::Null => Ok(()),
            PropertyValue::Bool(v) => v.fmt(f),
            PropertyValue::Int(v) => v.fmt(f),
            PropertyValue::Long(v) => v.fmt(f),
            PropertyValue::Double(v) => v.fmt(f),
            PropertyValue::String(v) | PropertyValue::DateTime(v) => v.fmt(f),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Int(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Long(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Double(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(PropertyValue::Null)
    }
}

impl From<&ColumnValue<'_>> for PropertyValue {
    fn from(value: &ColumnValue) -> Self {
        match *value {
            ColumnValue::Byte(v) => PropertyValue::Int(v.into()),
            ColumnValue::UByte(v) => PropertyValue::Int(v.into()),
            ColumnValue::Bool(v) => PropertyValue::Bool(v),
            ColumnValue::Short(v) => PropertyValue::Int(v.into()),
            ColumnValue::UShort(v) => PropertyValue::Int(v.into()),
            ColumnValue::Int(v) => PropertyValue::Int(v),
            ColumnValue::UInt(v) => PropertyValue::Long(v.into()),
            ColumnValue::Long(v) => PropertyValue::Long(v),
            ColumnValue::ULong(v) => i64::try_from(v)
                .map(PropertyValue::Long)
                .unwrap_or_else(|_| PropertyValue::String(v.to_string())),
            ColumnValue::Float(v) => PropertyValue::Double(v.into()),
            ColumnValue::Double(v) => PropertyValue::Double(v),
            ColumnValue::String(v) | ColumnValue::Json(v) => PropertyValue::String(v.to_string()),
            ColumnValue::DateTime(v) => PropertyValue::DateTime(v.to_string()),
            ColumnValue::Binary(_) => PropertyValue::Null,
        }
    }
}
