use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of value a field carries. Selects the `FieldValue` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    Int,
    Long,
    Float,
    Double,
    String,
    Boolean,
    Enum,
    RepeatInt,
    RepeatLong,
    RepeatFloat,
    RepeatString,
}

impl FieldType {
    pub const ALL: [FieldType; 11] = [
        FieldType::Int,
        FieldType::Long,
        FieldType::Float,
        FieldType::Double,
        FieldType::String,
        FieldType::Boolean,
        FieldType::Enum,
        FieldType::RepeatInt,
        FieldType::RepeatLong,
        FieldType::RepeatFloat,
        FieldType::RepeatString,
    ];

    /// One-byte tag used by the self-describing wire form.
    pub fn tag(self) -> u8 {
        match self {
            FieldType::Int => 1,
            FieldType::Long => 2,
            FieldType::Float => 3,
            FieldType::Double => 4,
            FieldType::String => 5,
            FieldType::Boolean => 6,
            FieldType::Enum => 7,
            FieldType::RepeatInt => 8,
            FieldType::RepeatLong => 9,
            FieldType::RepeatFloat => 10,
            FieldType::RepeatString => 11,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// The zero value for this kind. Enum fields start with an empty reference.
    pub fn default_value(self) -> FieldValue {
        match self {
            FieldType::Int => FieldValue::Int(0),
            FieldType::Long => FieldValue::Long(0),
            FieldType::Float => FieldValue::Float(0.0),
            FieldType::Double => FieldValue::Double(0.0),
            FieldType::String => FieldValue::String(String::new()),
            FieldType::Boolean => FieldValue::Boolean(false),
            FieldType::Enum => FieldValue::Enum {
                enum_type: String::new(),
                default_value: String::new(),
            },
            FieldType::RepeatInt => FieldValue::RepeatInt(Vec::new()),
            FieldType::RepeatLong => FieldValue::RepeatLong(Vec::new()),
            FieldType::RepeatFloat => FieldValue::RepeatFloat(Vec::new()),
            FieldType::RepeatString => FieldValue::RepeatString(Vec::new()),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::Int => "Int",
            FieldType::Long => "Long",
            FieldType::Float => "Float",
            FieldType::Double => "Double",
            FieldType::String => "String",
            FieldType::Boolean => "Boolean",
            FieldType::Enum => "Enum",
            FieldType::RepeatInt => "RepeatInt",
            FieldType::RepeatLong => "RepeatLong",
            FieldType::RepeatFloat => "RepeatFloat",
            FieldType::RepeatString => "RepeatString",
        };
        f.write_str(name)
    }
}

/// A typed value: the default of a field definition or the value of a variable.
///
/// Float payloads compare by bit pattern, matching what the codec preserves:
/// a NaN equals itself, while `0.0` and `-0.0` differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FieldValue {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    Boolean(bool),
    /// A weak reference into the registry's enum definitions, keyed by `enum_type`.
    Enum {
        enum_type: String,
        default_value: String,
    },
    RepeatInt(Vec<i32>),
    RepeatLong(Vec<i64>),
    RepeatFloat(Vec<f32>),
    RepeatString(Vec<String>),
}

impl FieldValue {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Int(_) => FieldType::Int,
            FieldValue::Long(_) => FieldType::Long,
            FieldValue::Float(_) => FieldType::Float,
            FieldValue::Double(_) => FieldType::Double,
            FieldValue::String(_) => FieldType::String,
            FieldValue::Boolean(_) => FieldType::Boolean,
            FieldValue::Enum { .. } => FieldType::Enum,
            FieldValue::RepeatInt(_) => FieldType::RepeatInt,
            FieldValue::RepeatLong(_) => FieldType::RepeatLong,
            FieldValue::RepeatFloat(_) => FieldType::RepeatFloat,
            FieldValue::RepeatString(_) => FieldType::RepeatString,
        }
    }

    pub fn enumeration(enum_type: impl Into<String>, default_value: impl Into<String>) -> Self {
        FieldValue::Enum {
            enum_type: enum_type.into(),
            default_value: default_value.into(),
        }
    }

    /// The referenced enum type, if this is an enum value.
    pub fn enum_type(&self) -> Option<&str> {
        match self {
            FieldValue::Enum { enum_type, .. } => Some(enum_type),
            _ => None,
        }
    }

    /// Whether every float in the payload is finite. Non-float values are always finite.
    pub fn is_finite(&self) -> bool {
        match self {
            FieldValue::Float(v) => v.is_finite(),
            FieldValue::Double(v) => v.is_finite(),
            FieldValue::RepeatFloat(items) => items.iter().all(|v| v.is_finite()),
            _ => true,
        }
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldValue::Int(a), FieldValue::Int(b)) => a == b,
            (FieldValue::Long(a), FieldValue::Long(b)) => a == b,
            (FieldValue::Float(a), FieldValue::Float(b)) => a.to_bits() == b.to_bits(),
            (FieldValue::Double(a), FieldValue::Double(b)) => a.to_bits() == b.to_bits(),
            (FieldValue::String(a), FieldValue::String(b)) => a == b,
            (FieldValue::Boolean(a), FieldValue::Boolean(b)) => a == b,
            (
                FieldValue::Enum {
                    enum_type: a_type,
                    default_value: a_value,
                },
                FieldValue::Enum {
                    enum_type: b_type,
                    default_value: b_value,
                },
            ) => a_type == b_type && a_value == b_value,
            (FieldValue::RepeatInt(a), FieldValue::RepeatInt(b)) => a == b,
            (FieldValue::RepeatLong(a), FieldValue::RepeatLong(b)) => a == b,
            (FieldValue::RepeatFloat(a), FieldValue::RepeatFloat(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_bits() == y.to_bits())
            }
            (FieldValue::RepeatString(a), FieldValue::RepeatString(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::Long(v) => write!(f, "{}", v),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Double(v) => write!(f, "{}", v),
            FieldValue::String(v) => write!(f, "\"{}\"", v),
            FieldValue::Boolean(v) => write!(f, "{}", v),
            FieldValue::Enum {
                enum_type,
                default_value,
            } => write!(f, "{}::{}", enum_type, default_value),
            FieldValue::RepeatInt(v) => write_list(f, v),
            FieldValue::RepeatLong(v) => write_list(f, v),
            FieldValue::RepeatFloat(v) => write_list(f, v),
            FieldValue::RepeatString(v) => write_list(f, v),
        }
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "[{}]", items.iter().join(", "))
}
