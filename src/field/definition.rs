use super::codec::Field;
use super::value::{FieldType, FieldValue};
use crate::template::VerifyError;
use serde::{Deserialize, Serialize};

/// One typed, defaulted attribute slot on a node kind.
///
/// The field type is not stored separately: it is always the type of
/// `default_value`, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeField {
    pub field_name: String,
    pub label: String,
    pub describe: String,
    pub show: bool,
    default_value: FieldValue,
}

impl NodeField {
    /// Creates a field whose default is the zero value of `kind`.
    pub fn new(field_name: impl Into<String>, kind: FieldType) -> Self {
        Self::with_value(field_name, kind.default_value())
    }

    pub fn with_value(field_name: impl Into<String>, default_value: FieldValue) -> Self {
        Self {
            field_name: field_name.into(),
            label: String::new(),
            describe: String::new(),
            show: false,
            default_value,
        }
    }

    /// Creates an enum field referencing `enum_type`, defaulting to `default_symbol`.
    pub fn enumeration(
        field_name: impl Into<String>,
        enum_type: impl Into<String>,
        default_symbol: impl Into<String>,
    ) -> Self {
        Self::with_value(field_name, FieldValue::enumeration(enum_type, default_symbol))
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_describe(mut self, describe: impl Into<String>) -> Self {
        self.describe = describe.into();
        self
    }

    pub fn shown(mut self) -> Self {
        self.show = true;
        self
    }

    pub fn field_type(&self) -> FieldType {
        self.default_value.field_type()
    }

    pub fn default_value(&self) -> &FieldValue {
        &self.default_value
    }

    /// Replaces the default. The field type follows the new value.
    pub fn set_default_value(&mut self, value: FieldValue) {
        self.default_value = value;
    }

    /// Switches the field to another kind, resetting the default to that
    /// kind's zero value. Setting the current kind again is a no-op.
    pub fn set_field_type(&mut self, kind: FieldType) {
        if self.field_type() != kind {
            self.default_value = kind.default_value();
        }
    }

    /// Drops the enum reference of an enum field, keeping the field itself.
    pub(crate) fn clear_enum_reference(&mut self) {
        if let FieldValue::Enum {
            enum_type,
            default_value,
        } = &mut self.default_value
        {
            enum_type.clear();
            default_value.clear();
        }
    }

    /// The default as a named value ready to be written into a tree document.
    pub fn to_field(&self) -> Field {
        Field::new(self.field_name.clone(), self.default_value.clone())
    }

    pub fn verify(&self) -> Result<(), VerifyError> {
        if self.field_name.is_empty() {
            return Err(VerifyError::EmptyFieldName);
        }
        if let FieldValue::Enum { enum_type, .. } = &self.default_value {
            if enum_type.is_empty() {
                return Err(VerifyError::MissingEnumType {
                    field: self.field_name.clone(),
                });
            }
        }
        Ok(())
    }
}
