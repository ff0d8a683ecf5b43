use super::verify::{VerifyError, first_duplicate};
use crate::error::{DecodeError, EncodeError, TemplateError};
use crate::field::{ByteReader, ByteWriter, Field, FieldValue, NodeField};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of a node. The declaration order is the registry's sort order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum NodeType {
    #[default]
    Start,
    Composite,
    Decorator,
    Condition,
    Action,
}

impl NodeType {
    pub const ALL: [NodeType; 5] = [
        NodeType::Start,
        NodeType::Composite,
        NodeType::Decorator,
        NodeType::Condition,
        NodeType::Action,
    ];
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeType::Start => "Start",
            NodeType::Composite => "Composite",
            NodeType::Decorator => "Decorator",
            NodeType::Condition => "Condition",
            NodeType::Action => "Action",
        };
        f.write_str(name)
    }
}

impl FromStr for NodeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeType::ALL
            .into_iter()
            .find(|t| t.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown node type '{}'", s))
    }
}

/// A node kind: its identity, presentation hints and ordered field schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeDefine {
    pub class_type: String,
    pub label: String,
    pub category: String,
    pub describe: String,
    pub node_type: NodeType,
    pub show_content: bool,
    pub fields: Vec<NodeField>,
}

impl NodeDefine {
    pub fn new(class_type: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            class_type: class_type.into(),
            node_type,
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_describe(mut self, describe: impl Into<String>) -> Self {
        self.describe = describe.into();
        self
    }

    pub fn with_show_content(mut self, show_content: bool) -> Self {
        self.show_content = show_content;
        self
    }

    /// Appends a field without checks. Use [`NodeDefine::add_field`] for editor input.
    pub fn with_field(mut self, field: NodeField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn add_field(&mut self, field: NodeField) -> Result<(), TemplateError> {
        if field.field_name.is_empty() {
            return Err(TemplateError::EmptyFieldName);
        }
        if self.find_field(&field.field_name).is_some() {
            return Err(TemplateError::DuplicateFieldName(field.field_name));
        }
        self.fields.push(field);
        Ok(())
    }

    pub fn remove_field(&mut self, field_name: &str) -> Option<NodeField> {
        let index = self
            .fields
            .iter()
            .position(|f| f.field_name == field_name)?;
        Some(self.fields.remove(index))
    }

    pub fn find_field(&self, field_name: &str) -> Option<&NodeField> {
        self.fields.iter().find(|f| f.field_name == field_name)
    }

    pub fn find_field_mut(&mut self, field_name: &str) -> Option<&mut NodeField> {
        self.fields.iter_mut().find(|f| f.field_name == field_name)
    }

    /// Checks the field schema: names present and unique, enum fields bound to an enum type.
    pub fn verify(&self) -> Result<(), VerifyError> {
        let wrap = |e| VerifyError::in_node(&self.class_type, e);

        if self.fields.iter().any(|f| f.field_name.is_empty()) {
            return Err(wrap(VerifyError::EmptyFieldName));
        }
        if let Some(name) = first_duplicate(&self.fields, |f| f.field_name.as_str()) {
            return Err(wrap(VerifyError::DuplicateFieldName(name.to_string())));
        }
        for field in &self.fields {
            field.verify().map_err(wrap)?;
        }
        Ok(())
    }

    /// Clears the enum reference of every enum field whose type `is_defined`
    /// rejects. Returns the number of fields cleared.
    pub fn remove_undefined_enum_fields(&mut self, is_defined: impl Fn(&str) -> bool) -> usize {
        let mut cleared = 0;
        for field in &mut self.fields {
            let dangling = matches!(
                field.default_value().enum_type(),
                Some(enum_type) if !enum_type.is_empty() && !is_defined(enum_type)
            );
            if dangling {
                tracing::warn!(
                    class_type = %self.class_type,
                    field = %field.field_name,
                    enum_type = ?field.default_value().enum_type(),
                    "clearing reference to undefined enum"
                );
                field.clear_enum_reference();
                cleared += 1;
            }
        }
        cleared
    }

    /// Writes the default of every field, in field order, as a tree-document block:
    /// a `u32` field count followed by each field.
    pub fn write_defaults(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        writer.write_len(self.fields.len())?;
        for field in &self.fields {
            field.to_field().write(writer)?;
        }
        Ok(())
    }

    /// Reads a block written by [`NodeDefine::write_defaults`] (or by a tree
    /// document using this node kind), resolving each payload's type from the schema.
    pub fn read_fields(&self, reader: &mut ByteReader<'_>) -> Result<Vec<Field>, DecodeError> {
        // Every field costs at least its name length prefix.
        let count = reader.read_count(4)?;
        let mut fields = Vec::with_capacity(count);
        for _ in 0..count {
            let name = reader.read_str()?;
            let schema = self
                .find_field(&name)
                .ok_or_else(|| DecodeError::UnknownField {
                    class_type: self.class_type.clone(),
                    field: name.clone(),
                })?;
            let value = FieldValue::read(schema.field_type(), reader)?;
            fields.push(Field { name, value });
        }
        Ok(fields)
    }
}
