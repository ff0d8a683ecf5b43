use super::enum_def::CustomEnum;
use super::node_def::{NodeDefine, NodeType};
use super::variable::GlobalVariable;
use super::verify::{VerifyError, VerifyInfo, first_duplicate};
use crate::error::TemplateError;
use crate::field::FieldValue;
use serde::{Deserialize, Serialize};

/// The aggregate root of one editing session: global variables, node
/// definitions and enum definitions.
///
/// Node definitions are kept sorted by [`NodeType`]; the sort is stable, so
/// definitions of the same kind stay in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeTemplate {
    global_variable: GlobalVariable,
    nodes: Vec<NodeDefine>,
    enums: Vec<CustomEnum>,
}

impl NodeTemplate {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with the built-in enums and node definitions.
    pub fn with_builtins() -> Self {
        let mut template = Self::new();
        template.reset_enums();
        template.reset_nodes();
        template
    }

    pub fn global_variable(&self) -> &GlobalVariable {
        &self.global_variable
    }

    pub fn global_variable_mut(&mut self) -> &mut GlobalVariable {
        &mut self.global_variable
    }

    pub fn nodes(&self) -> &[NodeDefine] {
        &self.nodes
    }

    pub fn enums(&self) -> &[CustomEnum] {
        &self.enums
    }

    /// All node definitions of one kind, in collection order.
    pub fn get_node_defines(&self, node_type: NodeType) -> Vec<&NodeDefine> {
        self.nodes
            .iter()
            .filter(|n| n.node_type == node_type)
            .collect()
    }

    pub fn add_class(&mut self, node: NodeDefine) -> Result<(), TemplateError> {
        if self.nodes.iter().any(|n| n.class_type == node.class_type) {
            tracing::warn!(class_type = %node.class_type, "rejected duplicate ClassType");
            return Err(TemplateError::DuplicateClassType(node.class_type));
        }

        tracing::debug!(
            class_type = %node.class_type,
            node_type = %node.node_type,
            "added node class"
        );
        self.nodes.push(node);
        self.sort_nodes();
        Ok(())
    }

    pub(crate) fn sort_nodes(&mut self) {
        self.nodes.sort_by_key(|n| n.node_type);
    }

    /// Removes the first node definition with the given class type.
    pub fn remove_class(&mut self, class_type: &str) -> Option<NodeDefine> {
        let index = self.nodes.iter().position(|n| n.class_type == class_type)?;
        self.remove_at(index)
    }

    /// Removes the node definition at `index` in collection order.
    pub fn remove_at(&mut self, index: usize) -> Option<NodeDefine> {
        if index >= self.nodes.len() {
            return None;
        }
        let removed = self.nodes.remove(index);
        tracing::debug!(class_type = %removed.class_type, "removed node class");
        Some(removed)
    }

    pub fn find_node(&self, class_type: &str) -> Option<&NodeDefine> {
        if class_type.is_empty() {
            return None;
        }
        self.nodes.iter().find(|n| n.class_type == class_type)
    }

    /// Mutable lookup. Changing `node_type` through this handle does not
    /// re-sort the collection; call [`NodeTemplate::add_class`] for that.
    pub fn find_node_mut(&mut self, class_type: &str) -> Option<&mut NodeDefine> {
        if class_type.is_empty() {
            return None;
        }
        self.nodes.iter_mut().find(|n| n.class_type == class_type)
    }

    pub fn exist_class_type(&self, class_type: &str) -> Result<bool, TemplateError> {
        if class_type.is_empty() {
            return Err(TemplateError::EmptyIdentifier("NodeTemplate::exist_class_type"));
        }
        Ok(self.nodes.iter().any(|n| n.class_type == class_type))
    }

    pub fn add_enum(&mut self, custom_enum: CustomEnum) -> Result<(), TemplateError> {
        if custom_enum.enum_type.is_empty() {
            tracing::warn!("rejected enum with empty EnumType");
            return Err(TemplateError::EmptyEnumType);
        }
        if self.exist_enum_type(&custom_enum.enum_type)? {
            tracing::warn!(enum_type = %custom_enum.enum_type, "rejected duplicate EnumType");
            return Err(TemplateError::DuplicateEnumType(custom_enum.enum_type));
        }

        tracing::debug!(
            enum_type = %custom_enum.enum_type,
            items = custom_enum.items.len(),
            "added enum"
        );
        self.enums.push(custom_enum);
        Ok(())
    }

    /// Removes the enum definition with the given type. Fields referencing it
    /// are left dangling until [`NodeTemplate::remove_undefined_enum_fields`] runs.
    pub fn remove_enum(&mut self, enum_type: &str) -> Option<CustomEnum> {
        let index = self.enums.iter().position(|e| e.enum_type == enum_type)?;
        let removed = self.enums.remove(index);
        tracing::debug!(enum_type = %removed.enum_type, "removed enum");
        Some(removed)
    }

    pub fn find_enum(&self, enum_type: &str) -> Option<&CustomEnum> {
        if enum_type.is_empty() {
            return None;
        }
        self.enums.iter().find(|e| e.enum_type == enum_type)
    }

    pub fn find_enum_mut(&mut self, enum_type: &str) -> Option<&mut CustomEnum> {
        if enum_type.is_empty() {
            return None;
        }
        self.enums.iter_mut().find(|e| e.enum_type == enum_type)
    }

    pub fn exist_enum_type(&self, enum_type: &str) -> Result<bool, TemplateError> {
        if enum_type.is_empty() {
            return Err(TemplateError::EmptyIdentifier("NodeTemplate::exist_enum_type"));
        }
        Ok(self.enums.iter().any(|e| e.enum_type == enum_type))
    }

    pub(crate) fn clear_nodes(&mut self) {
        self.nodes.clear();
    }

    pub(crate) fn clear_enums(&mut self) {
        self.enums.clear();
    }

    pub fn verify_class_type(&self) -> VerifyInfo {
        if self.nodes.iter().any(|n| n.class_type.is_empty()) {
            return VerifyError::EmptyClassType.into();
        }
        match first_duplicate(&self.nodes, |n| n.class_type.as_str()) {
            Some(dup) => VerifyError::DuplicateClassType(dup.to_string()).into(),
            None => VerifyInfo::ok(),
        }
    }

    pub fn verify_node_template(&self) -> VerifyInfo {
        let class_type = self.verify_class_type();
        if class_type.has_error() {
            return class_type;
        }
        self.nodes
            .iter()
            .try_for_each(NodeDefine::verify)
            .into()
    }

    pub fn verify_enum_type(&self) -> VerifyInfo {
        if self.enums.iter().any(|e| e.enum_type.is_empty()) {
            return VerifyError::EmptyEnumType.into();
        }
        match first_duplicate(&self.enums, |e| e.enum_type.as_str()) {
            Some(dup) => VerifyError::DuplicateEnumType(dup.to_string()).into(),
            None => VerifyInfo::ok(),
        }
    }

    pub fn verify_enum(&self) -> VerifyInfo {
        let enum_type = self.verify_enum_type();
        if enum_type.has_error() {
            return enum_type;
        }
        self.enums
            .iter()
            .try_for_each(|e| e.verify().map_err(|err| VerifyError::in_enum(&e.enum_type, err)))
            .into()
    }

    /// Checks that every bound enum field points at a defined enum, and that a
    /// non-empty default symbol is one of that enum's items.
    pub fn verify_enum_references(&self) -> VerifyInfo {
        for node in &self.nodes {
            for field in &node.fields {
                let FieldValue::Enum {
                    enum_type,
                    default_value,
                } = field.default_value()
                else {
                    continue;
                };
                if enum_type.is_empty() {
                    continue;
                }

                let error = match self.find_enum(enum_type) {
                    None => VerifyError::UndefinedEnumType {
                        field: field.field_name.clone(),
                        enum_type: enum_type.clone(),
                    },
                    Some(def)
                        if !default_value.is_empty() && def.find_item(default_value).is_none() =>
                    {
                        VerifyError::UnknownEnumSymbol {
                            field: field.field_name.clone(),
                            enum_type: enum_type.clone(),
                            symbol: default_value.clone(),
                        }
                    }
                    Some(_) => continue,
                };
                return VerifyError::in_node(&node.class_type, error).into();
            }
        }
        VerifyInfo::ok()
    }

    pub fn verify_global_variable(&self) -> VerifyInfo {
        self.global_variable.verify().into()
    }

    /// Runs every pipeline (enums, nodes, enum references, variables) and
    /// returns the first failure.
    pub fn verify_all(&self) -> VerifyInfo {
        let pipelines: [fn(&Self) -> VerifyInfo; 4] = [
            Self::verify_enum,
            Self::verify_node_template,
            Self::verify_enum_references,
            Self::verify_global_variable,
        ];
        pipelines
            .into_iter()
            .map(|pipeline| pipeline(self))
            .find(VerifyInfo::has_error)
            .unwrap_or_default()
    }

    /// Clears the enum reference of every field whose enum type is no longer
    /// defined. Returns the number of fields cleared.
    pub fn remove_undefined_enum_fields(&mut self) -> usize {
        let enums = &self.enums;
        let cleared: usize = self
            .nodes
            .iter_mut()
            .map(|node| {
                node.remove_undefined_enum_fields(|enum_type| {
                    enums.iter().any(|e| e.enum_type == enum_type)
                })
            })
            .sum();
        if cleared > 0 {
            tracing::info!(cleared, "cleared fields referencing undefined enums");
        }
        cleared
    }
}
