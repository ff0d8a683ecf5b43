use super::verify::VerifyError;
use crate::error::TemplateError;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// One symbol of an enumeration. `enum_value` is the numeric tag that gets persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumItem {
    pub enum_str: String,
    pub enum_value: i32,
    pub describe: String,
}

impl EnumItem {
    pub fn new(enum_str: impl Into<String>, enum_value: i32, describe: impl Into<String>) -> Self {
        Self {
            enum_str: enum_str.into(),
            enum_value,
            describe: describe.into(),
        }
    }
}

/// A named enumeration usable as the value domain of enum-typed fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomEnum {
    pub enum_type: String,
    pub items: Vec<EnumItem>,
}

impl CustomEnum {
    pub fn new(enum_type: impl Into<String>) -> Self {
        Self {
            enum_type: enum_type.into(),
            items: Vec::new(),
        }
    }

    /// Builder-style variant of [`CustomEnum::add_item`] for catalogs known to be valid.
    pub fn with_item(mut self, enum_str: &str, enum_value: i32, describe: &str) -> Self {
        self.items.push(EnumItem::new(enum_str, enum_value, describe));
        self
    }

    pub fn add_item(&mut self, item: EnumItem) -> Result<(), TemplateError> {
        if item.enum_str.is_empty() {
            return Err(TemplateError::EmptyEnumStr);
        }
        if self.find_item(&item.enum_str).is_some() {
            return Err(TemplateError::DuplicateEnumStr(item.enum_str));
        }
        if self.find_by_value(item.enum_value).is_some() {
            return Err(TemplateError::DuplicateEnumValue(item.enum_value));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn remove_item(&mut self, enum_str: &str) -> Option<EnumItem> {
        let index = self.items.iter().position(|i| i.enum_str == enum_str)?;
        Some(self.items.remove(index))
    }

    pub fn find_item(&self, enum_str: &str) -> Option<&EnumItem> {
        self.items.iter().find(|i| i.enum_str == enum_str)
    }

    pub fn find_by_value(&self, enum_value: i32) -> Option<&EnumItem> {
        self.items.iter().find(|i| i.enum_value == enum_value)
    }

    /// Checks that every item has a symbol and that symbols and values are unique.
    pub fn verify(&self) -> Result<(), VerifyError> {
        let mut symbols = AHashSet::with_capacity(self.items.len());
        let mut values = AHashSet::with_capacity(self.items.len());

        for item in &self.items {
            if item.enum_str.is_empty() {
                return Err(VerifyError::EmptyEnumStr);
            }
            if !symbols.insert(item.enum_str.as_str()) {
                return Err(VerifyError::DuplicateEnumStr(item.enum_str.clone()));
            }
            if !values.insert(item.enum_value) {
                return Err(VerifyError::DuplicateEnumValue(item.enum_value));
            }
        }
        Ok(())
    }
}
