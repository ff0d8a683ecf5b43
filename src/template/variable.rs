use super::verify::{VerifyError, first_duplicate};
use crate::error::{DecodeError, EncodeError, TemplateError};
use crate::field::{ByteReader, ByteWriter, Field};
use serde::{Deserialize, Serialize};

/// A session-wide variable: a name and a typed value.
pub type VariableField = Field;

/// Flat namespace of named variables available to nodes at authoring time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalVariable {
    variables: Vec<VariableField>,
}

impl GlobalVariable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variables(&self) -> &[VariableField] {
        &self.variables
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn add(&mut self, variable: VariableField) -> Result<(), TemplateError> {
        if variable.name.is_empty() {
            return Err(TemplateError::EmptyVariableName);
        }
        if self.position(&variable.name).is_some() {
            return Err(TemplateError::DuplicateVariable(variable.name));
        }
        tracing::debug!(
            name = %variable.name,
            kind = %variable.field_type(),
            "added global variable"
        );
        self.variables.push(variable);
        Ok(())
    }

    /// Removes the variable called `name`, returning it if it existed.
    pub fn remove(&mut self, name: &str) -> Option<VariableField> {
        let index = self.position(name)?;
        Some(self.variables.remove(index))
    }

    pub fn get(&self, name: &str) -> Result<Option<&VariableField>, TemplateError> {
        if name.is_empty() {
            return Err(TemplateError::EmptyIdentifier("GlobalVariable::get"));
        }
        Ok(self.variables.iter().find(|v| v.name == name))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<Option<&mut VariableField>, TemplateError> {
        if name.is_empty() {
            return Err(TemplateError::EmptyIdentifier("GlobalVariable::get_mut"));
        }
        Ok(self.variables.iter_mut().find(|v| v.name == name))
    }

    pub fn exists(&self, name: &str) -> Result<bool, TemplateError> {
        if name.is_empty() {
            return Err(TemplateError::EmptyIdentifier("GlobalVariable::exists"));
        }
        Ok(self.position(name).is_some())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.variables.iter().position(|v| v.name == name)
    }

    pub fn verify(&self) -> Result<(), VerifyError> {
        if self.variables.iter().any(|v| v.name.is_empty()) {
            return Err(VerifyError::EmptyVariableName);
        }
        match first_duplicate(&self.variables, |v| v.name.as_str()) {
            Some(name) => Err(VerifyError::DuplicateVariable(name.to_string())),
            None => Ok(()),
        }
    }

    /// Writes the table in self-describing form: a `u32` count, then each
    /// variable as name, type tag and payload.
    pub fn write(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        writer.write_len(self.variables.len())?;
        for variable in &self.variables {
            variable.write_tagged(writer)?;
        }
        Ok(())
    }

    pub fn read(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        // name length prefix plus type tag
        let count = reader.read_count(5)?;
        let mut variables = Vec::with_capacity(count);
        for _ in 0..count {
            variables.push(Field::read_tagged(reader)?);
        }
        Ok(Self { variables })
    }
}
