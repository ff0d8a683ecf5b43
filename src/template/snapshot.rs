use super::registry::NodeTemplate;
use crate::error::SnapshotError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use std::fs;
use std::path::Path;

impl NodeTemplate {
    /// Serializes the whole registry with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(encode_to_vec(self, standard())?)
    }

    /// Deserializes a registry and restores the node sort order. The input
    /// must hold exactly one template.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        // bincode 2 returns a tuple (data, bytes_read)
        let (mut template, consumed): (Self, usize) = decode_from_slice(bytes, standard())?;
        if consumed != bytes.len() {
            return Err(SnapshotError::TrailingBytes {
                trailing: bytes.len() - consumed,
            });
        }
        template.sort_nodes();
        Ok(template)
    }

    /// Exports the registry as pretty JSON. Fails on NaN or infinite floats,
    /// which JSON has no literal for.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        ensure_finite_floats(self)?;
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let mut template: Self = serde_json::from_str(json)?;
        template.sort_nodes();
        Ok(template)
    }

    /// Saves the registry to a file using the bincode format.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let bytes = self.to_bytes()?;
        write_file(path.as_ref(), &bytes)
    }

    /// Loads a registry saved with [`NodeTemplate::save`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let bytes = read_file(path.as_ref())?;
        Self::from_bytes(&bytes)
    }

    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let json = self.to_json()?;
        write_file(path.as_ref(), json.as_bytes())
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}

fn ensure_finite_floats(template: &NodeTemplate) -> Result<(), SnapshotError> {
    let defaults = template.nodes().iter().flat_map(|node| {
        node.fields.iter().map(move |field| {
            (
                node.class_type.as_str(),
                field.field_name.as_str(),
                field.default_value(),
            )
        })
    });
    let variables = template
        .global_variable()
        .variables()
        .iter()
        .map(|v| ("GlobalVariable", v.name.as_str(), &v.value));

    match defaults
        .chain(variables)
        .find(|(_, _, value)| !value.is_finite())
    {
        Some((owner, field, _)) => Err(SnapshotError::NonFiniteFloat {
            owner: owner.to_string(),
            field: field.to_string(),
        }),
        None => Ok(()),
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), SnapshotError> {
    fs::write(path, bytes).map_err(|source| SnapshotError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn read_file(path: &Path) -> Result<Vec<u8>, SnapshotError> {
    fs::read(path).map_err(|source| SnapshotError::Io {
        path: path.display().to_string(),
        source,
    })
}
