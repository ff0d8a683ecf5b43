use thiserror::Error;

/// Errors that can occur while decoding field values from a byte stream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Unexpected end of input: needed {needed} bytes, but only {remaining} remain")]
    UnexpectedEof { needed: usize, remaining: usize },

    #[error("String payload is not valid UTF-8")]
    InvalidUtf8,

    #[error("Invalid boolean byte: {0:#04x}")]
    InvalidBool(u8),

    #[error("Unknown field type tag: {0}")]
    UnknownFieldType(u8),

    #[error("Node '{class_type}' has no field named '{field}'")]
    UnknownField { class_type: String, field: String },
}

/// Errors that can occur while encoding field values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Length {0} does not fit in a u32 prefix")]
    LengthOverflow(usize),
}

/// Errors raised by mutations and lookups on the node template registry.
///
/// `EmptyIdentifier` marks a caller bug (an empty key passed to a query that
/// requires one); every other variant is a data problem that leaves the
/// registry untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("{0} called with an empty identifier")]
    EmptyIdentifier(&'static str),

    #[error("ClassType '{0}' already exists, please choose another class name")]
    DuplicateClassType(String),

    #[error("EnumType is empty")]
    EmptyEnumType,

    #[error("Enum '{0}' already exists, please choose another enum type")]
    DuplicateEnumType(String),

    #[error("Field name is empty")]
    EmptyFieldName,

    #[error("Field '{0}' already exists on this node")]
    DuplicateFieldName(String),

    #[error("Enum item string is empty")]
    EmptyEnumStr,

    #[error("Enum item '{0}' already exists")]
    DuplicateEnumStr(String),

    #[error("Enum value {0} is already used")]
    DuplicateEnumValue(i32),

    #[error("Variable name is empty")]
    EmptyVariableName,

    #[error("Variable '{0}' already exists")]
    DuplicateVariable(String),
}

/// Errors that can occur when saving or loading a template snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Serialization failed: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("Deserialization failed: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("Snapshot has {trailing} trailing bytes after the template")]
    TrailingBytes { trailing: usize },

    #[error("Field '{field}' of '{owner}' holds a non-finite float, which JSON cannot represent")]
    NonFiniteFloat { owner: String, field: String },

    #[error("JSON conversion failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not access '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
