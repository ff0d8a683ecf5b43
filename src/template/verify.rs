use itertools::Itertools;
use std::fmt;
use thiserror::Error;

/// A consistency problem found by one of the validation pipelines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error("empty ClassType found")]
    EmptyClassType,

    #[error("duplicate ClassType: {0}")]
    DuplicateClassType(String),

    #[error("empty EnumType found")]
    EmptyEnumType,

    #[error("duplicate EnumType: {0}")]
    DuplicateEnumType(String),

    #[error("empty field name found")]
    EmptyFieldName,

    #[error("duplicate field name: {0}")]
    DuplicateFieldName(String),

    #[error("enum field '{field}' does not reference any EnumType")]
    MissingEnumType { field: String },

    #[error("enum field '{field}' references undefined EnumType '{enum_type}'")]
    UndefinedEnumType { field: String, enum_type: String },

    #[error("enum field '{field}' defaults to '{symbol}', which is not an item of '{enum_type}'")]
    UnknownEnumSymbol {
        field: String,
        enum_type: String,
        symbol: String,
    },

    #[error("empty EnumStr found")]
    EmptyEnumStr,

    #[error("duplicate EnumStr: {0}")]
    DuplicateEnumStr(String),

    #[error("duplicate EnumValue: {0}")]
    DuplicateEnumValue(i32),

    #[error("empty variable name found")]
    EmptyVariableName,

    #[error("duplicate variable name: {0}")]
    DuplicateVariable(String),

    #[error("node '{class_type}': {source}")]
    InNode {
        class_type: String,
        #[source]
        source: Box<VerifyError>,
    },

    #[error("enum '{enum_type}': {source}")]
    InEnum {
        enum_type: String,
        #[source]
        source: Box<VerifyError>,
    },
}

impl VerifyError {
    pub(crate) fn in_node(class_type: &str, source: VerifyError) -> Self {
        VerifyError::InNode {
            class_type: class_type.to_string(),
            source: Box::new(source),
        }
    }

    pub(crate) fn in_enum(enum_type: &str, source: VerifyError) -> Self {
        VerifyError::InEnum {
            enum_type: enum_type.to_string(),
            source: Box::new(source),
        }
    }
}

/// Outcome of a validation pipeline. The default value means "no error".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyInfo {
    error: Option<VerifyError>,
}

impl VerifyInfo {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Human-readable message; empty on success.
    pub fn msg(&self) -> String {
        self.error
            .as_ref()
            .map(|e| e.to_string())
            .unwrap_or_default()
    }

    pub fn error(&self) -> Option<&VerifyError> {
        self.error.as_ref()
    }

    pub fn into_result(self) -> Result<(), VerifyError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl From<VerifyError> for VerifyInfo {
    fn from(error: VerifyError) -> Self {
        Self { error: Some(error) }
    }
}

impl From<Result<(), VerifyError>> for VerifyInfo {
    fn from(result: Result<(), VerifyError>) -> Self {
        Self {
            error: result.err(),
        }
    }
}

impl fmt::Display for VerifyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(e) => write!(f, "{}", e),
            None => f.write_str("ok"),
        }
    }
}

/// Scans all pairs `(i, j)` with `i < j` in collection order and returns the
/// key of the first pair whose keys are equal.
pub(crate) fn first_duplicate<'a, T>(
    items: &'a [T],
    key: impl Fn(&'a T) -> &'a str,
) -> Option<&'a str> {
    items
        .iter()
        .tuple_combinations()
        .find(|(a, b)| key(*a) == key(*b))
        .map(|(a, _)| key(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_duplicate_reports_earliest_pair() {
        let items = ["a", "b", "c", "b", "a"];
        assert_eq!(first_duplicate(&items, |s| *s), Some("a"));
        assert_eq!(first_duplicate(&items[1..], |s| *s), Some("b"));
        assert_eq!(first_duplicate(&items[..3], |s| *s), None);
    }

    #[test]
    fn test_default_info_is_success() {
        let info = VerifyInfo::default();
        assert!(!info.has_error());
        assert!(info.msg().is_empty());
    }
}
