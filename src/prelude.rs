//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! bt-template crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use bt_template::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let template = NodeTemplate::from_file("path/to/template.bin")?;
//! let info = template.verify_all();
//! println!("{} nodes, {} enums: {}", template.nodes().len(), template.enums().len(), info);
//! # Ok(())
//! # }
//! ```

// Registry and definitions
pub use crate::template::{
    CustomEnum, EnumItem, GlobalVariable, NodeDefine, NodeTemplate, NodeType, VariableField,
    VerifyError, VerifyInfo,
};

// Field model and codec
pub use crate::field::{ByteReader, ByteWriter, Field, FieldType, FieldValue, NodeField};

// Editor integration
pub use crate::session::{MessageSink, SilentSink, TemplateSession};

// Error types
pub use crate::error::{DecodeError, EncodeError, SnapshotError, TemplateError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
