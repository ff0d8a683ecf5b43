//! # bt-template - Node Template Registry for Behavior-Tree Editors
//!
//! **bt-template** holds the schema side of a behavior-tree authoring tool: the
//! catalog of node kinds (composite, decorator, condition, action), the typed
//! fields each kind carries, the enums those fields draw their values from, a
//! table of global variables, and the compact binary encoding used to persist
//! field values inside tree documents.
//!
//! ## Core Workflow
//!
//! 1.  **Seed**: Create a [`NodeTemplate`](template::NodeTemplate) with
//!     `NodeTemplate::with_builtins()`, or start empty and add your own definitions.
//! 2.  **Edit**: Add and remove node classes, enums and variables. Mutations return a
//!     `Result`; wrap the registry in a [`TemplateSession`](session::TemplateSession)
//!     to have rejections reported to a message sink instead.
//! 3.  **Verify**: Run the validation pipelines before saving or exporting.
//!     They never fail loudly; each returns a [`VerifyInfo`](template::VerifyInfo).
//! 4.  **Encode**: Write field defaults or values with the [`field`] codec.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bt_template::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut template = NodeTemplate::with_builtins();
//!
//!     // A custom action with one enum-typed field.
//!     let attack = NodeDefine::new("Attack", NodeType::Action)
//!         .with_label("Attack")
//!         .with_field(NodeField::enumeration("Compare", "CompareType", "Greater"));
//!     template.add_class(attack)?;
//!
//!     let info = template.verify_all();
//!     if info.has_error() {
//!         eprintln!("template is inconsistent: {}", info.msg());
//!     }
//!
//!     // Encode the node's defaults as a tree-document field block.
//!     let node = template.find_node("Attack").expect("just added");
//!     let mut writer = ByteWriter::new();
//!     node.write_defaults(&mut writer)?;
//!
//!     let mut reader = ByteReader::new(writer.as_bytes());
//!     let fields = node.read_fields(&mut reader)?;
//!     assert_eq!(fields[0].value, FieldValue::enumeration("CompareType", "Greater"));
//!
//!     template.save("template.bin")?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod field;
pub mod prelude;
pub mod session;
pub mod template;
