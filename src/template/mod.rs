pub mod builtin;
pub mod enum_def;
pub mod node_def;
pub mod registry;
pub mod snapshot;
pub mod variable;
pub mod verify;

pub use enum_def::*;
pub use node_def::*;
pub use registry::*;
pub use variable::*;
pub use verify::{VerifyError, VerifyInfo};
