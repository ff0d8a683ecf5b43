pub mod codec;
pub mod definition;
pub mod value;

pub use codec::*;
pub use definition::*;
pub use value::*;
