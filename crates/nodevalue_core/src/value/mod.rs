mod color;
mod data;
mod error;
mod kind;
mod parse;
mod vector;

/// Color record and its construction forms.
pub use color::{Color, ColorValue};
/// Tagged value union.
pub use data::DataValue;
/// Error and result aliases.
pub use error::{Result, ValueError};
/// Closed set of value kinds.
pub use kind::DataType;
/// Literal parsing options.
pub use parse::ParseOptions;
/// Three-component vector and point records.
pub use vector::{Point3, Vec3};
