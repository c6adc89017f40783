/// Color conversion command.
pub mod color;
/// Default value command.
pub mod defaults;
/// Kind listing command.
pub mod kinds;
/// Literal parse command.
pub mod parse;
pub(crate) mod util;

/// Boxed error shared by every command.
pub type DynError = Box<dyn std::error::Error + Send + Sync>;

/// Command result type.
pub type Result<T> = std::result::Result<T, DynError>;
