//! Tagged value model carried by node graph pins and input fields.

/// Value kinds, payload shapes, the tagged union, and literal parsing.
pub mod value;
