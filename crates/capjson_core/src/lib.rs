//! Public library API for rendering Cap'n Proto messages as JSON-flavored text.

/// Schema-driven value model, message loading, and rendering.
pub mod dynamic;
