/// Message load and render command.
pub mod render;
/// Schema table report.
pub mod schema;
