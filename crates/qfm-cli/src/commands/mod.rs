//! CLI command implementations.

pub mod encode;
pub mod schema;
pub mod version;
