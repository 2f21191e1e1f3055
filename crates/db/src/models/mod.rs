//! Document models and DTOs.
//!
//! Each submodule contains:
//! - A `Deserialize` entity struct matching the stored document
//! - A `Serialize` insert struct (no id; the store assigns it)
//! - `Deserialize` create/update request DTOs (all `Option` fields)

pub mod game;
