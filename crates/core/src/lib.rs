//! Domain layer for the game backlog: identifiers, field validation and the
//! inline-edit state machine. Free of I/O; shared by the store, the HTTP API
//! and the client.

pub mod error;
pub mod game;
pub mod inline_edit;
pub mod types;
