//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` payload mirroring the request body
//! - Validated create/update DTOs consumed by the repository

pub mod note;
