//! Database module: schema model, statement generation, and repositories.
//!
//! Layout:
//! - `schema.rs`: ordered column model + SQL statement generator
//! - `models.rs`: typed attribute records and row structs
//! - `gateway.rs`: single-connection execution adapter
//! - `repository.rs`: entity-scoped create/read facade

pub mod gateway;
pub mod models;
pub mod repository;
pub mod schema;

pub use gateway::{Gateway, SqlitePool};
pub use models::{ProfileAttributes, ProfileRow, SqlValue, SurveyAttributes, SurveyRow};
pub use repository::{ProfileRepository, Repository, SurveyRepository};
pub use schema::Table;
