//! Domain layer - Pure business abstractions
//!
//! Domain records, input types, repository traits and the error taxonomy.
//! No Axum here; SeaORM only appears in the `DbErr` conversion.

pub mod errors;
pub mod repositories;
pub mod validation;

pub use errors::DomainError;
pub use repositories::*;
