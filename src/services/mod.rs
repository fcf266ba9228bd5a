//! Services Layer
//!
//! Business rules on top of the repository traits. Axum handlers call these;
//! they never touch SeaORM directly.

pub mod connection_service;
pub mod home_service;
pub mod member_service;
pub mod pet_service;

// Re-export for convenience
pub use connection_service::ConnectionService;
pub use home_service::{HomeService, HomeView};
pub use member_service::MemberService;
pub use pet_service::PetService;
