//! Repository implementations using SeaORM

pub mod connection_repository;
pub mod member_repository;
pub mod pet_repository;

pub use connection_repository::SeaOrmConnectionRepository;
pub use member_repository::SeaOrmMemberRepository;
pub use pet_repository::SeaOrmPetRepository;
