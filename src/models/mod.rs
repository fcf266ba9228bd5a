pub mod connection;
pub mod member;
pub mod pet;
pub mod pet_owner;
