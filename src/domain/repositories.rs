//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::DomainError;

/// Member data for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Member {
    pub member_id: i32,
    pub member_name: String,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub version: i32,
    /// Connections in which this member is followed
    pub follower_connection_ids: Vec<i32>,
    /// Connections in which this member follows someone
    pub following_connection_ids: Vec<i32>,
}

/// Id and display name, used wherever a member appears as the far end of an edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BasicMember {
    pub member_id: i32,
    pub member_name: String,
}

/// Scalar member fields accepted by create and update
#[derive(Debug, Clone, Default)]
pub struct MemberInput {
    pub member_name: String,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
}

/// Repository trait for Member entity
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find all members, ordered by id
    async fn find_all(&self) -> Result<Vec<Member>, DomainError>;

    /// Find a member by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Member>, DomainError>;

    /// Check whether a member exists
    async fn exists(&self, id: i32) -> Result<bool, DomainError>;

    /// Create a new member with version 1
    async fn create(&self, input: MemberInput) -> Result<Member, DomainError>;

    /// Replace scalar fields if the stored version still equals `expected_version`
    async fn update(
        &self,
        id: i32,
        input: MemberInput,
        expected_version: i32,
    ) -> Result<Member, DomainError>;

    /// Delete a member and its ownership rows
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Pet data for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Pet {
    pub pet_id: i32,
    pub name: String,
    pub pet_type: Option<String>,
    pub breed: Option<String>,
    pub dob: Option<NaiveDate>,
    pub version: i32,
    pub owner_ids: Vec<i32>,
}

/// Pet fields accepted by create and update
#[derive(Debug, Clone, Default)]
pub struct PetInput {
    pub name: String,
    pub pet_type: Option<String>,
    pub breed: Option<String>,
    pub dob: Option<NaiveDate>,
    pub owner_ids: Vec<i32>,
}

/// Repository trait for Pet entity and its ownership rows
#[async_trait]
pub trait PetRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Pet>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Pet>, DomainError>;

    /// Pets co-owned by a member
    async fn find_by_owner(&self, owner_id: i32) -> Result<Vec<Pet>, DomainError>;

    async fn exists(&self, id: i32) -> Result<bool, DomainError>;

    /// Insert the pet and one ownership row per owner id, atomically
    async fn create(&self, input: PetInput) -> Result<Pet, DomainError>;

    /// Replace scalar fields and reconcile the owner set, atomically
    async fn update(&self, id: i32, input: PetInput, expected_version: i32)
    -> Result<Pet, DomainError>;

    /// Remove ownership rows, then the pet row, atomically
    async fn delete(&self, id: i32) -> Result<(), DomainError>;

    async fn has_owner(&self, pet_id: i32, owner_id: i32) -> Result<bool, DomainError>;

    async fn add_owner(&self, pet_id: i32, owner_id: i32) -> Result<(), DomainError>;

    /// Returns the number of ownership rows removed
    async fn remove_owner(&self, pet_id: i32, owner_id: i32) -> Result<u64, DomainError>;
}

/// Follow edge for API responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Connection {
    pub connection_id: i32,
    pub follower_id: i32,
    pub following_id: i32,
    pub follower_name: String,
    pub following_name: String,
}

/// Repository trait for the follow graph
#[async_trait]
pub trait ConnectionRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Connection>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Connection>, DomainError>;

    /// Find the edge `follower_id -> following_id`
    async fn find_edge(
        &self,
        follower_id: i32,
        following_id: i32,
    ) -> Result<Option<Connection>, DomainError>;

    async fn create(&self, follower_id: i32, following_id: i32)
    -> Result<Connection, DomainError>;

    /// Repoint an existing edge
    async fn update(
        &self,
        id: i32,
        follower_id: i32,
        following_id: i32,
    ) -> Result<Connection, DomainError>;

    async fn delete(&self, id: i32) -> Result<(), DomainError>;

    /// Members following `member_id`, in edge insertion order
    async fn followers_of(&self, member_id: i32) -> Result<Vec<BasicMember>, DomainError>;

    /// Members that `member_id` follows, in edge insertion order
    async fn following_of(&self, member_id: i32) -> Result<Vec<BasicMember>, DomainError>;

    /// Every edge touching `member_id` in either direction
    async fn touching(&self, member_id: i32) -> Result<Vec<Connection>, DomainError>;

    /// Number of edges touching `member_id` in either direction
    async fn count_touching(&self, member_id: i32) -> Result<u64, DomainError>;
}
