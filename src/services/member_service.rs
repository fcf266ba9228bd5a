//! Member Service - member CRUD with field-level validation

use std::sync::Arc;

use crate::domain::validation::validate_member;
use crate::domain::{ConnectionRepository, DomainError, Member, MemberInput, MemberRepository};

#[derive(Clone)]
pub struct MemberService {
    members: Arc<dyn MemberRepository>,
    connections: Arc<dyn ConnectionRepository>,
}

impl MemberService {
    pub fn new(
        members: Arc<dyn MemberRepository>,
        connections: Arc<dyn ConnectionRepository>,
    ) -> Self {
        Self {
            members,
            connections,
        }
    }

    pub async fn list_members(&self) -> Result<Vec<Member>, DomainError> {
        self.members.find_all().await
    }

    pub async fn find_member(&self, id: i32) -> Result<Member, DomainError> {
        self.members
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("member", id))
    }

    pub async fn add_member(&self, input: MemberInput) -> Result<Member, DomainError> {
        let input = validate_member(input)?;
        let member = self.members.create(input).await?;
        tracing::info!("Member {} created", member.member_id);
        Ok(member)
    }

    /// Replace scalar fields.
    ///
    /// `body_id`, when given, must match `id`. `expected_version` defaults to
    /// the currently stored version.
    pub async fn update_member(
        &self,
        id: i32,
        body_id: Option<i32>,
        input: MemberInput,
        expected_version: Option<i32>,
    ) -> Result<Member, DomainError> {
        if let Some(body_id) = body_id
            && body_id != id
        {
            return Err(DomainError::InvalidInput(format!(
                "member id {} in body does not match {} in path",
                body_id, id
            )));
        }

        let input = validate_member(input)?;
        let current = self.find_member(id).await?;
        let expected_version = expected_version.unwrap_or(current.version);
        if expected_version != current.version {
            return Err(DomainError::ConcurrencyConflict(format!(
                "member {} is at version {}, not {}",
                id, current.version, expected_version
            )));
        }

        let member = self.members.update(id, input, expected_version).await?;
        tracing::info!("Member {} updated to version {}", id, member.version);
        Ok(member)
    }

    /// Delete a member. Follow edges are never cascaded: a member that still
    /// follows or is followed cannot be deleted.
    pub async fn delete_member(&self, id: i32) -> Result<(), DomainError> {
        if !self.members.exists(id).await? {
            return Err(DomainError::not_found("member", id));
        }

        let edges = self.connections.count_touching(id).await?;
        if edges > 0 {
            tracing::warn!("Refusing to delete member {} with {} connections", id, edges);
            return Err(DomainError::Conflict(format!(
                "member {} still has {} connections",
                id, edges
            )));
        }

        self.members.delete(id).await?;
        tracing::info!("Member {} deleted", id);
        Ok(())
    }
}
