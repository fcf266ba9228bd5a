//! Connection Service - the follow graph
//!
//! Keeps the graph directed, free of self-loops and free of parallel edges.
//! Every mutation checks existence first and leans on the unique index for
//! the race between the check and the insert.

use std::sync::Arc;

use crate::domain::{
    BasicMember, Connection, ConnectionRepository, DomainError, MemberRepository,
};

#[derive(Clone)]
pub struct ConnectionService {
    members: Arc<dyn MemberRepository>,
    connections: Arc<dyn ConnectionRepository>,
}

impl ConnectionService {
    pub fn new(
        members: Arc<dyn MemberRepository>,
        connections: Arc<dyn ConnectionRepository>,
    ) -> Self {
        Self {
            members,
            connections,
        }
    }

    async fn ensure_member(&self, id: i32) -> Result<(), DomainError> {
        if self.members.exists(id).await? {
            Ok(())
        } else {
            Err(DomainError::not_found("member", id))
        }
    }

    /// Validate a prospective edge `follower_id -> following_id`
    async fn check_new_edge(
        &self,
        follower_id: i32,
        following_id: i32,
    ) -> Result<(), DomainError> {
        if follower_id == following_id {
            tracing::warn!("Rejected self-follow by member {}", follower_id);
            return Err(DomainError::InvalidInput(format!(
                "member {} cannot follow themselves",
                follower_id
            )));
        }

        self.ensure_member(follower_id).await?;
        self.ensure_member(following_id).await?;

        if self
            .connections
            .find_edge(follower_id, following_id)
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict(format!(
                "member {} already follows member {}",
                follower_id, following_id
            )));
        }

        Ok(())
    }

    pub async fn follow(
        &self,
        follower_id: i32,
        following_id: i32,
    ) -> Result<Connection, DomainError> {
        self.check_new_edge(follower_id, following_id).await?;

        let connection = self.connections.create(follower_id, following_id).await?;
        tracing::info!(
            "Member {} now follows member {} (connection {})",
            follower_id,
            following_id,
            connection.connection_id
        );
        Ok(connection)
    }

    pub async fn unfollow(&self, follower_id: i32, following_id: i32) -> Result<(), DomainError> {
        let edge = self
            .connections
            .find_edge(follower_id, following_id)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!(
                    "member {} does not follow member {}",
                    follower_id, following_id
                ))
            })?;

        self.connections.delete(edge.connection_id).await?;
        tracing::info!("Member {} unfollowed member {}", follower_id, following_id);
        Ok(())
    }

    pub async fn list_followers(&self, member_id: i32) -> Result<Vec<BasicMember>, DomainError> {
        self.ensure_member(member_id).await?;
        self.connections.followers_of(member_id).await
    }

    pub async fn list_following(&self, member_id: i32) -> Result<Vec<BasicMember>, DomainError> {
        self.ensure_member(member_id).await?;
        self.connections.following_of(member_id).await
    }

    /// Every edge touching the member, in either direction
    pub async fn list_connections_of(
        &self,
        member_id: i32,
    ) -> Result<Vec<Connection>, DomainError> {
        self.ensure_member(member_id).await?;
        self.connections.touching(member_id).await
    }

    pub async fn list_all(&self) -> Result<Vec<Connection>, DomainError> {
        self.connections.find_all().await
    }

    pub async fn find(&self, id: i32) -> Result<Connection, DomainError> {
        self.connections
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("connection", id))
    }

    /// Repoint an edge. `body_id`, when given, must match `id`.
    pub async fn update(
        &self,
        id: i32,
        body_id: Option<i32>,
        follower_id: i32,
        following_id: i32,
    ) -> Result<Connection, DomainError> {
        if let Some(body_id) = body_id
            && body_id != id
        {
            return Err(DomainError::InvalidInput(format!(
                "connection id {} in body does not match {} in path",
                body_id, id
            )));
        }

        let current = self.find(id).await?;
        if current.follower_id == follower_id && current.following_id == following_id {
            return Ok(current);
        }

        self.check_new_edge(follower_id, following_id).await?;

        let updated = self.connections.update(id, follower_id, following_id).await?;
        tracing::info!(
            "Connection {} now links member {} to member {}",
            id,
            follower_id,
            following_id
        );
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        self.connections.delete(id).await?;
        tracing::info!("Connection {} deleted", id);
        Ok(())
    }
}
