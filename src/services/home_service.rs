//! Home Service - the per-member dashboard

use std::sync::Arc;

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{
    BasicMember, Connection, ConnectionRepository, DomainError, Member, MemberRepository, Pet,
    PetRepository,
};

/// Everything the home page shows for one member
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HomeView {
    pub member: Member,
    pub pets: Vec<Pet>,
    /// Members this member follows
    pub friends: Vec<BasicMember>,
    /// Other members not yet followed, ordered by id
    pub recommended_friends: Vec<BasicMember>,
    pub connections: Vec<Connection>,
}

#[derive(Clone)]
pub struct HomeService {
    members: Arc<dyn MemberRepository>,
    pets: Arc<dyn PetRepository>,
    connections: Arc<dyn ConnectionRepository>,
}

impl HomeService {
    pub fn new(
        members: Arc<dyn MemberRepository>,
        pets: Arc<dyn PetRepository>,
        connections: Arc<dyn ConnectionRepository>,
    ) -> Self {
        Self {
            members,
            pets,
            connections,
        }
    }

    pub async fn home_view(&self, member_id: i32) -> Result<HomeView, DomainError> {
        let member = self
            .members
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| DomainError::not_found("member", member_id))?;

        let pets = self.pets.find_by_owner(member_id).await?;
        let friends = self.connections.following_of(member_id).await?;
        let connections = self.connections.touching(member_id).await?;

        let recommended_friends = self
            .members
            .find_all()
            .await?
            .into_iter()
            .filter(|m| m.member_id != member_id)
            .filter(|m| !friends.iter().any(|f| f.member_id == m.member_id))
            .map(|m| BasicMember {
                member_id: m.member_id,
                member_name: m.member_name,
            })
            .collect();

        Ok(HomeView {
            member,
            pets,
            friends,
            recommended_friends,
            connections,
        })
    }
}
