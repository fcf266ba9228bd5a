//! SeaORM implementation of ConnectionRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, IntoActiveModel,
    JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

use crate::domain::{BasicMember, Connection, ConnectionRepository, DomainError};
use crate::models::connection::{self, ActiveModel, Column, Entity as ConnectionEntity};
use crate::models::member::{self, Entity as MemberEntity};

/// SeaORM-based implementation of ConnectionRepository
pub struct SeaOrmConnectionRepository {
    db: DatabaseConnection,
}

impl SeaOrmConnectionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolve both member names for each edge
    async fn with_names(
        &self,
        edges: Vec<connection::Model>,
    ) -> Result<Vec<Connection>, DomainError> {
        if edges.is_empty() {
            return Ok(Vec::new());
        }

        let mut ids: Vec<i32> = edges
            .iter()
            .flat_map(|e| [e.follower_id, e.following_id])
            .collect();
        ids.sort_unstable();
        ids.dedup();

        let names: HashMap<i32, String> = MemberEntity::find()
            .filter(member::Column::Id.is_in(ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|m| (m.id, m.member_name))
            .collect();

        let name_of = |id: i32| names.get(&id).cloned().unwrap_or_default();

        Ok(edges
            .into_iter()
            .map(|e| Connection {
                connection_id: e.id,
                follower_id: e.follower_id,
                following_id: e.following_id,
                follower_name: name_of(e.follower_id),
                following_name: name_of(e.following_id),
            })
            .collect())
    }

    async fn one_with_names(&self, edge: connection::Model) -> Result<Connection, DomainError> {
        let id = edge.id;
        self.with_names(vec![edge])
            .await?
            .pop()
            .ok_or_else(|| DomainError::not_found("connection", id))
    }
}

fn touching_condition(member_id: i32) -> Condition {
    Condition::any()
        .add(Column::FollowerId.eq(member_id))
        .add(Column::FollowingId.eq(member_id))
}

fn to_basic(model: member::Model) -> BasicMember {
    BasicMember {
        member_id: model.id,
        member_name: model.member_name,
    }
}

#[async_trait]
impl ConnectionRepository for SeaOrmConnectionRepository {
    async fn find_all(&self) -> Result<Vec<Connection>, DomainError> {
        let edges = ConnectionEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        self.with_names(edges).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Connection>, DomainError> {
        match ConnectionEntity::find_by_id(id).one(&self.db).await? {
            Some(edge) => Ok(Some(self.one_with_names(edge).await?)),
            None => Ok(None),
        }
    }

    async fn find_edge(
        &self,
        follower_id: i32,
        following_id: i32,
    ) -> Result<Option<Connection>, DomainError> {
        let edge = ConnectionEntity::find()
            .filter(Column::FollowerId.eq(follower_id))
            .filter(Column::FollowingId.eq(following_id))
            .one(&self.db)
            .await?;

        match edge {
            Some(edge) => Ok(Some(self.one_with_names(edge).await?)),
            None => Ok(None),
        }
    }

    async fn create(
        &self,
        follower_id: i32,
        following_id: i32,
    ) -> Result<Connection, DomainError> {
        let edge = ActiveModel {
            follower_id: Set(follower_id),
            following_id: Set(following_id),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        let model = edge.insert(&self.db).await?;
        self.one_with_names(model).await
    }

    async fn update(
        &self,
        id: i32,
        follower_id: i32,
        following_id: i32,
    ) -> Result<Connection, DomainError> {
        let existing = ConnectionEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found("connection", id))?;

        let mut edge = existing.into_active_model();
        edge.follower_id = Set(follower_id);
        edge.following_id = Set(following_id);

        let model = edge.update(&self.db).await?;
        self.one_with_names(model).await
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = ConnectionEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("connection", id));
        }

        Ok(())
    }

    async fn followers_of(&self, member_id: i32) -> Result<Vec<BasicMember>, DomainError> {
        let members = MemberEntity::find()
            .join(JoinType::InnerJoin, connection::Relation::Follower.def().rev())
            .filter(Column::FollowingId.eq(member_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(members.into_iter().map(to_basic).collect())
    }

    async fn following_of(&self, member_id: i32) -> Result<Vec<BasicMember>, DomainError> {
        let members = MemberEntity::find()
            .join(JoinType::InnerJoin, connection::Relation::Following.def().rev())
            .filter(Column::FollowerId.eq(member_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(members.into_iter().map(to_basic).collect())
    }

    async fn touching(&self, member_id: i32) -> Result<Vec<Connection>, DomainError> {
        let edges = ConnectionEntity::find()
            .filter(touching_condition(member_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        self.with_names(edges).await
    }

    async fn count_touching(&self, member_id: i32) -> Result<u64, DomainError> {
        let count = ConnectionEntity::find()
            .filter(touching_condition(member_id))
            .count(&self.db)
            .await?;
        Ok(count)
    }
}
