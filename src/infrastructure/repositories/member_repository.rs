//! SeaORM implementation of MemberRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::domain::{DomainError, Member, MemberInput, MemberRepository};
use crate::models::connection::{self, Entity as ConnectionEntity};
use crate::models::member::{self, ActiveModel, Column, Entity as MemberEntity};
use crate::models::pet_owner::{self, Entity as PetOwnerEntity};

/// SeaORM-based implementation of MemberRepository
pub struct SeaOrmMemberRepository {
    db: DatabaseConnection,
}

impl SeaOrmMemberRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attach the ids of incoming and outgoing edges to each member
    async fn with_connection_ids(
        &self,
        models: Vec<member::Model>,
    ) -> Result<Vec<Member>, DomainError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
        let (mut followers, mut following) = connection_ids(&self.db, ids).await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let id = m.id;
                to_member(
                    m,
                    followers.remove(&id).unwrap_or_default(),
                    following.remove(&id).unwrap_or_default(),
                )
            })
            .collect())
    }
}

type EdgeIds = HashMap<i32, Vec<i32>>;

/// Returns (edges where the member is followed, edges where the member follows)
async fn connection_ids<C: ConnectionTrait>(
    db: &C,
    member_ids: Vec<i32>,
) -> Result<(EdgeIds, EdgeIds), DomainError> {
    let edges = ConnectionEntity::find()
        .filter(
            Condition::any()
                .add(connection::Column::FollowerId.is_in(member_ids.clone()))
                .add(connection::Column::FollowingId.is_in(member_ids)),
        )
        .order_by_asc(connection::Column::Id)
        .all(db)
        .await?;

    let mut followers: EdgeIds = HashMap::new();
    let mut following: EdgeIds = HashMap::new();
    for edge in edges {
        followers.entry(edge.following_id).or_default().push(edge.id);
        following.entry(edge.follower_id).or_default().push(edge.id);
    }

    Ok((followers, following))
}

fn to_member(
    model: member::Model,
    follower_connection_ids: Vec<i32>,
    following_connection_ids: Vec<i32>,
) -> Member {
    Member {
        member_id: model.id,
        member_name: model.member_name,
        email: model.email,
        bio: model.bio,
        location: model.location,
        version: model.version,
        follower_connection_ids,
        following_connection_ids,
    }
}

#[async_trait]
impl MemberRepository for SeaOrmMemberRepository {
    async fn find_all(&self) -> Result<Vec<Member>, DomainError> {
        let members = MemberEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        self.with_connection_ids(members).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Member>, DomainError> {
        let Some(model) = MemberEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        Ok(self.with_connection_ids(vec![model]).await?.pop())
    }

    async fn exists(&self, id: i32) -> Result<bool, DomainError> {
        let count = MemberEntity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn create(&self, input: MemberInput) -> Result<Member, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        let member = ActiveModel {
            member_name: Set(input.member_name),
            email: Set(input.email),
            bio: Set(input.bio),
            location: Set(input.location),
            version: Set(1),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = member.insert(&self.db).await?;

        Ok(to_member(result, Vec::new(), Vec::new()))
    }

    async fn update(
        &self,
        id: i32,
        input: MemberInput,
        expected_version: i32,
    ) -> Result<Member, DomainError> {
        let changes = ActiveModel {
            member_name: Set(input.member_name),
            email: Set(input.email),
            bio: Set(input.bio),
            location: Set(input.location),
            version: Set(expected_version + 1),
            updated_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        let result = MemberEntity::update_many()
            .set(changes)
            .filter(Column::Id.eq(id))
            .filter(Column::Version.eq(expected_version))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            // Stale write: tell a vanished row apart from a newer version
            if self.exists(id).await? {
                return Err(DomainError::ConcurrencyConflict(format!(
                    "member {} was modified since version {}",
                    id, expected_version
                )));
            }
            return Err(DomainError::not_found("member", id));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("member", id))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;

        PetOwnerEntity::delete_many()
            .filter(pet_owner::Column::OwnerId.eq(id))
            .exec(&txn)
            .await?;

        // Connections are ON DELETE RESTRICT; a remaining edge aborts the transaction
        let result = MemberEntity::delete_by_id(id).exec(&txn).await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(DomainError::not_found("member", id));
        }

        txn.commit().await?;
        Ok(())
    }
}
