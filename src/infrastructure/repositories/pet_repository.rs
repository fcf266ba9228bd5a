//! SeaORM implementation of PetRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

use crate::domain::{DomainError, Pet, PetInput, PetRepository};
use crate::models::pet::{self, ActiveModel, Column, Entity as PetEntity};
use crate::models::pet_owner::{
    self, ActiveModel as PetOwnerActiveModel, Entity as PetOwnerEntity,
};

/// SeaORM-based implementation of PetRepository
pub struct SeaOrmPetRepository {
    db: DatabaseConnection,
}

impl SeaOrmPetRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Owner ids per pet id, in ownership insertion order
async fn owner_ids<C: ConnectionTrait>(
    db: &C,
    pet_ids: Vec<i32>,
) -> Result<HashMap<i32, Vec<i32>>, DomainError> {
    let rows = PetOwnerEntity::find()
        .filter(pet_owner::Column::PetId.is_in(pet_ids))
        .order_by_asc(pet_owner::Column::Id)
        .all(db)
        .await?;

    let mut owners: HashMap<i32, Vec<i32>> = HashMap::new();
    for row in rows {
        owners.entry(row.pet_id).or_default().push(row.owner_id);
    }
    Ok(owners)
}

async fn with_owner_ids<C: ConnectionTrait>(
    db: &C,
    models: Vec<pet::Model>,
) -> Result<Vec<Pet>, DomainError> {
    if models.is_empty() {
        return Ok(Vec::new());
    }

    let ids = models.iter().map(|p| p.id).collect();
    let mut owners = owner_ids(db, ids).await?;

    Ok(models
        .into_iter()
        .map(|p| {
            let ids = owners.remove(&p.id).unwrap_or_default();
            to_pet(p, ids)
        })
        .collect())
}

fn to_pet(model: pet::Model, owner_ids: Vec<i32>) -> Pet {
    Pet {
        pet_id: model.id,
        name: model.name,
        pet_type: model.pet_type,
        breed: model.breed,
        dob: model.dob,
        version: model.version,
        owner_ids,
    }
}

async fn insert_owner<C: ConnectionTrait>(
    db: &C,
    pet_id: i32,
    owner_id: i32,
) -> Result<(), DomainError> {
    let row = PetOwnerActiveModel {
        pet_id: Set(pet_id),
        owner_id: Set(owner_id),
        ..Default::default()
    };
    row.insert(db).await?;
    Ok(())
}

#[async_trait]
impl PetRepository for SeaOrmPetRepository {
    async fn find_all(&self) -> Result<Vec<Pet>, DomainError> {
        let pets = PetEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        with_owner_ids(&self.db, pets).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Pet>, DomainError> {
        let Some(model) = PetEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        Ok(with_owner_ids(&self.db, vec![model]).await?.pop())
    }

    async fn find_by_owner(&self, owner_id: i32) -> Result<Vec<Pet>, DomainError> {
        let pets = PetEntity::find()
            .join(JoinType::InnerJoin, pet_owner::Relation::Pet.def().rev())
            .filter(pet_owner::Column::OwnerId.eq(owner_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        with_owner_ids(&self.db, pets).await
    }

    async fn exists(&self, id: i32) -> Result<bool, DomainError> {
        let count = PetEntity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn create(&self, input: PetInput) -> Result<Pet, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();
        let txn = self.db.begin().await?;

        let pet = ActiveModel {
            name: Set(input.name),
            pet_type: Set(input.pet_type),
            breed: Set(input.breed),
            dob: Set(input.dob),
            version: Set(1),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };
        let model = pet.insert(&txn).await?;

        for owner_id in &input.owner_ids {
            insert_owner(&txn, model.id, *owner_id).await?;
        }

        txn.commit().await?;
        Ok(to_pet(model, input.owner_ids))
    }

    async fn update(
        &self,
        id: i32,
        input: PetInput,
        expected_version: i32,
    ) -> Result<Pet, DomainError> {
        let txn = self.db.begin().await?;

        let changes = ActiveModel {
            name: Set(input.name),
            pet_type: Set(input.pet_type),
            breed: Set(input.breed),
            dob: Set(input.dob),
            version: Set(expected_version + 1),
            updated_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        let result = PetEntity::update_many()
            .set(changes)
            .filter(Column::Id.eq(id))
            .filter(Column::Version.eq(expected_version))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            let still_there = PetEntity::find_by_id(id).count(&txn).await? > 0;
            txn.rollback().await?;
            if still_there {
                return Err(DomainError::ConcurrencyConflict(format!(
                    "pet {} was modified since version {}",
                    id, expected_version
                )));
            }
            return Err(DomainError::not_found("pet", id));
        }

        // Reconcile the owner set
        let current: Vec<i32> = owner_ids(&txn, vec![id])
            .await?
            .remove(&id)
            .unwrap_or_default();

        let dropped: Vec<i32> = current
            .iter()
            .copied()
            .filter(|o| !input.owner_ids.contains(o))
            .collect();
        if !dropped.is_empty() {
            PetOwnerEntity::delete_many()
                .filter(pet_owner::Column::PetId.eq(id))
                .filter(pet_owner::Column::OwnerId.is_in(dropped))
                .exec(&txn)
                .await?;
        }

        for owner_id in input.owner_ids.iter().filter(|o| !current.contains(o)) {
            insert_owner(&txn, id, *owner_id).await?;
        }

        let model = PetEntity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| DomainError::not_found("pet", id))?;
        let pet = with_owner_ids(&txn, vec![model])
            .await?
            .pop()
            .ok_or_else(|| DomainError::not_found("pet", id))?;

        txn.commit().await?;
        Ok(pet)
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;

        // Ownership rows first; pet_owners carries no cascade
        PetOwnerEntity::delete_many()
            .filter(pet_owner::Column::PetId.eq(id))
            .exec(&txn)
            .await?;

        let result = PetEntity::delete_by_id(id).exec(&txn).await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(DomainError::not_found("pet", id));
        }

        txn.commit().await?;
        Ok(())
    }

    async fn has_owner(&self, pet_id: i32, owner_id: i32) -> Result<bool, DomainError> {
        let count = PetOwnerEntity::find()
            .filter(pet_owner::Column::PetId.eq(pet_id))
            .filter(pet_owner::Column::OwnerId.eq(owner_id))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn add_owner(&self, pet_id: i32, owner_id: i32) -> Result<(), DomainError> {
        insert_owner(&self.db, pet_id, owner_id).await
    }

    async fn remove_owner(&self, pet_id: i32, owner_id: i32) -> Result<u64, DomainError> {
        let result = PetOwnerEntity::delete_many()
            .filter(pet_owner::Column::PetId.eq(pet_id))
            .filter(pet_owner::Column::OwnerId.eq(owner_id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
