//! Pet Service - pet CRUD and the many-to-many ownership relation

use std::sync::Arc;

use crate::domain::validation::validate_pet;
use crate::domain::{DomainError, MemberRepository, Pet, PetInput, PetRepository};

#[derive(Clone)]
pub struct PetService {
    pets: Arc<dyn PetRepository>,
    members: Arc<dyn MemberRepository>,
}

impl PetService {
    pub fn new(pets: Arc<dyn PetRepository>, members: Arc<dyn MemberRepository>) -> Self {
        Self { pets, members }
    }

    async fn ensure_owners_exist(&self, owner_ids: &[i32]) -> Result<(), DomainError> {
        for owner_id in owner_ids {
            if !self.members.exists(*owner_id).await? {
                return Err(DomainError::not_found("member", *owner_id));
            }
        }
        Ok(())
    }

    pub async fn list_pets(&self) -> Result<Vec<Pet>, DomainError> {
        self.pets.find_all().await
    }

    pub async fn find_pet(&self, id: i32) -> Result<Pet, DomainError> {
        self.pets
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("pet", id))
    }

    pub async fn list_pets_for_member(&self, member_id: i32) -> Result<Vec<Pet>, DomainError> {
        if !self.members.exists(member_id).await? {
            return Err(DomainError::not_found("member", member_id));
        }
        self.pets.find_by_owner(member_id).await
    }

    /// Create a pet together with its ownership rows. Nothing is written when
    /// any owner is missing.
    pub async fn add_pet(&self, input: PetInput) -> Result<Pet, DomainError> {
        let input = validate_pet(input)?;
        self.ensure_owners_exist(&input.owner_ids).await?;

        let pet = self.pets.create(input).await?;
        tracing::info!("Pet {} created with owners {:?}", pet.pet_id, pet.owner_ids);
        Ok(pet)
    }

    /// Replace scalar fields and reconcile the owner set.
    ///
    /// `body_id`, when given, must match `id`. `expected_version` defaults to
    /// the currently stored version.
    pub async fn update_pet(
        &self,
        id: i32,
        body_id: Option<i32>,
        input: PetInput,
        expected_version: Option<i32>,
    ) -> Result<Pet, DomainError> {
        if let Some(body_id) = body_id
            && body_id != id
        {
            return Err(DomainError::InvalidInput(format!(
                "pet id {} in body does not match {} in path",
                body_id, id
            )));
        }

        let input = validate_pet(input)?;
        let current = self.find_pet(id).await?;
        let expected_version = expected_version.unwrap_or(current.version);
        if expected_version != current.version {
            return Err(DomainError::ConcurrencyConflict(format!(
                "pet {} is at version {}, not {}",
                id, current.version, expected_version
            )));
        }

        self.ensure_owners_exist(&input.owner_ids).await?;

        let pet = self.pets.update(id, input, expected_version).await?;
        tracing::info!("Pet {} updated to version {}", id, pet.version);
        Ok(pet)
    }

    /// Remove the pet's ownership rows and then the pet, in one transaction.
    pub async fn delete_pet(&self, id: i32) -> Result<(), DomainError> {
        self.pets.delete(id).await?;
        tracing::info!("Pet {} deleted", id);
        Ok(())
    }

    pub async fn add_owner(&self, pet_id: i32, member_id: i32) -> Result<Pet, DomainError> {
        if !self.pets.exists(pet_id).await? {
            return Err(DomainError::not_found("pet", pet_id));
        }
        if !self.members.exists(member_id).await? {
            return Err(DomainError::not_found("member", member_id));
        }
        if self.pets.has_owner(pet_id, member_id).await? {
            return Err(DomainError::Conflict(format!(
                "member {} already owns pet {}",
                member_id, pet_id
            )));
        }

        self.pets.add_owner(pet_id, member_id).await?;
        tracing::info!("Member {} added as owner of pet {}", member_id, pet_id);
        self.find_pet(pet_id).await
    }

    pub async fn remove_owner(&self, pet_id: i32, member_id: i32) -> Result<(), DomainError> {
        let removed = self.pets.remove_owner(pet_id, member_id).await?;
        if removed == 0 {
            return Err(DomainError::NotFound(format!(
                "member {} does not own pet {}",
                member_id, pet_id
            )));
        }

        tracing::info!("Member {} removed as owner of pet {}", member_id, pet_id);
        Ok(())
    }
}
