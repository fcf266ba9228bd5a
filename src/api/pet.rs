//! Pet API handlers, including co-ownership

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use super::error::ApiResult;
use crate::domain::{Pet, PetInput};
use crate::infrastructure::AppState;

/// Request body for creating or updating a pet
#[derive(Debug, Deserialize, ToSchema)]
pub struct PetRequest {
    /// Must match the path id on update when present
    pub pet_id: Option<i32>,
    pub name: String,
    #[serde(alias = "type")]
    pub pet_type: Option<String>,
    pub breed: Option<String>,
    pub dob: Option<NaiveDate>,
    /// Full owner set; on update, owners missing from the list are removed
    #[serde(default)]
    pub owner_ids: Vec<i32>,
    pub version: Option<i32>,
}

impl From<PetRequest> for PetInput {
    fn from(req: PetRequest) -> Self {
        PetInput {
            name: req.name,
            pet_type: req.pet_type,
            breed: req.breed,
            dob: req.dob,
            owner_ids: req.owner_ids,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/Pet/ListPets",
    responses((status = 200, description = "All pets with their owner ids", body = [Pet]))
)]
pub async fn list_pets(State(state): State<AppState>) -> ApiResult<Json<Vec<Pet>>> {
    Ok(Json(state.pets.list_pets().await?))
}

#[utoipa::path(
    get,
    path = "/api/Pet/FindPet/{id}",
    params(("id" = i32, Path, description = "Pet id")),
    responses(
        (status = 200, description = "Pet found", body = Pet),
        (status = 404, description = "Pet not found")
    )
)]
pub async fn find_pet(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<Json<Pet>> {
    Ok(Json(state.pets.find_pet(id).await?))
}

#[utoipa::path(
    get,
    path = "/api/Pet/ListPetsForMember/{member_id}",
    params(("member_id" = i32, Path, description = "Owner id")),
    responses(
        (status = 200, description = "Pets co-owned by the member", body = [Pet]),
        (status = 404, description = "Member not found")
    )
)]
pub async fn list_pets_for_member(
    State(state): State<AppState>,
    Path(member_id): Path<i32>,
) -> ApiResult<Json<Vec<Pet>>> {
    Ok(Json(state.pets.list_pets_for_member(member_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/Pet/AddPet",
    request_body = PetRequest,
    responses(
        (status = 201, description = "Pet created", body = Pet),
        (status = 400, description = "Invalid pet fields"),
        (status = 404, description = "An owner does not exist")
    )
)]
pub async fn add_pet(
    State(state): State<AppState>,
    Json(payload): Json<PetRequest>,
) -> ApiResult<(StatusCode, Json<Pet>)> {
    let pet = state.pets.add_pet(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(pet)))
}

#[utoipa::path(
    put,
    path = "/api/Pet/UpdatePet/{id}",
    params(("id" = i32, Path, description = "Pet id")),
    request_body = PetRequest,
    responses(
        (status = 200, description = "Pet updated", body = Pet),
        (status = 400, description = "Mismatched id or invalid fields"),
        (status = 404, description = "Pet or owner not found"),
        (status = 409, description = "Stale version")
    )
)]
pub async fn update_pet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<PetRequest>,
) -> ApiResult<Json<Pet>> {
    let body_id = payload.pet_id;
    let version = payload.version;
    let pet = state
        .pets
        .update_pet(id, body_id, payload.into(), version)
        .await?;
    Ok(Json(pet))
}

#[utoipa::path(
    delete,
    path = "/api/Pet/DeletePet/{id}",
    params(("id" = i32, Path, description = "Pet id")),
    responses(
        (status = 204, description = "Pet and its ownership rows deleted"),
        (status = 404, description = "Pet not found")
    )
)]
pub async fn delete_pet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    state.pets.delete_pet(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/Pet/AddOwner/{pet_id}/{member_id}",
    params(
        ("pet_id" = i32, Path, description = "Pet id"),
        ("member_id" = i32, Path, description = "New co-owner")
    ),
    responses(
        (status = 201, description = "Owner added", body = Pet),
        (status = 404, description = "Pet or member not found"),
        (status = 409, description = "Member already owns the pet")
    )
)]
pub async fn add_owner(
    State(state): State<AppState>,
    Path((pet_id, member_id)): Path<(i32, i32)>,
) -> ApiResult<(StatusCode, Json<Pet>)> {
    let pet = state.pets.add_owner(pet_id, member_id).await?;
    Ok((StatusCode::CREATED, Json(pet)))
}

#[utoipa::path(
    delete,
    path = "/api/Pet/RemoveOwner/{pet_id}/{member_id}",
    params(
        ("pet_id" = i32, Path, description = "Pet id"),
        ("member_id" = i32, Path, description = "Owner to remove")
    ),
    responses(
        (status = 204, description = "Owner removed"),
        (status = 404, description = "No such ownership")
    )
)]
pub async fn remove_owner(
    State(state): State<AppState>,
    Path((pet_id, member_id)): Path<(i32, i32)>,
) -> ApiResult<StatusCode> {
    state.pets.remove_owner(pet_id, member_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
