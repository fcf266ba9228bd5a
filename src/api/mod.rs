pub mod connection;
pub mod error;
pub mod health;
pub mod home;
pub mod member;
pub mod pet;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::infrastructure::AppState;

pub use error::{ApiError, ApiResult};

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Members
        .route("/Member/ListMembers", get(member::list_members))
        .route("/Member/FindMember/:id", get(member::find_member))
        .route("/Member/AddMember", post(member::add_member))
        .route("/Member/UpdateMember/:id", put(member::update_member))
        .route("/Member/DeleteMember/:id", delete(member::delete_member))
        // Pets
        .route("/Pet/ListPets", get(pet::list_pets))
        .route("/Pet/FindPet/:id", get(pet::find_pet))
        .route(
            "/Pet/ListPetsForMember/:member_id",
            get(pet::list_pets_for_member),
        )
        .route("/Pet/AddPet", post(pet::add_pet))
        .route("/Pet/UpdatePet/:id", put(pet::update_pet))
        .route("/Pet/DeletePet/:id", delete(pet::delete_pet))
        .route("/Pet/AddOwner/:pet_id/:member_id", post(pet::add_owner))
        .route(
            "/Pet/RemoveOwner/:pet_id/:member_id",
            delete(pet::remove_owner),
        )
        // Follow graph
        .route(
            "/Connection/NewFollow/:member_id/:following_id",
            post(connection::new_follow),
        )
        .route(
            "/Connection/Unfollow/:member_id/:following_id",
            delete(connection::unfollow),
        )
        .route("/Connection/Followers/:member_id", get(connection::followers))
        .route("/Connection/Following/:member_id", get(connection::following))
        .route(
            "/Connection/Connections/:member_id",
            get(connection::member_connections),
        )
        // Raw edges
        .route(
            "/Connection/ListConnections",
            get(connection::list_connections),
        )
        .route(
            "/Connection/FindConnection/:id",
            get(connection::find_connection),
        )
        .route("/Connection/AddConnection", post(connection::add_connection))
        .route(
            "/Connection/UpdateConnection/:id",
            put(connection::update_connection),
        )
        .route(
            "/Connection/DeleteConnection/:id",
            delete(connection::delete_connection),
        )
        // Home
        .route("/Home/:member_id", get(home::home))
        .with_state(state)
}
