//! Connection API handlers - follow/unfollow and raw edge CRUD

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

use super::error::ApiResult;
use crate::domain::{BasicMember, Connection};
use crate::infrastructure::AppState;

/// Request body for the raw edge endpoints
#[derive(Debug, Deserialize, ToSchema)]
pub struct ConnectionRequest {
    /// Must match the path id on update when present
    pub connection_id: Option<i32>,
    pub follower_id: i32,
    pub following_id: i32,
}

#[utoipa::path(
    post,
    path = "/api/Connection/NewFollow/{member_id}/{following_id}",
    params(
        ("member_id" = i32, Path, description = "Follower"),
        ("following_id" = i32, Path, description = "Member to follow")
    ),
    responses(
        (status = 201, description = "Now following", body = Connection),
        (status = 400, description = "Self-follow"),
        (status = 404, description = "Member not found"),
        (status = 409, description = "Already following")
    )
)]
pub async fn new_follow(
    State(state): State<AppState>,
    Path((member_id, following_id)): Path<(i32, i32)>,
) -> ApiResult<(StatusCode, Json<Connection>)> {
    let connection = state.connections.follow(member_id, following_id).await?;
    Ok((StatusCode::CREATED, Json(connection)))
}

#[utoipa::path(
    delete,
    path = "/api/Connection/Unfollow/{member_id}/{following_id}",
    params(
        ("member_id" = i32, Path, description = "Follower"),
        ("following_id" = i32, Path, description = "Member to unfollow")
    ),
    responses(
        (status = 204, description = "Unfollowed"),
        (status = 404, description = "Not following")
    )
)]
pub async fn unfollow(
    State(state): State<AppState>,
    Path((member_id, following_id)): Path<(i32, i32)>,
) -> ApiResult<StatusCode> {
    state.connections.unfollow(member_id, following_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/Connection/Followers/{member_id}",
    params(("member_id" = i32, Path, description = "Member id")),
    responses(
        (status = 200, description = "Members following this member", body = [BasicMember]),
        (status = 404, description = "Member not found")
    )
)]
pub async fn followers(
    State(state): State<AppState>,
    Path(member_id): Path<i32>,
) -> ApiResult<Json<Vec<BasicMember>>> {
    Ok(Json(state.connections.list_followers(member_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/Connection/Following/{member_id}",
    params(("member_id" = i32, Path, description = "Member id")),
    responses(
        (status = 200, description = "Members this member follows", body = [BasicMember]),
        (status = 404, description = "Member not found")
    )
)]
pub async fn following(
    State(state): State<AppState>,
    Path(member_id): Path<i32>,
) -> ApiResult<Json<Vec<BasicMember>>> {
    Ok(Json(state.connections.list_following(member_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/Connection/Connections/{member_id}",
    params(("member_id" = i32, Path, description = "Member id")),
    responses(
        (status = 200, description = "Edges touching the member", body = [Connection]),
        (status = 404, description = "Member not found")
    )
)]
pub async fn member_connections(
    State(state): State<AppState>,
    Path(member_id): Path<i32>,
) -> ApiResult<Json<Vec<Connection>>> {
    Ok(Json(state.connections.list_connections_of(member_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/Connection/ListConnections",
    responses((status = 200, description = "All edges", body = [Connection]))
)]
pub async fn list_connections(State(state): State<AppState>) -> ApiResult<Json<Vec<Connection>>> {
    Ok(Json(state.connections.list_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/Connection/FindConnection/{id}",
    params(("id" = i32, Path, description = "Connection id")),
    responses(
        (status = 200, description = "Edge found", body = Connection),
        (status = 404, description = "Edge not found")
    )
)]
pub async fn find_connection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Connection>> {
    Ok(Json(state.connections.find(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/Connection/AddConnection",
    request_body = ConnectionRequest,
    responses(
        (status = 201, description = "Edge created", body = Connection),
        (status = 400, description = "Self-follow"),
        (status = 404, description = "Member not found"),
        (status = 409, description = "Edge already exists")
    )
)]
pub async fn add_connection(
    State(state): State<AppState>,
    Json(payload): Json<ConnectionRequest>,
) -> ApiResult<(StatusCode, Json<Connection>)> {
    let connection = state
        .connections
        .follow(payload.follower_id, payload.following_id)
        .await?;
    Ok((StatusCode::CREATED, Json(connection)))
}

#[utoipa::path(
    put,
    path = "/api/Connection/UpdateConnection/{id}",
    params(("id" = i32, Path, description = "Connection id")),
    request_body = ConnectionRequest,
    responses(
        (status = 200, description = "Edge updated", body = Connection),
        (status = 400, description = "Mismatched id or self-follow"),
        (status = 404, description = "Edge or member not found"),
        (status = 409, description = "Edge already exists")
    )
)]
pub async fn update_connection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ConnectionRequest>,
) -> ApiResult<Json<Connection>> {
    let connection = state
        .connections
        .update(
            id,
            payload.connection_id,
            payload.follower_id,
            payload.following_id,
        )
        .await?;
    Ok(Json(connection))
}

#[utoipa::path(
    delete,
    path = "/api/Connection/DeleteConnection/{id}",
    params(("id" = i32, Path, description = "Connection id")),
    responses(
        (status = 204, description = "Edge deleted"),
        (status = 404, description = "Edge not found")
    )
)]
pub async fn delete_connection(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    state.connections.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
