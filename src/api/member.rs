//! Member API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

use super::error::ApiResult;
use crate::domain::{Member, MemberInput};
use crate::infrastructure::AppState;

/// Request body for creating or updating a member
#[derive(Debug, Deserialize, ToSchema)]
pub struct MemberRequest {
    /// Must match the path id on update when present
    pub member_id: Option<i32>,
    pub member_name: String,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    /// Version last seen by the caller; stale versions are rejected
    pub version: Option<i32>,
}

impl From<MemberRequest> for MemberInput {
    fn from(req: MemberRequest) -> Self {
        MemberInput {
            member_name: req.member_name,
            email: req.email,
            bio: req.bio,
            location: req.location,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/Member/ListMembers",
    responses((status = 200, description = "All members", body = [Member]))
)]
pub async fn list_members(State(state): State<AppState>) -> ApiResult<Json<Vec<Member>>> {
    Ok(Json(state.members.list_members().await?))
}

#[utoipa::path(
    get,
    path = "/api/Member/FindMember/{id}",
    params(("id" = i32, Path, description = "Member id")),
    responses(
        (status = 200, description = "Member found", body = Member),
        (status = 404, description = "Member not found")
    )
)]
pub async fn find_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Member>> {
    Ok(Json(state.members.find_member(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/Member/AddMember",
    request_body = MemberRequest,
    responses(
        (status = 201, description = "Member created", body = Member),
        (status = 400, description = "Invalid member fields")
    )
)]
pub async fn add_member(
    State(state): State<AppState>,
    Json(payload): Json<MemberRequest>,
) -> ApiResult<(StatusCode, Json<Member>)> {
    let member = state.members.add_member(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

#[utoipa::path(
    put,
    path = "/api/Member/UpdateMember/{id}",
    params(("id" = i32, Path, description = "Member id")),
    request_body = MemberRequest,
    responses(
        (status = 200, description = "Member updated", body = Member),
        (status = 400, description = "Mismatched id or invalid fields"),
        (status = 404, description = "Member not found"),
        (status = 409, description = "Stale version")
    )
)]
pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<MemberRequest>,
) -> ApiResult<Json<Member>> {
    let body_id = payload.member_id;
    let version = payload.version;
    let member = state
        .members
        .update_member(id, body_id, payload.into(), version)
        .await?;
    Ok(Json(member))
}

#[utoipa::path(
    delete,
    path = "/api/Member/DeleteMember/{id}",
    params(("id" = i32, Path, description = "Member id")),
    responses(
        (status = 204, description = "Member deleted"),
        (status = 404, description = "Member not found"),
        (status = 409, description = "Member still has connections")
    )
)]
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    state.members.delete_member(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
