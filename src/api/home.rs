use axum::{
    Json,
    extract::{Path, State},
};

use super::error::ApiResult;
use crate::infrastructure::AppState;
use crate::services::HomeView;

#[utoipa::path(
    get,
    path = "/api/Home/{member_id}",
    params(("member_id" = i32, Path, description = "Member id")),
    responses(
        (status = 200, description = "Home page data for the member", body = HomeView),
        (status = 404, description = "Member not found")
    )
)]
pub async fn home(
    State(state): State<AppState>,
    Path(member_id): Path<i32>,
) -> ApiResult<Json<HomeView>> {
    Ok(Json(state.home.home_view(member_id).await?))
}
