use crate::api;
use crate::domain::{BasicMember, Connection, Member, Pet};
use crate::services::HomeView;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::member::list_members,
        api::member::find_member,
        api::member::add_member,
        api::member::update_member,
        api::member::delete_member,
        api::pet::list_pets,
        api::pet::find_pet,
        api::pet::list_pets_for_member,
        api::pet::add_pet,
        api::pet::update_pet,
        api::pet::delete_pet,
        api::pet::add_owner,
        api::pet::remove_owner,
        api::connection::new_follow,
        api::connection::unfollow,
        api::connection::followers,
        api::connection::following,
        api::connection::member_connections,
        api::connection::list_connections,
        api::connection::find_connection,
        api::connection::add_connection,
        api::connection::update_connection,
        api::connection::delete_connection,
        api::home::home,
    ),
    components(
        schemas(
            Member,
            BasicMember,
            Pet,
            Connection,
            HomeView,
            api::member::MemberRequest,
            api::pet::PetRequest,
            api::connection::ConnectionRequest,
        )
    ),
    tags(
        (name = "pawpals", description = "PawPals API")
    )
)]
pub struct ApiDoc;
