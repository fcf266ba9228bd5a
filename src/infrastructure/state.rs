//! Application state containing services and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{ConnectionRepository, MemberRepository, PetRepository};
use crate::infrastructure::{
    SeaOrmConnectionRepository, SeaOrmMemberRepository, SeaOrmPetRepository,
};
use crate::services::{ConnectionService, HomeService, MemberService, PetService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection handle (a pool; cheap to clone)
    db: DatabaseConnection,
    pub members: MemberService,
    pub pets: PetService,
    pub connections: ConnectionService,
    pub home: HomeService,
}

impl AppState {
    /// Create a new AppState with all repositories and services initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let member_repo: Arc<dyn MemberRepository> =
            Arc::new(SeaOrmMemberRepository::new(db.clone()));
        let pet_repo: Arc<dyn PetRepository> = Arc::new(SeaOrmPetRepository::new(db.clone()));
        let connection_repo: Arc<dyn ConnectionRepository> =
            Arc::new(SeaOrmConnectionRepository::new(db.clone()));

        Self {
            db,
            members: MemberService::new(member_repo.clone(), connection_repo.clone()),
            pets: PetService::new(pet_repo.clone(), member_repo.clone()),
            connections: ConnectionService::new(member_repo.clone(), connection_repo.clone()),
            home: HomeService::new(member_repo, pet_repo, connection_repo),
        }
    }

    /// Get the database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
