use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "members")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub member_name: String,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    #[sea_orm(default_value = 1)]
    pub version: i32,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pet_owner::Entity")]
    PetOwner,
}

impl Related<super::pet_owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PetOwner.def()
    }
}

impl Related<super::pet::Entity> for Entity {
    fn to() -> RelationDef {
        super::pet_owner::Relation::Pet.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::pet_owner::Relation::Owner.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
