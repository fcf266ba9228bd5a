use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub pet_type: Option<String>,
    pub breed: Option<String>,
    pub dob: Option<Date>,
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

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        super::pet_owner::Relation::Owner.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::pet_owner::Relation::Pet.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
