use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Todo record database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    /// Todo ID, assigned by the store
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Todo title
    pub title: String,

    /// Completion flag
    pub completed: bool,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,
}

/// Todo entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
