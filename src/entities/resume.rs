use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Stored resume record: upload metadata, denormalized candidate name/title
/// for listings, and the full parsed structure as JSON. Created on upload,
/// never updated or deleted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "resumes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i32,
    /// Identifier used in public routes
    #[sea_orm(unique)]
    pub public_id: Uuid,
    pub file_name: String,
    pub candidate_name: String,
    pub candidate_title: String,
    #[sea_orm(column_type = "Json")]
    pub parsed: Json,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
