//! `SeaORM` Entity for cost_items table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "cost_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub category_id: Uuid,
    pub description: String,
    pub vendor: Option<String>,
    pub amount: String,
    pub status: String,
    pub date: Date,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cost_categories::Entity",
        from = "Column::CategoryId",
        to = "super::cost_categories::Column::Id"
    )]
    CostCategories,
}

impl Related<super::cost_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CostCategories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
