//! `SeaORM` Entity for cost_categories table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "cost_categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub projected_total: String,
    pub sort_order: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cost_items::Entity")]
    CostItems,
}

impl Related<super::cost_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CostItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
