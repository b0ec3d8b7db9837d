//! `SeaORM` Entity for the singleton fixed_costs table.

use sea_orm::entity::prelude::*;

/// Primary key of the only row the table ever holds.
pub const SINGLETON_ID: i32 = 1;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "fixed_costs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub rent: String,
    pub utilities: String,
    pub telephone: String,
    pub maintenance: String,
    pub advertising: String,
    pub insurance: String,
    pub professional_fees: String,
    pub receptionist_labor: String,
    pub receptionist_payroll_tax: String,
    pub travel: String,
    pub meals_entertainment: String,
    pub training: String,
    pub taxes_licenses: String,
    pub debt_service: String,
    pub postage: String,
    pub pos_system: String,
    pub donations_promotional: String,
    pub store_supplies: String,
    pub office_supplies: String,
    pub software: String,
    pub other: String,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
