//! Initial schema: fixed costs, project cost categories, and cost items.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(FIXED_COSTS_SQL).await?;
        db.execute_unprepared(COST_CATEGORIES_SQL).await?;
        db.execute_unprepared(COST_ITEMS_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP TABLE IF EXISTS cost_items;")
            .await?;
        db.execute_unprepared("DROP TABLE IF EXISTS cost_categories;")
            .await?;
        db.execute_unprepared("DROP TABLE IF EXISTS fixed_costs;")
            .await?;
        Ok(())
    }
}

// Money columns hold exact decimal text; REAL would lose cents.
const FIXED_COSTS_SQL: &str = r"
CREATE TABLE fixed_costs (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    rent TEXT NOT NULL DEFAULT '0',
    utilities TEXT NOT NULL DEFAULT '0',
    telephone TEXT NOT NULL DEFAULT '0',
    maintenance TEXT NOT NULL DEFAULT '0',
    advertising TEXT NOT NULL DEFAULT '0',
    insurance TEXT NOT NULL DEFAULT '0',
    professional_fees TEXT NOT NULL DEFAULT '0',
    receptionist_labor TEXT NOT NULL DEFAULT '0',
    receptionist_payroll_tax TEXT NOT NULL DEFAULT '0',
    travel TEXT NOT NULL DEFAULT '0',
    meals_entertainment TEXT NOT NULL DEFAULT '0',
    training TEXT NOT NULL DEFAULT '0',
    taxes_licenses TEXT NOT NULL DEFAULT '0',
    debt_service TEXT NOT NULL DEFAULT '0',
    postage TEXT NOT NULL DEFAULT '0',
    pos_system TEXT NOT NULL DEFAULT '0',
    donations_promotional TEXT NOT NULL DEFAULT '0',
    store_supplies TEXT NOT NULL DEFAULT '0',
    office_supplies TEXT NOT NULL DEFAULT '0',
    software TEXT NOT NULL DEFAULT '0',
    other TEXT NOT NULL DEFAULT '0',
    updated_at TEXT NOT NULL
);
";

const COST_CATEGORIES_SQL: &str = r"
CREATE TABLE cost_categories (
    id BLOB PRIMARY KEY NOT NULL,
    name TEXT NOT NULL CHECK (length(trim(name)) > 0),
    projected_total TEXT NOT NULL DEFAULT '0',
    sort_order INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX idx_cost_categories_sort ON cost_categories(sort_order, created_at);
";

// No foreign key: deleting a category leaves its items behind as orphans.
const COST_ITEMS_SQL: &str = r"
CREATE TABLE cost_items (
    id BLOB PRIMARY KEY NOT NULL,
    category_id BLOB NOT NULL,
    description TEXT NOT NULL,
    vendor TEXT,
    amount TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'planned'
        CHECK (status IN ('planned', 'committed', 'paid')),
    date TEXT NOT NULL,
    notes TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX idx_cost_items_category ON cost_items(category_id);
CREATE INDEX idx_cost_items_status ON cost_items(status);
";
