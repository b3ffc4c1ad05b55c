use crate::db::schema::menu;
use diesel::prelude::*;

#[derive(Debug, Clone, Queryable)]
#[diesel(table_name = menu)]
pub struct MenuItemRow {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = menu)]
pub struct NewMenuItemRow {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub description: Option<String>,
    pub image: Option<String>,
}
