use crate::db::models::{MenuItemRow, NewMenuItemRow};
use crate::db::ports::{InsertMapper, RowMapper};
use anyhow::{anyhow, Result};
use ll_core::menu::{MenuCategory, MenuItem, MenuItemId, Price};

pub struct MenuItemRowMapper;

impl InsertMapper<MenuItem, NewMenuItemRow> for MenuItemRowMapper {
    fn to_row(&self, domain: &MenuItem) -> Result<NewMenuItemRow> {
        Ok(NewMenuItemRow {
            id: domain.id.as_str().to_string(),
            name: domain.name.clone(),
            price: domain.price.amount(),
            category: domain.category.as_str().to_string(),
            description: domain.description.clone(),
            image: domain.image.clone(),
        })
    }
}

impl RowMapper<MenuItemRow, MenuItem> for MenuItemRowMapper {
    fn to_domain(&self, row: &MenuItemRow) -> Result<MenuItem> {
        let category = row
            .category
            .parse::<MenuCategory>()
            .map_err(|e| anyhow!("menu item {}: {}", row.id, e))?;
        let price = Price::new(row.price).map_err(|e| anyhow!("menu item {}: {}", row.id, e))?;

        Ok(MenuItem {
            id: MenuItemId::from(row.id.as_str()),
            name: row.name.clone(),
            price,
            category,
            description: row.description.clone(),
            image: row.image.clone(),
        })
    }
}
