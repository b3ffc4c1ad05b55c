//! Menu screen use cases

pub mod filter;
pub mod list_by_category;
pub mod load_menu;
pub mod refresh_menu;
pub mod search_menu;

pub use filter::MenuFilter;
pub use list_by_category::ListMenuByCategory;
pub use load_menu::LoadMenu;
pub use refresh_menu::RefreshMenu;
pub use search_menu::SearchMenu;
