mod category;
mod ids;
mod list;

pub use category::Category;
pub use ids::{ItemId, ListId};
pub use list::{Item, ShoppingList};
