pub mod draft;
pub mod inventory_item;
pub mod inventory_state;
