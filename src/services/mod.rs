// Session store
pub mod inventory;

// Derived views over the item collection
pub mod conversion;
pub mod dashboard;
pub mod listing;
