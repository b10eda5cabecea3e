//! Meat Tracker library
//!
//! Inventory tracking for weighed meat products: the session store, unit
//! conversion, dashboard aggregates and the searchable listing.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod commands;
pub mod config;
pub mod errors;
pub mod models;
pub mod seed;
pub mod services;

pub use commands::Action;
pub use errors::InventoryError;
pub use models::{
    draft::{DraftField, ItemDraft},
    inventory_item::{InventoryItem, ItemId, ItemStatus, WeightUnit},
    inventory_state::{ActiveView, InventoryState},
};
pub use services::{
    conversion::convert, dashboard::DashboardSummary, inventory::InventoryStore,
    listing::InventoryRow,
};
