pub mod core;

// Re-export key items for easy importing in this crate
pub use core::store::{RecordStore, SqlStore};
pub use core::types;

// Re-export key items for easy importing in other crates
pub use core::engine;
pub use core::engine::{classifier, scanner};
pub use core::main_shared::run_main;
