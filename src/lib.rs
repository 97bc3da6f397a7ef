pub mod analysis;
pub mod bag;
pub mod config;
pub mod consts;
pub mod core_types;
pub mod dedup;
pub mod error;
pub mod export;
pub mod fields;
pub mod filter;
pub mod import;
pub mod library;
pub mod sample;
pub mod shot;
pub mod store;
// cmd and reports are binary modules (main.rs), they only format and print.

pub use error::{LaunchLabError, LlResult};
pub use shot::Shot;
