//! equip-quote: search a vendor equipment catalog and export grouped quotes
//!
//! The flow is load-once → search → pick into categories → export: the
//! catalog spreadsheet is read into memory at startup, an interactive
//! session files picked items under fixed categories, and the result is
//! written as a quote spreadsheet with one block per category.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod picker;
pub mod search;
pub mod session;
