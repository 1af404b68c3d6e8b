//! Terminal catalog viewer for the first-generation Pokemon roster served
//! by PokeAPI.

pub mod api;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod ui;
