//! CLI commands for routegraph

pub mod dispatch;
pub mod inventory;
pub mod matrix;
pub mod path;
pub mod rank;
pub mod spanning;
pub mod tour;
