pub mod assess;
pub mod catalog;
pub mod config;
pub mod render;
pub mod wizard;
