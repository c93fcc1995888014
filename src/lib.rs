pub mod actions;
pub mod conclusion;
pub mod config;
pub mod error;
pub mod platform;
pub mod run;
