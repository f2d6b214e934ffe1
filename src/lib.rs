pub mod api;
pub mod calendar;
pub mod chat;
pub mod cli;
pub mod core;
pub mod nav;
pub mod school;
pub mod settings;
