pub mod config;
pub mod db;
pub mod kv;

pub use config::AppConfig;
