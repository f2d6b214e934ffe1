//! Gateway to the school notice and cafeteria feeds.
pub mod category;
pub mod client;
pub mod menu;
pub mod notice;
pub mod table;

pub use category::{Category, UnknownCategory};
pub use client::{IntentRequest, IntentResponse, SchoolClient};
pub use menu::{Meal, get_menu};
pub use notice::{Notice, get_notice};
pub use table::{MarkdownTable, ProxyBody};
