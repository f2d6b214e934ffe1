//! Chat messages, their persistence and answer resolution.
pub mod controller;
pub mod markdown;
pub mod models;
pub mod resolver;
pub mod store;

pub use controller::{ChatController, Exchange};
pub use models::{ChatMessage, Role};
pub use resolver::{
    IntentResolver, KeywordResolver, Resolver, ResolverKind, Rule, build_resolver,
};
pub use store::MessageStore;
