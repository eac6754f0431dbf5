//! Loading-state services that own fetched content.
//!
//! Each service owns exactly one collection and runs the
//! `Idle -> Loading -> {Loaded, Failed}` machine, publishing its state
//! through a `tokio::sync::watch` channel. Consumers hold a receiver (or ask
//! for a snapshot) and never mutate fetched data; all mutation happens
//! inside the sender's closures, which is the crate's single serialization
//! point for state.

pub mod catalog;
pub mod detail;
pub mod news;

pub use catalog::{CatalogState, SurahCatalogService};
pub use detail::{DetailState, SurahDetailService};
pub use news::{NewsFeedService, NewsState};
