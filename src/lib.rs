//! # Minbar
//!
//! A terminal companion for a mosque community: Quran text with per-verse
//! recitation audio, plus the mosque's news feed.
//!
//! ## Architecture
//!
//! Minbar follows a modular pipeline architecture:
//!
//! ```text
//! Client (Quran API / feed) → Service (loading state) → CLI
//!                                      ↘ PlaybackCoordinator → audio device
//! ```
//!
//! Each service owns one fetched collection and publishes an
//! `Idle -> Loading -> {Loaded, Failed}` state over a watch channel; the
//! presentation layer subscribes (or takes snapshots) and issues commands,
//! never mutating fetched data directly.
//!
//! ## Quick Start
//!
//! ```bash
//! # List all surahs
//! minbar surahs
//!
//! # Read one surah
//! minbar surah 36
//!
//! # Mosque announcements
//! minbar news
//!
//! # Play a recitation
//! minbar play 36 12
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together all components:
/// clients, services, configuration.
pub mod app;

/// Command-line interface using clap.
///
/// Defines the CLI structure and subcommands:
/// - `surahs` - List the catalog
/// - `surah <n>` - Show one surah's verses
/// - `news` - Show the mosque news feed
/// - `play <surah> <ayah>` - Play one recitation
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/minbar/config.toml`: API base URL, feed URL,
/// playback polling.
pub mod config;

/// Core domain models.
///
/// - [`Surah`](domain::Surah): chapter summary from the catalog
/// - [`Ayah`](domain::Ayah): verse text plus recitation audio URL
/// - [`FeedItem`](domain::FeedItem): one news entry with a SHA256 identity
/// - [`LoadPhase`](domain::LoadPhase) / [`PlaybackState`](domain::PlaybackState)
pub mod domain;

/// News feed fetching and normalization.
///
/// - [`FeedSource`](feed::FeedSource): async trait for feed fetching
/// - [`HttpFeedFetcher`](feed::HttpFeedFetcher): reqwest + feed-rs implementation
pub mod feed;

/// Audio playback.
///
/// - [`AudioSink`](player::AudioSink): output device seam
/// - [`PlaybackCoordinator`](player::PlaybackCoordinator): at-most-one active
///   stream, pause keeps the current verse
/// - [`RodioSink`](player::RodioSink): rodio-backed device
pub mod player;

/// Typed client for the Quran content API.
///
/// - [`QuranApi`](quran::QuranApi): async trait for catalog/detail fetches
/// - [`HttpQuranClient`](quran::HttpQuranClient): reqwest-based implementation
pub mod quran;

/// Loading-state services owning fetched content.
///
/// - [`SurahCatalogService`](service::SurahCatalogService)
/// - [`SurahDetailService`](service::SurahDetailService)
/// - [`NewsFeedService`](service::NewsFeedService)
pub mod service;
