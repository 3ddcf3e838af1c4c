//! Core infrastructure and service clients.
//!
//! Shared infrastructure (typed REST client, operation poller, provider
//! authentication) lives in [`client`], [`operations`], and [`providers`].
//! The remaining modules each wrap one Cognitive Services REST API.

pub mod client;
pub mod operations;
pub mod providers;
pub mod recommendations;
pub mod search;
pub mod speaker;
pub mod speech;
pub mod text_analytics;
