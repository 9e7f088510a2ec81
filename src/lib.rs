// SPDX-License-Identifier: MIT

//! FitZone: minimal fitness-tracking host with a local workout-streak tracker.
//!
//! The core of this crate is [`tracker::SessionTracker`], which keeps the
//! logged-in session and the consecutive-day workout streak in a durable
//! local key-value store. The web host only bootstraps a database handle and
//! serves a small health/calculator surface.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
pub mod time_utils;
pub mod tracker;

use config::Config;
use db::Database;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Database,
}
