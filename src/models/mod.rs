// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod session;

pub use session::Session;
