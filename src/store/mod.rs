//! Durable local key-value store (localStorage analog).

pub mod local;

pub use local::LocalStore;

/// Store keys as constants.
pub mod keys {
    /// JSON-serialized session, present iff a user is logged in
    pub const USER: &str = "user";
    /// Epoch-ms timestamp of the most recent logged workout
    pub const LAST_WORKOUT: &str = "lastWorkout";
    /// Current consecutive-day streak counter
    pub const STREAK: &str = "streak";
}
