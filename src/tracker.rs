// SPDX-License-Identifier: MIT

//! Session and workout-streak tracking over a durable local store.
//!
//! State model:
//! - The durable `lastWorkout`/`streak` counters are the source of truth and
//!   survive logout.
//! - The [`Session`] is a view that exists only while logged in; its counter
//!   fields are seeded from the durable counters at login and re-synced on
//!   every workout log.
//!
//! All operations run synchronously to completion; the store is single-writer
//! because the host is single-threaded.

use crate::error::{AppError, Result};
use crate::models::Session;
use crate::store::{keys, LocalStore};
use crate::time_utils::{now_millis, whole_days_between};

/// Hook invoked after login/logout/restore with the current session.
pub type AuthHook = Box<dyn FnMut(Option<&Session>)>;

/// Hook invoked after a streak change with the durable counters
/// `(streak, last_workout_ms)`.
pub type StreakHook = Box<dyn FnMut(u32, Option<i64>)>;

/// Hook for user-visible confirmations (the alert analog).
pub type Notifier = Box<dyn FnMut(&str)>;

/// Tracks the logged-in session and the consecutive-day workout streak.
///
/// Each UI hook is a single rebindable slot, not a subscriber list: binding a
/// new callback replaces the previous one, and the tracker always invokes
/// whichever callback is currently bound. Defaults are safe no-ops.
pub struct SessionTracker {
    store: LocalStore,
    session: Option<Session>,
    on_auth_change: AuthHook,
    on_streak_change: StreakHook,
    notify: Notifier,
}

impl SessionTracker {
    /// Create a tracker over `store`. Call [`restore_session`] afterwards to
    /// pick up a persisted session.
    ///
    /// [`restore_session`]: SessionTracker::restore_session
    pub fn new(store: LocalStore) -> Self {
        Self {
            store,
            session: None,
            on_auth_change: Box::new(|_| {}),
            on_streak_change: Box::new(|_, _| {}),
            notify: Box::new(|msg| tracing::info!("{msg}")),
        }
    }

    /// Current session, if logged in.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Current durable streak counter.
    pub fn current_streak(&self) -> u32 {
        parse_counter(self.store.get(keys::STREAK))
    }

    /// Durable timestamp of the most recent logged workout (epoch ms).
    pub fn last_workout(&self) -> Option<i64> {
        parse_timestamp(self.store.get(keys::LAST_WORKOUT))
    }

    // ─── Hook Registration ───────────────────────────────────────

    /// Replace the auth-change hook.
    pub fn set_on_auth_change(&mut self, hook: AuthHook) {
        self.on_auth_change = hook;
    }

    /// Replace the streak-change hook.
    pub fn set_on_streak_change(&mut self, hook: StreakHook) {
        self.on_streak_change = hook;
    }

    /// Replace the user-notification hook.
    pub fn set_notifier(&mut self, notify: Notifier) {
        self.notify = notify;
    }

    // ─── Lifecycle ───────────────────────────────────────────────

    /// Load the persisted session from the durable store, if any.
    ///
    /// A malformed `user` entry is treated as "no session": it is logged and
    /// dropped rather than propagated, so a corrupt entry never wedges the
    /// tracker in an unusable state.
    pub fn restore_session(&mut self) -> Option<&Session> {
        self.session = match self.store.get(keys::USER) {
            Some(raw) => match serde_json::from_str::<Session>(raw) {
                Ok(session) => Some(session),
                Err(err) => {
                    tracing::warn!(error = %err, "Stored session is malformed, treating as logged out");
                    None
                }
            },
            None => None,
        };

        self.emit_auth();
        self.session.as_ref()
    }

    /// Log in with the given credentials.
    ///
    /// Both values must be non-empty after trimming; any such pair succeeds.
    /// There is no credential verification against any authority, a known
    /// simplification carried over from the reference front-end, not an
    /// authentication mechanism.
    ///
    /// The new session's counters are seeded from the durable
    /// `lastWorkout`/`streak` keys, so a streak built up before a previous
    /// logout carries into the new session. Logging in while already logged
    /// in simply overwrites the session.
    pub fn login(&mut self, email: &str, password: &str) -> Result<()> {
        let email = email.trim();
        let password = password.trim();

        if email.is_empty() || password.is_empty() {
            self.notify_user("Please enter email and password");
            return Err(AppError::Validation(
                "email and password must be non-empty".to_string(),
            ));
        }

        let last_workout = parse_timestamp(self.store.get(keys::LAST_WORKOUT));
        let streak = parse_counter(self.store.get(keys::STREAK));

        self.session = Some(Session {
            email: email.to_string(),
            last_workout,
            streak,
        });
        self.persist_session()?;

        tracing::debug!(email, streak, "Logged in");
        self.emit_auth();
        self.emit_streak();
        self.notify_user("Logged in successfully");
        Ok(())
    }

    /// Log out: clear the in-memory session and remove its durable entry.
    ///
    /// The durable `lastWorkout`/`streak` counters are left untouched.
    pub fn logout(&mut self) -> Result<()> {
        self.session = None;
        self.persist_session()?;

        tracing::debug!("Logged out");
        self.emit_auth();
        self.notify_user("Logged out successfully");
        Ok(())
    }

    // ─── Workouts ────────────────────────────────────────────────

    /// Log a workout at the current wall-clock time.
    ///
    /// Returns the new streak value.
    pub fn mark_workout_done(&mut self) -> Result<u32> {
        self.mark_workout_done_at(now_millis())
    }

    /// Log a workout at `now` (epoch ms).
    ///
    /// Streak transition, at whole-day floor-division granularity:
    /// - no previous workout: streak becomes 1
    /// - same floored day: streak unchanged
    /// - exactly one day later: streak increments (or restarts at 1 if it
    ///   was somehow 0)
    /// - more than one day later: streak resets to 1
    /// - `now` before the last workout (clock skew): treated the same as a
    ///   same-day log, so the streak is unchanged
    ///
    /// The timestamp and streak are written to the durable store
    /// unconditionally, and an active session is re-synced and re-persisted.
    pub fn mark_workout_done_at(&mut self, now: i64) -> Result<u32> {
        let last = parse_timestamp(self.store.get(keys::LAST_WORKOUT)).unwrap_or(0);
        let mut streak = parse_counter(self.store.get(keys::STREAK));

        if last == 0 {
            // First-ever workout
            streak = 1;
        } else {
            match whole_days_between(last, now) {
                0 => {} // Same day: keep streak as-is
                1 => streak = if streak > 0 { streak + 1 } else { 1 },
                days if days > 1 => streak = 1,
                days => {
                    // Clock went backwards; keep the streak rather than
                    // punishing the user for a device clock change.
                    tracing::warn!(last, now, days, "Workout logged before previous one");
                }
            }
        }

        self.store.set(keys::LAST_WORKOUT, now.to_string())?;
        self.store.set(keys::STREAK, streak.to_string())?;

        // Keep the session in sync if logged in
        if let Some(session) = &mut self.session {
            session.last_workout = Some(now);
            session.streak = streak;
            self.persist_session()?;
        }

        tracing::debug!(streak, now, "Workout logged");
        self.emit_streak();
        self.notify_user(&format!("Workout logged. Streak days: {streak}"));
        Ok(streak)
    }

    // ─── Internals ───────────────────────────────────────────────

    /// Mirror the in-memory session to the durable store: write it while
    /// logged in, remove the entry while logged out.
    fn persist_session(&mut self) -> Result<()> {
        match &self.session {
            Some(session) => {
                let raw = serde_json::to_string(session)
                    .map_err(|e| AppError::Internal(e.into()))?;
                self.store.set(keys::USER, raw)
            }
            None => self.store.remove(keys::USER),
        }
    }

    fn emit_auth(&mut self) {
        let session = self.session.clone();
        (self.on_auth_change)(session.as_ref());
    }

    fn emit_streak(&mut self) {
        let streak = self.current_streak();
        let last = self.last_workout();
        (self.on_streak_change)(streak, last);
    }

    fn notify_user(&mut self, msg: &str) {
        (self.notify)(msg);
    }
}

/// Parse a durable counter value, falling back to 0 on absent or garbage
/// input.
fn parse_counter(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

/// Parse a durable timestamp value; absent or garbage input means "never".
fn parse_timestamp(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.trim().parse().ok())
}
