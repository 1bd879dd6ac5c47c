// ABOUTME: Workout session timer tracking active time across pauses
// ABOUTME: WorkoutSession state transitions (start, pause, resume, finish) and elapsed time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a workout session
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Created, timer not started
    #[default]
    Idle,
    /// Timer counting
    Running,
    /// Timer stopped, session resumable
    Paused,
    /// Session closed
    Finished,
}

/// Timer for one workout
///
/// All timestamps come from the caller so the session stays deterministic.
/// Time spent paused never counts toward the elapsed total.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutSession {
    /// Workout name shown on the timer
    pub name: String,
    state: SessionState,
    started_at: Option<DateTime<Utc>>,
    /// Start of the interval currently being timed
    running_since: Option<DateTime<Utc>>,
    /// Active time banked by completed intervals, in milliseconds
    banked_ms: i64,
    finished_at: Option<DateTime<Utc>>,
}

impl WorkoutSession {
    /// Create an idle session
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// When the timer was first started
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// When the session was finished
    #[must_use]
    pub const fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Start timing
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` unless the session is idle
    pub fn start(&mut self, now: DateTime<Utc>) -> AppResult<()> {
        self.expect_state(SessionState::Idle, "start")?;
        self.started_at = Some(now);
        self.running_since = Some(now);
        self.state = SessionState::Running;
        Ok(())
    }

    /// Pause timing, banking the running interval
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` unless the session is running
    pub fn pause(&mut self, now: DateTime<Utc>) -> AppResult<()> {
        self.expect_state(SessionState::Running, "pause")?;
        self.bank_running_interval(now);
        self.state = SessionState::Paused;
        Ok(())
    }

    /// Resume a paused session
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` unless the session is paused
    pub fn resume(&mut self, now: DateTime<Utc>) -> AppResult<()> {
        self.expect_state(SessionState::Paused, "resume")?;
        self.running_since = Some(now);
        self.state = SessionState::Running;
        Ok(())
    }

    /// Close the session from either running or paused
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` if the session was never started or is already finished
    pub fn finish(&mut self, now: DateTime<Utc>) -> AppResult<()> {
        match self.state {
            SessionState::Running => self.bank_running_interval(now),
            SessionState::Paused => {}
            SessionState::Idle | SessionState::Finished => {
                return Err(self.transition_error("finish"));
            }
        }
        self.finished_at = Some(now);
        self.state = SessionState::Finished;
        Ok(())
    }

    /// Active time as of `now`
    #[must_use]
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        let running = match (self.state, self.running_since) {
            (SessionState::Running, Some(since)) => clamp_non_negative(now - since),
            _ => Duration::zero(),
        };
        Duration::milliseconds(self.banked_ms) + running
    }

    fn bank_running_interval(&mut self, now: DateTime<Utc>) {
        if let Some(since) = self.running_since.take() {
            self.banked_ms += clamp_non_negative(now - since).num_milliseconds();
        }
    }

    fn expect_state(&self, expected: SessionState, action: &str) -> AppResult<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(self.transition_error(action))
        }
    }

    fn transition_error(&self, action: &str) -> AppError {
        AppError::invalid_input(format!("cannot {action} a workout that is {:?}", self.state))
            .with_details(serde_json::json!({ "state": self.state, "action": action }))
    }
}

// Clock skew between devices must not produce negative active time
fn clamp_non_negative(duration: Duration) -> Duration {
    duration.max(Duration::zero())
}
