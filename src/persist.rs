//! Stored forms of turns and statistics
//!
//! Decoding never fails hard: malformed input is logged and treated as
//! absent, so the caller starts a fresh turn instead.

use crate::core::{GameLocale, Word};
use crate::game::{GuessRow, TurnState, TurnStatus};
use crate::stats::StatsSnapshot;
use crate::storage::{KeyValueStore, StoreError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Storage key of the statistics record
pub const STATS_KEY: &str = "stats";

/// Stored status, including the legacy `unknown` marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StoredStatus {
    NotStarted,
    InProgress,
    #[default]
    Unknown,
    #[serde(rename_all = "camelCase")]
    Finished { is_tallied: bool, is_won: bool },
}

impl From<TurnStatus> for StoredStatus {
    fn from(status: TurnStatus) -> Self {
        match status {
            TurnStatus::NotStarted => Self::NotStarted,
            TurnStatus::InProgress => Self::InProgress,
            TurnStatus::Finished { is_tallied, is_won } => Self::Finished { is_tallied, is_won },
        }
    }
}

/// Serialized turn
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnRecord {
    pub expected: Word,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub rows: Vec<GuessRow>,
    #[serde(default)]
    pub state: StoredStatus,
    /// Older records only carry this flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_tallied: Option<bool>,
}

impl TurnRecord {
    #[must_use]
    pub fn from_turn(turn: &TurnState) -> Self {
        Self {
            expected: turn.expected().clone(),
            date: turn.date(),
            rows: turn.rows().to_vec(),
            state: turn.status().into(),
            is_tallied: Some(turn.is_tallied()),
        }
    }

    /// Rebuild the turn, `None` when the secret is not a playable word
    #[must_use]
    pub fn into_turn(self) -> Option<TurnState> {
        if !self.expected.is_complete() {
            return None;
        }
        let status = match self.state {
            StoredStatus::NotStarted => TurnStatus::NotStarted,
            StoredStatus::InProgress => TurnStatus::InProgress,
            StoredStatus::Finished { is_tallied, is_won } => {
                TurnStatus::Finished { is_tallied, is_won }
            }
            StoredStatus::Unknown => {
                if self.is_tallied.unwrap_or(false) {
                    TurnStatus::Finished {
                        is_tallied: true,
                        is_won: false,
                    }
                } else {
                    TurnStatus::NotStarted
                }
            }
        };
        Some(TurnState::restore(self.expected, self.date, self.rows, status))
    }
}

/// # Errors
/// Only if serialization itself fails.
pub fn encode_turn(turn: &TurnState) -> serde_json::Result<String> {
    serde_json::to_string(&TurnRecord::from_turn(turn))
}

/// # Errors
/// Only if serialization itself fails.
pub fn encode_stats(stats: &StatsSnapshot) -> serde_json::Result<String> {
    serde_json::to_string(stats)
}

/// Parse a stored turn, `None` if it is malformed
#[must_use]
#[instrument(level = "debug", skip_all)]
pub fn decode_turn(json: &str) -> Option<TurnState> {
    let record: TurnRecord = serde_json::from_str(json)
        .map_err(|e| warn!(error = %e, "discarding malformed turn state"))
        .ok()?;
    let turn = record.into_turn();
    if turn.is_none() {
        warn!("discarding turn state with an unplayable secret");
    }
    turn
}

/// Parse stored statistics, `None` if they are malformed
#[must_use]
#[instrument(level = "debug", skip_all)]
pub fn decode_stats(json: &str) -> Option<StatsSnapshot> {
    serde_json::from_str(json)
        .map_err(|e| warn!(error = %e, "discarding malformed stats"))
        .ok()
}

/// # Errors
/// Fails when the store cannot be read. Malformed records read as `None`.
pub fn load_turn(
    store: &impl KeyValueStore,
    locale: GameLocale,
) -> Result<Option<TurnState>, StoreError> {
    Ok(store
        .get(&locale.turn_state_key())?
        .as_deref()
        .and_then(decode_turn))
}

/// # Errors
/// Fails when the store cannot be written.
pub fn save_turn(
    store: &impl KeyValueStore,
    locale: GameLocale,
    turn: &TurnState,
) -> Result<(), StoreError> {
    let json = encode_turn(turn).map_err(|e| encoding_failed(&locale.turn_state_key(), e))?;
    store.set(&locale.turn_state_key(), &json)
}

/// # Errors
/// Fails when the store cannot be read. Malformed records read as `None`.
pub fn load_stats(store: &impl KeyValueStore) -> Result<Option<StatsSnapshot>, StoreError> {
    Ok(store.get(STATS_KEY)?.as_deref().and_then(decode_stats))
}

/// # Errors
/// Fails when the store cannot be written.
pub fn save_stats(store: &impl KeyValueStore, stats: &StatsSnapshot) -> Result<(), StoreError> {
    let json = encode_stats(stats).map_err(|e| encoding_failed(STATS_KEY, e))?;
    store.set(STATS_KEY, &json)
}

fn encoding_failed(key: &str, e: serde_json::Error) -> StoreError {
    StoreError::Io {
        key: key.to_string(),
        source: e.into(),
    }
}

/// Merge two copies of the same record, such as a local and a synced one
pub trait Resolve: Sized {
    /// The copy to keep; `self` wins when neither is better
    #[must_use]
    fn resolve(self, other: Self) -> Self;
}

impl Resolve for StatsSnapshot {
    fn resolve(self, other: Self) -> Self {
        let rank = |s: &Self| (s.won, s.streak, s.max_streak);
        if rank(&other) > rank(&self) { other } else { self }
    }
}

impl Resolve for TurnState {
    fn resolve(self, other: Self) -> Self {
        let finished = |t: &Self| matches!(t.status(), TurnStatus::Finished { .. });
        if other.is_won() && !self.is_won() {
            other
        } else if finished(&other) && !finished(&self) {
            other
        } else {
            self
        }
    }
}

impl<T: Resolve> Resolve for Option<T> {
    fn resolve(self, other: Self) -> Self {
        match (self, other) {
            (Some(mine), Some(theirs)) => Some(mine.resolve(theirs)),
            (mine, None) => mine,
            (None, theirs) => theirs,
        }
    }
}
