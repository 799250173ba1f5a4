//! Merge records from another store
//!
//! Used to carry progress between machines: the other store is read, each
//! record is resolved against the local copy and the winner is written
//! back locally.

use crate::core::GameLocale;
use crate::game::TurnState;
use crate::persist::{Resolve, load_stats, load_turn, save_stats, save_turn};
use crate::storage::{KeyValueStore, StoreError};
use tracing::{info, instrument};

/// What a sync changed locally
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub stats_updated: bool,
    pub turns_updated: Vec<GameLocale>,
}

/// Pull `remote` into `local`
///
/// Turns for different secrets are not comparable; the more recent one is
/// kept. Locales sharing a storage key are visited once.
///
/// # Errors
/// Fails when either store cannot be accessed.
#[instrument(level = "debug", skip_all)]
pub fn sync_stores(
    local: &impl KeyValueStore,
    remote: &impl KeyValueStore,
) -> Result<SyncReport, StoreError> {
    let mut report = SyncReport::default();

    let mine = load_stats(local)?;
    let merged = mine.clone().resolve(load_stats(remote)?);
    if let Some(stats) = merged.filter(|s| Some(s) != mine.as_ref()) {
        save_stats(local, &stats)?;
        report.stats_updated = true;
    }

    let mut seen = Vec::new();
    for locale in GameLocale::ALL {
        let key = locale.turn_state_key();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);

        let mine = load_turn(local, locale)?;
        let merged = merge_turns(mine.clone(), load_turn(remote, locale)?);
        if let Some(turn) = merged.filter(|t| Some(t) != mine.as_ref()) {
            save_turn(local, locale, &turn)?;
            report.turns_updated.push(locale);
        }
    }

    info!(stats = report.stats_updated, turns = report.turns_updated.len(), "sync finished");
    Ok(report)
}

fn merge_turns(mine: Option<TurnState>, theirs: Option<TurnState>) -> Option<TurnState> {
    match (mine, theirs) {
        (Some(a), Some(b)) if a.expected() != b.expected() => {
            Some(if b.date() > a.date() { b } else { a })
        }
        (mine, theirs) => mine.resolve(theirs),
    }
}
