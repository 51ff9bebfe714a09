use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use crate::errors::{classify_store_error, TournamentError};

/// Records a finished match and bumps both players' counters. Runs as one
/// transaction so a failure on any statement leaves nothing committed.
pub fn insert_match(conn: &mut DbConn, winner_id: i32, loser_id: i32) -> Result<()> {
    let tx = conn
        .transaction()
        .context("Failed to open transaction for match insert")?;

    tx.execute(
        "INSERT INTO matches (winner, loser) VALUES (?1, ?2)",
        params![winner_id, loser_id],
    )
    .map_err(|e| classify_store_error(e).context("Failed to insert match"))?;

    tx.execute(
        "UPDATE players SET wins = wins + 1 WHERE id = ?1",
        params![winner_id],
    )
    .map_err(|e| classify_store_error(e).context("Failed to increment winner's wins"))?;

    tx.execute(
        "UPDATE players SET losses = losses + 1 WHERE id = ?1",
        params![loser_id],
    )
    .map_err(|e| classify_store_error(e).context("Failed to increment loser's losses"))?;

    tx.commit().map_err(|e| {
        anyhow::Error::new(TournamentError::Transaction { source: e })
            .context("Failed to commit match insert")
    })
}

/// Deletes every match record and zeroes every player's counters, atomically.
pub fn delete_all(conn: &mut DbConn) -> Result<()> {
    let tx = conn
        .transaction()
        .context("Failed to open transaction for match reset")?;

    let deleted = tx
        .execute("DELETE FROM matches", [])
        .context("Failed to delete matches")?;
    tx.execute("UPDATE players SET wins = 0, losses = 0", [])
        .context("Failed to reset player counters")?;

    tx.commit().map_err(|e| {
        anyhow::Error::new(TournamentError::Transaction { source: e })
            .context("Failed to commit match reset")
    })?;

    log::debug!("Deleted {deleted} match records");
    Ok(())
}
