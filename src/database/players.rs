use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::Player;
use crate::errors::classify_store_error;

pub fn insert_player(conn: &mut DbConn, name: &str) -> Result<Player> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id, name, wins, losses, created_at";

    conn.query_row(sql, params![name], parse_player_row)
        .context("Failed to insert new player")
}

pub fn count_all(conn: &mut DbConn) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))
        .context("Failed to count players")
}

/// Deletes every player record. Fails on a constraint violation if match
/// rows still reference players; callers reset matches first.
pub fn delete_all(conn: &mut DbConn) -> Result<()> {
    let deleted = conn
        .execute("DELETE FROM players", [])
        .map_err(|e| classify_store_error(e).context("Failed to delete players"))?;

    log::debug!("Deleted {deleted} player records");
    Ok(())
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        wins: row.get(2)?,
        losses: row.get(3)?,
        created_at: row.get(4)?,
    })
}
