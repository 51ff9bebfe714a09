use anyhow::{Context, Result};

use super::connection::DbConn;
use super::models::StandingsRow;

/// Ranked rows straight from the `standings` view. The view owns the sort
/// contract (wins desc, losses asc, id asc); callers must not re-sort.
pub fn list_ranked(conn: &mut DbConn) -> Result<Vec<StandingsRow>> {
    let sql = "SELECT id, name, wins, losses FROM standings";

    let mut stmt = conn.prepare(sql).context("Failed to query standings")?;
    let rows = stmt
        .query_map([], parse_standings_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_standings_row(row: &rusqlite::Row) -> rusqlite::Result<StandingsRow> {
    Ok(StandingsRow {
        id: row.get(0)?,
        name: row.get(1)?,
        wins: row.get(2)?,
        losses: row.get(3)?,
    })
}
