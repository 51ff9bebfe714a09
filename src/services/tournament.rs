use anyhow::Result;
use log::info;

use crate::database::{self, DbPool, Player};
use crate::domain::{Pairing, PlayerStanding};
use crate::errors::TournamentError;
use crate::pairing;
use crate::sanitize;

/// Stateless operation set over the tournament store. Every call checks a
/// connection out of the pool, performs one unit of work and returns it;
/// nothing is cached between calls.
pub struct TournamentService {
    pool: DbPool,
}

impl TournamentService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn open(database_path: &str) -> Result<Self> {
        Ok(Self::new(database::create_pool(database_path)?))
    }

    /// Rebuilds the schema from scratch, wiping all tournament data.
    pub fn init(&self) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;
        database::setup::reset_database(&mut conn)
    }

    /// Removes all match records and zeroes every player's counters.
    pub fn delete_matches(&self) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;
        database::matches::delete_all(&mut conn)
    }

    /// Removes all player records. Matches must be deleted first; the store
    /// rejects the call otherwise.
    pub fn delete_players(&self) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;
        database::players::delete_all(&mut conn)
    }

    pub fn count_players(&self) -> Result<i64> {
        let mut conn = database::get_connection(&self.pool)?;
        database::players::count_all(&mut conn)
    }

    /// Registers a player under a markup-stripped name with zeroed counters.
    /// The store assigns the id. Names that sanitize to nothing are rejected
    /// before any write.
    pub fn register_player(&self, name: &str) -> Result<Player> {
        let clean = sanitize::strip_markup(name)?;
        if clean.is_empty() {
            return Err(TournamentError::EmptyName {
                name: name.to_string(),
            }
            .into());
        }

        let mut conn = database::get_connection(&self.pool)?;
        let player = database::players::insert_player(&mut conn, &clean)?;
        info!("Registered player {} (id {})", player.name, player.id);
        Ok(player)
    }

    /// Current standings in store order: wins descending, losses ascending,
    /// id as the final tie-break. No re-sorting happens here.
    pub fn player_standings(&self) -> Result<Vec<PlayerStanding>> {
        let mut conn = database::get_connection(&self.pool)?;
        let rows = database::standings::list_ranked(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|row| PlayerStanding {
                id: row.id,
                name: row.name,
                wins: row.wins,
                matches_played: row.wins + row.losses,
            })
            .collect())
    }

    /// Records a match outcome: one match row plus both counter bumps,
    /// committed atomically. Unknown player ids and self-play surface as
    /// constraint violations with nothing committed.
    pub fn report_match(&self, winner_id: i32, loser_id: i32) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;
        database::matches::insert_match(&mut conn, winner_id, loser_id)
    }

    /// Next-round pairings: adjacent players in the standings, top two
    /// first. An odd player out is dropped, not given a bye.
    pub fn swiss_pairings(&self) -> Result<Vec<Pairing>> {
        let mut conn = database::get_connection(&self.pool)?;
        let rows = database::standings::list_ranked(&mut conn)?;
        Ok(pairing::pair_adjacent(&rows))
    }
}
