use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "swiss-system tournament backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Create the tournament database schema, wiping any existing data
    Init,
    /// Register a new player
    Register {
        /// The player's full name (need not be unique)
        name: String,
    },
    /// Record the outcome of a single match
    Report {
        /// Id of the winning player
        winner: i32,
        /// Id of the losing player
        loser: i32,
    },
    /// Print the current standings, best record first
    Standings,
    /// Compute next-round pairings from the standings
    Pairings,
    /// Print the number of registered players
    Count,
    /// Delete all match records and zero every player's counters
    ResetMatches,
    /// Delete all player records
    ResetPlayers,
}
