use anyhow::Result;

use swiss_tournament::cli::Command;
use swiss_tournament::{
    handle_count, handle_init, handle_pairings, handle_register, handle_report,
    handle_reset_matches, handle_reset_players, handle_standings, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Init => handle_init(),
        Command::Register { name } => handle_register(name),
        Command::Report { winner, loser } => handle_report(*winner, *loser),
        Command::Standings => handle_standings(),
        Command::Pairings => handle_pairings(),
        Command::Count => handle_count(),
        Command::ResetMatches => handle_reset_matches(),
        Command::ResetPlayers => handle_reset_players(),
    }
}
