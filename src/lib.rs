pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod pairing;
pub mod sanitize;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::tournament::TournamentService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

fn open_service() -> Result<TournamentService> {
    let config = AppConfig::new();
    TournamentService::open(&config.database.path)
}

pub fn handle_init() -> Result<()> {
    open_service()?.init()
}

pub fn handle_register(name: &str) -> Result<()> {
    let player = open_service()?.register_player(name)?;
    println!("Registered {} with id {}", player.name, player.id);
    Ok(())
}

pub fn handle_report(winner: i32, loser: i32) -> Result<()> {
    open_service()?.report_match(winner, loser)?;
    println!("Recorded match: {winner} beat {loser}");
    Ok(())
}

pub fn handle_standings() -> Result<()> {
    let standings = open_service()?.player_standings()?;
    if standings.is_empty() {
        println!("No players registered");
        return Ok(());
    }

    println!("{:>4}  {:<24} {:>4} {:>7}", "id", "name", "wins", "matches");
    for row in standings {
        println!(
            "{:>4}  {:<24} {:>4} {:>7}",
            row.id, row.name, row.wins, row.matches_played
        );
    }
    Ok(())
}

pub fn handle_pairings() -> Result<()> {
    let pairings = open_service()?.swiss_pairings()?;
    if pairings.is_empty() {
        println!("No pairings to make");
        return Ok(());
    }

    for pairing in pairings {
        println!(
            "{} ({}) vs {} ({})",
            pairing.first_name, pairing.first_id, pairing.second_name, pairing.second_id
        );
    }
    Ok(())
}

pub fn handle_count() -> Result<()> {
    println!("{}", open_service()?.count_players()?);
    Ok(())
}

pub fn handle_reset_matches() -> Result<()> {
    open_service()?.delete_matches()
}

pub fn handle_reset_players() -> Result<()> {
    open_service()?.delete_players()
}
