//! Endpoint command: show leaderboard routing for a player name.

use std::path::Path;

use anyhow::Result;
use hiscores_core::AccountType;

use super::load_config;

pub fn run(config_path: &Path, player: &str) -> Result<()> {
    let config = load_config(config_path);
    let account = AccountType::detect(player);
    println!("{}\t{}", account, account.endpoint(&config.endpoints));
    Ok(())
}
