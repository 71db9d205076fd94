//! Command-line interface for tictactoe.

use clap::Parser;
use std::path::PathBuf;
use tictactoe::{ConfigOverrides, Player, WindowSize};

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with a clickable terminal board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Window title
    #[arg(long)]
    pub title: Option<String>,

    /// Window size in terminal cells, as WIDTHxHEIGHT
    #[arg(long)]
    pub size: Option<WindowSize>,

    /// Whether the window follows the terminal size
    #[arg(long)]
    pub resizable: Option<bool>,

    /// Player who moves first (X or O)
    #[arg(long)]
    pub first_player: Option<Player>,

    /// File receiving log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Flags that replace configuration file values.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            title: self.title.clone(),
            size: self.size,
            resizable: self.resizable,
            first_player: self.first_player,
            log_file: self.log_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_no_overrides() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.overrides(), ConfigOverrides::default());
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "--title",
            "Morpion",
            "--size",
            "50x20",
            "--resizable",
            "true",
            "--first-player",
            "o",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.title.as_deref(), Some("Morpion"));
        assert_eq!(overrides.size, Some(WindowSize::new(50, 20)));
        assert_eq!(overrides.resizable, Some(true));
        assert_eq!(overrides.first_player, Some(Player::O));
    }

    #[test]
    fn test_bad_size_rejected() {
        assert!(Cli::try_parse_from(["tictactoe", "--size", "big"]).is_err());
    }
}
