//! CLI argument definitions for secpic

use clap::Parser;
use std::path::PathBuf;

use secpic::{Overrides, SerialOverride};

const LONG_ABOUT: &str = "Atari/Midway/Williams Security PIC Tool

New values modify the original file unless --new is specified.
The first 3 digits of the serial (game ID) are only modified with --gameid.
A filename alone prints the PIC information.";

#[derive(Parser, Debug)]
#[command(name = "secpic")]
#[command(about = "Atari/Midway/Williams Security PIC Tool", long_about = LONG_ABOUT)]
pub struct Cli {
    /// PIC dump to inspect or modify
    pub filename: PathBuf,

    /// New S/N (0-999999), "random" to generate a random number
    #[arg(short, long, allow_hyphen_values = true)]
    pub serial: Option<String>,

    /// New MM (1-12)
    #[arg(short, long, allow_negative_numbers = true)]
    pub month: Option<i64>,

    /// New DD (0-30)
    #[arg(short, long, allow_negative_numbers = true)]
    pub day: Option<i64>,

    /// New YYYY (1980-2155)
    #[arg(short, long, allow_negative_numbers = true)]
    pub year: Option<i64>,

    /// New game ID (000-999), can prevent the game from booting if mismatched
    #[arg(long = "gameid", allow_negative_numbers = true)]
    pub game_id: Option<i64>,

    /// Create a new copy instead of modifying the original file
    #[arg(short, long)]
    pub new: bool,

    /// Back up the dump before modifying it in place
    #[arg(short, long)]
    pub backup: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Config file (defaults to the user config directory)
    #[arg(long, env = "SECPIC_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Field overrides requested on the command line
    pub fn overrides(&self) -> Overrides {
        Overrides {
            game_id: self.game_id,
            serial: self.serial.as_deref().map(SerialOverride::parse),
            month: self.month,
            day: self.day,
            year: self.year,
        }
    }
}
