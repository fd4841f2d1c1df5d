use std::fmt;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use super::types::PlayerSlot;
use crate::log;

const COMPUTER_LABEL: &str = "AI";
const DRAW_LABEL: &str = "Draw";
const WIN_SUFFIX: &str = " wins";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreEntry {
    Player(PlayerSlot),
    Computer,
    Draw,
}

impl fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreEntry::Player(player) => write!(f, "Player {}{}", player.number(), WIN_SUFFIX),
            ScoreEntry::Computer => write!(f, "{}{}", COMPUTER_LABEL, WIN_SUFFIX),
            ScoreEntry::Draw => write!(f, "{}", DRAW_LABEL),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unrecognized scoreboard line: {0:?}")]
pub struct ParseScoreEntryError(String);

impl FromStr for ScoreEntry {
    type Err = ParseScoreEntryError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        // Older scoreboards recorded draws as "Draw wins".
        let subject = line.strip_suffix(WIN_SUFFIX).unwrap_or(line);

        if subject == DRAW_LABEL {
            return Ok(ScoreEntry::Draw);
        }
        if line == subject {
            return Err(ParseScoreEntryError(line.to_string()));
        }
        if subject == COMPUTER_LABEL {
            return Ok(ScoreEntry::Computer);
        }

        subject
            .strip_prefix("Player ")
            .and_then(|number| number.parse::<u8>().ok())
            .and_then(PlayerSlot::from_number)
            .map(ScoreEntry::Player)
            .ok_or_else(|| ParseScoreEntryError(line.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreTally {
    pub player_one: usize,
    pub player_two: usize,
    pub computer: usize,
    pub draws: usize,
}

impl ScoreTally {
    pub fn add(&mut self, entry: ScoreEntry) {
        match entry {
            ScoreEntry::Player(PlayerSlot::One) => self.player_one += 1,
            ScoreEntry::Player(PlayerSlot::Two) => self.player_two += 1,
            ScoreEntry::Computer => self.computer += 1,
            ScoreEntry::Draw => self.draws += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.player_one + self.player_two + self.computer + self.draws
    }
}

impl fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player 1: {}, Player 2: {}, AI: {}, Draws: {} ({} games)",
            self.player_one,
            self.player_two,
            self.computer,
            self.draws,
            self.total()
        )
    }
}

/// Append-only log of finished games, one outcome per line.
pub struct Scoreboard {
    file_path: PathBuf,
}

impl Scoreboard {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn record(&self, entry: ScoreEntry) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)?;
        writeln!(file, "{}", entry)
    }

    pub fn exists(&self) -> bool {
        self.file_path.exists()
    }

    pub fn entries(&self) -> std::io::Result<Vec<ScoreEntry>> {
        let content = match std::fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err),
        };

        let mut entries = Vec::new();
        for line in content.lines().filter(|line| !line.trim().is_empty()) {
            match line.parse::<ScoreEntry>() {
                Ok(entry) => entries.push(entry),
                Err(e) => log!("Skipping scoreboard line in {}: {}", self.file_path.display(), e),
            }
        }
        Ok(entries)
    }

    pub fn tally(&self) -> std::io::Result<ScoreTally> {
        let mut tally = ScoreTally::default();
        for entry in self.entries()? {
            tally.add(entry);
        }
        Ok(tally)
    }
}
