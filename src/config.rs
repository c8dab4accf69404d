//! Settings resolution: built-in defaults, then the JSON config file, then
//! command-line flags.
//!
//! Every key in the file is optional. Keys are kebab-case:
//!
//! ```json
//! {
//!   "seed": 42,
//!   "repeat-piece": "I",
//!   "show-fps": true,
//!   "columns": 10,
//!   "rows": 20,
//!   "rearm-ms": { "move": 60, "rotate": 120, "accelerate": 120, "toggle": 250 }
//! }
//! ```

use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::cli::Cli;
use crate::core::GameConfig;
use crate::input::RearmIntervals;
use crate::types::{PieceKind, DEFAULT_BOARD_COLUMNS, DEFAULT_BOARD_ROWS, DEFAULT_SEED};

pub const COLUMN_RANGE: RangeInclusive<u8> = 6..=40;
pub const ROW_RANGE: RangeInclusive<u8> = 8..=40;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown piece kind {0:?} (expected one of I, O, T, S, Z, J, L)")]
    UnknownPiece(String),
    #[error("board size {columns}x{rows} out of range (columns 6..=40, rows 8..=40)")]
    BoardSize { columns: u8, rows: u8 },
}

/// On-disk settings. Absent keys fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigFile {
    pub seed: Option<i64>,
    pub repeat_piece: Option<String>,
    pub show_fps: Option<bool>,
    pub columns: Option<u8>,
    pub rows: Option<u8>,
    #[serde(default)]
    pub rearm_ms: RearmConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RearmConfig {
    #[serde(rename = "move")]
    pub movement: Option<u32>,
    pub rotate: Option<u32>,
    pub accelerate: Option<u32>,
    pub toggle: Option<u32>,
}

impl RearmConfig {
    fn apply(&self, base: RearmIntervals) -> RearmIntervals {
        RearmIntervals {
            move_ms: self.movement.unwrap_or(base.move_ms),
            rotate_ms: self.rotate.unwrap_or(base.rotate_ms),
            accelerate_ms: self.accelerate.unwrap_or(base.accelerate_ms),
            toggle_ms: self.toggle.unwrap_or(base.toggle_ms),
        }
    }
}

impl ConfigFile {
    /// Parse file contents; `path` only labels errors.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }
}

/// Fully resolved runner settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub game: GameConfig,
    pub rearm: RearmIntervals,
    pub show_fps: bool,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Load the config file named by `cli` (if any) and layer the flags on top.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => {
                debug!("loading config from {}", path.display());
                ConfigFile::load(path)?
            }
            None => ConfigFile::default(),
        };
        Self::merge(cli, &file, wall_clock_ms)
    }

    /// Combine flags and file contents. `clock_ms` is consulted only for seed 0.
    pub fn merge(
        cli: &Cli,
        file: &ConfigFile,
        clock_ms: impl FnOnce() -> u64,
    ) -> Result<Self, ConfigError> {
        let repeat_piece = cli
            .repeat_piece
            .as_deref()
            .or(file.repeat_piece.as_deref())
            .map(|name| {
                PieceKind::from_str(name).ok_or_else(|| ConfigError::UnknownPiece(name.to_string()))
            })
            .transpose()?;

        let columns = cli.columns.or(file.columns).unwrap_or(DEFAULT_BOARD_COLUMNS);
        let rows = cli.rows.or(file.rows).unwrap_or(DEFAULT_BOARD_ROWS);
        if !COLUMN_RANGE.contains(&columns) || !ROW_RANGE.contains(&rows) {
            return Err(ConfigError::BoardSize { columns, rows });
        }

        let seed = resolve_seed_with(cli.seed.or(file.seed).unwrap_or(0), clock_ms);

        Ok(Self {
            game: GameConfig {
                seed,
                repeat_piece,
                columns,
                rows,
            },
            rearm: file.rearm_ms.apply(RearmIntervals::default()),
            show_fps: cli.show_fps || file.show_fps.unwrap_or(false),
            log_file: cli.log_file.clone(),
        })
    }
}

/// Map a user seed to the generator seed: negative selects the built-in seed,
/// zero seeds from the wall clock, anything else is folded to 32 bits.
pub fn resolve_seed(seed: i64) -> u32 {
    resolve_seed_with(seed, wall_clock_ms)
}

pub fn resolve_seed_with(seed: i64, clock_ms: impl FnOnce() -> u64) -> u32 {
    match seed {
        s if s < 0 => DEFAULT_SEED,
        0 => fold(clock_ms()),
        s => fold(s as u64),
    }
}

fn fold(v: u64) -> u32 {
    (v ^ (v >> 32)) as u32
}

fn wall_clock_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(1)
}
