//! Command-line flags for the terminal runner.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(
    name = "blockfall",
    version,
    about = "Falling-block puzzle game for the terminal"
)]
pub struct Cli {
    /// Piece generator seed: negative picks the built-in seed, 0 seeds from the clock
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Deal only this piece kind (I, O, T, S, Z, J or L)
    #[arg(long, value_name = "KIND")]
    pub repeat_piece: Option<String>,

    /// Log frames per second once per second
    #[arg(long)]
    pub show_fps: bool,

    /// Board width in cells
    #[arg(long)]
    pub columns: Option<u8>,

    /// Board height in cells
    #[arg(long)]
    pub rows: Option<u8>,

    /// JSON settings file; flags given on the command line win over it
    #[arg(short, long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (the terminal is taken over by the game)
    #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "blockfall",
            "--seed",
            "-1",
            "--repeat-piece",
            "t",
            "--show-fps",
            "--columns",
            "12",
            "--rows",
            "22",
            "-c",
            "game.json",
            "--log-file",
            "game.log",
        ])
        .unwrap();

        assert_eq!(cli.seed, Some(-1));
        assert_eq!(cli.repeat_piece.as_deref(), Some("t"));
        assert!(cli.show_fps);
        assert_eq!(cli.columns, Some(12));
        assert_eq!(cli.rows, Some(22));
        assert_eq!(cli.config, Some(PathBuf::from("game.json")));
        assert_eq!(cli.log_file, Some(PathBuf::from("game.log")));
    }

    #[test]
    fn test_no_flags_is_default() {
        let cli = Cli::try_parse_from(["blockfall"]).unwrap();
        assert_eq!(cli, Cli::default());
    }

    #[test]
    fn test_rejects_oversized_board_value() {
        assert!(Cli::try_parse_from(["blockfall", "--columns", "300"]).is_err());
    }
}
