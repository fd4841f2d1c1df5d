mod input;
mod mode;
mod render;
mod session;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use common::config::{ConfigManager, DEFAULT_CONFIG_FILE, GameConfig};
use common::{log, logger};

use mode::GameMode;
use session::GameSession;

#[derive(Parser)]
#[command(name = "tictactoe", version, about = "Tic-tac-toe against a friend or the computer")]
struct Args {
    /// YAML config file; created with defaults if missing
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Skip the mode menu
    #[arg(long, value_enum)]
    mode: Option<GameMode>,

    /// Write diagnostics to stderr
    #[arg(long)]
    log: bool,

    /// Tag each log line with the program name
    #[arg(long)]
    log_prefix: bool,

    /// Disable terminal colours regardless of the config
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.log {
        let prefix = if args.log_prefix {
            Some("TicTacToe".to_string())
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    let config_manager: ConfigManager<_, GameConfig, _> =
        ConfigManager::from_yaml_file(&args.config);
    let mut config = config_manager.get_or_init_config()?;
    if args.no_color {
        config.colored_output = false;
    }
    log!("Using config {}: {:?}", args.config.display(), config);

    let stdin = io::stdin();
    let mut session = GameSession::new(stdin.lock(), io::stdout(), config);
    session.run(args.mode)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let args = Args::try_parse_from(["tictactoe"]).unwrap();

        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_FILE));
        assert_eq!(args.mode, None);
        assert!(!args.log);
        assert!(!args.log_prefix);
        assert!(!args.no_color);
    }

    #[test]
    fn test_all_flags_parse() {
        let args = Args::try_parse_from([
            "tictactoe",
            "--config",
            "other.yaml",
            "--mode",
            "pvc",
            "--log",
            "--log-prefix",
            "--no-color",
        ])
        .unwrap();

        assert_eq!(args.config, PathBuf::from("other.yaml"));
        assert_eq!(args.mode, Some(GameMode::Pvc));
        assert!(args.log);
        assert!(args.log_prefix);
        assert!(args.no_color);
    }

    #[test]
    fn test_old_prefix_flag_is_rejected() {
        assert!(Args::try_parse_from(["tictactoe", "--use-log-prefix"]).is_err());
    }
}
