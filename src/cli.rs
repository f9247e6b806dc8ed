// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "orbit-camera")]
#[command(about = "Orbit camera and 3D math toolkit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Replay a recorded input session and print the camera after every event
    Replay {
        /// Session file (JSON)
        session: PathBuf,

        /// Pretty-print each snapshot
        #[arg(long, default_value = "false")]
        pretty: bool,
    },
    /// Print vertex and triangle counts of a subdivided icosphere
    Icosphere {
        /// Number of subdivision passes
        #[arg(default_value = "2", value_parser = clap::value_parser!(u32).range(0..=8))]
        iterations: u32,
    },
    /// Open a window and log the camera as it is dragged and zoomed
    Probe {
        /// Optional session file supplying the initial camera
        session: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from(["orbit-camera", "replay", "session.json", "--pretty"]).unwrap();
        match cli.command {
            Command::Replay { session, pretty } => {
                assert_eq!(session, PathBuf::from("session.json"));
                assert!(pretty);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_icosphere_default_iterations() {
        let cli = Cli::try_parse_from(["orbit-camera", "icosphere"]).unwrap();
        assert!(matches!(cli.command, Command::Icosphere { iterations: 2 }));
    }

    #[test]
    fn test_icosphere_rejects_huge_iterations() {
        assert!(Cli::try_parse_from(["orbit-camera", "icosphere", "20"]).is_err());
    }
}
