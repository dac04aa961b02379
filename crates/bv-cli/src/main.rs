//! CLI frontend for the BowlVault bowling score tracker.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::edit::EditOptions;
use commands::play::PlayOptions;

#[derive(Parser)]
#[command(
    name = "bv",
    about = "BowlVault — score bowling games and keep a record of them",
    version,
    propagate_version = true
)]
struct Cli {
    /// Path to the game vault file
    #[arg(
        long,
        global = true,
        env = "BOWLVAULT_FILE",
        default_value = "bowlvault.json"
    )]
    vault: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a sequence of deliveries, e.g. `bv score X 7 / 9 - ...`
    Score {
        /// Pin counts (0-10) or x, /, f, -
        #[arg(required = true, allow_hyphen_values = true)]
        rolls: Vec<String>,
    },

    /// Bowl a game interactively, ball by ball
    Play {
        /// Bowl a practice game (the default)
        #[arg(long, conflicts_with = "league")]
        practice: bool,

        /// League team size (2v2, 3v3, 4v4)
        #[arg(short, long)]
        league: Option<String>,

        /// Ball used (repeat for several)
        #[arg(short, long = "ball")]
        balls: Vec<String>,

        /// Lane number (default: last lane used)
        #[arg(long)]
        lane: Option<String>,

        /// Bowling center (default: last place used)
        #[arg(long)]
        place: Option<String>,

        /// Other bowler on the pair (repeat for several)
        #[arg(short, long = "player")]
        players: Vec<String>,
    },

    /// List saved games, newest first
    List {
        /// Only show one mode: all, practice, 2v2, 3v3, or 4v4
        #[arg(short, long, default_value = "all")]
        mode: String,
    },

    /// Show a saved game's scoresheet
    Show {
        /// Game id or a unique prefix of it
        id: String,
    },

    /// Change the details of a saved game
    Edit {
        /// Game id or a unique prefix of it
        id: String,

        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// New ball label
        #[arg(long)]
        ball: Option<String>,

        /// New lane
        #[arg(long)]
        lane: Option<String>,

        /// New bowling center
        #[arg(long)]
        place: Option<String>,

        /// Corrected final score (0-300)
        #[arg(long)]
        score: Option<u32>,
    },

    /// Delete a saved game
    Delete {
        /// Game id or a unique prefix of it
        id: String,
    },

    /// Delete every saved game
    Clear {
        /// Confirm deleting all games
        #[arg(long)]
        yes: bool,
    },

    /// Show statistics across saved games
    Stats,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("BV_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score { rolls } => commands::score::run(&rolls),
        Commands::Play {
            practice: _,
            league,
            balls,
            lane,
            place,
            players,
        } => commands::play::run(
            &cli.vault,
            PlayOptions {
                league,
                balls,
                lane,
                place,
                players,
            },
        ),
        Commands::List { mode } => commands::list::run(&cli.vault, &mode),
        Commands::Show { id } => commands::show::run(&cli.vault, &id),
        Commands::Edit {
            id,
            date,
            ball,
            lane,
            place,
            score,
        } => commands::edit::run(
            &cli.vault,
            &id,
            EditOptions {
                date,
                ball,
                lane,
                place,
                score,
            },
        ),
        Commands::Delete { id } => commands::delete::run(&cli.vault, &id),
        Commands::Clear { yes } => commands::clear::run(&cli.vault, yes),
        Commands::Stats => commands::stats::run(&cli.vault),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
