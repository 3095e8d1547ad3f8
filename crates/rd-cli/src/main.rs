//! CLI frontend for the tabletop RPG dice roller.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rd_mechanics::{AttackKind, EngineConfig};

#[derive(Parser)]
#[command(
    name = "rpgdice",
    about = "Dice roller for ORE, Old World of Darkness and Dark Heresy",
    version,
    propagate_version = true
)]
struct Cli {
    /// RNG seed for reproducible rolls
    #[arg(long, global = true, env = "RPGDICE_SEED")]
    seed: Option<u64>,

    /// Name shown on Dark Heresy replies and narrated actions
    #[arg(long, global = true, env = "RPGDICE_ACTOR", default_value = "Player")]
    actor: String,

    /// Difficulty for OWoD rolls that do not give one (clamped to 2-10)
    #[arg(long, global = true, env = "RPGDICE_OWOD_DIFFICULTY")]
    owod_difficulty: Option<u32>,

    /// Print the structured result as JSON instead of the reply line
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// One-Roll Engine: roll d10s and report matching sets
    Ore {
        /// Number of d10s to roll (1-10)
        #[arg(allow_negative_numbers = true)]
        dice: i64,

        /// Add a called die showing this face
        #[arg(short, long)]
        call: Option<i64>,

        /// Add an expert die showing this face
        #[arg(short, long)]
        expert: Option<i64>,

        /// Note attached to the roll
        #[arg(trailing_var_arg = true)]
        note: Vec<String>,
    },

    /// Old World of Darkness: roll d10s and count successes
    Owod {
        /// Number of d10s to roll (1-20)
        #[arg(allow_negative_numbers = true)]
        pool: i64,

        /// Target number for each die (default: 6)
        #[arg(short, long, allow_negative_numbers = true)]
        difficulty: Option<i64>,

        /// What the roll is for
        #[arg(trailing_var_arg = true)]
        note: Vec<String>,
    },

    /// Dark Heresy: roll d100 against a test value
    Dh {
        /// Test value to roll under (1-300)
        #[arg(allow_negative_numbers = true)]
        test: i64,

        /// Ranged fire mode: semi or auto
        #[arg(short, long, value_parser = parse_kind)]
        kind: Option<AttackKind>,

        /// Note attached to the roll
        #[arg(trailing_var_arg = true)]
        note: Vec<String>,
    },

    /// Read chat commands from stdin, one per line
    Chat,
}

fn parse_kind(s: &str) -> Result<AttackKind, String> {
    AttackKind::parse(s).ok_or_else(|| format!("unknown fire mode \"{s}\". Use: semi, auto"))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let mut config = EngineConfig::default().with_actor(cli.actor);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(difficulty) = cli.owod_difficulty {
        config = config.with_owod_difficulty(difficulty);
    }
    let json = cli.json;

    let result = match cli.command {
        Commands::Ore {
            dice,
            call,
            expert,
            note,
        } => commands::ore::run(config, dice, call, expert, &note, json),
        Commands::Owod {
            pool,
            difficulty,
            note,
        } => commands::owod::run(config, pool, difficulty, &note, json),
        Commands::Dh { test, kind, note } => commands::dh::run(config, test, kind, &note, json),
        Commands::Chat => commands::chat::run(config),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
