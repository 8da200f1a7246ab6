//! Tutoria CLI
//!
//! Operator interface to the thesis tutoring store

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tutoria_core::logging_facility;
use tutoria_core_types::RequestContext;
use tutoria_engine::TutoringSystem;

mod commands;
mod config;

use config::CliConfig;

#[derive(Debug, Parser)]
#[command(name = "tutoria")]
#[command(about = "Tutoria - thesis tutoring records", long_about = None)]
struct Cli {
    /// SQLite database file (env: TUTORIA_DB)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Log output: pretty or json (env: TUTORIA_LOG_FORMAT)
    #[arg(long, global = true)]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the database (seeding it if empty)
    Init,
    /// Report or recreate the default dataset
    ///
    /// Every start already seeds an empty database, so without --force this
    /// only reports what is present.
    Seed(commands::system::SeedArgs),
    /// Empty every collection; the next start seeds it again
    Reset,
    /// Print system statistics
    Stats,
    /// User accounts
    User(commands::user::UserArgs),
    /// Tutoring sessions
    Session(commands::session::SessionArgs),
    /// Thesis topics
    Topic(commands::topic::TopicArgs),
    /// Uploaded files
    File(commands::file::FileArgs),
    /// Student-tutor assignments
    Assign(commands::assignment::AssignArgs),
    /// Notification inbox
    Notify(commands::notification::NotifyArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::resolve(cli.db, cli.log_format)?;
    logging_facility::init(config.log_profile);

    let mut system = TutoringSystem::open_sqlite(&config.db_path)?;
    let ctx = RequestContext::new();

    match cli.command {
        Commands::Init => commands::system::init(&system, &config.db_path),
        Commands::Seed(args) => commands::system::seed(args, &mut system, &ctx),
        Commands::Reset => commands::system::reset(&mut system, &ctx),
        Commands::Stats => commands::system::stats(&system),
        Commands::User(args) => commands::user::execute(args, &mut system, &ctx),
        Commands::Session(args) => commands::session::execute(args, &mut system, &ctx),
        Commands::Topic(args) => commands::topic::execute(args, &mut system, &ctx),
        Commands::File(args) => commands::file::execute(args, &mut system, &ctx),
        Commands::Assign(args) => commands::assignment::execute(args, &mut system, &ctx),
        Commands::Notify(args) => commands::notification::execute(args, &mut system, &ctx),
    }
}
