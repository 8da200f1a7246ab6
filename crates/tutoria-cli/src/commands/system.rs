//! init, seed, reset and stats

use std::path::Path;

use clap::Args;
use tutoria_core_types::RequestContext;
use tutoria_engine::TutoringSystem;
use tutoria_store::SqliteSlotStorage;

use super::{print_json, CliResult};

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Clear every collection and write the default dataset again
    #[arg(long)]
    pub force: bool,
}

/// Opening the system already created and seeded the database
pub fn init(system: &TutoringSystem<SqliteSlotStorage>, db_path: &Path) -> CliResult {
    println!(
        "Initialized {} ({} users)",
        db_path.display(),
        system.store().users().len()
    );
    Ok(())
}

pub fn seed(
    args: SeedArgs,
    system: &mut TutoringSystem<SqliteSlotStorage>,
    ctx: &RequestContext,
) -> CliResult {
    if args.force {
        system.force_recreate_default_data(ctx)?;
        println!("Default data recreated");
    } else {
        // opening the system seeded an empty database already
        println!(
            "{} users present; nothing seeded (use --force to recreate)",
            system.store().users().len()
        );
    }
    Ok(())
}

pub fn reset(system: &mut TutoringSystem<SqliteSlotStorage>, ctx: &RequestContext) -> CliResult {
    system.reset_system(ctx)?;
    println!("All collections cleared");
    Ok(())
}

pub fn stats(system: &TutoringSystem<SqliteSlotStorage>) -> CliResult {
    print_json(&system.get_system_stats())
}
