//! assign set|remove|show|students

use clap::{Args, Subcommand};
use tutoria_core_types::RequestContext;
use tutoria_engine::TutoringSystem;
use tutoria_store::SqliteSlotStorage;

use super::{print_json, CliResult};

#[derive(Debug, Args)]
pub struct AssignArgs {
    #[command(subcommand)]
    pub command: AssignCommand,
}

#[derive(Debug, Subcommand)]
pub enum AssignCommand {
    /// Assign a tutor to a student, replacing the current one
    Set {
        #[arg(long)]
        student: String,
        #[arg(long)]
        tutor: String,
    },
    Remove {
        #[arg(long)]
        student: String,
    },
    /// Show a student's assigned tutor
    Show {
        #[arg(long)]
        student: String,
    },
    /// List the students assigned to a tutor
    Students {
        #[arg(long)]
        tutor: String,
    },
}

pub fn execute(
    args: AssignArgs,
    system: &mut TutoringSystem<SqliteSlotStorage>,
    ctx: &RequestContext,
) -> CliResult {
    match args.command {
        AssignCommand::Set { student, tutor } => {
            let id = system.assign_tutor_to_student(&student, &tutor, ctx)?;
            println!("{}", id);
            Ok(())
        }
        AssignCommand::Remove { student } => {
            system.remove_assignment(&student, ctx)?;
            println!("Removed assignment for {}", student);
            Ok(())
        }
        AssignCommand::Show { student } => {
            let tutor = system
                .get_assigned_tutor(&student)
                .ok_or_else(|| format!("No tutor assigned to {}", student))?;
            print_json(&serde_json::json!({
                "email": tutor.email,
                "name": tutor.full_name(),
                "specialty": tutor.specialty,
            }))
        }
        AssignCommand::Students { tutor } => {
            let students: Vec<_> = system
                .get_assigned_students(&tutor)
                .into_iter()
                .map(|u| {
                    serde_json::json!({
                        "email": u.email,
                        "name": u.full_name(),
                        "major": u.major,
                    })
                })
                .collect();
            print_json(&students)
        }
    }
}
