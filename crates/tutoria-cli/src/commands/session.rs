//! session request|accept|reject|complete|list|delete

use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Subcommand};
use tutoria_core::{NewSession, SessionStatus};
use tutoria_core_types::RequestContext;
use tutoria_engine::TutoringSystem;
use tutoria_store::SqliteSlotStorage;

use super::{print_json, CliResult};

#[derive(Debug, Args)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// Request a session with a tutor
    Request {
        #[arg(long)]
        student: String,
        #[arg(long)]
        tutor: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        /// HH:MM
        #[arg(long, value_parser = parse_time)]
        time: NaiveTime,
        #[arg(long)]
        subject: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    Accept {
        id: String,
        #[arg(long)]
        observations: Option<String>,
    },
    Reject {
        id: String,
        #[arg(long)]
        reason: String,
    },
    Complete {
        id: String,
        #[arg(long)]
        grade: String,
        #[arg(long)]
        observations: Option<String>,
    },
    /// List sessions, filtered by participant and/or status
    List {
        #[arg(long, conflicts_with = "tutor")]
        student: Option<String>,
        #[arg(long, conflicts_with = "student")]
        tutor: Option<String>,
        #[arg(long)]
        status: Option<SessionStatus>,
    },
    Delete {
        id: String,
    },
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|e| format!("expected HH:MM ({})", e))
}

pub fn execute(
    args: SessionArgs,
    system: &mut TutoringSystem<SqliteSlotStorage>,
    ctx: &RequestContext,
) -> CliResult {
    match args.command {
        SessionCommand::Request {
            student,
            tutor,
            date,
            time,
            subject,
            description,
        } => {
            let id = system.create_session(
                NewSession {
                    student_email: student,
                    tutor_email: tutor,
                    date,
                    time,
                    subject,
                    description,
                },
                ctx,
            )?;
            println!("{}", id);
            Ok(())
        }
        SessionCommand::Accept { id, observations } => {
            system.accept_session(&id, observations, ctx)?;
            println!("Session {} accepted", id);
            Ok(())
        }
        SessionCommand::Reject { id, reason } => {
            system.reject_session(&id, &reason, ctx)?;
            println!("Session {} rejected", id);
            Ok(())
        }
        SessionCommand::Complete {
            id,
            grade,
            observations,
        } => {
            system.complete_session(&id, &grade, observations, ctx)?;
            println!("Session {} completed", id);
            Ok(())
        }
        SessionCommand::List {
            student,
            tutor,
            status,
        } => {
            let mut sessions = match (student, tutor) {
                (Some(email), _) => system.get_sessions_by_student(&email),
                (_, Some(email)) => system.get_sessions_by_tutor(&email),
                _ => system.list_sessions(),
            };
            if let Some(status) = status {
                sessions.retain(|s| s.status == status);
            }
            print_json(&sessions)
        }
        SessionCommand::Delete { id } => {
            system.delete_session(&id, ctx)?;
            println!("Deleted session {}", id);
            Ok(())
        }
    }
}
