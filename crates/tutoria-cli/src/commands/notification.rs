//! notify list|read|read-all|message

use clap::{Args, Subcommand};
use tutoria_core_types::RequestContext;
use tutoria_engine::TutoringSystem;
use tutoria_store::SqliteSlotStorage;

use super::{print_json, CliResult};

#[derive(Debug, Args)]
pub struct NotifyArgs {
    #[command(subcommand)]
    pub command: NotifyCommand,
}

#[derive(Debug, Subcommand)]
pub enum NotifyCommand {
    /// Inbox for a user, newest first
    List {
        #[arg(long)]
        email: String,
        #[arg(long)]
        unread: bool,
    },
    /// Mark one notification read
    Read {
        id: String,
    },
    /// Mark a user's whole inbox read
    ReadAll {
        #[arg(long)]
        email: String,
    },
    /// Send a message from a tutor to a student
    Message {
        #[arg(long)]
        tutor: String,
        #[arg(long)]
        student: String,
        #[arg(long)]
        text: String,
    },
}

pub fn execute(
    args: NotifyArgs,
    system: &mut TutoringSystem<SqliteSlotStorage>,
    ctx: &RequestContext,
) -> CliResult {
    match args.command {
        NotifyCommand::List { email, unread } => {
            let mut inbox = system.get_notifications(&email);
            if unread {
                inbox.retain(|n| !n.read);
            }
            print_json(&inbox)
        }
        NotifyCommand::Read { id } => {
            system.mark_as_read(&id, ctx)?;
            println!("Marked {} read", id);
            Ok(())
        }
        NotifyCommand::ReadAll { email } => {
            let count = system.mark_all_as_read(&email, ctx)?;
            println!("Marked {} notification(s) read", count);
            Ok(())
        }
        NotifyCommand::Message {
            tutor,
            student,
            text,
        } => {
            let id = system.send_tutor_message(&tutor, &student, &text, ctx)?;
            println!("{}", id);
            Ok(())
        }
    }
}
