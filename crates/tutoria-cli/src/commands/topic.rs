//! topic propose|review|show|list|delete

use clap::{ArgGroup, Args, Subcommand};
use tutoria_core::{NewTopic, TopicReview};
use tutoria_core_types::RequestContext;
use tutoria_engine::TutoringSystem;
use tutoria_store::SqliteSlotStorage;

use super::{print_json, CliResult};

#[derive(Debug, Args)]
pub struct TopicArgs {
    #[command(subcommand)]
    pub command: TopicCommand,
}

#[derive(Debug, Subcommand)]
pub enum TopicCommand {
    /// Register a thesis topic for a student
    Propose {
        #[arg(long)]
        student: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        comments: Option<String>,
    },
    /// Approve or reject a topic
    Review(ReviewArgs),
    /// Show a student's topic
    Show {
        #[arg(long)]
        student: String,
    },
    List,
    Delete {
        id: String,
    },
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("verdict").required(true).args(["approve", "reject"])))]
pub struct ReviewArgs {
    pub id: String,
    #[arg(long)]
    pub approve: bool,
    #[arg(long)]
    pub reject: bool,
    /// Required when rejecting
    #[arg(long)]
    pub observations: Option<String>,
}

pub fn execute(
    args: TopicArgs,
    system: &mut TutoringSystem<SqliteSlotStorage>,
    ctx: &RequestContext,
) -> CliResult {
    match args.command {
        TopicCommand::Propose {
            student,
            title,
            description,
            comments,
        } => {
            let id = system.create_topic(
                NewTopic {
                    student_email: student,
                    title,
                    description,
                    comments,
                },
                ctx,
            )?;
            println!("{}", id);
            Ok(())
        }
        TopicCommand::Review(ReviewArgs {
            id,
            approve,
            observations,
            ..
        }) => {
            let review = if approve {
                TopicReview::Approve { observations }
            } else {
                TopicReview::Reject {
                    observations: observations.unwrap_or_default(),
                }
            };
            let verdict = if review.is_approval() {
                "approved"
            } else {
                "rejected"
            };
            system.review_topic(&id, review, ctx)?;
            println!("Topic {} {}", id, verdict);
            Ok(())
        }
        TopicCommand::Show { student } => {
            let topic = system
                .get_topic_by_student(&student)
                .ok_or_else(|| format!("No topic registered by {}", student))?;
            let state = topic.review_state();
            print_json(&serde_json::json!({
                "topic": topic,
                "review_state": state,
            }))
        }
        TopicCommand::List => print_json(&system.list_topics()),
        TopicCommand::Delete { id } => {
            system.delete_topic(&id, ctx)?;
            println!("Deleted topic {}", id);
            Ok(())
        }
    }
}
