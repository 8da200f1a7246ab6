//! user list|show|register|update|delete|login|classify|recover

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use serde::Serialize;
use tutoria_core::{NewUser, Role, User, UserUpdate};
use tutoria_core_types::{RequestContext, Sensitive};
use tutoria_engine::TutoringSystem;
use tutoria_store::SqliteSlotStorage;

use super::{print_json, CliResult};

#[derive(Debug, Args)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List users, optionally by role
    List {
        #[arg(long)]
        role: Option<Role>,
    },
    Show {
        email: String,
    },
    /// Register a user; the role follows from the email domain
    Register(RegisterArgs),
    /// Edit profile fields
    Update(UpdateArgs),
    /// Delete a user and their sessions, topics, files and assignments
    Delete {
        email: String,
    },
    /// Check an email/password pair
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Show the role implied by an email's domain
    Classify {
        email: String,
    },
    /// Reset a password using the security answer
    Recover {
        #[arg(long)]
        email: String,
        #[arg(long)]
        answer: String,
        #[arg(long)]
        new_password: String,
    },
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub given_names: String,
    #[arg(long)]
    pub surnames: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub faculty: Option<String>,
    #[arg(long)]
    pub major: Option<String>,
    #[arg(long)]
    pub specialty: Option<String>,
    #[arg(long)]
    pub question: String,
    #[arg(long)]
    pub answer: String,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub email: String,
    #[arg(long)]
    pub given_names: Option<String>,
    #[arg(long)]
    pub surnames: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub faculty: Option<String>,
    #[arg(long)]
    pub major: Option<String>,
    #[arg(long)]
    pub specialty: Option<String>,
    #[arg(long)]
    pub question: Option<String>,
    #[arg(long)]
    pub answer: Option<String>,
}

/// A user as printed: credentials and the recovery answer are left out
#[derive(Debug, Serialize)]
struct UserView<'a> {
    id: &'a str,
    email: &'a str,
    name: String,
    role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    faculty: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    major: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    specialty: Option<&'a str>,
    security_question: &'a str,
    registered_at: DateTime<Utc>,
}

impl<'a> From<&'a User> for UserView<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            id: &user.id,
            email: &user.email,
            name: user.full_name(),
            role: user.role,
            faculty: user.faculty.as_deref(),
            major: user.major.as_deref(),
            specialty: user.specialty.as_deref(),
            security_question: &user.security_question,
            registered_at: user.registered_at,
        }
    }
}

pub fn execute(
    args: UserArgs,
    system: &mut TutoringSystem<SqliteSlotStorage>,
    ctx: &RequestContext,
) -> CliResult {
    match args.command {
        UserCommand::List { role } => {
            let users = match role {
                Some(role) => system.list_users_by_role(role),
                None => system.list_users(),
            };
            let views: Vec<UserView> = users.iter().map(UserView::from).collect();
            print_json(&views)
        }
        UserCommand::Show { email } => {
            let user = system
                .get_user_by_email(&email)
                .ok_or_else(|| format!("No user with email {}", email))?;
            print_json(&UserView::from(&user))
        }
        UserCommand::Register(args) => register(args, system, ctx),
        UserCommand::Update(args) => update(args, system, ctx),
        UserCommand::Delete { email } => {
            system.delete_user(&email, ctx)?;
            println!("Deleted {}", email);
            Ok(())
        }
        UserCommand::Login { email, password } => {
            if !system.validate_credentials(&email, &password) {
                return Err("Invalid email or password".into());
            }
            println!("Credentials valid for {}", email);
            Ok(())
        }
        UserCommand::Classify { email } => {
            let role = system
                .validate_email_domain(&email)
                .ok_or("Email does not belong to an institutional domain")?;
            println!("{}", role);
            Ok(())
        }
        UserCommand::Recover {
            email,
            answer,
            new_password,
        } => {
            system.recover_password(&email, &answer, &new_password, ctx)?;
            println!("Password updated for {}", email);
            Ok(())
        }
    }
}

fn register(
    args: RegisterArgs,
    system: &mut TutoringSystem<SqliteSlotStorage>,
    ctx: &RequestContext,
) -> CliResult {
    let role = system
        .validate_email_domain(&args.email)
        .ok_or("Email does not belong to an institutional domain")?;

    let id = system.create_user(
        NewUser {
            given_names: args.given_names,
            surnames: args.surnames,
            email: args.email,
            password: Sensitive::new(args.password),
            role,
            faculty: args.faculty,
            major: args.major,
            specialty: args.specialty,
            security_question: args.question,
            security_answer: Sensitive::new(args.answer),
        },
        ctx,
    )?;
    println!("{}", id);
    Ok(())
}

fn update(
    args: UpdateArgs,
    system: &mut TutoringSystem<SqliteSlotStorage>,
    ctx: &RequestContext,
) -> CliResult {
    let mut update = UserUpdate::new();
    if let Some(v) = args.given_names {
        update = update.given_names(v);
    }
    if let Some(v) = args.surnames {
        update = update.surnames(v);
    }
    if let Some(v) = args.password {
        update = update.password(v);
    }
    if let Some(v) = args.faculty {
        update = update.faculty(v);
    }
    if let Some(v) = args.major {
        update = update.major(v);
    }
    if let Some(v) = args.specialty {
        update = update.specialty(v);
    }
    if let Some(v) = args.question {
        update = update.security_question(v);
    }
    if let Some(v) = args.answer {
        update = update.security_answer(v);
    }
    if update.is_empty() {
        return Err("Nothing to update".into());
    }

    system.update_user(&args.email, update, ctx)?;
    println!("Updated {}", args.email);
    Ok(())
}
