//! file upload|export|list|delete

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use serde::Serialize;
use tutoria_core::{FileRecord, NewFile};
use tutoria_core_types::RequestContext;
use tutoria_engine::TutoringSystem;
use tutoria_store::SqliteSlotStorage;

use super::{print_json, CliResult};

#[derive(Debug, Args)]
pub struct FileArgs {
    #[command(subcommand)]
    pub command: FileCommand,
}

#[derive(Debug, Subcommand)]
pub enum FileCommand {
    /// Store a local file for a student
    Upload {
        #[arg(long)]
        student: String,
        path: PathBuf,
        /// MIME type; guessed from the extension when omitted
        #[arg(long)]
        mime: Option<String>,
    },
    /// Write a stored file's bytes to disk
    Export {
        id: String,
        #[arg(long)]
        out: PathBuf,
    },
    List {
        #[arg(long)]
        student: Option<String>,
    },
    Delete {
        id: String,
    },
}

/// File metadata without the inline content
#[derive(Debug, Serialize)]
struct FileView<'a> {
    id: &'a str,
    name: &'a str,
    mime_type: &'a str,
    size: u64,
    student_email: &'a str,
    uploaded_at: DateTime<Utc>,
}

impl<'a> From<&'a FileRecord> for FileView<'a> {
    fn from(file: &'a FileRecord) -> Self {
        Self {
            id: &file.id,
            name: &file.name,
            mime_type: &file.mime_type,
            size: file.size,
            student_email: &file.student_email,
            uploaded_at: file.uploaded_at,
        }
    }
}

fn guess_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        Some("txt") => "text/plain",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}

pub fn execute(
    args: FileArgs,
    system: &mut TutoringSystem<SqliteSlotStorage>,
    ctx: &RequestContext,
) -> CliResult {
    match args.command {
        FileCommand::Upload {
            student,
            path,
            mime,
        } => {
            let bytes = std::fs::read(&path)?;
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| format!("Not a file path: {}", path.display()))?;
            let mime = mime.unwrap_or_else(|| guess_mime(&path).to_string());

            let id = system.create_file(NewFile::from_bytes(student, name, mime, &bytes), ctx)?;
            println!("{}", id);
            Ok(())
        }
        FileCommand::Export { id, out } => {
            let file = system
                .get_file(&id)
                .ok_or_else(|| format!("No file with id {}", id))?;
            let bytes = file.decode_content()?;
            std::fs::write(&out, &bytes)?;
            println!("Wrote {} bytes to {}", bytes.len(), out.display());
            Ok(())
        }
        FileCommand::List { student } => {
            let files = match student {
                Some(email) => system.get_files_by_student(&email),
                None => system.list_files(),
            };
            let views: Vec<FileView> = files.iter().map(FileView::from).collect();
            print_json(&views)
        }
        FileCommand::Delete { id } => {
            system.delete_file(&id, ctx)?;
            println!("Deleted file {}", id);
            Ok(())
        }
    }
}
