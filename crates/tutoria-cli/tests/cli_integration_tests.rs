//! CLI integration tests
//!
//! Each test runs the built `tutoria` binary against a database in its own
//! temp dir.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const MARIA: &str = "maria.gonzalez@live.uleam.edu.ec";
const CARLOS_R: &str = "carlos.rodriguez@uleam.edu.ec";

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tutoria"))
        .current_dir(dir)
        .env_remove("TUTORIA_DB")
        .env_remove("TUTORIA_LOG_FORMAT")
        .env("RUST_LOG", "off")
        .arg("--db")
        .arg(dir.join("store.db"))
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_init_seeds_database() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &["init"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("13 users"));
    assert!(temp_dir.path().join("store.db").exists());

    let stats = json(&run(temp_dir.path(), &["stats"]));
    assert_eq!(stats["total_users"], 13);
    assert_eq!(stats["unread_notifications"], 2);
}

#[test]
fn test_user_listing_hides_credentials() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &["user", "list", "--role", "tutor"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let users = json(&output);
    assert_eq!(users.as_array().unwrap().len(), 4);
    let text = stdout(&output);
    assert!(!text.contains("tutor123"));
    assert!(!text.contains("security_answer"));
}

#[test]
fn test_register_and_login() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    let output = run(
        dir,
        &[
            "user",
            "register",
            "--email",
            "lucia.vera@live.uleam.edu.ec",
            "--given-names",
            "Lucía",
            "--surnames",
            "Vera",
            "--password",
            "clave123",
            "--question",
            "mascota",
            "--answer",
            "luna",
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let user = json(&run(dir, &["user", "show", "lucia.vera@live.uleam.edu.ec"]));
    assert_eq!(user["role"], "estudiante");

    let ok = run(
        dir,
        &["user", "login", "--email", "lucia.vera@live.uleam.edu.ec", "--password", "clave123"],
    );
    assert!(ok.status.success());

    let bad = run(
        dir,
        &["user", "login", "--email", "lucia.vera@live.uleam.edu.ec", "--password", "x"],
    );
    assert_eq!(bad.status.code(), Some(1));
    assert!(stderr(&bad).starts_with("Error:"));
}

#[test]
fn test_register_duplicate_email_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(
        temp_dir.path(),
        &[
            "user",
            "register",
            "--email",
            MARIA,
            "--given-names",
            "María",
            "--surnames",
            "González",
            "--password",
            "otra",
            "--question",
            "q",
            "--answer",
            "a",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("ERR_ALREADY_EXISTS"));
}

#[test]
fn test_classify_email() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    let output = run(dir, &["user", "classify", "ana.martinez@coordtit.uleam.edu.ec"]);
    assert_eq!(stdout(&output), "coordinador");

    let output = run(dir, &["user", "classify", "someone@gmail.com"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_session_lifecycle_through_cli() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    let output = run(
        dir,
        &[
            "session", "request", "--student", MARIA, "--tutor", CARLOS_R, "--date",
            "2024-04-02", "--time", "15:00", "--subject", "Revisión Final",
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let id = stdout(&output);

    let reject = run(dir, &["session", "reject", &id, "--reason", "   "]);
    assert_eq!(reject.status.code(), Some(1));
    assert!(stderr(&reject).contains("ERR_MISSING_FIELD"));

    assert!(run(dir, &["session", "accept", &id]).status.success());
    assert!(run(dir, &["session", "complete", &id, "--grade", "Excelente"])
        .status
        .success());

    let sessions = json(&run(
        dir,
        &["session", "list", "--student", MARIA, "--status", "completada"],
    ));
    assert!(sessions
        .as_array()
        .unwrap()
        .iter()
        .any(|s| s["id"] == id.as_str() && s["grade"] == "Excelente"));
}

#[test]
fn test_upload_and_export_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    let source = dir.join("avance.txt");
    std::fs::write(&source, "Capítulo 2 terminado").unwrap();

    let output = run(
        dir,
        &["file", "upload", "--student", MARIA, source.to_str().unwrap()],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let id = stdout(&output);

    let out = dir.join("copia.txt");
    let export = run(dir, &["file", "export", &id, "--out", out.to_str().unwrap()]);
    assert!(export.status.success(), "stderr: {}", stderr(&export));
    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "Capítulo 2 terminado"
    );

    let inbox = json(&run(dir, &["notify", "list", "--email", CARLOS_R, "--unread"]));
    assert!(inbox
        .as_array()
        .unwrap()
        .iter()
        .any(|n| n["payload"]["kind"] == "ARCHIVO_SUBIDO"));
}

#[test]
fn test_topic_reject_requires_observations() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    let topics = json(&run(dir, &["topic", "list"]));
    let id = topics[1]["id"].as_str().unwrap().to_string();

    let output = run(dir, &["topic", "review", &id, "--reject"]);
    assert_eq!(output.status.code(), Some(1));

    let output = run(
        dir,
        &["topic", "review", &id, "--reject", "--observations", "Ampliar la muestra"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let shown = json(&run(
        dir,
        &["topic", "show", "--student", "juan.perez@live.uleam.edu.ec"],
    ));
    assert_eq!(shown["review_state"], "rejected");
}

#[test]
fn test_seed_only_writes_when_forced() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    // startup already seeded the empty database
    assert_eq!(
        stdout(&run(dir, &["seed"])),
        "13 users present; nothing seeded (use --force to recreate)"
    );

    let output = run(dir, &["seed", "--force"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Default data recreated");
}

#[test]
fn test_seed_help_explains_startup_seeding() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["seed", "--help"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Every start already seeds an empty database"));
}

#[test]
fn test_reset_is_reseeded_on_next_start() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    assert!(run(dir, &["user", "delete", MARIA]).status.success());
    let output = run(dir, &["reset"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let stats = json(&run(dir, &["stats"]));
    assert_eq!(stats["total_users"], 13);
    assert!(run(dir, &["user", "show", MARIA]).status.success());
}

#[test]
fn test_invalid_log_format_is_a_config_error() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &["--log-format", "xml", "stats"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--log-format"));
}
