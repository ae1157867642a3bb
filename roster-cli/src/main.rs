use anyhow::Result;
use colored::Colorize;
use roster_core::{PersistentRoster, RosterConfig, StudentRecord};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::Path;
use tracing::{debug, error, info};

const CONFIG_PATH: &str = "roster.yaml";

fn main() -> Result<()> {
    let config = load_config();

    // Initialize tracing subscriber for CLI output
    // Use the configured level by default to show user-facing messages
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logging.level.clone());
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    let roster = PersistentRoster::open(&config.storage);
    run_interactive(roster)
}

fn load_config() -> RosterConfig {
    if Path::new(CONFIG_PATH).exists() {
        match RosterConfig::from_file(CONFIG_PATH) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Ignoring unreadable {}: {}", CONFIG_PATH, e);
                RosterConfig::default()
            }
        }
    } else {
        RosterConfig::default()
    }
}

fn run_interactive(mut roster: PersistentRoster) -> Result<()> {
    info!(
        "{}",
        format!("Student Roster v{}", env!("CARGO_PKG_VERSION"))
            .bold()
            .cyan()
    );
    info!("{} student record(s) on file\n", roster.len());

    let mut rl = DefaultEditor::new()?;

    loop {
        info!("{}", "Student Roster".bold());
        info!("  1. Add student");
        info!("  2. Remove student");
        info!("  3. Search student");
        info!("  4. Display all students");
        info!("  5. Exit");

        let prompt = format!("{} ", "Choose an option:".green());
        let choice = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                info!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                error!(error = ?err, "Readline error: {:?}", err);
                break;
            }
        };

        match choice.trim() {
            "" => continue,
            "1" => add_student(&mut rl, &mut roster)?,
            "2" => remove_student(&mut rl, &mut roster)?,
            "3" => search_student(&mut rl, &mut roster)?,
            "4" => display_all(&roster),
            "5" => break,
            other => {
                info!(
                    "{}",
                    format!("Invalid option: {}. Please try again.", other).yellow()
                );
            }
        }
        info!("");
    }

    let stats = roster.stats();
    debug!(
        "session stats: adds={} removes={} searches={} hit_rate={:.2}%",
        stats.adds,
        stats.removes,
        stats.searches,
        stats.hit_rate() * 100.0
    );
    info!("Goodbye!");

    Ok(())
}

fn add_student(rl: &mut DefaultEditor, roster: &mut PersistentRoster) -> Result<()> {
    let name = prompt_field(rl, "Enter name: ")?;
    let id = prompt_field(rl, "Enter student id: ")?;
    let grade = prompt_field(rl, "Enter grade: ")?;
    let age = prompt_age(rl)?;
    let address = prompt_field(rl, "Enter address: ")?;

    roster.add(StudentRecord {
        name,
        id,
        grade,
        age,
        address,
    });
    info!("{}", "Student added successfully!".green());

    Ok(())
}

fn remove_student(rl: &mut DefaultEditor, roster: &mut PersistentRoster) -> Result<()> {
    let id = prompt_field(rl, "Enter the student id to remove: ")?;

    let removed = roster.remove(&id);
    if removed == 0 {
        info!("No student with id {} found.", id);
    } else {
        info!("Removed {} record(s) with id {}.", removed, id);
    }

    Ok(())
}

fn search_student(rl: &mut DefaultEditor, roster: &mut PersistentRoster) -> Result<()> {
    let id = prompt_field(rl, "Enter student id to search: ")?;

    match roster.search(&id) {
        Some(student) => info!("{}", student),
        None => info!("Student not found."),
    }

    Ok(())
}

fn display_all(roster: &PersistentRoster) {
    if roster.is_empty() {
        info!("No students found.");
    } else {
        for student in roster.records() {
            info!("{}", student);
        }
    }
}

fn prompt_field(rl: &mut DefaultEditor, label: &str) -> Result<String> {
    let line = rl.readline(label)?;
    let value = line.trim().to_string();
    if !value.is_empty() {
        rl.add_history_entry(&value)?;
    }
    Ok(value)
}

fn prompt_age(rl: &mut DefaultEditor) -> Result<u32> {
    loop {
        let raw = prompt_field(rl, "Enter age: ")?;
        match raw.parse::<u32>() {
            Ok(age) => return Ok(age),
            Err(_) => {
                info!(
                    "{}",
                    format!("'{}' is not a valid age, enter a whole number.", raw).yellow()
                );
            }
        }
    }
}
