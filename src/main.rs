use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use colored::Colorize;

use okra::cli::{Cli, Commands, SortKey};
use okra::config::OkraConfig;
use okra::model::{Priority, Task};
use okra::tracker::Tracker;

fn main() -> Result<()> {
    let cli = Cli::parse();
    okra::logging::init(cli.verbose, cli.log_file.clone());

    let data_path = resolve_data_path(cli.file)?;
    let mut tracker = Tracker::open(&data_path);
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Add {
            text,
            due,
            priority,
            yes,
        } => {
            let deadline = due.map(|d| parse_date(&d)).transpose()?;

            if let Some(d) = deadline {
                if d < today && !yes && !confirm("The deadline is in the past. Continue?")? {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            let task = tracker.add(&text, deadline, priority.into())?;
            println!("{} #{} {}", "Added".green(), task.id, task.text);
            Ok(())
        }
        Commands::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(tracker.tasks())?);
            } else {
                print_task_list(tracker.tasks(), today);
            }
            Ok(())
        }
        Commands::Done { id } => {
            tracker.set_completed(id, true)?;
            println!("{} #{}", "Completed".green(), id);
            Ok(())
        }
        Commands::Undone { id } => {
            tracker.set_completed(id, false)?;
            println!("{} #{}", "Reopened".yellow(), id);
            Ok(())
        }
        Commands::Edit { id, text } => {
            tracker.edit_text(id, &text)?;
            println!("{} #{}", "Updated".green(), id);
            Ok(())
        }
        Commands::Delete { id, force } => {
            if !force && !confirm(&format!("Delete task #{} permanently?", id))? {
                println!("Cancelled.");
                return Ok(());
            }

            let task = tracker.remove(id)?;
            println!("{} #{} {}", "Deleted".red(), id, task.text);
            Ok(())
        }
        Commands::Clear => {
            let removed = tracker.clear_completed();
            if removed == 0 {
                println!("No completed tasks to clear.");
            } else {
                println!("{} {} completed task(s)", "Cleared".green(), removed);
            }
            Ok(())
        }
        Commands::Sort { by, json } => {
            match by {
                SortKey::Deadline => tracker.sort_by_deadline(),
                SortKey::Priority => tracker.sort_by_priority(),
            }

            if json {
                println!("{}", serde_json::to_string_pretty(tracker.tasks())?);
            } else {
                print_task_list(tracker.tasks(), today);
            }
            Ok(())
        }
    }
}

fn resolve_data_path(override_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path);
    }
    let cwd = std::env::current_dir()?;
    let config = OkraConfig::load(&cwd).context("Failed to load okra configuration")?;
    Ok(config.data_path(&cwd))
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

fn print_task_list(tasks: &[Task], today: NaiveDate) {
    if tasks.is_empty() {
        println!("No tasks.");
        return;
    }

    for task in tasks {
        let check = if task.completed { "[x]" } else { "[ ]" };
        let text = if task.completed {
            task.text.strikethrough().dimmed()
        } else {
            task.text.normal()
        };
        println!(
            "{:>4} {} {} {} {}",
            format!("#{}", task.id).cyan(),
            check,
            text,
            format_priority(task.priority),
            format_deadline(task, today),
        );
    }
}

fn format_priority(priority: Priority) -> colored::ColoredString {
    match priority {
        Priority::High => "High".red(),
        Priority::Medium => "Medium".yellow(),
        Priority::Low => "Low".green(),
    }
}

fn format_deadline(task: &Task, today: NaiveDate) -> colored::ColoredString {
    match task.deadline {
        Some(d) if task.is_overdue(today) => d.to_string().red().bold(),
        Some(d) => d.to_string().normal(),
        None => "no deadline".dimmed(),
    }
}
