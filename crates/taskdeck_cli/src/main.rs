//! CLI presentation layer over `taskdeck_core`.
//!
//! # Responsibility
//! - Map subcommands onto the core session contract (list/add/edit/remove
//!   plus filter and sort selections).
//! - Collect and pre-validate form input before handing it to the store.
//! - Render the visible task view and any transient notice.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use taskdeck_core::db::open_db;
use taskdeck_core::{
    available_priorities, AssigneeFilter, Priority, PriorityFilter, Session, SortColumn,
    SortDirection, SortSpec, SqliteCollectionStore, TaskDraft, TaskId,
};
use uuid::Uuid;

const DATA_DIR_ENV: &str = "TASKDECK_DATA_DIR";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let Some(command) = args.next() else {
        print_usage();
        return Ok(());
    };
    if command == "help" || command == "--help" {
        print_usage();
        return Ok(());
    }
    let rest: Vec<String> = args.collect();

    let data_dir = resolve_data_dir()?;
    std::fs::create_dir_all(&data_dir)
        .map_err(|err| format!("cannot create data directory `{}`: {err}", data_dir.display()))?;

    let log_dir = data_dir.join("logs");
    if let Some(log_dir) = log_dir.to_str() {
        if let Err(message) =
            taskdeck_core::init_logging(taskdeck_core::default_log_level(), log_dir)
        {
            eprintln!("warning: logging disabled: {message}");
        }
    }

    let conn = open_db(data_dir.join("taskdeck.db3")).map_err(|err| err.to_string())?;
    let mut session = Session::open(SqliteCollectionStore::new(&conn));
    print_notice(&mut session);

    match command.as_str() {
        "list" => cmd_list(&mut session, &rest),
        "add" => cmd_add(&mut session, &rest),
        "edit" => cmd_edit(&mut session, &rest),
        "remove" => cmd_remove(&mut session, &rest),
        "filters" => cmd_filters(&session),
        other => Err(format!("unknown command `{other}`; try `taskdeck help`")),
    }
}

fn cmd_list(
    session: &mut Session<SqliteCollectionStore<'_>>,
    args: &[String],
) -> Result<(), String> {
    apply_selections(session, args)?;
    render_table(session);
    Ok(())
}

fn cmd_add(
    session: &mut Session<SqliteCollectionStore<'_>>,
    args: &[String],
) -> Result<(), String> {
    let (positional, flags) = split_args(args)?;
    let description = positional
        .first()
        .ok_or("add requires a task description")?;
    let assignee = flag_value(&flags, "assignee").unwrap_or_default();
    let priority = parse_priority_flag(&flags)?.unwrap_or(Priority::Low);

    let draft = TaskDraft::new(description.clone(), assignee, priority);
    draft.validate().map_err(|err| err.to_string())?;

    let id = session.save_task(draft).ok_or("task could not be saved")?;
    print_notice(session);
    println!("added {id}");
    Ok(())
}

fn cmd_edit(
    session: &mut Session<SqliteCollectionStore<'_>>,
    args: &[String],
) -> Result<(), String> {
    let (positional, flags) = split_args(args)?;
    let id = parse_task_id(positional.first().ok_or("edit requires a task id")?)?;

    let existing = session
        .store()
        .list()
        .iter()
        .find(|task| task.id == id)
        .cloned()
        .ok_or_else(|| format!("no task with id {id}"))?;

    let mut draft = TaskDraft::from(existing);
    if let Some(description) = flag_value(&flags, "task") {
        draft.task = description;
    }
    if let Some(assignee) = flag_value(&flags, "assignee") {
        draft.assignee = assignee;
    }
    if let Some(priority) = parse_priority_flag(&flags)? {
        draft.priority = priority;
    }
    draft.validate().map_err(|err| err.to_string())?;

    session
        .save_task(draft)
        .ok_or_else(|| format!("task {id} disappeared before it could be edited"))?;
    print_notice(session);
    Ok(())
}

fn cmd_remove(
    session: &mut Session<SqliteCollectionStore<'_>>,
    args: &[String],
) -> Result<(), String> {
    let id = parse_task_id(args.first().ok_or("remove requires a task id")?)?;

    if session.delete_task(id) {
        print_notice(session);
        Ok(())
    } else {
        Err(format!("no task with id {id}"))
    }
}

fn cmd_filters(session: &Session<SqliteCollectionStore<'_>>) -> Result<(), String> {
    println!("assignees: {}", session.available_assignees().join(", "));
    println!("priorities: {}", available_priorities().join(", "));
    Ok(())
}

/// Applies `--assignee`, `--priority` and `--sort column:direction` to the
/// session's ephemeral selections.
fn apply_selections(
    session: &mut Session<SqliteCollectionStore<'_>>,
    args: &[String],
) -> Result<(), String> {
    let (_, flags) = split_args(args)?;

    if let Some(assignee) = flag_value(&flags, "assignee") {
        session.set_assignee_filter(AssigneeFilter::parse(&assignee));
    }
    if let Some(priority) = flag_value(&flags, "priority") {
        let parsed = PriorityFilter::parse(&priority)
            .ok_or_else(|| format!("unknown priority `{priority}`; expected All|High|Medium|Low"))?;
        session.set_priority_filter(parsed);
    }
    if let Some(sort) = flag_value(&flags, "sort") {
        session.set_sort(parse_sort_spec(&sort)?);
    }
    Ok(())
}

fn parse_sort_spec(value: &str) -> Result<SortSpec, String> {
    if value == "none" {
        return Ok(SortSpec::default());
    }
    let (column, direction) = value
        .split_once(':')
        .ok_or("sort expects `column:direction`, e.g. `task:asc`")?;
    let column = SortColumn::parse(column)
        .ok_or_else(|| format!("unknown sort column `{column}`; expected task|assignee|priority"))?;
    let direction = SortDirection::parse(direction)
        .ok_or_else(|| format!("unknown sort direction `{direction}`; expected asc|desc"))?;
    Ok(SortSpec::by(column, direction))
}

fn parse_priority_flag(flags: &[(String, String)]) -> Result<Option<Priority>, String> {
    match flag_value(flags, "priority") {
        Some(value) => Priority::parse(&value)
            .map(Some)
            .ok_or_else(|| format!("unknown priority `{value}`; expected High|Medium|Low")),
        None => Ok(None),
    }
}

fn parse_task_id(value: &str) -> Result<TaskId, String> {
    Uuid::parse_str(value).map_err(|_| format!("`{value}` is not a valid task id"))
}

/// Splits argv into positionals and `--name value` flag pairs.
fn split_args(args: &[String]) -> Result<(Vec<String>, Vec<(String, String)>), String> {
    let mut positional = Vec::new();
    let mut flags = Vec::new();
    let mut index = 0;
    while index < args.len() {
        let arg = &args[index];
        if let Some(name) = arg.strip_prefix("--") {
            let value = args
                .get(index + 1)
                .ok_or_else(|| format!("flag `--{name}` expects a value"))?;
            flags.push((name.to_string(), value.clone()));
            index += 2;
        } else {
            positional.push(arg.clone());
            index += 1;
        }
    }
    Ok((positional, flags))
}

fn flag_value(flags: &[(String, String)], name: &str) -> Option<String> {
    flags
        .iter()
        .find(|(flag, _)| flag == name)
        .map(|(_, value)| value.clone())
}

fn render_table(session: &Session<SqliteCollectionStore<'_>>) {
    let visible = session.visible_tasks();
    if visible.is_empty() {
        println!("No tasks available");
        return;
    }

    println!(
        "{:<36}  {:<30}  {:<12}  {}",
        "ID", "TASK", "ASSIGNEE", "PRIORITY"
    );
    for task in visible {
        println!(
            "{:<36}  {:<30}  {:<12}  {}",
            task.id, task.task, task.assignee, task.priority
        );
    }
}

fn print_notice(session: &mut Session<SqliteCollectionStore<'_>>) {
    if let Some(message) = session.store_mut().notifier_mut().current() {
        println!("* {message}");
    }
}

fn resolve_data_dir() -> Result<PathBuf, String> {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let cwd =
        env::current_dir().map_err(|err| format!("cannot resolve working directory: {err}"))?;
    Ok(cwd.join(".taskdeck"))
}

fn print_usage() {
    println!(
        "taskdeck {} - local todo list",
        taskdeck_core::core_version()
    );
    println!();
    println!("usage:");
    println!("  taskdeck list [--assignee NAME] [--priority LEVEL] [--sort column:direction]");
    println!("  taskdeck add DESCRIPTION [--assignee NAME] [--priority LEVEL]");
    println!("  taskdeck edit ID [--task DESCRIPTION] [--assignee NAME] [--priority LEVEL]");
    println!("  taskdeck remove ID");
    println!("  taskdeck filters");
    println!();
    println!("data directory: ./.taskdeck (override with {DATA_DIR_ENV})");
}
