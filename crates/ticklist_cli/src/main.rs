//! Plain-text presentation layer for the ticklist core.
//!
//! # Responsibility
//! - Translate one command invocation into store calls.
//! - Re-render from `list()`/`count()` after each call.
//! - Relay store errors to stderr; never crash on them.

use std::env;
use std::process::ExitCode;
use ticklist_core::{ErrorReporter, SqliteKvStore, StoreError, TodoId, TodoItem, TodoStore};

const DB_ENV_VAR: &str = "TICKLIST_DB";
const LOG_DIR_ENV_VAR: &str = "TICKLIST_LOG_DIR";
const DEFAULT_DB_FILE: &str = "ticklist.db";

/// Prints failure messages where a terminal user sees them.
struct StderrReporter;

impl ErrorReporter for StderrReporter {
    fn report(&self, message: &str) {
        eprintln!("ticklist: {message}");
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    if let Ok(log_dir) = env::var(LOG_DIR_ENV_VAR) {
        if let Err(err) = ticklist_core::init_logging(ticklist_core::default_log_level(), &log_dir)
        {
            eprintln!("ticklist: {err}");
        }
    }

    let db_path = env::var(DB_ENV_VAR).unwrap_or_else(|_| DEFAULT_DB_FILE.to_string());
    let kv = match SqliteKvStore::open(&db_path) {
        Ok(kv) => kv,
        Err(err) => {
            eprintln!("ticklist: cannot open `{db_path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    let reporter = StderrReporter;
    let mut store = TodoStore::new(kv, StderrReporter);
    if let Err(err) = store.load() {
        // Unreadable state is reported once; the session continues empty.
        reporter.report(&format!("failed to load saved todos: {err}"));
    }

    match run(&mut store, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            reporter.report(&message);
            ExitCode::FAILURE
        }
    }
}

fn run(
    store: &mut TodoStore<SqliteKvStore, StderrReporter>,
    args: &[String],
) -> Result<(), String> {
    match args.first().map(String::as_str) {
        Some("add") => {
            let text = args[1..].join(" ");
            let item = store.add(&text).map_err(describe)?;
            println!("added #{}: {}", item.id, item.text);
            render(store.list());
        }
        Some("toggle") => {
            let id = parse_id(args.get(1))?;
            let item = store.toggle(id).map_err(describe)?;
            let state = if item.completed { "done" } else { "open" };
            println!("#{} is now {state}", item.id);
            render(store.list());
        }
        Some("rm") => {
            let id = parse_id(args.get(1))?;
            store.delete(id).map_err(describe)?;
            println!("removed #{id}");
            render(store.list());
        }
        Some("list") => render(store.list()),
        Some("count") => println!("{}", store.count()),
        _ => print_usage(),
    }
    Ok(())
}

fn describe(err: StoreError) -> String {
    err.to_string()
}

fn parse_id(arg: Option<&String>) -> Result<TodoId, String> {
    arg.and_then(|raw| raw.parse::<TodoId>().ok())
        .ok_or_else(|| "expected a numeric todo id".to_string())
}

fn render(items: &[TodoItem]) {
    for item in items {
        let mark = if item.completed { "x" } else { " " };
        println!("[{mark}] #{} {}", item.id, item.text);
    }
}

fn print_usage() {
    println!("ticklist {}", ticklist_core::core_version());
    println!("usage: ticklist <add TEXT | list | toggle ID | rm ID | count>");
    println!("  database file: ${DB_ENV_VAR} (default ./{DEFAULT_DB_FILE})");
}
