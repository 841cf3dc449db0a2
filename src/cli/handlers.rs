use std::path::PathBuf;

use regex::Regex;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::kv::FileStore;
use crate::model::config::Config;
use crate::ops::portfolio::PortfolioView;
use crate::ops::prefs::{self, Theme};
use crate::ops::search;
use crate::ops::todo_store::{LoadOutcome, TodoStore};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let data_dir = resolve_data_dir(cli.data_dir.as_deref());
    let config = config_io::load_config(&data_dir)?;
    let store = FileStore::open(&data_dir);

    match cli.command {
        // Write commands
        Commands::Add(args) => cmd_add(args, store, &config, json),
        Commands::Toggle(args) => cmd_toggle(args, store, &config, json),
        Commands::Rm(args) => cmd_rm(args, store),

        // Read commands
        Commands::List(args) => cmd_list(args, store, &config, json),
        Commands::Stats => cmd_stats(store, json),
        Commands::Portfolio(args) => cmd_portfolio(args, &config, json),
        Commands::Skills => cmd_skills(json),
        Commands::Services(args) => cmd_services(args, json),
        Commands::Search(args) => cmd_search(args, store, json),

        // Preferences
        Commands::Theme(args) => cmd_theme(args, store, json),
        Commands::Visits(args) => cmd_visits(args, store, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Data directory precedence: -C flag, then ATELIER_DATA_DIR, then
/// XDG_DATA_HOME/atelier, then ~/.local/share/atelier.
fn resolve_data_dir(flag: Option<&str>) -> PathBuf {
    if let Some(dir) = flag {
        return PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var("ATELIER_DATA_DIR") {
        return PathBuf::from(dir);
    }
    let data_home = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".local").join("share"));
    data_home.join("atelier")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Load the todo store, warning on stderr if the persisted blob was garbage.
fn load_todos(store: FileStore) -> TodoStore<FileStore> {
    let (todos, outcome) = TodoStore::load(store);
    if outcome == LoadOutcome::Corrupt {
        eprintln!("warning: stored todo list was unreadable, starting empty");
    }
    todos
}

// ---------------------------------------------------------------------------
// Todo commands
// ---------------------------------------------------------------------------

fn cmd_add(
    args: AddArgs,
    store: FileStore,
    config: &Config,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut todos = load_todos(store);
    let record = todos.add(&args.text)?;
    if json {
        let out = todo_to_json(record, &config.display.date_format);
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", record.id);
    }
    Ok(())
}

fn cmd_toggle(
    args: ToggleArgs,
    store: FileStore,
    config: &Config,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut todos = load_todos(store);
    let record = todos.toggle(args.id)?;
    if json {
        let out = todo_to_json(record, &config.display.date_format);
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", format_todo_line(record, &config.display.date_format));
    }
    Ok(())
}

fn cmd_rm(args: RmArgs, store: FileStore) -> Result<(), Box<dyn std::error::Error>> {
    let mut todos = load_todos(store);
    todos.remove(args.id)?;
    Ok(())
}

fn cmd_list(
    args: ListArgs,
    store: FileStore,
    config: &Config,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let todos = load_todos(store);
    let records: Vec<_> = todos
        .records()
        .iter()
        .filter(|r| {
            if args.completed {
                r.completed
            } else if args.pending {
                !r.completed
            } else {
                true
            }
        })
        .collect();

    if json {
        let out: Vec<TodoJson> = records
            .iter()
            .map(|r| todo_to_json(r, &config.display.date_format))
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for record in records {
            println!("{}", format_todo_line(record, &config.display.date_format));
        }
    }
    Ok(())
}

fn cmd_stats(store: FileStore, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let todos = load_todos(store);
    let stats = todos.stats();
    if json {
        println!("{}", serde_json::to_string_pretty(&stats_to_json(stats))?);
    } else {
        println!("{}", format_stats(stats));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Catalog commands
// ---------------------------------------------------------------------------

fn cmd_portfolio(
    args: PortfolioArgs,
    config: &Config,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = args
        .category
        .as_deref()
        .unwrap_or(&config.portfolio.default_filter);
    let view = PortfolioView::with_filter(filter);
    let entries = view.visible_items();

    if json {
        let out = PortfolioListJson {
            filter: view.current_filter().to_string(),
            entries,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if entries.is_empty() {
        println!("no entries for '{}'", view.current_filter());
    } else {
        for entry in entries {
            for line in format_portfolio_entry(entry) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn cmd_skills(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    use crate::model::catalog::SKILLS;
    if json {
        println!("{}", serde_json::to_string_pretty(&SKILLS)?);
    } else {
        for skill in SKILLS {
            println!("{}", skill);
        }
    }
    Ok(())
}

fn cmd_services(args: ServicesArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    use crate::model::catalog::SERVICES;
    let services: Vec<_> = SERVICES
        .iter()
        .filter(|s| match args.category.as_deref() {
            None | Some("all") => true,
            Some(cat) => s.category.name() == cat,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&services)?);
    } else {
        for service in services {
            for line in format_service(service) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn cmd_search(
    args: SearchArgs,
    store: FileStore,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let re = Regex::new(&args.pattern).map_err(|e| format!("invalid pattern: {}", e))?;
    let todos = load_todos(store);
    let todo_hits = search::search_todos(&re, todos.records());
    let portfolio_hits = search::search_portfolio(&re);

    if json {
        let out = SearchResultsJson {
            todos: todo_hits.iter().map(todo_hit_to_json).collect(),
            portfolio: portfolio_hits.iter().map(portfolio_hit_to_json).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for hit in &todo_hits {
            println!("todo {}: {}", hit.record.id, hit.record.text);
        }
        for hit in &portfolio_hits {
            println!(
                "portfolio {} ({}): {}",
                hit.entry.id,
                hit.field.name(),
                hit.entry.title
            );
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Preference commands
// ---------------------------------------------------------------------------

fn cmd_theme(
    args: ThemeArgs,
    mut store: FileStore,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let theme = match args.action.as_deref() {
        None => prefs::theme(&store),
        Some("toggle") => prefs::toggle_theme(&mut store)?,
        Some(name) => {
            let theme = Theme::parse(name)
                .ok_or_else(|| format!("unknown theme '{}' (expected light, dark, or toggle)", name))?;
            prefs::set_theme(&mut store, theme)?;
            theme
        }
    };

    if json {
        let out = ThemeJson {
            theme: theme.name().to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", theme.name());
    }
    Ok(())
}

fn cmd_visits(
    args: VisitsArgs,
    mut store: FileStore,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let count = if args.record {
        prefs::record_visit(&mut store)?
    } else {
        prefs::visits(&store)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&VisitsJson { visits: count })?);
    } else {
        println!("{}", count);
    }
    Ok(())
}
