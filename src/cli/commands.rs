use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "atl", about = concat!("[*] atelier v", env!("CARGO_PKG_VERSION"), " - your dashboard is plain text"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task
    Add(AddArgs),
    /// Flip a task between pending and completed
    #[command(alias = "done")]
    Toggle(ToggleArgs),
    /// Remove a task
    Rm(RmArgs),
    /// List tasks
    List(ListArgs),
    /// Show task totals
    Stats,
    /// List portfolio entries for a category
    Portfolio(PortfolioArgs),
    /// List skill tags
    Skills,
    /// List service cards
    Services(ServicesArgs),
    /// Search tasks and portfolio by regex
    Search(SearchArgs),
    /// Show or change the theme preference
    Theme(ThemeArgs),
    /// Show the visit counter
    Visits(VisitsArgs),
}

// ---------------------------------------------------------------------------
// Write command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Task text (1-100 characters after trimming)
    pub text: String,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Task id
    pub id: u64,
}

#[derive(Args)]
pub struct RmArgs {
    /// Task id (removing an unknown id is a no-op)
    pub id: u64,
}

// ---------------------------------------------------------------------------
// Read command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Only completed tasks
    #[arg(long, conflicts_with = "pending")]
    pub completed: bool,
    /// Only pending tasks
    #[arg(long)]
    pub pending: bool,
}

#[derive(Args)]
pub struct PortfolioArgs {
    /// Category to show (web, mobile, design, or all; default from config)
    pub category: Option<String>,
}

#[derive(Args)]
pub struct ServicesArgs {
    /// Category to show (default: all)
    pub category: Option<String>,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Regex pattern
    pub pattern: String,
}

#[derive(Args)]
pub struct ThemeArgs {
    /// `light`, `dark`, or `toggle`; omit to show the current theme
    pub action: Option<String>,
}

#[derive(Args)]
pub struct VisitsArgs {
    /// Count this invocation as a visit
    #[arg(long)]
    pub record: bool,
}
