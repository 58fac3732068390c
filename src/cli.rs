use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "scholar-site")]
#[command(about = "Unified CLI for syncing, querying, and rendering Scholar publication data for a static site")]
#[command(version = "1.2.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the scholar document from an upstream URL and write data/scholar.json
    Sync(SyncArgs),

    /// Filter, sort, and print publications from the scholar document
    List(ListArgs),

    /// Render the publication list (or featured slice) as an HTML fragment
    Render(RenderArgs),

    /// Assemble static pages: inject partials, highlight nav, stamp year and data mounts
    Build(BuildArgs),

    /// Print citation metrics, optionally replaying the counter animation
    Metrics(MetricsArgs),
}

#[derive(Parser, Clone)]
pub struct SyncArgs {
    /// Upstream URL serving the scholar JSON document
    #[arg(short, long, required = true)]
    pub url: String,

    /// Output path for the synced document
    #[arg(short, long, default_value = "data/scholar.json")]
    pub output: String,

    /// Timeout in seconds for the upstream request
    #[arg(short, long, default_value = "10")]
    pub timeout: u64,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}

#[derive(Parser, Clone)]
pub struct ListArgs {
    /// Scholar document: local path or http(s) URL
    #[arg(short, long, default_value = "data/scholar.json")]
    pub data: String,

    /// Free-text query (case-insensitive substring over title/authors/venue/type)
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Exact-match year filter
    #[arg(short, long)]
    pub year: Option<String>,

    /// Exact-match category (publication type) filter
    #[arg(short, long)]
    pub category: Option<String>,

    /// Sort key: year, citations, or title (anything else keeps source order)
    #[arg(short, long, default_value = "")]
    pub sort: String,

    /// Print the filtered publications as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Print the distinct-years option list instead of publications
    #[arg(long)]
    pub years: bool,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}

#[derive(Parser, Clone)]
pub struct RenderArgs {
    /// Scholar document: local path or http(s) URL
    #[arg(short, long, default_value = "data/scholar.json")]
    pub data: String,

    /// Output file ("-" writes the fragment to stdout)
    #[arg(short, long, default_value = "-")]
    pub output: String,

    /// Free-text query (case-insensitive substring over title/authors/venue/type)
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Exact-match year filter
    #[arg(short, long)]
    pub year: Option<String>,

    /// Exact-match category (publication type) filter
    #[arg(short, long)]
    pub category: Option<String>,

    /// Sort key: year, citations, or title (anything else keeps source order)
    #[arg(short, long, default_value = "")]
    pub sort: String,

    /// Render the featured variant: top N publications by year
    #[arg(short, long)]
    pub featured: Option<usize>,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}

#[derive(Parser, Clone)]
pub struct BuildArgs {
    /// Directory holding the source pages (top-level *.html)
    #[arg(short, long, default_value = "site")]
    pub site: String,

    /// Directory holding header.html / footer.html partials
    #[arg(short, long, default_value = "site/partials")]
    pub partials: String,

    /// Scholar document: local path or http(s) URL
    #[arg(short, long, default_value = "data/scholar.json")]
    pub data: String,

    /// Output directory for assembled pages
    #[arg(short, long, default_value = "dist")]
    pub output: String,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}

#[derive(Parser, Clone)]
pub struct MetricsArgs {
    /// Scholar document: local path or http(s) URL
    #[arg(short, long, default_value = "data/scholar.json")]
    pub data: String,

    /// Replay the counter animation in the terminal instead of printing once
    #[arg(short, long)]
    pub animate: bool,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}
