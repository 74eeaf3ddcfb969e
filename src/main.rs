//! # Course Search CLI (`course-search`)
//!
//! Serves the course search API and exposes the same search, career, and
//! program lookups from the command line.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `course-search serve` | Start the HTTP server |
//! | `course-search search "<query>"` | Search the catalogs |
//! | `course-search campuses` | List campuses and course counts |
//! | `course-search career codes "<career>"` | CIP codes for a career |
//! | `course-search career keywords "<career>"` | Search keywords for a career |
//! | `course-search career check "<career>"` | Whether a career is mapped |
//! | `course-search career list` | Print the full career table |
//! | `course-search prefixes "<program>"` | Course prefixes for a program |
//!
//! ## Examples
//!
//! ```bash
//! course-search serve --config ./config/course-search.toml
//! course-search search data --campus "Leeward Community College" --limit 5
//! course-search career codes "Web Developer"
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use course_search::{campuses, config, logging, lookups, search, server};

/// Course Search CLI — a course-search API over static institution catalogs.
#[derive(Parser)]
#[command(
    name = "course-search",
    about = "Course Search — search institution course catalogs and map careers to programs",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/course-search.toml`. Server and catalog
    /// settings are read from this file.
    #[arg(long, global = true, default_value = "./config/course-search.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server.
    ///
    /// Loads every configured catalog and binds to `[server].bind`.
    Serve,

    /// Search the course catalogs.
    ///
    /// Uses the same matching rules as `GET /api/programs-courses`.
    Search {
        /// Primary search term.
        query: Option<String>,

        /// Campus display name to restrict results to (repeatable, comma-separated).
        #[arg(long)]
        campus: Vec<String>,

        /// Extra search keyword (repeatable, comma-separated).
        #[arg(long)]
        keyword: Vec<String>,

        /// Maximum number of results (default 20, max 200).
        #[arg(long)]
        limit: Option<String>,
    },

    /// List configured campuses and how many courses each contributes.
    Campuses,

    /// Look up careers in the career-to-CIP table.
    Career {
        #[command(subcommand)]
        action: CareerAction,
    },

    /// Print the course prefixes for a lowercase program name.
    Prefixes {
        /// Program name, e.g. `computer science`.
        program: String,
    },
}

/// Career lookup subcommands.
#[derive(Subcommand)]
enum CareerAction {
    /// Print CIP codes for a career (exact title first, then any shared word).
    Codes { career: String },
    /// Print the career's words followed by related search keywords.
    Keywords { career: String },
    /// Print whether the career maps to any CIP code.
    Check { career: String },
    /// Print the whole career table.
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    // Commands that don't require config
    match &cli.command {
        Commands::Career { action } => {
            match action {
                CareerAction::Codes { career } => lookups::print_codes(career),
                CareerAction::Keywords { career } => lookups::print_keywords(career),
                CareerAction::Check { career } => lookups::print_check(career),
                CareerAction::List => lookups::print_mappings(),
            }
            return Ok(());
        }
        Commands::Prefixes { program } => {
            lookups::print_prefixes(program);
            return Ok(());
        }
        _ => {}
    }

    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Serve => {
            server::run_server(&cfg).await?;
        }
        Commands::Search {
            query,
            campus,
            keyword,
            limit,
        } => {
            search::run_search(&cfg, query, campus, keyword, limit)?;
        }
        Commands::Campuses => {
            campuses::list_campuses(&cfg);
        }
        Commands::Career { .. } | Commands::Prefixes { .. } => {
            // Handled above (before config loading)
            unreachable!()
        }
    }

    Ok(())
}
