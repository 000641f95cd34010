use crate::app::search::NgramWalk;
use crate::app::state::App;
use crate::config::Config;
use crate::error::AppError;
use crate::terms::{Catalog, load_terms_file};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "fruit-suggest", version)]
#[command(about = "Suggests fruit names ranked by substring relevance", long_about = None)]
pub struct Cli {
    /// Config file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON array of terms to suggest instead of the built-in fruit list
    #[arg(long, global = true)]
    pub terms: Option<PathBuf>,

    /// Show every match instead of the top few
    #[arg(long, global = true)]
    pub extended: bool,

    /// Annotate suggestions with their relative relevance
    #[arg(long, global = true)]
    pub relevance: bool,

    /// Number of suggestions outside extended mode
    #[arg(long, global = true)]
    pub limit: Option<usize>,

    /// How strings are cut into n-grams
    #[arg(long, global = true, value_enum)]
    pub walk: Option<NgramWalk>,

    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rank once and print the suggestions
    Query {
        text: String,

        /// Print JSON instead of one label per line
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Loads the config file and layers the command line flags over it.
    pub fn resolve_config(&self) -> Result<Config, AppError> {
        let mut config = Config::load(self.config.as_deref())?;
        if self.terms.is_some() {
            config.terms_file = self.terms.clone();
        }
        if self.extended {
            config.extended = true;
        }
        if self.relevance {
            config.show_relevance = true;
        }
        if let Some(limit) = self.limit {
            config.default_limit = limit;
        }
        if let Some(walk) = self.walk {
            config.ngram_walk = walk;
        }
        if self.log_file.is_some() {
            config.log_file = self.log_file.clone();
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

pub fn load_catalog(config: &Config) -> Result<Catalog, AppError> {
    match &config.terms_file {
        Some(path) => Ok(load_terms_file(path)?),
        None => Ok(Catalog::builtin()),
    }
}

/// Runs one search through the adapter and writes the suggestions to `out`.
pub fn run_query<W: Write>(app: &mut App, text: &str, json: bool, out: &mut W) -> Result<(), AppError> {
    app.set_input(text);
    app.recompute_filter();

    if json {
        serde_json::to_writer_pretty(&mut *out, &app.search.suggestions)?;
        writeln!(out)?;
    } else {
        for s in &app.search.suggestions {
            writeln!(out, "{}", s.label)?;
        }
    }
    Ok(())
}
