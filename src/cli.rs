use applens_core::loader::{RATING_MAX, RATING_MIN};
use applens_core::model::AppType;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "applens", version)]
#[command(about = "Interactive analytics dashboard over an app-store CSV dataset", long_about = None)]
pub struct Cli {
    /// Cleaned dataset CSV (App, Category, Rating, Installs, Price, Type)
    #[arg(long, env = "APPLENS_DATA", default_value = "cleaned_data.csv", global = true)]
    pub data: PathBuf,

    /// Initial widget state of the dashboard
    #[arg(long, value_enum, default_value_t = PresetArg::Sidebar)]
    pub preset: PresetArg,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Without a command the dashboard window opens
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the summary line and pivot table for a filter
    Report(ReportArgs),
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ReportArgs {
    /// Keep only this category (repeatable; none = all)
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Keep only this type, Free or Paid (repeatable; none = both)
    #[arg(long = "type", value_name = "TYPE")]
    pub types: Vec<AppType>,

    /// Inclusive lower rating bound
    #[arg(long, default_value_t = RATING_MIN)]
    pub min_rating: f64,

    /// Inclusive upper rating bound
    #[arg(long, default_value_t = RATING_MAX)]
    pub max_rating: f64,

    /// Case-insensitive substring of the app name
    #[arg(long, default_value = "")]
    pub search: String,

    /// Emit JSON instead of a text table
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    /// First category, free apps only
    Sidebar,
    /// No filters
    Open,
}

impl From<PresetArg> for applens_gui::Preset {
    fn from(p: PresetArg) -> Self {
        match p {
            PresetArg::Sidebar => applens_gui::Preset::Sidebar,
            PresetArg::Open => applens_gui::Preset::Open,
        }
    }
}
