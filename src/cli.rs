use crate::generate::{DbFlavor, TargetProfile};
use crate::io::output::ReportFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "migratemap",
    about = "Assess .NET applications and generate Python/React migration scaffolding",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inventory a .NET source tree and report migration recommendations
    Assess {
        /// Root of the source tree to assess
        path: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
        format: OutputFormat,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate Python ORM models from Entity Framework classes
    Generate {
        /// Root of the source tree to scan for entity classes
        path: PathBuf,

        /// Target ORM profile
        #[arg(long, value_enum, default_value_t = Profile::Sqlalchemy)]
        profile: Profile,

        /// Database flavor for the migration guide's connection string
        #[arg(long = "db", value_enum, default_value_t = Flavor::Postgresql)]
        db: Flavor,

        /// Directory for the generated files
        #[arg(short, long, default_value = "generated")]
        output: PathBuf,
    },

    /// Convert Razor views into React JSX components
    Convert {
        /// Source tree to scan for .cshtml views, or a single view file
        path: PathBuf,

        /// Directory for the converted components
        #[arg(short, long, default_value = "converted")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Markdown => ReportFormat::Markdown,
            OutputFormat::Terminal => ReportFormat::Terminal,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum Profile {
    Sqlalchemy,
    Django,
}

impl From<Profile> for TargetProfile {
    fn from(profile: Profile) -> Self {
        match profile {
            Profile::Sqlalchemy => TargetProfile::Sqlalchemy,
            Profile::Django => TargetProfile::Django,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum Flavor {
    Postgresql,
    Mysql,
    Sqlite,
}

impl From<Flavor> for DbFlavor {
    fn from(flavor: Flavor) -> Self {
        match flavor {
            Flavor::Postgresql => DbFlavor::Postgresql,
            Flavor::Mysql => DbFlavor::Mysql,
            Flavor::Sqlite => DbFlavor::Sqlite,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
