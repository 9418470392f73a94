mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ini", version, about = "Read and edit minimal INI files")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Ignore [section] headers; read and write only the default section
    #[arg(long, global = true)]
    no_sections: bool,

    /// Overwrite repeated keys instead of collecting every value
    #[arg(long, global = true)]
    no_repeat: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the value(s) of a key
    Get(GetArgs),

    /// Check whether a section or key exists
    Has(TargetArgs),

    /// Set a key and write the file back
    Set(SetArgs),

    /// Remove a section or key and write the file back
    Remove(TargetArgs),

    /// Print the normalised file
    Dump(DumpArgs),
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// INI file to read
    pub file: PathBuf,

    pub key: String,

    /// Section to look in (default section when omitted)
    #[arg(long, short)]
    pub section: Option<String>,
}

#[derive(Debug, Args)]
pub struct TargetArgs {
    /// INI file to read
    pub file: PathBuf,

    #[arg(long, short)]
    pub section: Option<String>,

    #[arg(long, short)]
    pub key: Option<String>,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// INI file to update
    pub file: PathBuf,

    pub key: String,

    pub value: String,

    #[arg(long, short)]
    pub section: Option<String>,
}

#[derive(Debug, Args)]
pub struct DumpArgs {
    /// INI file to read
    pub file: PathBuf,

    /// Print the section map as JSON
    #[arg(long)]
    pub json: bool,
}

fn main() {
    let cli = Cli::parse();
    let session = cmd::Session::start(cli.config.as_deref(), cli.no_sections, cli.no_repeat);

    match cli.command {
        Commands::Get(args) => cmd::get::run(&session, &args),
        Commands::Has(args) => cmd::has::run(&session, &args),
        Commands::Set(args) => cmd::set::run(&session, args),
        Commands::Remove(args) => cmd::remove::run(&session, &args),
        Commands::Dump(args) => cmd::dump::run(&session, &args),
    }
}
