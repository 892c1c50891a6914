use anyhow::Context;
use clap::{Parser, Subcommand};
use dars_unpack::DarsUnpack;
use dars_unpack::unpack::UnpackerKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dars-unpack",
    version,
    about = "Unpack NICOR DARS specifications and data dictionaries into JSON for DAE"
)]
struct Cli {
    /// Path to the unpack config (yaml, json, toml or ron).
    #[arg(long, short, default_value = "configs/unpack.yaml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Unpack the "Fields" sheet of each DARS specification.
    Spec,
    /// Unpack every sheet of the data dictionary workbooks.
    Sheets,
    /// Unpack the table mapping sheet.
    TableMapping,
    /// Run every configured unpacker.
    All,
}

impl Command {
    fn unpacker_kind(&self) -> Option<UnpackerKind> {
        match self {
            Command::Spec => Some(UnpackerKind::Spec),
            Command::Sheets => Some(UnpackerKind::Sheet),
            Command::TableMapping => Some(UnpackerKind::TableMapping),
            Command::All => None,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let dars_unpack = DarsUnpack::try_from(cli.config.clone())
        .with_context(|| format!("Could not set up unpacking from {}", cli.config.display()))?;
    dars_unpack.run(cli.command.unpacker_kind())?;
    Ok(())
}
