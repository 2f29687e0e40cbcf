use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use set_version_number::cli::{self, UpdateWorkflowArgs};
use set_version_number::ui;

#[derive(clap::Parser)]
#[command(
    name = "set-version-number",
    version,
    about = "Set the libloot version number in the C++ header and resource files"
)]
struct Args {
    #[arg(
        value_name = "VERSION",
        help = "New version number as a three-part semantic version, e.g. 0.18.3"
    )]
    versions: Vec<String>,

    #[arg(short, long, default_value = ".", help = "Project root containing include/ and src/")]
    root: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Fail if any version pattern is not found")]
    strict: bool,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Only print errors")]
    quiet: bool,
}

impl From<Args> for UpdateWorkflowArgs {
    fn from(args: Args) -> Self {
        UpdateWorkflowArgs {
            versions: args.versions,
            root: args.root,
            config_path: args.config,
            strict: args.strict,
            dry_run: args.dry_run,
            quiet: args.quiet,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = cli::run_update_workflow(args.into()) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
