use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "notedesk",
    bin_name = "notedesk",
    version,
    about = "A tabbed note keeper for the terminal",
    long_about = None
)]
pub struct Args {
    /// Database file to use (overrides the config file and the default
    /// data-directory location)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
