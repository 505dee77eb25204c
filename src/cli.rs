use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "wurzel",
    version,
    about = "Locate the git working tree, admin directory, and superproject governing a path",
    long_about = None
)]
pub struct Args {
    /// Paths to classify (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Print machine-readable JSON instead of the text report
    #[arg(long = "json")]
    pub json: bool,

    /// Print nothing; the exit status reports whether every path is inside a
    /// repository
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        if self.json && self.quiet {
            return Err("--json and --quiet are mutually exclusive".to_string());
        }

        Ok(())
    }
}
