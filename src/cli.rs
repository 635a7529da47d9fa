//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::ai::Convention;
use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "shell-assist")]
#[command(version)]
#[command(about = "Turn natural-language requests into shell scripts you can review and run", long_about = None)]
pub struct Cli {
    /// What the script should do; asked for interactively when omitted
    #[arg(trailing_var_arg = true)]
    pub prompt: Vec<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Reply convention requested from the model
    #[arg(long, value_enum)]
    pub convention: Option<Convention>,

    /// Print without colors
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Positional words joined into one prompt
    pub fn joined_prompt(&self) -> String {
        self.prompt.join(" ").trim().to_string()
    }

    /// Let flags take precedence over the configuration file
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(convention) = self.convention {
            config.reply.convention = convention;
        }
        if self.no_color {
            config.output.color = false;
        }
    }
}
