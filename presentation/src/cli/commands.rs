//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for workflow results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered report with a short header
    Text,
    /// Raw aggregated payload, without rendering
    Json,
}

/// CLI arguments for imaging-copilot
#[derive(Parser, Debug)]
#[command(name = "imaging-copilot")]
#[command(author, version, about = "Technical copilot for Imaging - application summaries and impact analysis")]
#[command(long_about = r#"
Imaging Copilot asks an Imaging MCP server everything it knows about an
application (or about one object inside it) and turns the answers into a
report.

Tool names are resolved at runtime, so servers that prefix their tools
(e.g. "bb7_stats") work unchanged. Analyses the server does not offer are
simply left out of the report.

Configuration files are loaded from (in priority order):
1. IMAGING_COPILOT_* environment variables
2. --config <path>                 Explicit config file
3. ./imaging-copilot.toml          Project-level config
4. ~/.config/imaging-copilot/config.toml   Global config

Example:
  imaging-copilot summary "Summarize the architecture" --app Payments
  imaging-copilot impact com.acme.payments.OrderService --app Payments
  imaging-copilot serve
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Skip the LLM renderer and print the aggregated payload
    #[arg(long, global = true)]
    pub no_render: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

impl Cli {
    /// Whether the LLM renderer is needed for this invocation
    pub fn wants_render(&self) -> bool {
        !self.no_render && self.output == OutputFormat::Text
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        /// Bind host (overrides [server] host)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides [server] port)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Summarize an application
    Summary {
        /// Question to answer about the application
        question: String,

        /// Application name or id to prefer
        #[arg(short, long, value_name = "NAME")]
        app: Option<String>,
    },

    /// Assess the impact of changing an object
    Impact {
        /// Object to analyze (class, method, table...)
        object: String,

        /// Question to answer about the change
        #[arg(long, default_value = "What breaks if we change X?")]
        question: String,

        /// Application name or id to prefer
        #[arg(short, long, value_name = "NAME")]
        app: Option<String>,
    },

    /// List the tools the Imaging server advertises and how capabilities resolve
    Tools,

    /// Show configuration sources and the resolved configuration
    ShowConfig,
}
