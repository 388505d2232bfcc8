//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands;
use gounit::core::models::{parse_function_name, parse_line};
use gounit::output::{OperationResult, OutputMode};

/// gounit - Generate table-driven tests for Go functions and methods
#[derive(Parser, Debug)]
#[command(
    name = "gounit",
    version,
    about = "Generate table-driven tests for Go functions and methods",
    long_about = "Generate table-driven test stubs for Go functions and methods.\n\n\
                  Functions are picked by line number or name; functions that\n\
                  already have a test in the package are skipped."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate test stubs
    Gen(GenArgs),

    /// Manage test templates (add, list, use, remove)
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },

    /// Show version
    Version,
}

#[derive(Args, Debug)]
pub struct GenArgs {
    /// Go source file
    #[arg(short, long, required_unless_present_any = ["json_stream", "interactive"])]
    pub input: Option<PathBuf>,

    /// Test file (defaults to <input>_test.go)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Comma-separated line numbers (starting with 1) of the function declarations
    #[arg(short, long, value_delimiter = ',', value_parser = parse_line)]
    pub lines: Vec<usize>,

    /// Comma-separated function names, `*` for all
    #[arg(short, long, value_delimiter = ',', value_parser = parse_function_name)]
    pub functions: Vec<String>,

    /// Generate tests for all functions (implied without -l and -f)
    #[arg(long)]
    pub all: bool,

    /// Comment inserted into the generated tests
    #[arg(short, long, default_value = "")]
    pub comment: String,

    /// Installed template to use instead of the default one
    #[arg(short, long)]
    pub template: Option<String>,

    /// Read the source from stdin when the input file does not exist
    #[arg(long)]
    pub stdin: bool,

    /// Print the new test file instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Serve JSON requests from stdin
    #[arg(long, conflicts_with = "interactive")]
    pub json_stream: bool,

    /// Prompt for requests on stdin
    #[arg(long)]
    pub interactive: bool,

    /// Fix imports with the external goimports tool
    #[arg(long)]
    pub goimports: bool,
}

#[derive(Subcommand, Debug)]
pub enum TemplateAction {
    /// Validate and install a template file
    Add {
        /// Template file; its name becomes the template name
        file: PathBuf,
    },

    /// List templates
    List,

    /// Make a template the default
    Use {
        /// Template name
        name: String,
    },

    /// Remove an installed template
    Remove {
        /// Template name
        name: String,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Gen(args)) => commands::generate(args, output_mode),
        Some(Command::Template { action }) => commands::template_cmd(action, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": gounit::VERSION
                    })
                );
            } else {
                println!("gounit v{}", gounit::VERSION);
            }
            Ok(())
        }
        None => {
            OperationResult::ok(format!(
                "gounit v{}\n\nRun 'gounit --help' for usage",
                gounit::VERSION
            ))
            .render(output_mode);
            Ok(())
        }
    }
}
