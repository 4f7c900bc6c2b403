use clap::{Args, Parser, Subcommand};
use tacgen::EvaluationMode;

#[derive(Debug, Parser)]
#[clap(about = "Generates three-address code and quadruples for arithmetic expressions")]
pub struct Options {
    #[clap(subcommand)]
    pub operation: Operation,
    #[clap(short, long, default_value_t = 1)]
    pub verbose: usize,
}

#[derive(Debug, Subcommand)]
pub enum Operation {
    /// Generate code for a single expression
    Generate {
        expression: String,
        #[clap(flatten)]
        mode: ModeOptions,
    },
    /// Generate code for every line of a file
    Batch {
        file: String,
        #[clap(flatten)]
        mode: ModeOptions,
    },
    /// Show the tokens and postfix order of a basic expression
    Inspect { expression: String },
}

#[derive(Debug, Args)]
pub struct ModeOptions {
    #[clap(short, long, default_value = "basic")]
    /// Either 'basic' or 'quadratic'
    mode: EvaluationMode,
}

impl ModeOptions {
    pub fn mode(&self) -> EvaluationMode {
        self.mode
    }
}
