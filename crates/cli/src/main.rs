mod clipboard;
mod cmd;
mod logging;

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "fumes",
    version,
    about = "Fumes transpiles PaintCode's static objects into configurable views."
)]
pub struct Cli {
    /// Source file (.swift, or either file of a .h/.m pair)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Destination file; the result is copied to the clipboard when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Input and output given positionally
    #[arg(value_name = "PATH", num_args = 1..=2)]
    pub paths: Vec<PathBuf>,

    /// Base type the generated view inherits from (default: UIView)
    #[arg(short = 'c', long = "super", value_name = "NAME")]
    pub base_type: Option<String>,

    /// Initializer for the view's background color
    #[arg(long = "bg", value_name = "EXPR", allow_hyphen_values = true)]
    pub background: Option<String>,

    /// Report dropped duplicate declarations
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to the configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print a JSON report of the emitted declarations
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().or_else(|| self.paths.first())
    }

    pub fn output_path(&self) -> Option<&PathBuf> {
        let positional = if self.input.is_some() { self.paths.first() } else { self.paths.get(1) };
        self.output.as_ref().or(positional)
    }
}

fn main() {
    let cli = Cli::parse();
    cmd::transpile::run(&cli);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_paths_fill_input_and_output() {
        let cli = Cli::parse_from(["fumes", "In.swift", "Out.swift"]);
        assert_eq!(cli.input_path(), Some(&PathBuf::from("In.swift")));
        assert_eq!(cli.output_path(), Some(&PathBuf::from("Out.swift")));
    }

    #[test]
    fn flags_take_precedence_over_positionals() {
        let cli = Cli::parse_from(["fumes", "-i", "In.swift", "Out.swift"]);
        assert_eq!(cli.input_path(), Some(&PathBuf::from("In.swift")));
        assert_eq!(cli.output_path(), Some(&PathBuf::from("Out.swift")));

        let cli = Cli::parse_from(["fumes", "-o", "Out.swift", "In.swift"]);
        assert_eq!(cli.input_path(), Some(&PathBuf::from("In.swift")));
        assert_eq!(cli.output_path(), Some(&PathBuf::from("Out.swift")));
    }

    #[test]
    fn background_accepts_leading_dash() {
        let cli = Cli::parse_from(["fumes", "In.swift", "--bg", "-x", "-c", "UIControl"]);
        assert_eq!(cli.background.as_deref(), Some("-x"));
        assert_eq!(cli.base_type.as_deref(), Some("UIControl"));
    }
}
