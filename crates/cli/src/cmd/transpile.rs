//! The transpile command: read a PaintCode export, write a view.

use std::path::{Path, PathBuf};

use fumes_core::config::loader::ConfigLoader;
use fumes_core::config::types::{ResolvedConfig, TranspilerConfig};
use fumes_core::legacy::transpile_pair;
use fumes_core::source::{self, Input};
use fumes_core::{Declaration, Transpiler};
use tracing::{debug, info};

use super::output::{DeclarationOutput, ReportOutput};
use crate::{clipboard, logging, Cli};

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {message}");
    logging::flush();
    std::process::exit(1);
}

/// Apply command-line overrides on top of the configuration file.
fn transpiler_config(cli: &Cli, rc: &ResolvedConfig, input: &Input) -> TranspilerConfig {
    let mut config = rc.transpiler_config(input.dialect());
    if let Some(ref base_type) = cli.base_type {
        config.base_type = base_type.clone();
    }
    if let Some(ref background) = cli.background {
        config.background = Some(background.clone());
    }
    config.verbose |= cli.verbose;
    config
}

struct Outcome {
    outputs: Vec<PathBuf>,
    declarations: Vec<Declaration>,
    duplicates: Vec<String>,
}

fn run_swift(code: &str, config: TranspilerConfig, output: Option<&Path>) -> Outcome {
    let Some(result) = Transpiler::new(config).transpile(code) else {
        fail("Unsupported source type.");
    };

    let outputs = match output {
        Some(path) => {
            if let Err(e) = source::write(path, &result.source) {
                fail(e);
            }
            vec![path.to_path_buf()]
        }
        None if clipboard::is_available() => {
            if let Err(e) = clipboard::copy(&result.source) {
                fail(e);
            }
            eprintln!("Copied result to clipboard.");
            Vec::new()
        }
        None => fail("No output specified."),
    };

    info!(declarations = result.declarations.len(), "transpiled swift source");
    Outcome { outputs, declarations: result.declarations, duplicates: result.duplicates }
}

fn run_objc(
    input_path: &Path,
    pair: &fumes_core::legacy::SourcePair,
    config: TranspilerConfig,
    output: Option<&Path>,
) -> Outcome {
    let Some(output) = output else {
        fail("No output specified.");
    };

    let Some(result) = transpile_pair(pair, &config) else {
        fail(format!("Could not transpile {}.", input_path.display()));
    };

    let (header_path, implementation_path) = source::pair_output_paths(output, input_path);
    for (path, contents) in [
        (&header_path, &result.pair.header),
        (&implementation_path, &result.pair.implementation),
    ] {
        if let Err(e) = source::write(path, contents) {
            fail(e);
        }
    }

    info!(declarations = result.declarations.len(), "transpiled objective-c pair");
    Outcome {
        outputs: vec![header_path, implementation_path],
        declarations: result.declarations,
        duplicates: Vec::new(),
    }
}

pub fn run(cli: &Cli) {
    let rc = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    logging::init(&rc, cli.verbose || rc.transpiler.verbose);

    let Some(input_path) = cli.input_path() else {
        fail("No input specified.");
    };

    let input = match source::load(input_path) {
        Ok(input) => input,
        Err(e) => fail(e),
    };

    let config = transpiler_config(cli, &rc, &input);
    debug!(
        input = %input_path.display(),
        dialect = config.dialect.as_str(),
        base_type = %config.base_type,
        "transpiling"
    );
    let dialect = config.dialect;
    let output = cli.output_path().map(PathBuf::as_path);

    let outcome = match &input {
        Input::Swift { source: code, .. } => run_swift(code, config, output),
        Input::ObjC { pair, .. } => run_objc(input_path, pair, config, output),
    };

    if cli.json {
        let report = ReportOutput {
            input: input_path.display().to_string(),
            dialect: dialect.as_str().to_string(),
            outputs: outcome.outputs.iter().map(|p| p.display().to_string()).collect(),
            declarations: outcome.declarations.iter().map(DeclarationOutput::from).collect(),
            duplicates: outcome.duplicates,
        };

        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => fail(format!("Failed to serialize report: {e}")),
        }
    } else {
        for path in &outcome.outputs {
            println!("Wrote {}", path.display());
        }
    }

    logging::flush();
}
