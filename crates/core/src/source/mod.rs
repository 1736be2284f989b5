//! Reading inputs and writing results.
//!
//! Swift sources are a single file. Objective-C sources come as a `.h` and
//! `.m` pair sharing a stem; either file may be named on the command line.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::Dialect;
use crate::legacy::SourcePair;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Unsupported source type: {0}")]
    UnsupportedDialect(PathBuf),

    #[error("Input file not found: {0}")]
    NotFound(PathBuf),

    #[error("Missing paired file for {path}: expected {pair}")]
    MissingPair { path: PathBuf, pair: PathBuf },

    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input is not valid UTF-8: {0}")]
    Decode(PathBuf),

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A loaded input, ready for its dialect's converter.
#[derive(Debug, Clone)]
pub enum Input {
    Swift { path: PathBuf, source: String },
    ObjC { header_path: PathBuf, implementation_path: PathBuf, pair: SourcePair },
}

impl Input {
    pub fn dialect(&self) -> Dialect {
        match self {
            Self::Swift { .. } => Dialect::Swift,
            Self::ObjC { .. } => Dialect::ObjC,
        }
    }
}

/// Swap `.h` for `.m` and back. Other extensions have no pair.
pub fn paired_path(path: &Path) -> Option<PathBuf> {
    match path.extension().and_then(|e| e.to_str())? {
        "h" => Some(path.with_extension("m")),
        "m" => Some(path.with_extension("h")),
        _ => None,
    }
}

pub fn read_utf8(path: &Path) -> Result<String, SourceError> {
    if !path.is_file() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path)
        .map_err(|e| SourceError::ReadError { path: path.to_path_buf(), source: e })?;
    String::from_utf8(bytes).map_err(|_| SourceError::Decode(path.to_path_buf()))
}

/// Load the input at `path`, picking the dialect from its extension.
pub fn load(path: &Path) -> Result<Input, SourceError> {
    let dialect =
        Dialect::from_path(path).ok_or_else(|| SourceError::UnsupportedDialect(path.to_path_buf()))?;

    match dialect {
        Dialect::Swift => {
            let source = read_utf8(path)?;
            Ok(Input::Swift { path: path.to_path_buf(), source })
        }
        Dialect::ObjC => {
            let paired = paired_path(path)
                .ok_or_else(|| SourceError::UnsupportedDialect(path.to_path_buf()))?;
            if !path.is_file() {
                return Err(SourceError::NotFound(path.to_path_buf()));
            }
            if !paired.is_file() {
                return Err(SourceError::MissingPair { path: path.to_path_buf(), pair: paired });
            }

            let (header_path, implementation_path) =
                if path.extension().is_some_and(|e| e == "h") {
                    (path.to_path_buf(), paired)
                } else {
                    (paired, path.to_path_buf())
                };

            let pair = SourcePair {
                header: read_utf8(&header_path)?,
                implementation: read_utf8(&implementation_path)?,
            };
            Ok(Input::ObjC { header_path, implementation_path, pair })
        }
    }
}

/// Header and implementation destinations for an Objective-C result.
///
/// When `output` is an existing directory both files land inside it,
/// named after the input stem. Otherwise `output`'s extension is swapped.
pub fn pair_output_paths(output: &Path, input: &Path) -> (PathBuf, PathBuf) {
    let base = if output.is_dir() {
        match input.file_stem() {
            Some(stem) => output.join(stem),
            None => output.join("output"),
        }
    } else {
        output.to_path_buf()
    };

    (base.with_extension("h"), base.with_extension("m"))
}

pub fn write(path: &Path, contents: &str) -> Result<(), SourceError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| SourceError::WriteError { path: path.to_path_buf(), source: e })?;
    }

    fs::write(path, contents)
        .map_err(|e| SourceError::WriteError { path: path.to_path_buf(), source: e })
}
