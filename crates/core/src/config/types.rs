use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub transpiler: TranspilerDefaults,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults for every run, overridable from the command line.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct TranspilerDefaults {
    /// Base type the generated class inherits from (default: UIView)
    #[serde(default = "default_base_type")]
    pub base_type: String,
    /// Initializer expression for the view's background color
    #[serde(default)]
    pub background: Option<String>,
    /// Report dropped duplicate declarations
    #[serde(default)]
    pub verbose: bool,
}

impl Default for TranspilerDefaults {
    fn default() -> Self {
        Self { base_type: default_base_type(), background: None, verbose: false }
    }
}

fn default_base_type() -> String {
    "UIView".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    /// Path the configuration was read from, if any file was found.
    pub config_path: Option<PathBuf>,
    pub transpiler: TranspilerDefaults,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    /// Build the per-run transpiler configuration for a dialect.
    pub fn transpiler_config(&self, dialect: Dialect) -> TranspilerConfig {
        TranspilerConfig {
            dialect,
            base_type: self.transpiler.base_type.clone(),
            background: self.transpiler.background.clone(),
            verbose: self.transpiler.verbose,
        }
    }
}

/// The generated-code shapes fumes understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Single `.swift` file.
    Swift,
    /// Objective-C `.h` / `.m` pair.
    ObjC,
}

impl Dialect {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str())? {
            "swift" => Some(Self::Swift),
            "h" | "m" => Some(Self::ObjC),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Swift => "swift",
            Self::ObjC => "objc",
        }
    }

    /// Background expression used when none is configured.
    pub fn default_background(&self) -> &'static str {
        match self {
            Self::Swift => ".clear",
            Self::ObjC => "[UIColor clearColor]",
        }
    }
}

/// Settings for a single transpile invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspilerConfig {
    pub dialect: Dialect,
    /// The class name the generated type should inherit from.
    pub base_type: String,
    /// An initializer for the background color.
    pub background: Option<String>,
    pub verbose: bool,
}

impl Default for TranspilerConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::Swift,
            base_type: default_base_type(),
            background: None,
            verbose: false,
        }
    }
}

impl TranspilerConfig {
    pub fn background(&self) -> &str {
        self.background.as_deref().unwrap_or_else(|| self.dialect.default_background())
    }
}
