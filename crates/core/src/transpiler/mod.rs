//! Swift transpiler: static drawing object in, configurable view out.
//!
//! The passes run in a fixed order, each one over the output of the
//! previous:
//!
//! 1. type rewrite (class functions become instance functions)
//! 2. initializer injection
//! 3. color extraction
//! 4. frame derivation from fill colors
//! 5. text extraction and draw-call correlation
//! 6. font extraction
//! 7. declaration injection
//! 8. draw entry point injection

pub mod annotation;
pub mod correlator;
pub mod extract;
pub mod frame;
pub mod inject;
pub mod matcher;
pub mod naming;
pub mod variable;

use tracing::{debug, error};

use crate::config::types::{Dialect, TranspilerConfig};

use annotation::AnnotationLocator;
use naming::NameAllocator;

pub use variable::{
    ColorType, ColorVariable, Declaration, FontVariable, FrameVariable, Group, TextVariable,
    Variable, VariableKind, Visibility,
};

/// Output of a successful run.
#[derive(Debug, Clone)]
pub struct Transpilation {
    /// The rewritten source.
    pub source: String,
    /// Declarations inserted into the type, in order.
    pub declarations: Vec<Declaration>,
    /// Declarations dropped because their name was already taken.
    pub duplicates: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Transpiler {
    config: TranspilerConfig,
}

impl Transpiler {
    pub fn new(config: TranspilerConfig) -> Self {
        Self { config }
    }

    /// Transpile a Swift source file.
    ///
    /// Returns `None` when the configured dialect is not Swift.
    pub fn transpile(&self, source: &str) -> Option<Transpilation> {
        if self.config.dialect != Dialect::Swift {
            error!(dialect = self.config.dialect.as_str(), "unsupported source type");
            return None;
        }

        let locator = AnnotationLocator::swift();

        let source = inject::rewrite_type(source, &self.config.base_type);
        let source = inject::insert_initializers(&source, self.config.background());

        let colors = extract::extract_colors(&source, &locator);
        let frames = frame::derive_frames(&colors.variables);
        let source = frame::insert_frame_assignments(&colors.source, &frames);

        let texts = extract::extract_texts(&source, &locator);
        let fonts = extract::extract_fonts(&texts.source, &locator);

        debug!(
            colors = colors.variables.len(),
            frames = frames.len(),
            texts = texts.variables.len(),
            fonts = fonts.variables.len(),
            "extraction finished"
        );

        let variables: Vec<Variable> = colors
            .variables
            .into_iter()
            .map(Variable::from)
            .chain(frames.into_iter().map(Variable::from))
            .chain(texts.variables.into_iter().map(Variable::from))
            .chain(fonts.variables.into_iter().map(Variable::from))
            .collect();

        let mut allocator = NameAllocator::new(self.config.verbose);
        let (source, declarations) =
            inject::insert_declarations(&fonts.source, &variables, &mut allocator);
        let source = inject::insert_draw_entry(&source);

        Some(Transpilation { source, declarations, duplicates: allocator.into_duplicates() })
    }
}

/// Transpile `source` with `config`, returning only the rewritten text.
pub fn transpile(source: &str, config: &TranspilerConfig) -> Option<String> {
    Transpiler::new(config.clone()).transpile(source).map(|t| t.source)
}
