//! Design-layer annotation lookup.
//!
//! The export tool writes a comment naming the layer right above the code
//! that draws it:
//!
//! ```text
//! /// Dot
//! let dot = UIBezierPath(ovalIn: CGRect(x: 10, y: 10, width: 100, height: 100))
//! UIColor.white.setFill()
//! ```

/// Sentinel used by Swift sources.
pub const SWIFT_SENTINEL: &str = "/// ";

/// Sentinel used by Objective-C sources.
pub const OBJC_SENTINEL: &str = "//! ";

#[derive(Debug, Clone, Copy)]
pub struct AnnotationLocator {
    sentinel: &'static str,
}

impl AnnotationLocator {
    pub const fn new(sentinel: &'static str) -> Self {
        Self { sentinel }
    }

    pub const fn swift() -> Self {
        Self::new(SWIFT_SENTINEL)
    }

    pub const fn objc() -> Self {
        Self::new(OBJC_SENTINEL)
    }

    /// Name of the group annotated nearest before `offset`.
    ///
    /// Scans backward line by line. Returns `None` when no annotation
    /// precedes `offset` or the nearest one is blank.
    pub fn group_before(&self, source: &str, offset: usize) -> Option<String> {
        let head = source.get(..offset)?;

        head.lines()
            .rev()
            .find(|line| line.contains(self.sentinel))
            .map(|line| line.replace(self.sentinel, "").trim().to_string())
            .filter(|name| !name.is_empty())
    }
}
