//! Converter for Objective-C header/implementation pairs.
//!
//! Older exports produce an `NSObject` subclass with class methods. The
//! converter turns it into a view: class methods become instance methods,
//! annotated `[[UIColor ...] setFill]` / `setStroke` colors become
//! properties, and `initWithFrame:`, `drawRect:` and `sizeThatFits:` are
//! added to the implementation.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, error, warn};

use crate::config::types::{Dialect, TranspilerConfig};
use crate::transpiler::annotation::AnnotationLocator;
use crate::transpiler::naming::camel_case;
use crate::transpiler::{Declaration, VariableKind, Visibility};

static CLASS_METHOD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\+ \(").unwrap());

static FILL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[UIColor [^;]+ setFill\];").unwrap());

static STROKE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[UIColor [^;]+ setStroke\];").unwrap());

static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[UIColor [^;\]]+\]").unwrap());

static IMPLEMENTATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@implementation (?<name>\w+)\r?\n").unwrap());

static INIT_WITH_FRAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"- \(instancetype\)initWithFrame").unwrap());

// [CBTuningDiagram drawCanvas1WithFrame:CGRectMake(0, 0, 240, 120) resizing:CBTuningDiagramResizingBehaviorAspectFit]
static DRAW_CALL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\[\w+ (?<method>draw\w+WithFrame:)CGRectMake\([\d.]+,\s+[\d.]+,\s+(?<width>[\d.]+),\s+(?<height>[\d.]+)\)\s+resizing:(?<resizing>\w+)\]",
    )
    .unwrap()
});

/// An Objective-C header and its implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePair {
    pub header: String,
    pub implementation: String,
}

#[derive(Debug, Clone)]
pub struct LegacyTranspilation {
    pub pair: SourcePair,
    /// One declaration per color property, sorted by name.
    pub declarations: Vec<Declaration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Paint {
    Fill,
    Stroke,
}

impl Paint {
    fn as_str(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Stroke => "stroke",
        }
    }
}

#[derive(Debug, Clone)]
struct ColorMatch {
    /// Byte offset of the color expression in the implementation.
    start: usize,
    color: String,
    group: String,
    name: String,
}

/// Property name for an annotated color, e.g. `Dot` + fill -> `dotFillColor`.
fn property_name(group: &str, paint: Paint) -> String {
    camel_case(&label(group, paint))
}

fn label(group: &str, paint: Paint) -> String {
    let group: String = group.chars().map(|c| if c.is_whitespace() { '_' } else { c }).collect();
    format!("{group}_{}_color", paint.as_str())
}

fn color_matches(code: &str, re: &Regex, paint: Paint, locator: &AnnotationLocator) -> Vec<ColorMatch> {
    re.find_iter(code)
        .filter_map(|m| {
            let color = COLOR_RE.find(m.as_str())?;
            let group = locator.group_before(code, m.start())?;
            let name = property_name(&group, paint);

            Some(ColorMatch {
                start: m.start() + color.start(),
                color: color.as_str().to_string(),
                group,
                name,
            })
        })
        .collect()
}

/// Replace annotated colors in the implementation with property reads.
fn replace_colors(code: &str) -> (String, Vec<ColorMatch>) {
    let locator = AnnotationLocator::objc();

    let mut matches = color_matches(code, &FILL_RE, Paint::Fill, &locator);
    matches.extend(color_matches(code, &STROKE_RE, Paint::Stroke, &locator));
    matches.sort_by_key(|m| m.start);

    // Apply from the end so earlier offsets stay valid.
    let mut refactored = code.to_string();
    for m in matches.iter().rev() {
        refactored.replace_range(m.start..m.start + m.color.len(), &format!("self.{}", m.name));
    }

    (refactored, matches)
}

fn insert_after(source: &str, insertable: &str, re: &Regex) -> String {
    match re.find(source) {
        Some(m) => format!(
            "{}\n\n{insertable}\n{}",
            &source[..m.end()],
            &source[m.end()..]
        ),
        None => source.to_string(),
    }
}

fn insert_before(source: &str, insertable: &str, re: &Regex) -> String {
    match re.find(source) {
        Some(m) => format!(
            "{}\n{insertable}\n\n{}",
            &source[..m.start()],
            &source[m.start()..]
        ),
        None => source.to_string(),
    }
}

fn init_with_frame(declarations: &[Declaration], background: &str) -> String {
    let mut body = format!("        self.backgroundColor = {background};\n");
    for decl in declarations {
        body.push_str(&format!("        _{} = {};\n", decl.name, decl.value));
    }

    format!(
        "- (instancetype)initWithFrame:(CGRect)frame {{
    self = [super initWithFrame:frame];
    if (self) {{
{body}    }}

    return self;
}}"
    )
}

fn properties(declarations: &[Declaration], visibility: Visibility) -> String {
    declarations
        .iter()
        .filter(|d| d.visibility == visibility)
        .map(|d| format!("@property (nonatomic) UIColor *{};\n", d.name))
        .collect()
}

fn class_extension(declarations: &[Declaration], class_name: &str) -> String {
    format!(
        "@interface {class_name}()\n{}\n@end\n",
        properties(declarations, Visibility::Private)
    )
}

fn draw_rect(method: &str, resizing: &str) -> String {
    format!(
        "- (void)drawRect:(CGRect)rect {{
    [super drawRect:rect];
    [self {method}rect resizing:{resizing}];
}}"
    )
}

fn size_that_fits(width: &str, height: &str) -> String {
    format!(
        "- (CGSize)sizeThatFits:(CGSize)size {{
    CGSize nativeSize = CGSizeMake({width}, {height});
    CGFloat aspect = size.width / nativeSize.width;
    CGFloat height = nativeSize.height * aspect;

    return CGSizeMake(size.width, height);
}}"
    )
}

/// Convert an Objective-C header/implementation pair into a view.
///
/// Returns `None` when the configured dialect is not Objective-C or the
/// implementation has no `@implementation` block.
pub fn transpile_pair(pair: &SourcePair, config: &TranspilerConfig) -> Option<LegacyTranspilation> {
    if config.dialect != Dialect::ObjC {
        error!(dialect = config.dialect.as_str(), "unsupported source type");
        return None;
    }

    let Some(class_name) = IMPLEMENTATION_RE
        .captures(&pair.implementation)
        .and_then(|c| c.name("name"))
        .map(|m| m.as_str().to_string())
    else {
        error!("no @implementation found in implementation file");
        return None;
    };

    let header = pair.header.replace("NSObject", &config.base_type);
    let header = CLASS_METHOD_RE.replace_all(&header, "- (").into_owned();
    let implementation = CLASS_METHOD_RE.replace_all(&pair.implementation, "- (").into_owned();

    let (implementation, matches) = replace_colors(&implementation);

    // First color seen for a property wins.
    let mut colors: BTreeMap<String, ColorMatch> = BTreeMap::new();
    for m in matches {
        colors.entry(m.name.clone()).or_insert(m);
    }

    let declarations: Vec<Declaration> = colors
        .into_values()
        .map(|m| Declaration {
            visibility: Visibility::of(&m.group),
            group: m.group,
            name: m.name,
            type_name: "UIColor *".to_string(),
            value: m.color,
            kind: VariableKind::Color,
        })
        .collect();
    debug!(count = declarations.len(), class = %class_name, "extracted legacy colors");

    let implementation = insert_after(
        &implementation,
        &init_with_frame(&declarations, config.background()),
        &IMPLEMENTATION_RE,
    );
    let mut implementation = insert_before(
        &implementation,
        &class_extension(&declarations, &class_name),
        &IMPLEMENTATION_RE,
    );

    let draw_call = DRAW_CALL_RE.captures(&implementation).map(|c| {
        (
            draw_rect(&c["method"], &c["resizing"]),
            size_that_fits(&c["width"], &c["height"]),
        )
    });

    match draw_call {
        Some((draw, size)) => {
            implementation = insert_before(&implementation, &draw, &INIT_WITH_FRAME_RE);
            implementation = insert_before(&implementation, &size, &INIT_WITH_FRAME_RE);
        }
        None => warn!(class = %class_name, "no generated draw call found; skipping drawRect:"),
    }

    let public = properties(&declarations, Visibility::Public);
    let header = match Regex::new(&format!(r": {}\r?\n", regex::escape(&config.base_type))) {
        Ok(re) => insert_after(&header, &public, &re),
        Err(_) => header,
    };

    Some(LegacyTranspilation { pair: SourcePair { header, implementation }, declarations })
}
