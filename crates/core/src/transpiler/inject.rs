//! Code injected around the generated drawing code to turn it into a view.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::transpiler::matcher::Delimited;
use crate::transpiler::naming::NameAllocator;
use crate::transpiler::variable::{Declaration, Variable};

/// Lines introducing the generated type start with this.
pub const TYPE_INTRODUCTION: &str = "class ";

static CLASS_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"class (?<name>\w+): NSObject").unwrap());

const DRAW_FUNCTION: Delimited = Delimited::new("func draw", "(frame targetFrame: ");
const NATIVE_RECT: Delimited = Delimited::new("targetFrame: CGRect = ", ", resizing");

/// Name of the generated `NSObject` subclass, if any.
pub fn class_name(source: &str) -> Option<&str> {
    CLASS_NAME_RE.captures(source).and_then(|c| c.name("name")).map(|m| m.as_str())
}

/// Make the drawing functions instance methods of a `base_type` subclass.
pub fn rewrite_type(source: &str, base_type: &str) -> String {
    let mut result = match class_name(source) {
        Some(name) => source
            .replace("class func", "func")
            .replace(&format!("{name}."), ""),
        None => source.to_string(),
    };

    result = result.replace(": NSObject {", &format!(": {base_type} {{"));
    result
}

/// Insert `block` right after the first type-introduction line.
fn insert_after_type_introduction(source: &str, block: &[String]) -> String {
    let mut lines = Vec::new();
    let mut inserted = false;

    for line in source.lines() {
        lines.push(line.to_string());

        if !inserted && line.starts_with(TYPE_INTRODUCTION) {
            lines.extend(block.iter().cloned());
            inserted = true;
        }
    }

    lines.join("\n")
}

/// Add a `commonInit()` shared by the frame and coder initializers.
pub fn insert_initializers(source: &str, background: &str) -> String {
    let block = format!(
        r"

    func commonInit() {{
        backgroundColor = {background}
    }}

    override init(frame: CGRect) {{
        super.init(frame: frame)
        commonInit()
    }}

    required init?(coder: NSCoder) {{
        super.init(coder: coder)
        commonInit()
    }}"
    );

    let block: Vec<String> = block.lines().map(str::to_string).collect();
    insert_after_type_introduction(source, &block)
}

/// Declare every variable at the top of the type body.
///
/// Names already issued by `allocator` are skipped, companions included.
/// Returns the rewritten source and the declarations that were emitted.
pub fn insert_declarations(
    source: &str,
    variables: &[Variable],
    allocator: &mut NameAllocator,
) -> (String, Vec<Declaration>) {
    let mut emitted = Vec::new();

    // Every name is claimed on its own so each dropped line is recorded.
    for decl in variables.iter().flat_map(Variable::declarations) {
        if allocator.claim(&decl.name) {
            emitted.push(decl);
        }
    }

    let block: Vec<String> = emitted.iter().map(Declaration::swift_line).collect();
    debug!(count = block.len(), "inserting declarations");

    (insert_after_type_introduction(source, &block), emitted)
}

fn draw_entry_block(function_name: &str, native_rect: &str) -> String {
    format!(
        r"    override func draw(_ rect: CGRect) {{
        super.draw(rect)
        draw{function_name}(frame: rect)
    }}

    func convertRectToViewSpace(_ rect: CGRect, context: CGContext) -> CGRect {{
        return context.convertToDeviceSpace(rect).applying(CGAffineTransformMakeScale(1 / UIScreen.main.scale, 1 / UIScreen.main.scale))
    }}

    override func sizeThatFits(_ size: CGSize) -> CGSize {{
        // scale the size to the given width
        let nativeRect = {native_rect}
        let aspect = size.width / nativeRect.width
        let height = nativeRect.height * aspect

        return CGSize(width: size.width, height: height)
    }}

    class func sizeThatFits(_ size: CGSize) -> CGSize {{
        // scale the size to the given width
        let nativeRect = {native_rect}
        let aspect = size.width / nativeRect.width
        let height = nativeRect.height * aspect

        return CGSize(width: size.width, height: height)
    }}

"
    )
}

/// Add `draw(_:)`, the view-space conversion helper and `sizeThatFits(_:)`
/// before the first frame-based draw function.
///
/// The native size comes from the draw function's default `targetFrame`.
pub fn insert_draw_entry(source: &str) -> String {
    let mut lines = Vec::new();
    let mut inserted = false;

    for line in source.lines() {
        if !inserted
            && let Some(function) = DRAW_FUNCTION.find(line)
            && let Some(rect) = NATIVE_RECT.find(line)
        {
            debug!(function = %function.text, "inserting draw entry point");
            lines.extend(draw_entry_block(function.text, rect.text).lines().map(str::to_string));
            inserted = true;
        }

        lines.push(line.to_string());
    }

    lines.join("\n")
}
