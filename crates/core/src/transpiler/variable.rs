//! Variable descriptors extracted from generated drawing code.

use crate::transpiler::naming::{base_identifier, code_identifier};

/// Declaration visibility, derived from the group name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    /// Groups whose name starts with `_` are private.
    pub fn of(group_name: &str) -> Self {
        if group_name.starts_with('_') { Self::Private } else { Self::Public }
    }

    /// Swift keyword for a stored property with this visibility.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public var",
            Self::Private => "let",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

/// A design layer, identified by its annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    name: String,
    visibility: Visibility,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let visibility = Visibility::of(&name);
        Self { name, visibility }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Variable name for this group with a kind suffix, e.g. `dotFillColor`.
    pub fn identifier(&self, suffix: &str) -> String {
        base_identifier(&self.name) + suffix
    }

    /// Name of the layer object in the generated drawing code.
    pub fn code_name(&self) -> String {
        code_identifier(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorType {
    Stroke,
    Fill,
    /// Foreground color of an attributed string.
    Text,
}

impl ColorType {
    fn suffix(self) -> &'static str {
        match self {
            Self::Stroke => "StrokeColor",
            Self::Fill => "FillColor",
            Self::Text => "TextColor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorVariable {
    pub group: Group,
    pub color: String,
    pub color_type: ColorType,
}

impl ColorVariable {
    pub fn new(group: Group, color: impl Into<String>, color_type: ColorType) -> Self {
        Self { group, color: color.into(), color_type }
    }

    pub fn name(&self) -> String {
        self.group.identifier(self.color_type.suffix())
    }
}

/// A string literal. Always declared together with an optional attributed
/// override and the frame the text is drawn in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextVariable {
    pub group: Group,
    pub text: String,
}

impl TextVariable {
    pub fn new(group: Group, text: impl Into<String>) -> Self {
        Self { group, text: text.into() }
    }

    pub fn name(&self) -> String {
        self.group.identifier("Text")
    }

    pub fn attributed_name(&self) -> String {
        self.group.identifier("AttributedText")
    }

    pub fn frame_name(&self) -> String {
        self.group.identifier("Frame")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontVariable {
    pub group: Group,
    /// The font construction expression as generated.
    pub text: String,
}

impl FontVariable {
    pub fn new(group: Group, text: impl Into<String>) -> Self {
        Self { group, text: text.into() }
    }

    pub fn name(&self) -> String {
        self.group.identifier("Font")
    }

    /// Point size from a `UIFont(name: ..., size: N)` expression.
    pub fn font_size(&self) -> Option<f64> {
        let (_, rest) = self.text.split_once(", size: ")?;
        let size = rest.split(", size: ").next()?.split(')').next()?;
        size.trim().parse().ok()
    }

    /// Initializer that falls back to the system font of the same size
    /// instead of force-unwrapping a named font.
    pub fn value(&self) -> String {
        match self.font_size() {
            Some(size) => format!(
                "{} ?? UIFont.systemFont(ofSize: {size:?})",
                self.text.replace('!', "")
            ),
            None => self.text.clone(),
        }
    }
}

/// Bounds of a drawn layer, converted to view space at draw time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameVariable {
    pub group: Group,
    /// The name of the variable used in code by the group.
    pub group_variable_name: String,
}

impl FrameVariable {
    pub fn new(group: Group) -> Self {
        let group_variable_name = group.code_name();
        Self { group, group_variable_name }
    }

    pub fn name(&self) -> String {
        self.group.identifier("Frame")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Color,
    Text,
    Font,
    Frame,
}

impl VariableKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Text => "text",
            Self::Font => "font",
            Self::Frame => "frame",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Variable {
    Color(ColorVariable),
    Text(TextVariable),
    Font(FontVariable),
    Frame(FrameVariable),
}

impl Variable {
    pub fn group(&self) -> &Group {
        match self {
            Self::Color(v) => &v.group,
            Self::Text(v) => &v.group,
            Self::Font(v) => &v.group,
            Self::Frame(v) => &v.group,
        }
    }

    pub fn kind(&self) -> VariableKind {
        match self {
            Self::Color(_) => VariableKind::Color,
            Self::Text(_) => VariableKind::Text,
            Self::Font(_) => VariableKind::Font,
            Self::Frame(_) => VariableKind::Frame,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Color(_) => "UIColor",
            Self::Text(_) => "String",
            Self::Font(_) => "UIFont",
            Self::Frame(_) => "CGRect",
        }
    }

    pub fn name(&self) -> String {
        match self {
            Self::Color(v) => v.name(),
            Self::Text(v) => v.name(),
            Self::Font(v) => v.name(),
            Self::Frame(v) => v.name(),
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.group().visibility()
    }

    pub fn keyword(&self) -> &'static str {
        self.visibility().keyword()
    }

    pub fn value(&self) -> String {
        match self {
            Self::Color(v) => v.color.clone(),
            Self::Text(v) => format!("\"{}\"", v.text),
            Self::Font(v) => v.value(),
            Self::Frame(_) => ".zero".to_string(),
        }
    }

    /// The declaration for this variable followed by any companions.
    pub fn declarations(&self) -> Vec<Declaration> {
        let group = self.group().name().to_string();
        let visibility = self.visibility();
        let mut decls = vec![Declaration {
            group: group.clone(),
            name: self.name(),
            type_name: self.type_name().to_string(),
            value: self.value(),
            kind: self.kind(),
            visibility,
        }];

        if let Self::Text(text) = self {
            decls.push(Declaration {
                group: group.clone(),
                name: text.attributed_name(),
                type_name: "NSAttributedString?".to_string(),
                value: "nil".to_string(),
                kind: VariableKind::Text,
                visibility,
            });
            decls.push(Declaration {
                group,
                name: text.frame_name(),
                type_name: "CGRect".to_string(),
                value: ".zero".to_string(),
                kind: VariableKind::Frame,
                visibility,
            });
        }

        decls
    }
}

impl From<ColorVariable> for Variable {
    fn from(v: ColorVariable) -> Self {
        Self::Color(v)
    }
}

impl From<TextVariable> for Variable {
    fn from(v: TextVariable) -> Self {
        Self::Text(v)
    }
}

impl From<FontVariable> for Variable {
    fn from(v: FontVariable) -> Self {
        Self::Font(v)
    }
}

impl From<FrameVariable> for Variable {
    fn from(v: FrameVariable) -> Self {
        Self::Frame(v)
    }
}

/// A declaration emitted into the generated type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The design-layer name the declaration was derived from.
    pub group: String,
    pub name: String,
    pub type_name: String,
    pub value: String,
    pub kind: VariableKind,
    pub visibility: Visibility,
}

impl Declaration {
    /// The Swift stored-property line, indented for a type body.
    pub fn swift_line(&self) -> String {
        format!(
            "    {} {}: {} = {}",
            self.visibility.keyword(),
            self.name,
            self.type_name,
            self.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_follows_leading_underscore() {
        for kind in [ColorType::Stroke, ColorType::Fill, ColorType::Text] {
            let public = ColorVariable::new(Group::new("Dot"), "c", kind);
            let private = ColorVariable::new(Group::new("_Dot"), "c", kind);
            assert_eq!(Variable::from(public).keyword(), "public var");
            assert_eq!(Variable::from(private).keyword(), "let");
        }
        assert_eq!(Visibility::of("Dot_"), Visibility::Public);
    }

    #[test]
    fn color_names_depend_on_type() {
        let g = Group::new("_Triangle");
        assert_eq!(ColorVariable::new(g.clone(), "c", ColorType::Fill).name(), "triangleFillColor");
        assert_eq!(ColorVariable::new(g.clone(), "c", ColorType::Stroke).name(), "triangleStrokeColor");
        assert_eq!(ColorVariable::new(g, "c", ColorType::Text).name(), "triangleTextColor");
    }

    #[test]
    fn font_falls_back_to_system_font() {
        let font = FontVariable::new(Group::new("Label2"), r#"UIFont(name: "HelveticaNeue", size: 11)!"#);
        assert_eq!(font.font_size(), Some(11.0));
        assert_eq!(
            font.value(),
            r#"UIFont(name: "HelveticaNeue", size: 11) ?? UIFont.systemFont(ofSize: 11.0)"#
        );

        let fractional = FontVariable::new(Group::new("Title"), r#"UIFont(name: "Avenir", size: 13.5)!"#);
        assert!(fractional.value().ends_with("UIFont.systemFont(ofSize: 13.5)"));
    }

    #[test]
    fn font_without_size_is_kept_verbatim() {
        let font = FontVariable::new(Group::new("Label"), "UIFont.boldSystemFont(ofSize: UIFont.labelFontSize)");
        assert_eq!(font.font_size(), None);
        assert_eq!(font.value(), font.text);
    }

    #[test]
    fn text_declares_companions() {
        let text = Variable::from(TextVariable::new(Group::new("Label2"), "circle"));
        let lines: Vec<_> = text.declarations().iter().map(Declaration::swift_line).collect();
        assert_eq!(
            lines,
            vec![
                r#"    public var label2Text: String = "circle""#,
                "    public var label2AttributedText: NSAttributedString? = nil",
                "    public var label2Frame: CGRect = .zero",
            ]
        );
    }

    #[test]
    fn frame_uses_code_name_of_group() {
        let frame = FrameVariable::new(Group::new("Dot"));
        assert_eq!(frame.group_variable_name, "dot");
        assert_eq!(frame.name(), "dotFrame");
        assert_eq!(Variable::from(frame).value(), ".zero");
    }
}
