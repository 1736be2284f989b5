use fumes_core::config::types::{Dialect, TranspilerConfig};
use fumes_core::legacy::{LegacyTranspilation, SourcePair, transpile_pair};
use fumes_core::transpiler::Visibility;
use rstest::rstest;

fn tuning_diagram() -> SourcePair {
    SourcePair {
        header: include_str!("fixtures/TuningDiagram.h").to_string(),
        implementation: include_str!("fixtures/TuningDiagram.m").to_string(),
    }
}

fn objc() -> TranspilerConfig {
    TranspilerConfig { dialect: Dialect::ObjC, ..Default::default() }
}

fn converted() -> LegacyTranspilation {
    transpile_pair(&tuning_diagram(), &objc()).expect("objc pair")
}

#[test]
fn no_class_methods_remain() {
    let out = converted();
    assert!(!out.pair.header.contains("+ ("));
    assert!(!out.pair.implementation.lines().any(|l| l.starts_with("+ (")));
    assert!(out.pair.header.contains("- (void)drawCanvas1WithFrame:(CGRect)targetFrame"));
}

#[test]
fn annotated_colors_are_sorted_properties() {
    let out = converted();
    let names: Vec<_> = out.declarations.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        ["pegStrokeColor", "shadowFillColor", "stringBottomFillColor", "stringTopFillColor"]
    );
}

#[rstest]
#[case("pegStrokeColor", Visibility::Public)]
#[case("shadowFillColor", Visibility::Private)]
#[case("stringTopFillColor", Visibility::Public)]
fn property_visibility_follows_label(#[case] name: &str, #[case] expected: Visibility) {
    let out = converted();
    let decl = out.declarations.iter().find(|d| d.name == name).unwrap();
    assert_eq!(decl.visibility, expected);
}

#[test]
fn header_declares_public_properties_only() {
    let header = converted().pair.header;
    assert!(header.contains("@interface TuningDiagram : UIView\n"));
    assert!(header.contains("@property (nonatomic) UIColor *pegStrokeColor;\n"));
    assert!(header.contains("@property (nonatomic) UIColor *stringBottomFillColor;\n"));
    assert!(!header.contains("shadowFillColor"));
}

#[test]
fn private_properties_live_in_class_extension() {
    let m = converted().pair.implementation;
    assert!(m.contains(
        "@interface TuningDiagram()\n@property (nonatomic) UIColor *shadowFillColor;\n\n@end\n"
    ));
    assert!(m.find("@interface TuningDiagram()").unwrap() < m.find("@implementation").unwrap());
}

#[test]
fn annotated_colors_are_replaced() {
    let m = converted().pair.implementation;
    assert!(m.contains("    [self.stringBottomFillColor setFill];\n    [stringBottomPath fill];"));
    assert!(m.contains("    [self.stringTopFillColor setFill];\n    [stringTopPath fill];"));
    assert!(m.contains("    [self.pegStrokeColor setStroke];"));
    assert!(m.contains("    [self.shadowFillColor setFill];"));
    // Only the bracketed idiom is matched.
    assert!(m.contains("    [UIColor.whiteColor setFill];"));
}

#[test]
fn init_with_frame_assigns_initial_colors() {
    let m = converted().pair.implementation;
    assert!(m.contains(
        "    self = [super initWithFrame:frame];
    if (self) {
        self.backgroundColor = [UIColor clearColor];
        _pegStrokeColor = [UIColor colorWithRed: 0.9 green: 0.3 blue: 0.1 alpha: 1];
        _shadowFillColor = [UIColor colorWithWhite: 0 alpha: 0.25];
        _stringBottomFillColor = [UIColor colorWithRed: 0.2 green: 0.2 blue: 0.2 alpha: 1];
        _stringTopFillColor = [UIColor colorWithRed: 0.2 green: 0.2 blue: 0.2 alpha: 1];
    }

    return self;
}"
    ));
}

#[test]
fn draw_rect_and_size_precede_initializer() {
    let m = converted().pair.implementation;
    assert!(m.contains(
        "- (void)drawRect:(CGRect)rect {
    [super drawRect:rect];
    [self drawCanvas1WithFrame:rect resizing:TuningDiagramResizingBehaviorStretch];
}"
    ));
    assert!(m.contains("    CGSize nativeSize = CGSizeMake(240, 120);"));

    let draw = m.find("- (void)drawRect:").unwrap();
    let size = m.find("- (CGSize)sizeThatFits:").unwrap();
    let init = m.find("- (instancetype)initWithFrame:").unwrap();
    assert!(draw < size && size < init);
}

#[test]
fn configured_background_and_base_type() {
    let config = TranspilerConfig {
        base_type: "UIControl".into(),
        background: Some("[UIColor blackColor]".into()),
        ..objc()
    };
    let out = transpile_pair(&tuning_diagram(), &config).unwrap();

    assert!(out.pair.header.contains("@interface TuningDiagram : UIControl\n"));
    assert!(out.pair.header.contains("@property (nonatomic) UIColor *pegStrokeColor;"));
    assert!(out.pair.implementation.contains("        self.backgroundColor = [UIColor blackColor];\n"));
}

#[test]
fn swift_config_is_rejected() {
    assert!(transpile_pair(&tuning_diagram(), &TranspilerConfig::default()).is_none());
}
