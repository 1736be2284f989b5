//! Frame variables for filled layers.

use tracing::debug;

use crate::transpiler::variable::{ColorType, ColorVariable, FrameVariable};

/// One frame variable per fill color, in color order.
pub fn derive_frames(colors: &[ColorVariable]) -> Vec<FrameVariable> {
    colors
        .iter()
        .filter(|color| color.color_type == ColorType::Fill)
        .map(|color| FrameVariable::new(color.group.clone()))
        .collect()
}

/// Assign each frame right after its layer's `fill()` call.
///
/// The assignment converts the path bounds from drawing-context space into
/// view space. Frames whose layer is never filled keep their zero default.
pub fn insert_frame_assignments(source: &str, frames: &[FrameVariable]) -> String {
    let calls: Vec<String> =
        frames.iter().map(|f| format!(" {}.fill()", f.group_variable_name)).collect();

    let mut lines = Vec::new();
    for line in source.lines() {
        lines.push(line.to_string());

        if let Some((frame, _)) =
            frames.iter().zip(&calls).find(|(_, call)| line.contains(call.as_str()))
        {
            debug!(name = %frame.name(), "inserted frame assignment");
            lines.push(format!(
                "        {} = convertRectToViewSpace({}.bounds, context: context)",
                frame.name(),
                frame.group_variable_name
            ));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transpiler::variable::Group;

    fn color(group: &str, color_type: ColorType) -> ColorVariable {
        ColorVariable::new(Group::new(group), "UIColor.white", color_type)
    }

    #[test]
    fn only_fill_colors_produce_frames() {
        let colors = vec![
            color("Dot", ColorType::Fill),
            color("Dot", ColorType::Stroke),
            color("Label", ColorType::Text),
            color("_Triangle", ColorType::Fill),
        ];

        let frames = derive_frames(&colors);
        let names: Vec<_> = frames.iter().map(FrameVariable::name).collect();
        assert_eq!(names, ["dotFrame", "triangleFrame"]);
        assert_eq!(frames[1].group_variable_name, "_Triangle");
    }

    #[test]
    fn assignment_follows_fill_call() {
        let frames = derive_frames(&[color("Dot", ColorType::Fill)]);
        let src = "        self.dotFillColor.setFill()\n        dot.fill()\n        dot.stroke()";

        let out = insert_frame_assignments(src, &frames);
        assert_eq!(
            out,
            "        self.dotFillColor.setFill()\n        dot.fill()\n        dotFrame = convertRectToViewSpace(dot.bounds, context: context)\n        dot.stroke()"
        );
    }

    #[test]
    fn fill_call_must_be_a_whole_receiver() {
        let frames = derive_frames(&[color("Dot", ColorType::Fill)]);
        let src = "        bigDot.fill()\ndot.fill()";
        assert_eq!(insert_frame_assignments(src, &frames), src);
    }
}
