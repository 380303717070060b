//! Non-fatal checks over a parsed control tree.

use log::trace;

use wireframe_core::model::{Control, ControlKind, Wireframe};

use crate::error::{Diagnostic, ErrorCode};

/// Returns warnings about parts of the document the renderer will skip.
///
/// - [`E300`](ErrorCode::E300): a control whose `typeID` has no drawing
///   routine (its subtree is not inspected, since it is never drawn)
/// - [`E301`](ErrorCode::E301): a non-group control with nested children
///
/// Controls are identified by their path in the document, e.g.
/// `mockup.controls.control[2].children.controls.control[0]`.
pub fn check(wireframe: &Wireframe) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for (index, control) in wireframe.mockup().controls().iter().enumerate() {
        let path = format!("mockup.controls.control[{index}]");
        check_control(control, &path, &mut diagnostics);
    }
    trace!(warnings = diagnostics.len(); "Checked control tree");
    diagnostics
}

fn check_control(control: &Control, path: &str, diagnostics: &mut Vec<Diagnostic>) {
    match control.kind() {
        ControlKind::Unsupported => {
            diagnostics.push(
                Diagnostic::warning(format!(
                    "unsupported control type `{}` at {path}",
                    control.type_id()
                ))
                .with_code(ErrorCode::E300)
                .with_help("the control and anything nested in it are not drawn"),
            );
        }
        ControlKind::Group => {
            for (index, child) in control.children().iter().enumerate() {
                let child_path = format!("{path}.children.controls.control[{index}]");
                check_control(child, &child_path, diagnostics);
            }
        }
        kind if !control.children().is_empty() => {
            diagnostics.push(
                Diagnostic::warning(format!(
                    "{kind:?} control at {path} has {} nested controls",
                    control.children().len()
                ))
                .with_code(ErrorCode::E301)
                .with_help("only `__group__` controls draw their children"),
            );
        }
        _ => {}
    }
}
