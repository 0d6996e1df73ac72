/// Frames produced by the host buffer, consumed by the applier

use relay_ui::command::{FrameEntry, decode_frame};
use relay_ui::host::APPLY_FUNCTION;
use relay_ui::style::{Color, Length};
use relay_ui::{
    ApplierConfig, CommandApplier, CommandBuffer, DuplicatePolicy, ElementKind, FailurePolicy,
    Layout, MemorySurface, StyleProperty,
};

/// Strip the `__applyCommands(...)` call around a frame
fn frame_of(script: &str) -> &str {
    script
        .strip_prefix(APPLY_FUNCTION)
        .and_then(|rest| rest.strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
        .expect("script should call the apply function")
}

#[test]
fn test_buffer_script_applies_cleanly() {
    let mut buffer = CommandBuffer::new();
    let title = buffer.create_node(ElementKind::new("h1").unwrap());
    buffer.set_text(title, "Inbox");
    buffer.set_style(title, StyleProperty::FontSize, Length::Rem(2.0));
    buffer.set_style(title, StyleProperty::BackgroundColor, Color::rgba(0, 0, 0, 0.25));
    buffer.set_layout(title, Layout::new(8.0, 8.0, 320.0, 48.0).unwrap());

    let script = buffer.take_script().unwrap().unwrap();
    let mut applier = CommandApplier::new(MemorySurface::new());
    let report = applier.apply_frame(frame_of(&script)).unwrap();

    assert!(report.is_clean());
    assert_eq!(report.applied, 5);
    assert_eq!(
        applier.surface().to_html(),
        concat!(
            "<h1 style=\"background-color: rgba(0, 0, 0, 0.25); box-sizing: border-box; ",
            "font-size: 2rem; height: 48px; left: 8px; position: absolute; top: 8px; ",
            "width: 320px\">Inbox</h1>\n"
        )
    );
}

#[test]
fn test_buffer_output_decodes_to_same_commands() {
    let mut buffer = CommandBuffer::new();
    let a = buffer.create_node(ElementKind::new("div").unwrap());
    let b = buffer.create_node(ElementKind::new("span").unwrap());
    buffer.set_style(a, StyleProperty::Opacity, relay_ui::StyleValue::Number(0.5));
    buffer.delete_node(b);

    let expected = buffer.commands().to_vec();
    let script = buffer.take_script().unwrap().unwrap();

    let decoded: Vec<_> = decode_frame(frame_of(&script))
        .unwrap()
        .into_iter()
        .map(|entry| match entry {
            FrameEntry::Command(command) => command,
            other => panic!("unexpected entry {other:?}"),
        })
        .collect();

    assert_eq!(decoded, expected);
}

#[test]
fn test_frames_across_calls_share_registry() {
    let mut applier = CommandApplier::new(MemorySurface::new());

    applier
        .apply_frame(r#"[{"type": "createNode", "node": 3, "kind": "div"}]"#)
        .unwrap();
    applier
        .apply_frame(r#"[{"type": "setText", "node": 3, "text": "later"}]"#)
        .unwrap();

    let handle = *applier.element(relay_ui::NodeId(3)).unwrap();
    assert_eq!(applier.surface().element(handle).unwrap().text, "later");
}

#[test]
fn test_configured_policies_from_json() {
    let config = ApplierConfig::from_json(
        r#"{"duplicate_policy": "replace", "failure_policy": "continue", "log_batches": false}"#,
    )
    .unwrap();
    assert_eq!(config.duplicate_policy, DuplicatePolicy::Replace);
    assert_eq!(config.failure_policy, FailurePolicy::Continue);

    let mut applier = CommandApplier::with_config(MemorySurface::new(), config);
    let report = applier
        .apply_frame(
            r#"[
                {"type": "createNode", "node": 1, "kind": "div"},
                {"type": "createNode", "node": 1, "kind": "section"},
                {"type": "setText", "node": 9, "text": "nobody"},
                {"type": "setStyle", "node": 1, "key": "display", "value": "table"},
                {"type": "setText", "node": 1, "text": "kept going"}
            ]"#,
        )
        .unwrap();

    assert_eq!(report.applied, 3);
    let failed: Vec<usize> = report.failures.iter().map(|f| f.index).collect();
    assert_eq!(failed, vec![2, 3]);

    assert_eq!(
        applier.surface().to_html(),
        "<section style=\"box-sizing: border-box; position: absolute\">kept going</section>\n"
    );
}
