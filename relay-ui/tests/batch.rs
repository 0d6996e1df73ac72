/// Behaviour of whole batches against the in-memory surface

use relay_ui::surface::MemoryElement;
use relay_ui::{ApplyError, Command, CommandApplier, MemorySurface, NodeId, StyleProperty};

fn create(id: u64, kind: &str) -> Command {
    Command::create_node(NodeId(id), kind).unwrap()
}

fn style(id: u64, key: &str, value: &str) -> Command {
    Command::set_style(NodeId(id), key, value).unwrap()
}

fn element(applier: &CommandApplier<MemorySurface>, id: u64) -> &MemoryElement {
    let handle = applier.element(NodeId(id)).expect("node should be registered");
    applier.surface().element(*handle).expect("element should be live")
}

#[test]
fn test_create_then_set_text() {
    let mut applier = CommandApplier::new(MemorySurface::new());

    applier
        .apply_batch(&[create(7, "div"), Command::set_text(NodeId(7), "x")])
        .unwrap();

    assert_eq!(element(&applier, 7).text, "x");
}

#[test]
fn test_delete_evicts_and_later_lookups_fail() {
    let mut applier = CommandApplier::new(MemorySurface::new());
    applier
        .apply_batch(&[create(1, "div"), Command::delete_node(NodeId(1))])
        .unwrap();

    assert!(!applier.contains(NodeId(1)));
    assert!(applier.surface().root_children().is_empty());

    assert_eq!(
        applier.apply(&Command::delete_node(NodeId(1))),
        Err(ApplyError::NodeNotFound(NodeId(1)))
    );
    assert_eq!(
        applier.apply(&style(1, "color", "red")),
        Err(ApplyError::NodeNotFound(NodeId(1)))
    );
}

#[test]
fn test_style_only_touches_target_node() {
    let mut applier = CommandApplier::new(MemorySurface::new());

    let report = applier
        .apply_batch(&[create(1, "div"), create(2, "span"), style(1, "color", "red")])
        .unwrap();

    assert_eq!(report.applied, 3);
    assert!(applier.contains(NodeId(1)));
    assert!(applier.contains(NodeId(2)));
    assert_eq!(element(&applier, 1).style(StyleProperty::Color), Some("red"));
    assert_eq!(element(&applier, 2).style(StyleProperty::Color), None);
    assert_eq!(element(&applier, 2).tag, "span");
}

#[test]
fn test_unknown_command_is_skipped_in_place() {
    let mut applier = CommandApplier::new(MemorySurface::new());

    let report = applier
        .apply_frame(
            r#"[
                {"type": "createNode", "node": 1, "kind": "div"},
                {"type": "setOpacityFancy", "node": 1, "value": 3},
                {"type": "setText", "node": 1, "text": "after"},
                {"type": "createNode", "node": 2, "kind": "p"}
            ]"#,
        )
        .unwrap();

    assert_eq!(report.applied, 3);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].index, 1);
    assert_eq!(report.skipped[0].kind, "setOpacityFancy");
    assert!(report.failures.is_empty());

    assert_eq!(element(&applier, 1).text, "after");
    assert_eq!(element(&applier, 2).tag, "p");
}

#[test]
fn test_repeated_style_is_idempotent() {
    let mut once = CommandApplier::new(MemorySurface::new());
    let mut twice = CommandApplier::new(MemorySurface::new());

    once.apply_batch(&[create(1, "div"), style(1, "color", "red")]).unwrap();
    twice
        .apply_batch(&[
            create(1, "div"),
            style(1, "color", "red"),
            style(1, "color", "red"),
        ])
        .unwrap();

    assert_eq!(once.surface().snapshot(), twice.surface().snapshot());
}

#[test]
fn test_recreate_after_delete_behaves_like_first_create() {
    let mut fresh = CommandApplier::new(MemorySurface::new());
    fresh
        .apply_batch(&[create(1, "div"), Command::set_text(NodeId(1), "hello")])
        .unwrap();

    let mut reused = CommandApplier::new(MemorySurface::new());
    reused
        .apply_batch(&[
            create(1, "span"),
            style(1, "color", "blue"),
            Command::set_text(NodeId(1), "stale"),
            Command::delete_node(NodeId(1)),
            create(1, "div"),
            Command::set_text(NodeId(1), "hello"),
        ])
        .unwrap();

    assert_eq!(reused.len(), 1);
    assert_eq!(fresh.surface().snapshot(), reused.surface().snapshot());
    assert_eq!(element(&reused, 1).style(StyleProperty::Color), None);
}

#[test]
fn test_commands_apply_in_order() {
    let mut applier = CommandApplier::new(MemorySurface::new());

    applier
        .apply_batch(&[
            create(1, "div"),
            Command::set_text(NodeId(1), "first"),
            Command::set_text(NodeId(1), "second"),
            create(2, "div"),
            create(3, "div"),
        ])
        .unwrap();

    assert_eq!(element(&applier, 1).text, "second");

    let root: Vec<_> = applier.surface().root_children().to_vec();
    let ids: Vec<_> = [1, 2, 3]
        .iter()
        .map(|&id| *applier.element(NodeId(id)).unwrap())
        .collect();
    assert_eq!(root, ids);
}

#[test]
fn test_independent_appliers_do_not_share_state() {
    let mut left = CommandApplier::new(MemorySurface::new());
    let right = CommandApplier::new(MemorySurface::new());

    left.apply(&create(1, "div")).unwrap();

    assert!(left.contains(NodeId(1)));
    assert!(!right.contains(NodeId(1)));
    assert!(right.surface().root_children().is_empty());
}
