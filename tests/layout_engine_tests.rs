//! Integration tests for LayoutEngine mutations.

use par_workbench::content::{CatalogRegistry, ContentMeta};
use par_workbench::drop_zone::{DropZone, classify_drop};
use par_workbench::layout::{
    LayoutEngine, LayoutError, LayoutNode, Orientation, PaneId, SplitPosition, Target,
};

fn registry() -> CatalogRegistry {
    let mut registry = CatalogRegistry::new();
    for (id, title) in [
        ("fileA", "a.rs"),
        ("fileB", "b.rs"),
        ("fileC", "c.rs"),
        ("fileD", "d.rs"),
        ("fileE", "e.rs"),
    ] {
        registry.insert(id, ContentMeta::new(title, "code"));
    }
    registry
}

fn assert_valid(engine: &LayoutEngine) {
    if let Err(violation) = engine.check_invariants() {
        panic!("invalid layout: {}\n{}", violation, engine.root());
    }
}

fn tab_ids(engine: &LayoutEngine, pane_id: PaneId) -> Vec<String> {
    engine
        .get_pane(pane_id)
        .expect("pane exists")
        .tabs()
        .iter()
        .map(|tab| tab.id.clone())
        .collect()
}

/// Pane 1 holds fileA, split to the right with fileB in the new pane
fn two_pane_engine(registry: &CatalogRegistry) -> (LayoutEngine, PaneId) {
    let mut engine = LayoutEngine::new();
    engine.open_content(registry, 1, "fileA").unwrap();
    let right = engine
        .split_pane(registry, 1, "fileB", Orientation::Vertical, SplitPosition::After, None)
        .unwrap();
    (engine, right)
}

#[test]
fn test_split_creates_splitter_with_new_pane_after() {
    let registry = registry();
    let (engine, right) = two_pane_engine(&registry);

    match engine.root() {
        LayoutNode::Split {
            orientation,
            ratio,
            first,
            second,
            ..
        } => {
            assert_eq!(*orientation, Orientation::Vertical);
            assert_eq!(*ratio, 50.0);
            let left_pane = first.as_pane().expect("first child is a pane");
            assert_eq!(left_pane.id(), 1);
            assert_eq!(left_pane.active_content_id(), Some("fileA"));
            let right_pane = second.as_pane().expect("second child is a pane");
            assert_eq!(right_pane.id(), right);
            assert_eq!(right_pane.active_content_id(), Some("fileB"));
        }
        LayoutNode::Leaf(_) => panic!("expected a splitter at the root"),
    }
    assert_eq!(engine.active_pane_id(), right);
    assert_valid(&engine);
}

#[test]
fn test_split_before_puts_new_pane_first() {
    let registry = registry();
    let mut engine = LayoutEngine::new();
    engine.open_content(&registry, 1, "fileA").unwrap();
    let top = engine
        .split_pane(&registry, 1, "fileB", Orientation::Horizontal, SplitPosition::Before, None)
        .unwrap();

    assert_eq!(engine.root().all_pane_ids(), vec![top, 1]);
    assert_valid(&engine);
}

#[test]
fn test_closing_only_tab_contracts_back_to_single_pane() {
    let registry = registry();
    let (mut engine, right) = two_pane_engine(&registry);

    engine.close_content(right, "fileB").unwrap();

    let pane = engine.root().as_pane().expect("root is a pane again");
    assert_eq!(pane.id(), 1);
    assert_eq!(tab_ids(&engine, 1), vec!["fileA"]);
    assert_eq!(engine.active_pane_id(), 1);
    assert_valid(&engine);
}

#[test]
fn test_drag_to_right_edge_splits_and_moves() {
    let registry = registry();
    let mut engine = LayoutEngine::new();
    // Pane X holds [fileD, fileC] with fileC active
    engine.open_content(&registry, 1, "fileD").unwrap();
    engine.open_content(&registry, 1, "fileC").unwrap();
    let y = engine
        .split_pane(&registry, 1, "fileA", Orientation::Vertical, SplitPosition::After, None)
        .unwrap();

    let zone = classify_drop(0.95 * 400.0, 150.0, 400.0, 300.0, 32.0);
    assert_eq!(zone, DropZone::Right);
    let (orientation, position) = zone.split_params().unwrap();

    let new_pane = engine
        .split_pane(&registry, y, "fileC", orientation, position, Some(1))
        .unwrap();

    assert_eq!(tab_ids(&engine, 1), vec!["fileD"]);
    assert_eq!(
        engine.get_pane(1).unwrap().active_content_id(),
        Some("fileD")
    );
    assert_eq!(tab_ids(&engine, new_pane), vec!["fileC"]);
    assert_eq!(engine.root().all_pane_ids(), vec![1, y, new_pane]);
    assert_eq!(engine.active_pane_id(), new_pane);
    assert_valid(&engine);
}

#[test]
fn test_split_moving_last_tab_removes_source_pane() {
    let registry = registry();
    let (mut engine, right) = two_pane_engine(&registry);

    // Drag fileA (pane 1's only tab) below the right pane
    let bottom = engine
        .split_pane(&registry, right, "fileA", Orientation::Horizontal, SplitPosition::After, Some(1))
        .unwrap();

    assert!(engine.get_pane(1).is_none());
    assert_eq!(engine.root().all_pane_ids(), vec![right, bottom]);
    assert_eq!(engine.active_pane_id(), bottom);
    assert_valid(&engine);
}

#[test]
fn test_split_onto_own_pane_keeps_emptied_source() {
    let registry = registry();
    let mut engine = LayoutEngine::new();
    engine.open_content(&registry, 1, "fileA").unwrap();

    let new_pane = engine
        .split_pane(&registry, 1, "fileA", Orientation::Vertical, SplitPosition::After, Some(1))
        .unwrap();

    assert_eq!(engine.pane_count(), 2);
    assert!(engine.get_pane(1).unwrap().is_empty());
    assert_eq!(engine.get_pane(1).unwrap().active_content_id(), None);
    assert_eq!(tab_ids(&engine, new_pane), vec!["fileA"]);
    assert_valid(&engine);
}

#[test]
fn test_split_with_content_already_in_target_moves_it() {
    let registry = registry();
    let mut engine = LayoutEngine::new();
    engine.open_content(&registry, 1, "fileA").unwrap();
    engine.open_content(&registry, 1, "fileB").unwrap();

    let new_pane = engine
        .split_pane(&registry, 1, "fileB", Orientation::Vertical, SplitPosition::After, None)
        .unwrap();

    assert_eq!(tab_ids(&engine, 1), vec!["fileA"]);
    assert_eq!(engine.get_pane(1).unwrap().active_content_id(), Some("fileA"));
    assert_eq!(tab_ids(&engine, new_pane), vec!["fileB"]);
    assert_eq!(engine.root().panes_containing("fileB"), vec![new_pane]);
    assert_eq!(engine.active_pane_id(), new_pane);
    assert_valid(&engine);
}

#[test]
fn test_split_rejects_source_without_content() {
    let registry = registry();
    let (mut engine, right) = two_pane_engine(&registry);
    let before = engine.snapshot();
    let next_id = engine.next_node_id();

    assert_eq!(
        engine.split_pane(&registry, right, "fileC", Orientation::Vertical, SplitPosition::After, Some(1)),
        Err(LayoutError::InvalidTarget(Target::Content {
            pane_id: 1,
            content_id: "fileC".to_string(),
        }))
    );
    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.next_node_id(), next_id);
    assert_eq!(engine.active_pane_id(), right);
}

#[test]
fn test_close_content_twice_is_rejected() {
    let registry = registry();
    let (mut engine, right) = two_pane_engine(&registry);
    engine.open_content(&registry, right, "fileC").unwrap();

    engine.close_content(right, "fileC").unwrap();
    let after_first = engine.snapshot();
    assert_eq!(
        engine.close_content(right, "fileC"),
        Err(LayoutError::InvalidTarget(Target::Content {
            pane_id: right,
            content_id: "fileC".to_string(),
        }))
    );
    assert_eq!(engine.snapshot(), after_first);

    // Closing the last tab contracts the pane away
    engine.close_content(right, "fileB").unwrap();
    assert!(engine.get_pane(right).is_none());
    let after_contraction = engine.snapshot();
    let active = engine.active_pane_id();
    assert_eq!(
        engine.close_content(right, "fileB"),
        Err(LayoutError::InvalidTarget(Target::Pane(right)))
    );
    assert_eq!(engine.snapshot(), after_contraction);
    assert_eq!(engine.active_pane_id(), active);
    assert_valid(&engine);
}

#[test]
fn test_open_then_close_restores_tree() {
    let registry = registry();
    let (mut engine, right) = two_pane_engine(&registry);
    let before = engine.snapshot();

    engine.open_content(&registry, right, "fileC").unwrap();
    assert_eq!(tab_ids(&engine, right), vec!["fileB", "fileC"]);
    engine.close_content(right, "fileC").unwrap();

    assert_eq!(engine.snapshot(), before);
    assert_valid(&engine);
}

#[test]
fn test_open_then_close_in_empty_root_yields_fresh_empty_pane() {
    let registry = registry();
    let mut engine = LayoutEngine::new();

    engine.open_content(&registry, 1, "fileA").unwrap();
    engine.close_content(1, "fileA").unwrap();

    let pane = engine.root().as_pane().expect("single pane");
    assert!(pane.is_empty());
    assert_ne!(pane.id(), 1);
    assert_eq!(engine.active_pane_id(), pane.id());
    assert_valid(&engine);
}

#[test]
fn test_open_existing_content_reactivates_without_duplicating() {
    let registry = registry();
    let mut engine = LayoutEngine::new();
    engine.open_content(&registry, 1, "fileA").unwrap();
    engine.open_content(&registry, 1, "fileB").unwrap();
    engine.open_content(&registry, 1, "fileA").unwrap();

    assert_eq!(tab_ids(&engine, 1), vec!["fileA", "fileB"]);
    assert_eq!(engine.active_pane().active_content_id(), Some("fileA"));
}

#[test]
fn test_open_in_active_targets_focused_pane() {
    let registry = registry();
    let (mut engine, right) = two_pane_engine(&registry);
    engine.focus_pane(1).unwrap();

    let opened_in = engine.open_in_active(&registry, "fileC").unwrap();
    assert_eq!(opened_in, 1);
    assert_eq!(tab_ids(&engine, 1), vec!["fileA", "fileC"]);
    assert_eq!(tab_ids(&engine, right), vec!["fileB"]);
}

#[test]
fn test_close_active_tab_selects_neighbour() {
    let registry = registry();
    let mut engine = LayoutEngine::new();
    for id in ["fileA", "fileB", "fileC"] {
        engine.open_content(&registry, 1, id).unwrap();
    }
    engine.activate_content(1, "fileB").unwrap();

    engine.close_content(1, "fileB").unwrap();
    assert_eq!(engine.active_pane().active_content_id(), Some("fileA"));

    // Closing the first (active) tab selects the last one
    engine.close_content(1, "fileA").unwrap();
    assert_eq!(engine.active_pane().active_content_id(), Some("fileC"));
    assert_valid(&engine);
}

#[test]
fn test_close_inactive_tab_keeps_active() {
    let registry = registry();
    let mut engine = LayoutEngine::new();
    for id in ["fileA", "fileB", "fileC"] {
        engine.open_content(&registry, 1, id).unwrap();
    }

    engine.close_content(1, "fileA").unwrap();
    assert_eq!(engine.active_pane().active_content_id(), Some("fileC"));
}

#[test]
fn test_reorder_preserves_tab_set() {
    let registry = registry();
    let mut engine = LayoutEngine::new();
    for id in ["fileA", "fileB", "fileC", "fileD"] {
        engine.open_content(&registry, 1, id).unwrap();
    }
    let mut expected = tab_ids(&engine, 1);
    expected.sort();

    for (from, to) in [(0, 3), (2, 0), (1, 100), (3, 3)] {
        engine.reorder_tabs(1, from, to).unwrap();
        let mut ids = tab_ids(&engine, 1);
        ids.sort();
        assert_eq!(ids, expected);
        assert_eq!(engine.active_pane().active_content_id(), Some("fileD"));
    }
}

#[test]
fn test_reorder_clamps_target_index() {
    let registry = registry();
    let mut engine = LayoutEngine::new();
    for id in ["fileA", "fileB", "fileC"] {
        engine.open_content(&registry, 1, id).unwrap();
    }

    engine.reorder_tabs(1, 0, 10).unwrap();
    assert_eq!(tab_ids(&engine, 1), vec!["fileB", "fileC", "fileA"]);
    engine.reorder_tabs(1, 2, 0).unwrap();
    assert_eq!(tab_ids(&engine, 1), vec!["fileA", "fileB", "fileC"]);
}

#[test]
fn test_resize_clamps_ratio() {
    let registry = registry();
    let (mut engine, _) = two_pane_engine(&registry);
    let splitter = engine.root().id();

    assert_eq!(engine.resize_splitter(splitter, -50.0), Ok(5.0));
    assert_eq!(engine.resize_splitter(splitter, 1000.0), Ok(95.0));
    assert_eq!(engine.resize_splitter(splitter, 37.5), Ok(37.5));
    assert_eq!(engine.split_ratio(splitter), Some(37.5));
}

#[test]
fn test_contraction_promotes_sibling_subtree_intact() {
    let registry = registry();
    let (mut engine, right) = two_pane_engine(&registry);
    let bottom = engine
        .split_pane(&registry, right, "fileC", Orientation::Horizontal, SplitPosition::After, None)
        .unwrap();
    let inner = match engine.root() {
        LayoutNode::Split { second, .. } => second.id(),
        LayoutNode::Leaf(_) => panic!("expected a splitter at the root"),
    };
    engine.resize_splitter(inner, 30.0).unwrap();

    // Closing pane 1 replaces the root splitter by the inner one
    engine.close_content(1, "fileA").unwrap();

    assert_eq!(engine.root().id(), inner);
    assert_eq!(engine.split_ratio(inner), Some(30.0));
    assert_eq!(engine.root().all_pane_ids(), vec![right, bottom]);
    assert_eq!(engine.active_pane_id(), bottom);
    assert_valid(&engine);
}

#[test]
fn test_closing_active_pane_focuses_first_pane() {
    let registry = registry();
    let (mut engine, right) = two_pane_engine(&registry);
    assert_eq!(engine.active_pane_id(), right);

    engine.close_pane(right).unwrap();
    assert_eq!(engine.active_pane_id(), 1);
    assert_valid(&engine);
}

#[test]
fn test_move_between_panes_carries_reference() {
    let mut registry = registry();
    let (mut engine, right) = two_pane_engine(&registry);
    engine.open_content(&registry, 1, "fileC").unwrap();
    // The reference travels with the tab even if the registry forgets it
    registry.remove("fileC");

    engine.move_content(&registry, "fileC", Some(1), right).unwrap();

    assert_eq!(tab_ids(&engine, 1), vec!["fileA"]);
    assert_eq!(tab_ids(&engine, right), vec!["fileB", "fileC"]);
    let moved = engine.get_pane(right).unwrap().get_tab("fileC").unwrap();
    assert_eq!(moved.title(), "c.rs");
    assert_eq!(engine.active_pane_id(), right);
    assert_valid(&engine);
}

#[test]
fn test_move_last_tab_removes_source_and_focuses_destination() {
    let registry = registry();
    let (mut engine, right) = two_pane_engine(&registry);
    engine.focus_pane(1).unwrap();

    engine.move_content(&registry, "fileA", Some(1), right).unwrap();

    assert_eq!(engine.pane_count(), 1);
    assert_eq!(engine.root().as_pane().map(|p| p.id()), Some(right));
    assert_eq!(engine.active_pane_id(), right);
    assert_valid(&engine);
}

#[test]
fn test_move_without_source_is_fresh_insertion() {
    let registry = registry();
    let (mut engine, right) = two_pane_engine(&registry);

    engine.move_content(&registry, "fileE", None, 1).unwrap();
    assert_eq!(tab_ids(&engine, 1), vec!["fileA", "fileE"]);
    assert_eq!(tab_ids(&engine, right), vec!["fileB"]);
    assert_eq!(engine.active_pane_id(), 1);
}

#[test]
fn test_move_onto_same_pane_is_noop() {
    let registry = registry();
    let (mut engine, right) = two_pane_engine(&registry);
    let before = engine.snapshot();

    engine.move_content(&registry, "fileB", Some(right), right).unwrap();
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_rejected_operations_leave_layout_untouched() {
    let registry = registry();
    let (mut engine, right) = two_pane_engine(&registry);
    let splitter = engine.root().id();
    let before = engine.snapshot();
    let active = engine.active_pane_id();

    let results = [
        engine.open_content(&registry, 1, "missing"),
        engine.open_content(&registry, 42, "fileC"),
        engine.activate_content(1, "fileB"),
        engine.close_content(1, "fileB"),
        engine.close_content(splitter, "fileA"),
        engine.close_pane(42),
        engine.focus_pane(splitter),
        engine.reorder_tabs(1, 5, 0),
        engine.resize_splitter(1, 40.0).map(|_| ()),
        engine
            .split_pane(&registry, splitter, "fileC", Orientation::Vertical, SplitPosition::After, None)
            .map(|_| ()),
        engine
            .split_pane(&registry, 1, "fileC", Orientation::Vertical, SplitPosition::After, Some(42))
            .map(|_| ()),
        engine
            .split_pane(&registry, 1, "missing", Orientation::Vertical, SplitPosition::After, None)
            .map(|_| ()),
        engine
            .split_pane(&registry, right, "fileC", Orientation::Vertical, SplitPosition::After, Some(1))
            .map(|_| ()),
        engine.move_content(&registry, "fileA", Some(1), 42),
        engine.move_content(&registry, "fileB", Some(1), right),
        engine.move_content(&registry, "missing", None, right),
    ];

    for result in results {
        assert!(result.is_err());
    }
    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.active_pane_id(), active);
}

#[test]
fn test_error_kinds() {
    let registry = registry();
    let mut engine = LayoutEngine::new();

    assert_eq!(
        engine.open_content(&registry, 1, "missing"),
        Err(LayoutError::UnresolvableContent("missing".to_string()))
    );
    assert_eq!(
        engine.close_content(1, "fileA"),
        Err(LayoutError::InvalidTarget(Target::Content {
            pane_id: 1,
            content_id: "fileA".to_string(),
        }))
    );
    assert_eq!(
        engine.reorder_tabs(1, 0, 0),
        Err(LayoutError::InvalidTarget(Target::TabIndex {
            pane_id: 1,
            index: 0,
        }))
    );
    // Content is resolved before the target pane is looked up
    assert_eq!(
        engine.split_pane(&registry, 42, "missing", Orientation::Vertical, SplitPosition::After, None),
        Err(LayoutError::UnresolvableContent("missing".to_string()))
    );
}

#[test]
fn test_invariants_hold_through_long_session() {
    let registry = registry();
    let mut engine = LayoutEngine::new();
    let ids = ["fileA", "fileB", "fileC", "fileD", "fileE"];
    let orientations = [Orientation::Vertical, Orientation::Horizontal];
    let positions = [SplitPosition::After, SplitPosition::Before];

    for step in 0..60usize {
        let panes = engine.root().all_pane_ids();
        let pane = panes[step % panes.len()];
        let content = ids[step % ids.len()];
        let _ = match step % 5 {
            0 | 3 => engine
                .split_pane(
                    &registry,
                    pane,
                    content,
                    orientations[step % 2],
                    positions[(step / 2) % 2],
                    None,
                )
                .map(|_| ()),
            1 => engine.open_content(&registry, pane, content),
            2 => {
                let source = engine
                    .root()
                    .panes_containing(content)
                    .first()
                    .copied();
                engine.move_content(&registry, content, source, pane)
            }
            _ => {
                let active = engine
                    .get_pane(pane)
                    .and_then(|p| p.active_content_id())
                    .map(str::to_string);
                match active {
                    Some(active) => engine.close_content(pane, &active),
                    None => engine.close_pane(pane),
                }
            }
        };
        assert_valid(&engine);
    }
}
