//! Property-based invariant tests for the editor.
//!
//! 1. Ids stay unique under any command sequence
//! 2. Rejected commands leave state and history untouched
//! 3. Undo is the inverse of a successful mutation, redo re-applies it
//! 4. History never exceeds its capacity
//! 5. Duplicates never share an id with anything already in the tree

use pagesmith_editor::{Editor, EditorConfig, Mutation, NodeId, StyleValue};
use pagesmith_model::validate;
use proptest::prelude::*;
use std::collections::HashSet;

// ── Strategies ──────────────────────────────────────────────────────────

const KINDS: &[&str] = &[
    "text", "heading", "button", "image", "div", "card", "grid", "section", "navbar", "faq",
    "carousel",
];

/// Commands with node references expressed as indices into the current
/// pre-order id list, so they stay meaningful as the tree changes
#[derive(Debug, Clone)]
enum Op {
    Add(usize, usize, Option<usize>),
    Move(usize, usize, Option<usize>),
    Style(usize, u16),
    Content(usize, String),
    Delete(usize),
    Duplicate(usize),
    Reset(usize),
    Select(usize),
    Undo,
    Redo,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..KINDS.len(), any::<usize>(), proptest::option::of(0usize..6))
            .prop_map(|(k, t, i)| Op::Add(k, t, i)),
        2 => (any::<usize>(), any::<usize>(), proptest::option::of(0usize..6))
            .prop_map(|(n, t, i)| Op::Move(n, t, i)),
        1 => (any::<usize>(), 0u16..500).prop_map(|(n, v)| Op::Style(n, v)),
        1 => (any::<usize>(), "[a-z<>&\" ]{0,12}").prop_map(|(n, s)| Op::Content(n, s)),
        1 => any::<usize>().prop_map(Op::Delete),
        1 => any::<usize>().prop_map(Op::Duplicate),
        1 => any::<usize>().prop_map(Op::Reset),
        1 => any::<usize>().prop_map(Op::Select),
        1 => Just(Op::Undo),
        1 => Just(Op::Redo),
    ]
}

fn pick(editor: &Editor, n: usize) -> NodeId {
    let ids = editor.root().collect_ids();
    ids[n % ids.len()].clone()
}

fn to_mutation(editor: &Editor, op: &Op) -> Option<Mutation> {
    Some(match op {
        Op::Add(kind, target, index) => Mutation::AddComponent {
            kind: KINDS[*kind].to_string(),
            target_id: pick(editor, *target),
            index: *index,
        },
        Op::Move(node, target, index) => Mutation::MoveComponent {
            node_id: pick(editor, *node),
            target_id: pick(editor, *target),
            index: *index,
        },
        Op::Style(node, value) => Mutation::UpdateStyle {
            node_id: pick(editor, *node),
            property: "padding".into(),
            value: StyleValue::Number(f64::from(*value)),
        },
        Op::Content(node, text) => Mutation::UpdateContent {
            node_id: pick(editor, *node),
            content: text.clone(),
        },
        Op::Delete(node) => Mutation::DeleteComponent {
            node_id: pick(editor, *node),
        },
        Op::Duplicate(node) => Mutation::DuplicateComponent {
            node_id: pick(editor, *node),
        },
        Op::Reset(node) => Mutation::ResetComponent {
            node_id: pick(editor, *node),
        },
        Op::Select(_) | Op::Undo | Op::Redo => return None,
    })
}

fn run(editor: &mut Editor, op: &Op) {
    match op {
        Op::Select(node) => {
            let id = pick(editor, *node);
            editor.select(Some(id));
        }
        Op::Undo => {
            let _ = editor.undo();
        }
        Op::Redo => {
            let _ = editor.redo();
        }
        other => {
            if let Some(mutation) = to_mutation(editor, other) {
                let _ = editor.apply(mutation);
            }
        }
    }
}

fn assert_unique_ids(editor: &Editor) -> Result<(), TestCaseError> {
    let ids = editor.root().collect_ids();
    let unique: HashSet<_> = ids.iter().collect();
    prop_assert_eq!(unique.len(), ids.len(), "duplicate id in tree");
    prop_assert!(validate(editor.root()).is_ok());
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
// 1. Unique ids, valid tree, resolvable selection
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ids_stay_unique(ops in proptest::collection::vec(op_strategy(), 1..40)) {
        let mut editor = Editor::new();
        for op in &ops {
            run(&mut editor, op);
            assert_unique_ids(&editor)?;

            if let Some(selected) = editor.selected_id() {
                prop_assert!(editor.root().contains(selected.as_str()));
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 2 + 3. Rejection is a no-op; undo/redo are inverses
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn undo_inverts_and_rejection_is_noop(
        setup in proptest::collection::vec(op_strategy(), 0..20),
        op in op_strategy(),
    ) {
        let mut editor = Editor::new();
        for step in &setup {
            run(&mut editor, step);
        }

        let Some(mutation) = to_mutation(&editor, &op) else {
            return Ok(());
        };

        let before = editor.state().clone();
        let levels = editor.history().undo_levels();

        match editor.apply(mutation) {
            Ok(_) => {
                let after = editor.state().clone();
                prop_assert!(editor.undo().is_ok());
                prop_assert_eq!(editor.state(), &before);
                prop_assert!(editor.redo().is_ok());
                prop_assert_eq!(editor.state(), &after);
            }
            Err(_) => {
                prop_assert_eq!(editor.state(), &before);
                prop_assert_eq!(editor.history().undo_levels(), levels);
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4. History bound
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn history_is_bounded(capacity in 1usize..12, extra in 0usize..12) {
        let config = EditorConfig {
            history_capacity: capacity,
            ..EditorConfig::default()
        };
        let mut editor = Editor::with_config(config);

        for _ in 0..capacity + extra {
            editor.add_component("text", "root", None).unwrap();
            prop_assert!(editor.history().undo_levels() <= capacity);
        }
        prop_assert_eq!(editor.history().undo_levels(), capacity);

        // FIFO: only the newest `capacity` adds can be undone
        while editor.undo().is_ok() {}
        prop_assert_eq!(editor.root().children.len(), extra);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5. Duplicate freshness
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn duplicate_ids_are_fresh(kind in 0..KINDS.len()) {
        let mut editor = Editor::new();
        let original = editor.add_component(KINDS[kind], "root", None).unwrap().created.unwrap();
        let before: HashSet<NodeId> = editor.root().collect_ids().into_iter().collect();

        let copy = editor.duplicate_component(original.clone()).unwrap().created.unwrap();
        let copy_ids = editor.root().find_node(copy.as_str()).unwrap().collect_ids();

        prop_assert_eq!(
            copy_ids.len(),
            editor.root().find_node(original.as_str()).unwrap().subtree_size()
        );
        for id in copy_ids {
            prop_assert!(!before.contains(&id), "copy reused id {}", id);
        }
    }
}
