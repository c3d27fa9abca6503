use promptlab_engine::{
    DecorationEngine, DocSnapshot, EditorSession, decorate::snapshot, editing::Cmd, recompute,
};

#[test]
fn fixture_headings() {
    assert_fixture("headings");
}

#[test]
fn fixture_bullets() {
    assert_fixture("bullets");
}

#[test]
fn fixture_quote_and_code() {
    assert_fixture("quote_and_code");
}

#[test]
fn fixture_inline() {
    assert_fixture("inline");
}

fn assert_fixture(name: &str) {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    let doc = DocSnapshot::new(&md);

    let set = recompute(&doc);
    snapshot::invariants(&doc, &set);

    let snap = snapshot::normalize(&doc, &set);
    insta::assert_yaml_snapshot!(name, snap);
}

/// Every mark must slice back to text that is present in the document.
#[test]
fn marks_slice_back_to_source() {
    let md = "# Head\n\n- **bold** item\n> `code` quote\n";
    let doc = DocSnapshot::new(md);

    for decoration in recompute(&doc).marks() {
        let text = doc.slice(decoration.span()).unwrap();
        assert!(!text.is_empty());
    }
}

/// Typing a full document through a session ends with the same set a fresh
/// recompute produces.
#[test]
fn session_edits_converge_with_fresh_recompute() {
    let engine = DecorationEngine::default();
    let mut session = EditorSession::with_engine(engine.clone(), "");

    let mut at = 0;
    for chunk in ["# Plan\n", "- step *one*\n", "```\n# not a heading\n```\n"] {
        session
            .edit(Cmd::InsertText {
                at,
                text: chunk.to_string(),
            })
            .unwrap();
        at += chunk.len();
    }

    let doc = session.snapshot();
    assert_eq!(session.decorations(), &engine.recompute(&doc));
    assert!(session.is_dirty());
    snapshot::invariants(&doc, session.decorations());
}
