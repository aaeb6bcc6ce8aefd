#![no_main]

use jsontree::{Kind, NodeId, Tree};
use libfuzzer_sys::fuzz_target;

/// Touch every accessor on every reachable node; none of them may panic on
/// a tree the parser accepted.
fn walk(tree: &Tree, id: NodeId) {
    match tree.kind(id) {
        Kind::Number => {
            assert!(tree.number(id).is_some());
        }
        Kind::String => {
            assert!(tree.string(id).is_some());
        }
        Kind::Array | Kind::Object => {
            for (index, child) in tree.children(id).enumerate() {
                assert_eq!(tree.array_element(id, index), Some(child));
                assert_eq!(tree.object_element(id, index), Some(child));
                let _ = tree.object_key(child);
                walk(tree, child);
            }
        }
        Kind::Null | Kind::True | Kind::False => {}
    }
    let count = tree.child_count(id);
    assert_eq!(tree.array_element(id, count), None);
}

fuzz_target!(|data: &str| {
    if let Ok(tree) = jsontree::parse(data) {
        walk(&tree, tree.root());
    }
});
