//! Differential coverage: documents inside the dialect shared with
//! `serde_json` must agree with it on both acceptance and decoded values,
//! and the intentional divergences must stay exactly where they are.

use jsontree::{Kind, NodeId, Tree};
use serde_json::Value;

fn assert_same(tree: &Tree, id: NodeId, value: &Value) {
    match value {
        Value::Null => assert_eq!(tree.kind(id), Kind::Null),
        Value::Bool(true) => assert_eq!(tree.kind(id), Kind::True),
        Value::Bool(false) => assert_eq!(tree.kind(id), Kind::False),
        Value::Number(number) => {
            assert_eq!(tree.kind(id), Kind::Number);
            assert_eq!(tree.number(id), number.as_f64());
        }
        Value::String(text) => {
            assert_eq!(tree.kind(id), Kind::String);
            assert_eq!(tree.string(id), Some(text.as_str()));
        }
        Value::Array(items) => {
            assert_eq!(tree.kind(id), Kind::Array);
            assert_eq!(tree.child_count(id), items.len());
            for (index, item) in items.iter().enumerate() {
                assert_same(tree, tree.array_element(id, index).unwrap(), item);
            }
        }
        Value::Object(members) => {
            assert_eq!(tree.kind(id), Kind::Object);
            assert_eq!(tree.child_count(id), members.len());
            for (index, (key, member)) in members.iter().enumerate() {
                let child = tree.object_element(id, index).unwrap();
                assert_eq!(tree.object_key(child), Some(key.as_str()));
                assert_same(tree, child, member);
            }
        }
    }
}

fn assert_parity(input: &str) {
    let tree =
        jsontree::parse(input).unwrap_or_else(|err| panic!("rejected {input:?}: {err}"));
    let value: Value = serde_json::from_str(input)
        .unwrap_or_else(|err| panic!("serde_json rejected {input:?}: {err}"));
    assert_same(&tree, tree.root(), &value);
}

#[test]
fn corpus_matches_serde_json() {
    let corpus = [
        "null",
        "true",
        "false",
        "0",
        "-12.5e3",
        "1.0000000000000002",
        r#""hello \"world\"""#,
        r#""\/ \b \f \n \r \t""#,
        r#""π façade 🚪""#,
        "[ ]",
        "[1,2,3]",
        r#"[1,2,3,{"x":true}]"#,
        r#"{"a":1,"b":"ok"}"#,
        r#"{"nested":{"arr":[{"k":"v"}]}}"#,
        r#"{ "mixed" : [ null , false , true , 123 , "abc" ] }"#,
        "  [ 1 ,\t2 ,\r\n 3 ]  ",
        r#"{"":[{}]}"#,
    ];
    for input in corpus {
        assert_parity(input);
    }
}

#[test]
fn rejections_match_serde_json() {
    let corpus = [
        "",
        "tru",
        "nulll",
        "[1,2",
        "[1,]",
        "[1 2]",
        "{\"a\":1",
        "{\"a\" 1}",
        "{\"a\":1,}",
        "{'a':1}",
        "\"abc",
        "\"a\nb\"",
        "\"\\x61\"",
        "123 garbage",
        "+1",
        ".5",
        "1e309",
    ];
    for input in corpus {
        assert!(jsontree::parse(input).is_err(), "accepted {input:?}");
        assert!(
            serde_json::from_str::<Value>(input).is_err(),
            "serde_json accepted {input:?}"
        );
    }
}

#[test]
fn dialect_divergences_are_intentional() {
    // strtod-style number spans that the strict RFC grammar refuses
    for (input, expected) in [("01", 1.0), ("1.", 1.0), ("1.e3", 1000.0)] {
        let tree = jsontree::parse(input).unwrap();
        assert_eq!(tree.number(tree.root()), Some(expected), "input: {input:?}");
        assert!(serde_json::from_str::<Value>(input).is_err());
    }

    // \uXXXX escapes are outside this parser's dialect
    assert!(jsontree::parse(r#""\u0041""#).is_err());
    assert!(serde_json::from_str::<Value>(r#""\u0041""#).is_ok());

    // no recursion limit on this side
    let depth = 256;
    let mut text = String::new();
    for _ in 0..depth {
        text.push('[');
    }
    text.push('0');
    for _ in 0..depth {
        text.push(']');
    }
    assert!(jsontree::parse(&text).is_ok());
    assert!(serde_json::from_str::<Value>(&text).is_err());
}
