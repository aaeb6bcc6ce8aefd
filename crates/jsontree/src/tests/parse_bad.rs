use alloc::string::ToString;

use rstest::rstest;

use crate::{parse, ErrorKind};

#[rstest]
#[case("", ErrorKind::UnexpectedEndOfInput)]
#[case("  \t\r\n", ErrorKind::UnexpectedEndOfInput)]
#[case("tru", ErrorKind::InvalidLiteral("true"))]
#[case("nul", ErrorKind::InvalidLiteral("null"))]
#[case("falsx", ErrorKind::InvalidLiteral("false"))]
#[case("nulll", ErrorKind::TrailingCharacters)]
#[case("123 garbage", ErrorKind::TrailingCharacters)]
#[case("[] []", ErrorKind::TrailingCharacters)]
#[case("NaN", ErrorKind::InvalidCharacter('N'))]
#[case("Infinity", ErrorKind::InvalidCharacter('I'))]
#[case("+1", ErrorKind::InvalidCharacter('+'))]
#[case(".5", ErrorKind::InvalidCharacter('.'))]
#[case("[", ErrorKind::UnexpectedEndOfInput)]
#[case("[1,2", ErrorKind::UnclosedArray)]
#[case("[1 2]", ErrorKind::UnclosedArray)]
#[case("[\"a\"", ErrorKind::UnclosedArray)]
#[case("[1,]", ErrorKind::InvalidCharacter(']'))]
#[case("{", ErrorKind::UnexpectedEndOfInput)]
#[case("{\"a\":1", ErrorKind::UnclosedObject)]
#[case("{\"a\":1 \"b\":2}", ErrorKind::UnclosedObject)]
#[case("{\"a\" 1}", ErrorKind::ExpectedColon)]
#[case("{\"a\":1,}", ErrorKind::InvalidCharacter('}'))]
#[case("{a:1}", ErrorKind::InvalidCharacter('a'))]
#[case("{'a':1}", ErrorKind::InvalidCharacter('\''))]
#[case("[null, tru]", ErrorKind::InvalidLiteral("true"))]
#[case("{\"a\":[1,}", ErrorKind::InvalidCharacter('}'))]
fn rejections(#[case] input: &str, #[case] expected: ErrorKind) {
    assert_eq!(parse(input).unwrap_err().kind, expected, "input: {input:?}");
}

#[test]
fn errors_carry_line_and_column() {
    let err = parse("x").unwrap_err();
    assert_eq!((err.line, err.column), (1, 1));
    assert_eq!(err.to_string(), "invalid character 'x' at 1:1");

    let err = parse("{\n  \"a\" 1\n}").unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExpectedColon);
    assert_eq!((err.line, err.column), (2, 7));

    let err = parse("[1,\n 2,\n tru]").unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidLiteral("true"));
    assert_eq!((err.line, err.column), (3, 2));
}

#[test]
fn error_columns_count_characters_not_bytes() {
    let err = parse("[\"π\", derp]").unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidCharacter('d'));
    assert_eq!((err.line, err.column), (1, 7));
}

#[test_log::test]
fn failed_parses_yield_no_tree() {
    assert!(parse("[1, 2, \"partially\", {\"built\":").is_err());
    assert!(parse("{\"deep\":[[[[{\"x\":").is_err());
}
