//! Recursive-descent parser: grammar dispatch, scalar and string lexing,
//! and construction of the node arena.

use alloc::{string::String, vec::Vec};

use log::{debug, trace};

use crate::{
    cursor::Cursor,
    error::{ErrorKind, ParseError},
    node::{Kind, Node, NodeId, Payload},
    tree::Tree,
};

/// Parses a complete JSON text into a [`Tree`].
///
/// Leading and trailing whitespace (space, tab, carriage return, line feed)
/// is permitted around the document; any other content after the first
/// complete value is an error. The first grammar violation aborts the whole
/// parse, and a failed parse retains nothing: the partially built arena is
/// dropped before the error is returned.
///
/// The accepted grammar is RFC 8259 without `\uXXXX` escapes, and with
/// strtod-style number lexing (leading zeros and a bare trailing `.` are
/// tolerated; hex and a leading `+` are not). A number whose magnitude
/// overflows to infinity is an error; underflow parses as zero.
///
/// # Errors
///
/// Returns a [`ParseError`] naming the first violation and its position.
///
/// # Examples
///
/// ```
/// use jsontree::{ErrorKind, Kind};
///
/// let tree = jsontree::parse("[1, 2, 3]")?;
/// assert_eq!(tree.kind(tree.root()), Kind::Array);
/// assert_eq!(tree.child_count(tree.root()), 3);
///
/// let err = jsontree::parse("[1, 2").unwrap_err();
/// assert_eq!(err.kind, ErrorKind::UnclosedArray);
/// # Ok::<(), jsontree::ParseError>(())
/// ```
pub fn parse(input: &str) -> Result<Tree, ParseError> {
    trace!("parsing {} bytes of input", input.len());
    let mut parser = Parser::new(input);
    match parser.parse_document() {
        Ok(root) => Ok(Tree::new(parser.nodes, root)),
        Err(err) => {
            debug!("parse failed: {err}");
            Err(err)
        }
    }
}

fn is_digit(byte: Option<u8>) -> bool {
    matches!(byte, Some(b'0'..=b'9'))
}

struct Parser<'a> {
    cursor: Cursor<'a>,
    nodes: Vec<Node>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser {
            cursor: Cursor::new(input),
            nodes: Vec::new(),
        }
    }

    /// Arena allocation; the only place nodes come into existence.
    fn push_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn error(&self, kind: ErrorKind) -> ParseError {
        self.error_at(self.cursor.pos(), kind)
    }

    fn error_at(&self, offset: usize, kind: ErrorKind) -> ParseError {
        let (line, column) = self.cursor.position(offset);
        ParseError { kind, line, column }
    }

    fn invalid_character(&self) -> ParseError {
        let offset = self.cursor.pos();
        self.error_at(offset, ErrorKind::InvalidCharacter(self.cursor.char_at(offset)))
    }

    fn parse_document(&mut self) -> Result<NodeId, ParseError> {
        self.cursor.skip_whitespace();
        let root = self.parse_value()?;
        self.cursor.skip_whitespace();
        if !self.cursor.at_end() {
            return Err(self.error(ErrorKind::TrailingCharacters));
        }
        Ok(root)
    }

    /// Grammar dispatch on the next significant byte; the single recursive
    /// entry point used by the array and object parsers.
    fn parse_value(&mut self) -> Result<NodeId, ParseError> {
        match self.cursor.peek() {
            Some(b'n') => self.parse_literal("null", Kind::Null),
            Some(b't') => self.parse_literal("true", Kind::True),
            Some(b'f') => self.parse_literal("false", Kind::False),
            Some(b'"') => self.parse_string(),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(_) => Err(self.invalid_character()),
            None => Err(self.error(ErrorKind::UnexpectedEndOfInput)),
        }
    }

    fn parse_literal(&mut self, keyword: &'static str, kind: Kind) -> Result<NodeId, ParseError> {
        let start = self.cursor.pos();
        if !self.cursor.eat_keyword(keyword.as_bytes()) {
            return Err(self.error_at(start, ErrorKind::InvalidLiteral(keyword)));
        }
        Ok(self.push_node(Node::new(kind, Payload::None)))
    }

    /// Lexes the maximal strtod-style span and converts it in one go.
    fn parse_number(&mut self) -> Result<NodeId, ParseError> {
        let bytes = self.cursor.bytes();
        let start = self.cursor.pos();
        let mut end = start;
        if bytes.get(end) == Some(&b'-') {
            end += 1;
        }
        if !is_digit(bytes.get(end).copied()) {
            return Err(self.error_at(end, ErrorKind::InvalidNumber));
        }
        while is_digit(bytes.get(end).copied()) {
            end += 1;
        }
        if bytes.get(end) == Some(&b'.') {
            end += 1;
            while is_digit(bytes.get(end).copied()) {
                end += 1;
            }
        }
        if matches!(bytes.get(end).copied(), Some(b'e' | b'E')) {
            // the marker only belongs to the number when digits follow it
            let mut exponent = end + 1;
            if matches!(bytes.get(exponent).copied(), Some(b'+' | b'-')) {
                exponent += 1;
            }
            if is_digit(bytes.get(exponent).copied()) {
                end = exponent;
                while is_digit(bytes.get(end).copied()) {
                    end += 1;
                }
            }
        }
        let value: f64 = self
            .cursor
            .slice(start, end)
            .parse()
            .map_err(|_| self.error_at(start, ErrorKind::InvalidNumber))?;
        if value.is_infinite() {
            return Err(self.error_at(start, ErrorKind::NumberOutOfRange));
        }
        self.cursor.advance_to(end);
        Ok(self.push_node(Node::new(Kind::Number, Payload::Number(value))))
    }

    fn parse_string(&mut self) -> Result<NodeId, ParseError> {
        let text = self.lex_string()?;
        Ok(self.push_node(Node::new(Kind::String, Payload::Text(text))))
    }

    /// Lexes one double-quoted string with the cursor at the opening quote,
    /// leaving the cursor past the closing quote.
    ///
    /// Two passes over the raw span: the first finds the unescaped closing
    /// quote and sizes the output (each escape pair decodes to one byte, so
    /// the count is exact), the second copies literal runs and decodes
    /// escapes into the pre-sized buffer.
    fn lex_string(&mut self) -> Result<String, ParseError> {
        debug_assert_eq!(self.cursor.peek(), Some(b'"'));
        let bytes = self.cursor.bytes();
        let start = self.cursor.pos() + 1;

        let mut decoded_len = 0usize;
        let mut scan = start;
        loop {
            match bytes.get(scan).copied() {
                Some(b'"') => break,
                Some(b'\\') => {
                    scan += 2;
                    decoded_len += 1;
                }
                Some(_) => {
                    scan += 1;
                    decoded_len += 1;
                }
                None => {
                    return Err(self.error(ErrorKind::UnterminatedString));
                }
            }
        }

        let mut out = String::with_capacity(decoded_len);
        let mut pos = start;
        let mut run = start;
        loop {
            match bytes.get(pos).copied() {
                Some(b'"') => {
                    out.push_str(self.cursor.slice(run, pos));
                    self.cursor.advance_to(pos + 1);
                    return Ok(out);
                }
                Some(b'\\') => {
                    out.push_str(self.cursor.slice(run, pos));
                    let decoded = match bytes.get(pos + 1).copied() {
                        Some(b'"') => '"',
                        Some(b'\\') => '\\',
                        Some(b'/') => '/',
                        Some(b'b') => '\u{0008}',
                        Some(b'f') => '\u{000C}',
                        Some(b'n') => '\n',
                        Some(b'r') => '\r',
                        Some(b't') => '\t',
                        Some(_) => {
                            return Err(self.error_at(
                                pos + 1,
                                ErrorKind::InvalidEscape(self.cursor.char_at(pos + 1)),
                            ));
                        }
                        None => {
                            return Err(self.error_at(pos, ErrorKind::UnterminatedString));
                        }
                    };
                    out.push(decoded);
                    pos += 2;
                    run = pos;
                }
                Some(byte) if byte < 0x20 => {
                    return Err(self.error_at(pos, ErrorKind::ControlCharacter(byte)));
                }
                Some(_) => pos += 1,
                None => {
                    return Err(self.error_at(pos, ErrorKind::UnterminatedString));
                }
            }
        }
    }

    /// Appends `child` to `parent`'s ordered child list.
    fn link_child(&mut self, parent: NodeId, tail: &mut Option<NodeId>, child: NodeId) {
        match *tail {
            Some(previous) => self.node_mut(previous).next_sibling = Some(child),
            None => self.node_mut(parent).first_child = Some(child),
        }
        *tail = Some(child);
    }

    fn parse_array(&mut self) -> Result<NodeId, ParseError> {
        self.cursor.eat(b'[');
        let array = self.push_node(Node::new(Kind::Array, Payload::None));
        self.cursor.skip_whitespace();
        if self.cursor.eat(b']') {
            return Ok(array);
        }
        let mut tail = None;
        loop {
            let element = self.parse_value()?;
            self.link_child(array, &mut tail, element);
            self.cursor.skip_whitespace();
            if self.cursor.eat(b',') {
                self.cursor.skip_whitespace();
                continue;
            }
            if self.cursor.eat(b']') {
                return Ok(array);
            }
            return Err(self.error(ErrorKind::UnclosedArray));
        }
    }

    fn parse_object(&mut self) -> Result<NodeId, ParseError> {
        self.cursor.eat(b'{');
        let object = self.push_node(Node::new(Kind::Object, Payload::None));
        self.cursor.skip_whitespace();
        if self.cursor.eat(b'}') {
            return Ok(object);
        }
        let mut tail = None;
        loop {
            match self.cursor.peek() {
                Some(b'"') => {}
                Some(_) => return Err(self.invalid_character()),
                None => return Err(self.error(ErrorKind::UnexpectedEndOfInput)),
            }
            let key = self.lex_string()?;
            self.cursor.skip_whitespace();
            if !self.cursor.eat(b':') {
                return Err(self.error(ErrorKind::ExpectedColon));
            }
            self.cursor.skip_whitespace();
            let member = self.parse_value()?;
            self.node_mut(member).name = Some(key);
            self.link_child(object, &mut tail, member);
            self.cursor.skip_whitespace();
            if self.cursor.eat(b',') {
                self.cursor.skip_whitespace();
                continue;
            }
            if self.cursor.eat(b'}') {
                return Ok(object);
            }
            return Err(self.error(ErrorKind::UnclosedObject));
        }
    }
}
