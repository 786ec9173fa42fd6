// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! The tree structure behind widget and theme files.
//!
//! A file is a list of properties and sections:
//!
//! ```text
//! // Line comment
//! Button."Ok" {
//!     Position = (10, 20);
//!     Text = "Ok";
//!
//!     Renderer {
//!         TextColor = #FFFFFF; /* block comment */
//!     }
//! }
//! ```
//!
//! Values are kept as raw text; they are interpreted by whoever consumes the node.

use std::fmt::Write as _;

/// How deep sections may be nested.
pub const MAX_NESTING_DEPTH: usize = 128;

/// An error found while parsing a file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    /// The line (starting at 1) where the error was found.
    pub line: usize,
    /// What went wrong.
    pub message: String,
}

/// A section of a widget or theme file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataNode {
    /// The text before the opening brace, e.g. `Button."Ok"`. Empty for the document root.
    pub header: String,
    /// Key and raw value pairs, in file order.
    pub properties: Vec<(String, String)>,
    /// Nested sections, in file order.
    pub children: Vec<DataNode>,
    /// The line the section starts on. Zero for nodes not created by the parser.
    pub line: usize,
}

impl DataNode {
    /// Create an empty node with the given header.
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ..Self::default()
        }
    }

    /// Parse a whole document. The returned node is the document root: it has
    /// an empty header and holds the top-level properties and sections.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut parser = Parser {
            chars: text.chars().collect(),
            pos: 0,
            line: 1,
        };
        let mut root = Self::default();
        parser.parse_body(&mut root, 0)?;
        Ok(root)
    }

    /// Get the raw value of a property, comparing keys case-insensitively.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }

    /// Get a child section by header, comparing case-insensitively.
    pub fn child(&self, header: &str) -> Option<&Self> {
        self.children
            .iter()
            .find(|child| child.header.eq_ignore_ascii_case(header))
    }

    /// Append a property.
    pub fn push_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.push((key.into(), value.into()));
    }

    /// Write the node as text.
    ///
    /// For a document root (empty header), only its contents are written.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        if self.header.is_empty() {
            self.write_body(&mut out, 0);
        } else {
            self.write_section(&mut out, 0);
        }
        out
    }

    fn write_section(&self, out: &mut String, depth: usize) {
        let indent = "    ".repeat(depth);
        let _ = writeln!(out, "{indent}{} {{", self.header);
        self.write_body(out, depth + 1);
        let _ = writeln!(out, "{indent}}}");
    }

    fn write_body(&self, out: &mut String, depth: usize) {
        let indent = "    ".repeat(depth);
        for (key, value) in &self.properties {
            let _ = writeln!(out, "{indent}{key} = {value};");
        }
        for (index, child) in self.children.iter().enumerate() {
            if index > 0 || !self.properties.is_empty() {
                out.push('\n');
            }
            child.write_section(out, depth);
        }
    }
}

/// Split a widget header like `Button."Ok"` into its type and name.
///
/// The name may be quoted or bare, and is empty if there is none.
pub fn split_header(header: &str) -> Result<(String, String), ParseError> {
    let header = header.trim();
    let (widget_type, name) = match header.split_once('.') {
        Some((widget_type, name)) => (widget_type.trim(), name.trim()),
        None => (header, ""),
    };
    let bad_header = || ParseError {
        line: 0,
        message: format!("invalid section header '{header}'"),
    };
    if widget_type.is_empty() || widget_type.contains(char::is_whitespace) {
        return Err(bad_header());
    }
    let name = crate::file::unquote_string(name).map_err(|_| bad_header())?;
    Ok((widget_type.to_string(), name))
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_second(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError {
            line: self.line,
            message: message.into(),
        }
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), ParseError> {
        loop {
            match (self.peek(), self.peek_second()) {
                (Some(c), _) if c.is_whitespace() => {
                    self.bump();
                }
                (Some('/'), Some('/')) => {
                    while let Some(c) = self.bump() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                (Some('/'), Some('*')) => {
                    let start_line = self.line;
                    self.bump();
                    self.bump();
                    loop {
                        match (self.peek(), self.peek_second()) {
                            (Some('*'), Some('/')) => {
                                self.bump();
                                self.bump();
                                break;
                            }
                            (Some(_), _) => {
                                self.bump();
                            }
                            (None, _) => {
                                return Err(ParseError {
                                    line: start_line,
                                    message: "unterminated block comment".into(),
                                });
                            }
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Read raw text until one of `stops` is found outside of quotes.
    /// The stop character is not consumed.
    fn read_until(&mut self, stops: &[char]) -> Result<String, ParseError> {
        let mut out = String::new();
        let mut in_quotes = false;
        let start_line = self.line;
        while let Some(c) = self.peek() {
            if !in_quotes && stops.contains(&c) {
                break;
            }
            if in_quotes && c == '\n' {
                return Err(self.error("unterminated string"));
            }
            self.bump();
            out.push(c);
            if c == '"' {
                in_quotes = !in_quotes;
            } else if c == '\\' && in_quotes {
                match self.bump() {
                    Some(escaped) => out.push(escaped),
                    None => break,
                }
            }
        }
        if in_quotes {
            return Err(ParseError {
                line: start_line,
                message: "unterminated string".into(),
            });
        }
        Ok(out.trim().to_string())
    }

    /// Parse the content of `node`, which is `depth` sections deep (the root is 0).
    fn parse_body(&mut self, node: &mut DataNode, depth: usize) -> Result<(), ParseError> {
        let nested = depth > 0;
        loop {
            self.skip_whitespace_and_comments()?;
            match self.peek() {
                None if nested => {
                    return Err(self.error(format!("missing '}}' to close '{}'", node.header)));
                }
                None => return Ok(()),
                Some('}') if nested => {
                    self.bump();
                    return Ok(());
                }
                Some('}') => return Err(self.error("unexpected '}'")),
                Some(_) => {}
            }

            let line = self.line;
            let key = self.read_until(&['{', '=', ';', '}'])?;
            if key.is_empty() {
                return Err(self.error("expected a property or a section"));
            }
            match self.peek() {
                Some('{') => {
                    if depth >= MAX_NESTING_DEPTH {
                        return Err(ParseError {
                            line,
                            message: format!(
                                "'{key}' is nested more than {MAX_NESTING_DEPTH} sections deep"
                            ),
                        });
                    }
                    self.bump();
                    let mut child = DataNode::new(key);
                    child.line = line;
                    self.parse_body(&mut child, depth + 1)?;
                    node.children.push(child);
                }
                Some('=') => {
                    self.bump();
                    let value = self.read_until(&[';', '{', '}'])?;
                    if self.peek() != Some(';') {
                        return Err(self.error(format!("expected ';' after the value of '{key}'")));
                    }
                    self.bump();
                    if value.is_empty() {
                        return Err(self.error(format!("missing value for '{key}'")));
                    }
                    if node.property(&key).is_some() {
                        return Err(ParseError {
                            line,
                            message: format!("property '{key}' is set twice"),
                        });
                    }
                    node.properties.push((key, value));
                }
                _ => return Err(self.error(format!("expected '=' or '{{' after '{key}'"))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"
// A window
Panel."Main Panel" {
    Size = (200, 100);
    /* multi
       line */
    Button.Ok {
        Text = "Say \"hi\"; then {leave}";
        Renderer {
            TextColor = #FFF;
        }
    }
}
Label { Text = "x"; }
"#;

    #[test]
    fn parse_document() {
        let root = DataNode::parse(DOCUMENT).unwrap();
        assert_eq!(root.children.len(), 2);

        let panel = &root.children[0];
        assert_eq!(panel.header, r#"Panel."Main Panel""#);
        assert_eq!(panel.line, 3);
        assert_eq!(panel.property("size"), Some("(200, 100)"));

        let button = &panel.children[0];
        assert_eq!(button.property("Text"), Some(r#""Say \"hi\"; then {leave}""#));
        let renderer = button.child("renderer").unwrap();
        assert_eq!(renderer.property("TextColor"), Some("#FFF"));

        assert_eq!(
            split_header(&panel.header).unwrap(),
            ("Panel".to_string(), "Main Panel".to_string())
        );
        assert_eq!(
            split_header(&button.header).unwrap(),
            ("Button".to_string(), "Ok".to_string())
        );
        assert_eq!(
            split_header("Label").unwrap(),
            ("Label".to_string(), String::new())
        );
        assert!(split_header("Bad Type").is_err());
    }

    #[test]
    fn reparse_written_text() {
        let root = DataNode::parse(DOCUMENT).unwrap();
        let text = root.to_text();
        let reparsed = DataNode::parse(&text).unwrap();
        assert_eq!(reparsed.to_text(), text);
        assert_eq!(reparsed.children[0].children[0].properties, root.children[0].children[0].properties);
    }

    #[test]
    fn written_layout() {
        let mut node = DataNode::new("Button");
        node.push_property("Text", "\"Ok\"");
        node.children.push(DataNode::new("Renderer"));
        let mut root = DataNode::default();
        root.children.push(node);
        assert_eq!(
            root.to_text(),
            "Button {\n    Text = \"Ok\";\n\n    Renderer {\n    }\n}\n"
        );
    }

    #[test]
    fn errors_report_lines() {
        let error = DataNode::parse("Button {\n    Text = \"Ok\"\n}").unwrap_err();
        assert_eq!(error.line, 3);

        let error = DataNode::parse("Button {\n  Text = 1;\n").unwrap_err();
        assert_eq!(error.line, 3);
        assert!(error.message.contains("missing '}'"));

        let error = DataNode::parse("\n\n}").unwrap_err();
        assert_eq!(error.line, 3);

        let error = DataNode::parse("Button { Text = \"open; }").unwrap_err();
        assert_eq!(error.message, "unterminated string");

        let error = DataNode::parse("A {\n B = 1;\n B = 2;\n}").unwrap_err();
        assert_eq!(error.line, 3);

        assert!(DataNode::parse("Key;").is_err());
        assert!(DataNode::parse("/* never closed").is_err());
        assert!(DataNode::parse("A { B = ; }").is_err());
    }

    #[test]
    fn nesting_is_limited() {
        let nested = |depth: usize| {
            let mut text = "a {\n".repeat(depth);
            text.push_str(&"}\n".repeat(depth));
            text
        };
        let mut root = DataNode::parse(&nested(MAX_NESTING_DEPTH)).unwrap();
        for _ in 0..MAX_NESTING_DEPTH {
            root = root.children.pop().unwrap();
        }
        assert!(root.children.is_empty());

        let error = DataNode::parse(&nested(MAX_NESTING_DEPTH + 1)).unwrap_err();
        assert_eq!(error.line, MAX_NESTING_DEPTH + 1);

        // Far too deep for the stack if it were parsed recursively.
        let error = DataNode::parse(&"a{".repeat(100_000)).unwrap_err();
        assert_eq!(error.line, 1);
    }
}
