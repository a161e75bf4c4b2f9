//! project.pbxproj reader
//!
//! Xcode project files are OpenStep-style property lists:
//!
//! ```text
//! // !$*UTF8*$!
//! {
//!     objects = {
//!         433F87D62788F34500693368 /* XCRemoteSwiftPackageReference "rust-components-swift" */ = {
//!             isa = XCRemoteSwiftPackageReference;
//!             requirement = {
//!                 kind = exactVersion;
//!                 version = 119.0.20230814050322;
//!             };
//!         };
//!     };
//! }
//! ```
//!
//! Only reading is supported. Updates go through token substitution so the
//! file's formatting and comments are left untouched.

use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::parser::error::ReadError;
use crate::parser::types::MinVersionLookup;

/// A property list value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    Array(Vec<Value>),
    Dict(IndexMap<String, Value>),
}

impl Value {
    /// Look up a key if this value is a dictionary
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Dict(dict) => dict.get(key),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Read the version requirement of the package reference `object_id`
///
/// Only `requirement.version` counts: range requirements (`minimumVersion`)
/// and empty versions are `NotFound`. Failures are logged and returned as
/// lookup variants.
pub fn read_min_version(path: &Path, object_id: &str) -> MinVersionLookup {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(source) => {
            let err = ReadError::Io {
                path: path.to_path_buf(),
                source,
            };
            info!("Error reading project minimum version: {}", err);
            return MinVersionLookup::ReadError(err);
        }
    };

    let root = match parse(&content) {
        Ok(root) => root,
        Err(err) => {
            info!("Error reading project minimum version: {}", err);
            return MinVersionLookup::ReadError(err);
        }
    };

    match requirement_version(&root, object_id) {
        Some(version) => {
            debug!("Object {} requires version {}", object_id, version);
            MinVersionLookup::Found(version.to_string())
        }
        None => {
            info!(
                "No version requirement for object {} in {}",
                object_id,
                path.display()
            );
            MinVersionLookup::NotFound
        }
    }
}

/// Resolve a non-empty `objects.<object_id>.requirement.version`
pub fn requirement_version<'a>(root: &'a Value, object_id: &str) -> Option<&'a str> {
    root.get("objects")?
        .get(object_id)?
        .get("requirement")?
        .get("version")?
        .as_str()
        .filter(|version| !version.is_empty())
}

/// Parse a whole property list document
pub fn parse(content: &str) -> Result<Value, ReadError> {
    let mut parser = PlistParser::new(content);
    let value = parser.parse_value()?;
    parser.skip_trivia()?;
    if let Some(c) = parser.peek() {
        return Err(parser.error(format!("unexpected trailing character '{}'", c)));
    }
    Ok(value)
}

struct PlistParser<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
}

impl<'a> PlistParser<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            chars: content.chars().peekable(),
            line: 1,
        }
    }

    fn error(&self, message: impl Into<String>) -> ReadError {
        ReadError::InvalidSyntax {
            line: self.line,
            message: message.into(),
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn expect(&mut self, expected: char) -> Result<(), ReadError> {
        self.skip_trivia()?;
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(self.error(format!("expected '{}', found '{}'", expected, c))),
            None => Err(self.error(format!("expected '{}', found end of input", expected))),
        }
    }

    /// Skip whitespace and comments
    fn skip_trivia(&mut self) -> Result<(), ReadError> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') => {
                    let mut lookahead = self.chars.clone();
                    lookahead.next();
                    match lookahead.next() {
                        Some('/') => {
                            while let Some(c) = self.bump() {
                                if c == '\n' {
                                    break;
                                }
                            }
                        }
                        Some('*') => {
                            self.bump();
                            self.bump();
                            self.skip_block_comment()?;
                        }
                        // A bare '/' starts an unquoted string such as a path
                        _ => return Ok(()),
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), ReadError> {
        let mut prev = '\0';
        while let Some(c) = self.bump() {
            if prev == '*' && c == '/' {
                return Ok(());
            }
            prev = c;
        }
        Err(self.error("unterminated comment"))
    }

    fn parse_value(&mut self) -> Result<Value, ReadError> {
        self.skip_trivia()?;
        match self.peek() {
            Some('{') => self.parse_dict(),
            Some('(') => self.parse_array(),
            Some('"') => self.parse_quoted().map(Value::String),
            Some('<') => self.parse_data().map(Value::String),
            Some(_) => self.parse_unquoted().map(Value::String),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn parse_dict(&mut self) -> Result<Value, ReadError> {
        self.expect('{')?;
        let mut dict = IndexMap::new();
        loop {
            self.skip_trivia()?;
            if self.peek() == Some('}') {
                self.bump();
                return Ok(Value::Dict(dict));
            }
            let key = match self.parse_value()? {
                Value::String(key) => key,
                _ => return Err(self.error("dictionary key must be a string")),
            };
            self.expect('=')?;
            let value = self.parse_value()?;
            self.expect(';')?;
            dict.insert(key, value);
        }
    }

    fn parse_array(&mut self) -> Result<Value, ReadError> {
        self.expect('(')?;
        let mut items = Vec::new();
        loop {
            self.skip_trivia()?;
            if self.peek() == Some(')') {
                self.bump();
                return Ok(Value::Array(items));
            }
            items.push(self.parse_value()?);
            self.skip_trivia()?;
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(')') => {}
                Some(c) => return Err(self.error(format!("expected ',' or ')', found '{}'", c))),
                None => return Err(self.error("unterminated array")),
            }
        }
    }

    fn parse_quoted(&mut self) -> Result<String, ReadError> {
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(out),
                Some('\\') => out.push(self.parse_escape()?),
                Some(c) => out.push(c),
                None => return Err(self.error("unterminated string")),
            }
        }
    }

    fn parse_escape(&mut self) -> Result<char, ReadError> {
        match self.bump() {
            Some('n') => Ok('\n'),
            Some('t') => Ok('\t'),
            Some('r') => Ok('\r'),
            Some('U') => {
                let hex: String = (0..4).filter_map(|_| self.bump()).collect();
                u32::from_str_radix(&hex, 16)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| self.error(format!("invalid unicode escape '\\U{}'", hex)))
            }
            Some(c) => Ok(c),
            None => Err(self.error("unterminated escape")),
        }
    }

    /// `<0fbd7777 2a3f>` hex data, kept as its raw text
    fn parse_data(&mut self) -> Result<String, ReadError> {
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                Some('>') => return Ok(out),
                Some(c) if c.is_ascii_hexdigit() => out.push(c),
                Some(c) if c.is_whitespace() => {}
                Some(c) => return Err(self.error(format!("invalid data character '{}'", c))),
                None => return Err(self.error("unterminated data")),
            }
        }
    }

    fn parse_unquoted(&mut self) -> Result<String, ReadError> {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if !is_unquoted_char(c) {
                break;
            }
            out.push(c);
            self.bump();
        }
        if out.is_empty() {
            let c = self.peek().unwrap_or(' ');
            return Err(self.error(format!("unexpected character '{}'", c)));
        }
        Ok(out)
    }
}

fn is_unquoted_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '$' | '/' | ':' | '.' | '-' | '+')
}
