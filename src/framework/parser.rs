//! Lightweight Java source outline parser.
//!
//! This is not a full Java grammar. It recovers just enough structure for test
//! extraction: the package, the imports, and every type declaration with its
//! annotations and method declarations.
//!
//! # Parsing Process
//!
//! 1. Blank out comments, and separately blank string/char literal contents so
//!    braces inside literals do not affect nesting
//! 2. Tokenize the blanked text into identifiers and punctuation
//! 3. Walk the tokens tracking brace depth, attaching pending annotations to the
//!    next type or method declaration
//!
//! Sources with unbalanced braces or without any type declaration are reported
//! as unparsable (`None`), not as errors.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::{ExtractResult, SourceParser};

static STRING_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""((?:[^"\\]|\\.)*)""#).expect("string literal pattern is valid")
});

static CLASS_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z_$][\w$.]*)\s*\.\s*class\b").expect("class literal pattern is valid")
});

static MEMBER_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*([A-Za-z_$][\w$]*)\s*=([^=].*)$").expect("member key pattern is valid")
});

/// Identifiers that can precede `(` without declaring a method.
const NON_METHOD_KEYWORDS: &[&str] = &[
    "if",
    "for",
    "while",
    "switch",
    "catch",
    "synchronized",
    "return",
    "new",
    "throw",
    "super",
    "this",
    "try",
    "else",
    "do",
    "assert",
    "case",
];

/// Structural outline of one Java compilation unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JavaSource {
    /// Declared package, if any.
    pub package: Option<String>,

    /// Imported names, without the `import`/`static` keywords.
    pub imports: Vec<String>,

    /// Type declarations in source order, nested types included.
    pub types: Vec<TypeDecl>,
}

impl JavaSource {
    /// Iterates over every annotation on every type and method.
    pub fn annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.types.iter().flat_map(|t| {
            t.annotations
                .iter()
                .chain(t.methods.iter().flat_map(|m| m.annotations.iter()))
        })
    }
}

/// A class, interface, enum, record or annotation type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    /// Simple name of the type.
    pub name: String,

    /// Annotations on the declaration.
    pub annotations: Vec<Annotation>,

    /// Methods (and constructors) declared directly in the type body.
    pub methods: Vec<MethodDecl>,
}

impl TypeDecl {
    /// Returns the first annotation with the given simple name.
    pub fn annotation(&self, simple_name: &str) -> Option<&Annotation> {
        find_annotation(&self.annotations, simple_name)
    }
}

/// A method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    /// Method name.
    pub name: String,

    /// Annotations on the declaration.
    pub annotations: Vec<Annotation>,

    /// 1-based line of the method name.
    pub line: u32,
}

impl MethodDecl {
    /// Returns the first annotation with the given simple name.
    pub fn annotation(&self, simple_name: &str) -> Option<&Annotation> {
        find_annotation(&self.annotations, simple_name)
    }
}

/// An annotation usage such as `@Tag("fast")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Name as written, possibly qualified (`org.junit.Test`).
    pub name: String,

    /// Raw text between the parentheses, if present.
    pub arguments: Option<String>,
}

impl Annotation {
    /// Returns the name without any package qualifier.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// Returns string literals assigned to `key`.
    ///
    /// A single unnamed argument counts as `value`.
    pub fn string_values(&self, key: &str) -> Vec<String> {
        self.member(key)
            .map(|raw| {
                STRING_LITERAL
                    .captures_iter(&raw)
                    .map(|cap| unescape(&cap[1]))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns simple names of class literals (`Foo.class`) assigned to `key`.
    pub fn class_values(&self, key: &str) -> Vec<String> {
        self.member(key)
            .map(|raw| {
                CLASS_LITERAL
                    .captures_iter(&raw)
                    .map(|cap| {
                        let qualified = &cap[1];
                        qualified
                            .rsplit('.')
                            .next()
                            .unwrap_or(qualified)
                            .to_string()
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns a boolean literal assigned to `key`.
    pub fn bool_value(&self, key: &str) -> Option<bool> {
        match self.member(key)?.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    fn member(&self, key: &str) -> Option<String> {
        let args = self.arguments.as_deref()?;
        split_top_level(args).into_iter().find_map(|part| {
            match MEMBER_KEY.captures(&part) {
                Some(cap) if &cap[1] == key => Some(cap[2].to_string()),
                Some(_) => None,
                None if key == "value" && !part.trim().is_empty() => Some(part),
                None => None,
            }
        })
    }
}

fn find_annotation<'a>(annotations: &'a [Annotation], simple_name: &str) -> Option<&'a Annotation> {
    annotations.iter().find(|a| a.simple_name() == simple_name)
}

/// Splits annotation arguments on commas outside braces, parens and strings.
fn split_top_level(args: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for c in args.chars() {
        if in_string {
            current.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => {
                in_string = true;
                current.push(c);
            }
            '{' | '(' => {
                depth += 1;
                current.push(c);
            }
            '}' | ')' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            ',' if depth == 0 => parts.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    if !current.trim().is_empty() {
        parts.push(current);
    }
    parts
}

fn unescape(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    let mut chars = literal.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some(other) => out.push(other),
                None => {}
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Parser for `.java` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaParser;

impl SourceParser for JavaParser {
    fn parse(&self, path: &Path) -> ExtractResult<Option<JavaSource>> {
        let bytes = std::fs::read(path)?;
        let Ok(text) = String::from_utf8(bytes) else {
            debug!("Skipping non UTF-8 source: {}", path.display());
            return Ok(None);
        };

        let source = parse_source(&text);
        if source.is_none() {
            debug!("No usable structure in {}", path.display());
        }
        Ok(source)
    }
}

/// Parses Java source text into an outline.
///
/// # Example
///
/// ```
/// use testomat_export::framework::parser::parse_source;
///
/// let source = parse_source(r#"
///     package demo;
///     import org.junit.jupiter.api.Test;
///
///     class CalcTest {
///         @Test
///         void adds() {}
///     }
/// "#).unwrap();
///
/// assert_eq!(source.package.as_deref(), Some("demo"));
/// assert_eq!(source.types[0].methods[0].name, "adds");
/// ```
pub fn parse_source(text: &str) -> Option<JavaSource> {
    let (code, masked) = sanitize(text);
    let tokens = tokenize(&masked);
    OutlineBuilder::new(&code, &tokens).build()
}

/// Returns `(code, masked)`: both with comments blanked, `masked` additionally
/// with literal contents blanked. Newlines are kept so positions line up.
fn sanitize(text: &str) -> (Vec<char>, Vec<char>) {
    let chars: Vec<char> = text.chars().collect();
    let mut code = Vec::with_capacity(chars.len());
    let mut masked = Vec::with_capacity(chars.len());

    let blank = |c: char| if c == '\n' { '\n' } else { ' ' };

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        if c == '/' && next == Some('/') {
            while i < chars.len() && chars[i] != '\n' {
                code.push(' ');
                masked.push(' ');
                i += 1;
            }
            continue;
        }

        if c == '/' && next == Some('*') {
            let mut closed = false;
            code.extend([' ', ' ']);
            masked.extend([' ', ' ']);
            i += 2;
            while i < chars.len() {
                if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
                    code.extend([' ', ' ']);
                    masked.extend([' ', ' ']);
                    i += 2;
                    closed = true;
                    break;
                }
                code.push(blank(chars[i]));
                masked.push(blank(chars[i]));
                i += 1;
            }
            if !closed {
                break;
            }
            continue;
        }

        if c == '"' || c == '\'' {
            let text_block = c == '"' && next == Some('"') && chars.get(i + 2) == Some(&'"');
            let delim_len = if text_block { 3 } else { 1 };
            for _ in 0..delim_len {
                code.push(c);
                masked.push(c);
            }
            i += delim_len;

            while i < chars.len() {
                let ch = chars[i];
                if ch == '\\' {
                    code.push(ch);
                    masked.push(' ');
                    if let Some(&escaped) = chars.get(i + 1) {
                        code.push(escaped);
                        masked.push(blank(escaped));
                    }
                    i += 2;
                    continue;
                }
                let closes = if text_block {
                    ch == '"' && chars.get(i + 1) == Some(&'"') && chars.get(i + 2) == Some(&'"')
                } else {
                    ch == c
                };
                if closes {
                    for _ in 0..delim_len {
                        code.push(c);
                        masked.push(c);
                    }
                    i += delim_len;
                    break;
                }
                if !text_block && ch == '\n' {
                    break;
                }
                code.push(ch);
                masked.push(blank(ch));
                i += 1;
            }
            continue;
        }

        code.push(c);
        masked.push(c);
        i += 1;
    }

    (code, masked)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TokenKind {
    Ident(String),
    Literal,
    Punct(char),
}

#[derive(Debug, Clone)]
struct Token {
    kind: TokenKind,
    start: usize,
    end: usize,
    line: u32,
}

impl Token {
    fn ident(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Ident(name) => Some(name),
            _ => None,
        }
    }

    fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punct(c)
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn tokenize(masked: &[char]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut line = 1u32;
    let mut i = 0;

    while i < masked.len() {
        let c = masked[i];
        if c == '\n' {
            line += 1;
            i += 1;
            continue;
        }
        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let start = i;
        let kind = if is_ident_start(c) {
            while i < masked.len() && is_ident_part(masked[i]) {
                i += 1;
            }
            TokenKind::Ident(masked[start..i].iter().collect())
        } else if c.is_ascii_digit() {
            while i < masked.len() && (is_ident_part(masked[i]) || masked[i] == '.') {
                i += 1;
            }
            TokenKind::Literal
        } else {
            i += 1;
            TokenKind::Punct(c)
        };

        tokens.push(Token {
            kind,
            start,
            end: i,
            line,
        });
    }

    tokens
}

/// An open type body on the nesting stack.
struct OpenType {
    index: usize,
    body_depth: usize,
}

struct OutlineBuilder<'a> {
    code: &'a [char],
    tokens: &'a [Token],
    source: JavaSource,
    pending_annotations: Vec<Annotation>,
    pending_type: Option<usize>,
    open_types: Vec<OpenType>,
    depth: usize,
    statement_has_assignment: bool,
}

impl<'a> OutlineBuilder<'a> {
    fn new(code: &'a [char], tokens: &'a [Token]) -> Self {
        Self {
            code,
            tokens,
            source: JavaSource::default(),
            pending_annotations: Vec::new(),
            pending_type: None,
            open_types: Vec::new(),
            depth: 0,
            statement_has_assignment: false,
        }
    }

    fn build(mut self) -> Option<JavaSource> {
        let mut i = 0;
        while i < self.tokens.len() {
            i = self.step(i)?;
        }

        if self.depth != 0 || !self.open_types.is_empty() || self.source.types.is_empty() {
            return None;
        }
        Some(self.source)
    }

    /// Consumes the construct starting at token `i`, returning the next index.
    /// `None` means the source is structurally broken.
    fn step(&mut self, i: usize) -> Option<usize> {
        let tokens = self.tokens;
        let token = &tokens[i];

        match &token.kind {
            TokenKind::Punct('@') => Some(self.annotation(i)),
            TokenKind::Punct('{') => {
                self.depth += 1;
                if let Some(index) = self.pending_type.take() {
                    self.open_types.push(OpenType {
                        index,
                        body_depth: self.depth,
                    });
                }
                self.end_statement();
                Some(i + 1)
            }
            TokenKind::Punct('}') => {
                if self
                    .open_types
                    .last()
                    .is_some_and(|t| t.body_depth == self.depth)
                {
                    self.open_types.pop();
                }
                self.depth = self.depth.checked_sub(1)?;
                self.end_statement();
                Some(i + 1)
            }
            TokenKind::Punct(';') => {
                self.end_statement();
                Some(i + 1)
            }
            TokenKind::Punct('=') => {
                self.statement_has_assignment = true;
                Some(i + 1)
            }
            TokenKind::Ident(word) if self.depth == 0 && word == "package" => {
                let (name, next) = self.read_until_semicolon(i + 1);
                self.source.package = Some(name);
                Some(next)
            }
            TokenKind::Ident(word) if self.depth == 0 && word == "import" => {
                let (name, next) = self.read_until_semicolon(i + 1);
                self.source.imports.push(name);
                Some(next)
            }
            TokenKind::Ident(word) if is_type_keyword(word) && !self.follows_dot(i) => Some(
                self.type_declaration(i)
                    .unwrap_or_else(|| self.maybe_method(i, word)),
            ),
            TokenKind::Ident(word) => Some(self.maybe_method(i, word)),
            _ => Some(i + 1),
        }
    }

    fn end_statement(&mut self) {
        self.pending_annotations.clear();
        self.statement_has_assignment = false;
    }

    fn follows_dot(&self, i: usize) -> bool {
        i > 0 && self.tokens[i - 1].is_punct('.')
    }

    /// Reads a dotted name (`a.b.C`) starting at `i`.
    fn dotted_name(&self, mut i: usize) -> (String, usize) {
        let mut name = String::new();
        while let Some(part) = self.tokens.get(i).and_then(Token::ident) {
            name.push_str(part);
            if self.tokens.get(i + 1).is_some_and(|t| t.is_punct('.'))
                && self.tokens.get(i + 2).and_then(Token::ident).is_some()
            {
                name.push('.');
                i += 2;
            } else {
                i += 1;
                break;
            }
        }
        (name, i)
    }

    /// Joins the tokens up to the next `;`, skipping a leading `static`.
    fn read_until_semicolon(&self, mut start: usize) -> (String, usize) {
        if self.tokens.get(start).and_then(Token::ident) == Some("static") {
            start += 1;
        }
        let mut end = start;
        while end < self.tokens.len() && !self.tokens[end].is_punct(';') {
            end += 1;
        }
        let text = self.tokens[start..end]
            .iter()
            .flat_map(|t| self.code[t.start..t.end].iter())
            .collect();
        (text, end + 1)
    }

    fn matching_paren(&self, open: usize) -> Option<usize> {
        let mut depth = 0usize;
        for (offset, token) in self.tokens[open..].iter().enumerate() {
            if token.is_punct('(') {
                depth += 1;
            } else if token.is_punct(')') {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
        }
        None
    }

    fn annotation(&mut self, at: usize) -> usize {
        let Some(first) = self.tokens.get(at + 1) else {
            return at + 1;
        };
        if first.ident() == Some("interface") {
            return self.type_declaration(at + 1).unwrap_or(at + 2);
        }

        let (name, mut next) = self.dotted_name(at + 1);
        if name.is_empty() {
            return at + 1;
        }

        let mut arguments = None;
        if self.tokens.get(next).is_some_and(|t| t.is_punct('(')) {
            if let Some(close) = self.matching_paren(next) {
                let open = &self.tokens[next];
                let close_token = &self.tokens[close];
                arguments = Some(
                    self.code[open.end..close_token.start]
                        .iter()
                        .collect::<String>()
                        .trim()
                        .to_string(),
                );
                next = close + 1;
            }
        }

        self.pending_annotations.push(Annotation { name, arguments });
        next
    }

    /// Records the type declared by the keyword at `keyword`; `None` if no
    /// name follows.
    fn type_declaration(&mut self, keyword: usize) -> Option<usize> {
        let name = self.tokens.get(keyword + 1).and_then(Token::ident)?;

        self.source.types.push(TypeDecl {
            name: name.to_string(),
            annotations: std::mem::take(&mut self.pending_annotations),
            methods: Vec::new(),
        });
        self.pending_type = Some(self.source.types.len() - 1);
        Some(keyword + 2)
    }

    fn maybe_method(&mut self, i: usize, word: &str) -> usize {
        let opens_params = self.tokens.get(i + 1).is_some_and(|t| t.is_punct('('));
        let in_type_body = self
            .open_types
            .last()
            .is_some_and(|t| t.body_depth == self.depth);

        if !opens_params
            || !in_type_body
            || self.statement_has_assignment
            || self.follows_dot(i)
            || NON_METHOD_KEYWORDS.contains(&word)
        {
            return i + 1;
        }

        let Some(owner) = self.open_types.last().map(|t| t.index) else {
            return i + 1;
        };
        self.source.types[owner].methods.push(MethodDecl {
            name: word.to_string(),
            annotations: std::mem::take(&mut self.pending_annotations),
            line: self.tokens[i].line,
        });

        self.matching_paren(i + 1).map_or(i + 1, |close| close + 1)
    }
}

fn is_type_keyword(word: &str) -> bool {
    matches!(word, "class" | "interface" | "enum" | "record")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const JUNIT5_SOURCE: &str = r#"
package com.example.calc;

import org.junit.jupiter.api.DisplayName;
import org.junit.jupiter.api.Tag;
import org.junit.jupiter.api.Test;
import static org.junit.jupiter.api.Assertions.assertEquals;

/**
 * Calculator tests. @Test in a comment is ignored.
 */
@Tag("unit")
class CalculatorTest {
    private final Calculator calc = new Calculator();

    // @Test
    // void commentedOut() {}

    @Test
    @Tag("fast")
    void addsNumbers() {
        assertEquals(4, calc.add(2, 2), "braces { in strings } are ignored");
    }

    @Test void inlineAnnotation() { }

    private int helper(int x) {
        return x * 2;
    }

    @Nested
    class Inner {
        @Test
        void nestedTest() {}
    }
}
"#;

    #[test]
    fn test_parse_package_and_imports() {
        let source = parse_source(JUNIT5_SOURCE).unwrap();

        assert_eq!(source.package.as_deref(), Some("com.example.calc"));
        assert_eq!(source.imports.len(), 4);
        assert_eq!(source.imports[0], "org.junit.jupiter.api.DisplayName");
        assert_eq!(
            source.imports[3],
            "org.junit.jupiter.api.Assertions.assertEquals"
        );
    }

    #[test]
    fn test_parse_types_and_methods() {
        let source = parse_source(JUNIT5_SOURCE).unwrap();

        assert_eq!(source.types.len(), 2);
        let outer = &source.types[0];
        assert_eq!(outer.name, "CalculatorTest");
        assert_eq!(outer.annotation("Tag").unwrap().string_values("value"), ["unit"]);

        let names: Vec<_> = outer.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["addsNumbers", "inlineAnnotation", "helper"]);

        let adds = &outer.methods[0];
        assert!(adds.annotation("Test").is_some());
        assert_eq!(adds.annotation("Tag").unwrap().string_values("value"), ["fast"]);
        assert!(outer.methods[2].annotations.is_empty());

        let inner = &source.types[1];
        assert_eq!(inner.name, "Inner");
        assert!(inner.annotation("Nested").is_some());
        assert_eq!(inner.methods[0].name, "nestedTest");
    }

    #[test]
    fn test_method_lines_are_one_based() {
        let source = parse_source("class A {\n\n  @Test\n  void first() {}\n}\n").unwrap();
        assert_eq!(source.types[0].methods[0].line, 4);
    }

    #[test]
    fn test_field_initializer_is_not_a_method() {
        let source =
            parse_source("class A { private Foo foo = create(1); int size() { return 0; } }")
                .unwrap();
        let names: Vec<_> = source.types[0].methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["size"]);
    }

    #[test]
    fn test_class_literal_is_not_a_type() {
        let source =
            parse_source("class A { @Category(Slow.class) @Test void t() { Object o = A.class; } }")
                .unwrap();
        assert_eq!(source.types.len(), 1);
        let method = &source.types[0].methods[0];
        assert_eq!(method.annotation("Category").unwrap().class_values("value"), ["Slow"]);
    }

    #[test]
    fn test_multiline_annotation_arguments() {
        let source = parse_source(
            r#"class A {
                @Test(groups = {"smoke",
                                "regression"}, enabled = false)
                public void t() {}
            }"#,
        )
        .unwrap();
        let test = source.types[0].methods[0].annotation("Test").unwrap();
        assert_eq!(test.string_values("groups"), ["smoke", "regression"]);
        assert_eq!(test.bool_value("enabled"), Some(false));
        assert_eq!(test.bool_value("missing"), None);
    }

    #[test]
    fn test_qualified_annotation_name() {
        let source = parse_source("class A { @org.junit.Test public void t() {} }").unwrap();
        let annotation = &source.types[0].methods[0].annotations[0];
        assert_eq!(annotation.name, "org.junit.Test");
        assert_eq!(annotation.simple_name(), "Test");
    }

    #[test]
    fn test_unbalanced_braces_are_unparsable() {
        assert!(parse_source("class A { void t() { }").is_none());
        assert!(parse_source("class A { } }").is_none());
    }

    #[test]
    fn test_no_type_declaration_is_unparsable() {
        assert!(parse_source("").is_none());
        assert!(parse_source("package a.b;\nimport c.D;\n").is_none());
    }

    #[test]
    fn test_text_block_contents_are_ignored() {
        let source = parse_source(
            "class A {\n  String s = \"\"\"\n    class Fake { }\n    \"\"\";\n  void t() {}\n}\n",
        )
        .unwrap();
        assert_eq!(source.types.len(), 1);
        assert_eq!(source.types[0].methods[0].name, "t");
    }

    #[test]
    fn test_java_parser_reads_file() {
        let mut file = tempfile::Builder::new().suffix(".java").tempfile().unwrap();
        file.write_all(JUNIT5_SOURCE.as_bytes()).unwrap();

        let source = JavaParser.parse(file.path()).unwrap().unwrap();
        assert_eq!(source.types[0].name, "CalculatorTest");
    }

    #[test]
    fn test_java_parser_invalid_utf8_is_unparsable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, b'{']).unwrap();

        assert!(JavaParser.parse(file.path()).unwrap().is_none());
    }

    #[test]
    fn test_java_parser_missing_file_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = JavaParser.parse(&dir.path().join("Missing.java"));
        assert!(matches!(result, Err(crate::framework::ExtractError::Io(_))));
    }
}
