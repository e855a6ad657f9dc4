//! Annotation extraction from fixture source text.
//!
//! Fixtures state their expected behaviour in trailing comments:
//!
//! ```text
//! print a; // expect: 1
//! print b; // expect runtime error: Undefined variable 'b'.
//! var c = ; // [line 3] Error at ';': Expect expression.
//! ```
//!
//! Five patterns are searched independently over the whole text. A single line may match more than one of them (a
//! `// [line N] Error` comment is both a line-tagged error and a syntax trace); the classifier only looks at
//! presence, so overlap is harmless.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static EXPECT_OUTPUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"// expect: ?(.*)").expect("INVARIANT: expect_output pattern is valid"));

static GENERIC_ERROR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"// (Error.*)").expect("INVARIANT: generic_error pattern is valid"));

static LINE_TAGGED_ERROR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"// \[((java|c) )?line (\d+)\] (Error.*)").expect("INVARIANT: line_tagged_error pattern is valid")
});

static RUNTIME_ERROR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"// expect runtime error: (.+)").expect("INVARIANT: runtime_error pattern is valid")
});

static SYNTAX_TRACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*line (\d+)\] (Error.+)").expect("INVARIANT: syntax_trace pattern is valid"));

/// Payload-free discriminant of [`Annotation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnnotationKind {
    ExpectOutput,
    GenericError,
    LineTaggedError,
    RuntimeError,
    SyntaxTrace,
}

impl AnnotationKind {
    pub const ALL: [AnnotationKind; 5] = [
        AnnotationKind::ExpectOutput,
        AnnotationKind::GenericError,
        AnnotationKind::LineTaggedError,
        AnnotationKind::RuntimeError,
        AnnotationKind::SyntaxTrace,
    ];

    /// Whether an annotation of this kind marks the fixture as expected to fail.
    pub fn is_error(self) -> bool {
        !matches!(self, AnnotationKind::ExpectOutput)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AnnotationKind::ExpectOutput => "expect_output",
            AnnotationKind::GenericError => "generic_error",
            AnnotationKind::LineTaggedError => "line_tagged_error",
            AnnotationKind::RuntimeError => "runtime_error",
            AnnotationKind::SyntaxTrace => "syntax_trace",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            AnnotationKind::ExpectOutput => &*EXPECT_OUTPUT,
            AnnotationKind::GenericError => &*GENERIC_ERROR,
            AnnotationKind::LineTaggedError => &*LINE_TAGGED_ERROR,
            AnnotationKind::RuntimeError => &*RUNTIME_ERROR,
            AnnotationKind::SyntaxTrace => &*SYNTAX_TRACE,
        }
    }
}

impl std::fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One annotation occurrence with its captured text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// `// expect: <output>`; the output may be empty.
    ExpectOutput(String),
    /// `// Error...`
    GenericError(String),
    /// `// [line N] Error...`, optionally `// [java line N]` or `// [c line N]`.
    LineTaggedError {
        dialect: Option<String>,
        line: u32,
        message: String,
    },
    /// `// expect runtime error: <message>`
    RuntimeError(String),
    /// `[... line N] Error...` anywhere on a line, comment or not.
    SyntaxTrace { line: u32, message: String },
}

impl Annotation {
    pub fn kind(&self) -> AnnotationKind {
        match self {
            Annotation::ExpectOutput(_) => AnnotationKind::ExpectOutput,
            Annotation::GenericError(_) => AnnotationKind::GenericError,
            Annotation::LineTaggedError { .. } => AnnotationKind::LineTaggedError,
            Annotation::RuntimeError(_) => AnnotationKind::RuntimeError,
            Annotation::SyntaxTrace { .. } => AnnotationKind::SyntaxTrace,
        }
    }

    fn from_captures(kind: AnnotationKind, caps: &Captures<'_>) -> Self {
        // A stray `\r` from a CRLF line ending is not part of the annotation text.
        let group = |i: usize| {
            caps.get(i)
                .map(|m| m.as_str().trim_end_matches('\r').to_string())
                .unwrap_or_default()
        };
        match kind {
            AnnotationKind::ExpectOutput => Annotation::ExpectOutput(group(1)),
            AnnotationKind::GenericError => Annotation::GenericError(group(1)),
            AnnotationKind::LineTaggedError => Annotation::LineTaggedError {
                dialect: caps.get(2).map(|m| m.as_str().to_string()),
                line: parse_line(&group(3)),
                message: group(4),
            },
            AnnotationKind::RuntimeError => Annotation::RuntimeError(group(1)),
            AnnotationKind::SyntaxTrace => Annotation::SyntaxTrace {
                line: parse_line(&group(1)),
                message: group(2),
            },
        }
    }
}

/// Line tags are informational; absurdly long digit runs saturate instead of failing the scan.
fn parse_line(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}

/// All annotations found in one fixture, grouped by kind in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    pub expect_output: Vec<Annotation>,
    pub generic_error: Vec<Annotation>,
    pub line_tagged_error: Vec<Annotation>,
    pub runtime_error: Vec<Annotation>,
    pub syntax_trace: Vec<Annotation>,
}

impl Annotations {
    pub fn of_kind(&self, kind: AnnotationKind) -> &[Annotation] {
        match kind {
            AnnotationKind::ExpectOutput => &self.expect_output,
            AnnotationKind::GenericError => &self.generic_error,
            AnnotationKind::LineTaggedError => &self.line_tagged_error,
            AnnotationKind::RuntimeError => &self.runtime_error,
            AnnotationKind::SyntaxTrace => &self.syntax_trace,
        }
    }

    fn of_kind_mut(&mut self, kind: AnnotationKind) -> &mut Vec<Annotation> {
        match kind {
            AnnotationKind::ExpectOutput => &mut self.expect_output,
            AnnotationKind::GenericError => &mut self.generic_error,
            AnnotationKind::LineTaggedError => &mut self.line_tagged_error,
            AnnotationKind::RuntimeError => &mut self.runtime_error,
            AnnotationKind::SyntaxTrace => &mut self.syntax_trace,
        }
    }

    /// Number of matches across the four error kinds.
    pub fn error_count(&self) -> usize {
        AnnotationKind::ALL
            .into_iter()
            .filter(|k| k.is_error())
            .map(|k| self.of_kind(k).len())
            .sum()
    }

    /// Captured `// expect:` texts, top to bottom.
    pub fn expected_output(&self) -> Vec<String> {
        self.expect_output
            .iter()
            .filter_map(|a| match a {
                Annotation::ExpectOutput(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        AnnotationKind::ALL.into_iter().all(|k| self.of_kind(k).is_empty())
    }
}

/// Scan fixture text for every annotation kind.
pub fn scan(source: &str) -> Annotations {
    let mut found = Annotations::default();
    for kind in AnnotationKind::ALL {
        let matches = kind
            .pattern()
            .captures_iter(source)
            .map(|caps| Annotation::from_captures(kind, &caps));
        found.of_kind_mut(kind).extend(matches);
    }
    found
}
