//! Fixture classification.
//!
//! A fixture is negative as soon as it carries any error annotation, no matter how many `// expect:` lines it also
//! has. Everything else is positive, including fixtures with no annotations at all: those must run cleanly and print
//! nothing.

use crate::annotations::{self, Annotations};

/// What a generated test asserts about one fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Must run without error and print exactly these lines, in order.
    Positive { expected: Vec<String> },
    /// Must fail. The kind of failure is not checked.
    Negative,
}

impl Classification {
    pub fn is_negative(&self) -> bool {
        matches!(self, Classification::Negative)
    }

    /// Expected output lines; empty for negative fixtures.
    pub fn expected_lines(&self) -> &[String] {
        match self {
            Classification::Positive { expected } => expected,
            Classification::Negative => &[],
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Positive { expected } => write!(f, "positive ({} expected line(s))", expected.len()),
            Classification::Negative => write!(f, "negative"),
        }
    }
}

/// Reduce a fixture's annotations to a classification.
pub fn classify(found: &Annotations) -> Classification {
    if found.error_count() > 0 {
        Classification::Negative
    } else {
        Classification::Positive {
            expected: found.expected_output(),
        }
    }
}

/// Scan then classify fixture text.
pub fn classify_source(source: &str) -> Classification {
    classify(&annotations::scan(source))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positive(lines: &[&str]) -> Classification {
        Classification::Positive {
            expected: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_expect_lines_are_positive() {
        assert_eq!(classify_source("// expect: 3\n// expect: 4"), positive(&["3", "4"]));
    }

    #[test]
    fn test_line_tagged_error_is_negative() {
        assert_eq!(classify_source("// [line 2] Error: bad token"), Classification::Negative);
    }

    #[test]
    fn test_runtime_error_is_negative() {
        assert_eq!(
            classify_source("// expect runtime error: division by zero"),
            Classification::Negative
        );
    }

    #[test]
    fn test_no_annotations_is_silent_positive() {
        let c = classify_source("var a = 1;\n");
        assert_eq!(c, positive(&[]));
        assert!(c.expected_lines().is_empty());
    }

    #[test]
    fn test_empty_file_is_silent_positive() {
        assert_eq!(classify_source(""), positive(&[]));
    }

    #[test]
    fn test_crlf_fixture_expects_clean_lines() {
        assert_eq!(
            classify_source("print 3; // expect: 3\r\nprint 4; // expect: 4\r\n"),
            positive(&["3", "4"])
        );
    }

    #[test]
    fn test_error_wins_over_expect() {
        let source = "\
print \"before\"; // expect: before
print undefined; // expect runtime error: Undefined variable 'undefined'.
";
        assert_eq!(classify_source(source), Classification::Negative);
    }

    #[test]
    fn test_generic_error_is_negative() {
        let source = "fun f(a, a) {} // Error at 'a': Already a variable with this name in this scope.";
        assert!(classify_source(source).is_negative());
    }

    #[test]
    fn test_syntax_trace_alone_is_negative() {
        assert!(classify_source("print 1; // expect: [c line 1] Error at 'x'").is_negative());
    }

    #[test]
    fn test_display() {
        assert_eq!(positive(&["a", "b"]).to_string(), "positive (2 expected line(s))");
        assert_eq!(Classification::Negative.to_string(), "negative");
    }
}
