//! # Expression Parser
//!
//! Splits a host expression such as `node[01-16]-ib` into its parts:
//! * the literal prefix before the first `[` (`node`),
//! * the specifier between the brackets (`01-16`),
//! * the literal suffix after the matching `]` (`-ib`).
//!
//! Only the first bracket group is expanded. Anything after it is kept as
//! literal text, but must still have balanced brackets.

use shostspec_common::error::ExpandError;

/// A host expression split around its bracket group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExpression {
    pub prefix: String,
    /// Content between the brackets, `None` for a plain hostname.
    pub specifier: Option<String>,
    pub suffix: String,
}

impl ParsedExpression {
    fn literal(raw: &str) -> Self {
        Self {
            prefix: raw.to_string(),
            specifier: None,
            suffix: String::new(),
        }
    }
}

/// Parses a raw expression into prefix, specifier and suffix.
///
/// Does not look inside the specifier; see [`crate::expander`] for that.
pub fn parse(raw: &str) -> Result<ParsedExpression, ExpandError> {
    let Some(open) = raw.find('[') else {
        if raw.contains(']') {
            return Err(ExpandError::malformed("']' without a preceding '['"));
        }
        return Ok(ParsedExpression::literal(raw));
    };

    let prefix = &raw[..open];
    if prefix.contains(']') {
        return Err(ExpandError::malformed("']' without a preceding '['"));
    }

    let rest = &raw[open + 1..];
    let Some(close) = rest.find(']') else {
        return Err(ExpandError::malformed("'[' without a closing ']'"));
    };

    let specifier = &rest[..close];
    let suffix = &rest[close + 1..];

    if specifier.is_empty() {
        return Err(ExpandError::malformed("empty brackets"));
    }
    if specifier.contains('[') {
        return Err(ExpandError::malformed("nested '[' inside brackets"));
    }
    check_balanced(suffix)?;

    Ok(ParsedExpression {
        prefix: prefix.to_string(),
        specifier: Some(specifier.to_string()),
        suffix: suffix.to_string(),
    })
}

/// Trailing text is not expanded, but an unmatched bracket in it is still an error.
fn check_balanced(text: &str) -> Result<(), ExpandError> {
    let mut depth: usize = 0;

    for c in text.chars() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth = depth.checked_sub(1).ok_or(ExpandError::malformed(
                    "unmatched ']' after the bracket group",
                ))?;
            }
            _ => {}
        }
    }

    if depth == 0 {
        Ok(())
    } else {
        Err(ExpandError::malformed("unmatched '[' after the bracket group"))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    fn is_malformed(raw: &str) -> bool {
        matches!(parse(raw), Err(ExpandError::MalformedExpression { .. }))
    }

    #[test]
    fn test_parse_splits_prefix_specifier_suffix() {
        assert_eq!(
            parse("host[120-150,999]"),
            Ok(ParsedExpression {
                prefix: "host".into(),
                specifier: Some("120-150,999".into()),
                suffix: String::new(),
            })
        );

        assert_eq!(
            parse("node[01-04]-ib"),
            Ok(ParsedExpression {
                prefix: "node".into(),
                specifier: Some("01-04".into()),
                suffix: "-ib".into(),
            })
        );

        // Bracket group at the very start
        assert_eq!(
            parse("[1-2]x").map(|p| p.prefix),
            Ok(String::new())
        );
    }

    #[test]
    fn test_parse_literal_without_brackets() {
        assert_eq!(parse("login01"), Ok(ParsedExpression::literal("login01")));
        assert_eq!(parse("login"), Ok(ParsedExpression::literal("login")));
    }

    #[test]
    fn test_parse_keeps_second_group_as_literal() {
        let parsed = parse("a[1-2]b[3-4]").unwrap();
        assert_eq!(parsed.prefix, "a");
        assert_eq!(parsed.specifier.as_deref(), Some("1-2"));
        assert_eq!(parsed.suffix, "b[3-4]");
    }

    #[test]
    fn test_parse_rejects_unbalanced() {
        assert!(is_malformed("host[120-150"));
        assert!(is_malformed("host120-150]"));
        assert!(is_malformed("host]1[2]"));
        assert!(is_malformed("host[1-2]]"));
        assert!(is_malformed("host[1-2]x["));
        assert!(is_malformed("host[1[2]]"));
    }

    #[test]
    fn test_parse_rejects_empty_brackets() {
        assert_eq!(
            parse("host[]"),
            Err(ExpandError::MalformedExpression {
                reason: "empty brackets"
            })
        );
    }
}
