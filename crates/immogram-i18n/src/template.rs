//! Positional placeholder substitution.
//!
//! A pattern is literal text with `{N}` placeholders, `N` being a zero-based
//! decimal index into the argument list. `{{` and `}}` produce literal
//! braces; any other brace is a malformed pattern.

use std::fmt::Display;

use immogram_core::error::FormatError;

/// One piece of a parsed pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Arg(usize),
}

fn parse(pattern: &str) -> Result<Vec<Segment<'_>>, FormatError> {
    let bytes = pattern.as_bytes();
    let mut segments = Vec::new();
    let mut start = 0;
    let mut i = 0;

    // Braces are ASCII, so every index sliced at below is a char boundary.
    while i < bytes.len() {
        match bytes[i] {
            b'{' if bytes.get(i + 1) == Some(&b'{') => {
                push_text(&mut segments, &pattern[start..=i]);
                i += 2;
                start = i;
            }
            b'{' => {
                push_text(&mut segments, &pattern[start..i]);
                let close = pattern[i + 1..]
                    .find('}')
                    .map(|p| i + 1 + p)
                    .ok_or_else(|| FormatError::Unterminated {
                        pattern: pattern.to_string(),
                        offset: i,
                    })?;
                let inner = &pattern[i + 1..close];
                let index = parse_index(inner).ok_or_else(|| FormatError::InvalidPlaceholder {
                    pattern: pattern.to_string(),
                    offset: i,
                    placeholder: inner.to_string(),
                })?;
                segments.push(Segment::Arg(index));
                i = close + 1;
                start = i;
            }
            b'}' if bytes.get(i + 1) == Some(&b'}') => {
                push_text(&mut segments, &pattern[start..=i]);
                i += 2;
                start = i;
            }
            b'}' => {
                return Err(FormatError::UnmatchedClose {
                    pattern: pattern.to_string(),
                    offset: i,
                });
            }
            _ => i += 1,
        }
    }
    push_text(&mut segments, &pattern[start..]);
    Ok(segments)
}

fn push_text<'a>(segments: &mut Vec<Segment<'a>>, text: &'a str) {
    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }
}

/// Digits only: `usize::from_str` would also accept a leading `+`.
/// `usize::MAX` is rejected so that `index + 1` in `arity` cannot overflow.
fn parse_index(inner: &str) -> Option<usize> {
    if inner.is_empty() || !inner.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    inner.parse::<usize>().ok().filter(|index| index.checked_add(1).is_some())
}

/// Substitute `args` into `pattern`.
///
/// Arguments beyond the highest referenced index are ignored. A placeholder
/// without a matching argument is an error, never an empty substitution.
pub fn render(pattern: &str, args: &[&dyn Display]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(pattern.len());
    for segment in parse(pattern)? {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Arg(index) => {
                let arg = args.get(index).ok_or_else(|| FormatError::MissingArgument {
                    pattern: pattern.to_string(),
                    index,
                    supplied: args.len(),
                })?;
                out.push_str(&arg.to_string());
            }
        }
    }
    Ok(out)
}

/// Number of arguments `pattern` needs: highest placeholder index + 1.
pub fn arity(pattern: &str) -> Result<usize, FormatError> {
    Ok(parse(pattern)?
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Arg(index) => Some(index + 1),
            Segment::Text(_) => None,
        })
        .max()
        .unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_in_order() {
        assert_eq!(render("Created {0}", &[&"Alpha"]).unwrap(), "Created Alpha");
        assert_eq!(
            render("{1} before {0}", &[&"a", &"b"]).unwrap(),
            "b before a"
        );
    }

    #[test]
    fn test_repeated_placeholder() {
        assert_eq!(render("{0}-{0}", &[&7]).unwrap(), "7-7");
    }

    #[test]
    fn test_no_placeholders_passes_through() {
        assert_eq!(render("Your tasks:", &[]).unwrap(), "Your tasks:");
        assert_eq!(render("", &[]).unwrap(), "");
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        assert_eq!(render("Hi {0}", &[&"x", &"unused", &3]).unwrap(), "Hi x");
        assert_eq!(render("static", &[&"unused"]).unwrap(), "static");
    }

    #[test]
    fn test_missing_argument_is_an_error() {
        let err = render("{0} and {2}", &[&"a", &"b"]).unwrap_err();
        assert_eq!(
            err,
            FormatError::MissingArgument {
                pattern: "{0} and {2}".into(),
                index: 2,
                supplied: 2,
            }
        );
        assert!(render("{0}", &[]).is_err());
    }

    #[test]
    fn test_numeric_and_display_arguments() {
        assert_eq!(render("every {0} hours", &[&48u64]).unwrap(), "every 48 hours");
    }

    #[test]
    fn test_brace_escapes() {
        assert_eq!(render("{{0}} is {0}", &[&"x"]).unwrap(), "{0} is x");
        assert_eq!(render("a {{ b }} c", &[]).unwrap(), "a { b } c");
        assert_eq!(render("{{{0}}}", &[&1]).unwrap(), "{1}");
    }

    #[test]
    fn test_non_ascii_text_is_preserved() {
        assert_eq!(
            render("Läuft alle {0} Stunden « ok »", &[&2]).unwrap(),
            "Läuft alle 2 Stunden « ok »"
        );
    }

    #[test]
    fn test_argument_text_is_not_reinterpreted() {
        assert_eq!(render("{0}", &[&"{1}"]).unwrap(), "{1}");
    }

    #[test]
    fn test_malformed_patterns() {
        assert!(matches!(
            render("oops {0", &[&1]),
            Err(FormatError::Unterminated { offset: 5, .. })
        ));
        assert!(matches!(
            render("a } b", &[]),
            Err(FormatError::UnmatchedClose { offset: 2, .. })
        ));
        for bad in ["{}", "{x}", "{-1}", "{+1}", "{ 0 }", "{0,number}"] {
            assert!(
                matches!(render(bad, &[&1]), Err(FormatError::InvalidPlaceholder { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_arity() {
        assert_eq!(arity("no args").unwrap(), 0);
        assert_eq!(arity("{0}").unwrap(), 1);
        assert_eq!(arity("{3} {1}").unwrap(), 4);
        assert_eq!(arity("{{5}}").unwrap(), 0);
        assert!(arity("{").is_err());
    }

    #[test]
    fn test_huge_index_is_invalid_not_overflow() {
        let max = format!("{{{}}}", usize::MAX);
        assert!(matches!(
            arity(&max),
            Err(FormatError::InvalidPlaceholder { .. })
        ));
        assert!(matches!(
            render(&max, &[&1]),
            Err(FormatError::InvalidPlaceholder { .. })
        ));
        // Past usize::MAX the parse itself fails.
        assert!(arity("{99999999999999999999999}").is_err());

        let largest = format!("{{{}}}", usize::MAX - 1);
        assert_eq!(arity(&largest).unwrap(), usize::MAX);
    }
}
