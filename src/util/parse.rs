use std::num::IntErrorKind;

use crate::error::command::CommandError;

/// Splits off the first whitespace-delimited word.
///
/// # Returns
/// - `(word, rest)` - `rest` has surrounding whitespace trimmed; both are empty for blank input
pub fn split_first_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(end) => (&text[..end], text[end..].trim()),
        None => (text, ""),
    }
}

/// Parses a required integer command argument.
///
/// Only the first word of `args` is considered; trailing words are ignored. Integers too large
/// for `i64` saturate to its bounds, so callers see them as out of range rather than malformed.
///
/// # Arguments
/// - `param` - Parameter name used in error messages
/// - `args` - Raw argument text after the command name
///
/// # Returns
/// - `Ok(i64)` - Parsed value
/// - `Err(CommandError::MissingArgument)` - `args` is blank
/// - `Err(CommandError::BadArgument)` - First word is not an integer
pub fn parse_int_argument(param: &'static str, args: &str) -> Result<i64, CommandError> {
    let (value, _) = split_first_word(args);
    if value.is_empty() {
        return Err(CommandError::MissingArgument { param });
    }

    match value.parse::<i64>() {
        Ok(parsed) => Ok(parsed),
        Err(source) => match source.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(CommandError::BadArgument {
                param,
                value: value.to_string(),
                source,
            }),
        },
    }
}

/// Returns the argument text, or a missing-argument error when it is blank.
pub fn require_rest<'a>(param: &'static str, args: &'a str) -> Result<&'a str, CommandError> {
    let args = args.trim();
    if args.is_empty() {
        Err(CommandError::MissingArgument { param })
    } else {
        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests word splitting with irregular whitespace.
    ///
    /// Expected: first word and trimmed remainder
    #[test]
    fn splits_first_word() {
        assert_eq!(split_first_word("  add  buy milk  "), ("add", "buy milk"));
        assert_eq!(split_first_word("list"), ("list", ""));
        assert_eq!(split_first_word("   "), ("", ""));
        assert_eq!(split_first_word("remove\n2"), ("remove", "2"));
    }

    /// Tests parsing valid integers, ignoring extra words.
    ///
    /// Expected: Ok with the first word's value
    #[test]
    fn parses_integer_argument() {
        assert_eq!(parse_int_argument("task_index", "2").unwrap(), 2);
        assert_eq!(parse_int_argument("task_index", " -3 extra").unwrap(), -3);
    }

    /// Tests integers beyond the range of i64.
    ///
    /// Expected: saturated to i64::MAX or i64::MIN instead of an error
    #[test]
    fn saturates_oversized_integers() {
        assert_eq!(
            parse_int_argument("task_index", "99999999999999999999").unwrap(),
            i64::MAX
        );
        assert_eq!(
            parse_int_argument("task_index", "-99999999999999999999").unwrap(),
            i64::MIN
        );
    }

    /// Tests a non-integer argument.
    ///
    /// Expected: Err(CommandError::BadArgument) carrying the offending value
    #[test]
    fn rejects_non_integer() {
        match parse_int_argument("task_index", "abc") {
            Err(CommandError::BadArgument { param, value, .. }) => {
                assert_eq!(param, "task_index");
                assert_eq!(value, "abc");
            }
            other => panic!("expected BadArgument, got {:?}", other),
        }
    }

    /// Tests a blank argument.
    ///
    /// Expected: Err(CommandError::MissingArgument)
    #[test]
    fn rejects_missing_argument() {
        assert!(matches!(
            parse_int_argument("task_index", "  "),
            Err(CommandError::MissingArgument {
                param: "task_index"
            })
        ));
        assert!(matches!(
            require_rest("message", ""),
            Err(CommandError::MissingArgument { param: "message" })
        ));
        assert_eq!(require_rest("message", "  hi there ").unwrap(), "hi there");
    }
}
