/*!
 * Argument Tokenizer
 * Splits the descriptor `args` string into an argument vector
 */

use crate::core::errors::DescriptorError;
use crate::core::types::DescriptorResult;

/// Tokenize a shell-style argument string
///
/// Words are separated by whitespace. Single quotes group literally,
/// double quotes group with backslash escapes for `"` and `\`, and a
/// backslash outside quotes escapes the next character. No expansion of
/// any kind is performed; the supervisor never routes these through a
/// shell.
pub fn tokenize(input: &str) -> DescriptorResult<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;

    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            '\'' => {
                in_token = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(inner) => current.push(inner),
                        None => {
                            return Err(DescriptorError::UnterminatedQuote(input.to_string()))
                        }
                    }
                }
            }
            '"' => {
                in_token = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(escaped @ ('"' | '\\')) => current.push(escaped),
                            Some(other) => {
                                current.push('\\');
                                current.push(other);
                            }
                            None => {
                                return Err(DescriptorError::UnterminatedQuote(input.to_string()))
                            }
                        },
                        Some(inner) => current.push(inner),
                        None => {
                            return Err(DescriptorError::UnterminatedQuote(input.to_string()))
                        }
                    }
                }
            }
            '\\' => {
                in_token = true;
                match chars.next() {
                    Some(escaped) => current.push(escaped),
                    // Trailing backslash stays literal
                    None => current.push('\\'),
                }
            }
            other => {
                in_token = true;
                current.push(other);
            }
        }
    }

    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_words() {
        assert_eq!(
            tokenize("main:app --host 0.0.0.0 --port 3000").unwrap(),
            vec!["main:app", "--host", "0.0.0.0", "--port", "3000"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   \t ").unwrap().is_empty());
    }

    #[test]
    fn test_single_quotes_group_literally() {
        assert_eq!(
            tokenize("--label 'two words'").unwrap(),
            vec!["--label", "two words"]
        );
        // No escapes inside single quotes
        assert_eq!(tokenize(r"'a\b'").unwrap(), vec![r"a\b"]);
    }

    #[test]
    fn test_double_quotes_with_escapes() {
        assert_eq!(
            tokenize(r#"--msg "say \"hi\"""#).unwrap(),
            vec!["--msg", r#"say "hi""#]
        );
        assert_eq!(tokenize(r#""back\\slash""#).unwrap(), vec![r"back\slash"]);
        // Unknown escapes pass through unchanged
        assert_eq!(tokenize(r#""a\nb""#).unwrap(), vec![r"a\nb"]);
    }

    #[test]
    fn test_quotes_adjacent_to_word() {
        assert_eq!(tokenize(r#"--opt="a b""#).unwrap(), vec!["--opt=a b"]);
    }

    #[test]
    fn test_empty_quoted_token() {
        assert_eq!(tokenize(r#"a "" b"#).unwrap(), vec!["a", "", "b"]);
    }

    #[test]
    fn test_backslash_outside_quotes() {
        assert_eq!(tokenize(r"a\ b").unwrap(), vec!["a b"]);
        assert_eq!(tokenize(r"trailing\").unwrap(), vec![r"trailing\"]);
    }

    #[test]
    fn test_unterminated_quotes() {
        assert!(matches!(
            tokenize("'open"),
            Err(DescriptorError::UnterminatedQuote(_))
        ));
        assert!(matches!(
            tokenize(r#"a "open"#),
            Err(DescriptorError::UnterminatedQuote(_))
        ));
        assert!(matches!(
            tokenize(r#""dangling escape \"#),
            Err(DescriptorError::UnterminatedQuote(_))
        ));
    }
}
