//! Placeholder token substitution over the text runs of one paragraph
//!
//! Word splits visible text into runs freely, so `{{text-input-1}}` may be
//! stored as `{{text-`, `input`, `-1}}` in three separate `<w:t>` elements.
//! Tokens are located in the concatenated paragraph text and each
//! replacement is written into the run where its token starts; the other
//! characters of the token are removed from the runs that held them.

use super::values::TemplateValues;

pub const OPEN_DELIMITER: &str = "{{";
pub const CLOSE_DELIMITER: &str = "}}";

/// A placeholder found in paragraph text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Byte offset of the opening delimiter
    pub start: usize,
    /// Byte offset just past the closing delimiter
    pub end: usize,
    pub name: String,
}

/// Malformed delimiter usage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    Unclosed { offset: usize },
    Unopened { offset: usize },
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unclosed { offset } => {
                write!(f, "unclosed tag `{OPEN_DELIMITER}` at offset {offset}")
            }
            Self::Unopened { offset } => {
                write!(f, "unopened tag `{CLOSE_DELIMITER}` at offset {offset}")
            }
        }
    }
}

/// Find every `{{name}}` token in `text`
pub fn find_tokens(text: &str) -> Result<Vec<Token>, TokenError> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    loop {
        let rest = &text[pos..];
        let next_open = rest.find(OPEN_DELIMITER);
        let next_close = rest.find(CLOSE_DELIMITER);

        let open = match (next_open, next_close) {
            (None, None) => break,
            (None, Some(close)) => return Err(TokenError::Unopened { offset: pos + close }),
            (Some(open), Some(close)) if close < open => {
                return Err(TokenError::Unopened { offset: pos + close })
            }
            (Some(open), _) => pos + open,
        };

        let name_start = open + OPEN_DELIMITER.len();
        let Some(close) = text[name_start..].find(CLOSE_DELIMITER) else {
            return Err(TokenError::Unclosed { offset: open });
        };
        let close = name_start + close;

        tokens.push(Token {
            start: open,
            end: close + CLOSE_DELIMITER.len(),
            name: text[name_start..close].trim().to_string(),
        });
        pos = close + CLOSE_DELIMITER.len();
    }

    Ok(tokens)
}

/// New content of one text run. Consecutive pieces are separated by a line
/// break, which only substituted values can introduce.
pub type RunText = Vec<String>;

/// Substitute tokens across the text runs of a paragraph.
///
/// Returns `Ok(None)` when the paragraph holds no delimiters, otherwise one
/// `RunText` per input run.
pub fn substitute_runs(
    runs: &[String],
    values: &TemplateValues,
) -> Result<Option<Vec<RunText>>, TokenError> {
    let full = runs.concat();
    if !full.contains(OPEN_DELIMITER) && !full.contains(CLOSE_DELIMITER) {
        return Ok(None);
    }
    let tokens = find_tokens(&full)?;

    let mut starts = Vec::with_capacity(runs.len());
    let mut offset = 0;
    for run in runs {
        starts.push(offset);
        offset += run.len();
    }

    let layout = RunLayout {
        full: &full,
        starts: &starts,
    };
    let mut out: Vec<RunText> = vec![vec![String::new()]; runs.len()];
    let mut cursor = 0;

    for token in &tokens {
        layout.copy_range(cursor, token.start, &mut out);

        let value = match values.get(&token.name) {
            Some(value) => value,
            None => {
                tracing::warn!("No value for placeholder `{}`; leaving it empty", token.name);
                ""
            }
        };
        let owner = &mut out[layout.owner(token.start)];
        for (i, line) in value.split('\n').enumerate() {
            if i > 0 {
                owner.push(String::new());
            }
            if let Some(last) = owner.last_mut() {
                last.push_str(line.trim_end_matches('\r'));
            }
        }
        cursor = token.end;
    }
    layout.copy_range(cursor, full.len(), &mut out);

    Ok(Some(out))
}

/// Maps byte offsets of the concatenated text back to runs
struct RunLayout<'a> {
    full: &'a str,
    starts: &'a [usize],
}

impl RunLayout<'_> {
    /// Run holding the byte at `offset`. Empty runs share their start with
    /// the following run and never own a byte.
    fn owner(&self, offset: usize) -> usize {
        self.starts
            .partition_point(|start| *start <= offset)
            .saturating_sub(1)
    }

    fn run_end(&self, run: usize) -> usize {
        self.starts
            .get(run + 1)
            .copied()
            .unwrap_or(self.full.len())
    }

    /// Copy `full[from..to]` unchanged into the runs it came from
    fn copy_range(&self, from: usize, to: usize, out: &mut [RunText]) {
        if from >= to {
            return;
        }
        for run in self.owner(from)..=self.owner(to - 1) {
            let a = from.max(self.starts[run]);
            let b = to.min(self.run_end(run));
            if a < b {
                if let Some(last) = out[run].last_mut() {
                    last.push_str(&self.full[a..b]);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    fn values() -> TemplateValues {
        [
            ("text-input-1", "A"),
            ("text-input-2", "B"),
            ("text-input-3", ""),
        ]
        .into_iter()
        .collect()
    }

    fn single(pieces: &[&str]) -> RunText {
        pieces.iter().map(|s| s.to_string()).collect()
    }

    mod find {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_finds_tokens_with_offsets() {
            let tokens = find_tokens("Hi {{a}} and {{ b }}!").unwrap();
            assert_eq!(
                tokens,
                vec![
                    Token { start: 3, end: 8, name: "a".into() },
                    Token { start: 13, end: 20, name: "b".into() },
                ]
            );
        }

        #[test]
        fn test_no_tokens() {
            assert!(find_tokens("plain text").unwrap().is_empty());
        }

        #[test]
        fn test_unclosed_tag() {
            assert_eq!(
                find_tokens("x {{name").unwrap_err(),
                TokenError::Unclosed { offset: 2 }
            );
        }

        #[test]
        fn test_unopened_tag() {
            assert_eq!(
                find_tokens("x }} {{a}}").unwrap_err(),
                TokenError::Unopened { offset: 2 }
            );
            assert_eq!(
                find_tokens("{{a}} y}}").unwrap_err(),
                TokenError::Unopened { offset: 7 }
            );
        }

        #[test]
        fn test_error_message() {
            let err = TokenError::Unclosed { offset: 4 };
            assert_eq!(err.to_string(), "unclosed tag `{{` at offset 4");
        }
    }

    mod substitute {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_paragraph_without_delimiters_is_untouched() {
            assert_eq!(substitute_runs(&runs(&["hello"]), &values()).unwrap(), None);
        }

        #[test]
        fn test_three_fields_in_separate_runs() {
            let out = substitute_runs(
                &runs(&["{{text-input-1}}", "{{text-input-2}}", "{{text-input-3}}"]),
                &values(),
            )
            .unwrap()
            .unwrap();
            assert_eq!(out, vec![single(&["A"]), single(&["B"]), single(&[""])]);
        }

        #[test]
        fn test_surrounding_text_is_kept() {
            let out = substitute_runs(&runs(&["Name: {{text-input-1}}."]), &values())
                .unwrap()
                .unwrap();
            assert_eq!(out, vec![single(&["Name: A."])]);
        }

        #[test]
        fn test_token_split_across_runs() {
            let out = substitute_runs(
                &runs(&["Dear {{text-", "input", "-2}}, hello"]),
                &values(),
            )
            .unwrap()
            .unwrap();
            assert_eq!(
                out,
                vec![single(&["Dear B"]), single(&[""]), single(&[", hello"])]
            );
        }

        #[test]
        fn test_empty_runs_are_skipped() {
            let out = substitute_runs(&runs(&["", "{{text-input-1}}", ""]), &values())
                .unwrap()
                .unwrap();
            assert_eq!(out, vec![single(&[""]), single(&["A"]), single(&[""])]);
        }

        #[test]
        fn test_unknown_placeholder_renders_empty() {
            let out = substitute_runs(&runs(&["[{{missing}}]"]), &values())
                .unwrap()
                .unwrap();
            assert_eq!(out, vec![single(&["[]"])]);
        }

        #[test]
        fn test_newline_in_value_becomes_break() {
            let values: TemplateValues = [("a", "one\ntwo")].into_iter().collect();
            let out = substitute_runs(&runs(&["<{{a}}>"]), &values).unwrap().unwrap();
            assert_eq!(out, vec![single(&["<one", "two>"])]);
        }

        #[test]
        fn test_multibyte_text_around_tokens() {
            let values: TemplateValues = [("a", "żółw")].into_iter().collect();
            let out = substitute_runs(&runs(&["ąę {{", "a}} ść"]), &values)
                .unwrap()
                .unwrap();
            assert_eq!(out, vec![single(&["ąę żółw"]), single(&[" ść"])]);
        }

        #[test]
        fn test_malformed_paragraph_is_an_error() {
            assert!(substitute_runs(&runs(&["{{text-input-1"]), &values()).is_err());
        }
    }
}
