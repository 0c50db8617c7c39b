use crate::error::LayoutError;

/// Break `text` into lines of at most `max_chars` characters each.
///
/// Text that already contains explicit line breaks (after `\r\n` and `\r`
/// are normalized to `\n`) is split on them verbatim with no further
/// re-wrapping—authored content often pre-formats its own multi-line cells.
/// Otherwise whitespace-delimited tokens are packed greedily onto lines; a
/// single token longer than the budget occupies its own, overflowing line
/// rather than being split mid-token.
///
/// Budgets are counted in `char`s, not bytes, so multi-byte scripts wrap at
/// the same visual density as ASCII.
///
/// Empty input yields exactly one empty line, never zero lines. A zero
/// budget is an error.
pub fn wrap(text: &str, max_chars: usize) -> Result<Vec<String>, LayoutError> {
    if max_chars == 0 {
        return Err(LayoutError::InvalidArgument(
            "character budget must be positive".into(),
        ));
    }

    // normalize newlines
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    // pre-broken text is used verbatim
    if text.contains('\n') {
        return Ok(text.split('\n').map(str::to_string).collect());
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for token in text.split_whitespace() {
        let token_len = token.chars().count();
        if current_len == 0 {
            current.push_str(token);
            current_len = token_len;
        } else if current_len + 1 + token_len <= max_chars {
            current.push(' ');
            current.push_str(token);
            current_len += 1 + token_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(token);
            current_len = token_len;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_budget_is_an_error() {
        assert!(matches!(
            wrap("anything", 0),
            Err(LayoutError::InvalidArgument(_))
        ));
    }

    #[test]
    fn empty_input_yields_one_empty_line() {
        assert_eq!(wrap("", 10).unwrap(), vec![String::new()]);
        assert_eq!(wrap("   ", 10).unwrap(), vec![String::new()]);
    }

    #[test]
    fn pre_broken_text_is_split_verbatim() {
        let lines = wrap("already\nbroken into\nthree", 5).unwrap();
        assert_eq!(lines, vec!["already", "broken into", "three"]);

        let lines = wrap("windows\r\nline endings", 100).unwrap();
        assert_eq!(lines, vec!["windows", "line endings"]);
    }

    #[test]
    fn tokens_pack_greedily() {
        let lines = wrap("one two three four", 9).unwrap();
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn long_token_overflows_its_own_line() {
        let lines = wrap("a incomprehensibilities b", 6).unwrap();
        assert_eq!(lines, vec!["a", "incomprehensibilities", "b"]);
    }

    #[test]
    fn budget_counts_chars_not_bytes() {
        // each of these words is 3 chars but 9 bytes
        let lines = wrap("あいう えおか", 7).unwrap();
        assert_eq!(lines, vec!["あいう えおか"]);
        let lines = wrap("あいう えおか", 6).unwrap();
        assert_eq!(lines, vec!["あいう", "えおか"]);
    }

    #[test]
    fn rewrapping_wrapped_text_keeps_line_count() {
        let text = "the quick brown fox jumps over the lazy dog again and again";
        for width in [8usize, 12, 20, 80] {
            let first = wrap(text, width).unwrap();
            let second = wrap(&first.join("\n"), width).unwrap();
            assert_eq!(first.len(), second.len());
        }
    }
}
