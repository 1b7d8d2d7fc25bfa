use super::Column;

/// Splits one line of assembly into words with their columns.
/// Everything after `;` is a comment. Commas separate like whitespace.
pub fn lex(s: &str) -> Vec<(Column, &str)> {
    let code = match s.find(';') {
        Some(index) => &s[..index],
        None => s,
    };
    let mut words = vec![];
    let mut start: Option<usize> = None;
    for (index, ch) in code.char_indices() {
        if ch.is_whitespace() || ch == ',' {
            if let Some(begin) = start.take() {
                words.push((begin..index, &code[begin..index]));
            }
        } else if start.is_none() {
            start = Some(index);
        }
    }
    if let Some(begin) = start {
        words.push((begin..code.len(), &code[begin..]));
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_words_and_columns() {
        assert_eq!(lex("  pushi  10"), vec![(2..7, "pushi"), (9..11, "10")]);
    }

    #[test]
    fn test_lex_comment() {
        assert_eq!(lex("ADD ; 10 + 20"), vec![(0..3, "ADD")]);
        assert!(lex("; nothing here").is_empty());
        assert!(lex("").is_empty());
    }

    #[test]
    fn test_lex_comma() {
        assert_eq!(lex("BYTE 1,2"), vec![(0..4, "BYTE"), (5..6, "1"), (7..8, "2")]);
    }
}
