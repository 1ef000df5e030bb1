//! Greedy word wrap for node labels.

/// Wrap `label` into lines of at most `max_chars` characters.
///
/// Breaks preferentially at whitespace; a single word longer than the limit
/// is hard-split into `max_chars` chunks. When a hard split happens mid-line,
/// full chunks are emitted and a trailing partial chunk carries over as the
/// start of the next line. An empty label wraps to one empty line.
pub fn wrap_text(label: &str, max_chars: usize) -> Vec<String> {
    if label.is_empty() {
        return vec![String::new()];
    }

    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();

    for word in label.split_whitespace() {
        let word_len = word.chars().count();

        if line.is_empty() {
            if word_len <= max_chars {
                line = word.to_string();
            } else {
                lines.extend(hard_split(word, max_chars));
            }
        } else if line.chars().count() + 1 + word_len <= max_chars {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut line));
            if word_len <= max_chars {
                line = word.to_string();
            } else {
                for chunk in hard_split(word, max_chars) {
                    if chunk.chars().count() == max_chars {
                        lines.push(chunk);
                    } else {
                        line = chunk;
                    }
                }
            }
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn hard_split(word: &str, max_chars: usize) -> Vec<String> {
    word.chars()
        .collect::<Vec<_>>()
        .chunks(max_chars)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_label_stays_on_one_line() {
        assert_eq!(wrap_text("Ada Lovelace", 24), vec!["Ada Lovelace"]);
    }

    #[test]
    fn breaks_at_word_boundaries() {
        assert_eq!(
            wrap_text("one two three four", 9),
            vec!["one two", "three", "four"]
        );
    }

    #[test]
    fn hard_splits_long_words() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn partial_chunk_carries_into_next_line() {
        // "aa" fits; the 7-char word overflows and splits mid-line; its
        // trailing partial chunk starts the next line and picks up "zz".
        assert_eq!(
            wrap_text("aa abcdefg zz", 5),
            vec!["aa", "abcde", "fg zz"]
        );
    }

    #[test]
    fn empty_label_wraps_to_one_empty_line() {
        assert_eq!(wrap_text("", 24), vec![""]);
    }
}
