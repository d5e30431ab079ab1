//! Linear scanners over the input text.
//!
//! All scanners are single left-to-right passes with no backtracking, so a
//! report stays linear in the input length.

/// Sentence terminators. Sentence boundaries are defined strictly by these
/// three characters; text without them contains zero sentences.
const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Returns true if `character` can be part of a word.
///
/// A word constituent is a letter from any script, a digit from any script,
/// or an underscore.
pub fn is_word_constituent(character: char) -> bool {
    character.is_alphanumeric() || character == '_'
}

/// Iterate over the words of `text`.
///
/// A word is a maximal run of word-constituent characters, found left to
/// right over the trimmed text. Whitespace-only input yields no words.
///
/// ```rust
/// let words: Vec<&str> = lexis::words("  foo_bar, baz123! ").collect();
/// assert_eq!(words, vec!["foo_bar", "baz123"]);
/// ```
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.trim()
        .split(|character: char| !is_word_constituent(character))
        .filter(|run| !run.is_empty())
}

/// Count the paragraphs of `text`.
///
/// Paragraphs are the segments between runs of newline characters whose
/// trimmed content is non-empty. Text without newlines counts as a single
/// paragraph, unless it is empty or whitespace-only.
pub fn paragraph_count(text: &str) -> usize {
    text.split('\n')
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

/// Count the sentences of `text`.
///
/// A sentence is a maximal run of one-or-more non-terminator characters
/// followed by one-or-more terminators (`.`, `!`, `?`). Trailing text with
/// no terminator is not counted.
pub fn sentence_count(text: &str) -> usize {
    let mut count = 0;
    let mut has_content = false;

    for character in text.chars() {
        if TERMINATORS.contains(&character) {
            if has_content {
                count += 1;
                has_content = false;
            }
        } else {
            has_content = true;
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_runs() {
        let collect = |text| words(text).collect::<Vec<_>>();

        assert_eq!(collect("hello world"), vec!["hello", "world"]);
        assert_eq!(collect("  leading and trailing  "), vec![
            "leading", "and", "trailing"
        ]);
        // Underscores and digits are word constituents
        assert_eq!(collect("foo_bar baz123"), vec!["foo_bar", "baz123"]);
        // Punctuation splits runs
        assert_eq!(collect("one,two;three"), vec!["one", "two", "three"]);
        // Arabic-script words count like any other letters
        assert_eq!(collect("مرحبا بالعالم"), vec!["مرحبا", "بالعالم"]);

        assert!(collect("").is_empty());
        assert!(collect("   \n\n  ").is_empty());
        assert!(collect("... !!! ???").is_empty());
    }

    #[test]
    fn test_paragraphs() {
        assert_eq!(paragraph_count(""), 0);
        assert_eq!(paragraph_count("\n\n\n"), 0);
        assert_eq!(paragraph_count("one paragraph, no newlines"), 1);
        assert_eq!(paragraph_count("first\nsecond"), 2);
        // Consecutive newlines do not create empty paragraphs
        assert_eq!(paragraph_count("first\n\n\nsecond\n"), 2);
        // Whitespace-only segments are not paragraphs
        assert_eq!(paragraph_count("first\n   \nsecond"), 2);
    }

    #[test]
    fn test_sentences() {
        assert_eq!(sentence_count(""), 0);
        assert_eq!(sentence_count("no ending punctuation here"), 0);
        assert_eq!(sentence_count("One. Two! Three?"), 3);
        // Consecutive terminators belong to one sentence
        assert_eq!(sentence_count("Wait... what?!"), 2);
        // Terminators without preceding content are not sentences
        assert_eq!(sentence_count("..."), 0);
        assert_eq!(sentence_count("...done."), 1);
        // Whitespace counts as sentence content, matching the run-based rule
        assert_eq!(sentence_count(" ."), 1);
        assert_eq!(sentence_count("a.b"), 1);
    }
}
