use lexis::TextStatistics;
use thiserror::Error;

/// Errors from the system clipboard collaborators
///
/// Clipboard access can be denied or unavailable depending on the host
/// environment. A failed operation is reported to the user and leaves the
/// current statistics untouched; the next attempt starts fresh.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to read clipboard: {0}")]
    Read(String),

    #[error("Failed to write clipboard: {0}")]
    Write(String),
}

/// Read the current contents of the system clipboard
pub fn read() -> Result<String, ClipboardError> {
    cli_clipboard::get_contents().map_err(|error| ClipboardError::Read(error.to_string()))
}

/// Replace the contents of the system clipboard
pub fn write(contents: &str) -> Result<(), ClipboardError> {
    cli_clipboard::set_contents(contents.to_owned())
        .map_err(|error| ClipboardError::Write(error.to_string()))
}

/// Render a report as a human-readable, multi-line summary for sharing
pub fn format_report(report: &TextStatistics) -> String {
    format!(
        "Text statistics\n\
         ---------------\n\
         Words: {}\n\
         Characters: {}\n\
         Characters (no spaces): {}\n\
         Paragraphs: {}\n\
         Sentences: {}\n\
         Reading time: {} min\n\
         Average word length: {:.1}\n\
         Average words per sentence: {:.1}\n",
        report.word_count,
        report.char_count,
        report.char_count_no_space,
        report.paragraph_count,
        report.sentence_count,
        report.reading_time_minutes,
        report.avg_word_length,
        report.avg_words_per_sentence,
    )
}

#[cfg(test)]
mod tests {
    use lexis::EngineConfig;

    use super::*;

    #[test]
    fn test_format_report() {
        let report = TextStatistics::calculate("Hello world.", &EngineConfig::default());
        let formatted = format_report(&report);

        assert!(formatted.contains("Words: 2"));
        assert!(formatted.contains("Characters: 12"));
        assert!(formatted.contains("Characters (no spaces): 11"));
        assert!(formatted.contains("Sentences: 1"));
        assert!(formatted.contains("Reading time: 1 min"));
        assert!(formatted.contains("Average word length: 5.0"));
        assert!(formatted.contains("Average words per sentence: 2.0"));
        assert_eq!(formatted.lines().count(), 10);
    }
}
