use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use lexis::{DisplayCaps, TextStatistics, normalize_for_display};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span, Text, ToSpan},
    widgets::{Gauge, Paragraph, Wrap},
};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::app::Message;
use crate::clipboard;
use crate::config::Config;
use crate::utils::{KeyEventHelper, ROUNDED_BLOCK, fade};

/// How long a toast stays on screen
const TOAST_DURATION: Duration = Duration::from_secs(3);

/// When in its lifetime a toast starts fading towards the background
const TOAST_FADE_START: Duration = Duration::from_secs(2);

/// A transient status notification
pub struct Toast {
    message: String,
    kind: ToastKind,
    shown_at: Instant,
}

#[derive(Clone, Copy)]
enum ToastKind {
    Info,
    Success,
    Error,
}

impl Toast {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }

    fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
        }
    }

    fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= TOAST_DURATION
    }

    /// How far along the fade-out is, between 0.0 and 0.9
    fn fade_percent(&self) -> f32 {
        let elapsed = self.shown_at.elapsed();
        if elapsed <= TOAST_FADE_START {
            return 0.0;
        }

        let fade_window = (TOAST_DURATION - TOAST_FADE_START).as_secs_f32();
        ((elapsed - TOAST_FADE_START).as_secs_f32() / fade_window).min(0.9)
    }
}

/// The gauge rows of the statistics panel
#[derive(Debug, Clone, Copy, Display, EnumIter)]
enum Metric {
    #[strum(serialize = "Words")]
    Words,
    #[strum(serialize = "Characters")]
    Characters,
    #[strum(serialize = "Characters (no spaces)")]
    CharactersNoSpace,
    #[strum(serialize = "Paragraphs")]
    Paragraphs,
    #[strum(serialize = "Sentences")]
    Sentences,
    #[strum(serialize = "Reading time (min)")]
    ReadingTime,
}

impl Metric {
    const fn value(self, report: &TextStatistics) -> usize {
        match self {
            Self::Words => report.word_count,
            Self::Characters => report.char_count,
            Self::CharactersNoSpace => report.char_count_no_space,
            Self::Paragraphs => report.paragraph_count,
            Self::Sentences => report.sentence_count,
            Self::ReadingTime => report.reading_time_minutes,
        }
    }

    const fn cap(self, caps: &DisplayCaps) -> usize {
        match self {
            Self::Words => caps.words,
            Self::Characters => caps.chars,
            Self::CharactersNoSpace => caps.chars_no_space,
            Self::Paragraphs => caps.paragraphs,
            Self::Sentences => caps.sentences,
            Self::ReadingTime => caps.reading_minutes,
        }
    }
}

/// Page: Editor
///
/// A live text editor: every buffer change recalculates the statistics
/// report synchronously, and the panel next to the text reflects it.
pub struct Editor {
    buffer: Vec<char>,
    cursor: usize,
    report: TextStatistics,
    toast: Option<Toast>,
}

impl Editor {
    /// Creates a new, empty editor
    pub fn new(config: &Config) -> Self {
        Self {
            buffer: Vec::new(),
            cursor: 0,
            report: TextStatistics::calculate("", &config.settings.engine),
            toast: None,
        }
    }

    /// Show a transient notification
    pub fn notify(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    fn text(&self) -> String {
        self.buffer.iter().collect()
    }

    fn recalculate(&mut self, config: &Config) {
        self.report = TextStatistics::calculate(&self.text(), &config.settings.engine);
    }

    fn insert(&mut self, character: char) {
        self.buffer.insert(self.cursor, character);
        self.cursor += 1;
    }

    fn insert_str(&mut self, string: &str) {
        for character in string.chars() {
            self.insert(character);
        }
    }

    fn delete_backward(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.buffer.remove(self.cursor);
        }
    }

    fn delete_forward(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }
}

// Event handling
impl Editor {
    pub fn handle_events(&mut self, event: &Event, config: &Config) -> Option<Message> {
        let Event::Key(key) = event else { return None };

        if !key.is_press() {
            return None;
        }

        if key.has_mods(KeyModifiers::CONTROL) {
            return self.handle_shortcut(key, config);
        }

        match key.code {
            KeyCode::Char(character) => {
                self.insert(character);
                self.recalculate(config);
            }
            KeyCode::Enter => {
                self.insert('\n');
                self.recalculate(config);
            }
            KeyCode::Backspace => {
                self.delete_backward();
                self.recalculate(config);
            }
            KeyCode::Delete => {
                self.delete_forward();
                self.recalculate(config);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.buffer.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.buffer.len(),
            _ => (),
        }

        None
    }

    fn handle_shortcut(&mut self, key: &KeyEvent, config: &Config) -> Option<Message> {
        match key.code {
            KeyCode::Char('p') => match clipboard::read() {
                Ok(text) => {
                    self.insert_str(&text);
                    self.recalculate(config);
                    self.notify(Toast::success("Pasted from clipboard"));
                }
                // A failed read leaves the buffer and the report untouched
                Err(error) => self.notify(Toast::error(error.to_string())),
            },
            KeyCode::Char('s') => {
                let formatted = clipboard::format_report(&self.report);
                match clipboard::write(&formatted) {
                    Ok(()) => self.notify(Toast::success("Statistics copied to clipboard")),
                    Err(error) => self.notify(Toast::error(error.to_string())),
                }
            }
            KeyCode::Char('l') => {
                self.clear();
                self.recalculate(config);
                self.notify(Toast::info("Text cleared"));
            }
            KeyCode::Char('t') => return Some(Message::ToggleAppearance),
            _ => (),
        }

        None
    }

    pub fn poll(&mut self, _config: &Config) -> Option<Message> {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }

        None
    }
}

// Rendering logic
impl Editor {
    pub fn render(&self, frame: &mut Frame, area: Rect, config: &Config) {
        let [main, footer] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
        let [editor_area, stats_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(main);

        let block = ROUNDED_BLOCK.title("Text".to_span().bold()).title_bottom(
            Line::raw(format!("{} characters", self.report.char_count)).right_aligned(),
        );

        let paragraph = Paragraph::new(self.styled_text(config))
            .wrap(Wrap { trim: false })
            .block(block);

        frame.render_widget(paragraph, editor_area);

        self.render_stats(frame, stats_area, config);
        self.render_footer(frame, footer, config);
    }

    pub fn render_top(&self, _config: &Config) -> Option<Line<'_>> {
        Some(Line::raw(format!(
            "{} words | {} sentences | ~{} min read",
            self.report.word_count, self.report.sentence_count, self.report.reading_time_minutes
        )))
    }

    /// The buffer as styled lines, with a reversed block at the cursor
    fn styled_text(&self, config: &Config) -> Text<'_> {
        let foreground = Style::new().fg(config.settings.theme.term_fg);
        let cursor_style = Style::new().fg(config.palette().highlight).reversed();

        let mut lines: Vec<Line> = Vec::new();
        let mut spans: Vec<Span> = Vec::new();
        let mut run = String::new();

        for (index, &character) in self.buffer.iter().enumerate() {
            let has_cursor = index == self.cursor;

            if has_cursor && !run.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut run), foreground));
            }

            if character == '\n' {
                if has_cursor {
                    spans.push(Span::styled(" ", cursor_style));
                }
                if !run.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut run), foreground));
                }
                lines.push(Line::from(std::mem::take(&mut spans)));
            } else if has_cursor {
                spans.push(Span::styled(character.to_string(), cursor_style));
            } else {
                run.push(character);
            }
        }

        if !run.is_empty() {
            spans.push(Span::styled(run, foreground));
        }

        if self.cursor == self.buffer.len() {
            spans.push(Span::styled(" ", cursor_style));
        }

        lines.push(Line::from(spans));

        Text::from(lines)
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect, config: &Config) {
        let palette = config.palette();
        let caps = &config.settings.caps;
        let foreground = Style::new().fg(config.settings.theme.term_fg);

        let block = ROUNDED_BLOCK.title("Statistics".to_span().bold());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [averages_area, gauges_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(inner);

        let averages = Paragraph::new(vec![
            Line::from(format!(
                "Avg word length    : {:.1}",
                self.report.avg_word_length
            )),
            Line::from(format!(
                "Avg words/sentence : {:.1}",
                self.report.avg_words_per_sentence
            )),
        ])
        .style(foreground);

        frame.render_widget(averages, averages_area);

        let rows = Layout::vertical([Constraint::Length(2); 6]).split(gauges_area);

        for (metric, row) in Metric::iter().zip(rows.iter()) {
            let [label_area, gauge_area] =
                Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(*row);

            let value = metric.value(&self.report);
            let percent = normalize_for_display(value, metric.cap(caps));

            frame.render_widget(Line::from(metric.to_string()).style(foreground), label_area);

            let gauge = Gauge::default()
                .ratio(percent / 100.0)
                .label(value.to_string())
                .gauge_style(Style::new().fg(palette.gauge))
                .use_unicode(true);

            frame.render_widget(gauge, gauge_area);
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, config: &Config) {
        let palette = config.palette();
        let theme = &config.settings.theme;

        let line = if let Some(toast) = &self.toast {
            let color = match toast.kind {
                ToastKind::Info => palette.highlight,
                ToastKind::Success => palette.success,
                ToastKind::Error => palette.error,
            };
            let color = fade(color, theme.term_bg, toast.fade_percent());

            Line::from(toast.message.as_str())
                .style(Style::new().fg(color).bold())
                .centered()
        } else {
            Line::raw("<CTRL-P> paste | <CTRL-S> copy stats | <CTRL-L> clear | <CTRL-T> theme")
                .style(Style::new().fg(fade(theme.term_fg, theme.term_bg, 0.4)))
                .centered()
        };

        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_editor() -> Editor {
        Editor {
            buffer: Vec::new(),
            cursor: 0,
            report: TextStatistics::default(),
            toast: None,
        }
    }

    #[test]
    fn test_insert_and_delete() {
        let mut editor = empty_editor();

        editor.insert_str("hello");
        assert_eq!(editor.text(), "hello");
        assert_eq!(editor.cursor, 5);

        editor.delete_backward();
        assert_eq!(editor.text(), "hell");

        editor.cursor = 0;
        editor.delete_forward();
        assert_eq!(editor.text(), "ell");

        // Deleting backwards at the start is a no-op
        editor.delete_backward();
        assert_eq!(editor.text(), "ell");
        assert_eq!(editor.cursor, 0);

        editor.clear();
        assert_eq!(editor.text(), "");
        assert_eq!(editor.cursor, 0);
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut editor = empty_editor();

        editor.insert_str("word");
        editor.cursor = 0;
        editor.insert_str("first ");

        assert_eq!(editor.text(), "first word");
        assert_eq!(editor.cursor, 6);
    }

    #[test]
    fn test_metric_rows_cover_all_caps() {
        let report = TextStatistics {
            word_count: 1,
            char_count: 2,
            char_count_no_space: 3,
            paragraph_count: 4,
            sentence_count: 5,
            reading_time_minutes: 6,
            ..TextStatistics::default()
        };
        let caps = DisplayCaps::default();

        let values: Vec<usize> = Metric::iter().map(|metric| metric.value(&report)).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);

        // Every metric resolves to a distinct, non-zero cap
        let mut caps_seen: Vec<usize> = Metric::iter().map(|metric| metric.cap(&caps)).collect();
        assert!(caps_seen.iter().all(|cap| *cap > 0));
        caps_seen.dedup();
        assert_eq!(caps_seen.len(), 6);
    }
}
