use crossterm::event::{Event, KeyCode};
use ratatui::{
    layout::Constraint,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
};

use crate::app::Message;
use crate::config::Config;
use crate::page;
use crate::utils::{KeyEventHelper, center};

/// Page: Error
///
/// Displays an error
///
pub struct Error {
    message: String,
}

impl Error {
    /// Creates a new error page
    pub fn new(message: String) -> Self {
        Self { message }
    }

    pub fn render(&self, frame: &mut ratatui::Frame, area: ratatui::prelude::Rect, config: &Config) {
        let center = center(area, Constraint::Percentage(80), Constraint::Percentage(80));
        let text = Paragraph::new(Line::from(vec![
            Span::styled("Error: ", Style::new().bold().fg(config.palette().error)),
            Span::raw(self.message.as_str()),
        ]))
        .block(Block::new().padding(Padding::new(0, 0, center.height / 2, 0)));

        frame.render_widget(text, center);
    }

    pub fn render_top(&self, _config: &Config) -> Option<Line<'_>> {
        Some(Line::raw("ERROR | <Enter> to continue"))
    }

    pub fn handle_events(&mut self, event: &Event, config: &Config) -> Option<Message> {
        if let Event::Key(key) = event
            && key.is_press()
            && key.code == KeyCode::Enter
        {
            return Some(Message::Show(page::Editor::new(config).into()));
        }

        None
    }
}

impl From<Box<dyn std::error::Error + Send>> for Error {
    fn from(value: Box<dyn std::error::Error + Send>) -> Self {
        Self::new(value.to_string())
    }
}
