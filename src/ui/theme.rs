//! Styling for the terminal adapter.

use ratatui::style::{Color, Modifier, Style};

/// Color roles used across panes. One instance is shared by every render
/// function so the regions stay visually consistent.
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub cursor_bg: Color,
    pub tag: Color,
    pub link: Color,
    pub code: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            cursor_bg: Color::Rgb(40, 50, 60),
            tag: Color::Yellow,
            link: Color::Blue,
            code: Color::Green,
        }
    }
}

impl Theme {
    pub fn style_normal(&self) -> Style {
        Style::default()
    }

    pub fn style_title(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub fn style_accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn style_headline(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::ITALIC)
    }

    pub fn style_muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn style_selected(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn style_cursor(&self) -> Style {
        Style::default().bg(self.cursor_bg).add_modifier(Modifier::BOLD)
    }

    pub fn style_border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn style_border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    pub fn style_tag(&self) -> Style {
        Style::default().fg(self.tag)
    }

    pub fn style_link(&self) -> Style {
        Style::default().fg(self.link).add_modifier(Modifier::UNDERLINED)
    }

    pub fn style_code(&self) -> Style {
        Style::default().fg(self.code)
    }
}
