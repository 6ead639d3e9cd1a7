use crate::{font, theme::Theme};
use iced::advanced::text::Shaping;
use std::fmt::Display;

pub const H3_SIZE: u16 = 24;
pub const P1_SIZE: u16 = 16;
pub const P2_SIZE: u16 = 14;
pub const CAPTION_SIZE: u16 = 12;

pub fn h3<'a>(content: impl Display) -> iced::widget::Text<'a, Theme> {
    iced::widget::text!("{}", content)
        .shaping(Shaping::Advanced)
        .font(font::BOLD)
        .size(H3_SIZE)
}

pub fn p1_medium<'a>(content: impl Display) -> iced::widget::Text<'a, Theme> {
    iced::widget::text!("{}", content)
        .shaping(Shaping::Advanced)
        .font(font::MEDIUM)
        .size(P1_SIZE)
}

pub fn p2_regular<'a>(content: impl Display) -> iced::widget::Text<'a, Theme> {
    iced::widget::text!("{}", content)
        .shaping(Shaping::Advanced)
        .font(font::REGULAR)
        .size(P2_SIZE)
}

pub fn caption<'a>(content: impl Display) -> iced::widget::Text<'a, Theme> {
    iced::widget::text!("{}", content)
        .shaping(Shaping::Advanced)
        .font(font::REGULAR)
        .size(CAPTION_SIZE)
}

/// Text style shared by the banners of a content box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: u16,
    pub font: iced::Font,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: P1_SIZE,
            font: font::REGULAR,
        }
    }
}

impl TextStyle {
    pub fn size(mut self, size: u16) -> Self {
        self.size = size;
        self
    }

    pub fn font(mut self, font: iced::Font) -> Self {
        self.font = font;
        self
    }

    pub fn apply<'a>(&self, content: impl Display) -> iced::widget::Text<'a, Theme> {
        iced::widget::text!("{}", content)
            .shaping(Shaping::Advanced)
            .font(self.font)
            .size(self.size)
    }
}
