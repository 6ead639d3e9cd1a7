use super::text::p1_medium;
use crate::{theme, widget::*};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::container;

pub fn primary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(t)).style(theme::button::primary)
}

pub fn secondary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(t)).style(theme::button::secondary)
}

fn content<'a, T: 'a>(t: &'static str) -> Container<'a, T> {
    container(p1_medium(t))
        .align_y(Vertical::Center)
        .align_x(Horizontal::Center)
        .padding([5, 15])
}
