use iced::widget::button::{Catalog, Status, Style, StyleFn};
use iced::{Background, Border, Color};

use super::palette::{Button, ButtonPalette};
use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.primary, status)
}

pub fn secondary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.secondary, status)
}

fn style(p: &ButtonPalette) -> Style {
    Style {
        background: Some(Background::Color(p.background)),
        text_color: p.text,
        border: if let Some(color) = p.border {
            Border {
                radius: 25.0.into(),
                width: 1.0,
                color,
            }
        } else {
            Border {
                radius: 25.0.into(),
                ..Default::default()
            }
        },
        ..Default::default()
    }
}

fn button(p: &Button, status: Status) -> Style {
    match status {
        Status::Active => style(&p.active),
        Status::Hovered => style(&p.hovered),
        Status::Pressed => style(p.pressed.as_ref().unwrap_or(&p.active)),
        Status::Disabled => {
            if let Some(disabled) = &p.disabled {
                style(disabled)
            } else {
                let active = style(&p.active);
                Style {
                    text_color: Color {
                        a: 0.2,
                        ..active.text_color
                    },
                    ..active
                }
            }
        }
    }
}
