pub mod button;
pub mod container;
pub mod notification;
pub mod palette;
pub mod text;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Theme {
    pub colors: palette::Palette,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            colors: palette::Palette::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            colors: palette::Palette::light(),
        }
    }
}

impl iced::application::DefaultStyle for Theme {
    fn default_style(&self) -> iced::application::Appearance {
        iced::application::Appearance {
            background_color: self.colors.general.background,
            text_color: self.colors.text.primary,
        }
    }
}
