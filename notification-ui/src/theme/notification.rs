use iced::widget::container::Style;
use iced::{Background, Color};

use super::palette::{BannerPalette, Notifications};
use super::Theme;

/// Color overrides of a notification banner.
///
/// Every `None` field is read from the theme palette when the banner is drawn:
/// `container` and `content` from `notifications.info`, `error_container` and
/// `content_error` from `notifications.error`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct NotificationColors {
    pub container: Option<Color>,
    pub error_container: Option<Color>,
    pub content: Option<Color>,
    pub content_error: Option<Color>,
}

impl NotificationColors {
    pub fn resolve(&self, palette: &Notifications, is_error: bool) -> BannerPalette {
        if is_error {
            BannerPalette {
                container: self.error_container.unwrap_or(palette.error.container),
                content: self.content_error.unwrap_or(palette.error.content),
            }
        } else {
            BannerPalette {
                container: self.container.unwrap_or(palette.info.container),
                content: self.content.unwrap_or(palette.info.content),
            }
        }
    }
}

/// Color overrides of the loading banner, defaulting to `notifications.loading`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct LoadingColors {
    pub container: Option<Color>,
    pub content: Option<Color>,
}

impl LoadingColors {
    pub fn resolve(&self, palette: &Notifications) -> BannerPalette {
        BannerPalette {
            container: self.container.unwrap_or(palette.loading.container),
            content: self.content.unwrap_or(palette.loading.content),
        }
    }
}

pub fn banner(palette: BannerPalette) -> Style {
    Style {
        background: Some(Background::Color(palette.container)),
        text_color: Some(palette.content),
        ..Default::default()
    }
}

pub fn info(theme: &Theme) -> Style {
    banner(theme.colors.notifications.info)
}

pub fn error(theme: &Theme) -> Style {
    banner(theme.colors.notifications.error)
}

pub fn loading(theme: &Theme) -> Style {
    banner(theme.colors.notifications.loading)
}
