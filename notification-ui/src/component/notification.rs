//! Notification banner and loading indicator stacked over caller content.
//!
//! All three units are pure functions of their inputs: they are rebuilt on
//! every `view` and only the show/hide transition keeps state, inside the
//! widget tree. Setting and clearing the message (for instance with a
//! delayed `Task`) is left to the application.

use std::time::Duration;

use iced::{Alignment, Color, Length, Padding};

use super::{spinner::Spinner, text::TextStyle};
use crate::{
    theme::{
        self,
        notification::{LoadingColors, NotificationColors},
        palette::BannerPalette,
        Theme,
    },
    widget::{transition::DEFAULT_DURATION, *},
};

pub const LOADING_LABEL: &str = "Loading";

/// Banner padding, the top leaves room for a status or app bar.
pub const PADDING: Padding = Padding {
    top: 28.0 + 8.0,
    right: 8.0,
    bottom: 16.0,
    left: 8.0,
};

/// Gap between the loading label and the spinner.
pub const SPACING: f32 = 8.0;

/// The banner is shown for a non-blank message, unless loading.
pub fn is_notification_visible(message: &str, is_loading: bool) -> bool {
    !message.trim().is_empty() && !is_loading
}

pub fn is_loading_visible(is_loading: bool) -> bool {
    is_loading
}

/// Full-width banner displaying a single message.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    message: String,
    is_visible: bool,
    is_error: bool,
    colors: NotificationColors,
    text_style: TextStyle,
    duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, is_visible: bool) -> Self {
        Self {
            message: message.into(),
            is_visible,
            is_error: false,
            colors: NotificationColors::default(),
            text_style: TextStyle::default(),
            duration: DEFAULT_DURATION,
        }
    }

    /// Use the error colors.
    pub fn error(mut self, is_error: bool) -> Self {
        self.is_error = is_error;
        self
    }

    pub fn container_color(mut self, color: Color) -> Self {
        self.colors.container = Some(color);
        self
    }

    pub fn error_container_color(mut self, color: Color) -> Self {
        self.colors.error_container = Some(color);
        self
    }

    pub fn content_color(mut self, color: Color) -> Self {
        self.colors.content = Some(color);
        self
    }

    pub fn content_error_color(mut self, color: Color) -> Self {
        self.colors.content_error = Some(color);
        self
    }

    pub fn colors(mut self, colors: NotificationColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// Colors the banner is drawn with under `theme`.
    pub fn palette(&self, theme: &Theme) -> BannerPalette {
        self.colors
            .resolve(&theme.colors.notifications, self.is_error)
    }
}

impl<'a, Message: 'a> From<Notification> for Element<'a, Message> {
    fn from(n: Notification) -> Self {
        let (is_visible, duration) = (n.is_visible, n.duration);
        let banner = Container::new(n.text_style.apply(&n.message))
            .padding(PADDING)
            .width(Length::Fill)
            .style(move |theme: &Theme| theme::notification::banner(n.palette(theme)));
        AnimatedVisibility::new(is_visible, banner)
            .duration(duration)
            .into()
    }
}

/// Full-width banner with a "Loading" label beside a spinner.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingIndicator {
    is_loading: bool,
    colors: LoadingColors,
    text_style: TextStyle,
    duration: Duration,
}

impl LoadingIndicator {
    pub fn new(is_loading: bool) -> Self {
        Self {
            is_loading,
            colors: LoadingColors::default(),
            text_style: TextStyle::default(),
            duration: DEFAULT_DURATION,
        }
    }

    pub fn container_color(mut self, color: Color) -> Self {
        self.colors.container = Some(color);
        self
    }

    pub fn content_color(mut self, color: Color) -> Self {
        self.colors.content = Some(color);
        self
    }

    pub fn colors(mut self, colors: LoadingColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_visible(&self) -> bool {
        is_loading_visible(self.is_loading)
    }

    pub fn palette(&self, theme: &Theme) -> BannerPalette {
        self.colors.resolve(&theme.colors.notifications)
    }
}

impl<'a, Message: 'a> From<LoadingIndicator> for Element<'a, Message> {
    fn from(l: LoadingIndicator) -> Self {
        let (is_visible, duration) = (l.is_visible(), l.duration);
        // The spinner takes the container text color.
        let banner = Container::new(
            Row::new()
                .push(l.text_style.apply(LOADING_LABEL))
                .push(Spinner::new())
                .spacing(SPACING)
                .align_y(Alignment::Center),
        )
        .padding(PADDING)
        .width(Length::Fill)
        .style(move |theme: &Theme| theme::notification::banner(l.palette(theme)));
        AnimatedVisibility::new(is_visible, banner)
            .duration(duration)
            .into()
    }
}

/// Caller content with a [`Notification`] and a [`LoadingIndicator`] stacked
/// on top of it.
///
/// The loading indicator takes precedence: while loading, the notification
/// is hidden whatever the message.
pub struct ContentBoxWithNotification<'a, Message> {
    message: String,
    is_error: bool,
    is_loading: bool,
    content: Element<'a, Message>,
    colors: NotificationColors,
    loading_colors: LoadingColors,
    text_style: TextStyle,
    duration: Duration,
}

impl<'a, Message: 'a> ContentBoxWithNotification<'a, Message> {
    pub fn new(message: impl Into<String>, content: impl Into<Element<'a, Message>>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
            is_loading: false,
            content: content.into(),
            colors: NotificationColors::default(),
            loading_colors: LoadingColors::default(),
            text_style: TextStyle::default(),
            duration: DEFAULT_DURATION,
        }
    }

    pub fn error(mut self, is_error: bool) -> Self {
        self.is_error = is_error;
        self
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    pub fn container_color(mut self, color: Color) -> Self {
        self.colors.container = Some(color);
        self
    }

    pub fn error_container_color(mut self, color: Color) -> Self {
        self.colors.error_container = Some(color);
        self
    }

    pub fn content_color(mut self, color: Color) -> Self {
        self.colors.content = Some(color);
        self
    }

    pub fn content_error_color(mut self, color: Color) -> Self {
        self.colors.content_error = Some(color);
        self
    }

    pub fn loading_container_color(mut self, color: Color) -> Self {
        self.loading_colors.container = Some(color);
        self
    }

    pub fn loading_content_color(mut self, color: Color) -> Self {
        self.loading_colors.content = Some(color);
        self
    }

    pub fn colors(mut self, colors: NotificationColors, loading_colors: LoadingColors) -> Self {
        self.colors = colors;
        self.loading_colors = loading_colors;
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// The banner layer, visible only for a non-blank message while not loading.
    pub fn notification(&self) -> Notification {
        Notification::new(
            self.message.clone(),
            is_notification_visible(&self.message, self.is_loading),
        )
        .error(self.is_error)
        .colors(self.colors)
        .text_style(self.text_style)
        .duration(self.duration)
    }

    pub fn loading_indicator(&self) -> LoadingIndicator {
        LoadingIndicator::new(self.is_loading)
            .colors(self.loading_colors)
            .text_style(self.text_style)
            .duration(self.duration)
    }
}

impl<'a, Message: 'a> From<ContentBoxWithNotification<'a, Message>> for Element<'a, Message> {
    fn from(b: ContentBoxWithNotification<'a, Message>) -> Self {
        let notification = b.notification();
        let loading = b.loading_indicator();
        Stack::new()
            .push(b.content)
            .push(notification)
            .push(loading)
            .into()
    }
}

/// [`Notification`] drawn with the theme colors.
pub fn notification<'a, Message: 'a>(
    message: impl Into<String>,
    is_visible: bool,
    is_error_notification: bool,
) -> Element<'a, Message> {
    Notification::new(message, is_visible)
        .error(is_error_notification)
        .into()
}

/// [`LoadingIndicator`] drawn with the theme colors.
pub fn loading_indicator<'a, Message: 'a>(is_loading: bool) -> Element<'a, Message> {
    LoadingIndicator::new(is_loading).into()
}

/// [`ContentBoxWithNotification`] drawn with the theme colors.
pub fn content_box_with_notification<'a, Message: 'a>(
    message: impl Into<String>,
    is_error_notification: bool,
    is_loading: bool,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    ContentBoxWithNotification::new(message, content)
        .error(is_error_notification)
        .loading(is_loading)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use iced::widget::Space;
    use proptest::prelude::*;

    fn content_box(
        message: &str,
        is_error: bool,
        is_loading: bool,
    ) -> ContentBoxWithNotification<'static, ()> {
        ContentBoxWithNotification::new(message, Space::new(Length::Fill, Length::Fill))
            .error(is_error)
            .loading(is_loading)
    }

    proptest! {
        #[test]
        fn blank_message_never_shows_banner(
            message in "[ \t\n]{0,8}",
            is_error in any::<bool>(),
            is_loading in any::<bool>(),
        ) {
            let b = content_box(&message, is_error, is_loading);
            prop_assert!(!b.notification().is_visible());
        }

        #[test]
        fn non_blank_message_shows_banner_unless_loading(
            message in "[ ]{0,3}[a-zA-Z0-9!.]{1,20}[ ]{0,3}",
            is_error in any::<bool>(),
            is_loading in any::<bool>(),
        ) {
            let b = content_box(&message, is_error, is_loading);
            prop_assert_eq!(b.notification().is_visible(), !is_loading);
            prop_assert!(!(b.notification().is_visible() && b.loading_indicator().is_visible()));
        }

        #[test]
        fn loading_visibility_follows_flag(message in ".*", is_loading in any::<bool>()) {
            let b = content_box(&message, false, is_loading);
            prop_assert_eq!(b.loading_indicator().is_visible(), is_loading);
        }
    }

    #[test]
    fn test_saved_shows_info_banner() {
        let theme = Theme::light();
        let b = content_box("Saved", false, false);
        let n = b.notification();
        assert!(n.is_visible());
        assert!(!b.loading_indicator().is_visible());
        assert_eq!(n.message(), "Saved");
        assert_eq!(n.palette(&theme), theme.colors.notifications.info);
    }

    #[test]
    fn test_network_error_shows_error_banner() {
        let theme = Theme::dark();
        let n = content_box("Network error", true, false).notification();
        assert!(n.is_visible());
        assert!(n.is_error());
        assert_eq!(n.palette(&theme), theme.colors.notifications.error);
    }

    #[test]
    fn test_loading_hides_banner() {
        let b = content_box("", false, true);
        assert!(b.loading_indicator().is_visible());
        assert!(!b.notification().is_visible());

        let b = content_box("x", false, true);
        assert!(b.loading_indicator().is_visible());
        assert!(!b.notification().is_visible());
    }

    #[test]
    fn test_overrides_reach_both_layers() {
        let theme = Theme::dark();
        let b = content_box("Saved", false, true)
            .container_color(color::GREEN)
            .loading_content_color(color::WHITE);
        assert_eq!(b.notification().palette(&theme).container, color::GREEN);
        let loading = b.loading_indicator().palette(&theme);
        assert_eq!(loading.content, color::WHITE);
        assert_eq!(
            loading.container,
            theme.colors.notifications.loading.container
        );
    }

    #[test]
    fn test_visibility_rules() {
        assert!(is_notification_visible("Saved", false));
        assert!(!is_notification_visible("Saved", true));
        assert!(!is_notification_visible("   ", false));
        assert!(!is_notification_visible("", false));
        assert!(is_loading_visible(true));
        assert!(!is_loading_visible(false));
    }
}
