use std::time::Duration;

use iced::{Alignment, Length, Task};

use notification_ui::{
    component::{button, text, ContentBoxWithNotification},
    theme::{
        self,
        notification::{LoadingColors, NotificationColors},
        Theme,
    },
    widget::*,
};

use crate::config::Config;

pub const SAVED: &str = "Saved";
pub const NETWORK_ERROR: &str = "Network error";

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Notify { message: String, is_error: bool },
    /// Auto-dismiss timer of the notification with the given id.
    Dismiss(u64),
    ToggleLoading,
    Clear,
}

/// Demo screen owning the notification state the content box renders.
///
/// Every new message gets an id; a dismiss timer only clears the message it
/// was started for, so a late timer never hides a newer notification.
pub struct App {
    message: String,
    is_error: bool,
    is_loading: bool,
    notification_id: u64,
    dismiss_after: Option<Duration>,
    theme: Theme,
    colors: NotificationColors,
    loading_colors: LoadingColors,
}

impl App {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let (colors, loading_colors) = config.notification_colors().unwrap_or_else(|e| {
            tracing::error!("Ignoring color overrides: {}", e);
            Default::default()
        });
        (
            Self {
                message: String::new(),
                is_error: false,
                is_loading: false,
                notification_id: 0,
                dismiss_after: config.dismiss_after(),
                theme: config.theme(),
                colors,
                loading_colors,
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        String::from("Content box with notification")
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notify { message, is_error } => {
                tracing::info!("Notify: {} (error: {})", message, is_error);
                self.message = message;
                self.is_error = is_error;
                self.notification_id += 1;
                if let Some(delay) = self.dismiss_after {
                    let id = self.notification_id;
                    return Task::perform(
                        async move {
                            tokio::time::sleep(delay).await;
                            id
                        },
                        Message::Dismiss,
                    );
                }
            }
            Message::Dismiss(id) => {
                if id == self.notification_id {
                    tracing::debug!("Dismissing notification {}", id);
                    self.message.clear();
                } else {
                    tracing::trace!("Notification {} already replaced", id);
                }
            }
            Message::ToggleLoading => {
                self.is_loading = !self.is_loading;
                tracing::info!("Loading: {}", self.is_loading);
            }
            Message::Clear => {
                self.message.clear();
                self.notification_id += 1;
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<Message> {
        let controls = Row::new()
            .spacing(10)
            .push(button::primary(SAVED).on_press(Message::Notify {
                message: SAVED.to_string(),
                is_error: false,
            }))
            .push(button::primary(NETWORK_ERROR).on_press(Message::Notify {
                message: NETWORK_ERROR.to_string(),
                is_error: true,
            }))
            .push(
                button::secondary(if self.is_loading {
                    "Stop loading"
                } else {
                    "Start loading"
                })
                .on_press(Message::ToggleLoading),
            )
            .push(button::secondary("Clear").on_press(Message::Clear));

        let dismiss = match self.dismiss_after {
            Some(delay) => format!("Notifications are cleared after {} ms", delay.as_millis()),
            None => "Notifications stay until cleared".to_string(),
        };

        let content = Container::new(
            Column::new()
                .spacing(20)
                .align_x(Alignment::Center)
                .push(text::h3("Content box with notification"))
                .push(
                    text::p2_regular("The banner and the loading indicator slide over this content.")
                        .style(theme::text::secondary),
                )
                .push(controls)
                .push(text::caption(dismiss).style(theme::text::secondary)),
        )
        .padding(40)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(theme::container::background);

        ContentBoxWithNotification::new(self.message.as_str(), content)
            .error(self.is_error)
            .loading(self.is_loading)
            .colors(self.colors, self.loading_colors)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(dismiss_after_ms: u64) -> App {
        App::new(Config {
            dismiss_after_ms: Some(dismiss_after_ms),
            ..Default::default()
        })
        .0
    }

    fn notify(message: &str, is_error: bool) -> Message {
        Message::Notify {
            message: message.to_string(),
            is_error,
        }
    }

    #[test]
    fn test_notify_and_dismiss() {
        let mut app = app(3000);
        let _ = app.update(notify(SAVED, false));
        assert_eq!(app.message, SAVED);
        assert!(!app.is_error);

        let _ = app.update(Message::Dismiss(app.notification_id));
        assert!(app.message.is_empty());
    }

    #[test]
    fn test_stale_dismiss_keeps_newer_message() {
        let mut app = app(3000);
        let _ = app.update(notify(SAVED, false));
        let first = app.notification_id;
        let _ = app.update(notify(NETWORK_ERROR, true));

        let _ = app.update(Message::Dismiss(first));
        assert_eq!(app.message, NETWORK_ERROR);
        assert!(app.is_error);
    }

    #[test]
    fn test_clear_invalidates_pending_dismiss() {
        let mut app = app(0);
        let _ = app.update(notify(SAVED, false));
        let id = app.notification_id;
        let _ = app.update(Message::Clear);
        assert!(app.message.is_empty());

        let _ = app.update(notify(NETWORK_ERROR, true));
        assert_ne!(app.notification_id, id);
        let _ = app.update(Message::Dismiss(id));
        assert_eq!(app.message, NETWORK_ERROR);
    }

    #[test]
    fn test_toggle_loading_keeps_message() {
        let mut app = app(3000);
        let _ = app.update(notify(SAVED, false));
        let _ = app.update(Message::ToggleLoading);
        assert!(app.is_loading);
        assert_eq!(app.message, SAVED);
        let _ = app.update(Message::ToggleLoading);
        assert!(!app.is_loading);
    }

    #[test]
    fn test_invalid_colors_fall_back_to_theme() {
        let (app, _) = App::new(Config {
            colors: crate::config::ColorsConfig {
                container_color: Some("teal".to_string()),
                ..Default::default()
            },
            ..Default::default()
        });
        assert_eq!(app.colors, NotificationColors::default());
    }
}
