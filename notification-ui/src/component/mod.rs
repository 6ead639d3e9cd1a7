pub mod button;
pub mod notification;
pub mod spinner;
pub mod text;

pub use notification::{
    content_box_with_notification, loading_indicator, notification, ContentBoxWithNotification,
    LoadingIndicator, Notification,
};
