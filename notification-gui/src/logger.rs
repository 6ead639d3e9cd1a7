use std::{error::Error, str::FromStr};
use tracing_subscriber::{
    filter::{self, LevelFilter},
    prelude::*,
};

/// Targets of the rendering stack, too verbose below `warn`.
const NOISY_TARGETS: &[&str] = &[
    "iced_wgpu",
    "iced_winit",
    "iced_graphics",
    "iced_runtime",
    "iced_core",
    "iced_tiny_skia",
    "wgpu_core",
    "wgpu_hal",
    "naga",
    "winit",
    "mio",
    "cosmic_text",
    "polling",
    "calloop",
    "async_io",
    "sctk",
];

fn is_noisy(target: &str) -> bool {
    NOISY_TARGETS.iter().any(|prefix| target.starts_with(prefix))
}

pub fn setup_logger(log_level: LevelFilter) -> Result<(), Box<dyn Error>> {
    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(log_level)
                .with_filter(filter::filter_fn(|metadata| !is_noisy(metadata.target()))),
        )
        .try_init()?;

    Ok(())
}

/// Parse LOG_LEVEL environment variable.
pub fn parse_log_level() -> Result<Option<LevelFilter>, Box<dyn Error>> {
    if let Ok(l) = std::env::var("LOG_LEVEL") {
        Ok(Some(LevelFilter::from_str(&l)?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noisy_targets() {
        assert!(is_noisy("wgpu_core::device"));
        assert!(is_noisy("iced_winit"));
        assert!(!is_noisy("notification_ui::widget::animated"));
        assert!(!is_noisy("notification_gui::app"));
    }
}
