use iced::Color;

pub const BLACK: Color = iced::Color::BLACK;
pub const WHITE: Color = iced::Color::WHITE;
pub const LIGHT_BLACK: Color = Color::from_rgb(
    0x14 as f32 / 255.0,
    0x14 as f32 / 255.0,
    0x14 as f32 / 255.0,
);
pub const GREY_7: Color = Color::from_rgb(
    0x3F as f32 / 255.0,
    0x3F as f32 / 255.0,
    0x3F as f32 / 255.0,
);
pub const GREY_6: Color = Color::from_rgb(
    0x20 as f32 / 255.0,
    0x20 as f32 / 255.0,
    0x20 as f32 / 255.0,
);
pub const GREY_3: Color = Color::from_rgb(
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
);
pub const GREY_2: Color = Color::from_rgb(
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
);
pub const GREY_1: Color = Color::from_rgb(
    0xE6 as f32 / 255.0,
    0xE6 as f32 / 255.0,
    0xE6 as f32 / 255.0,
);

// Tertiary container roles, used by informational banners and the loading banner.
pub const TEAL_CONTAINER: Color = Color::from_rgb(
    0xBC as f32 / 255.0,
    0xEB as f32 / 255.0,
    0xE4 as f32 / 255.0,
); // #BCEBE4
pub const ON_TEAL_CONTAINER: Color = Color::from_rgb(
    0x00 as f32 / 255.0,
    0x20 as f32 / 255.0,
    0x1C as f32 / 255.0,
); // #00201C
pub const DARK_TEAL_CONTAINER: Color = Color::from_rgb(
    0x1F as f32 / 255.0,
    0x4E as f32 / 255.0,
    0x48 as f32 / 255.0,
); // #1F4E48
pub const ON_DARK_TEAL_CONTAINER: Color = Color::from_rgb(
    0xBC as f32 / 255.0,
    0xEB as f32 / 255.0,
    0xE4 as f32 / 255.0,
); // #BCEBE4

// Error container roles.
pub const RED_CONTAINER: Color = Color::from_rgb(
    0xFF as f32 / 255.0,
    0xDA as f32 / 255.0,
    0xD6 as f32 / 255.0,
); // #FFDAD6
pub const ON_RED_CONTAINER: Color = Color::from_rgb(
    0x41 as f32 / 255.0,
    0x00 as f32 / 255.0,
    0x02 as f32 / 255.0,
); // #410002
pub const DARK_RED_CONTAINER: Color = Color::from_rgb(
    0x93 as f32 / 255.0,
    0x00 as f32 / 255.0,
    0x0A as f32 / 255.0,
); // #93000A
pub const ON_DARK_RED_CONTAINER: Color = Color::from_rgb(
    0xFF as f32 / 255.0,
    0xDA as f32 / 255.0,
    0xD6 as f32 / 255.0,
); // #FFDAD6

pub const GREEN: Color = Color::from_rgb(
    0x00 as f32 / 255.0,
    0xFF as f32 / 255.0,
    0x66 as f32 / 255.0,
);
pub const RED: Color = Color::from_rgb(
    0xE2 as f32 / 255.0,
    0x4E as f32 / 255.0,
    0x1B as f32 / 255.0,
);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),
    #[error("color '{0}' must have 6 or 8 hex digits")]
    InvalidLength(String),
    #[error("color '{0}' contains a non hex digit")]
    InvalidDigit(String),
}

/// Parses `#RRGGBB` or `#RRGGBBAA`.
pub fn from_hex(s: &str) -> Result<Color, ParseColorError> {
    let digits = s
        .trim()
        .strip_prefix('#')
        .ok_or_else(|| ParseColorError::MissingHash(s.to_string()))?;
    if digits.len() != 6 && digits.len() != 8 {
        return Err(ParseColorError::InvalidLength(s.to_string()));
    }
    let mut channels = [0xFFu8; 4];
    for (i, channel) in channels.iter_mut().enumerate().take(digits.len() / 2) {
        let pair = digits
            .get(i * 2..i * 2 + 2)
            .ok_or_else(|| ParseColorError::InvalidDigit(s.to_string()))?;
        *channel = u8::from_str_radix(pair, 16)
            .map_err(|_| ParseColorError::InvalidDigit(s.to_string()))?;
    }
    Ok(Color::from_rgba8(
        channels[0],
        channels[1],
        channels[2],
        channels[3] as f32 / 255.0,
    ))
}
