use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub notifications: Notifications,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

/// Background and foreground of a full-width banner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BannerPalette {
    pub container: iced::Color,
    pub content: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub info: BannerPalette,
    pub error: BannerPalette,
    pub loading: BannerPalette,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            general: General {
                background: color::LIGHT_BLACK,
            },
            text: Text {
                primary: color::WHITE,
                secondary: color::GREY_2,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::GREEN,
                        text: color::LIGHT_BLACK,
                        border: color::GREEN.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::GREEN,
                        text: color::BLACK,
                        border: color::GREEN.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::GREEN,
                        text: color::BLACK,
                        border: color::GREEN.into(),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::GREY_7,
                        text: color::GREY_3,
                        border: None,
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::GREY_6,
                        text: color::WHITE,
                        border: color::GREY_7.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_6,
                        text: color::GREEN,
                        border: color::GREEN.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::GREY_6,
                        text: color::GREEN,
                        border: color::GREEN.into(),
                    }),
                    disabled: None,
                },
            },
            notifications: Notifications {
                info: BannerPalette {
                    container: color::DARK_TEAL_CONTAINER,
                    content: color::ON_DARK_TEAL_CONTAINER,
                },
                error: BannerPalette {
                    container: color::DARK_RED_CONTAINER,
                    content: color::ON_DARK_RED_CONTAINER,
                },
                loading: BannerPalette {
                    container: color::DARK_TEAL_CONTAINER,
                    content: color::ON_DARK_TEAL_CONTAINER,
                },
            },
        }
    }

    pub fn light() -> Self {
        Self {
            general: General {
                background: color::WHITE,
            },
            text: Text {
                primary: color::LIGHT_BLACK,
                secondary: color::GREY_3,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::LIGHT_BLACK,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_7,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: None,
                    disabled: Some(ButtonPalette {
                        background: color::GREY_2,
                        text: color::GREY_3,
                        border: None,
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::WHITE,
                        text: color::LIGHT_BLACK,
                        border: color::GREY_2.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_1,
                        text: color::LIGHT_BLACK,
                        border: color::GREY_3.into(),
                    },
                    pressed: None,
                    disabled: None,
                },
            },
            notifications: Notifications {
                info: BannerPalette {
                    container: color::TEAL_CONTAINER,
                    content: color::ON_TEAL_CONTAINER,
                },
                error: BannerPalette {
                    container: color::RED_CONTAINER,
                    content: color::ON_RED_CONTAINER,
                },
                loading: BannerPalette {
                    container: color::TEAL_CONTAINER,
                    content: color::ON_TEAL_CONTAINER,
                },
            },
        }
    }
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}
