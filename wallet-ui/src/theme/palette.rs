use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub pills: Pills,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
    pub scrollables: Scrollables,
    pub rule: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub warning: iced::Color,
    pub success: iced::Color,
    pub error: iced::Color,
    pub link: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub foreground: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub destructive: Button,
    pub transparent: Button,
    pub ethereum: Button,
    pub solana: Button,
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

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
    pub muted: ContainerPalette,
    pub border: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pills {
    pub simple: ContainerPalette,
    pub ethereum: ContainerPalette,
    pub solana: ContainerPalette,
    pub success: ContainerPalette,
    pub pending: ContainerPalette,
    pub failed: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub success: ContainerPalette,
    pub error: ContainerPalette,
    pub info: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Scrollables {
    pub rail: iced::Color,
    pub scroller: iced::Color,
    pub scroller_hovered: iced::Color,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::BACKGROUND,
                foreground: color::WHITE,
            },
            text: Text {
                primary: color::DARK_TEXT,
                secondary: color::GREY_4,
                warning: color::AMBER,
                success: color::GREEN,
                error: color::RED,
                link: color::BLUE,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::WALLET,
                        text: color::WHITE,
                        border: color::WALLET.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::WALLET_DARK,
                        text: color::WHITE,
                        border: color::WALLET_DARK.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::WALLET_DARK,
                        text: color::WHITE,
                        border: color::WALLET_DARK.into(),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::GREY_3,
                        text: color::WHITE,
                        border: color::GREY_3.into(),
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::WHITE,
                        text: color::DARK_TEXT,
                        border: color::GREY_2.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_1,
                        text: color::DARK_TEXT,
                        border: color::GREY_3.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::GREY_2,
                        text: color::DARK_TEXT,
                        border: color::GREY_3.into(),
                    }),
                    disabled: None,
                },
                destructive: Button {
                    active: ButtonPalette {
                        background: color::RED,
                        text: color::WHITE,
                        border: color::RED.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::DARK_RED,
                        text: color::WHITE,
                        border: color::DARK_RED.into(),
                    },
                    pressed: None,
                    disabled: None,
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_4,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WALLET,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                ethereum: Button {
                    active: ButtonPalette {
                        background: color::ETHEREUM_LIGHT,
                        text: color::DARK_TEXT,
                        border: color::ETHEREUM.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::ETHEREUM_LIGHT,
                        text: color::DARK_TEXT,
                        border: color::ETHEREUM.into(),
                    },
                    pressed: None,
                    // A selected network button is disabled, it must still look selected.
                    disabled: Some(ButtonPalette {
                        background: color::ETHEREUM_LIGHT,
                        text: color::DARK_TEXT,
                        border: color::ETHEREUM.into(),
                    }),
                },
                solana: Button {
                    active: ButtonPalette {
                        background: color::SOLANA_LIGHT,
                        text: color::DARK_TEXT,
                        border: color::SOLANA.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::SOLANA_LIGHT,
                        text: color::DARK_TEXT,
                        border: color::SOLANA.into(),
                    },
                    pressed: None,
                    disabled: Some(ButtonPalette {
                        background: color::SOLANA_LIGHT,
                        text: color::DARK_TEXT,
                        border: color::SOLANA.into(),
                    }),
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: color::GREY_2.into(),
                },
                muted: ContainerPalette {
                    background: color::GREY_1,
                    text: None,
                    border: None,
                },
                border: ContainerPalette {
                    background: color::TRANSPARENT,
                    text: None,
                    border: color::GREY_2.into(),
                },
            },
            pills: Pills {
                simple: ContainerPalette {
                    background: color::TRANSPARENT,
                    text: color::GREY_5.into(),
                    border: color::GREY_2.into(),
                },
                ethereum: ContainerPalette {
                    background: color::ETHEREUM_LIGHT,
                    text: color::ETHEREUM.into(),
                    border: color::ETHEREUM.into(),
                },
                solana: ContainerPalette {
                    background: color::SOLANA_LIGHT,
                    text: color::SOLANA.into(),
                    border: color::SOLANA.into(),
                },
                success: ContainerPalette {
                    background: color::LIGHT_GREEN,
                    text: color::GREEN.into(),
                    border: color::TRANSPARENT.into(),
                },
                pending: ContainerPalette {
                    background: color::LIGHT_AMBER,
                    text: color::AMBER.into(),
                    border: color::TRANSPARENT.into(),
                },
                failed: ContainerPalette {
                    background: color::LIGHT_RED,
                    text: color::RED.into(),
                    border: color::TRANSPARENT.into(),
                },
            },
            notifications: Notifications {
                success: ContainerPalette {
                    background: color::WHITE,
                    text: color::GREEN.into(),
                    border: Some(color::GREEN),
                },
                error: ContainerPalette {
                    background: color::WHITE,
                    text: color::RED.into(),
                    border: Some(color::RED),
                },
                info: ContainerPalette {
                    background: color::WHITE,
                    text: color::DARK_TEXT.into(),
                    border: Some(color::GREY_3),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::DARK_TEXT,
                        selection: color::ETHEREUM_LIGHT,
                        border: Some(color::GREY_2),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_1,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::GREY_4,
                        selection: color::ETHEREUM_LIGHT,
                        border: Some(color::GREY_2),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::DARK_TEXT,
                        selection: color::ETHEREUM_LIGHT,
                        border: Some(color::RED),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_1,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::GREY_4,
                        selection: color::ETHEREUM_LIGHT,
                        border: Some(color::RED),
                    },
                },
            },
            scrollables: Scrollables {
                rail: color::TRANSPARENT,
                scroller: color::GREY_2,
                scroller_hovered: color::GREY_3,
            },
            rule: color::GREY_2,
        }
    }
}
