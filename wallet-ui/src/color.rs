use iced::Color;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const WHITE: Color = iced::Color::WHITE;

pub const GREY_1: Color = Color::from_rgb(
    0xF4 as f32 / 255.0,
    0xF4 as f32 / 255.0,
    0xF5 as f32 / 255.0,
);
pub const GREY_2: Color = Color::from_rgb(
    0xE4 as f32 / 255.0,
    0xE4 as f32 / 255.0,
    0xE7 as f32 / 255.0,
);
pub const GREY_3: Color = Color::from_rgb(
    0xA1 as f32 / 255.0,
    0xA1 as f32 / 255.0,
    0xAA as f32 / 255.0,
);
pub const GREY_4: Color = Color::from_rgb(
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
    0x7A as f32 / 255.0,
);
pub const GREY_5: Color = Color::from_rgb(
    0x3F as f32 / 255.0,
    0x3F as f32 / 255.0,
    0x46 as f32 / 255.0,
);
pub const DARK_TEXT: Color = Color::from_rgb(
    0x09 as f32 / 255.0,
    0x09 as f32 / 255.0,
    0x0B as f32 / 255.0,
);

pub const BACKGROUND: Color = Color::from_rgb(
    0xF8 as f32 / 255.0,
    0xF8 as f32 / 255.0,
    0xFB as f32 / 255.0,
);

// Network accents
pub const ETHEREUM: Color = Color::from_rgb(
    0x62 as f32 / 255.0,
    0x7E as f32 / 255.0,
    0xEA as f32 / 255.0,
); // #627EEA
pub const ETHEREUM_LIGHT: Color = Color::from_rgba(
    0x62 as f32 / 255.0,
    0x7E as f32 / 255.0,
    0xEA as f32 / 255.0,
    0.15,
);
pub const SOLANA: Color = Color::from_rgb(
    0x99 as f32 / 255.0,
    0x45 as f32 / 255.0,
    0xFF as f32 / 255.0,
); // #9945FF
pub const SOLANA_LIGHT: Color = Color::from_rgba(
    0x99 as f32 / 255.0,
    0x45 as f32 / 255.0,
    0xFF as f32 / 255.0,
    0.15,
);

// Wallet gradient stand-in, between the two network accents
pub const WALLET: Color = Color::from_rgb(
    0x7C as f32 / 255.0,
    0x5C as f32 / 255.0,
    0xF4 as f32 / 255.0,
);
pub const WALLET_DARK: Color = Color::from_rgb(
    0x5B as f32 / 255.0,
    0x3F as f32 / 255.0,
    0xD0 as f32 / 255.0,
);

pub const GREEN: Color = Color::from_rgb(
    0x16 as f32 / 255.0,
    0xA3 as f32 / 255.0,
    0x4A as f32 / 255.0,
);
pub const LIGHT_GREEN: Color = Color::from_rgb(
    0xDC as f32 / 255.0,
    0xFC as f32 / 255.0,
    0xE7 as f32 / 255.0,
);
pub const RED: Color = Color::from_rgb(
    0xDC as f32 / 255.0,
    0x26 as f32 / 255.0,
    0x26 as f32 / 255.0,
);
pub const DARK_RED: Color = Color::from_rgb(
    0xB9 as f32 / 255.0,
    0x1C as f32 / 255.0,
    0x1C as f32 / 255.0,
);
pub const LIGHT_RED: Color = Color::from_rgb(
    0xFE as f32 / 255.0,
    0xE2 as f32 / 255.0,
    0xE2 as f32 / 255.0,
);
pub const AMBER: Color = Color::from_rgb(
    0xD9 as f32 / 255.0,
    0x77 as f32 / 255.0,
    0x06 as f32 / 255.0,
);
pub const LIGHT_AMBER: Color = Color::from_rgb(
    0xFE as f32 / 255.0,
    0xF3 as f32 / 255.0,
    0xC7 as f32 / 255.0,
);
pub const BLUE: Color = Color::from_rgb(
    0x3B as f32 / 255.0,
    0x82 as f32 / 255.0,
    0xF6 as f32 / 255.0,
);
