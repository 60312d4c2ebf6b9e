use iced::Color;

pub const EMERALD_GREEN: Color = Color::from_rgb(
    0x10 as f32 / 255.0,
    0xB9 as f32 / 255.0,
    0x81 as f32 / 255.0,
);
pub const EMERALD_GREEN_DARK: Color = Color::from_rgb(
    0x0F as f32 / 255.0,
    0x9E as f32 / 255.0,
    0x73 as f32 / 255.0,
);
pub const NAVY: Color = Color::from_rgb(
    0x1F as f32 / 255.0,
    0x29 as f32 / 255.0,
    0x37 as f32 / 255.0,
);
pub const SURFACE_LIGHT: Color = Color::from_rgb(
    0xF7 as f32 / 255.0,
    0xFD as f32 / 255.0,
    0xF9 as f32 / 255.0,
);
pub const TEXT_PRIMARY: Color = Color::from_rgb(
    0x11 as f32 / 255.0,
    0x18 as f32 / 255.0,
    0x27 as f32 / 255.0,
);
pub const TEXT_SECONDARY: Color = Color::from_rgb(
    0x6B as f32 / 255.0,
    0x72 as f32 / 255.0,
    0x80 as f32 / 255.0,
);
pub const ACCENT_RED: Color = Color::from_rgb(
    0xEB as f32 / 255.0,
    0x57 as f32 / 255.0,
    0x57 as f32 / 255.0,
);
pub const OUTLINE: Color = Color::from_rgb(
    0xE5 as f32 / 255.0,
    0xE7 as f32 / 255.0,
    0xEB as f32 / 255.0,
);
