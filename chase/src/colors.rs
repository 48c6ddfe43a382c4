//! Terminal colour palette.

use chase_core::Color;

pub const FG: Color = Color::DEFAULT;
pub const FG_WALL: Color = Color::from_rgb(0x8a, 0x8a, 0x8a);
pub const FG_PLAYER: Color = Color::from_rgb(0x26, 0x8b, 0xd2);
pub const FG_PURSUER: Color = Color::from_rgb(0xdc, 0x32, 0x2f);
pub const FG_PATH: Color = Color::from_rgb(0x85, 0x99, 0x00);
pub const FG_STATUS: Color = Color::from_rgb(0xee, 0xe8, 0xd5);
pub const FG_ALERT: Color = Color::from_rgb(0xcb, 0x4b, 0x16);
