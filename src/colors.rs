//! Named colors for indicator lights and track labels.
//!
//! All colors are `palette::Srgb` (0.0-1.0 range). Many LED and display drivers
//! take packed `0xRRGGBB` values instead, so [`from_rgb24`] and [`to_rgb24`]
//! convert between the two.

use palette::Srgb;

/// Light fully off.
pub const OFF: Srgb = Srgb::new(0.0, 0.0, 0.0);

/// Dim grey shown by the lights between power-on and the first stop (`0x202020`).
pub const POWER_ON: Srgb = Srgb::new(32.0 / 255.0, 32.0 / 255.0, 32.0 / 255.0);

/// Base color of the chase while a track plays (`0x00FF00`).
pub const CHASE_BRIGHT: Srgb = Srgb::new(0.0, 1.0, 0.0);

/// Second phase of the chase flash (`0x002000`).
pub const CHASE_DIM: Srgb = Srgb::new(0.0, 32.0 / 255.0, 0.0);

/// Label text color when no background highlight is drawn.
pub const LABEL_IDLE: Srgb = Srgb::new(1.0, 1.0, 1.0);

/// Label text color on top of a highlight background.
pub const LABEL_HIGHLIGHTED: Srgb = Srgb::new(0.0, 0.0, 0.0);

/// Background of the selected label while stopped (`0xFFFF00`).
pub const READY_BACKGROUND: Srgb = Srgb::new(1.0, 1.0, 0.0);

/// Background of the selected label while its track plays (`0x00FF00`).
pub const ACTIVE_BACKGROUND: Srgb = Srgb::new(0.0, 1.0, 0.0);

/// Creates a color from a packed `0xRRGGBB` value. The top byte is ignored.
#[inline]
pub fn from_rgb24(packed: u32) -> Srgb {
    let red = ((packed >> 16) & 0xFF) as u8;
    let green = ((packed >> 8) & 0xFF) as u8;
    let blue = (packed & 0xFF) as u8;
    Srgb::<u8>::new(red, green, blue).into_format()
}

/// Packs a color into `0xRRGGBB`, rounding each channel to 8 bits.
#[inline]
pub fn to_rgb24(color: Srgb) -> u32 {
    let bytes: Srgb<u8> = color.into_format();
    ((bytes.red as u32) << 16) | ((bytes.green as u32) << 8) | bytes.blue as u32
}
