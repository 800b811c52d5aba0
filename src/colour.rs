//! Packed RGB colour values and their textual notations.
//!
//! A [`Colour`] packs three 8-bit channels into a `u32`: red in bits 16..24,
//! green in bits 8..16, blue in bits 0..8. [`Colour::NONE`] has bits set above
//! the 24-bit range, so it can never collide with a real colour.
//!
//! # Notations
//!
//! [`Colour::parse`] tries four notations in order and the first structural
//! match wins:
//!
//! | Notation | Example |
//! |----------|---------|
//! | decimal triple | `191,191,191` |
//! | hash | `#bfbfbf` |
//! | X11 short | `rgb:bf/bf/bf` |
//! | X11 long | `rgb:bfbf/bfbf/bfbf` (each channel shifted right by 8) |
//!
//! Hex channels accept up to the stated number of digits, so `#12345` reads
//! as `0x12, 0x34, 0x05`. Output is always the decimal triple.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colour(u32);

impl Colour {
    /// "No colour configured".
    pub const NONE: Colour = Colour(u32::MAX);

    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Colour((red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    /// Wrap an already packed value.
    pub const fn from_packed(packed: u32) -> Self {
        Colour(packed)
    }

    pub const fn packed(self) -> u32 {
        self.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub fn set_red(&mut self, red: u8) {
        self.0 = (self.0 & !0xFF_0000) | (red as u32) << 16;
    }

    pub fn set_green(&mut self, green: u8) {
        self.0 = (self.0 & !0xFF00) | (green as u32) << 8;
    }

    pub fn set_blue(&mut self, blue: u8) {
        self.0 = (self.0 & !0xFF) | blue as u32;
    }

    /// The colour with every channel scaled to two thirds, as used for
    /// half-bright text.
    pub fn dim(self) -> Self {
        let scale = |c: u8| (u16::from(c) * 2 / 3) as u8;
        Colour::from_rgb(scale(self.red()), scale(self.green()), scale(self.blue()))
    }

    /// Parse one of the supported notations. Returns `None` for anything else.
    pub fn parse(text: &str) -> Option<Self> {
        if let Some((r, g, b)) = decimal_triple(text) {
            return Some(Colour::from_rgb(r, g, b));
        }
        if let Some(hex) = text.strip_prefix('#')
            && let Some([r, g, b]) = hex_channels(hex, 2, None)
        {
            return Some(Colour::from_rgb(r as u8, g as u8, b as u8));
        }
        if let Some(x11) = text.strip_prefix("rgb:") {
            if let Some([r, g, b]) = hex_channels(x11, 2, Some('/')) {
                return Some(Colour::from_rgb(r as u8, g as u8, b as u8));
            }
            if let Some([r, g, b]) = hex_channels(x11, 4, Some('/')) {
                return Some(Colour::from_rgb(
                    (r >> 8) as u8,
                    (g >> 8) as u8,
                    (b >> 8) as u8,
                ));
            }
        }
        None
    }
}

/// Decimal `R,G,B`, each channel 0..=255.
fn decimal_triple(text: &str) -> Option<(u8, u8, u8)> {
    let mut parts = text.split(',');
    let mut channel = || parts.next()?.trim().parse::<u8>().ok();
    let triple = (channel()?, channel()?, channel()?);
    match parts.next() {
        None => Some(triple),
        Some(_) => None,
    }
}

/// Three hex channels of 1..=`width` digits, optionally separated by `sep`,
/// consuming the whole input.
fn hex_channels(text: &str, width: usize, sep: Option<char>) -> Option<[u16; 3]> {
    let mut rest = text;
    let mut out = [0u16; 3];
    for (i, slot) in out.iter_mut().enumerate() {
        if i > 0
            && let Some(sep) = sep
        {
            rest = rest.strip_prefix(sep)?;
        }
        let digits = rest
            .bytes()
            .take(width)
            .take_while(u8::is_ascii_hexdigit)
            .count();
        if digits == 0 {
            return None;
        }
        *slot = u16::from_str_radix(&rest[..digits], 16).ok()?;
        rest = &rest[digits..];
    }
    rest.is_empty().then_some(out)
}

impl fmt::Display for Colour {
    /// Decimal `R,G,B`. [`Colour::NONE`] renders as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return Ok(());
        }
        write!(f, "{},{},{}", self.red(), self.green(), self.blue())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a colour (expected R,G,B, #RRGGBB, rgb:RR/GG/BB or rgb:RRRR/GGGG/BBBB)")]
pub struct ParseColourError(String);

impl FromStr for Colour {
    type Err = ParseColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Colour::parse(s).ok_or_else(|| ParseColourError(s.to_string()))
    }
}

/// Accepts any textual notation, the empty string for [`Colour::NONE`], or an
/// already packed integer.
impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ColourVisitor;

        impl Visitor<'_> for ColourVisitor {
            type Value = Colour;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a colour such as \"191,191,191\" or \"#bfbfbf\", or a packed integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Colour, E> {
                if v.is_empty() {
                    return Ok(Colour::NONE);
                }
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Colour, E> {
                u32::try_from(v)
                    .map(Colour::from_packed)
                    .map_err(|_| E::custom(format!("packed colour {v} out of range")))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Colour, E> {
                u32::try_from(v)
                    .map(Colour::from_packed)
                    .map_err(|_| E::custom(format!("packed colour {v} out of range")))
            }
        }

        deserializer.deserialize_any(ColourVisitor)
    }
}
