use derive_more::{Deref, From, Into};
use palette::rgb::FromHexError;
use palette::white_point::D65;
use palette::{IntoColor, Lch, Mix, Srgb, Srgba};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Invalid color '{input}': {source}")]
pub struct ColorError {
    input: String,
    #[source]
    source: FromHexError,
}

/// An 8-bit sRGB color written as `#rrggbb` in configuration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Deref, From, Into, DeserializeFromStr, SerializeDisplay,
)]
pub struct HexColor(Srgb<u8>);

impl HexColor {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb {
            red,
            green,
            blue,
            standard: PhantomData,
        })
    }

    pub fn to_srgba(self, alpha: f64) -> Srgba<f64> {
        let (r, g, b) = self.0.into_format::<f64>().into_components();
        Srgba::new(r, g, b, alpha)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Srgb::<u8>::from_str(s.trim()).map(Self).map_err(|source| ColorError {
            input: s.to_string(),
            source,
        })
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.0.into_components();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcColor {
    pub from_color: HexColor,
    pub to_color: HexColor,
}

/// Below this chroma a color is treated as gray and its hue as undefined.
const ACHROMATIC_CHROMA: f64 = 1e-3;

/// Blends two colors in LCh, taking the short way around the hue circle.
///
/// A gray, white or black end takes the hue of the other end, so the blend only changes
/// lightness and chroma.
pub fn interpolate(from: HexColor, to: HexColor, factor: f64) -> HexColor {
    let mut a: Lch<D65, f64> = from.0.into_format::<f64>().into_color();
    let mut b: Lch<D65, f64> = to.0.into_format::<f64>().into_color();
    if a.chroma < ACHROMATIC_CHROMA {
        a.hue = b.hue;
    } else if b.chroma < ACHROMATIC_CHROMA {
        b.hue = a.hue;
    }
    let mixed: Srgb<f64> = a.mix(b, factor).into_color();
    HexColor(mixed.into_format())
}

/// Gradient endpoints for the `index`-th of `segments` arc slices.
pub fn calculate_arc_color(
    index: usize,
    segments: usize,
    gradient_color_from: HexColor,
    gradient_color_to: HexColor,
) -> ArcColor {
    let at = |i: usize| {
        interpolate(
            gradient_color_from,
            gradient_color_to,
            i as f64 / segments as f64,
        )
    };
    ArcColor {
        from_color: at(index),
        to_color: at(index + 1),
    }
}
