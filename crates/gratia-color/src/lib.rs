// SPDX-License-Identifier: MIT
//
// gratia-color — the color codec under the gratia palette engine.
//
// Colors are stored the way themes ship them: 8-bit sRGB with an optional
// alpha byte, printed as `#RRGGBB` / `#RRGGBBAA`. OKLCH is a derived view,
// computed on demand whenever a blend or a tuning step needs perceptual
// uniformity, then quantized straight back to bytes.
//
//   hex ↔ Color (u8 RGB) ↔ linear sRGB ↔ LMS ↔ Oklab ↔ OKLCH
//
// Everything here is a pure function of its inputs. Out-of-gamut OKLCH is
// clipped per channel on the way back to bytes; it is never an error.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod color;
pub mod css;
pub mod mix;
pub mod oklch;

pub use color::{Color, ParseColorError};
pub use mix::Tuning;
pub use oklch::Oklch;
