//! # swatch-core
//!
//! Framework-agnostic state core for a color picker widget.
//!
//! Keeps the hex, RGB, and HSL representations of a single color in sync as
//! any one of them is edited, and hands the host UI a full display snapshot
//! (preview color included) after every accepted edit. The host feeds raw
//! field text plus the originating [`Field`] in; no rendering, event wiring,
//! or layout lives here.
//!
//! ## Usage
//!
//! ```rust
//! use swatch_core::{Field, Picker};
//!
//! let mut picker = Picker::new();
//! let snap = picker.hex_input("0f0").unwrap();
//! assert_eq!((snap.r, snap.g, snap.b), (0, 255, 0));
//! assert_eq!((snap.h, snap.s, snap.l), (120, 100, 50));
//! // The field being typed in is never overwritten mid-edit.
//! assert!(!snap.writes(Field::Hex));
//! ```

mod color;
mod constants;
mod math;
mod picker;
mod sync;

pub use color::SwatchColor;
pub use picker::Picker;
pub use sync::{synchronize, Field, Snapshot, Surface};
