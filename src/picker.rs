//! Stateful editor: owns the last accepted snapshot and turns raw field
//! text into synchronization passes. Unparseable input never errors, it
//! simply leaves the previous state in place.

use tracing::{debug, trace};

use crate::color::SwatchColor;
use crate::constants;
use crate::math;
use crate::sync::{synchronize, Field, Snapshot};

/// Picker state. Every accepted edit replaces the snapshot wholesale; there
/// is no other state and no queuing, each event is handled to completion.
#[derive(Debug, Clone)]
pub struct Picker {
    current: Snapshot,
}

impl Default for Picker {
    fn default() -> Self {
        Self::new()
    }
}

impl Picker {
    /// Start from the seed color. The initial snapshot excludes no field,
    /// so the first apply writes every widget.
    pub fn new() -> Self {
        let (r, g, b) = constants::DEFAULT_COLOR;
        Self {
            current: synchronize(r as i64, g as i64, b as i64, None),
        }
    }

    /// The last accepted snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.current
    }

    /// The last accepted color.
    pub fn color(&self) -> SwatchColor {
        self.current.color()
    }

    /// Raw text from the hex field. Returns the new snapshot, or `None`
    /// when the text is not a 3- or 6-digit hex color (state unchanged).
    pub fn hex_input(&mut self, raw: &str) -> Option<&Snapshot> {
        let Some(color) = SwatchColor::from_hex(raw.trim()) else {
            debug!(raw, "hex input ignored");
            return None;
        };
        self.accept(
            color.r() as i64,
            color.g() as i64,
            color.b() as i64,
            Field::Hex,
        )
    }

    /// Raw text from the three RGB fields, tagged with the one being
    /// edited. Empty components count as 0; a non-numeric component drops
    /// the whole event. Out-of-range values are clamped on synchronization.
    pub fn rgb_input(&mut self, r: &str, g: &str, b: &str, edited: Field) -> Option<&Snapshot> {
        let (Some(r), Some(g), Some(b)) =
            (parse_component(r), parse_component(g), parse_component(b))
        else {
            debug!("rgb input ignored");
            return None;
        };
        self.accept(r, g, b, edited)
    }

    /// Raw text from the three HSL fields. Same parsing policy as RGB. The
    /// values feed the sector math as given; an out-of-range hue lands in
    /// the final sector rather than being rejected.
    pub fn hsl_input(&mut self, h: &str, s: &str, l: &str, edited: Field) -> Option<&Snapshot> {
        let (Some(h), Some(s), Some(l)) =
            (parse_component(h), parse_component(s), parse_component(l))
        else {
            debug!("hsl input ignored");
            return None;
        };
        let (r, g, b) = math::hsl_to_rgb(h as f64 / 360.0, s as f64 / 100.0, l as f64 / 100.0);
        self.accept(
            (r * 255.0).round() as i64,
            (g * 255.0).round() as i64,
            (b * 255.0).round() as i64,
            edited,
        )
    }

    fn accept(&mut self, r: i64, g: i64, b: i64, edited: Field) -> Option<&Snapshot> {
        self.current = synchronize(r, g, b, Some(edited));
        trace!(hex = %self.current.hex, "synchronized");
        Some(&self.current)
    }
}

/// Base-10 component parse; empty input counts as 0.
fn parse_component(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse().ok()
}

#[cfg(feature = "clipboard")]
impl Picker {
    /// Copy the current hex string to the system clipboard.
    pub fn copy_hex(&self) {
        copy_to_clipboard(&self.current.hex);
    }

    /// Copy the current color as `"r, g, b"`.
    pub fn copy_rgb(&self) {
        let s = &self.current;
        copy_to_clipboard(&format!("{}, {}, {}", s.r, s.g, s.b));
    }

    /// Copy the current color as `"h, s, l"`.
    pub fn copy_hsl(&self) {
        let s = &self.current;
        copy_to_clipboard(&format!("{}, {}, {}", s.h, s.s, s.l));
    }
}

#[cfg(feature = "clipboard")]
fn copy_to_clipboard(text: &str) {
    if let Ok(mut clipboard) = arboard::Clipboard::new() {
        let _ = clipboard.set_text(text);
    }
}
