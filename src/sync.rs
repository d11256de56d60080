//! Display synchronization: clamp a candidate RGB triple, derive every
//! representation from it, and record which field the edit came from so the
//! host never overwrites in-progress keystrokes.

use crate::color::SwatchColor;

/// Identifies the display field an edit originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "use_serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    /// The free-text hex field.
    Hex,
    /// RGB component fields.
    R,
    G,
    B,
    /// HSL component fields.
    H,
    S,
    L,
}

impl Field {
    /// Every display field, in layout order.
    pub const ALL: [Field; 7] = [
        Field::Hex,
        Field::R,
        Field::G,
        Field::B,
        Field::H,
        Field::S,
        Field::L,
    ];
}

/// Full display state derived from one accepted edit.
///
/// Settled-state invariant: `hex`, the RGB components, and the HSL components
/// all decode to the same color, modulo HSL display rounding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "use_serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Canonical `#RRGGBB` form.
    pub hex: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Rounded hue in degrees. Hues just under a full turn round up to 360.
    pub h: u16,
    /// Rounded saturation percentage.
    pub s: u8,
    /// Rounded lightness percentage.
    pub l: u8,
    /// The field this snapshot's edit originated from, if any.
    pub editing: Option<Field>,
}

/// Host-side display a snapshot gets applied to.
pub trait Surface {
    /// Write one field's display text.
    fn set_field(&mut self, field: Field, value: &str);
    /// Fill the preview swatch.
    fn fill_preview(&mut self, color: SwatchColor);
}

impl Snapshot {
    /// The underlying color.
    pub fn color(&self) -> SwatchColor {
        SwatchColor::from_rgb(self.r, self.g, self.b)
    }

    /// Whether `field` should be written when applying this snapshot.
    /// False only for the field the user is editing.
    pub fn writes(&self, field: Field) -> bool {
        self.editing != Some(field)
    }

    /// Display text for one field.
    pub fn value_for(&self, field: Field) -> String {
        match field {
            Field::Hex => self.hex.clone(),
            Field::R => self.r.to_string(),
            Field::G => self.g.to_string(),
            Field::B => self.b.to_string(),
            Field::H => self.h.to_string(),
            Field::S => self.s.to_string(),
            Field::L => self.l.to_string(),
        }
    }

    /// Apply to a host surface: writes every non-originating field, then
    /// fills the preview swatch.
    pub fn apply_to<S: Surface>(&self, surface: &mut S) {
        for field in Field::ALL {
            if self.writes(field) {
                surface.set_field(field, &self.value_for(field));
            }
        }
        surface.fill_preview(self.color());
    }
}

/// Clamp a candidate RGB triple to 0–255 per channel, derive the canonical
/// hex and rounded HSL forms, and produce the display snapshot. `editing`
/// marks the originating field as not-to-be-overwritten.
pub fn synchronize(r: i64, g: i64, b: i64, editing: Option<Field>) -> Snapshot {
    let color = SwatchColor::from_rgb(
        r.clamp(0, 255) as u8,
        g.clamp(0, 255) as u8,
        b.clamp(0, 255) as u8,
    );
    let (h, s, l) = color.to_hsl();
    Snapshot {
        hex: color.to_hex(),
        r: color.r(),
        g: color.g(),
        b: color.b(),
        h: h.round() as u16,
        s: s.round() as u8,
        l: l.round() as u8,
        editing,
    }
}
