//! Standalone demo: drives the picker core through a scripted edit sequence
//! and prints every snapshot application to stdout.

use swatch_core::{Field, Picker, Surface, SwatchColor};

struct StdoutSurface;

impl Surface for StdoutSurface {
    fn set_field(&mut self, field: Field, value: &str) {
        println!("  {field:?} <- {value}");
    }
    fn fill_preview(&mut self, color: SwatchColor) {
        println!("  preview <- {}", color.to_hex());
    }
}

fn main() {
    let mut surface = StdoutSurface;
    let mut picker = Picker::new();

    println!("initial load:");
    picker.snapshot().apply_to(&mut surface);

    println!("hex field edited to \"0f0\":");
    if let Some(snap) = picker.hex_input("0f0") {
        snap.apply_to(&mut surface);
    }

    println!("R field edited to 300 (clamps):");
    if let Some(snap) = picker.rgb_input("300", "64", "32", Field::R) {
        snap.apply_to(&mut surface);
    }

    println!("H field edited to 180:");
    if let Some(snap) = picker.hsl_input("180", "50", "50", Field::H) {
        snap.apply_to(&mut surface);
    }

    println!("hex field edited to \"zzz\" (ignored):");
    if picker.hex_input("zzz").is_none() {
        println!("  no update, still {}", picker.color().to_hex());
    }
}
