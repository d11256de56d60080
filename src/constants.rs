//! Compile-time configuration for the picker core.

/// Color the picker is seeded with before any user input.
pub const DEFAULT_COLOR: (u8, u8, u8) = (22, 160, 133);
