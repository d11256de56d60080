//! Color math — direct conversions without external dependencies.
//! All functions use normalized f64: channels in 0.0–1.0, hue as a 0.0–1.0
//! fraction of the color wheel.

/// RGB → HSL. Channels 0.0–1.0 in, (hue, saturation, lightness) out.
pub(crate) fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;
    let l = (max + min) / 2.0;

    if d == 0.0 {
        // achromatic
        return (0.0, 0.0, l);
    }

    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        ((g - b) / d).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / d + 2.0) / 6.0
    } else {
        ((r - g) / d + 4.0) / 6.0
    };

    (h, s, l)
}

/// HSL → RGB. (hue, saturation, lightness) in, channels out.
///
/// Output is not clamped: saturation or lightness past 1.0 produce
/// out-of-range channels the caller is expected to clamp. A hue at or past
/// a full turn lands in the final sector arm.
pub(crate) fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h6 = h * 6.0;
    let x = c * (1.0 - ((h6 % 2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h6.floor() as i64 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (r + m, g + m, b + m)
}
