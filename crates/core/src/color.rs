use crossterm::style::{Color, Stylize};

use crate::error::LayoutError;

/// A truecolor value. Parsed from `#RRGGBB` config strings; converted to
/// a crossterm color only at the styling boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(s: &str) -> Result<Self, LayoutError> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(LayoutError::InvalidColor(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| LayoutError::InvalidColor(s.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Per-channel linear interpolation, rounded to the nearest step.
    pub fn lerp(self, end: Rgb, factor: f32) -> Rgb {
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * factor).round() as u8;
        Rgb {
            r: mix(self.r, end.r),
            g: mix(self.g, end.g),
            b: mix(self.b, end.b),
        }
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

/// Styles a multi-line block with a vertical gradient: line `i` of `n`
/// carries the color at factor `i / n`, so the first line is exactly the
/// start color and the end color is approached but never reached.
pub fn gradient_block(text: &str, start: Rgb, end: Rgb) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let count = lines.len();
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let factor = i as f32 / count as f32;
            let color = start.lerp(end, factor);
            format!("{}", line.with(Color::from(color)))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::visible_width;

    #[test]
    fn parse_hex_variants() {
        assert_eq!(Rgb::from_hex("#ff0000").unwrap(), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::from_hex("#EF4444").unwrap(), Rgb::new(0xEF, 0x44, 0x44));
        assert_eq!(Rgb::from_hex("cc9494").unwrap(), Rgb::new(0xCC, 0x94, 0x94));
        assert!(Rgb::from_hex("#xyzxyz").is_err());
        assert!(Rgb::from_hex("#fff").is_err());
        assert!(Rgb::from_hex("").is_err());
    }

    #[test]
    fn lerp_endpoints() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(200, 100, 50);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb::new(100, 50, 25));
    }

    #[test]
    fn gradient_starts_at_start_color() {
        let start = Rgb::new(0xEF, 0x44, 0x44);
        let end = Rgb::new(0xCC, 0x94, 0x94);
        let block = gradient_block("one\ntwo\nthree", start, end);
        let first = block.lines().next().unwrap();
        assert!(first.contains("38;2;239;68;68"));
    }

    #[test]
    fn gradient_preserves_visible_text() {
        let start = Rgb::new(255, 0, 0);
        let end = Rgb::new(0, 0, 255);
        let block = gradient_block("abc\ndefg", start, end);
        let widths: Vec<usize> = block.lines().map(visible_width).collect();
        assert_eq!(widths, vec![3, 4]);
    }
}
