use crossterm::style::{Color, Stylize};

use crate::color::Rgb;
use crate::error::LayoutError;
use crate::measure::visible_width;

/// Minimum space between the two pills of a row.
pub const MIN_GAP: usize = 6;
/// Floor for the width the whole composition is centered within. On
/// terminals narrower than this the header overflows rather than
/// collapsing further.
pub const MIN_DESIGN_WIDTH: usize = 60;
/// Columns reserved at the terminal edges.
pub const SIDE_MARGIN: usize = 4;
/// Fixed rightward nudge applied when centering the title block.
const TITLE_NUDGE: i64 = 2;
/// Extra indent on border lines of arrow-led pills, so the borders read
/// as one block shifted behind the arrow.
const ARROW_INDENT: usize = 4;

/// Which side of a pill its arrow attaches to. `Right` pills sit in the
/// left column and point inward; `Left` pills mirror them on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowSide {
    Left,
    Right,
}

/// Arrow glyph and side per quadrant, in pillar order:
/// top-left, top-right, bottom-left, bottom-right.
const ARROWS: [(char, ArrowSide); 4] = [
    ('↘', ArrowSide::Right),
    ('↙', ArrowSide::Left),
    ('↗', ArrowSide::Right),
    ('↖', ArrowSide::Left),
];

/// Scalars derived from the longest label and the terminal width.
/// Recomputed fresh on every render; nothing here persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderGeometry {
    pub term_width: usize,
    pub max_text: usize,
    pub pill_width: usize,
    pub design_width: usize,
    pub side_padding: usize,
    pub gap: usize,
}

impl HeaderGeometry {
    pub fn compute(max_text: usize, term_width: usize) -> Self {
        let pill_width = max_text + 4;
        let required = pill_width * 2 + MIN_GAP;
        let design_width = required
            .max(MIN_DESIGN_WIDTH)
            .min(term_width.saturating_sub(SIDE_MARGIN))
            .max(MIN_DESIGN_WIDTH);
        let side_padding = term_width.saturating_sub(design_width) / 2;
        // Stays at MIN_GAP even when design_width was clamped down for
        // width reasons; pairs may overflow on degenerate terminals.
        let gap = MIN_GAP.max(design_width.saturating_sub(pill_width * 2));
        Self {
            term_width,
            max_text,
            pill_width,
            design_width,
            side_padding,
            gap,
        }
    }
}

struct Pill<'a> {
    label: &'a str,
    color: Rgb,
    arrow: char,
    side: ArrowSide,
}

impl Pill<'_> {
    /// Three lines: top border, padded label, bottom border. All pills
    /// share `max_text`, so every pill renders at equal width.
    fn lines(&self, max_text: usize) -> [String; 3] {
        let rule = "─".repeat(max_text + 2);
        let pad = " ".repeat(max_text.saturating_sub(visible_width(self.label)));
        let mid = format!("│ {}{pad} │", self.label);

        let (top, mid, bottom) = match self.side {
            ArrowSide::Right => (
                format!("╭{rule}╮"),
                format!("{mid} {}", self.arrow),
                format!("╰{rule}╯"),
            ),
            ArrowSide::Left => {
                let indent = " ".repeat(ARROW_INDENT);
                (
                    format!("{indent}╭{rule}╮"),
                    format!("{} {mid}", self.arrow),
                    format!("{indent}╰{rule}╯"),
                )
            }
        };

        let color = Color::from(self.color);
        [top, mid, bottom].map(|line| format!("{}", line.with(color)))
    }
}

/// The 2x2 pill arrangement with a centered title between the rows.
///
/// Geometry is computed on visible lengths; color and bold are applied
/// only to finished lines, so styled input cannot skew the layout.
/// `render` is a pure function of the inputs and the given width.
#[derive(Debug, Clone)]
pub struct QuadrantHeader {
    title: String,
    pillars: [String; 4],
    colors: [Rgb; 4],
    accent: Option<Rgb>,
}

impl QuadrantHeader {
    /// Pillar order: top-left, top-right, bottom-left, bottom-right.
    pub fn new<S: Into<String>>(
        title: impl Into<String>,
        pillars: [S; 4],
        colors: [Rgb; 4],
    ) -> Self {
        Self {
            title: title.into(),
            pillars: pillars.map(Into::into),
            colors,
            accent: None,
        }
    }

    /// Arity-checked constructor for dynamic input (config files). The
    /// typed [`new`](Self::new) makes these errors unrepresentable.
    pub fn from_slices(
        title: &str,
        pillars: &[String],
        colors: &[Rgb],
    ) -> Result<Self, LayoutError> {
        let pillars: [String; 4] = pillars
            .to_vec()
            .try_into()
            .map_err(|v: Vec<String>| LayoutError::PillarArity(v.len()))?;
        let colors: [Rgb; 4] = colors
            .to_vec()
            .try_into()
            .map_err(|v: Vec<Rgb>| LayoutError::ColorArity(v.len()))?;
        Ok(Self {
            title: title.to_string(),
            pillars,
            colors,
            accent: None,
        })
    }

    /// Color for the bold center title. Without it the title is bold in
    /// the terminal's default foreground.
    pub fn accent(mut self, color: Rgb) -> Self {
        self.accent = Some(color);
        self
    }

    pub fn geometry(&self, term_width: usize) -> HeaderGeometry {
        let max_text = self
            .pillars
            .iter()
            .map(|p| visible_width(p))
            .max()
            .unwrap_or(0);
        HeaderGeometry::compute(max_text, term_width)
    }

    /// Renders the full block: three lines of top pills, a blank line,
    /// the centered title and its underline, a blank line, three lines
    /// of bottom pills. Always ten lines, joined by `\n`.
    pub fn render(&self, term_width: usize) -> String {
        let geo = self.geometry(term_width);

        let pills: Vec<[String; 3]> = self
            .pillars
            .iter()
            .zip(self.colors)
            .zip(ARROWS)
            .map(|((label, color), (arrow, side))| {
                Pill {
                    label,
                    color,
                    arrow,
                    side,
                }
                .lines(geo.max_text)
            })
            .collect();

        let margin = " ".repeat(geo.side_padding);
        let gap = " ".repeat(geo.gap);

        let mut lines = Vec::with_capacity(10);
        for i in 0..3 {
            lines.push(format!("{margin}{}{gap}{}", pills[0][i], pills[1][i]));
        }
        lines.push(String::new());

        let title_len = visible_width(&self.title);
        let center = " ".repeat(center_pad(geo.design_width, title_len));
        let title = match self.accent {
            Some(color) => format!("{}", self.title.as_str().with(color.into()).bold()),
            None => format!("{}", self.title.as_str().bold()),
        };
        lines.push(format!("{margin}{center}{title}"));
        lines.push(format!("{margin}{center}{}", "─".repeat(title_len)));
        lines.push(String::new());

        for i in 0..3 {
            lines.push(format!("{margin}{}{gap}{}", pills[2][i], pills[3][i]));
        }
        lines.join("\n")
    }
}

/// Left padding that centers `len` columns inside `width`. Floor
/// division biases the slack to the right; the nudge shifts the title
/// block two columns toward the arrows.
fn center_pad(width: usize, len: usize) -> usize {
    let half = (width as i64 - len as i64).div_euclid(2);
    (half + TITLE_NUDGE).max(0) as usize
}
