use anyhow::Result;
use crossterm::style::{Color, Stylize};

use vegur_config::Config;
use vegur_core::{gradient_block, QuadrantHeader, Rgb};

use crate::logo::PORTRAIT;

/// Phrases that must stay on one line get their inner spaces bound to
/// NBSP before wrapping. NBSP is not a break point for the wrapper and
/// still measures one column, so geometry is unaffected.
const NBSP: char = '\u{a0}';

/// Composes the whole card for one terminal width: gradient portrait,
/// greeting, word-wrapped intro, quadrant header. Pure function of the
/// config and the width; the caller decides where it goes.
pub fn compose(config: &Config, term_width: usize) -> Result<String> {
    let start = Rgb::from_hex(&config.palette.gradient_start)?;
    let end = Rgb::from_hex(&config.palette.gradient_end)?;
    let accent = Rgb::from_hex(&config.palette.accent)?;
    let secondary = Rgb::from_hex(&config.palette.secondary)?;

    let mut out = String::with_capacity(4096);

    out.push_str("\n\n");
    out.push_str(&gradient_block(PORTRAIT, start, end));
    out.push_str("\n\n\n");

    let name = format!(
        "{}",
        config.profile.name.as_str().with(Color::from(accent)).bold()
    );
    out.push_str(&format!("{} {name}!\n\n", config.profile.greeting));

    out.push_str(&intro_paragraph(config, secondary, term_width));
    out.push('\n');

    let pill_colors = config
        .header
        .colors
        .iter()
        .map(|hex| Rgb::from_hex(hex))
        .collect::<Result<Vec<_>, _>>()?;
    let header = QuadrantHeader::from_slices(
        &config.header.title,
        &config.header.pillars,
        &pill_colors,
    )?
    .accent(accent);
    tracing::debug!(term_width, "rendering quadrant header");
    out.push_str(&header.render(term_width));
    out.push('\n');

    Ok(out)
}

/// Wraps the intro on plain text, then styles the role fragment. The
/// role is bound so the wrapper cannot split it, which keeps the styled
/// replacement a single-line substring.
fn intro_paragraph(config: &Config, badge: Rgb, term_width: usize) -> String {
    let role = &config.profile.role;
    let bound_role = bind(role);
    let paragraph = format!("I'm an {bound_role} {}", config.profile.intro);

    let styled_role = format!(
        "{}",
        role.as_str()
            .with(Color::Black)
            .on(Color::from(badge))
            .bold()
    );

    let mut out = String::new();
    for line in textwrap::wrap(&paragraph, term_width.max(20)) {
        let line = line
            .replace(&bound_role, &styled_role)
            .replace(NBSP, " ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn bind(phrase: &str) -> String {
    phrase.replace(' ', "\u{a0}")
}
