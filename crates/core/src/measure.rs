/// Display width of a string as the terminal renders it: ANSI styling
/// sequences contribute nothing, wide glyphs count their column span.
///
/// All geometry in this crate goes through here so that styled input can
/// never skew padding or centering arithmetic.
pub fn visible_width(s: &str) -> usize {
    console::measure_text_width(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Stylize;

    #[test]
    fn plain_text() {
        assert_eq!(visible_width(""), 0);
        assert_eq!(visible_width("Deep Learning"), 13);
    }

    #[test]
    fn styling_is_ignored() {
        let styled = format!("{}", "LLM Systems".bold().red());
        assert!(styled.len() > "LLM Systems".len());
        assert_eq!(visible_width(&styled), "LLM Systems".len());
    }

    #[test]
    fn box_drawing_is_single_width() {
        assert_eq!(visible_width("╭──╮"), 4);
        assert_eq!(visible_width("│ x │"), 5);
    }
}
