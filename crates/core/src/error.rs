#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("expected exactly 4 pillar labels, got {0}")]
    PillarArity(usize),

    #[error("expected exactly 4 pill colors, got {0}")]
    ColorArity(usize),

    #[error("invalid color '{0}' (expected #RRGGBB)")]
    InvalidColor(String),
}
