/// Whether one extent covers the whole layer or each feature gets its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    WholeLayer,
    PerFeature,
}

impl Mode {
    pub fn from_by_feature(by_feature: bool) -> Self {
        if by_feature {
            Mode::PerFeature
        } else {
            Mode::WholeLayer
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::WholeLayer => write!(f, "layer"),
            Mode::PerFeature => write!(f, "feature"),
        }
    }
}
