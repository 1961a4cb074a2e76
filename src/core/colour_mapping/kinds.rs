use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColourMapKind {
    #[default]
    CosineRamp,
    FireGradient,
    BlueWhiteGradient,
    Grayscale,
}

impl ColourMapKind {
    pub const ALL: &'static [Self] = &[
        Self::CosineRamp,
        Self::FireGradient,
        Self::BlueWhiteGradient,
        Self::Grayscale,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::CosineRamp => "Cosine ramp",
            Self::FireGradient => "Fire gradient",
            Self::BlueWhiteGradient => "Blue-white gradient",
            Self::Grayscale => "Grayscale",
        }
    }

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::CosineRamp => "cosine",
            Self::FireGradient => "fire",
            Self::BlueWhiteGradient => "blue-white",
            Self::Grayscale => "grayscale",
        }
    }
}

impl fmt::Display for ColourMapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown palette '{0}', expected one of: cosine, fire, blue-white, grayscale")]
pub struct UnknownColourMapKind(pub String);

impl FromStr for ColourMapKind {
    type Err = UnknownColourMapKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.slug().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownColourMapKind(value.to_string()))
    }
}
