use std::fmt;

/// Filter-list dialects. Rules that parse the same way in every dialect are
/// tagged [`AdblockSyntax::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdblockSyntax {
    #[default]
    Unknown,
    AdGuard,
    UblockOrigin,
    AdblockPlus,
}

impl fmt::Display for AdblockSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdblockSyntax::Unknown => write!(f, "Common"),
            AdblockSyntax::AdGuard => write!(f, "AdGuard"),
            AdblockSyntax::UblockOrigin => write!(f, "uBlockOrigin"),
            AdblockSyntax::AdblockPlus => write!(f, "AdblockPlus"),
        }
    }
}

/// Top-level rule categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleCategory {
    Comment,
    Cosmetic,
    Network,
}

/// Characters that start a comment line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommentMarker {
    /// `! comment`
    Regular,
    /// `# comment`
    Hashmark,
}

impl CommentMarker {
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '!' => Some(CommentMarker::Regular),
            '#' => Some(CommentMarker::Hashmark),
            _ => None,
        }
    }
}

/// Common surface of every parsed rule AST.
pub trait Rule {
    fn category(&self) -> RuleCategory;
    fn syntax(&self) -> AdblockSyntax;
}
