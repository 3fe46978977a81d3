use std::fmt;

pub(crate) const MODIFIER_SEPARATOR: char = ',';
pub(crate) const MODIFIER_NEGATION: char = '~';
pub(crate) const MODIFIER_ASSIGN: char = '=';

/// A single network rule modifier: `name`, `~name` or `name=value`.
///
/// Escape sequences are kept exactly as written, so `value` for
/// `replace=/a\,b/` is `/a\,b/`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifier {
    pub name: String,
    pub value: Option<String>,
    pub negated: bool,
}

impl Modifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            negated: false,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn negated(mut self) -> Self {
        self.negated = true;
        self
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "{MODIFIER_NEGATION}")?;
        }
        write!(f, "{}", self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{MODIFIER_ASSIGN}{value}")?;
        }
        Ok(())
    }
}

/// The comma-separated modifier list that follows a network rule's `$`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModifierList {
    pub modifiers: Vec<Modifier>,
}

impl From<Vec<Modifier>> for ModifierList {
    fn from(modifiers: Vec<Modifier>) -> Self {
        Self { modifiers }
    }
}

impl fmt::Display for ModifierList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_modifiers(f, &self.modifiers)
    }
}

pub(crate) fn write_modifiers(f: &mut fmt::Formatter<'_>, modifiers: &[Modifier]) -> fmt::Result {
    for (i, modifier) in modifiers.iter().enumerate() {
        if i > 0 {
            write!(f, "{MODIFIER_SEPARATOR}")?;
        }
        write!(f, "{modifier}")?;
    }
    Ok(())
}
