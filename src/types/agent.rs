use std::fmt;

use super::{AdblockSyntax, Rule, RuleCategory};

pub(crate) const AGENT_LIST_OPEN: char = '[';
pub(crate) const AGENT_LIST_CLOSE: char = ']';
pub(crate) const AGENT_SEPARATOR: char = ';';

/// One adblocker entry of an agent comment, e.g. `uBlock Origin 1.40`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentMember {
    pub adblock_name: String,
    pub version: Option<String>,
}

impl AgentMember {
    pub fn new(adblock_name: impl Into<String>, version: Option<&str>) -> Self {
        Self {
            adblock_name: adblock_name.into(),
            version: version.map(str::to_owned),
        }
    }
}

impl fmt::Display for AgentMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.adblock_name)?;
        match &self.version {
            Some(version) if !version.is_empty() => write!(f, " {version}"),
            _ => Ok(()),
        }
    }
}

/// An agent comment such as `[Adblock Plus 2.0; uBlock Origin 1.40]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub syntax: AdblockSyntax,
    pub members: Vec<AgentMember>,
}

impl Rule for Agent {
    fn category(&self) -> RuleCategory {
        RuleCategory::Comment
    }

    fn syntax(&self) -> AdblockSyntax {
        self.syntax
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{AGENT_LIST_OPEN}")?;
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, "{AGENT_SEPARATOR} ")?;
            }
            write!(f, "{member}")?;
        }
        write!(f, "{AGENT_LIST_CLOSE}")
    }
}
