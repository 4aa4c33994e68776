//! Core data types for SGML sets and documents.

use std::fmt;

use crate::config::ANY;

/// The three kinds of SGML set written by a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetKind {
    /// System output under evaluation (`<tstset>`).
    Test,
    /// Source-side set (`<srcset>`), filled from the first reference.
    Source,
    /// All references (`<refset>`).
    Reference,
}

impl SetKind {
    /// Element name of the set.
    pub fn tag(&self) -> &'static str {
        match self {
            SetKind::Test => "tstset",
            SetKind::Source => "srcset",
            SetKind::Reference => "refset",
        }
    }

    /// Opening line of the set, carrying the fixed language and set attributes.
    pub fn header(&self) -> String {
        format!(
            "<{} trglang=\"{ANY}\" setid=\"{ANY}\" srclang=\"{ANY}\">",
            self.tag()
        )
    }

    /// Closing line of the set.
    pub fn footer(&self) -> String {
        format!("</{}>", self.tag())
    }
}

/// The `sysid` attribute of a `<doc>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SysId {
    /// Hypothesis and source documents.
    Any,
    /// 1-based position of a reference file in the reference set.
    Index(usize),
}

impl fmt::Display for SysId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SysId::Any => f.write_str(ANY),
            SysId::Index(n) => write!(f, "{n}"),
        }
    }
}
