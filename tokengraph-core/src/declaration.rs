//! Declaration Lines
//!
//! A declaration line lists a token followed by the tokens it depends on,
//! separated by whitespace: `"A B C"` declares that A depends on B and C.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::error::DeclarationError;

/// A parsed "parent depends on children" line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    parent: String,
    children: SmallVec<[String; 4]>,
}

impl Declaration {
    pub fn new<I, S>(parent: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parent: parent.into(),
            children: children.into_iter().map(Into::into).collect(),
        }
    }

    pub fn parent(&self) -> &str {
        &self.parent
    }

    /// Dependencies in the order they were listed.
    pub fn children(&self) -> &[String] {
        &self.children
    }
}

impl FromStr for Declaration {
    type Err = DeclarationError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let parent = tokens.next().ok_or(DeclarationError::Empty)?;
        Ok(Self::new(parent, tokens))
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parent)?;
        for child in &self.children {
            write!(f, " {child}")?;
        }
        Ok(())
    }
}
