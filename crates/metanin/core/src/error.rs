//! Errors raised when mutating a [`Build`](crate::Build).
//!
//! Calculations themselves never fail: unknown names and missing data degrade
//! to "no bonus". Only element selection can be rejected, because there is no
//! sensible fallback for choosing the same element twice.

use crate::technique::Element;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuildError {
    /// Primary and secondary element would be the same.
    #[error("{0} is already selected as the other element")]
    DuplicateElement(Element),

    /// The element cannot be chosen as a specialization.
    #[error("{0} cannot be selected as a specialization")]
    NotSelectable(Element),

    /// The element name did not match any element.
    #[error("unknown element '{0}'")]
    UnknownElement(String),
}

impl BuildError {
    /// Returns a stable identifier for this error, useful for UI lookups.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::DuplicateElement(_) => "duplicate_element",
            Self::NotSelectable(_) => "not_selectable",
            Self::UnknownElement(_) => "unknown_element",
        }
    }
}

/// Parse a selectable element name.
pub fn parse_element(name: &str) -> Result<Element, BuildError> {
    let element: Element = name
        .trim()
        .parse()
        .map_err(|_| BuildError::UnknownElement(name.to_string()))?;

    if !element.is_selectable() {
        return Err(BuildError::NotSelectable(element));
    }
    Ok(element)
}
