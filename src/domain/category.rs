//! The closed set of product categories.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lookup miss for a category name that is not part of the closed set.
///
/// Callers decide what a miss means; the entity layer maps it to
/// [`Category::Unknown`] instead of failing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// Classification assigned to a product.
///
/// Serialized as the upper-case variant name (`"FOOD"`, `"TOOLS"`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    #[default]
    Unknown,
    Cloths,
    Food,
    Housewares,
    Automotive,
    Tools,
}

impl Category {
    /// String representation used on the wire and in persistence.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Cloths => "CLOTHS",
            Self::Food => "FOOD",
            Self::Housewares => "HOUSEWARES",
            Self::Automotive => "AUTOMOTIVE",
            Self::Tools => "TOOLS",
        }
    }

    /// Case-sensitive lookup of a category by its wire name.
    pub fn from_name(name: &str) -> Result<Self, UnknownCategory> {
        match name {
            "UNKNOWN" => Ok(Self::Unknown),
            "CLOTHS" => Ok(Self::Cloths),
            "FOOD" => Ok(Self::Food),
            "HOUSEWARES" => Ok(Self::Housewares),
            "AUTOMOTIVE" => Ok(Self::Automotive),
            "TOOLS" => Ok(Self::Tools),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
