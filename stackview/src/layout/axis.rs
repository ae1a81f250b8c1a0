//! Stack axis and container direction.
//!
//! Each stack publishes its `Axis` to descendants while mounting; nested
//! stacks replace it. Spacers read it to decide which way to expand.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// The principal axis of the nearest enclosing stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal.
    Row,
    /// Vertical. Also the axis seen outside of any stack.
    #[default]
    Column,
    /// Depth (overlay). Does not take part in expansion.
    Z,
}

impl Axis {
    pub fn keyword(self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Column => "column",
            Axis::Z => "z",
        }
    }

    /// Whether expansion requests along this axis are meaningful.
    #[inline]
    pub fn is_propagating(self) -> bool {
        matches!(self, Axis::Row | Axis::Column)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl From<Direction> for Axis {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Row => Axis::Row,
            Direction::Column => Axis::Column,
        }
    }
}

/// Flex direction of a container box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Row,
    #[default]
    Column,
}

impl Direction {
    pub fn keyword(self) -> &'static str {
        match self {
            Direction::Row => "row",
            Direction::Column => "column",
        }
    }

    /// Direction a box takes when it follows `axis` (`z` boxes lay out as columns).
    pub fn along(axis: Axis) -> Self {
        match axis {
            Axis::Row => Direction::Row,
            Axis::Column | Axis::Z => Direction::Column,
        }
    }
}

impl FromStr for Direction {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row" => Ok(Direction::Row),
            "column" => Ok(Direction::Column),
            other => Err(LayoutError::UnknownKeyword {
                vocabulary: "direction",
                keyword: other.to_string(),
            }),
        }
    }
}
