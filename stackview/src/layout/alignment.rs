//! Alignment vocabularies and their box-model keywords.
//!
//! Two lookup tables map the stack vocabulary (`leading`, `spaceBetween`, ...)
//! onto flexbox keywords. Lookups are lenient: an unknown keyword is returned
//! unchanged so raw box-model keywords can be passed straight through.

use std::str::FromStr;

use crate::error::LayoutError;

/// Which table a keyword is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingAxis {
    /// Perpendicular to flow (`align-items`).
    Cross,
    /// Along flow (`justify-content`).
    Main,
}

const MAIN_AXIS_MAPPING: [(&str, &str); 6] = [
    ("leading", "flex-start"),
    ("center", "center"),
    ("trailing", "flex-end"),
    ("spaceBetween", "space-between"),
    ("spaceAround", "space-around"),
    ("spaceEvenly", "space-evenly"),
];

// Rows use top/bottom, columns use leading/trailing.
const CROSS_AXIS_MAPPING: [(&str, &str); 6] = [
    ("top", "flex-start"),
    ("center", "center"),
    ("bottom", "flex-end"),
    ("stretch", "stretch"),
    ("leading", "flex-start"),
    ("trailing", "flex-end"),
];

/// Resolve a keyword to its box-model equivalent, passing unknown keywords through.
pub fn resolve(axis: MappingAxis, keyword: &str) -> &str {
    let table: &[(&'static str, &'static str)] = match axis {
        MappingAxis::Cross => &CROSS_AXIS_MAPPING,
        MappingAxis::Main => &MAIN_AXIS_MAPPING,
    };
    match table.iter().find(|(from, _)| *from == keyword) {
        Some(&(_, to)) => to,
        None => {
            tracing::trace!(?axis, keyword, "alignment keyword passed through unmapped");
            keyword
        }
    }
}

/// Cross-axis alignment of children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    Leading,
    #[default]
    Center,
    Trailing,
    Top,
    Bottom,
    Stretch,
}

impl Alignment {
    pub fn keyword(self) -> &'static str {
        match self {
            Alignment::Leading => "leading",
            Alignment::Center => "center",
            Alignment::Trailing => "trailing",
            Alignment::Top => "top",
            Alignment::Bottom => "bottom",
            Alignment::Stretch => "stretch",
        }
    }

    pub fn box_keyword(self) -> &'static str {
        resolve(MappingAxis::Cross, self.keyword())
    }
}

impl FromStr for Alignment {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "leading" => Ok(Alignment::Leading),
            "center" => Ok(Alignment::Center),
            "trailing" => Ok(Alignment::Trailing),
            "top" => Ok(Alignment::Top),
            "bottom" => Ok(Alignment::Bottom),
            "stretch" => Ok(Alignment::Stretch),
            other => Err(LayoutError::UnknownKeyword {
                vocabulary: "alignment",
                keyword: other.to_string(),
            }),
        }
    }
}

/// Main-axis distribution of children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Distribution {
    Leading,
    #[default]
    Center,
    Trailing,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl Distribution {
    pub fn keyword(self) -> &'static str {
        match self {
            Distribution::Leading => "leading",
            Distribution::Center => "center",
            Distribution::Trailing => "trailing",
            Distribution::SpaceBetween => "spaceBetween",
            Distribution::SpaceAround => "spaceAround",
            Distribution::SpaceEvenly => "spaceEvenly",
        }
    }

    pub fn box_keyword(self) -> &'static str {
        resolve(MappingAxis::Main, self.keyword())
    }
}

impl FromStr for Distribution {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "leading" => Ok(Distribution::Leading),
            "center" => Ok(Distribution::Center),
            "trailing" => Ok(Distribution::Trailing),
            "spaceBetween" => Ok(Distribution::SpaceBetween),
            "spaceAround" => Ok(Distribution::SpaceAround),
            "spaceEvenly" => Ok(Distribution::SpaceEvenly),
            other => Err(LayoutError::UnknownKeyword {
                vocabulary: "distribution",
                keyword: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_axis_table() {
        assert_eq!(resolve(MappingAxis::Main, "leading"), "flex-start");
        assert_eq!(resolve(MappingAxis::Main, "spaceBetween"), "space-between");
        assert_eq!(resolve(MappingAxis::Main, "spaceEvenly"), "space-evenly");
    }

    #[test]
    fn test_cross_axis_table() {
        assert_eq!(resolve(MappingAxis::Cross, "top"), "flex-start");
        assert_eq!(resolve(MappingAxis::Cross, "trailing"), "flex-end");
        assert_eq!(resolve(MappingAxis::Cross, "stretch"), "stretch");
    }

    #[test]
    fn test_unknown_keyword_passes_through() {
        assert_eq!(resolve(MappingAxis::Cross, "baseline"), "baseline");
        assert_eq!(resolve(MappingAxis::Main, "flex-end"), "flex-end");
        // Cross-only keywords are unknown on the main axis.
        assert_eq!(resolve(MappingAxis::Main, "top"), "top");
    }

    #[test]
    fn test_typed_vocabularies_round_trip_keywords() {
        for alignment in [
            Alignment::Leading,
            Alignment::Center,
            Alignment::Trailing,
            Alignment::Top,
            Alignment::Bottom,
            Alignment::Stretch,
        ] {
            assert_eq!(alignment.keyword().parse::<Alignment>().unwrap(), alignment);
        }
        assert_eq!(Distribution::SpaceAround.box_keyword(), "space-around");
        assert_eq!(Alignment::Bottom.box_keyword(), "flex-end");
    }

    #[test]
    fn test_typed_parse_rejects_unknown() {
        let err = "sideways".parse::<Distribution>().unwrap_err();
        assert!(matches!(
            err,
            LayoutError::UnknownKeyword { vocabulary: "distribution", .. }
        ));
    }
}
