//! Logical fields and the column names accepted for each.

/// A value the normalizer pulls out of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Building,
    Name,
    StartYear,
    EndYear,
    Notes,
}

impl Field {
    /// Fields that must be present in the header under strict schema mode.
    pub const REQUIRED: [Field; 4] = [
        Field::Building,
        Field::Name,
        Field::StartYear,
        Field::EndYear,
    ];

    /// Accepted column names in priority order. Matching is case-sensitive.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Building => &["House", "house", "Address", "address", "Building", "building"],
            Self::Name => &["Name", "name", "Resident", "resident", "resident_name"],
            Self::StartYear => &["StartYear", "Start Year", "start_year", "From", "from"],
            Self::EndYear => &["EndYear", "End Year", "end_year", "To", "to"],
            Self::Notes => &["Notes", "notes", "Occupation", "occupation", "Type", "type"],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Building => "building",
            Self::Name => "name",
            Self::StartYear => "start year",
            Self::EndYear => "end year",
            Self::Notes => "notes",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_priority() {
        assert_eq!(Field::Building.aliases()[0], "House");
        assert_eq!(Field::Name.aliases().last(), Some(&"resident_name"));
        assert!(Field::EndYear.aliases().contains(&"End Year"));
    }

    #[test]
    fn test_notes_not_required() {
        assert!(!Field::REQUIRED.contains(&Field::Notes));
    }
}
