use std::collections::HashSet;

use crate::error::SeatingError;

/// One named block of the sanctuary with its own dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpec {
    pub name: String,
    pub rows: u32,
    pub seats_per_row: u32,
}

impl SectionSpec {
    pub fn new(name: impl Into<String>, rows: u32, seats_per_row: u32) -> Self {
        Self { name: name.into(), rows, seats_per_row }
    }

    pub fn capacity(&self) -> usize {
        self.rows as usize * self.seats_per_row as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatLayout {
    /// Plain rectangle, seat ids `"{row}-{seat}"`.
    Grid { rows: u32, seats_per_row: u32 },
    /// Sections in declaration order, seat ids `"{section}-{row}-{seat}"`.
    Sectioned { sections: Vec<SectionSpec> },
}

impl SeatLayout {
    pub fn grid(rows: u32, seats_per_row: u32) -> Self {
        Self::Grid { rows, seats_per_row }
    }

    pub fn sectioned(sections: Vec<SectionSpec>) -> Self {
        Self::Sectioned { sections }
    }

    /// Main prayer hall: both sides of the aisle, the rows before the bimah
    /// and the rows behind it.
    pub fn synagogue() -> Self {
        Self::sectioned(vec![
            SectionSpec::new("right", 10, 5),
            SectionSpec::new("left", 10, 5),
            SectionSpec::new("front", 3, 8),
            SectionSpec::new("back", 6, 10),
        ])
    }

    pub fn capacity(&self) -> usize {
        match self {
            Self::Grid { rows, seats_per_row } => *rows as usize * *seats_per_row as usize,
            Self::Sectioned { sections } => sections.iter().map(SectionSpec::capacity).sum(),
        }
    }

    pub fn section_names(&self) -> Vec<&str> {
        match self {
            Self::Grid { .. } => Vec::new(),
            Self::Sectioned { sections } => sections.iter().map(|s| s.name.as_str()).collect(),
        }
    }

    pub fn validate(&self) -> Result<(), SeatingError> {
        match self {
            Self::Grid { rows, seats_per_row } => check_dimensions("grid", *rows, *seats_per_row),
            Self::Sectioned { sections } => {
                if sections.is_empty() {
                    return Err(SeatingError::InvalidConfiguration(
                        "sectioned layout needs at least one section".to_string(),
                    ));
                }
                let mut seen = HashSet::new();
                for section in sections {
                    if section.name.trim().is_empty() {
                        return Err(SeatingError::InvalidConfiguration(
                            "section name must not be empty".to_string(),
                        ));
                    }
                    // ids embed the section name, a repeat would collide
                    if !seen.insert(section.name.as_str()) {
                        return Err(SeatingError::InvalidConfiguration(format!(
                            "section '{}' declared twice",
                            section.name
                        )));
                    }
                    check_dimensions(&section.name, section.rows, section.seats_per_row)?;
                }
                Ok(())
            }
        }
    }
}

fn check_dimensions(scope: &str, rows: u32, seats_per_row: u32) -> Result<(), SeatingError> {
    if rows == 0 || seats_per_row == 0 {
        return Err(SeatingError::InvalidConfiguration(format!(
            "{scope}: rows and seats per row must be positive (got {rows}x{seats_per_row})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synagogue_layout_capacity() {
        let layout = SeatLayout::synagogue();
        assert_eq!(layout.capacity(), 50 + 50 + 24 + 60);
        assert_eq!(layout.section_names(), vec!["right", "left", "front", "back"]);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            SeatLayout::grid(0, 4).validate(),
            Err(SeatingError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            SeatLayout::sectioned(vec![SectionSpec::new("front", 2, 0)]).validate(),
            Err(SeatingError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn rejects_empty_and_duplicate_sections() {
        assert!(SeatLayout::sectioned(Vec::new()).validate().is_err());
        assert!(SeatLayout::sectioned(vec![SectionSpec::new(" ", 1, 1)]).validate().is_err());
        let dup = SeatLayout::sectioned(vec![
            SectionSpec::new("front", 1, 2),
            SectionSpec::new("front", 3, 4),
        ]);
        assert!(dup.validate().is_err());
    }
}
