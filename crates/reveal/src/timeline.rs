/// Static year -> building-id index driving temporal visibility.
///
/// Ordering contract:
/// - Entries are stable-sorted by year at construction; source order of the
///   configuration is never relied upon (object key order is not a
///   contract).
/// - `buildings_through` yields all ids for year <= Y before any id for a
///   later year; within one year, listed order is preserved but callers
///   must not depend on it.
#[derive(Debug, Clone, Default)]
pub struct TimelineIndex {
    entries: Vec<TimelineEntry>,
    display_names: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub year: i32,
    pub buildings: Vec<String>,
}

/// Reverse-lookup result for one building id.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingInfo {
    pub year: i32,
    pub display_name: String,
}

impl TimelineIndex {
    pub fn from_entries(entries: Vec<(i32, Vec<String>)>) -> Self {
        let mut entries: Vec<TimelineEntry> = entries
            .into_iter()
            .map(|(year, buildings)| TimelineEntry { year, buildings })
            .collect();
        entries.sort_by_key(|entry| entry.year);
        Self {
            entries,
            display_names: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Distinct years, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.entries.iter().map(|entry| entry.year).collect();
        years.dedup();
        years
    }

    /// All building ids first appearing at or before `year`, chronological.
    pub fn buildings_through(&self, year: i32) -> Vec<&str> {
        self.entries
            .iter()
            .take_while(|entry| entry.year <= year)
            .flat_map(|entry| entry.buildings.iter().map(String::as_str))
            .collect()
    }

    /// The year `building` first appears, if it is in the index at all.
    pub fn year_of(&self, building: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|entry| entry.buildings.iter().any(|b| b == building))
            .map(|entry| entry.year)
    }

    /// Overrides the humanized display name for one building id.
    pub fn set_display_name(&mut self, building: &str, display_name: &str) {
        match self
            .display_names
            .iter_mut()
            .find(|(id, _)| id == building)
        {
            Some((_, name)) => *name = display_name.to_string(),
            None => self
                .display_names
                .push((building.to_string(), display_name.to_string())),
        }
    }

    /// Reverse lookup: construction year plus a displayable name.
    ///
    /// Without an override the name is the id with underscores replaced by
    /// spaces.
    pub fn info_for(&self, building: &str) -> Option<BuildingInfo> {
        let year = self.year_of(building)?;
        let display_name = self
            .display_names
            .iter()
            .find(|(id, _)| id == building)
            .map(|(_, name)| name.clone())
            .unwrap_or_else(|| building.replace('_', " "));
        Some(BuildingInfo { year, display_name })
    }
}

#[cfg(test)]
mod tests {
    use super::TimelineIndex;

    fn index() -> TimelineIndex {
        TimelineIndex::from_entries(vec![
            (2005, vec!["pavillion".to_string(), "lh1".to_string()]),
            (2001, vec!["library".to_string(), "cantine".to_string()]),
            (2010, vec!["dorm6".to_string()]),
        ])
    }

    #[test]
    fn entries_are_sorted_by_year_not_input_order() {
        let idx = index();
        let years: Vec<i32> = idx.entries().iter().map(|e| e.year).collect();
        assert_eq!(years, vec![2001, 2005, 2010]);
        assert_eq!(idx.years(), vec![2001, 2005, 2010]);
    }

    #[test]
    fn buildings_through_is_chronological_and_inclusive() {
        let idx = index();
        assert_eq!(
            idx.buildings_through(2005),
            vec!["library", "cantine", "pavillion", "lh1"]
        );
        assert!(idx.buildings_through(2000).is_empty());
        assert_eq!(idx.buildings_through(2050).len(), 5);
    }

    #[test]
    fn year_of_finds_first_entry() {
        let idx = index();
        assert_eq!(idx.year_of("lh1"), Some(2005));
        assert_eq!(idx.year_of("ghost"), None);
    }

    #[test]
    fn info_humanizes_and_honors_overrides() {
        let mut idx = TimelineIndex::from_entries(vec![(
            2007,
            vec!["student_service_1".to_string(), "lh2".to_string()],
        )]);

        let info = idx.info_for("student_service_1").unwrap();
        assert_eq!(info.year, 2007);
        assert_eq!(info.display_name, "student service 1");

        idx.set_display_name("lh2", "Lecture Hall 2");
        assert_eq!(idx.info_for("lh2").unwrap().display_name, "Lecture Hall 2");
        assert!(idx.info_for("ghost").is_none());
    }
}
