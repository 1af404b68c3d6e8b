use crate::catalog::Record;

/// How multiple selected type tags combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Record has at least one selected tag.
    #[default]
    Or,
    /// Record has every selected tag.
    And,
}

impl FilterMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Or => "OR (Any)",
            Self::And => "AND (All)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Or => "Showing Pokemon with ANY selected type",
            Self::And => "Showing Pokemon with ALL selected types",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Or => Self::And,
            Self::And => Self::Or,
        }
    }
}

/// Set of selected type tags.
///
/// Insertion order is kept for display only; equality ignores it.
#[derive(Debug, Clone, Default, Eq)]
pub struct TypeSelection {
    tags: Vec<String>,
}

impl PartialEq for TypeSelection {
    fn eq(&self, other: &Self) -> bool {
        self.tags.len() == other.tags.len() && self.tags.iter().all(|t| other.contains(t))
    }
}

impl TypeSelection {
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Adds the tag if absent, removes it if present.
    pub fn toggle(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for TypeSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::default();
        for tag in iter {
            if !selection.contains(tag.as_ref()) {
                selection.toggle(tag.as_ref());
            }
        }
        selection
    }
}

/// Gallery type filter: selected tags plus the combinator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeFilter {
    pub selection: TypeSelection,
    pub mode: FilterMode,
}

impl TypeFilter {
    /// The OR/AND control is only offered with more than one tag selected.
    pub fn can_switch_mode(&self) -> bool {
        self.selection.len() > 1
    }

    pub fn matches(&self, record: &Record) -> bool {
        if self.selection.is_empty() {
            return true;
        }
        match self.mode {
            FilterMode::Or => record.types.iter().any(|t| self.selection.contains(t)),
            FilterMode::And => self.selection.iter().all(|tag| record.has_type(tag)),
        }
    }

    /// Filtered view of the roster, in roster order.
    pub fn apply<'a>(&self, roster: &'a [Record]) -> Vec<&'a Record> {
        roster.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Sprites;

    fn record(id: u32, types: &[&str]) -> Record {
        Record {
            id,
            name: format!("record-{id}"),
            height: 1,
            weight: 1,
            types: types.iter().map(|t| t.to_string()).collect(),
            stats: vec![],
            abilities: vec![],
            sprites: Sprites::default(),
        }
    }

    fn roster() -> Vec<Record> {
        vec![
            record(4, &["fire"]),
            record(6, &["fire", "flying"]),
            record(16, &["normal", "flying"]),
            record(7, &["water"]),
        ]
    }

    fn ids(records: &[&Record]) -> Vec<u32> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn empty_selection_shows_everything() {
        let roster = roster();
        assert_eq!(TypeFilter::default().apply(&roster).len(), roster.len());
    }

    #[test]
    fn fire_flying_or_and() {
        let roster = roster();
        let mut filter = TypeFilter {
            selection: ["fire", "flying"].into_iter().collect(),
            mode: FilterMode::Or,
        };
        assert_eq!(ids(&filter.apply(&roster)), vec![4, 6, 16]);
        filter.mode = FilterMode::And;
        assert_eq!(ids(&filter.apply(&roster)), vec![6]);
    }

    #[test]
    fn single_tag_modes_agree() {
        let roster = roster();
        let or = TypeFilter {
            selection: ["flying"].into_iter().collect(),
            mode: FilterMode::Or,
        };
        let and = TypeFilter {
            mode: FilterMode::And,
            ..or.clone()
        };
        assert_eq!(ids(&or.apply(&roster)), ids(&and.apply(&roster)));
        assert!(!or.can_switch_mode());
    }

    #[test]
    fn toggle_twice_restores_selection() {
        let mut selection: TypeSelection = ["water"].into_iter().collect();
        let original = selection.clone();
        selection.toggle("ice");
        assert_ne!(selection, original);
        selection.toggle("ice");
        assert_eq!(selection, original);
    }

    #[test]
    fn selection_equality_ignores_order() {
        let a: TypeSelection = ["fire", "flying"].into_iter().collect();
        let b: TypeSelection = ["flying", "fire"].into_iter().collect();
        assert_eq!(a, b);
    }
}
