use std::cmp::Ordering;

use crate::catalog::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Id,
    Name,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            Self::Id => Self::Name,
            Self::Name => Self::Id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn label(self) -> &'static str {
        match self {
            Self::Asc => "Ascending",
            Self::Desc => "Descending",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Search and sort controls of the list view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListQuery {
    pub search: String,
    pub key: SortKey,
    pub order: SortOrder,
}

impl ListQuery {
    /// Case-insensitive substring match on the record name.
    pub fn matches(&self, record: &Record) -> bool {
        if self.search.is_empty() {
            return true;
        }
        record
            .name
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }

    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        let ordering = match self.key {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        };
        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }

    /// Filter then stable-sort the roster.
    pub fn apply<'a>(&self, roster: &'a [Record]) -> Vec<&'a Record> {
        let mut visible: Vec<&Record> = roster.iter().filter(|r| self.matches(r)).collect();
        visible.sort_by(|a, b| self.compare(a, b));
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Sprites;

    fn record(id: u32, name: &str) -> Record {
        Record {
            id,
            name: name.to_string(),
            height: 1,
            weight: 1,
            types: vec![],
            stats: vec![],
            abilities: vec![],
            sprites: Sprites::default(),
        }
    }

    fn roster() -> Vec<Record> {
        vec![
            record(4, "charmander"),
            record(1, "bulbasaur"),
            record(25, "pikachu"),
            record(5, "charmeleon"),
        ]
    }

    fn ids(records: &[&Record]) -> Vec<u32> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn default_sorts_by_id_ascending() {
        let roster = roster();
        let visible = ListQuery::default().apply(&roster);
        assert_eq!(ids(&visible), vec![1, 4, 5, 25]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let roster = roster();
        let query = ListQuery {
            search: "CHAR".to_string(),
            ..ListQuery::default()
        };
        assert_eq!(ids(&query.apply(&roster)), vec![4, 5]);
    }

    #[test]
    fn name_descending() {
        let roster = roster();
        let query = ListQuery {
            key: SortKey::Name,
            order: SortOrder::Desc,
            ..ListQuery::default()
        };
        assert_eq!(ids(&query.apply(&roster)), vec![25, 5, 4, 1]);
    }

    #[test]
    fn descending_is_exact_reverse_of_ascending() {
        let roster = roster();
        for key in [SortKey::Id, SortKey::Name] {
            let asc = ListQuery {
                key,
                ..ListQuery::default()
            };
            let desc = ListQuery {
                key,
                order: SortOrder::Desc,
                ..ListQuery::default()
            };
            let mut forward = ids(&asc.apply(&roster));
            forward.reverse();
            assert_eq!(forward, ids(&desc.apply(&roster)));
        }
    }

    #[test]
    fn no_match_is_empty() {
        let roster = roster();
        let query = ListQuery {
            search: "mew".to_string(),
            ..ListQuery::default()
        };
        assert!(query.apply(&roster).is_empty());
    }
}
