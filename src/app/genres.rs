// src/app/genres.rs
use std::collections::HashMap;

use itertools::Itertools;

use crate::app::types::Genre;

pub const UNKNOWN_GENRE: &str = "Unknown genre";

/// Session-scoped id→name lookup, built once from the genre catalog.
/// Stays empty when the fetch fails; lookups then degrade to the placeholder.
#[derive(Default)]
pub struct GenreMap {
    names: HashMap<i64, String>,
}

impl GenreMap {
    pub fn from_genres(genres: Vec<Genre>) -> Self {
        Self {
            names: genres.into_iter().map(|g| (g.id, g.name)).collect(),
        }
    }

    pub fn name_of(&self, id: i64) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Resolve ids to display names: unknown ids dropped, duplicates dropped,
    /// capped at `cap`; an empty outcome falls back to the placeholder.
    pub fn names_for(&self, ids: &[i64], cap: usize) -> Vec<String> {
        let names: Vec<String> = ids
            .iter()
            .filter_map(|id| self.name_of(*id))
            .unique()
            .take(cap)
            .map(str::to_string)
            .collect();
        if names.is_empty() {
            vec![UNKNOWN_GENRE.to_string()]
        } else {
            names
        }
    }

    /// Comma-joined variant for single-line labels.
    pub fn label_for(&self, ids: &[i64], cap: usize) -> String {
        self.names_for(ids, cap).join(", ")
    }

    /// Uncapped label: every resolvable name, still deduplicated.
    pub fn label_all(&self, ids: &[i64]) -> String {
        self.names_for(ids, usize::MAX).join(", ")
    }

    /// Sorted (name order) view for the dropdown and the genre-page sidebar.
    pub fn entries_sorted(&self) -> Vec<(i64, &str)> {
        self.names
            .iter()
            .map(|(id, name)| (*id, name.as_str()))
            .sorted_by(|a, b| a.1.cmp(b.1))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> GenreMap {
        GenreMap::from_genres(vec![
            Genre {
                id: 28,
                name: "Action".into(),
            },
            Genre {
                id: 12,
                name: "Adventure".into(),
            },
        ])
    }

    #[test]
    fn unknown_ids_are_dropped() {
        let m = map();
        assert_eq!(m.names_for(&[28, 12, 999], 6), vec!["Action", "Adventure"]);
    }

    #[test]
    fn empty_result_falls_back_to_placeholder() {
        let m = map();
        assert_eq!(m.names_for(&[999], 6), vec![UNKNOWN_GENRE]);
        assert_eq!(m.names_for(&[], 6), vec![UNKNOWN_GENRE]);
        assert_eq!(GenreMap::default().names_for(&[28], 6), vec![UNKNOWN_GENRE]);
    }

    #[test]
    fn duplicates_dropped_and_capped() {
        let m = map();
        assert_eq!(m.names_for(&[28, 28, 12], 6), vec!["Action", "Adventure"]);
        assert_eq!(m.names_for(&[28, 12], 1), vec!["Action"]);
    }

    #[test]
    fn label_all_joins_every_resolvable_name() {
        let m = GenreMap::from_genres(vec![
            Genre {
                id: 28,
                name: "Action".into(),
            },
            Genre {
                id: 12,
                name: "Adventure".into(),
            },
            Genre {
                id: 14,
                name: "Fantasy".into(),
            },
            Genre {
                id: 878,
                name: "Science Fiction".into(),
            },
            Genre {
                id: 53,
                name: "Thriller".into(),
            },
        ]);
        assert_eq!(
            m.label_all(&[28, 12, 14, 878, 53]),
            "Action, Adventure, Fantasy, Science Fiction, Thriller"
        );
        assert_eq!(m.label_all(&[999]), UNKNOWN_GENRE);
    }

    #[test]
    fn entries_sorted_by_name() {
        let m = map();
        let entries = m.entries_sorted();
        assert_eq!(entries, vec![(28, "Action"), (12, "Adventure")]);
    }
}
