use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Catalog, MovieEntry};
use crate::store::MovieStorage;

/// Entries whose title contains `term`, ignoring case.
pub fn matching(catalog: &Catalog, term: &str) -> Vec<MovieEntry> {
    let term_lower = term.to_lowercase();
    catalog
        .iter()
        .filter(|(title, _)| title.to_lowercase().contains(&term_lower))
        .map(|(title, movie)| MovieEntry::new(title.clone(), movie.clone()))
        .collect()
}

pub fn run<S: MovieStorage>(store: &S, term: &str) -> Result<CmdResult> {
    let found = matching(&store.list_movies(), term);
    if found.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "No movies match '{}'.",
            term
        ))));
    }
    Ok(CmdResult::default().with_listed_movies(found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Movie;
    use crate::store::mem_backend::MemBackend;
    use crate::store::movie_store::MovieStore;

    fn store() -> MovieStore<MemBackend> {
        let mut store = MovieStore::open(MemBackend::new());
        store.add_movie("The Matrix", Movie::new(1999, 8.7)).unwrap();
        store
            .add_movie("The Matrix Reloaded", Movie::new(2003, 7.2))
            .unwrap();
        store.add_movie("Alien", Movie::new(1979, 8.5)).unwrap();
        store
    }

    #[test]
    fn matches_substrings_case_insensitively() {
        let result = run(&store(), "matrix").unwrap();
        let titles: Vec<_> = result.listed_movies.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["The Matrix", "The Matrix Reloaded"]);
    }

    #[test]
    fn upper_case_term_matches_lower_case_title() {
        let result = run(&store(), "LIEN").unwrap();
        assert_eq!(result.listed_movies.len(), 1);
    }

    #[test]
    fn no_match_is_reported() {
        let result = run(&store(), "Heat").unwrap();
        assert!(result.listed_movies.is_empty());
        assert_eq!(result.messages[0].content, "No movies match 'Heat'.");
    }
}
