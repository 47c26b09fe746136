//! Rating statistics over a catalog snapshot.
//!
//! Everything here is a pure function of the catalog; nothing touches storage
//! beyond the initial `list_movies`.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Catalog;
use crate::store::MovieStorage;

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStats {
    pub average: f64,
    pub median: f64,
    /// Every title sharing the highest rating, in catalog order.
    pub best: Vec<String>,
    /// Every title sharing the lowest rating, in catalog order.
    pub worst: Vec<String>,
}

pub fn average(ratings: &[f64]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
}

/// Median of `ratings`; the mean of the two middle values for an even count.
pub fn median(ratings: &[f64]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let mut sorted = ratings.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// All titles whose rating equals the catalog maximum.
pub fn best(catalog: &Catalog) -> Vec<String> {
    let max = catalog.values().map(|m| m.rating).fold(f64::NEG_INFINITY, f64::max);
    titles_rated(catalog, max)
}

/// All titles whose rating equals the catalog minimum.
pub fn worst(catalog: &Catalog) -> Vec<String> {
    let min = catalog.values().map(|m| m.rating).fold(f64::INFINITY, f64::min);
    titles_rated(catalog, min)
}

fn titles_rated(catalog: &Catalog, rating: f64) -> Vec<String> {
    catalog
        .iter()
        .filter(|(_, movie)| movie.rating == rating)
        .map(|(title, _)| title.clone())
        .collect()
}

/// `None` when the catalog is empty.
pub fn compute(catalog: &Catalog) -> Option<CatalogStats> {
    let ratings: Vec<f64> = catalog.values().map(|m| m.rating).collect();
    Some(CatalogStats {
        average: average(&ratings)?,
        median: median(&ratings)?,
        best: best(catalog),
        worst: worst(catalog),
    })
}

pub fn run<S: MovieStorage>(store: &S) -> Result<CmdResult> {
    match compute(&store.list_movies()) {
        Some(stats) => Ok(CmdResult::default().with_stats(stats)),
        None => Ok(CmdResult::default()
            .with_message(CmdMessage::info("No movies to calculate statistics."))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Movie;
    use crate::store::mem_backend::MemBackend;
    use crate::store::movie_store::MovieStore;

    fn catalog(ratings: &[(&str, f64)]) -> Catalog {
        ratings
            .iter()
            .map(|(title, rating)| (title.to_string(), Movie::new(2000, *rating)))
            .collect()
    }

    #[test]
    fn median_of_odd_count_is_middle_value() {
        assert_eq!(median(&[8.0, 7.0, 9.0]), Some(8.0));
    }

    #[test]
    fn median_of_even_count_averages_middle_pair() {
        assert_eq!(median(&[8.0, 7.0]), Some(7.5));
    }

    #[test]
    fn empty_ratings_have_no_average_or_median() {
        assert_eq!(average(&[]), None);
        assert_eq!(median(&[]), None);
        assert_eq!(compute(&Catalog::new()), None);
    }

    #[test]
    fn average_is_arithmetic_mean() {
        let avg = average(&[8.0, 7.0, 9.0]).unwrap();
        assert!((avg - 8.0).abs() < 1e-9);
    }

    #[test]
    fn best_and_worst_keep_ties() {
        let catalog = catalog(&[("A", 9.0), ("B", 9.0), ("C", 5.0)]);
        assert_eq!(best(&catalog), vec!["A", "B"]);
        assert_eq!(worst(&catalog), vec!["C"]);
    }

    #[test]
    fn single_movie_is_both_best_and_worst() {
        let stats = compute(&catalog(&[("Solo", 6.9)])).unwrap();
        assert_eq!(stats.best, vec!["Solo"]);
        assert_eq!(stats.worst, vec!["Solo"]);
        assert_eq!(stats.median, 6.9);
    }

    #[test]
    fn run_reports_empty_catalog() {
        let store = MovieStore::open(MemBackend::new());
        let result = run(&store).unwrap();
        assert!(result.stats.is_none());
        assert_eq!(
            result.messages[0].content,
            "No movies to calculate statistics."
        );
    }

    #[test]
    fn run_computes_over_store_snapshot() {
        let store = MovieStore::open(MemBackend::with_catalog(catalog(&[
            ("A", 9.0),
            ("B", 9.0),
            ("C", 5.0),
        ])));
        let stats = run(&store).unwrap().stats.unwrap();
        assert_eq!(stats.median, 9.0);
        assert!((stats.average - 23.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.best, vec!["A", "B"]);
        assert_eq!(stats.worst, vec!["C"]);
    }
}
