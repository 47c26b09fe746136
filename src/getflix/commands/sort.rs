use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{entries, Catalog, MovieEntry};
use crate::store::MovieStorage;

/// Entries ordered by rating, highest first. Equal ratings keep catalog order.
pub fn by_rating(catalog: &Catalog) -> Vec<MovieEntry> {
    let mut sorted = entries(catalog);
    sorted.sort_by(|a, b| b.movie.rating.total_cmp(&a.movie.rating));
    sorted
}

pub fn run<S: MovieStorage>(store: &S) -> Result<CmdResult> {
    let catalog = store.list_movies();
    if catalog.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No movies found.")));
    }
    Ok(CmdResult::default().with_listed_movies(by_rating(&catalog)))
}
