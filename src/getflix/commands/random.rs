use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Catalog, MovieEntry};
use crate::store::MovieStorage;
use rand::seq::IteratorRandom;
use rand::Rng;

/// Uniform pick over the catalog's titles.
pub fn pick<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Option<MovieEntry> {
    catalog
        .iter()
        .choose(rng)
        .map(|(title, movie)| MovieEntry::new(title.clone(), movie.clone()))
}

pub fn run<S: MovieStorage>(store: &S) -> Result<CmdResult> {
    run_with_rng(store, &mut rand::thread_rng())
}

pub fn run_with_rng<S: MovieStorage, R: Rng + ?Sized>(store: &S, rng: &mut R) -> Result<CmdResult> {
    match pick(&store.list_movies(), rng) {
        Some(entry) => {
            let message = format!(
                "Your movie for tonight: {}, it's rated {:.1}",
                entry.title, entry.movie.rating
            );
            Ok(CmdResult::default()
                .with_listed_movies(vec![entry])
                .with_message(CmdMessage::info(message)))
        }
        None => Ok(CmdResult::default().with_message(CmdMessage::info("No movies found."))),
    }
}
