use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Movie, MovieEntry};
use crate::store::{MovieStorage, Outcome};

pub fn run<S: MovieStorage>(store: &mut S, title: &str, movie: Movie) -> Result<CmdResult> {
    let result = match store.add_movie(title, movie)? {
        Outcome::Applied => CmdResult::default()
            .with_affected_movies(
                store
                    .list_movies()
                    .remove(title)
                    .map(|added| MovieEntry::new(title, added))
                    .into_iter()
                    .collect(),
            )
            .with_message(CmdMessage::success(format!(
                "Movie '{}' added successfully.",
                title
            ))),
        Outcome::Duplicate => CmdResult::default().with_message(CmdMessage::warning(format!(
            "Movie '{}' already exists!",
            title
        ))),
        Outcome::NotFound => CmdResult::default().with_message(CmdMessage::error(format!(
            "Movie '{}' was not added.",
            title
        ))),
    };

    Ok(result)
}
