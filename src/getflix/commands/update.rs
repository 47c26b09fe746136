use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::MovieEntry;
use crate::store::{MovieStorage, Outcome};

/// Append `note` to the movie's notes.
pub fn run<S: MovieStorage>(store: &mut S, title: &str, note: &str) -> Result<CmdResult> {
    let result = match store.update_movie(title, note)? {
        Outcome::Applied => CmdResult::default()
            .with_affected_movies(
                store
                    .list_movies()
                    .remove(title)
                    .map(|movie| MovieEntry::new(title, movie))
                    .into_iter()
                    .collect(),
            )
            .with_message(CmdMessage::success(format!(
                "Note added to '{}' successfully.",
                title
            ))),
        Outcome::NotFound => CmdResult::default().with_message(CmdMessage::warning(format!(
            "Movie '{}' not found.",
            title
        ))),
        Outcome::Duplicate => CmdResult::default().with_message(CmdMessage::error(format!(
            "No note was added to '{}'.",
            title
        ))),
    };

    Ok(result)
}
