use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::MovieEntry;
use crate::store::{MovieStorage, Outcome};

pub fn run<S: MovieStorage>(store: &mut S, title: &str) -> Result<CmdResult> {
    let existing = store.list_movies().remove(title);

    let result = match store.delete_movie(title)? {
        Outcome::Applied => CmdResult::default()
            .with_affected_movies(
                existing
                    .map(|movie| MovieEntry::new(title, movie))
                    .into_iter()
                    .collect(),
            )
            .with_message(CmdMessage::success(format!(
                "Movie '{}' deleted successfully.",
                title
            ))),
        Outcome::NotFound => CmdResult::default().with_message(CmdMessage::warning(format!(
            "Movie '{}' not found.",
            title
        ))),
        Outcome::Duplicate => CmdResult::default().with_message(CmdMessage::error(format!(
            "Movie '{}' was not deleted.",
            title
        ))),
    };

    Ok(result)
}
