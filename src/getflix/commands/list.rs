use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::entries;
use crate::store::MovieStorage;

pub fn run<S: MovieStorage>(store: &S) -> Result<CmdResult> {
    let catalog = store.list_movies();
    if catalog.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No movies found.")));
    }
    Ok(CmdResult::default().with_listed_movies(entries(&catalog)))
}
