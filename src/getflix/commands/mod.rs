use crate::model::MovieEntry;
use std::path::PathBuf;

pub mod add;
pub mod delete;
pub mod list;
pub mod random;
pub mod search;
pub mod site;
pub mod sort;
pub mod stats;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_movies: Vec<MovieEntry>,
    pub listed_movies: Vec<MovieEntry>,
    pub stats: Option<stats::CatalogStats>,
    pub site_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_movies(mut self, movies: Vec<MovieEntry>) -> Self {
        self.affected_movies = movies;
        self
    }

    pub fn with_listed_movies(mut self, movies: Vec<MovieEntry>) -> Self {
        self.listed_movies = movies;
        self
    }

    pub fn with_stats(mut self, stats: stats::CatalogStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_site_path(mut self, path: PathBuf) -> Self {
        self.site_path = Some(path);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::model::{Catalog, Movie};
    use crate::store::{MovieStorage, Outcome};

    /// Storage whose every mutation reports the same outcome.
    struct FixedOutcome(Outcome);

    impl MovieStorage for FixedOutcome {
        fn list_movies(&self) -> Catalog {
            Catalog::new()
        }

        fn contains(&self, _title: &str) -> bool {
            false
        }

        fn add_movie(&mut self, _title: &str, _movie: Movie) -> Result<Outcome> {
            Ok(self.0)
        }

        fn delete_movie(&mut self, _title: &str) -> Result<Outcome> {
            Ok(self.0)
        }

        fn update_movie(&mut self, _title: &str, _note: &str) -> Result<Outcome> {
            Ok(self.0)
        }

        fn read_storage(&mut self) {}

        fn write_storage(&self) -> Result<()> {
            Ok(())
        }

        fn location(&self) -> PathBuf {
            PathBuf::from("fixed://movies")
        }
    }

    #[test]
    fn unexpected_outcomes_get_their_own_error_message() {
        let result = add::run(&mut FixedOutcome(Outcome::NotFound), "Up", Movie::new(2009, 8.3))
            .unwrap();
        assert_eq!(result.messages, vec![CmdMessage::error("Movie 'Up' was not added.")]);

        let result = delete::run(&mut FixedOutcome(Outcome::Duplicate), "Up").unwrap();
        assert_eq!(result.messages, vec![CmdMessage::error("Movie 'Up' was not deleted.")]);

        let result = update::run(&mut FixedOutcome(Outcome::Duplicate), "Up", "note").unwrap();
        assert_eq!(
            result.messages,
            vec![CmdMessage::error("No note was added to 'Up'.")]
        );
        assert!(result.affected_movies.is_empty());
    }
}
