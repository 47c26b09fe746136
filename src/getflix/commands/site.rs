//! Static site generation.
//!
//! A template carries two tokens: [`TITLE_TOKEN`] is replaced by the page title
//! and [`GRID_TOKEN`] by one `<li>` per movie, for the first [`MAX_ENTRIES`]
//! movies in catalog order.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GetflixError, Result};
use crate::model::Catalog;
use crate::store::MovieStorage;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

pub const TITLE_TOKEN: &str = "__TEMPLATE_TITLE__";
pub const GRID_TOKEN: &str = "__TEMPLATE_MOVIE_GRID__";
pub const MAX_ENTRIES: usize = 20;
pub const NOTE_SEPARATOR: &str = " | ";

pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/index_template.html");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOptions {
    pub title: String,
    /// Template file; the built-in template when `None`.
    pub template: Option<PathBuf>,
    pub output: PathBuf,
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// The `<li>` fragment for the first [`MAX_ENTRIES`] movies.
pub fn render_grid(catalog: &Catalog) -> String {
    let mut grid = String::new();
    for (title, movie) in catalog.iter().take(MAX_ENTRIES) {
        let link = movie.imdb_url().unwrap_or_else(|| "#".to_string());
        let notes = movie.notes.join(NOTE_SEPARATOR);

        let _ = writeln!(grid, "        <li class=\"movie-item\">");
        let _ = writeln!(
            grid,
            "            <a href=\"{}\" target=\"_blank\">",
            escape_html(&link)
        );
        if let Some(poster) = movie.poster_url() {
            let _ = writeln!(
                grid,
                "                <img class=\"movie-poster\" src=\"{}\" alt=\"{}\">",
                escape_html(poster),
                escape_html(title)
            );
        }
        let _ = writeln!(grid, "            </a>");
        let _ = writeln!(
            grid,
            "            <div class=\"movie-title\">{}</div>",
            escape_html(title)
        );
        let _ = writeln!(grid, "            <div class=\"movie-year\">{}</div>", movie.year);
        let _ = writeln!(
            grid,
            "            <div class=\"movie-rating\">{:.1}</div>",
            movie.rating
        );
        if !notes.is_empty() {
            let _ = writeln!(
                grid,
                "            <div class=\"movie-notes\">{}</div>",
                escape_html(&notes)
            );
        }
        let _ = writeln!(grid, "        </li>");
    }
    grid
}

/// Substitute both tokens in `template`.
pub fn render_page(template: &str, title: &str, catalog: &Catalog) -> String {
    for token in [TITLE_TOKEN, GRID_TOKEN] {
        if !template.contains(token) {
            warn!(token, "site template is missing a placeholder");
        }
    }
    template
        .replace(TITLE_TOKEN, &escape_html(title))
        .replace(GRID_TOKEN, &render_grid(catalog))
}

pub fn run<S: MovieStorage>(store: &S, options: &SiteOptions) -> Result<CmdResult> {
    let template = match &options.template {
        Some(path) => fs::read_to_string(path).map_err(GetflixError::Io)?,
        None => DEFAULT_TEMPLATE.to_string(),
    };

    let page = render_page(&template, &options.title, &store.list_movies());

    if let Some(parent) = options.output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(GetflixError::Io)?;
        }
    }
    fs::write(&options.output, page).map_err(GetflixError::Io)?;

    Ok(CmdResult::default()
        .with_site_path(options.output.clone())
        .with_message(CmdMessage::success(format!(
            "Website was generated successfully: {}",
            options.output.display()
        ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Movie;
    use crate::store::mem_backend::MemBackend;
    use crate::store::movie_store::MovieStore;
    use tempfile::TempDir;

    #[test]
    fn entry_with_id_poster_and_notes() {
        let mut movie = Movie::new(2010, 8.8)
            .with_poster("https://example.com/inception.jpg")
            .with_imdb_id("tt1375666");
        movie.notes = vec!["great visuals".to_string(), "rewatch".to_string()];
        let mut catalog = Catalog::new();
        catalog.insert("Inception".to_string(), movie);

        let grid = render_grid(&catalog);
        assert!(grid.contains("href=\"https://www.imdb.com/title/tt1375666/\""));
        assert!(grid.contains("src=\"https://example.com/inception.jpg\""));
        assert!(grid.contains("<div class=\"movie-title\">Inception</div>"));
        assert!(grid.contains("<div class=\"movie-year\">2010</div>"));
        assert!(grid.contains("<div class=\"movie-rating\">8.8</div>"));
        assert!(grid.contains("great visuals | rewatch"));
    }

    #[test]
    fn whole_ratings_keep_one_decimal() {
        let mut catalog = Catalog::new();
        catalog.insert("Heat".to_string(), Movie::new(1995, 8.0));

        let grid = render_grid(&catalog);
        assert!(grid.contains("<div class=\"movie-rating\">8.0</div>"));
    }

    #[test]
    fn entry_without_optional_fields_uses_placeholder_link() {
        let mut catalog = Catalog::new();
        catalog.insert("Alien".to_string(), Movie::new(1979, 8.5));

        let grid = render_grid(&catalog);
        assert!(grid.contains("href=\"#\""));
        assert!(!grid.contains("<img"));
        assert!(!grid.contains("movie-notes"));
    }

    #[test]
    fn grid_is_capped_at_twenty_entries() {
        let catalog: Catalog = (0..25)
            .map(|i| (format!("Movie {:02}", i), Movie::new(2000, 5.0)))
            .collect();

        let grid = render_grid(&catalog);
        assert_eq!(grid.matches("<li class=\"movie-item\">").count(), MAX_ENTRIES);
        assert!(grid.contains("Movie 19"));
        assert!(!grid.contains("Movie 20"));
    }

    #[test]
    fn titles_are_escaped() {
        let mut catalog = Catalog::new();
        catalog.insert("Tom & Jerry <3".to_string(), Movie::new(1992, 5.0));
        let grid = render_grid(&catalog);
        assert!(grid.contains("Tom &amp; Jerry &lt;3"));
    }

    #[test]
    fn page_substitutes_both_tokens() {
        let template = "<h1>__TEMPLATE_TITLE__</h1><ol>__TEMPLATE_MOVIE_GRID__</ol>";
        let mut catalog = Catalog::new();
        catalog.insert("Up".to_string(), Movie::new(2009, 8.3));

        let page = render_page(template, "My Movies", &catalog);
        assert!(page.starts_with("<h1>My Movies</h1><ol>"));
        assert!(page.contains("<div class=\"movie-title\">Up</div>"));
        assert!(!page.contains(TITLE_TOKEN));
        assert!(!page.contains(GRID_TOKEN));
    }

    #[test]
    fn default_template_has_both_tokens() {
        assert!(DEFAULT_TEMPLATE.contains(TITLE_TOKEN));
        assert!(DEFAULT_TEMPLATE.contains(GRID_TOKEN));
    }

    #[test]
    fn run_writes_output_from_template_file() {
        let dir = TempDir::new().unwrap();
        let template_path = dir.path().join("template.html");
        fs::write(&template_path, "__TEMPLATE_TITLE__\n__TEMPLATE_MOVIE_GRID__").unwrap();

        let mut store = MovieStore::open(MemBackend::new());
        store.add_movie("Up", Movie::new(2009, 8.3)).unwrap();

        let options = SiteOptions {
            title: "Getflix".to_string(),
            template: Some(template_path),
            output: dir.path().join("site").join("index.html"),
        };
        let result = run(&store, &options).unwrap();

        let written = fs::read_to_string(&options.output).unwrap();
        assert!(written.starts_with("Getflix\n"));
        assert!(written.contains("Up"));
        assert_eq!(result.site_path, Some(options.output.clone()));
    }

    #[test]
    fn missing_template_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = MovieStore::open(MemBackend::new());
        let options = SiteOptions {
            title: "Getflix".to_string(),
            template: Some(dir.path().join("nope.html")),
            output: dir.path().join("index.html"),
        };
        assert!(matches!(run(&store, &options), Err(GetflixError::Io(_))));
        assert!(!options.output.exists());
    }
}
