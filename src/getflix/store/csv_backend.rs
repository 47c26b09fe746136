use super::backend::{read_if_exists, write_atomic, CatalogBackend};
use crate::error::{GetflixError, Result};
use crate::model::{Catalog, Movie};
use csv::StringRecord;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Column order used when writing. Notes have no column.
pub const HEADER: [&str; 5] = ["title", "year", "rating", "poster", "imdb_id"];

/// Catalog stored as comma-separated rows under a header.
///
/// `title`, `year` and `rating` are mandatory. `poster` and `imdb_id` may be
/// missing or blank and are then stored as `N/A`. Notes are not persisted:
/// a CSV round-trip drops them.
pub struct CsvBackend {
    path: PathBuf,
}

struct Columns {
    title: usize,
    year: usize,
    rating: usize,
    poster: Option<usize>,
    imdb_id: Option<usize>,
}

impl Columns {
    fn from_header(header: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            header
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim().eq_ignore_ascii_case(name))
        };
        let require = |name: &'static str| {
            find(name).ok_or_else(|| GetflixError::MalformedField {
                line: 1,
                field: name,
                value: header.iter().collect::<Vec<_>>().join(","),
            })
        };
        Ok(Self {
            title: require("title")?,
            year: require("year")?,
            rating: require("rating")?,
            poster: find("poster"),
            imdb_id: find("imdb_id"),
        })
    }
}

impl CsvBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

fn field(record: &StringRecord, index: usize) -> Option<&str> {
    record.get(index).map(str::trim).filter(|v| !v.is_empty())
}

/// The title exactly as written; blank counts as missing.
fn title_field(record: &StringRecord, index: usize) -> Option<&str> {
    record.get(index).filter(|v| !v.trim().is_empty())
}

/// Parse one data row.
///
/// `Ok(None)` when a mandatory field is missing, `Err` when year or rating is
/// present but not a number.
fn parse_row(record: &StringRecord, columns: &Columns, line: u64) -> Result<Option<(String, Movie)>> {
    let (Some(title), Some(year), Some(rating)) = (
        title_field(record, columns.title),
        field(record, columns.year),
        field(record, columns.rating),
    ) else {
        return Ok(None);
    };

    let year: i32 = year.parse().map_err(|_| GetflixError::MalformedField {
        line,
        field: "year",
        value: year.to_string(),
    })?;
    let rating = rating
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite())
        .ok_or_else(|| GetflixError::MalformedField {
            line,
            field: "rating",
            value: rating.to_string(),
        })?;

    let mut movie = Movie::new(year, rating);
    if let Some(poster) = columns.poster.and_then(|i| field(record, i)) {
        movie = movie.with_poster(poster);
    }
    if let Some(imdb_id) = columns.imdb_id.and_then(|i| field(record, i)) {
        movie = movie.with_imdb_id(imdb_id);
    }
    Ok(Some((title.to_string(), movie)))
}

impl CatalogBackend for CsvBackend {
    fn load(&self) -> Result<Catalog> {
        let Some(content) = read_if_exists(&self.path)? else {
            return Ok(Catalog::new());
        };

        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(content.as_bytes());
        let header = reader.headers().map_err(GetflixError::Csv)?.clone();
        if header.is_empty() {
            return Ok(Catalog::new());
        }
        let columns = Columns::from_header(&header)?;

        let mut catalog = Catalog::new();
        for record in reader.records() {
            let record = record.map_err(GetflixError::Csv)?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            match parse_row(&record, &columns, line) {
                Ok(Some((title, movie))) => {
                    if catalog.insert(title.clone(), movie).is_some() {
                        warn!(line, %title, "duplicate title in csv, keeping the later row");
                    }
                }
                Ok(None) => {
                    warn!(line, "skipping csv row with missing title, year or rating");
                }
                Err(e) => {
                    warn!(line, error = %e, "skipping csv row");
                }
            }
        }
        Ok(catalog)
    }

    fn save(&self, catalog: &Catalog) -> Result<()> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(HEADER).map_err(GetflixError::Csv)?;
        for (title, movie) in catalog {
            writer
                .write_record([
                    title.as_str(),
                    movie.year.to_string().as_str(),
                    movie.rating.to_string().as_str(),
                    movie.poster.as_str(),
                    movie.imdb_id.as_str(),
                ])
                .map_err(GetflixError::Csv)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| GetflixError::Io(e.into_error()))?;

        write_atomic(&self.path, &bytes)?;
        debug!(path = %self.path.display(), movies = catalog.len(), "flushed csv catalog");
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
