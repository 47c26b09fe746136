use colored::Colorize;
use getflix::api::{CatalogStats, CmdMessage, CmdResult, MessageLevel};
use getflix::model::MovieEntry;
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_TITLE_WIDTH: usize = 48;
const NOTE_SEPARATOR: &str = " | ";

pub(super) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// Everything a command produced: listing or changed rows, stats, then messages.
pub(super) fn write_result<W: Write>(out: &mut W, result: &CmdResult) -> io::Result<()> {
    if !result.listed_movies.is_empty() {
        write!(out, "{}", render_movie_list(&result.listed_movies))?;
    } else if !result.affected_movies.is_empty() {
        write!(out, "{}", render_movie_rows(&result.affected_movies))?;
    }
    if let Some(stats) = &result.stats {
        write!(out, "{}", render_stats(stats))?;
    }
    write_messages(out, &result.messages)
}

pub(super) fn render_movie_list(movies: &[MovieEntry]) -> String {
    format!(
        "{} movies in total\n{}",
        movies.len(),
        render_movie_rows(movies)
    )
}

/// One aligned row per movie, notes on an indented line below.
fn render_movie_rows(movies: &[MovieEntry]) -> String {
    let title_width = movies
        .iter()
        .map(|e| e.title.width())
        .max()
        .unwrap_or(0)
        .min(MAX_TITLE_WIDTH);

    let mut output = String::new();
    for entry in movies {
        let title = truncate_to_width(&entry.title, title_width);
        let padding = title_width.saturating_sub(title.width());
        output.push_str(&format!(
            "  {}{}  {}  {:>4.1}\n",
            title,
            " ".repeat(padding),
            entry.movie.year,
            entry.movie.rating
        ));
        if !entry.movie.notes.is_empty() {
            output.push_str(&format!(
                "      {}\n",
                entry.movie.notes.join(NOTE_SEPARATOR).dimmed()
            ));
        }
    }
    output
}

pub(super) fn render_stats(stats: &CatalogStats) -> String {
    format!(
        "Average rating: {:.2}\nMedian rating: {:.2}\nBest movies: {}\nWorst movies: {}\n",
        stats.average,
        stats.median,
        stats.best.join(", "),
        stats.worst.join(", ")
    )
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
