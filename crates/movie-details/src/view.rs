//! # Details View
//!
//! Maps a [`MovieDetails`] record onto the strings the details screen shows.
//! Everything here is pure formatting; no I/O.

use crate::model::MovieDetails;
use std::fmt;

/// Shown for any value the record does not carry.
pub const NOT_AVAILABLE: &str = "N/A";

/// A labelled value block ("Overview", "Genres", ...).
#[derive(Debug, Clone, PartialEq)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: String,
}

impl InfoRow {
    /// Missing values render as [`NOT_AVAILABLE`].
    pub fn new(label: &'static str, value: Option<String>) -> Self {
        Self {
            label,
            value: value.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }
}

/// Display-ready fields for the movie details screen.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetailsView {
    pub title: String,
    pub tagline: Option<String>,
    pub poster_url: Option<String>,
    pub release_year: Option<String>,
    /// e.g. "155 min"
    pub runtime: Option<String>,
    /// e.g. "8/10"
    pub rating: String,
    /// e.g. "(2000 votes)"
    pub votes: String,
    pub overview: Option<String>,
    pub genres: String,
    pub budget: String,
    pub revenue: String,
    pub production_companies: String,
}

impl MovieDetailsView {
    pub fn from_details(movie: &MovieDetails, image_base_url: &str) -> Self {
        Self {
            title: movie.title.clone(),
            tagline: movie.tagline.clone().filter(|t| !t.is_empty()),
            poster_url: movie
                .poster_path
                .as_deref()
                .map(|path| poster_url(image_base_url, path)),
            release_year: movie.release_date.as_deref().and_then(release_year),
            runtime: movie.runtime.map(|minutes| format!("{minutes} min")),
            rating: format!("{}/10", movie.vote_average.round()),
            votes: format!("({} votes)", movie.vote_count),
            overview: movie.overview.clone().filter(|o| !o.is_empty()),
            genres: join_names(movie.genres.iter().flatten().map(|g| g.name.as_str())),
            budget: format_millions(movie.budget),
            revenue: format_millions(movie.revenue),
            production_companies: join_names(
                movie.production_companies.iter().flatten().map(|c| c.name.as_str()),
            ),
        }
    }

    /// The labelled blocks below the title, in screen order.
    pub fn info_rows(&self) -> Vec<InfoRow> {
        vec![
            InfoRow::new("Overview", self.overview.clone()),
            InfoRow::new("Genres", Some(self.genres.clone())),
            InfoRow::new("Budget", Some(self.budget.clone())),
            InfoRow::new("Revenue", Some(self.revenue.clone())),
            InfoRow::new("Production Companies", Some(self.production_companies.clone())),
        ]
    }
}

impl fmt::Display for MovieDetailsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(poster) = &self.poster_url {
            writeln!(f, "[poster] {poster}")?;
        }
        writeln!(f, "{}", self.title)?;
        if let Some(tagline) = &self.tagline {
            writeln!(f, "\"{tagline}\"")?;
        }
        writeln!(
            f,
            "{} | {}",
            self.release_year.as_deref().unwrap_or(NOT_AVAILABLE),
            self.runtime.as_deref().unwrap_or(NOT_AVAILABLE)
        )?;
        writeln!(f, "* {} {}", self.rating, self.votes)?;
        for row in self.info_rows() {
            writeln!(f)?;
            writeln!(f, "{}", row.label)?;
            writeln!(f, "  {}", row.value)?;
        }
        Ok(())
    }
}

/// Poster location: the image prefix followed by the record's path.
pub fn poster_url(image_base_url: &str, poster_path: &str) -> String {
    format!("{image_base_url}{poster_path}")
}

/// Year part of an ISO date: everything before the first `-`.
pub fn release_year(release_date: &str) -> Option<String> {
    let year = release_date.split('-').next().unwrap_or_default();
    (!year.is_empty()).then(|| year.to_string())
}

/// `"$X.Y million"`, with the amount in millions rounded to one decimal.
pub fn format_millions(amount: f64) -> String {
    format!("${} million", one_decimal(amount / 1_000_000.0))
}

/// Rounds the exact binary value to one decimal, with exact ties away from zero.
fn one_decimal(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    // Only odd multiples of 0.25 sit exactly halfway between two tenths.
    let quarters = magnitude * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        return format!("{sign}{:.1}", (magnitude * 10.0).ceil() / 10.0);
    }
    format!("{sign}{magnitude:.1}")
}

/// Names joined with `" - "`, or [`NOT_AVAILABLE`] when there are none.
pub fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let joined = names.collect::<Vec<_>>().join(" - ");
    if joined.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        joined
    }
}
