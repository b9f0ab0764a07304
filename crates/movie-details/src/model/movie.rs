use serde::{Deserialize, Serialize};

/// Detailed metadata for a single movie, as returned by the movie API.
///
/// Only the fields the details screen shows are modeled; unknown fields in the
/// response are ignored. Numeric fields the API sometimes omits default to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    /// ISO date (`YYYY-MM-DD`).
    #[serde(default)]
    pub release_date: Option<String>,
    /// Minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<Genre>>,
    /// US dollars.
    #[serde(default)]
    pub budget: f64,
    /// US dollars.
    #[serde(default)]
    pub revenue: f64,
    #[serde(default)]
    pub production_companies: Option<Vec<ProductionCompany>>,
}

impl MovieDetails {
    /// Creates a record with only a title; everything else empty.
    ///
    /// # Arguments
    /// * `title` - Display title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            tagline: None,
            status: None,
            poster_path: None,
            release_date: None,
            runtime: None,
            vote_average: 0.0,
            vote_count: 0,
            overview: None,
            genres: None,
            budget: 0.0,
            revenue: 0.0,
            production_companies: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    #[serde(default)]
    pub id: u64,
    pub name: String,
}

impl Genre {
    pub fn new(name: impl Into<String>) -> Self {
        Self { id: 0, name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionCompany {
    #[serde(default)]
    pub id: u64,
    pub name: String,
}

impl ProductionCompany {
    pub fn new(name: impl Into<String>) -> Self {
        Self { id: 0, name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_payload() {
        let body = r#"{
            "adult": false,
            "id": 438631,
            "title": "Dune",
            "poster_path": "/abc.jpg",
            "release_date": "2021-10-22",
            "runtime": 155,
            "vote_average": 8.1,
            "vote_count": 2000,
            "overview": "A hero's journey.",
            "genres": [{"id": 878, "name": "Sci-Fi"}],
            "budget": 165000000,
            "revenue": 402000000,
            "production_companies": [{"id": 923, "name": "Legendary", "origin_country": "US"}]
        }"#;

        let movie: MovieDetails = serde_json::from_str(body).unwrap();
        assert_eq!(movie.id, 438631);
        assert_eq!(movie.title, "Dune");
        assert_eq!(movie.runtime, Some(155));
        assert_eq!(movie.budget, 165_000_000.0);
        assert_eq!(movie.genres.unwrap()[0].name, "Sci-Fi");
        assert_eq!(movie.production_companies.unwrap()[0].name, "Legendary");
    }

    #[test]
    fn test_nulls_and_missing_fields() {
        let body = r#"{"title": "Unknown", "poster_path": null, "runtime": null, "genres": null}"#;

        let movie: MovieDetails = serde_json::from_str(body).unwrap();
        assert_eq!(movie, MovieDetails::new("Unknown"));
    }
}
