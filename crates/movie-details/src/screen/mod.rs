//! # Movie Details Screen
//!
//! The screen consumes an [`AsyncResource<MovieDetails>`] and turns its state into
//! something to draw:
//!
//! | Resource state                         | Render                |
//! |----------------------------------------|-----------------------|
//! | in flight, or nothing fetched yet      | [`Render::Loading`]   |
//! | idle with a failure and no result      | [`Render::Failed`]    |
//! | a result is present                    | [`Render::Details`]   |
//!
//! A result that is still present after a failed refresh keeps being shown.

pub mod navigation;

pub use navigation::*;

use crate::clients::{movie_resource, MovieApi};
use crate::model::MovieDetails;
use crate::view::MovieDetailsView;
use async_resource::AsyncResource;
use std::sync::Arc;
use tracing::{debug, instrument};

/// What the screen should currently show.
#[derive(Debug, Clone, PartialEq)]
pub enum Render {
    Loading,
    Failed(String),
    Details(Box<MovieDetailsView>),
}

impl Render {
    pub fn is_loading(&self) -> bool {
        matches!(self, Render::Loading)
    }
}

/// The movie details screen: one resource, one navigator.
pub struct MovieDetailsScreen<N: Navigator> {
    movie: AsyncResource<MovieDetails>,
    image_base_url: String,
    navigator: N,
}

impl<N: Navigator> MovieDetailsScreen<N> {
    /// Opens the screen for `movie_id`; the fetch starts immediately.
    pub fn open<A>(
        api: Arc<A>,
        movie_id: impl Into<String>,
        image_base_url: impl Into<String>,
        navigator: N,
    ) -> Self
    where
        A: MovieApi + ?Sized + 'static,
    {
        Self::with_resource(movie_resource(api, movie_id), image_base_url, navigator)
    }

    /// Builds the screen around an existing resource.
    pub fn with_resource(
        movie: AsyncResource<MovieDetails>,
        image_base_url: impl Into<String>,
        navigator: N,
    ) -> Self {
        Self {
            movie,
            image_base_url: image_base_url.into(),
            navigator,
        }
    }

    /// The resource backing this screen.
    pub fn resource(&self) -> &AsyncResource<MovieDetails> {
        &self.movie
    }

    /// Maps the current resource state to what should be drawn.
    pub fn render(&self) -> Render {
        let state = self.movie.snapshot();
        if state.in_flight {
            return Render::Loading;
        }
        match (state.result, state.failure) {
            (Some(movie), _) => Render::Details(Box::new(MovieDetailsView::from_details(
                &movie,
                &self.image_base_url,
            ))),
            (None, Some(failure)) => Render::Failed(failure.message()),
            (None, None) => Render::Loading,
        }
    }

    /// Waits until a fetch has produced a movie or a failure and none is in flight,
    /// then renders.
    ///
    /// Never returns if the resource is reset and not run again.
    pub async fn render_settled(&self) -> Render {
        let mut updates = self.movie.subscribe();
        // The resource owns the sender, so the channel stays open while `self` lives.
        let _ = updates
            .wait_for(|state| {
                !state.in_flight && (state.result.is_some() || state.failure.is_some())
            })
            .await;
        self.render()
    }

    /// Fetches the movie again.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Render {
        self.movie.run().await;
        self.render()
    }

    /// The "Go back" button.
    pub fn go_back(&self) {
        debug!("Go back");
        self.navigator.back();
    }
}
