use anyhow::Result;
use async_trait::async_trait;

mod client;
mod types;

pub use client::TmdbClient;
pub use types::{
    CastDetail, CastMember, Credits, CrewMember, Episode, Genre, MediaType, Movie, MovieCredit,
    MovieCredits, MovieDetail, Named, Season, SeasonDetail, SimilarMovie, SimilarShow,
    SpokenLanguage, TmdbPage, TvShow, Video, Videos,
};

const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

/// One method per upstream resource the site reads.
#[async_trait]
pub trait TmdbApi: Send + Sync {
    async fn popular_movies(&self) -> Result<Vec<Movie>>;
    async fn trending_movies(&self) -> Result<Vec<Movie>>;
    async fn upcoming_movies(&self) -> Result<Vec<Movie>>;
    async fn top_rated_movies(&self) -> Result<Vec<Movie>>;
    async fn search_movies(&self, query: &str) -> Result<Vec<Movie>>;
    async fn movie_detail(&self, id: u64) -> Result<MovieDetail>;
    async fn trending_tv_shows(&self) -> Result<Vec<TvShow>>;
    async fn tv_shows(&self, page: u32) -> Result<Vec<TvShow>>;
    async fn tv_show_detail(&self, id: u64) -> Result<TvShow>;
    async fn tv_season(&self, id: u64, season: u32) -> Result<SeasonDetail>;
    /// `language` overrides the configured language for this lookup only.
    async fn person_detail(&self, id: u64, language: Option<&str>) -> Result<CastDetail>;
    async fn person_movie_credits(&self, id: u64) -> Result<Vec<MovieCredit>>;
}

/// Image CDN URL, e.g. `image_url("w500", "/abc.jpg")`.
pub fn image_url(size: &str, path: &str) -> String {
    format!("{IMAGE_BASE}/{size}{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_image_urls() {
        assert_eq!(
            image_url("w500", "/poster.jpg"),
            "https://image.tmdb.org/t/p/w500/poster.jpg"
        );
        assert_eq!(
            image_url("original", "/b.jpg"),
            "https://image.tmdb.org/t/p/original/b.jpg"
        );
    }
}
