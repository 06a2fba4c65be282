use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{header::CACHE_CONTROL, Client};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::types::{
    CastDetail, Movie, MovieCredit, MovieCredits, MovieDetail, SeasonDetail, TmdbPage, TvShow,
};
use super::TmdbApi;
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
    language: String,
    revalidate: Duration,
}

impl TmdbClient {
    pub fn new(config: &Config) -> Result<Self> {
        let user_agent = format!("movieapp/{}", env!("CARGO_PKG_VERSION"));
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .context("Failed to build TMDB HTTP client")?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
            revalidate: config.revalidate,
        })
    }

    /// GET `{base}{path}` with `api_key` and `language` attached and parse the body.
    ///
    /// Entries in `params` replace the defaults of the same name, so a caller
    /// may ask for another `language`.
    pub async fn fetch_from_tmdb<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let query = merge_params(&self.api_key, &self.language, params);
        debug!(path = %path, params = ?params, "TMDB request");

        let res = self
            .client
            .get(&url)
            .query(&query)
            .header(CACHE_CONTROL, format!("max-age={}", self.revalidate.as_secs()))
            .send()
            .await
            .with_context(|| format!("TMDB request to {} failed", path))?;
        let status = res.status();
        let text = res.text().await.context("reading TMDB body failed")?;
        if !status.is_success() {
            return Err(anyhow!("Error TMDb {}: {}", status.as_u16(), text));
        }
        serde_json::from_str(&text).with_context(|| format!("TMDB JSON parse failed for {}", path))
    }

    async fn fetch_results<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let page: TmdbPage<T> = self.fetch_from_tmdb(path, params).await?;
        Ok(page.results)
    }
}

fn merge_params<'a>(
    api_key: &'a str,
    language: &'a str,
    params: &[(&'a str, &'a str)],
) -> Vec<(&'a str, &'a str)> {
    let mut query = vec![("api_key", api_key), ("language", language)];
    for &(key, value) in params {
        match query.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => query.push((key, value)),
        }
    }
    query
}

#[async_trait]
impl TmdbApi for TmdbClient {
    async fn popular_movies(&self) -> Result<Vec<Movie>> {
        self.fetch_results("/movie/popular", &[]).await
    }

    async fn trending_movies(&self) -> Result<Vec<Movie>> {
        self.fetch_results("/trending/movie/week", &[]).await
    }

    async fn upcoming_movies(&self) -> Result<Vec<Movie>> {
        self.fetch_results("/movie/upcoming", &[]).await
    }

    async fn top_rated_movies(&self) -> Result<Vec<Movie>> {
        self.fetch_results("/movie/top_rated", &[]).await
    }

    async fn search_movies(&self, query: &str) -> Result<Vec<Movie>> {
        self.fetch_results("/search/movie", &[("query", query)]).await
    }

    async fn movie_detail(&self, id: u64) -> Result<MovieDetail> {
        self.fetch_from_tmdb(
            &format!("/movie/{id}"),
            &[("append_to_response", "videos,credits,similar")],
        )
        .await
    }

    async fn trending_tv_shows(&self) -> Result<Vec<TvShow>> {
        self.fetch_results("/trending/tv/week", &[]).await
    }

    async fn tv_shows(&self, page: u32) -> Result<Vec<TvShow>> {
        let page = page.max(1).to_string();
        self.fetch_results("/tv/popular", &[("page", page.as_str())])
            .await
    }

    async fn tv_show_detail(&self, id: u64) -> Result<TvShow> {
        self.fetch_from_tmdb(
            &format!("/tv/{id}"),
            &[("append_to_response", "credits,videos,similar")],
        )
        .await
    }

    async fn tv_season(&self, id: u64, season: u32) -> Result<SeasonDetail> {
        self.fetch_from_tmdb(&format!("/tv/{id}/season/{season}"), &[])
            .await
    }

    async fn person_detail(&self, id: u64, language: Option<&str>) -> Result<CastDetail> {
        let path = format!("/person/{id}");
        match language {
            Some(lang) => self.fetch_from_tmdb(&path, &[("language", lang)]).await,
            None => self.fetch_from_tmdb(&path, &[]).await,
        }
    }

    async fn person_movie_credits(&self, id: u64) -> Result<Vec<MovieCredit>> {
        let credits: MovieCredits = self
            .fetch_from_tmdb(&format!("/person/{id}/movie_credits"), &[])
            .await?;
        Ok(credits.cast)
    }
}
