//! Shapes of the TMDB v3 responses the site renders.
//!
//! Fields TMDB omits or sends as `null` are optional here; nothing beyond
//! deserialization is checked. Only list items (`Movie`, `TvShow` and what
//! they nest) are written back out, by `/api/tv-shows`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
    Person,
}

/// One page of a list endpoint (`/movie/popular`, `/search/movie`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbPage<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub overview: Option<String>,
    pub vote_average: Option<f64>,
    pub media_type: Option<MediaType>,
    pub popularity: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub key: String,
    pub name: Option<String>,
    pub site: String,
    #[serde(rename = "type")]
    pub video_type: String,
    pub size: Option<u32>,
}

impl Video {
    pub fn is_youtube_trailer(&self) -> bool {
        self.site == "YouTube" && self.video_type == "Trailer"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Videos {
    #[serde(default)]
    pub results: Vec<Video>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    pub character: Option<String>,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub job: String,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimilarMovie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Named {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    pub logo_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpokenLanguage {
    #[serde(default)]
    pub english_name: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetail {
    pub id: u64,
    pub title: String,
    pub tagline: Option<String>,
    #[serde(default)]
    pub overview: String,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub runtime: Option<u32>,
    pub status: Option<String>,
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub production_companies: Vec<Named>,
    #[serde(default)]
    pub spoken_languages: Vec<SpokenLanguage>,
    pub budget: Option<u64>,
    pub revenue: Option<u64>,
    pub videos: Option<Videos>,
    pub credits: Option<Credits>,
    pub similar: Option<TmdbPage<SimilarMovie>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub poster_path: Option<String>,
    pub air_date: Option<String>,
    pub episode_count: Option<u32>,
    pub overview: Option<String>,
    pub season_number: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarShow {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub poster_path: Option<String>,
    pub vote_average: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TvShow {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub original_name: Option<String>,
    pub backdrop_path: Option<String>,
    pub poster_path: Option<String>,
    pub overview: Option<String>,
    pub first_air_date: Option<String>,
    pub last_air_date: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub show_type: Option<String>,
    pub number_of_seasons: Option<u32>,
    pub number_of_episodes: Option<u32>,
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub created_by: Vec<Named>,
    #[serde(default)]
    pub networks: Vec<Named>,
    #[serde(default)]
    pub production_companies: Vec<Named>,
    #[serde(default)]
    pub seasons: Vec<Season>,
    pub credits: Option<Credits>,
    pub videos: Option<Videos>,
    pub similar: Option<TmdbPage<SimilarShow>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Episode {
    pub id: u64,
    pub episode_number: u32,
    #[serde(default)]
    pub name: String,
    pub overview: Option<String>,
    pub air_date: Option<String>,
    pub runtime: Option<u32>,
    pub still_path: Option<String>,
    pub vote_average: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeasonDetail {
    #[serde(default)]
    pub name: String,
    pub overview: Option<String>,
    pub air_date: Option<String>,
    pub poster_path: Option<String>,
    pub season_number: u32,
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

/// A person as returned by `/person/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CastDetail {
    pub id: u64,
    pub name: String,
    pub gender: Option<u8>,
    pub original_name: Option<String>,
    #[serde(default)]
    pub biography: String,
    pub profile_path: Option<String>,
    pub birthday: Option<String>,
    pub place_of_birth: Option<String>,
    pub known_for_department: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub also_known_as: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieCredit {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub character: Option<String>,
    pub overview: Option<String>,
    pub vote_average: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieCredits {
    #[serde(default)]
    pub cast: Vec<MovieCredit>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn movie_detail_tolerates_nulls_and_missing_appends() {
        let value = json!({
            "id": 550,
            "title": "Fight Club",
            "overview": "An insomniac office worker...",
            "release_date": "1999-10-15",
            "poster_path": null,
            "runtime": 139,
            "tagline": null,
            "genres": [{ "id": 18, "name": "Drama" }]
        });
        let movie: MovieDetail = serde_json::from_value(value).expect("movie detail");
        assert_eq!(movie.id, 550);
        assert!(movie.poster_path.is_none());
        assert!(movie.credits.is_none());
        assert!(movie.similar.is_none());
        assert_eq!(movie.genres.len(), 1);
        assert!(movie.production_companies.is_empty());
    }

    #[test]
    fn list_item_reads_media_type() {
        let value = json!({
            "page": 1,
            "results": [
                { "id": 1, "title": "A", "media_type": "movie", "vote_average": 7.25 },
                { "id": 2, "name": "B", "media_type": "tv" }
            ],
            "total_pages": 1,
            "total_results": 2
        });
        let page: TmdbPage<Movie> = serde_json::from_value(value).expect("page");
        assert_eq!(page.results[0].media_type, Some(MediaType::Movie));
        assert_eq!(page.results[1].media_type, Some(MediaType::Tv));
        // tv entries in a movie list carry `name`, not `title`.
        assert_eq!(page.results[1].title, "");
    }

    #[test]
    fn tv_show_reads_type_and_nested_appends() {
        let value = json!({
            "id": 1399,
            "name": "Game of Thrones",
            "type": "Scripted",
            "episode_run_time": [60],
            "seasons": [{ "id": 3624, "name": "Season 1", "season_number": 1, "episode_count": 10 }],
            "credits": { "cast": [{ "id": 22970, "name": "Peter Dinklage", "character": "Tyrion" }] },
            "videos": { "results": [{ "key": "abc", "site": "YouTube", "type": "Trailer", "name": "T" }] },
            "similar": { "results": [{ "id": 1, "name": "Other" }] }
        });
        let show: TvShow = serde_json::from_value(value).expect("tv show");
        assert_eq!(show.show_type.as_deref(), Some("Scripted"));
        assert_eq!(show.seasons[0].episode_count, Some(10));
        assert!(show.videos.as_ref().unwrap().results[0].is_youtube_trailer());
        assert_eq!(show.credits.unwrap().cast[0].name, "Peter Dinklage");
        assert!(show.similar.unwrap().page == 0);
    }

    #[test]
    fn tv_show_is_re_emitted_with_its_nesting() {
        let show: TvShow = serde_json::from_value(json!({
            "id": 1399,
            "name": "Game of Thrones",
            "type": "Scripted",
            "seasons": [{ "id": 3624, "name": "Season 1", "season_number": 1 }],
            "similar": { "results": [{ "id": 1, "name": "Other" }] }
        }))
        .expect("tv show");
        let out = serde_json::to_value(&show).expect("serialize");
        assert_eq!(out["type"], "Scripted");
        assert_eq!(out["seasons"][0]["season_number"], 1);
        assert_eq!(out["similar"]["results"][0]["name"], "Other");
    }
}
