use chrono::NaiveDate;

use super::{non_blank, one_decimal, poster, year_of, PersonCard, PosterCard};
use crate::tmdb::{CastDetail, MovieCredit, MovieDetail, Named, SeasonDetail, TvShow, Video};

const MOVIE_CAST_LIMIT: usize = 10;
const MOVIE_SIMILAR_LIMIT: usize = 10;
const TV_TRAILER_LIMIT: usize = 2;
const TV_CAST_LIMIT: usize = 12;
const TV_CREW_LIMIT: usize = 8;
const TV_SIMILAR_LIMIT: usize = 10;
const IMPORTANT_JOBS: [&str; 4] = ["Director", "Producer", "Writer", "Creator"];

#[derive(Debug, Clone)]
pub struct TrailerView {
    pub embed_url: String,
    pub name: String,
}

impl TrailerView {
    fn from_video(video: &Video) -> Self {
        Self {
            embed_url: format!("https://www.youtube.com/embed/{}", video.key),
            name: video.name.clone().unwrap_or_else(|| "Trailer".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NamedLogo {
    pub name: String,
    pub logo: Option<String>,
}

impl NamedLogo {
    fn from_named(named: &Named, size: &str) -> Self {
        Self {
            name: named.name.clone(),
            logo: poster(size, named.logo_path.as_deref()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MovieDetailView {
    pub title: String,
    pub tagline: Option<String>,
    pub overview: String,
    pub hero: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<String>,
    pub status: Option<String>,
    pub rating: Option<String>,
    pub genres: String,
    pub director: Option<String>,
    pub trailer: Option<TrailerView>,
    pub cast: Vec<PersonCard>,
    pub similar: Vec<PosterCard>,
    pub companies: Vec<NamedLogo>,
    pub languages: String,
    pub budget: Option<String>,
    pub revenue: Option<String>,
}

impl MovieDetailView {
    pub fn new(movie: &MovieDetail) -> Self {
        let trailer = movie
            .videos
            .as_ref()
            .and_then(|v| v.results.iter().find(|v| v.is_youtube_trailer()))
            .map(TrailerView::from_video);
        let director = movie
            .credits
            .as_ref()
            .and_then(|c| c.crew.iter().find(|c| c.job == "Director"))
            .map(|c| c.name.clone());
        let cast = movie
            .credits
            .as_ref()
            .map(|c| {
                c.cast
                    .iter()
                    .take(MOVIE_CAST_LIMIT)
                    .map(|m| PersonCard::from_cast(m, "w300"))
                    .collect()
            })
            .unwrap_or_default();
        let similar = movie
            .similar
            .as_ref()
            .map(|s| {
                s.results
                    .iter()
                    .take(MOVIE_SIMILAR_LIMIT)
                    .map(|m| PosterCard::from_similar_movie(m, "w300"))
                    .collect()
            })
            .unwrap_or_default();
        let genres = movie
            .genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let languages = movie
            .spoken_languages
            .iter()
            .map(|l| l.english_name.as_deref().unwrap_or(&l.name))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            title: movie.title.clone(),
            tagline: non_blank(movie.tagline.as_deref()),
            overview: movie.overview.clone(),
            hero: poster("original", movie.poster_path.as_deref()),
            release_date: non_blank(movie.release_date.as_deref()),
            runtime: movie.runtime.filter(|r| *r > 0).map(|r| format!("{} min", r)),
            status: non_blank(movie.status.as_deref()),
            rating: one_decimal(movie.vote_average),
            genres,
            director,
            trailer,
            cast,
            similar,
            companies: movie
                .production_companies
                .iter()
                .map(|c| NamedLogo::from_named(c, "w200"))
                .collect(),
            languages,
            budget: movie.budget.filter(|b| *b > 0).map(dollars),
            revenue: movie.revenue.filter(|r| *r > 0).map(dollars),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SeasonCard {
    pub href: String,
    pub name: String,
    pub poster: Option<String>,
    pub episode_count: u32,
    pub year: Option<String>,
    pub overview: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TvDetailView {
    pub id: u64,
    pub name: String,
    pub original_name: Option<String>,
    pub backdrop: Option<String>,
    pub poster: Option<String>,
    pub rating: Option<String>,
    pub first_aired: Option<String>,
    pub seasons_summary: Option<String>,
    pub episode_runtime: Option<String>,
    pub status: Option<String>,
    pub genres: Vec<String>,
    pub creators: Vec<PersonCard>,
    pub networks: Vec<NamedLogo>,
    pub overview: String,
    pub trailers: Vec<TrailerView>,
    pub cast: Vec<PersonCard>,
    pub crew: Vec<PersonCard>,
    pub seasons: Vec<SeasonCard>,
    pub similar: Vec<PosterCard>,
    pub companies: Vec<NamedLogo>,
}

impl TvDetailView {
    pub fn new(show: &TvShow) -> Self {
        let credits = show.credits.clone().unwrap_or_default();
        let trailers = show
            .videos
            .as_ref()
            .map(|v| {
                v.results
                    .iter()
                    .filter(|v| v.is_youtube_trailer())
                    .take(TV_TRAILER_LIMIT)
                    .map(TrailerView::from_video)
                    .collect()
            })
            .unwrap_or_default();
        let crew = credits
            .crew
            .iter()
            .filter(|c| IMPORTANT_JOBS.contains(&c.job.as_str()))
            .take(TV_CREW_LIMIT)
            .map(|c| PersonCard::from_crew(c, "w500"))
            .collect();
        let seasons = show
            .seasons
            .iter()
            .map(|s| SeasonCard {
                href: format!("/tv/{}/season/{}", show.id, s.season_number),
                name: s.name.clone(),
                poster: poster("w500", s.poster_path.as_deref()),
                episode_count: s.episode_count.unwrap_or(0),
                year: year_of(s.air_date.as_deref()),
                overview: non_blank(s.overview.as_deref()),
            })
            .collect();
        let similar = show
            .similar
            .as_ref()
            .map(|s| {
                s.results
                    .iter()
                    .take(TV_SIMILAR_LIMIT)
                    .map(|s| PosterCard::from_similar_show(s, "w500"))
                    .collect()
            })
            .unwrap_or_default();
        let seasons_summary = match (show.number_of_seasons, show.number_of_episodes) {
            (Some(s), Some(e)) if s > 0 && e > 0 => Some(format!("{} Seasons • {} Episodes", s, e)),
            _ => None,
        };

        Self {
            id: show.id,
            name: show.name.clone(),
            original_name: show
                .original_name
                .clone()
                .filter(|o| !o.is_empty() && *o != show.name),
            backdrop: poster("original", show.backdrop_path.as_deref()),
            poster: poster("w500", show.poster_path.as_deref()),
            rating: one_decimal(show.vote_average),
            first_aired: year_of(show.first_air_date.as_deref()),
            seasons_summary,
            episode_runtime: show
                .episode_run_time
                .first()
                .map(|r| format!("{} min/episode", r)),
            status: non_blank(show.status.as_deref()),
            genres: show.genres.iter().map(|g| g.name.clone()).collect(),
            creators: show
                .created_by
                .iter()
                .map(|c| PersonCard {
                    href: format!("/person/{}", c.id),
                    name: c.name.clone(),
                    role: None,
                    photo: None,
                })
                .collect(),
            networks: show
                .networks
                .iter()
                .map(|n| NamedLogo::from_named(n, "w92"))
                .collect(),
            overview: non_blank(show.overview.as_deref())
                .unwrap_or_else(|| "No overview available.".to_string()),
            trailers,
            cast: credits
                .cast
                .iter()
                .take(TV_CAST_LIMIT)
                .map(|c| PersonCard::from_cast(c, "w500"))
                .collect(),
            crew,
            seasons,
            similar,
            companies: show
                .production_companies
                .iter()
                .map(|c| NamedLogo::from_named(c, "w200"))
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EpisodeView {
    pub number: u32,
    pub name: String,
    pub overview: Option<String>,
    pub air_date: Option<String>,
    pub runtime: Option<String>,
    pub still: Option<String>,
    pub rating: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SeasonView {
    pub show_href: String,
    pub name: String,
    pub overview: Option<String>,
    pub air_date: Option<String>,
    pub poster: Option<String>,
    pub episodes: Vec<EpisodeView>,
}

impl SeasonView {
    pub fn new(show_id: u64, season: &SeasonDetail) -> Self {
        Self {
            show_href: format!("/tv/{}", show_id),
            name: season.name.clone(),
            overview: non_blank(season.overview.as_deref()),
            air_date: non_blank(season.air_date.as_deref()),
            poster: poster("w500", season.poster_path.as_deref()),
            episodes: season
                .episodes
                .iter()
                .map(|e| EpisodeView {
                    number: e.episode_number,
                    name: e.name.clone(),
                    overview: non_blank(e.overview.as_deref()),
                    air_date: non_blank(e.air_date.as_deref()),
                    runtime: e.runtime.map(|r| format!("{} min", r)),
                    still: poster("w300", e.still_path.as_deref()),
                    rating: one_decimal(e.vote_average.filter(|v| *v > 0.0)),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PersonView {
    pub name: String,
    pub backdrop: Option<String>,
    pub photo: Option<String>,
    pub department: Option<String>,
    pub birthday: Option<String>,
    pub also_known_as: String,
    pub place_of_birth: String,
    pub gender: &'static str,
    pub popularity: String,
    pub movie_count: usize,
    pub biography: String,
    pub filmography: Vec<PosterCard>,
}

impl PersonView {
    /// `localized` is the same person fetched in the secondary language; its
    /// biography wins when it has any text.
    pub fn new(person: &CastDetail, localized: &CastDetail, mut credits: Vec<MovieCredit>) -> Self {
        sort_filmography(&mut credits);
        let biography = [localized.biography.as_str(), person.biography.as_str()]
            .into_iter()
            .find(|b| !b.trim().is_empty())
            .unwrap_or("Biography not available.")
            .to_string();
        let also_known_as = if person.also_known_as.is_empty() {
            "N/A".to_string()
        } else {
            person.also_known_as.join(", ")
        };

        Self {
            name: person.name.clone(),
            backdrop: poster("original", person.profile_path.as_deref()),
            photo: poster("w500", person.profile_path.as_deref()),
            department: non_blank(person.known_for_department.as_deref()),
            birthday: person.birthday.as_deref().and_then(long_date),
            also_known_as,
            place_of_birth: non_blank(person.place_of_birth.as_deref())
                .unwrap_or_else(|| "N/A".to_string()),
            gender: gender_label(person.gender),
            popularity: format!("{:.2}", person.popularity),
            movie_count: credits.len(),
            biography,
            filmography: credits
                .iter()
                .map(|c| PosterCard::from_credit(c, "w500"))
                .collect(),
        }
    }
}

/// Newest release first; credits without a usable date go last, keeping their order.
pub fn sort_filmography(credits: &mut [MovieCredit]) {
    credits.sort_by(|a, b| release_key(b).cmp(&release_key(a)));
}

fn release_key(credit: &MovieCredit) -> Option<NaiveDate> {
    credit.release_date.as_deref()?.parse().ok()
}

fn long_date(raw: &str) -> Option<String> {
    let date: NaiveDate = raw.parse().ok()?;
    Some(date.format("%B %-d, %Y").to_string())
}

fn gender_label(gender: Option<u8>) -> &'static str {
    match gender {
        Some(1) => "Female",
        Some(2) => "Male",
        Some(3) => "Non-binary",
        _ => "Not specified",
    }
}

fn dollars(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("${}", out)
}
