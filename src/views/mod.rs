//! View models handed to the templates.
//!
//! Everything here is built from already-fetched TMDB data; nothing in this
//! module talks to the network.

mod carousel;
mod detail;
mod navbar;
mod pagination;

pub use carousel::{Carousel, Direction, AUTO_ADVANCE};
pub use detail::{
    sort_filmography, EpisodeView, MovieDetailView, NamedLogo, PersonView, SeasonCard,
    SeasonView, TrailerView, TvDetailView,
};
pub use navbar::{nav_links, NavLink};
pub use pagination::{parse_page, PageCursor, PageLink, Paginator};

use crate::tmdb::{
    image_url, CastMember, CrewMember, Movie, MovieCredit, SimilarMovie, SimilarShow, TvShow,
};

/// A poster tile linking to a movie or show page.
#[derive(Debug, Clone)]
pub struct PosterCard {
    pub href: String,
    pub title: String,
    pub poster: Option<String>,
    pub year: Option<String>,
    pub release_date: Option<String>,
    pub rating: Option<String>,
    pub popularity: Option<String>,
    pub subtitle: Option<String>,
}

impl PosterCard {
    pub fn from_movie(movie: &Movie, size: &str) -> Self {
        Self {
            href: format!("/movie/{}", movie.id),
            title: movie.title.clone(),
            poster: poster(size, movie.poster_path.as_deref()),
            year: year_of(movie.release_date.as_deref()),
            release_date: non_blank(movie.release_date.as_deref()),
            rating: one_decimal(movie.vote_average),
            popularity: movie.popularity.map(|p| format!("{:.0}", p)),
            subtitle: None,
        }
    }

    pub fn from_show(show: &TvShow, size: &str) -> Self {
        Self {
            href: format!("/tv/{}", show.id),
            title: show.name.clone(),
            poster: poster(size, show.poster_path.as_deref()),
            year: year_of(show.first_air_date.as_deref()),
            release_date: non_blank(show.first_air_date.as_deref()),
            rating: one_decimal(show.vote_average),
            popularity: None,
            subtitle: show.number_of_seasons.map(|n| format!("{} Seasons", n)),
        }
    }

    pub fn from_credit(credit: &MovieCredit, size: &str) -> Self {
        Self {
            href: format!("/movie/{}", credit.id),
            title: credit.title.clone(),
            poster: poster(size, credit.poster_path.as_deref()),
            year: year_of(credit.release_date.as_deref()),
            release_date: non_blank(credit.release_date.as_deref()),
            rating: one_decimal(credit.vote_average),
            popularity: None,
            subtitle: non_blank(credit.character.as_deref()),
        }
    }

    pub fn from_similar_movie(movie: &SimilarMovie, size: &str) -> Self {
        Self {
            href: format!("/movie/{}", movie.id),
            title: movie.title.clone(),
            poster: poster(size, movie.poster_path.as_deref()),
            year: year_of(movie.release_date.as_deref()),
            release_date: non_blank(movie.release_date.as_deref()),
            rating: None,
            popularity: None,
            subtitle: None,
        }
    }

    pub fn from_similar_show(show: &SimilarShow, size: &str) -> Self {
        Self {
            href: format!("/tv/{}", show.id),
            title: show.name.clone(),
            poster: poster(size, show.poster_path.as_deref()),
            year: None,
            release_date: None,
            rating: one_decimal(show.vote_average),
            popularity: None,
            subtitle: None,
        }
    }
}

/// A cast or crew member tile linking to the person page.
#[derive(Debug, Clone)]
pub struct PersonCard {
    pub href: String,
    pub name: String,
    pub role: Option<String>,
    pub photo: Option<String>,
}

impl PersonCard {
    pub fn from_cast(member: &CastMember, size: &str) -> Self {
        Self {
            href: format!("/person/{}", member.id),
            name: member.name.clone(),
            role: non_blank(member.character.as_deref()),
            photo: poster(size, member.profile_path.as_deref()),
        }
    }

    pub fn from_crew(member: &CrewMember, size: &str) -> Self {
        Self {
            href: format!("/person/{}", member.id),
            name: member.name.clone(),
            role: non_blank(Some(member.job.as_str())),
            photo: poster(size, member.profile_path.as_deref()),
        }
    }
}

/// Four-digit year from a TMDB `YYYY-MM-DD` date; blank or malformed dates give `None`.
pub fn year_of(date: Option<&str>) -> Option<String> {
    let year = date?.trim().get(..4)?;
    year.chars()
        .all(|c| c.is_ascii_digit())
        .then(|| year.to_string())
}

pub fn one_decimal(value: Option<f64>) -> Option<String> {
    value.map(|v| format!("{:.1}", v))
}

pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn poster(size: &str, path: Option<&str>) -> Option<String> {
    path.filter(|p| !p.is_empty()).map(|p| image_url(size, p))
}
