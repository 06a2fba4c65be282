use askama::Template;
use chrono::{Datelike, Utc};

use crate::tmdb::{image_url, Movie, TvShow};
use crate::views::{
    nav_links, one_decimal, year_of, Carousel, Direction, MovieDetailView, NavLink, PageLink, Paginator,
    PersonView, PosterCard, SeasonView, TvDetailView,
};

/// Navbar, search box and footer shared by every page.
pub struct Chrome {
    pub nav: Vec<NavLink>,
    pub query: String,
    pub year: i32,
}

impl Chrome {
    pub fn new(path: &str) -> Self {
        Self {
            nav: nav_links(path),
            query: String::new(),
            year: Utc::now().year(),
        }
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }
}

/// A titled block of poster cards paged in memory.
pub struct SectionView {
    pub title: String,
    pub cards: Vec<PosterCard>,
    pub pages: Vec<PageLink>,
    pub prev: Option<String>,
    pub next: Option<String>,
}

impl SectionView {
    pub fn new<F>(title: &str, movies: &[Movie], pager: Paginator, href: F) -> Self
    where
        F: Fn(usize) -> String,
    {
        Self {
            title: title.to_string(),
            cards: pager
                .slice(movies)
                .iter()
                .map(|m| PosterCard::from_movie(m, "w500"))
                .collect(),
            pages: if pager.total_pages() > 1 {
                pager.links(&href)
            } else {
                Vec::new()
            },
            prev: pager.has_prev().then(|| href(pager.prev())),
            next: pager.has_next().then(|| href(pager.next())),
        }
    }
}

pub struct SlideView {
    pub name: String,
    pub href: String,
    pub backdrop: Option<String>,
    pub rating: Option<String>,
    pub year: Option<String>,
    pub overview: String,
    pub active: bool,
    pub select_href: String,
    /// Wrapped neighbours, followed by the browser timer and arrows.
    pub next: usize,
    pub prev: usize,
}

impl SlideView {
    pub fn from_show(show: &TvShow, at: Carousel, active: bool, select_href: String) -> Self {
        Self {
            name: show.name.clone(),
            href: format!("/tv/{}", show.id),
            backdrop: show
                .backdrop_path
                .as_deref()
                .map(|p| image_url("original", p)),
            rating: one_decimal(show.vote_average),
            year: year_of(show.first_air_date.as_deref()),
            overview: show.overview.clone().unwrap_or_default(),
            active,
            select_href,
            next: at.next_index(),
            prev: at.prev_index(),
        }
    }
}

pub struct CarouselView {
    pub slides: Vec<SlideView>,
    pub current: usize,
    pub backward: bool,
    pub prev_href: String,
    pub next_href: String,
    pub interval_ms: u128,
}

impl CarouselView {
    /// `href` turns a carousel query (`slide=2&step=next`) into a link.
    pub fn new<F>(shows: &[TvShow], carousel: Carousel, interval_ms: u128, href: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        let current = carousel.current();
        Self {
            slides: shows
                .iter()
                .enumerate()
                .map(|(i, show)| {
                    SlideView::from_show(
                        show,
                        Carousel::starting_at(shows.len(), i),
                        i == current,
                        href(&format!("slide={}&select={}", current, i)),
                    )
                })
                .collect(),
            current,
            backward: carousel.direction() == Direction::Backward,
            prev_href: href(&format!("slide={}&step=prev", current)),
            next_href: href(&format!("slide={}&step=next", current)),
            interval_ms,
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub chrome: Chrome,
    pub sections: Vec<SectionView>,
}

#[derive(Template)]
#[template(path = "grid.html")]
pub struct GridTemplate {
    pub chrome: Chrome,
    pub heading: String,
    pub subheading: Option<String>,
    pub cards: Vec<PosterCard>,
    pub show_stats: bool,
    pub empty_message: String,
}

#[derive(Template)]
#[template(path = "movie.html")]
pub struct MovieTemplate {
    pub chrome: Chrome,
    pub movie: MovieDetailView,
}

#[derive(Template)]
#[template(path = "tv.html")]
pub struct TvTemplate {
    pub chrome: Chrome,
    pub carousel: CarouselView,
    pub shows: Vec<PosterCard>,
    pub page: u32,
    pub prev_page: Option<String>,
    pub next_page: String,
}

#[derive(Template)]
#[template(path = "tv_detail.html")]
pub struct TvDetailTemplate {
    pub chrome: Chrome,
    pub show: TvDetailView,
}

#[derive(Template)]
#[template(path = "season.html")]
pub struct SeasonTemplate {
    pub chrome: Chrome,
    pub season: SeasonView,
}

#[derive(Template)]
#[template(path = "person.html")]
pub struct PersonTemplate {
    pub chrome: Chrome,
    pub person: PersonView,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub chrome: Chrome,
    pub message: String,
}
