//! Server-rendered pages. Each handler fetches what it needs from TMDB and
//! hands the result to a view model and template.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::{debug, error, warn};

mod templates;

use crate::app::AppState;
use crate::tmdb::Movie;
use crate::views::{
    parse_page, Carousel, MovieDetailView, PageCursor, Paginator, PersonView, PosterCard,
    SeasonView, TvDetailView, AUTO_ADVANCE,
};
use templates::{
    CarouselView, Chrome, ErrorTemplate, GridTemplate, HomeTemplate, MovieTemplate,
    PersonTemplate, SeasonTemplate, SectionView, TvDetailTemplate, TvTemplate,
};

const SECTION_PER_PAGE: usize = 8;
const FEATURED_SHOWS: usize = 5;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/popular", get(popular))
        .route("/populer", get(popular))
        .route("/upcoming", get(upcoming))
        .route("/top-rated", get(top_rated))
        .route("/search", get(search))
        .route("/movie/:id", get(movie_detail))
        .route("/tv", get(tv_shows))
        .route("/tv/:id", get(tv_detail))
        .route("/tv/:id/season/:season", get(tv_season))
        .route("/person/:id", get(person_detail))
        .route("/cast/:id", get(person_detail))
}

/// Upstream or rendering failure; shown as the generic error page.
pub struct PageError(anyhow::Error);

impl<E> From<E> for PageError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!("Failed to render page: {:#}", self.0);
        let body = ErrorTemplate {
            chrome: Chrome::new(""),
            message: "Something went wrong while loading this page.".to_string(),
        }
        .render()
        .unwrap_or_else(|_| "Something went wrong while loading this page.".to_string());
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CACHE_CONTROL, "no-store")],
            Html(body),
        )
            .into_response()
    }
}

type PageResult = Result<Html<String>, PageError>;

fn render<T: Template>(template: &T) -> PageResult {
    Ok(Html(template.render()?))
}

/// A page rendered around a swallowed upstream failure must not be cached.
fn with_freshness(page: Html<String>, degraded: bool) -> Response {
    if degraded {
        ([(header::CACHE_CONTROL, "no-store")], page).into_response()
    } else {
        page.into_response()
    }
}

#[derive(Debug, Deserialize)]
struct HomeQuery {
    popular: Option<String>,
    trending: Option<String>,
}

async fn home(State(state): State<AppState>, Query(q): Query<HomeQuery>) -> PageResult {
    let (popular, trending) =
        tokio::try_join!(state.tmdb.popular_movies(), state.tmdb.trending_movies())?;

    let popular_pager = Paginator::new(
        popular.len(),
        SECTION_PER_PAGE,
        parse_page(q.popular.as_deref()) as usize,
    );
    let trending_pager = Paginator::new(
        trending.len(),
        SECTION_PER_PAGE,
        parse_page(q.trending.as_deref()) as usize,
    );
    let sections = vec![
        SectionView::new("Popular Now", &popular, popular_pager, |n| {
            format!("/?popular={}&trending={}", n, trending_pager.current())
        }),
        SectionView::new("Trending This Week", &trending, trending_pager, |n| {
            format!("/?popular={}&trending={}", popular_pager.current(), n)
        }),
    ];

    render(&HomeTemplate {
        chrome: Chrome::new("/"),
        sections,
    })
}

fn movie_grid(
    path: &str,
    heading: &str,
    subheading: &str,
    movies: &[Movie],
    show_stats: bool,
) -> PageResult {
    render(&GridTemplate {
        chrome: Chrome::new(path),
        heading: heading.to_string(),
        subheading: Some(subheading.to_string()),
        cards: movies
            .iter()
            .map(|m| PosterCard::from_movie(m, "w500"))
            .collect(),
        show_stats,
        empty_message: "No movies found.".to_string(),
    })
}

async fn popular(State(state): State<AppState>, uri: Uri) -> PageResult {
    let movies = state.tmdb.popular_movies().await?;
    movie_grid(
        uri.path(),
        "Popular Movies",
        "Discover the most talked-about films right now",
        &movies,
        true,
    )
}

async fn upcoming(State(state): State<AppState>, uri: Uri) -> PageResult {
    let movies = state.tmdb.upcoming_movies().await?;
    movie_grid(
        uri.path(),
        "Upcoming Movies",
        "Coming soon to theaters",
        &movies,
        true,
    )
}

async fn top_rated(State(state): State<AppState>, uri: Uri) -> PageResult {
    let movies = state.tmdb.top_rated_movies().await?;
    movie_grid(
        uri.path(),
        "Top Rated Movies",
        "The highest rated films of all time",
        &movies,
        true,
    )
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    query: Option<String>,
}

async fn search(
    State(state): State<AppState>,
    Query(q): Query<SearchQuery>,
) -> Result<Response, PageError> {
    let query = q.query.as_deref().unwrap_or_default().trim().to_string();

    let mut degraded = false;
    let movies = if query.is_empty() {
        debug!("Empty search query, skipping TMDB");
        Vec::new()
    } else {
        match state.tmdb.search_movies(&query).await {
            Ok(movies) => movies,
            Err(e) => {
                error!("Error fetching movies for '{}': {:#}", query, e);
                degraded = true;
                Vec::new()
            }
        }
    };

    let html = render(&GridTemplate {
        chrome: Chrome::new("/search").with_query(&query),
        heading: format!("Results for: \"{}\"", query),
        subheading: None,
        cards: movies
            .iter()
            .map(|m| PosterCard::from_movie(m, "w500"))
            .collect(),
        show_stats: false,
        empty_message: "No movies found.".to_string(),
    })?;
    Ok(with_freshness(html, degraded))
}

async fn movie_detail(State(state): State<AppState>, Path(id): Path<u64>) -> PageResult {
    let movie = state.tmdb.movie_detail(id).await?;
    render(&MovieTemplate {
        chrome: Chrome::new(&format!("/movie/{}", id)),
        movie: MovieDetailView::new(&movie),
    })
}

#[derive(Debug, Deserialize)]
struct TvQuery {
    page: Option<String>,
    slide: Option<String>,
    /// `next` or `prev`, applied after `slide`.
    step: Option<String>,
    select: Option<String>,
}

fn parse_index(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
}

async fn tv_shows(
    State(state): State<AppState>,
    Query(q): Query<TvQuery>,
) -> Result<Response, PageError> {
    let cursor = PageCursor::new(parse_page(q.page.as_deref()));
    let (trending, shows) = tokio::join!(
        state.tmdb.trending_tv_shows(),
        state.tmdb.tv_shows(cursor.page())
    );
    let trending = trending?;
    // The list degrades to empty on its own; the carousel does not.
    let (shows, degraded) = match shows {
        Ok(shows) => (shows, false),
        Err(e) => {
            warn!("Failed to load TV shows (page {}): {:#}", cursor.page(), e);
            (Vec::new(), true)
        }
    };

    let featured = &trending[..trending.len().min(FEATURED_SHOWS)];
    let mut carousel =
        Carousel::starting_at(featured.len(), parse_index(q.slide.as_deref()).unwrap_or(0));
    match q.step.as_deref() {
        Some("next") => carousel.next(),
        Some("prev") => carousel.prev(),
        _ => {}
    }
    if let Some(index) = parse_index(q.select.as_deref()) {
        carousel.select(index);
    }
    let page = cursor.page();
    let carousel = CarouselView::new(featured, carousel, AUTO_ADVANCE.as_millis(), |query| {
        format!("/tv?page={}&{}", page, query)
    });

    let html = render(&TvTemplate {
        chrome: Chrome::new("/tv"),
        carousel,
        shows: shows
            .iter()
            .map(|s| PosterCard::from_show(s, "w500"))
            .collect(),
        page,
        prev_page: cursor
            .has_prev()
            .then(|| format!("/tv?page={}", cursor.prev())),
        next_page: format!("/tv?page={}", cursor.next()),
    })?;
    Ok(with_freshness(html, degraded))
}

async fn tv_detail(State(state): State<AppState>, Path(id): Path<u64>) -> PageResult {
    let show = state.tmdb.tv_show_detail(id).await?;
    render(&TvDetailTemplate {
        chrome: Chrome::new(&format!("/tv/{}", id)),
        show: TvDetailView::new(&show),
    })
}

async fn tv_season(
    State(state): State<AppState>,
    Path((id, season)): Path<(u64, u32)>,
) -> PageResult {
    let detail = state.tmdb.tv_season(id, season).await?;
    render(&SeasonTemplate {
        chrome: Chrome::new(&format!("/tv/{}", id)),
        season: SeasonView::new(id, &detail),
    })
}

async fn person_detail(State(state): State<AppState>, Path(id): Path<u64>) -> PageResult {
    let (person, localized, credits) = tokio::try_join!(
        state.tmdb.person_detail(id, None),
        state
            .tmdb
            .person_detail(id, Some(state.secondary_language.as_str())),
        state.tmdb.person_movie_credits(id),
    )?;
    render(&PersonTemplate {
        chrome: Chrome::new(&format!("/person/{}", id)),
        person: PersonView::new(&person, &localized, credits),
    })
}
