//! Index page listing every known city.

use askama::Template;
use axum::extract::State;
use axum::response::Html;
use innkeeper_db::models::city::City;
use innkeeper_db::repositories::CityRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// `templates/index.html`; city names and codes are HTML-escaped.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub cities: &'a [City],
}

/// GET /
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let cities = CityRepo::list(&state.pool).await?;
    let page = IndexTemplate { cities: &cities }.render()?;
    Ok(Html(page))
}
