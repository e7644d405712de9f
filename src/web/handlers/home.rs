//! Home page: submission form and recent links.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::domain::entities::Link;
use crate::error::AppError;
use crate::state::AppState;

/// Number of links listed under the form.
const RECENT_LINKS: u32 = 10;

/// Outcome message shown above the form.
pub struct Notice {
    pub kind: &'static str,
    pub text: String,
    pub short_url: Option<String>,
}

impl Notice {
    fn success(short_url: String) -> Self {
        Self {
            kind: "success",
            text: "Success! Short URL:".to_string(),
            short_url: Some(short_url),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: "error",
            text: text.into(),
            short_url: None,
        }
    }
}

/// One row of the recent links table.
pub struct RecentLink {
    pub code: String,
    pub short_url: String,
    pub long_url: String,
    pub created_at: String,
    pub clicks: i64,
}

impl RecentLink {
    fn new(state: &AppState, link: Link) -> Self {
        Self {
            short_url: state.short_url(&link.code),
            created_at: link.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            code: link.code,
            long_url: link.long_url,
            clicks: link.clicks,
        }
    }
}

/// Template for the home page.
///
/// Renders `templates/index.html` with:
/// - Optional outcome notice
/// - Submission form (long URL + optional custom code)
/// - The ten most recent links
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub notice: Option<Notice>,
    pub recent: Vec<RecentLink>,
}

/// Form fields posted by the submission form.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub long_url: String,
    #[serde(default)]
    pub custom_code: Option<String>,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    render(&state, StatusCode::OK, None).await
}

/// Handles a form submission and re-renders the page with the outcome.
///
/// # Endpoint
///
/// `POST /`
///
/// # Response Codes
///
/// - **201 Created**: link stored, notice carries the short URL
/// - **400 / 409**: invalid input or taken code, notice carries the reason
pub async fn submit_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Result<Response, AppError> {
    if form.long_url.trim().is_empty() {
        let notice = Notice::error("Please enter a URL.");
        return render(&state, StatusCode::BAD_REQUEST, Some(notice)).await;
    }

    let result = state
        .link_service
        .shorten(&form.long_url, form.custom_code.as_deref())
        .await;

    let (status, notice) = match result {
        Ok(link) => (StatusCode::CREATED, Notice::success(state.short_url(&link.code))),
        Err(e) => {
            let err = AppError::from(e);
            if err.status().is_server_error() {
                return Err(err);
            }
            (err.status(), Notice::error(err.message()))
        }
    };

    render(&state, status, Some(notice)).await
}

/// Home page with a "not found" notice, for unknown short codes opened in a browser.
pub async fn not_found_page(state: &AppState) -> Result<Response, AppError> {
    let notice = Notice::error("Short code not found.");
    render(state, StatusCode::NOT_FOUND, Some(notice)).await
}

async fn render(
    state: &AppState,
    status: StatusCode,
    notice: Option<Notice>,
) -> Result<Response, AppError> {
    let recent = state
        .link_service
        .recent(RECENT_LINKS)
        .await?
        .into_iter()
        .map(|link| RecentLink::new(state, link))
        .collect();

    Ok((status, HomeTemplate { notice, recent }).into_response())
}
