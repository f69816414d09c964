// Page handlers for HTML rendering with Askama

use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;
use serde::Deserialize;

use crate::api_server::AppState;
use crate::controller::{Notification, SearchController, SearchQuery};
use crate::presenter::ResultsView;

pub const PAGE_TITLE: &str = "PlantVision";

// ============================================================================
// Templates
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub title: String,
    pub query: String,
    pub view: ResultsView,
    pub notification: Option<Notification>,
}

/// Results region only, swapped in by htmx
#[derive(Template)]
#[template(path = "partials/results.html")]
pub struct ResultsTemplate {
    pub view: ResultsView,
    pub notification: Option<Notification>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

// ============================================================================
// Home Page
// ============================================================================

pub async fn home_page() -> HomeTemplate {
    HomeTemplate {
        title: PAGE_TITLE.to_string(),
        query: String::new(),
        view: ResultsView::Unsearched,
        notification: None,
    }
}

// ============================================================================
// Search
// ============================================================================

/// Run one search and render the outcome.
///
/// htmx submissions get the results fragment; plain form posts get the full
/// page. A blank query renders the unsearched view without a lookup.
pub async fn search_page(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Query(params): Query<SearchParams>,
) -> Response {
    let (view, notification) = match SearchQuery::parse(&params.q) {
        Some(query) => {
            let mut controller = SearchController::new(Arc::clone(&state.gateway));
            let notification = controller.submit(query).await;
            (controller.view(), notification)
        }
        None => (ResultsView::Unsearched, None),
    };

    if is_htmx {
        ResultsTemplate { view, notification }.into_response()
    } else {
        HomeTemplate {
            title: PAGE_TITLE.to_string(),
            query: params.q.trim().to_string(),
            view,
            notification,
        }
        .into_response()
    }
}
