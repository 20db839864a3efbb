//! Axum route handlers for the profile page.

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{Html, IntoResponse, Response},
};
use chrono::Local;
use tracing::info;

use crate::config::{RenderStrategy, HANDLE_ENV};
use crate::render::{full_page, loading_shell, render_view, SiteLinks, View};
use crate::state::AppState;

async fn load_view(state: &AppState) -> View {
    let profile = state.source.fetch_profile().await;
    let site = SiteLinks {
        api_base: &state.config.api_base,
        handle: state.config.handle.as_deref(),
    };
    render_view(profile.as_ref(), site, HANDLE_ENV, Local::now())
}

/// Cache hint for a rendered profile. Revalidation itself is the hosting
/// platform's job; an unavailable profile is never cached. In on-load mode the
/// profile is fetched on every visit, so shared caches must revalidate too.
fn cache_control(view: &View, strategy: RenderStrategy, revalidate_seconds: u64) -> HeaderValue {
    if !view.available {
        return HeaderValue::from_static("no-store");
    }
    match strategy {
        RenderStrategy::OnLoad => HeaderValue::from_static("no-cache"),
        RenderStrategy::PreRender => HeaderValue::from_str(&format!(
            "public, s-maxage={revalidate_seconds}, stale-while-revalidate"
        ))
        .unwrap_or_else(|_| HeaderValue::from_static("no-cache")),
    }
}

/// GET /
///
/// `pre-render`: fetches and renders the whole page in this request.
/// `on-load`: returns the loading shell, which then calls `/fragment`.
pub async fn handle_index(State(state): State<AppState>) -> Response {
    match state.config.render_strategy {
        RenderStrategy::PreRender => {
            let view = load_view(&state).await;
            info!(available = view.available, "Rendered profile page");
            let cache = cache_control(
                &view,
                state.config.render_strategy,
                state.config.revalidate_seconds,
            );
            ([(header::CACHE_CONTROL, cache)], Html(full_page(&view))).into_response()
        }
        RenderStrategy::OnLoad => (
            [(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"))],
            Html(loading_shell(HANDLE_ENV)),
        )
            .into_response(),
    }
}

/// GET /fragment
///
/// The rendered profile (or error panel) without the page shell.
pub async fn handle_fragment(State(state): State<AppState>) -> Response {
    let view = load_view(&state).await;
    info!(available = view.available, "Rendered profile fragment");
    let cache = cache_control(
        &view,
        state.config.render_strategy,
        state.config.revalidate_seconds,
    );
    ([(header::CACHE_CONTROL, cache)], Html(view.body)).into_response()
}
