//! HTTP handler functions for the RCCE dashboard API.

use actix_web::{HttpResponse, web};
use rcce_activity_models::Page;
use rcce_dashboard::map_features::feature_collection;
use rcce_dashboard::pages::{
    HOME_PARAGRAPHS, HOME_TITLE, INSTRUCTIONS, INSTRUCTIONS_TITLE, catalog,
    options as page_options,
};
use rcce_dashboard::{RenderError, nationwide_chart, render as render_selection};
use rcce_dashboard_models::{RenderResult, Selection};
use rcce_server_models::{
    ApiHealth, ApiHome, ApiInstructions, ApiOptions, ApiPageCatalog, ApiRegion,
    RenderQueryParams,
};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/pages`
///
/// Returns the landing page text, the sidebar instructions, and every
/// dashboard page with its copy and dropdown options.
pub async fn pages(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiPageCatalog {
        home: ApiHome {
            title: HOME_TITLE.to_string(),
            paragraphs: HOME_PARAGRAPHS.iter().map(|p| (*p).to_string()).collect(),
        },
        instructions: ApiInstructions {
            title: INSTRUCTIONS_TITLE.to_string(),
            text: INSTRUCTIONS.to_string(),
        },
        pages: catalog(&state.dataset),
    })
}

/// `GET /api/regions`
pub async fn regions(state: web::Data<AppState>) -> HttpResponse {
    let regions: Vec<ApiRegion> = state.dataset.regions().iter().map(ApiRegion::from).collect();
    HttpResponse::Ok().json(regions)
}

/// `GET /api/options/{page}`
pub async fn options(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let page = match parse_page(&path) {
        Ok(page) => page,
        Err(response) => return response,
    };

    HttpResponse::Ok().json(ApiOptions {
        page,
        options: page_options(&state.dataset, page),
    })
}

/// `GET /api/render/{page}?value=&region=`
///
/// Renders the map and chart for a category page, or the case trend for
/// the cases page.
pub async fn render(
    state: web::Data<AppState>,
    path: web::Path<String>,
    params: web::Query<RenderQueryParams>,
) -> HttpResponse {
    let page = match parse_page(&path) {
        Ok(page) => page,
        Err(response) => return response,
    };

    let selection = Selection::for_page(page, params.value(), params.region());

    match render_selection(&state.dataset, &selection, &state.map) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => render_error(&e),
    }
}

/// `GET /api/map/{page}?value=&region=`
///
/// Returns the filtered map points as a `GeoJSON` `FeatureCollection`.
pub async fn map(
    state: web::Data<AppState>,
    path: web::Path<String>,
    params: web::Query<RenderQueryParams>,
) -> HttpResponse {
    let page = match parse_page(&path) {
        Ok(page) => page,
        Err(response) => return response,
    };

    let Some(column) = page.category_column() else {
        return no_map(page);
    };

    let selection = Selection::Breakdown {
        column,
        value: params.value(),
        region: params.region(),
    };

    match render_selection(&state.dataset, &selection, &state.map) {
        Ok(RenderResult::Breakdown { map, .. }) => {
            HttpResponse::Ok().json(feature_collection(&map))
        }
        Ok(RenderResult::Cases { .. }) => no_map(page),
        Err(e) => render_error(&e),
    }
}

/// `GET /api/nationwide/{page}`
///
/// Chart for the page's column over national campaigns only.
pub async fn nationwide(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let page = match parse_page(&path) {
        Ok(page) => page,
        Err(response) => return response,
    };

    match page.category_column() {
        Some(column) => HttpResponse::Ok().json(nationwide_chart(&state.dataset, column)),
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Page '{page}' has no nationwide breakdown")
        })),
    }
}

fn parse_page(s: &str) -> Result<Page, HttpResponse> {
    s.parse().map_err(|_| {
        log::warn!("Unknown page requested: {s}");
        HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Unknown page: {s}")
        }))
    })
}

fn no_map(page: Page) -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": format!("Page '{page}' has no map")
    }))
}

fn render_error(e: &RenderError) -> HttpResponse {
    match e {
        RenderError::UnknownRegion(_) => {
            log::warn!("Failed to render: {e}");
            HttpResponse::NotFound().json(serde_json::json!({
                "error": e.to_string()
            }))
        }
    }
}
