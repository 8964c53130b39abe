use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;

use crate::catalog::{Catalog, SongDocument};
use crate::recommend;
use crate::theme::{UserPreferences, ALL_THEMES};

#[derive(Clone)]
pub struct AppState {
    catalog: Arc<RwLock<Catalog>>,
    catalog_path: Arc<String>,
    top_n: usize,
}

impl AppState {
    pub fn new(catalog: Catalog, catalog_path: String, top_n: usize) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            catalog_path: Arc::new(catalog_path),
            top_n,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/recommend", post(recommend_songs))
        .route("/debug/themes", get(debug_themes))
        .route("/admin/reload-catalog", get(admin_reload_catalog))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// Wire shape of the original request: a flat map of theme name -> selected.
#[derive(serde::Deserialize)]
struct RecommendReq {
    #[serde(default)]
    themes: HashMap<String, bool>,
}

async fn recommend_songs(
    State(state): State<AppState>,
    Json(body): Json<RecommendReq>,
) -> Json<Vec<SongDocument>> {
    // Fresh fact base per request; the catalog snapshot is shared read-only.
    let mut facts = UserPreferences::from_flags(&body.themes);
    let songs = {
        let catalog = state.catalog.read().expect("rwlock poisoned");
        recommend::recommend(&catalog, &mut facts, state.top_n)
    };
    Json(songs)
}

#[derive(serde::Serialize)]
struct ThemesResp {
    themes: Vec<&'static str>,
}

async fn debug_themes() -> Json<ThemesResp> {
    Json(ThemesResp {
        themes: ALL_THEMES.iter().map(|t| t.name()).collect(),
    })
}

async fn admin_reload_catalog(State(state): State<AppState>) -> String {
    let fresh = Catalog::load_from_file(state.catalog_path.as_str());
    let n = fresh.len();
    match state.catalog.write() {
        Ok(mut c) => {
            *c = fresh;
            format!("reloaded: {n} songs")
        }
        Err(_) => "failed: lock poisoned".to_string(),
    }
}
