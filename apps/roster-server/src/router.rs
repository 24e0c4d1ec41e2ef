use std::mem;

use axum::{
    handler::Handler,
    routing::{delete, get, patch, post},
    Router,
};

use crate::{api, AppState};

/// Collects routes while recording a "METHOD path" index for `/about`.
pub(crate) struct RouterBuilder {
    router: Router<AppState>,
    endpoints: Vec<String>,
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            endpoints: Vec::new(),
        }
    }

    fn record(&mut self, method: &str, path: &'static str) {
        self.endpoints.push(format!("{} {}", method, path));
    }

    pub fn route_get<H, T>(&mut self, path: &'static str, handler: H) -> &mut Self
    where
        H: Handler<T, AppState> + Clone + 'static,
        T: Send + 'static,
    {
        self.record("GET", path);
        let router = mem::take(&mut self.router);
        self.router = router.route(path, get(handler));
        self
    }

    pub fn route_post<H, T>(&mut self, path: &'static str, handler: H) -> &mut Self
    where
        H: Handler<T, AppState> + Clone + 'static,
        T: Send + 'static,
    {
        self.record("POST", path);
        let router = mem::take(&mut self.router);
        self.router = router.route(path, post(handler));
        self
    }

    pub fn route_patch<H, T>(&mut self, path: &'static str, handler: H) -> &mut Self
    where
        H: Handler<T, AppState> + Clone + 'static,
        T: Send + 'static,
    {
        self.record("PATCH", path);
        let router = mem::take(&mut self.router);
        self.router = router.route(path, patch(handler));
        self
    }

    pub fn route_delete<H, T>(&mut self, path: &'static str, handler: H) -> &mut Self
    where
        H: Handler<T, AppState> + Clone + 'static,
        T: Send + 'static,
    {
        self.record("DELETE", path);
        let router = mem::take(&mut self.router);
        self.router = router.route(path, delete(handler));
        self
    }

    pub fn build(self) -> (Router<AppState>, Vec<String>) {
        (self.router, self.endpoints)
    }
}

pub(crate) mod paths {
    pub const HEALTHZ: &str = "/healthz";
    pub const ABOUT: &str = "/about";
    pub const EVENTS: &str = "/events";
    pub const SPEC_OPENAPI: &str = "/spec/openapi.json";
    pub const CLASSES: &str = "/classes";
    pub const CLASSES_DISTRIBUTION: &str = "/classes/distribution";
    pub const PLAYERS: &str = "/players";
    pub const PLAYERS_IMPORT: &str = "/players/import";
    pub const PLAYER_ID: &str = "/players/{id}";
    pub const GROUPS: &str = "/groups";
    pub const GROUP_ID: &str = "/groups/{id}";
    pub const GROUP_MEMBERS: &str = "/groups/{id}/members";
    pub const GROUP_MEMBER_ID: &str = "/groups/{id}/members/{player_id}";
}

pub(crate) fn build_router() -> (Router<AppState>, Vec<String>) {
    let mut builder = RouterBuilder::new();
    builder
        .route_get(paths::HEALTHZ, api::meta::healthz)
        .route_get(paths::ABOUT, api::meta::about)
        .route_get(paths::SPEC_OPENAPI, api::meta::openapi_json)
        .route_get(paths::EVENTS, api::events::events_sse)
        .route_get(paths::CLASSES, api::classes::classes_list)
        .route_get(paths::CLASSES_DISTRIBUTION, api::classes::classes_distribution)
        .route_get(paths::PLAYERS, api::players::players_list)
        .route_post(paths::PLAYERS, api::players::players_create)
        .route_post(paths::PLAYERS_IMPORT, api::players::players_import)
        .route_get(paths::PLAYER_ID, api::players::players_get)
        .route_patch(paths::PLAYER_ID, api::players::players_update)
        .route_delete(paths::PLAYER_ID, api::players::players_delete)
        .route_get(paths::GROUPS, api::groups::groups_list)
        .route_post(paths::GROUPS, api::groups::groups_create)
        .route_get(paths::GROUP_ID, api::groups::groups_get)
        .route_patch(paths::GROUP_ID, api::groups::groups_update)
        .route_delete(paths::GROUP_ID, api::groups::groups_delete)
        .route_post(paths::GROUP_MEMBERS, api::groups::members_add)
        .route_delete(paths::GROUP_MEMBER_ID, api::groups::members_remove);
    builder.build()
}
