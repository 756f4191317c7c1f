//! HTTP server for the BantConfirm API.
//!
//! # API Endpoints
//!
//! | Method | Path                                | Description                      |
//! |--------|-------------------------------------|----------------------------------|
//! | GET    | `/health`                           | Health check                     |
//! | GET    | `/api/settings`                     | Site settings                    |
//! | GET    | `/api/products?category&q&limit`    | Catalog query                    |
//! | GET    | `/api/products/{slug}`              | Product with related items       |
//! | GET    | `/api/categories`                   | Catalog category tabs            |
//! | GET    | `/api/blogs`                        | Blog posts                       |
//! | GET    | `/api/vendor-logos`                 | Logo marquee                     |
//! | POST   | `/api/leads`                        | Lead wizard submission           |
//! | POST   | `/api/vendors/register`             | Supplier application             |
//! | POST   | `/api/consult`                      | AI consultancy                   |
//! | POST   | `/api/auth/{signup,login,...}`      | Accounts                         |
//! | GET    | `/api/events`                       | SSE stream of store changes      |
//! | *      | `/api/admin/...`                    | Back-office, admin token needed  |

use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{DefaultBodyLimit, FromRequestParts, Path, Query, State},
    http::{header, request::Parts, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{delete, get, patch, post, put},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use super::events::change_stream;
use super::types::{
    ApiError, ApiJson, CategoryRequest, ConsultRequest, ConsultResponse, ProductDetail,
};
use crate::ai::ScoringClient;
use crate::auth::{Accounts, Credentials, Session, SignupForm};
use crate::config::AppConfig;
use crate::error::ServerError;
use crate::intake::{self, LeadDraft, Submission};
use crate::marketplace::{
    BlogDraft, LeadPatch, LogoDraft, Marketplace, Overview, ProductDraft, ProductQuery,
    VendorDraft, VendorRegistration,
};
use crate::models::{BlogPost, Lead, Product, SiteSettings, Vendor, VendorLogo};
use crate::store::JsonStore;

/// Everything a handler needs
pub struct AppState {
    pub market: Marketplace,
    pub scorer: ScoringClient,
    pub accounts: Accounts,
}

pub type SharedState = Arc<AppState>;

/// Request body cap. Images travel inline as data URLs, a third larger
/// than the file, and a product save can carry several of them.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

type ApiResult<T> = Result<Json<T>, ApiError>;

impl AppState {
    pub fn new(store: Arc<JsonStore>, config: &AppConfig) -> Self {
        Self {
            market: Marketplace::new(store.clone()),
            scorer: ScoringClient::new(config.scoring.clone()),
            accounts: Accounts::new(store, config.admin.clone(), config.demo_admin_bypass),
        }
    }
}

/// Token from an `Authorization: Bearer <token>` header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Extractor that admits only admin sessions
pub struct AdminSession(pub Session);

impl FromRequestParts<SharedState> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)
            .ok_or_else(|| ApiError::new(StatusCode::UNAUTHORIZED, "Authentication required"))?;
        Ok(Self(state.accounts.require_admin(token)?))
    }
}

/// Build the application router
pub fn router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_TYPE, header::CONTENT_DISPOSITION]);

    let admin = Router::new()
        .route("/overview", get(overview))
        .route("/leads", get(list_leads))
        .route("/leads/export", get(export_leads))
        .route("/leads/{id}", patch(update_lead).delete(delete_lead))
        .route("/products", post(save_product))
        .route("/products/{id}", delete(delete_product))
        .route("/vendors", get(list_vendors).post(save_vendor))
        .route("/vendors/{id}", delete(delete_vendor))
        .route("/blogs", post(save_blog))
        .route("/blogs/{id}", delete(delete_blog))
        .route("/vendor-logos", post(save_logo))
        .route("/vendor-logos/{id}", delete(delete_logo))
        .route("/categories", post(add_category))
        .route("/categories/{name}", delete(remove_category))
        .route("/settings", put(update_settings));

    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/api/settings", get(settings))
        .route("/api/products", get(products))
        .route("/api/products/{slug}", get(product_detail))
        .route("/api/categories", get(categories))
        .route("/api/blogs", get(blogs))
        .route("/api/vendor-logos", get(logos))
        .route("/api/leads", post(submit_lead))
        .route("/api/vendors/register", post(register_vendor))
        .route("/api/consult", post(consult))
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/admin-login", post(admin_login))
        .route("/api/auth/demo-admin", post(demo_admin))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/session", get(current_session))
        .route("/api/events", get(events))
        .nest("/api/admin", admin)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server and run until Ctrl-C
pub async fn start_server(config: AppConfig) -> Result<(), ServerError> {
    let store = Arc::new(JsonStore::open(&config.data_dir)?);
    let state = Arc::new(AppState::new(store, &config));
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(
        port = config.port,
        data_dir = %config.data_dir.display(),
        model = %config.scoring.model,
        scoring = config.scoring.api_key.is_some(),
        "BantConfirm server listening on http://localhost:{}",
        config.port
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}

// =============================================================================
// Public handlers
// =============================================================================

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "bantconfirm",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn settings(State(state): State<SharedState>) -> ApiResult<SiteSettings> {
    Ok(Json(state.market.settings()?))
}

async fn products(
    State(state): State<SharedState>,
    Query(query): Query<ProductQuery>,
) -> ApiResult<Vec<Product>> {
    Ok(Json(state.market.query_products(&query)?))
}

async fn product_detail(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> ApiResult<ProductDetail> {
    let product = state.market.product_by_slug(&slug)?;
    let related = state.market.related_products(&product)?;
    Ok(Json(ProductDetail { product, related }))
}

async fn categories(State(state): State<SharedState>) -> ApiResult<Vec<String>> {
    Ok(Json(state.market.catalog_categories()?))
}

async fn blogs(State(state): State<SharedState>) -> ApiResult<Vec<BlogPost>> {
    Ok(Json(state.market.list_blogs()?))
}

async fn logos(State(state): State<SharedState>) -> ApiResult<Vec<VendorLogo>> {
    Ok(Json(state.market.list_logos()?))
}

async fn submit_lead(
    State(state): State<SharedState>,
    ApiJson(draft): ApiJson<LeadDraft>,
) -> ApiResult<Submission> {
    Ok(Json(intake::submit(&state.market, &state.scorer, draft).await?))
}

async fn register_vendor(
    State(state): State<SharedState>,
    ApiJson(form): ApiJson<VendorRegistration>,
) -> ApiResult<Vendor> {
    Ok(Json(state.market.register_vendor(form)?))
}

async fn consult(
    State(state): State<SharedState>,
    ApiJson(request): ApiJson<ConsultRequest>,
) -> ApiResult<ConsultResponse> {
    if request.query.trim().is_empty() {
        return Err(ApiError::bad_request("Query must not be empty"));
    }
    let answer = state.scorer.consult(&request.query).await;
    Ok(Json(ConsultResponse { answer }))
}

async fn events(State(state): State<SharedState>) -> impl IntoResponse {
    change_stream(state.market.store().subscribe())
}

// =============================================================================
// Account handlers
// =============================================================================

async fn signup(
    State(state): State<SharedState>,
    ApiJson(form): ApiJson<SignupForm>,
) -> ApiResult<Session> {
    Ok(Json(state.accounts.signup(form)?))
}

async fn login(
    State(state): State<SharedState>,
    ApiJson(credentials): ApiJson<Credentials>,
) -> ApiResult<Session> {
    Ok(Json(state.accounts.login(&credentials.email, &credentials.password)?))
}

async fn admin_login(
    State(state): State<SharedState>,
    ApiJson(credentials): ApiJson<Credentials>,
) -> ApiResult<Session> {
    Ok(Json(
        state
            .accounts
            .admin_login(&credentials.email, &credentials.password)?,
    ))
}

async fn demo_admin(State(state): State<SharedState>) -> ApiResult<Session> {
    Ok(Json(state.accounts.demo_admin()?))
}

async fn logout(State(state): State<SharedState>, headers: HeaderMap) -> ApiResult<Value> {
    let removed = match bearer_token(&headers) {
        Some(token) => state.accounts.logout(token)?,
        None => false,
    };
    Ok(Json(json!({ "status": "ok", "removed": removed })))
}

async fn current_session(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> ApiResult<Session> {
    let token = bearer_token(&headers)
        .ok_or_else(|| ApiError::new(StatusCode::UNAUTHORIZED, "Authentication required"))?;
    Ok(Json(state.accounts.session(token)?))
}

// =============================================================================
// Admin handlers
// =============================================================================

async fn overview(_: AdminSession, State(state): State<SharedState>) -> ApiResult<Overview> {
    Ok(Json(state.market.overview()?))
}

async fn list_leads(_: AdminSession, State(state): State<SharedState>) -> ApiResult<Vec<Lead>> {
    Ok(Json(state.market.list_leads()?))
}

async fn export_leads(
    _: AdminSession,
    State(state): State<SharedState>,
) -> Result<Response, ApiError> {
    let export = state.market.export_leads()?;
    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        export.file_name
    ))
    .map_err(|e| ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("text/csv;charset=utf-8")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.csv,
    )
        .into_response())
}

async fn update_lead(
    _: AdminSession,
    State(state): State<SharedState>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<LeadPatch>,
) -> ApiResult<Lead> {
    Ok(Json(state.market.update_lead(&id, patch)?))
}

async fn delete_lead(
    _: AdminSession,
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Lead> {
    Ok(Json(state.market.delete_lead(&id)?))
}

async fn save_product(
    _: AdminSession,
    State(state): State<SharedState>,
    ApiJson(draft): ApiJson<ProductDraft>,
) -> ApiResult<Product> {
    Ok(Json(state.market.save_product(draft)?))
}

async fn delete_product(
    _: AdminSession,
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Product> {
    Ok(Json(state.market.delete_product(&id)?))
}

async fn list_vendors(
    _: AdminSession,
    State(state): State<SharedState>,
) -> ApiResult<Vec<Vendor>> {
    Ok(Json(state.market.list_vendors()?))
}

async fn save_vendor(
    _: AdminSession,
    State(state): State<SharedState>,
    ApiJson(draft): ApiJson<VendorDraft>,
) -> ApiResult<Vendor> {
    Ok(Json(state.market.save_vendor(draft)?))
}

async fn delete_vendor(
    _: AdminSession,
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Vendor> {
    Ok(Json(state.market.delete_vendor(&id)?))
}

async fn save_blog(
    _: AdminSession,
    State(state): State<SharedState>,
    ApiJson(draft): ApiJson<BlogDraft>,
) -> ApiResult<BlogPost> {
    Ok(Json(state.market.save_blog(draft)?))
}

async fn delete_blog(
    _: AdminSession,
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<BlogPost> {
    Ok(Json(state.market.delete_blog(&id)?))
}

async fn save_logo(
    _: AdminSession,
    State(state): State<SharedState>,
    ApiJson(draft): ApiJson<LogoDraft>,
) -> ApiResult<VendorLogo> {
    Ok(Json(state.market.save_logo(draft)?))
}

async fn delete_logo(
    _: AdminSession,
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<VendorLogo> {
    Ok(Json(state.market.delete_logo(&id)?))
}

async fn add_category(
    _: AdminSession,
    State(state): State<SharedState>,
    ApiJson(request): ApiJson<CategoryRequest>,
) -> ApiResult<Vec<String>> {
    Ok(Json(state.market.add_category(&request.name)?))
}

async fn remove_category(
    _: AdminSession,
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> ApiResult<Vec<String>> {
    Ok(Json(state.market.remove_category(&name)?))
}

async fn update_settings(
    _: AdminSession,
    State(state): State<SharedState>,
    ApiJson(settings): ApiJson<SiteSettings>,
) -> ApiResult<SiteSettings> {
    Ok(Json(state.market.update_settings(settings)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AdminCredentials, ScoringConfig};
    use tempfile::TempDir;

    fn state() -> (TempDir, SharedState) {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            port: 0,
            data_dir: dir.path().to_path_buf(),
            scoring: ScoringConfig {
                api_key: Some("test-key".into()),
                endpoint: "http://127.0.0.1:9".into(),
                ..Default::default()
            },
            admin: Some(AdminCredentials {
                email: "admin@bantconfirm.com".into(),
                password: "s3cret".into(),
            }),
            demo_admin_bypass: false,
        };
        let store = Arc::new(JsonStore::open(dir.path()).unwrap());
        (dir, Arc::new(AppState::new(store, &config)))
    }

    fn admin(state: &SharedState) -> AdminSession {
        AdminSession(
            state
                .accounts
                .admin_login("admin@bantconfirm.com", "s3cret")
                .unwrap(),
        )
    }

    #[test]
    fn test_bearer_token_parsing() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc123"));
        assert_eq!(bearer_token(&headers), Some("abc123"));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc123"));
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_router_builds() {
        let (_dir, state) = state();
        let _ = router(state);
    }

    #[tokio::test]
    async fn test_health() {
        let Json(body) = health().await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "bantconfirm");
    }

    #[tokio::test]
    async fn test_unknown_product_is_404() {
        let (_dir, state) = state();
        let err = product_detail(State(state), Path("nope".into())).await.unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_lead_submission_survives_scoring_failure() {
        let (_dir, state) = state();
        let draft = LeadDraft {
            name: "Rahul Sharma".into(),
            email: "rahul@company.in".into(),
            mobile: "9876543210".into(),
            need: "Office Wi-Fi for 50 seats".into(),
            ..Default::default()
        };

        let Json(submission) = submit_lead(State(state.clone()), ApiJson(draft)).await.unwrap();
        assert_eq!(submission.lead.intent_score, Some(50));

        let Json(leads) = list_leads(admin(&state), State(state.clone())).await.unwrap();
        assert_eq!(leads.len(), 1);
    }

    #[tokio::test]
    async fn test_incomplete_lead_is_400() {
        let (_dir, state) = state();
        let err = submit_lead(State(state), ApiJson(LeadDraft::default()))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_empty_export_is_422() {
        let (_dir, state) = state();
        let session = admin(&state);
        let err = match export_leads(session, State(state)).await {
            Err(e) => e,
            Ok(_) => panic!("export of an empty pipeline should fail"),
        };
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message, "No leads to download");
    }

    #[tokio::test]
    async fn test_category_handlers() {
        let (_dir, state) = state();
        let Json(after) = add_category(
            admin(&state),
            State(state.clone()),
            ApiJson(CategoryRequest { name: "Cloud".into() }),
        )
        .await
        .unwrap();
        assert!(after.contains(&"Cloud".to_string()));

        let Json(tabs) = categories(State(state)).await.unwrap();
        assert_eq!(tabs.first().map(String::as_str), Some("All Solutions"));
    }

    #[tokio::test]
    async fn test_demo_admin_disabled_is_403() {
        let (_dir, state) = state();
        let err = demo_admin(State(state)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }

    // -------------------------------------------------------------------------
    // Through the router over a loopback listener
    // -------------------------------------------------------------------------

    async fn serve(state: SharedState) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router(state)).await });
        format!("http://{}", addr)
    }

    async fn admin_token(client: &reqwest::Client, base: &str) -> String {
        let session: Value = client
            .post(format!("{}/api/auth/admin-login", base))
            .json(&json!({ "email": "admin@bantconfirm.com", "password": "s3cret" }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        session["token"].as_str().unwrap().to_string()
    }

    fn data_url(encoded_len: usize) -> String {
        format!("data:image/png;base64,{}", "A".repeat(encoded_len))
    }

    #[tokio::test]
    async fn test_admin_route_without_token_is_json_401() {
        let (_dir, state) = state();
        let base = serve(state).await;

        let response = reqwest::get(format!("{}/api/admin/overview", base)).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "status": "error", "error": "Authentication required" }));
    }

    #[tokio::test]
    async fn test_public_lead_submission_over_http() {
        let (_dir, state) = state();
        let base = serve(state.clone()).await;

        let response = reqwest::Client::new()
            .post(format!("{}/api/leads", base))
            .json(&json!({
                "name": "Rahul Sharma",
                "email": "rahul@company.in",
                "mobile": "9876543210",
                "need": "Office Wi-Fi for 50 seats",
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["lead"]["intentScore"], 50);
        assert_eq!(body["lead"]["companyName"], "Individual / MSME");
        assert_eq!(state.market.list_leads().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_error() {
        let (_dir, state) = state();
        let base = serve(state).await;

        let response = reqwest::Client::new()
            .post(format!("{}/api/leads", base))
            .header(header::CONTENT_TYPE, "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap();
        assert!(response.status().is_client_error());
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["status"], "error");
    }

    #[tokio::test]
    async fn test_admin_saves_logo_uploaded_as_data_url() {
        let (_dir, state) = state();
        let base = serve(state.clone()).await;
        let client = reqwest::Client::new();
        let token = admin_token(&client, &base).await;

        // A 2 MB upload, base64 encoded
        let image = data_url(2_800_000);
        let response = client
            .post(format!("{}/api/admin/vendor-logos", base))
            .bearer_auth(&token)
            .json(&json!({ "name": "Airtel", "image": image }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let logos = state.market.list_logos().unwrap();
        assert_eq!(logos.len(), 1);
        assert_eq!(logos[0].image.len(), image.len());
    }

    #[tokio::test]
    async fn test_oversized_body_is_json_413() {
        let (_dir, state) = state();
        let base = serve(state).await;
        let client = reqwest::Client::new();
        let token = admin_token(&client, &base).await;

        let response = client
            .post(format!("{}/api/admin/vendor-logos", base))
            .bearer_auth(&token)
            .json(&json!({ "name": "Huge", "image": data_url(MAX_BODY_BYTES + 1024) }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::PAYLOAD_TOO_LARGE);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "status": "error", "error": "Request body is too large" }));
    }
}
