//! HTTP client for the bantconfirm backend.
//!
//! Every call goes through [`send`], which attaches the bearer token when
//! one is given and turns `{"status":"error","error":...}` bodies into
//! [`AppError::Api`].

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::types::*;
use crate::BACKEND_URL;

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct ConsultRequest<'a> {
    query: &'a str,
}

#[derive(Deserialize)]
struct ConsultResponse {
    answer: String,
}

#[derive(Serialize)]
struct CategoryRequest<'a> {
    name: &'a str,
}

fn url(path: &str) -> String {
    format!("{}{}", BACKEND_URL, path)
}

fn with_token(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn check(response: Response) -> AppResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("Server error ({})", status),
    };
    Err(AppError::Api { status, message })
}

async fn send(request: Request) -> AppResult<Response> {
    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;
    check(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to parse response: {}", e)))
}

async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> AppResult<T> {
    let request = with_token(Request::get(&url(path)), token)
        .build()
        .map_err(|e| AppError::Network(e.to_string()))?;
    decode(send(request).await?).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> AppResult<T> {
    let request = with_token(Request::post(&url(path)), token)
        .json(body)
        .map_err(|e| AppError::Network(e.to_string()))?;
    decode(send(request).await?).await
}

async fn delete_json<T: DeserializeOwned>(path: &str, token: &str) -> AppResult<T> {
    let request = with_token(Request::delete(&url(path)), Some(token))
        .build()
        .map_err(|e| AppError::Network(e.to_string()))?;
    decode(send(request).await?).await
}

fn encode(segment: &str) -> String {
    String::from(js_sys::encode_uri_component(segment))
}

// =============================================================================
// Public catalog
// =============================================================================

pub async fn fetch_settings() -> AppResult<SiteSettings> {
    get_json("/api/settings", None).await
}

pub async fn fetch_products(query: &ProductQuery) -> AppResult<Vec<Product>> {
    let mut params: Vec<(&str, String)> = Vec::new();
    if let Some(category) = &query.category {
        params.push(("category", category.clone()));
    }
    if let Some(search) = query.search.as_ref().filter(|s| !s.trim().is_empty()) {
        params.push(("q", search.clone()));
    }
    if let Some(limit) = query.limit {
        params.push(("limit", limit.to_string()));
    }

    let request = Request::get(&url("/api/products"))
        .query(params.iter().map(|(k, v)| (*k, v.as_str())))
        .build()
        .map_err(|e| AppError::Network(e.to_string()))?;
    decode(send(request).await?).await
}

pub async fn fetch_product(slug: &str) -> AppResult<ProductDetail> {
    get_json(&format!("/api/products/{}", encode(slug)), None).await
}

pub async fn fetch_categories() -> AppResult<Vec<String>> {
    get_json("/api/categories", None).await
}

pub async fn fetch_blogs() -> AppResult<Vec<BlogPost>> {
    get_json("/api/blogs", None).await
}

pub async fn fetch_logos() -> AppResult<Vec<VendorLogo>> {
    get_json("/api/vendor-logos", None).await
}

// =============================================================================
// Public forms
// =============================================================================

pub async fn submit_lead(draft: &LeadDraft) -> AppResult<Submission> {
    post_json("/api/leads", draft, None).await
}

pub async fn register_vendor(form: &VendorRegistration) -> AppResult<Vendor> {
    post_json("/api/vendors/register", form, None).await
}

pub async fn consult(query: &str) -> AppResult<String> {
    let response: ConsultResponse = post_json("/api/consult", &ConsultRequest { query }, None).await?;
    Ok(response.answer)
}

// =============================================================================
// Accounts
// =============================================================================

pub async fn signup(form: &SignupForm) -> AppResult<Session> {
    post_json("/api/auth/signup", form, None).await
}

pub async fn login(credentials: &Credentials) -> AppResult<Session> {
    post_json("/api/auth/login", credentials, None).await
}

pub async fn admin_login(credentials: &Credentials) -> AppResult<Session> {
    post_json("/api/auth/admin-login", credentials, None).await
}

pub async fn demo_admin() -> AppResult<Session> {
    post_json("/api/auth/demo-admin", &serde_json::json!({}), None).await
}

pub async fn logout(token: &str) -> AppResult<()> {
    let _: serde_json::Value = post_json("/api/auth/logout", &serde_json::json!({}), Some(token)).await?;
    Ok(())
}

pub async fn fetch_session(token: &str) -> AppResult<Session> {
    get_json("/api/auth/session", Some(token)).await
}

// =============================================================================
// Admin
// =============================================================================

pub async fn fetch_overview(token: &str) -> AppResult<Overview> {
    get_json("/api/admin/overview", Some(token)).await
}

pub async fn fetch_leads(token: &str) -> AppResult<Vec<Lead>> {
    get_json("/api/admin/leads", Some(token)).await
}

pub async fn update_lead(token: &str, id: &str, patch: &LeadPatch) -> AppResult<Lead> {
    let request = with_token(
        Request::patch(&url(&format!("/api/admin/leads/{}", encode(id)))),
        Some(token),
    )
    .json(patch)
    .map_err(|e| AppError::Network(e.to_string()))?;
    decode(send(request).await?).await
}

pub async fn delete_lead(token: &str, id: &str) -> AppResult<Lead> {
    delete_json(&format!("/api/admin/leads/{}", encode(id)), token).await
}

/// Download the CSV export: file name from `Content-Disposition` and body.
pub async fn export_leads(token: &str) -> AppResult<(String, String)> {
    let request = with_token(Request::get(&url("/api/admin/leads/export")), Some(token))
        .build()
        .map_err(|e| AppError::Network(e.to_string()))?;
    let response = send(request).await?;

    let file_name = response
        .headers()
        .get("content-disposition")
        .and_then(|value| attachment_name(&value))
        .unwrap_or_else(|| format!("leads_export_{}.csv", chrono::Utc::now().timestamp_millis()));
    let csv = response
        .text()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;
    Ok((file_name, csv))
}

/// File name from an `attachment; filename="..."` header value.
pub fn attachment_name(disposition: &str) -> Option<String> {
    let (_, rest) = disposition.split_once("filename=")?;
    let name = rest.trim().trim_matches('"');
    (!name.is_empty()).then(|| name.to_string())
}

pub async fn save_product(token: &str, draft: &ProductDraft) -> AppResult<Product> {
    post_json("/api/admin/products", draft, Some(token)).await
}

pub async fn delete_product(token: &str, id: &str) -> AppResult<Product> {
    delete_json(&format!("/api/admin/products/{}", encode(id)), token).await
}

pub async fn fetch_vendors(token: &str) -> AppResult<Vec<Vendor>> {
    get_json("/api/admin/vendors", Some(token)).await
}

pub async fn save_vendor(token: &str, draft: &VendorDraft) -> AppResult<Vendor> {
    post_json("/api/admin/vendors", draft, Some(token)).await
}

pub async fn delete_vendor(token: &str, id: &str) -> AppResult<Vendor> {
    delete_json(&format!("/api/admin/vendors/{}", encode(id)), token).await
}

pub async fn save_blog(token: &str, draft: &BlogDraft) -> AppResult<BlogPost> {
    post_json("/api/admin/blogs", draft, Some(token)).await
}

pub async fn delete_blog(token: &str, id: &str) -> AppResult<BlogPost> {
    delete_json(&format!("/api/admin/blogs/{}", encode(id)), token).await
}

pub async fn save_logo(token: &str, draft: &LogoDraft) -> AppResult<VendorLogo> {
    post_json("/api/admin/vendor-logos", draft, Some(token)).await
}

pub async fn delete_logo(token: &str, id: &str) -> AppResult<VendorLogo> {
    delete_json(&format!("/api/admin/vendor-logos/{}", encode(id)), token).await
}

pub async fn add_category(token: &str, name: &str) -> AppResult<Vec<String>> {
    post_json("/api/admin/categories", &CategoryRequest { name }, Some(token)).await
}

pub async fn remove_category(token: &str, name: &str) -> AppResult<Vec<String>> {
    delete_json(&format!("/api/admin/categories/{}", encode(name)), token).await
}

pub async fn update_settings(token: &str, settings: &SiteSettings) -> AppResult<SiteSettings> {
    let request = with_token(Request::put(&url("/api/admin/settings")), Some(token))
        .json(settings)
        .map_err(|e| AppError::Network(e.to_string()))?;
    decode(send(request).await?).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_name() {
        assert_eq!(
            attachment_name(r#"attachment; filename="leads_export_1700000000000.csv""#),
            Some("leads_export_1700000000000.csv".to_string())
        );
        assert_eq!(attachment_name("attachment"), None);
        assert_eq!(attachment_name(r#"attachment; filename="""#), None);
    }

    #[test]
    fn test_error_body_deserialization() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"status":"error","error":"No leads to download"}"#).unwrap();
        assert_eq!(body.error, "No leads to download");
    }

    #[test]
    fn test_url_joins_backend() {
        assert_eq!(url("/api/blogs"), format!("{}/api/blogs", BACKEND_URL));
    }
}
