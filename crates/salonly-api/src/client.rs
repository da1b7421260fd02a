// Hand-crafted async HTTP client for the salonly booking backend.
//
// Salon-scoped JSON REST endpoints under /salons/{salon}/.
// Auth: optional Authorization bearer header.

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::types;

// ── Error response shape from the backend ────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the salon booking API.
///
/// Communicates via JSON REST endpoints scoped under `/salons/{salon}/`,
/// with an optional bearer token injected as a default header.
pub struct SalonClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SalonClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build an unauthenticated client from a base URL and transport config.
    pub fn new(base_url: &str, transport: &crate::TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Build from an access token, injected as `Authorization: Bearer ...`
    /// on every request.
    pub fn with_token(
        base_url: &str,
        token: &secrecy::SecretString,
        transport: &crate::TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let value = format!("Bearer {}", token.expose_secret());
        let mut bearer = HeaderValue::from_str(&value).map_err(|e| Error::Authentication {
            message: format!("invalid access token header value: {e}"),
        })?;
        bearer.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, bearer);

        let http = transport.build_client_with_headers(headers)?;
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Parse the base URL and guarantee a trailing slash so relative
    /// joins preserve any path prefix the deployment carries.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"salons/{id}/services"`) onto the base URL.
    fn url(&self, path: &str) -> Url {
        // base_url always ends with `/`, so joining relative paths works.
        self.base_url
            .join(path)
            .expect("path should be valid relative URL")
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("PATCH {url}");

        let resp = self.http.patch(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                // Char-based cut: error bodies are often Persian text.
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Error::Unauthorized;
        }

        let raw = resp.text().await.unwrap_or_default();

        if let Ok(err) = serde_json::from_str::<ErrorResponse>(&raw) {
            Error::Api {
                status: status.as_u16(),
                message: err.message.unwrap_or_else(|| status.to_string()),
                code: err.code,
            }
        } else {
            Error::Api {
                status: status.as_u16(),
                message: if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                },
                code: None,
            }
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Services ─────────────────────────────────────────────────────

    pub async fn list_services(&self, salon: &str) -> Result<Vec<types::ServiceRecord>, Error> {
        self.get(&format!("salons/{salon}/services")).await
    }

    // ── Employees ────────────────────────────────────────────────────

    pub async fn list_employees(
        &self,
        salon: &str,
        service: &str,
    ) -> Result<Vec<types::EmployeeRecord>, Error> {
        self.get_with_params(
            &format!("salons/{salon}/employees/{service}"),
            &[("service", service.to_owned())],
        )
        .await
    }

    // ── Availability ─────────────────────────────────────────────────

    /// Reserved intervals for an employee on a given calendar day.
    pub async fn reserved_intervals(
        &self,
        salon: &str,
        employee: &str,
        date: chrono::NaiveDate,
    ) -> Result<Vec<types::ReservedIntervalRecord>, Error> {
        self.get_with_params(
            &format!("salons/{salon}/employees/{employee}/availability"),
            &[("date", date.to_string())],
        )
        .await
    }

    /// Per-employee free-slot flags for a whole day.
    pub async fn free_slot_overview(
        &self,
        salon: &str,
        date: chrono::NaiveDate,
    ) -> Result<Vec<types::EmployeeDayRecord>, Error> {
        self.get_with_params(
            &format!("salons/{salon}/availability/freeslots"),
            &[("date", date.to_string())],
        )
        .await
    }

    // ── Bookings ─────────────────────────────────────────────────────

    pub async fn create_booking(
        &self,
        salon: &str,
        req: &types::CreateBookingRequest,
    ) -> Result<types::BookingRecord, Error> {
        let reply: types::BookingReply = self.post(&format!("salons/{salon}/bookings"), req).await?;
        Ok(reply.into_booking())
    }

    pub async fn get_booking(
        &self,
        salon: &str,
        booking: &str,
    ) -> Result<types::BookingRecord, Error> {
        self.get(&format!("salons/{salon}/bookings/{booking}")).await
    }

    /// All bookings created by the given user, newest first.
    pub async fn list_bookings(&self, user: &str) -> Result<Vec<types::BookingRecord>, Error> {
        self.get_with_params("bookings", &[("user", user.to_owned())])
            .await
    }

    pub async fn cancel_booking(
        &self,
        salon: &str,
        booking: &str,
        reason: &str,
    ) -> Result<types::BookingRecord, Error> {
        let reply: types::BookingReply = self
            .patch(
                &format!("salons/{salon}/bookings/{booking}/cancel"),
                &types::CancelRequest {
                    reason: reason.to_owned(),
                },
            )
            .await?;
        Ok(reply.into_booking())
    }
}
