//! Short URL creation and resolution service.

use std::sync::Arc;

use chrono::Duration;
use serde_json::json;
use url::Url;

use crate::domain::clock::Clock;
use crate::domain::entities::ShortUrl;
use crate::error::AppError;
use crate::infrastructure::memory::ShortUrlStore;
use crate::utils::code_generator::CodeGenerator;

/// Validity period applied when the request does not specify one.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Input for creating a shortened URL.
#[derive(Debug, Clone)]
pub struct CreateShortUrl {
    pub url: String,
    pub validity_minutes: Option<i64>,
    pub shortcode: Option<String>,
}

/// Service for allocating and resolving shortened URLs.
///
/// Validates input, assigns shortcodes (caller-requested or generated), and
/// enforces uniqueness atomically through the store's insert-if-absent
/// operation.
pub struct ShortUrlService {
    store: Arc<ShortUrlStore>,
    code_generator: Arc<dyn CodeGenerator>,
    clock: Arc<dyn Clock>,
    base_url: String,
}

impl ShortUrlService {
    /// Creates a new short URL service.
    ///
    /// `base_url` is the public prefix short links are rendered under;
    /// a trailing slash is tolerated.
    pub fn new(
        store: Arc<ShortUrlStore>,
        code_generator: Arc<dyn CodeGenerator>,
        clock: Arc<dyn Clock>,
        base_url: String,
    ) -> Self {
        Self {
            store,
            code_generator,
            clock,
            base_url,
        }
    }

    /// Creates a shortened URL.
    ///
    /// # Validation
    ///
    /// - The original URL must be present and parse as an absolute URL. It is
    ///   stored exactly as submitted; validation never rewrites it.
    /// - `validity_minutes` must be positive when given; omitted, it defaults
    ///   to [`DEFAULT_VALIDITY_MINUTES`].
    /// - An empty requested shortcode is treated as absent.
    ///
    /// # Code Assignment
    ///
    /// A requested shortcode is used verbatim or rejected on collision.
    /// Otherwise a random 6-character code is generated, retrying up to 10
    /// times when a generated code is already taken.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] or [`AppError::InvalidValidity`] on
    /// bad input, [`AppError::Conflict`] if the requested shortcode exists,
    /// and [`AppError::Internal`] when generation exhausts its attempts.
    pub fn create_short_url(&self, input: CreateShortUrl) -> Result<ShortUrl, AppError> {
        if input.url.is_empty() {
            return Err(AppError::invalid_url("URL is required", json!({})));
        }

        Url::parse(&input.url).map_err(|e| {
            AppError::invalid_url(
                "Invalid URL format",
                json!({ "url": &input.url, "reason": e.to_string() }),
            )
        })?;

        let validity_minutes = match input.validity_minutes {
            None => DEFAULT_VALIDITY_MINUTES,
            Some(v) if v <= 0 => {
                return Err(AppError::invalid_validity(
                    "Validity must be a positive number",
                    json!({ "validity": v }),
                ));
            }
            Some(v) => v,
        };

        let created_at = self.clock.now();
        let expires_at = Duration::try_minutes(validity_minutes)
            .and_then(|lifetime| created_at.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::invalid_validity(
                    "Validity is too large",
                    json!({ "validity": validity_minutes }),
                )
            })?;

        match input.shortcode.filter(|code| !code.is_empty()) {
            Some(custom) => {
                let record = ShortUrl::new(
                    custom,
                    input.url,
                    created_at,
                    expires_at,
                    validity_minutes,
                );
                self.store.insert(record.clone())?;
                Ok(record)
            }
            None => self.create_with_generated_code(input.url, created_at, expires_at, validity_minutes),
        }
    }

    /// Resolves a shortcode to its live record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown shortcodes and
    /// [`AppError::Expired`] once the validity window has passed.
    pub fn resolve_active(&self, code: &str) -> Result<ShortUrl, AppError> {
        self.store.resolve(code, self.clock.now())
    }

    /// Renders the full short link for a code.
    pub fn short_link(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }

    /// Allocates a record under a generated code, retrying on collision.
    ///
    /// Insert-if-absent makes each attempt atomic, so concurrent generation
    /// never commits the same code twice.
    fn create_with_generated_code(
        &self,
        original_url: String,
        created_at: chrono::DateTime<chrono::Utc>,
        expires_at: chrono::DateTime<chrono::Utc>,
        validity_minutes: i64,
    ) -> Result<ShortUrl, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let code = self.code_generator.generate();
            let record = ShortUrl::new(
                code,
                original_url.clone(),
                created_at,
                expires_at,
                validity_minutes,
            );

            match self.store.insert(record.clone()) {
                Ok(()) => return Ok(record),
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}
