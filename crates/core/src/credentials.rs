//! Credential acquisition
//!
//! Credentials are read once at process startup from the environment and are
//! immutable for the process lifetime. Absence is deliberately not validated
//! here: a missing credential simply causes every network call to fail with
//! an authentication error from the service.

/// Environment variable holding the account identifier
pub const ENV_ACCOUNT_ID: &str = "R2_ACCOUNT_ID";
/// Environment variable holding the access key
pub const ENV_ACCESS_KEY: &str = "R2_ACCESS_KEY";
/// Environment variable holding the secret key
pub const ENV_SECRET_KEY: &str = "R2_SECRET_KEY";
/// Optional endpoint override, for non-R2 S3-compatible servers
pub const ENV_ENDPOINT: &str = "R2_ENDPOINT";

/// R2 requires `auto` as the region marker
pub const DEFAULT_REGION: &str = "auto";

/// Credentials and endpoint configuration for one storage service
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Account identifier, used to derive the endpoint host
    pub account_id: String,

    /// Access key ID
    pub access_key: String,

    /// Secret access key
    pub secret_key: String,

    /// Region marker (always `auto` for R2)
    pub region: String,

    /// Explicit endpoint URL, overriding the account-derived one
    pub endpoint_override: Option<String>,
}

impl Credentials {
    /// Create credentials with an account-derived endpoint
    pub fn new(
        account_id: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            region: DEFAULT_REGION.to_string(),
            endpoint_override: None,
        }
    }

    /// Read credentials from the environment.
    ///
    /// Missing variables yield empty fields rather than an error; the
    /// service rejects unauthenticated requests on first use.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        Self {
            account_id: var(ENV_ACCOUNT_ID),
            access_key: var(ENV_ACCESS_KEY),
            secret_key: var(ENV_SECRET_KEY),
            region: DEFAULT_REGION.to_string(),
            endpoint_override: std::env::var(ENV_ENDPOINT).ok().filter(|s| !s.is_empty()),
        }
    }

    /// The service endpoint URL
    pub fn endpoint(&self) -> String {
        match &self.endpoint_override {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}.r2.cloudflarestorage.com", self.account_id),
        }
    }

    /// The access URL for an object, as shown by the `info` command
    pub fn object_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/{bucket}/{key}", self.endpoint())
    }
}
