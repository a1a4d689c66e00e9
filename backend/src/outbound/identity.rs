//! Reqwest-backed identity provider probe.
//!
//! This adapter owns transport details only: authenticated request
//! construction, timeout handling, and status mapping. Transport errors and
//! non-success HTTP statuses both fail the probe; the response payload is
//! unused.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use crate::domain::ports::{IdentityProbe, IdentityProbeError};

const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);
const USER_ENDPOINT: &str = "auth/v1/user";

/// Connection settings for the identity provider.
pub struct IdentitySettings {
    /// Base URL of the provider.
    pub base_url: Url,
    /// Service-role key sent as both `apikey` and bearer token.
    pub service_key: String,
    /// Request timeout for each probe.
    pub timeout: Duration,
}

impl IdentitySettings {
    /// Settings with the default probe timeout.
    pub fn new(base_url: Url, service_key: impl Into<String>) -> Self {
        Self {
            base_url,
            service_key: service_key.into(),
            timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }
}

/// Errors raised while constructing an [`HttpIdentityProbe`].
#[derive(Debug, thiserror::Error)]
pub enum IdentityProbeBuildError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// The probe endpoint could not be derived from the base URL.
    #[error("invalid identity endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Probe adapter performing authenticated GET requests against the
/// provider's user endpoint.
pub struct HttpIdentityProbe {
    client: Client,
    endpoint: Url,
    service_key: String,
}

impl HttpIdentityProbe {
    /// Build a probe with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityProbeBuildError`] when the client cannot be
    /// constructed or the endpoint URL does not resolve.
    pub fn new(settings: IdentitySettings) -> Result<Self, IdentityProbeBuildError> {
        let client = Client::builder().timeout(settings.timeout).build()?;
        let endpoint = settings.base_url.join(USER_ENDPOINT)?;
        Ok(Self {
            client,
            endpoint,
            service_key: settings.service_key,
        })
    }
}

#[async_trait]
impl IdentityProbe for HttpIdentityProbe {
    async fn probe(&self) -> Result<(), IdentityProbeError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header("apikey", self.service_key.as_str())
            .bearer_auth(self.service_key.as_str())
            .send()
            .await
            .map_err(|error| IdentityProbeError::transport(error.to_string()))?;

        evaluate_status(response.status())
    }
}

fn evaluate_status(status: StatusCode) -> Result<(), IdentityProbeError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(IdentityProbeError::status(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn settings(base: &str) -> IdentitySettings {
        IdentitySettings::new(Url::parse(base).expect("valid base URL"), "service-key")
    }

    #[rstest]
    #[case("https://project.supabase.co", "https://project.supabase.co/auth/v1/user")]
    #[case("https://identity.internal/", "https://identity.internal/auth/v1/user")]
    fn endpoint_derives_from_the_base_url(#[case] base: &str, #[case] expected: &str) {
        let probe = HttpIdentityProbe::new(settings(base)).expect("probe builds");
        assert_eq!(probe.endpoint.as_str(), expected);
    }

    #[test]
    fn default_timeout_applies() {
        let settings = settings("https://project.supabase.co");
        assert_eq!(settings.timeout, DEFAULT_PROBE_TIMEOUT);
    }

    #[rstest]
    #[case(StatusCode::OK)]
    #[case(StatusCode::NO_CONTENT)]
    fn success_statuses_pass_the_probe(#[case] status: StatusCode) {
        assert_eq!(evaluate_status(status), Ok(()));
    }

    #[rstest]
    #[case(StatusCode::UNAUTHORIZED, 401)]
    #[case(StatusCode::NOT_FOUND, 404)]
    #[case(StatusCode::BAD_GATEWAY, 502)]
    fn non_success_statuses_fail_the_probe(#[case] status: StatusCode, #[case] code: u16) {
        assert_eq!(evaluate_status(status), Err(IdentityProbeError::status(code)));
    }
}
