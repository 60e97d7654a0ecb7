//! Checkout initiation: turning a validated draft into a payment session.
//!
//! The flow hands a [`CheckoutRequest`] to a [`CheckoutInitiator`] and expects a
//! [`CheckoutSession`] carrying the URL of the external checkout page. Anything
//! else (transport error, non-success status, success without a URL) is a failure.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::ApiConfig;
use crate::domain::campaign::CampaignId;
use crate::error::{DonaflowError, Result};
use crate::http::{HttpClient, HttpRequest};

/// The payload sent to the checkout-initiation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub campaign_id: CampaignId,
    /// Sent as a JSON number, so precision is limited to what an `f64`
    /// carries (about 15 significant digits).
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
    pub donor_name: String,
    pub donor_email: String,
}

/// A payment session the donor is redirected into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    pub redirect_url: Url,
}

/// External service that starts a payment session.
#[async_trait]
pub trait CheckoutInitiator: Send + Sync {
    /// Start a checkout for the given donation.
    ///
    /// # Errors
    /// Returns [`DonaflowError::Api`] for non-success responses and for
    /// success responses that carry no redirect URL.
    async fn initiate(&self, request: &CheckoutRequest) -> Result<CheckoutSession>;
}

/// Success body of the checkout endpoint.
///
/// The backend has answered with `redirectUrl`, `url` and `checkoutUrl` at
/// different times, sometimes several at once. The first one that parses wins.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckoutResponseBody {
    redirect_url: Option<String>,
    url: Option<String>,
    checkout_url: Option<String>,
}

impl CheckoutResponseBody {
    fn redirect_url(self) -> Option<Url> {
        [self.redirect_url, self.url, self.checkout_url]
            .into_iter()
            .flatten()
            .find_map(|raw| Url::parse(raw.trim()).ok())
    }
}

/// Checkout initiator backed by the REST API.
#[derive(Clone)]
pub struct HttpCheckoutInitiator<H: HttpClient> {
    client: H,
    config: ApiConfig,
}

impl<H: HttpClient> HttpCheckoutInitiator<H> {
    pub fn new(client: H, config: ApiConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl<H: HttpClient> CheckoutInitiator for HttpCheckoutInitiator<H> {
    #[tracing::instrument(skip(self, request), fields(campaign_id = %request.campaign_id, amount = %request.amount))]
    async fn initiate(&self, request: &CheckoutRequest) -> Result<CheckoutSession> {
        let body = serde_json::to_string(request)?;
        let http_request =
            HttpRequest::post_json(&self.config.base_url, self.config.checkout_path.clone(), body)
                .with_timeout(self.config.timeout_ms);

        let response = self.client.execute(&http_request).await?;

        if !response.is_success() {
            tracing::warn!(status = response.status, "Checkout initiation rejected");
            return Err(DonaflowError::Api {
                status: Some(response.status),
                message: response.error_message(),
            });
        }

        let redirect_url = serde_json::from_str::<CheckoutResponseBody>(&response.body)
            .unwrap_or_default()
            .redirect_url();

        match redirect_url {
            Some(redirect_url) => {
                tracing::debug!(redirect_url = %redirect_url, "Checkout session created");
                Ok(CheckoutSession { redirect_url })
            }
            None => {
                tracing::warn!(
                    status = response.status,
                    "Checkout response did not contain a redirect URL"
                );
                Err(DonaflowError::Api {
                    status: Some(response.status),
                    message: None,
                })
            }
        }
    }
}
