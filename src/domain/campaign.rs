//! Campaign types and the lookup service the flow starts from.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::ApiConfig;
use crate::error::{DonaflowError, Result};
use crate::http::{HttpClient, HttpRequest};

/// Identifier of a campaign, as issued by the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampaignId(pub String);

impl std::fmt::Display for CampaignId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CampaignId {
    fn from(id: &str) -> Self {
        CampaignId(id.to_string())
    }
}

impl From<String> for CampaignId {
    fn from(id: String) -> Self {
        CampaignId(id)
    }
}

impl std::ops::Deref for CampaignId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The slice of a campaign the donation flow needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: CampaignId,
    /// ISO currency code donations are made in
    pub currency: String,
    pub target_amount: Decimal,
    /// Inactive campaigns do not accept donations
    pub active: bool,
}

/// Source of campaign details.
#[async_trait]
pub trait CampaignLookup: Send + Sync {
    /// Fetch a campaign.
    ///
    /// # Errors
    /// Returns [`DonaflowError::CampaignNotFound`] if the campaign does not exist.
    async fn get_campaign(&self, id: &CampaignId) -> Result<Campaign>;
}

/// Campaign lookup backed by the REST API.
#[derive(Clone)]
pub struct HttpCampaignLookup<H: HttpClient> {
    client: H,
    config: ApiConfig,
}

impl<H: HttpClient> HttpCampaignLookup<H> {
    pub fn new(client: H, config: ApiConfig) -> Self {
        Self { client, config }
    }

    /// Path of one campaign, with the id percent-encoded as a single segment.
    fn campaign_path(&self, id: &CampaignId) -> Result<String> {
        let mut url = Url::parse(&self.config.base_url)?;
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| DonaflowError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .clear()
            .push(id);

        Ok(format!(
            "{}{}",
            self.config.campaigns_path.trim_end_matches('/'),
            url.path()
        ))
    }
}

#[async_trait]
impl<H: HttpClient> CampaignLookup for HttpCampaignLookup<H> {
    #[tracing::instrument(skip(self), fields(campaign_id = %id))]
    async fn get_campaign(&self, id: &CampaignId) -> Result<Campaign> {
        let path = self.campaign_path(id)?;
        let request =
            HttpRequest::get(&self.config.base_url, path).with_timeout(self.config.timeout_ms);
        let response = self.client.execute(&request).await?;

        if response.status == 404 {
            tracing::debug!("Campaign not found");
            return Err(DonaflowError::CampaignNotFound(id.clone()));
        }

        if !response.is_success() {
            tracing::warn!(status = response.status, "Campaign lookup failed");
            return Err(DonaflowError::Api {
                status: Some(response.status),
                message: response.error_message(),
            });
        }

        let campaign: Campaign = serde_json::from_str(&response.body)?;
        Ok(campaign)
    }
}
