//! Error types for the donation flow.

use thiserror::Error;

use crate::domain::campaign::CampaignId;

/// Result type alias using the donaflow error type.
pub type Result<T> = std::result::Result<T, DonaflowError>;

/// Message shown when a checkout attempt fails without a usable message.
pub const GENERIC_CHECKOUT_FAILURE: &str = "unable to start checkout, please try again";

/// A guard rejected the draft. The flow stays on the current step.
///
/// The `Display` output is the message shown inline to the donor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Amount is empty, unparsable, zero or negative
    #[error("enter a valid donation amount")]
    InvalidAmount,

    /// Name or email is empty
    #[error("please provide your name and email")]
    MissingDonorDetails,

    /// Email does not have a valid shape
    #[error("please provide a valid email")]
    InvalidEmail,

    /// Preset index outside the configured preset amounts
    #[error("no preset amount at position {0}")]
    UnknownPreset(usize),
}

impl ValidationError {
    /// Low-cardinality label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationError::InvalidAmount => "invalid_amount",
            ValidationError::MissingDonorDetails => "missing_donor_details",
            ValidationError::InvalidEmail => "invalid_email",
            ValidationError::UnknownPreset(_) => "unknown_preset",
        }
    }
}

/// Main error type for the donation flow.
#[derive(Error, Debug)]
pub enum DonaflowError {
    /// Local validation failure
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Checkout initiation failed; the flow is in the Failed state
    #[error("{0}")]
    Submission(String),

    /// Campaign does not exist
    #[error("Campaign not found: {0}")]
    CampaignNotFound(CampaignId),

    /// Campaign exists but is not accepting donations
    #[error("Campaign is not accepting donations: {0}")]
    CampaignInactive(CampaignId),

    /// Non-success response from the REST API
    #[error("API request failed (status {status:?}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: Option<u16>,
        message: Option<String>,
    },

    /// Operation not valid for the flow's current state
    #[error("Invalid operation '{operation}' while flow is in state '{state}'")]
    InvalidState {
        state: &'static str,
        operation: &'static str,
    },

    /// The view owning the flow has been torn down
    #[error("Donation flow has been torn down")]
    TornDown,

    /// HTTP client error
    #[error("HTTP request failed: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Malformed URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// General error from anyhow
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DonaflowError {
    /// The string shown to the donor for this error.
    pub fn user_message(&self) -> String {
        match self {
            DonaflowError::Validation(e) => e.to_string(),
            DonaflowError::Submission(message) => message.clone(),
            DonaflowError::CampaignNotFound(_) => "campaign not found".to_string(),
            DonaflowError::CampaignInactive(_) => {
                "this campaign is not accepting donations".to_string()
            }
            DonaflowError::Api {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_CHECKOUT_FAILURE.to_string(),
        }
    }

    /// Returns true for errors raised by a guard rather than a collaborator.
    pub fn is_validation(&self) -> bool {
        matches!(self, DonaflowError::Validation(_))
    }
}
