//! Donation draft and the typestates of the checkout wizard.
//!
//! Each step of the wizard is a distinct type parameter on `Donation<S>`, so a
//! draft can only be submitted once it has passed the amount step, and a
//! redirect can only come out of a submission.

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;
use uuid::Uuid;

use crate::checkout::CheckoutRequest;
use crate::domain::campaign::{Campaign, CampaignId};

/// Marker trait for valid donation states.
pub trait DonationState: Send + Sync {}

/// A donation moving through the checkout wizard.
///
/// The generic parameter `S` represents the current step.
#[derive(Debug, Clone, Serialize)]
pub struct Donation<S: DonationState> {
    /// The current state of the donation.
    pub state: S,
    /// The donor-entered values, carried unchanged across transitions.
    pub draft: DonationDraft,
}

/// The in-progress, unsubmitted donation data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DonationDraft {
    /// Fixed when the flow starts
    pub campaign_id: CampaignId,
    /// Amount as typed by the donor; parsed by the amount guard
    pub amount: String,
    pub donor_name: String,
    pub donor_email: String,
    /// Inherited from the campaign
    pub currency: String,
}

impl DonationDraft {
    pub fn for_campaign(campaign: &Campaign) -> Self {
        Self {
            campaign_id: campaign.id.clone(),
            amount: String::new(),
            donor_name: String::new(),
            donor_email: String::new(),
            currency: campaign.currency.clone(),
        }
    }
}

// ============================================================================
// Donation States
// ============================================================================

/// Donor is choosing an amount. Initial state.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AmountEntry {}

impl DonationState for AmountEntry {}

/// Donor is entering name and email.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DonorDetails {
    /// Number of checkout attempts made so far
    pub attempts: u32,
}

impl DonationState for DonorDetails {}

/// A checkout call is in flight.
#[derive(Debug, Clone, Serialize)]
pub struct Submitting {
    /// The exact payload sent to the initiator
    pub request: CheckoutRequest,
    /// 1 for the first attempt
    pub attempt: u32,
    pub started_at: DateTime<Utc>,
}

impl DonationState for Submitting {}

/// Checkout succeeded; the donor is being sent to the payment page. Terminal.
#[derive(Debug, Clone, Serialize)]
pub struct Redirecting {
    pub redirect_url: Url,
    pub attempt: u32,
    pub started_at: DateTime<Utc>,
    pub redirected_at: DateTime<Utc>,
}

impl DonationState for Redirecting {}

/// Checkout failed; the donor may resubmit.
#[derive(Debug, Clone, Serialize)]
pub struct Failed {
    /// User-visible message
    pub message: String,
    /// HTTP status of the failed response, if there was one
    pub status: Option<u16>,
    pub attempt: u32,
    pub failed_at: DateTime<Utc>,
}

impl DonationState for Failed {}

// ============================================================================
// Flow-level enums
// ============================================================================

/// The state of the flow as a plain enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowState {
    Amount,
    Personal,
    Submitting,
    Redirecting,
    Failed,
}

impl FlowState {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowState::Amount => "amount",
            FlowState::Personal => "personal",
            FlowState::Submitting => "submitting",
            FlowState::Redirecting => "redirecting",
            FlowState::Failed => "failed",
        }
    }
}

impl std::fmt::Display for FlowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wizard step shown to the donor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Amount,
    Personal,
    Review,
}

/// Status of the checkout submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    Idle,
    Submitting,
    Redirecting,
    Failed,
}

/// Unique identifier for a flow instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FlowId(pub Uuid);

impl FlowId {
    pub fn new() -> Self {
        FlowId(Uuid::new_v4())
    }
}

impl Default for FlowId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FlowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Display only first 8 characters for readability in logs
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

impl From<Uuid> for FlowId {
    fn from(uuid: Uuid) -> Self {
        FlowId(uuid)
    }
}

// ============================================================================
// Unified Donation Representation
// ============================================================================

/// Enum that can hold a donation in any state.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", content = "donation", rename_all = "snake_case")]
pub enum AnyDonation {
    Amount(Donation<AmountEntry>),
    Personal(Donation<DonorDetails>),
    Submitting(Donation<Submitting>),
    Redirecting(Donation<Redirecting>),
    Failed(Donation<Failed>),
}

impl AnyDonation {
    pub fn draft(&self) -> &DonationDraft {
        match self {
            AnyDonation::Amount(d) => &d.draft,
            AnyDonation::Personal(d) => &d.draft,
            AnyDonation::Submitting(d) => &d.draft,
            AnyDonation::Redirecting(d) => &d.draft,
            AnyDonation::Failed(d) => &d.draft,
        }
    }

    /// Mutable access to the draft, for states that accept edits.
    pub fn draft_mut(&mut self) -> Option<&mut DonationDraft> {
        match self {
            AnyDonation::Amount(d) => Some(&mut d.draft),
            AnyDonation::Personal(d) => Some(&mut d.draft),
            AnyDonation::Failed(d) => Some(&mut d.draft),
            AnyDonation::Submitting(_) | AnyDonation::Redirecting(_) => None,
        }
    }

    pub fn flow_state(&self) -> FlowState {
        match self {
            AnyDonation::Amount(_) => FlowState::Amount,
            AnyDonation::Personal(_) => FlowState::Personal,
            AnyDonation::Submitting(_) => FlowState::Submitting,
            AnyDonation::Redirecting(_) => FlowState::Redirecting,
            AnyDonation::Failed(_) => FlowState::Failed,
        }
    }

    pub fn step(&self) -> Step {
        match self {
            AnyDonation::Amount(_) => Step::Amount,
            AnyDonation::Personal(_) => Step::Personal,
            AnyDonation::Submitting(_) | AnyDonation::Redirecting(_) | AnyDonation::Failed(_) => {
                Step::Review
            }
        }
    }

    pub fn submission(&self) -> SubmissionState {
        match self {
            AnyDonation::Amount(_) | AnyDonation::Personal(_) => SubmissionState::Idle,
            AnyDonation::Submitting(_) => SubmissionState::Submitting,
            AnyDonation::Redirecting(_) => SubmissionState::Redirecting,
            AnyDonation::Failed(_) => SubmissionState::Failed,
        }
    }

    /// Whether the submit control should accept input.
    pub fn submit_enabled(&self) -> bool {
        matches!(self, AnyDonation::Personal(_) | AnyDonation::Failed(_))
    }
}

impl From<Donation<AmountEntry>> for AnyDonation {
    fn from(d: Donation<AmountEntry>) -> Self {
        AnyDonation::Amount(d)
    }
}

impl From<Donation<DonorDetails>> for AnyDonation {
    fn from(d: Donation<DonorDetails>) -> Self {
        AnyDonation::Personal(d)
    }
}

impl From<Donation<Submitting>> for AnyDonation {
    fn from(d: Donation<Submitting>) -> Self {
        AnyDonation::Submitting(d)
    }
}

impl From<Donation<Redirecting>> for AnyDonation {
    fn from(d: Donation<Redirecting>) -> Self {
        AnyDonation::Redirecting(d)
    }
}

impl From<Donation<Failed>> for AnyDonation {
    fn from(d: Donation<Failed>) -> Self {
        AnyDonation::Failed(d)
    }
}
