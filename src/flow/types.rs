//! Read models and outcomes exposed by [`super::DonationFlow`].

use serde::Serialize;
use url::Url;

use crate::domain::campaign::CampaignId;
use crate::domain::donation::{DonationDraft, FlowId, FlowState, Step, SubmissionState};

/// Point-in-time view of a flow, for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowSnapshot {
    pub flow_id: FlowId,
    pub campaign_id: CampaignId,
    pub state: FlowState,
    pub step: Step,
    pub submission: SubmissionState,
    pub draft: DonationDraft,
    /// Message to show inline, if the last action failed
    pub error: Option<String>,
    pub submit_enabled: bool,
    /// Checkout URL recorded in capture mode
    pub redirect_target: Option<Url>,
}

/// Result of a `submit()` call that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Checkout succeeded; the donor is headed to this URL
    Redirecting(Url),
    /// A checkout call is already in flight; nothing was sent
    AlreadySubmitting,
    /// The flow has already redirected; nothing was sent
    AlreadyRedirecting,
    /// The flow was torn down before the call resolved and its result was dropped
    Discarded,
}
