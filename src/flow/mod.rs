//! Donation flow: drives one checkout session from amount entry to redirect.
//!
//! A [`DonationFlow`] owns the draft for a single campaign and exposes the
//! operations a donation form needs. Every forward transition is guarded; a
//! failed guard leaves the flow where it was and records the message to show.
//! At most one checkout call is in flight per flow: `submit()` moves the flow
//! to `Submitting` under the state lock before it awaits anything. The checkout
//! call and the transition out of `Submitting` run in a spawned task, so the
//! flow settles even if the caller stops polling `submit()`.
use std::sync::Arc;

use metrics::counter;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use url::Url;

use crate::checkout::{CheckoutInitiator, CheckoutSession};
use crate::domain::campaign::{Campaign, CampaignId, CampaignLookup};
use crate::domain::donation::{AnyDonation, Donation, DonationDraft, FlowId, FlowState};
use crate::error::{DonaflowError, Result, ValidationError};
use crate::redirect::RedirectBoundary;

pub mod types;

pub use types::{FlowSnapshot, SubmitOutcome};

/// Configuration for a donation flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Record the checkout URL instead of handing it to the redirect boundary.
    /// Used for headless verification.
    pub capture_redirect: bool,

    /// Amounts offered as one-tap choices on the amount step
    pub preset_amounts: Vec<Decimal>,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            capture_redirect: false,
            preset_amounts: [10, 25, 50, 100].into_iter().map(Decimal::from).collect(),
        }
    }
}

/// Mutable state of a flow, guarded by a single lock.
struct FlowInner {
    donation: AnyDonation,
    error: Option<String>,
    captured_redirect: Option<Url>,
}

/// One donor's checkout session for one campaign.
pub struct DonationFlow<C, R>
where
    C: CheckoutInitiator,
    R: RedirectBoundary,
{
    flow_id: FlowId,
    campaign: Campaign,
    initiator: Arc<C>,
    redirect: Arc<R>,
    config: FlowConfig,
    inner: Arc<Mutex<FlowInner>>,
    /// Cancelled when the owning view goes away
    teardown_token: CancellationToken,
}

/// Applies a checkout result to a flow from the task that ran the call.
struct Resolver<R> {
    flow_id: FlowId,
    campaign_id: CampaignId,
    capture_redirect: bool,
    inner: Arc<Mutex<FlowInner>>,
    redirect: Arc<R>,
    teardown_token: CancellationToken,
}

impl<C, R> DonationFlow<C, R>
where
    C: CheckoutInitiator + 'static,
    R: RedirectBoundary + 'static,
{
    /// Look up the campaign and open a flow for it.
    ///
    /// # Errors
    /// Returns [`DonaflowError::CampaignNotFound`] or
    /// [`DonaflowError::CampaignInactive`]; no flow is created in either case.
    #[tracing::instrument(skip_all, fields(campaign_id = %campaign_id))]
    pub async fn start<L: CampaignLookup + ?Sized>(
        campaign_id: &CampaignId,
        lookup: &L,
        initiator: Arc<C>,
        redirect: Arc<R>,
        config: FlowConfig,
    ) -> Result<Self> {
        let campaign = lookup.get_campaign(campaign_id).await.inspect_err(|e| {
            tracing::warn!(error = %e, "Campaign lookup failed, flow not started");
        })?;
        Self::for_campaign(campaign, initiator, redirect, config)
    }

    /// Open a flow for an already-fetched campaign.
    pub fn for_campaign(
        campaign: Campaign,
        initiator: Arc<C>,
        redirect: Arc<R>,
        config: FlowConfig,
    ) -> Result<Self> {
        if !campaign.active {
            tracing::warn!(campaign_id = %campaign.id, "Campaign inactive, flow not started");
            return Err(DonaflowError::CampaignInactive(campaign.id));
        }

        let flow_id = FlowId::new();
        tracing::info!(
            flow_id = %flow_id,
            campaign_id = %campaign.id,
            currency = %campaign.currency,
            "Donation flow started"
        );

        Ok(Self {
            flow_id,
            inner: Arc::new(Mutex::new(FlowInner {
                donation: Donation::new(&campaign).into(),
                error: None,
                captured_redirect: None,
            })),
            campaign,
            initiator,
            redirect,
            config,
            teardown_token: CancellationToken::new(),
        })
    }

    pub fn flow_id(&self) -> FlowId {
        self.flow_id
    }

    pub fn campaign(&self) -> &Campaign {
        &self.campaign
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    pub fn state(&self) -> FlowState {
        self.inner.lock().donation.flow_state()
    }

    pub fn draft(&self) -> DonationDraft {
        self.inner.lock().donation.draft().clone()
    }

    /// Message from the last failed action, if any.
    pub fn error(&self) -> Option<String> {
        self.inner.lock().error.clone()
    }

    pub fn submit_enabled(&self) -> bool {
        !self.is_torn_down() && self.inner.lock().donation.submit_enabled()
    }

    /// The checkout URL recorded in capture mode.
    pub fn captured_redirect(&self) -> Option<Url> {
        self.inner.lock().captured_redirect.clone()
    }

    pub fn is_torn_down(&self) -> bool {
        self.teardown_token.is_cancelled()
    }

    pub fn snapshot(&self) -> FlowSnapshot {
        let torn_down = self.is_torn_down();
        let inner = self.inner.lock();
        FlowSnapshot {
            flow_id: self.flow_id,
            campaign_id: self.campaign.id.clone(),
            state: inner.donation.flow_state(),
            step: inner.donation.step(),
            submission: inner.donation.submission(),
            draft: inner.donation.draft().clone(),
            error: inner.error.clone(),
            submit_enabled: !torn_down && inner.donation.submit_enabled(),
            redirect_target: inner.captured_redirect.clone(),
        }
    }

    pub fn set_amount(&self, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        self.edit("set_amount", |draft| draft.amount = value)
    }

    pub fn set_donor_name(&self, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        self.edit("set_donor_name", |draft| draft.donor_name = value)
    }

    pub fn set_donor_email(&self, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        self.edit("set_donor_email", |draft| draft.donor_email = value)
    }

    /// Fill the amount field with one of the configured presets.
    pub fn select_preset_amount(&self, index: usize) -> Result<Decimal> {
        let amount = *self
            .config
            .preset_amounts
            .get(index)
            .ok_or(ValidationError::UnknownPreset(index))?;
        self.edit("select_preset_amount", |draft| {
            draft.amount = amount.to_string()
        })?;
        Ok(amount)
    }

    /// Apply a field edit. Editing a failed donation returns it to the details step.
    fn edit(&self, operation: &'static str, apply: impl FnOnce(&mut DonationDraft)) -> Result<()> {
        self.ensure_active()?;
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        if let AnyDonation::Failed(failed) = &inner.donation {
            let details = failed.clone().edit();
            inner.donation = details.into();
            inner.error = None;
        }

        let state = inner.donation.flow_state();
        match inner.donation.draft_mut() {
            Some(draft) => {
                apply(draft);
                Ok(())
            }
            None => {
                tracing::debug!(flow_id = %self.flow_id, state = %state, operation, "Edit rejected");
                Err(DonaflowError::InvalidState {
                    state: state.as_str(),
                    operation,
                })
            }
        }
    }

    /// Attempt the guarded forward transition for the current state.
    ///
    /// From the amount step this moves to donor details. From donor details (or
    /// after a failure) it submits. While a checkout is in flight, or after the
    /// redirect, it does nothing and reports the current state.
    pub async fn advance(&self) -> Result<FlowState> {
        self.ensure_active()?;
        match self.state() {
            FlowState::Amount => self.proceed_from_amount(),
            FlowState::Personal | FlowState::Failed => {
                self.submit().await?;
                Ok(self.state())
            }
            current @ (FlowState::Submitting | FlowState::Redirecting) => {
                tracing::debug!(flow_id = %self.flow_id, state = %current, "Advance ignored");
                Ok(current)
            }
        }
    }

    fn proceed_from_amount(&self) -> Result<FlowState> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        let AnyDonation::Amount(donation) = &inner.donation else {
            return Ok(inner.donation.flow_state());
        };

        match donation.clone().proceed() {
            Ok(details) => {
                tracing::debug!(flow_id = %self.flow_id, amount = %details.draft.amount, "Amount accepted");
                inner.donation = details.into();
                inner.error = None;
                Ok(FlowState::Personal)
            }
            Err(rejected) => {
                self.record_validation_failure(FlowState::Amount, &rejected.error);
                inner.error = Some(rejected.error.to_string());
                Err(rejected.error.into())
            }
        }
    }

    /// Step back. Values already entered are kept.
    ///
    /// Ignored while a checkout is in flight or after the redirect.
    pub fn back(&self) -> Result<FlowState> {
        self.ensure_active()?;
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        let previous: Option<AnyDonation> = match &inner.donation {
            AnyDonation::Personal(d) => Some(d.clone().back().into()),
            AnyDonation::Failed(d) => Some(d.clone().back().into()),
            AnyDonation::Amount(_) => None,
            AnyDonation::Submitting(_) | AnyDonation::Redirecting(_) => {
                tracing::debug!(flow_id = %self.flow_id, "Back ignored while checkout is in progress");
                None
            }
        };

        if let Some(previous) = previous {
            inner.donation = previous;
            inner.error = None;
        }
        Ok(inner.donation.flow_state())
    }

    /// Validate the draft and start checkout.
    ///
    /// Returns `AlreadySubmitting` without calling the initiator if a checkout
    /// is in flight. On success the flow is `Redirecting` and the URL has been
    /// handed to the redirect boundary (or captured, in capture mode). Dropping
    /// the returned future does not abandon the checkout; the flow still moves
    /// to `Redirecting` or `Failed` when the call completes.
    ///
    /// # Errors
    /// - [`DonaflowError::Validation`] if a guard fails; the flow stays put
    /// - [`DonaflowError::Submission`] if the initiator fails; the flow is `Failed`
    /// - [`DonaflowError::InvalidState`] if called from the amount step
    #[tracing::instrument(skip(self), fields(flow_id = %self.flow_id, campaign_id = %self.campaign.id))]
    pub async fn submit(&self) -> Result<SubmitOutcome> {
        self.ensure_active()?;

        let request = {
            let mut guard = self.inner.lock();
            let inner = &mut *guard;

            let started = match &inner.donation {
                AnyDonation::Personal(d) => d.clone().submit().map_err(|r| r.error),
                AnyDonation::Failed(d) => d.clone().retry().map_err(|r| r.error),
                AnyDonation::Submitting(_) => {
                    tracing::debug!("Submit ignored, checkout already in flight");
                    return Ok(SubmitOutcome::AlreadySubmitting);
                }
                AnyDonation::Redirecting(_) => {
                    tracing::debug!("Submit ignored, flow already redirected");
                    return Ok(SubmitOutcome::AlreadyRedirecting);
                }
                AnyDonation::Amount(_) => {
                    return Err(DonaflowError::InvalidState {
                        state: FlowState::Amount.as_str(),
                        operation: "submit",
                    });
                }
            };

            match started {
                Ok(submitting) => {
                    let request = submitting.state.request.clone();
                    tracing::info!(
                        attempt = submitting.state.attempt,
                        amount = %request.amount,
                        currency = %request.currency,
                        "Submitting donation checkout"
                    );
                    inner.donation = submitting.into();
                    inner.error = None;
                    request
                }
                Err(error) => {
                    self.record_validation_failure(inner.donation.flow_state(), &error);
                    inner.error = Some(error.to_string());
                    return Err(error.into());
                }
            }
        };

        counter!(
            "donaflow_checkout_attempts_total",
            "campaign" => self.campaign.id.to_string()
        )
        .increment(1);

        let initiator = self.initiator.clone();
        let resolver = self.resolver();
        let call = tokio::spawn(
            async move {
                let result = initiator.initiate(&request).await;
                resolver.resolve(result)
            }
            .instrument(tracing::Span::current()),
        );

        // Teardown drops the join handle; the spawned call still runs to completion.
        tokio::select! {
            joined = call => match joined {
                Ok(outcome) => outcome,
                Err(join_error) => self.resolver().resolve(Err(DonaflowError::Other(
                    anyhow::anyhow!("Checkout task terminated: {}", join_error),
                ))),
            },
            _ = self.teardown_token.cancelled() => {
                tracing::info!("Flow torn down during checkout, result will be discarded");
                Ok(SubmitOutcome::Discarded)
            }
        }
    }

    fn resolver(&self) -> Resolver<R> {
        Resolver {
            flow_id: self.flow_id,
            campaign_id: self.campaign.id.clone(),
            capture_redirect: self.config.capture_redirect,
            inner: self.inner.clone(),
            redirect: self.redirect.clone(),
            teardown_token: self.teardown_token.clone(),
        }
    }

    /// The view owning this flow is gone.
    ///
    /// An in-flight checkout call is left running but its result no longer
    /// touches the flow. Every later operation returns [`DonaflowError::TornDown`].
    pub fn teardown(&self) {
        // Cancel under the state lock; `Resolver::resolve` checks the token while holding it.
        let inner = self.inner.lock();
        if !self.teardown_token.is_cancelled() {
            tracing::info!(
                flow_id = %self.flow_id,
                state = %inner.donation.flow_state(),
                "Donation flow torn down"
            );
            self.teardown_token.cancel();
        }
    }

    fn ensure_active(&self) -> Result<()> {
        if self.is_torn_down() {
            return Err(DonaflowError::TornDown);
        }
        Ok(())
    }

    fn record_validation_failure(&self, state: FlowState, error: &ValidationError) {
        counter!(
            "donaflow_validation_failures_total",
            "step" => state.as_str(),
            "reason" => error.as_str()
        )
        .increment(1);
        tracing::debug!(
            flow_id = %self.flow_id,
            step = %state,
            reason = error.as_str(),
            "Validation failed"
        );
    }
}

impl<R: RedirectBoundary> Resolver<R> {
    /// Apply the initiator's answer to the in-flight submission.
    ///
    /// Navigation happens under the state lock; the boundary must not call
    /// back into the flow.
    fn resolve(&self, result: Result<CheckoutSession>) -> Result<SubmitOutcome> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        if self.teardown_token.is_cancelled() {
            tracing::debug!(flow_id = %self.flow_id, "Checkout resolved after teardown, discarding");
            return Ok(SubmitOutcome::Discarded);
        }

        let AnyDonation::Submitting(submitting) = &inner.donation else {
            tracing::warn!(
                flow_id = %self.flow_id,
                state = %inner.donation.flow_state(),
                "Checkout resolved outside the submitting state, discarding"
            );
            return Ok(SubmitOutcome::Discarded);
        };
        let submitting = submitting.clone();

        match result {
            Ok(session) => {
                let redirecting = submitting.redirect(session.redirect_url);
                let url = redirecting.state.redirect_url.clone();
                counter!(
                    "donaflow_checkout_outcomes_total",
                    "campaign" => self.campaign_id.to_string(),
                    "outcome" => "redirected"
                )
                .increment(1);
                tracing::info!(
                    flow_id = %self.flow_id,
                    attempt = redirecting.state.attempt,
                    redirect_url = %url,
                    capture = self.capture_redirect,
                    "Checkout session created, redirecting"
                );

                inner.donation = redirecting.into();
                inner.error = None;
                if self.capture_redirect {
                    inner.captured_redirect = Some(url.clone());
                } else {
                    self.redirect.navigate(&url);
                }
                Ok(SubmitOutcome::Redirecting(url))
            }
            Err(error) => {
                let message = error.user_message();
                let status = match &error {
                    DonaflowError::Api { status, .. } => *status,
                    _ => None,
                };
                counter!(
                    "donaflow_checkout_outcomes_total",
                    "campaign" => self.campaign_id.to_string(),
                    "outcome" => "failed"
                )
                .increment(1);
                tracing::warn!(
                    flow_id = %self.flow_id,
                    attempt = submitting.state.attempt,
                    status = ?status,
                    error = %error,
                    "Checkout initiation failed"
                );

                inner.donation = submitting.fail(message.clone(), status).into();
                inner.error = Some(message.clone());
                Err(DonaflowError::Submission(message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::CheckoutRequest;
    use crate::redirect::ChannelRedirect;
    use async_trait::async_trait;
    use tokio::sync::mpsc::UnboundedReceiver;

    /// Initiator that records requests and answers from a fixed script.
    #[derive(Default)]
    struct ScriptedInitiator {
        requests: Mutex<Vec<CheckoutRequest>>,
        fail_with: Option<String>,
    }

    #[async_trait]
    impl CheckoutInitiator for ScriptedInitiator {
        async fn initiate(&self, request: &CheckoutRequest) -> Result<CheckoutSession> {
            self.requests.lock().push(request.clone());
            match &self.fail_with {
                Some(message) => Err(DonaflowError::Api {
                    status: Some(500),
                    message: Some(message.clone()),
                }),
                None => Ok(CheckoutSession {
                    redirect_url: Url::parse("https://example.com/stripe-checkout-mock").unwrap(),
                }),
            }
        }
    }

    fn campaign(active: bool) -> Campaign {
        Campaign {
            id: CampaignId::from("clean-water"),
            currency: "USD".to_string(),
            target_amount: Decimal::from(5000),
            active,
        }
    }

    fn flow(
        initiator: ScriptedInitiator,
    ) -> DonationFlow<ScriptedInitiator, ChannelRedirect> {
        let (redirect, _rx) = ChannelRedirect::new();
        DonationFlow::for_campaign(
            campaign(true),
            Arc::new(initiator),
            Arc::new(redirect),
            FlowConfig {
                capture_redirect: true,
                ..Default::default()
            },
        )
        .unwrap()
    }

    /// A navigating flow plus the receiving end of its redirect boundary.
    fn navigating_flow() -> (
        DonationFlow<ScriptedInitiator, ChannelRedirect>,
        UnboundedReceiver<Url>,
    ) {
        let (redirect, rx) = ChannelRedirect::new();
        let flow = DonationFlow::for_campaign(
            campaign(true),
            Arc::new(ScriptedInitiator::default()),
            Arc::new(redirect),
            FlowConfig::default(),
        )
        .unwrap();
        (flow, rx)
    }

    /// Put the flow into `Submitting` without running the initiator.
    fn force_submitting(flow: &DonationFlow<ScriptedInitiator, ChannelRedirect>) {
        let mut inner = flow.inner.lock();
        let mut donation = Donation::new(&campaign(true));
        donation.draft.amount = "25".to_string();
        let mut details = donation.proceed().unwrap();
        details.draft.donor_name = "Test Donor".to_string();
        details.draft.donor_email = "donor@example.com".to_string();
        inner.donation = details.submit().unwrap().into();
    }

    fn session() -> Result<CheckoutSession> {
        Ok(CheckoutSession {
            redirect_url: Url::parse("https://example.com/stripe-checkout-mock").unwrap(),
        })
    }

    #[test]
    fn test_resolve_navigates_live_flow() {
        let (flow, mut rx) = navigating_flow();
        force_submitting(&flow);

        let outcome = flow.resolver().resolve(session()).unwrap();

        assert!(matches!(outcome, SubmitOutcome::Redirecting(_)));
        assert_eq!(flow.state(), FlowState::Redirecting);
        assert_eq!(
            rx.try_recv().unwrap().as_str(),
            "https://example.com/stripe-checkout-mock"
        );
    }

    #[test]
    fn test_resolve_after_teardown_does_not_navigate() {
        let (flow, mut rx) = navigating_flow();
        force_submitting(&flow);
        let resolver = flow.resolver();

        flow.teardown();
        let outcome = resolver.resolve(session()).unwrap();

        assert_eq!(outcome, SubmitOutcome::Discarded);
        assert_eq!(flow.state(), FlowState::Submitting);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_resolve_failure_moves_to_failed() {
        let (flow, _rx) = navigating_flow();
        force_submitting(&flow);

        let error = flow
            .resolver()
            .resolve(Err(DonaflowError::Other(anyhow::anyhow!("socket closed"))))
            .unwrap_err();

        assert!(matches!(error, DonaflowError::Submission(_)));
        assert_eq!(flow.state(), FlowState::Failed);
        assert_eq!(
            flow.error().as_deref(),
            Some(crate::error::GENERIC_CHECKOUT_FAILURE)
        );
    }

    #[test]
    fn test_inactive_campaign_refused() {
        let (redirect, _rx) = ChannelRedirect::new();
        let result = DonationFlow::for_campaign(
            campaign(false),
            Arc::new(ScriptedInitiator::default()),
            Arc::new(redirect),
            FlowConfig::default(),
        );
        assert!(matches!(result, Err(DonaflowError::CampaignInactive(_))));
    }

    #[test]
    fn test_initial_snapshot() {
        let flow = flow(ScriptedInitiator::default());
        let snapshot = flow.snapshot();

        assert_eq!(snapshot.state, FlowState::Amount);
        assert_eq!(snapshot.draft.currency, "USD");
        assert!(snapshot.draft.amount.is_empty());
        assert!(!snapshot.submit_enabled);
        assert_eq!(snapshot.error, None);
    }

    #[test]
    fn test_preset_amounts() {
        let flow = flow(ScriptedInitiator::default());

        assert_eq!(flow.select_preset_amount(1).unwrap(), Decimal::from(25));
        assert_eq!(flow.draft().amount, "25");

        let error = flow.select_preset_amount(9).unwrap_err();
        assert!(matches!(
            error,
            DonaflowError::Validation(ValidationError::UnknownPreset(9))
        ));
    }

    #[tokio::test]
    async fn test_submit_from_amount_step_is_invalid() {
        let flow = flow(ScriptedInitiator::default());
        flow.set_amount("25").unwrap();

        let error = flow.submit().await.unwrap_err();
        assert!(matches!(
            error,
            DonaflowError::InvalidState {
                state: "amount",
                operation: "submit"
            }
        ));
    }

    #[tokio::test]
    async fn test_edit_after_failure_returns_to_details() {
        let flow = flow(ScriptedInitiator {
            fail_with: Some("Card network down".to_string()),
            ..Default::default()
        });
        flow.set_amount("25").unwrap();
        flow.advance().await.unwrap();
        flow.set_donor_name("Test Donor").unwrap();
        flow.set_donor_email("donor@example.com").unwrap();

        let error = flow.submit().await.unwrap_err();
        assert_eq!(error.user_message(), "Card network down");
        assert_eq!(flow.state(), FlowState::Failed);
        assert_eq!(flow.error().as_deref(), Some("Card network down"));

        flow.set_donor_name("Another Donor").unwrap();
        assert_eq!(flow.state(), FlowState::Personal);
        assert_eq!(flow.error(), None);
        assert!(flow.submit_enabled());
    }

    #[tokio::test]
    async fn test_edits_rejected_after_redirect() {
        let flow = flow(ScriptedInitiator::default());
        flow.set_amount("25").unwrap();
        flow.advance().await.unwrap();
        flow.set_donor_name("Test Donor").unwrap();
        flow.set_donor_email("donor@example.com").unwrap();
        flow.submit().await.unwrap();

        assert_eq!(flow.state(), FlowState::Redirecting);
        assert!(matches!(
            flow.set_amount("50"),
            Err(DonaflowError::InvalidState {
                state: "redirecting",
                ..
            })
        ));
        assert_eq!(flow.back().unwrap(), FlowState::Redirecting);
        assert_eq!(flow.submit().await.unwrap(), SubmitOutcome::AlreadyRedirecting);
    }

    #[test]
    fn test_teardown_blocks_further_operations() {
        let flow = flow(ScriptedInitiator::default());
        flow.teardown();

        assert!(flow.is_torn_down());
        assert!(matches!(flow.set_amount("25"), Err(DonaflowError::TornDown)));
        assert!(matches!(flow.back(), Err(DonaflowError::TornDown)));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: FlowConfig = serde_json::from_str(r#"{"capture_redirect": true}"#).unwrap();
        assert!(config.capture_redirect);
        assert_eq!(config.preset_amounts.len(), 4);

        let config: FlowConfig = serde_json::from_str(r#"{"preset_amounts": [5, "7.50"]}"#).unwrap();
        assert_eq!(
            config.preset_amounts,
            vec![Decimal::from(5), Decimal::new(750, 2)]
        );
    }
}
