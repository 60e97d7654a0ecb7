//! State transitions for the donation wizard using the typestate pattern.
//!
//! ```text
//! Donation<AmountEntry> ──proceed()──> Donation<DonorDetails> ──submit()──> Donation<Submitting>
//!                       <───back()────                                           │
//!                                                                               ├──redirect()──> Donation<Redirecting>
//!                                                                               └──fail()──────> Donation<Failed>
//!
//! Donation<Failed> ──retry()──> Donation<Submitting>
//!                  ──edit()───> Donation<DonorDetails>
//!                  ──back()───> Donation<AmountEntry>
//! ```
//!
//! Guards never mutate the draft. A rejected transition hands the donation back
//! unchanged together with the [`ValidationError`] that stopped it.

use crate::checkout::CheckoutRequest;
use crate::domain::campaign::Campaign;
use crate::error::ValidationError;

use super::state::{
    AmountEntry, Donation, DonationDraft, DonationState, DonorDetails, Failed, Redirecting,
    Submitting,
};
use super::validation::{validate_amount, validate_donor};

/// A transition refused by its guard.
#[derive(Debug)]
pub struct Rejected<S: DonationState> {
    pub donation: Box<Donation<S>>,
    pub error: ValidationError,
}

impl<S: DonationState> Rejected<S> {
    fn new(donation: Donation<S>, error: ValidationError) -> Self {
        Self {
            donation: Box::new(donation),
            error,
        }
    }
}

/// Run every guard and build the checkout payload from a draft.
fn checkout_request(draft: &DonationDraft) -> Result<CheckoutRequest, ValidationError> {
    let amount = validate_amount(&draft.amount)?;
    validate_donor(&draft.donor_name, &draft.donor_email)?;
    Ok(CheckoutRequest {
        campaign_id: draft.campaign_id.clone(),
        amount,
        currency: draft.currency.clone(),
        donor_name: draft.donor_name.trim().to_string(),
        donor_email: draft.donor_email.trim().to_string(),
    })
}

impl Donation<AmountEntry> {
    /// Start a fresh donation for a campaign.
    pub fn new(campaign: &Campaign) -> Self {
        Donation {
            state: AmountEntry {},
            draft: DonationDraft::for_campaign(campaign),
        }
    }

    /// Move on to donor details once the amount is positive.
    pub fn proceed(self) -> Result<Donation<DonorDetails>, Rejected<AmountEntry>> {
        if let Err(error) = validate_amount(&self.draft.amount) {
            return Err(Rejected::new(self, error));
        }
        Ok(Donation {
            draft: self.draft,
            state: DonorDetails::default(),
        })
    }
}

impl Donation<DonorDetails> {
    pub fn back(self) -> Donation<AmountEntry> {
        Donation {
            draft: self.draft,
            state: AmountEntry {},
        }
    }

    /// Validate the draft and freeze it into a checkout request.
    pub fn submit(self) -> Result<Donation<Submitting>, Rejected<DonorDetails>> {
        let request = match checkout_request(&self.draft) {
            Ok(request) => request,
            Err(error) => return Err(Rejected::new(self, error)),
        };
        Ok(Donation {
            draft: self.draft,
            state: Submitting {
                request,
                attempt: self.state.attempts + 1,
                started_at: chrono::Utc::now(),
            },
        })
    }
}

impl Donation<Submitting> {
    pub fn redirect(self, redirect_url: url::Url) -> Donation<Redirecting> {
        Donation {
            draft: self.draft,
            state: Redirecting {
                redirect_url,
                attempt: self.state.attempt,
                started_at: self.state.started_at,
                redirected_at: chrono::Utc::now(),
            },
        }
    }

    pub fn fail(self, message: String, status: Option<u16>) -> Donation<Failed> {
        Donation {
            draft: self.draft,
            state: Failed {
                message,
                status,
                attempt: self.state.attempt,
                failed_at: chrono::Utc::now(),
            },
        }
    }
}

impl Donation<Failed> {
    /// Resubmit the same draft. Guards run again exactly as on first submit.
    pub fn retry(self) -> Result<Donation<Submitting>, Rejected<Failed>> {
        let request = match checkout_request(&self.draft) {
            Ok(request) => request,
            Err(error) => return Err(Rejected::new(self, error)),
        };
        Ok(Donation {
            draft: self.draft,
            state: Submitting {
                request,
                attempt: self.state.attempt + 1,
                started_at: chrono::Utc::now(),
            },
        })
    }

    /// Return to the details step, clearing the failure.
    pub fn edit(self) -> Donation<DonorDetails> {
        Donation {
            draft: self.draft,
            state: DonorDetails {
                attempts: self.state.attempt,
            },
        }
    }

    pub fn back(self) -> Donation<AmountEntry> {
        Donation {
            draft: self.draft,
            state: AmountEntry {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::campaign::CampaignId;
    use rust_decimal::Decimal;

    fn campaign() -> Campaign {
        Campaign {
            id: CampaignId::from("clean-water"),
            currency: "EUR".to_string(),
            target_amount: Decimal::from(10_000),
            active: true,
        }
    }

    fn with_details(amount: &str, name: &str, email: &str) -> Donation<DonorDetails> {
        let mut donation = Donation::new(&campaign());
        donation.draft.amount = amount.to_string();
        let mut details = donation.proceed().unwrap();
        details.draft.donor_name = name.to_string();
        details.draft.donor_email = email.to_string();
        details
    }

    #[test]
    fn test_new_donation_inherits_campaign() {
        let donation = Donation::new(&campaign());
        assert_eq!(donation.draft.campaign_id, CampaignId::from("clean-water"));
        assert_eq!(donation.draft.currency, "EUR");
        assert!(donation.draft.amount.is_empty());
    }

    #[test]
    fn test_proceed_rejects_empty_amount_without_mutation() {
        let donation = Donation::new(&campaign());
        let before = donation.draft.clone();

        let rejected = donation.proceed().unwrap_err();

        assert_eq!(rejected.error, ValidationError::InvalidAmount);
        assert_eq!(rejected.donation.draft, before);
    }

    #[test]
    fn test_submit_builds_request_from_draft() {
        let submitting = with_details("25", " Test Donor ", "donor@example.com")
            .submit()
            .unwrap();

        let request = &submitting.state.request;
        assert_eq!(request.campaign_id, CampaignId::from("clean-water"));
        assert_eq!(request.amount, Decimal::from(25));
        assert_eq!(request.currency, "EUR");
        assert_eq!(request.donor_name, "Test Donor");
        assert_eq!(request.donor_email, "donor@example.com");
        assert_eq!(submitting.state.attempt, 1);
    }

    #[test]
    fn test_submit_reports_first_failing_guard() {
        let missing = with_details("25", "", "invalid-email").submit().unwrap_err();
        assert_eq!(missing.error, ValidationError::MissingDonorDetails);

        let invalid = with_details("25", "Test Donor", "invalid-email")
            .submit()
            .unwrap_err();
        assert_eq!(invalid.error, ValidationError::InvalidEmail);
        assert_eq!(invalid.donation.draft.donor_email, "invalid-email");
    }

    #[test]
    fn test_submit_rechecks_amount() {
        let mut details = with_details("25", "Test Donor", "donor@example.com");
        details.draft.amount = "0".to_string();

        let rejected = details.submit().unwrap_err();
        assert_eq!(rejected.error, ValidationError::InvalidAmount);
    }

    #[test]
    fn test_failed_retry_sends_identical_request() {
        let submitting = with_details("25", "Test Donor", "donor@example.com")
            .submit()
            .unwrap();
        let first_request = submitting.state.request.clone();

        let failed = submitting.fail("server error".to_string(), Some(500));
        assert_eq!(failed.state.attempt, 1);
        assert_eq!(failed.state.status, Some(500));

        let retried = failed.retry().unwrap();
        assert_eq!(retried.state.request, first_request);
        assert_eq!(retried.state.attempt, 2);
    }

    #[test]
    fn test_back_and_forward_preserve_draft() {
        let details = with_details("40", "Test Donor", "donor@example.com");
        let before = details.draft.clone();

        let again = details.back().proceed().unwrap();
        assert_eq!(again.draft, before);
    }

    #[test]
    fn test_edit_after_failure_keeps_attempt_count() {
        let failed = with_details("25", "Test Donor", "donor@example.com")
            .submit()
            .unwrap()
            .fail("declined".to_string(), None);

        let details = failed.edit();
        assert_eq!(details.state.attempts, 1);
        assert_eq!(details.submit().unwrap().state.attempt, 2);
    }

    #[test]
    fn test_redirect_carries_url() {
        let url = url::Url::parse("https://example.com/stripe-checkout-mock").unwrap();
        let redirecting = with_details("25", "Test Donor", "donor@example.com")
            .submit()
            .unwrap()
            .redirect(url.clone());
        assert_eq!(redirecting.state.redirect_url, url);
    }
}
