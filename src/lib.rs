//! Donation checkout flow for campaign pages.
//!
//! This crate provides a [`DonationFlow`] that walks a donor through choosing an
//! amount, entering their details and starting checkout. Each forward step is
//! guarded by validation, and a successful checkout hands the payment page URL to a
//! [`RedirectBoundary`]. Campaign details and checkout sessions come from any
//! [`CampaignLookup`] / [`CheckoutInitiator`]; REST-backed implementations
//! built on [`HttpClient`] are included.

pub mod checkout;
pub mod config;
pub mod domain;
pub mod error;
pub mod flow;
pub mod http;
pub mod redirect;

// Re-export commonly used types
pub use checkout::{CheckoutInitiator, CheckoutRequest, CheckoutSession, HttpCheckoutInitiator};
pub use config::ApiConfig;
pub use domain::campaign::{Campaign, CampaignId, CampaignLookup, HttpCampaignLookup};
pub use domain::donation::{
    AnyDonation, Donation, DonationDraft, FlowId, FlowState, Step, SubmissionState,
};
pub use error::{DonaflowError, Result, ValidationError};
pub use flow::{DonationFlow, FlowConfig, FlowSnapshot, SubmitOutcome};
pub use http::{HttpClient, HttpRequest, HttpResponse, MockHttpClient, ReqwestHttpClient};
pub use redirect::{ChannelRedirect, RedirectBoundary};
