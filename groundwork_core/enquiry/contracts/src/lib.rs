use std::future::Future;

use groundwork_models::enquiry::{FieldErrors, RawEnquiry};
use thiserror::Error;

/// Message shown to the visitor whenever delivery fails, regardless of the
/// underlying cause. Configuration and transport failures are deliberately
/// indistinguishable to the end user.
pub const DELIVERY_FAILED_MESSAGE: &str =
    "Failed to send message. Please try again or contact us directly.";

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EnquiryService: Send + Sync + 'static {
    /// Validates raw form input and forwards the resulting enquiry to the
    /// delivery gateway.
    fn submit_enquiry(
        &self,
        raw: &RawEnquiry,
    ) -> impl Future<Output = Result<(), EnquirySubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum EnquirySubmitError {
    #[error("One or more fields are invalid.")]
    Validation(FieldErrors),
    #[error("The delivery gateway access key is not configured.")]
    Unconfigured,
    #[error("Failed to deliver the enquiry.")]
    Deliver(#[source] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockEnquiryService {
    pub fn with_submit_enquiry(
        mut self,
        raw: RawEnquiry,
        result: Result<(), EnquirySubmitError>,
    ) -> Self {
        self.expect_submit_enquiry()
            .once()
            .withf(move |r| *r == raw)
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
