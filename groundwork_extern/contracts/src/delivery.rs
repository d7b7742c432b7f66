use std::future::Future;

use groundwork_models::enquiry::EnquiryRecord;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait DeliveryApiService: Send + Sync + 'static {
    /// Forwards a validated enquiry to the delivery endpoint in a single
    /// network request.
    fn submit(
        &self,
        access_key: &str,
        enquiry: &EnquiryRecord,
    ) -> impl Future<Output = anyhow::Result<DeliverySubmitResponse>> + Send;
}

/// Parsed success body of the delivery endpoint. Returned to the caller but
/// not otherwise inspected; a non-success HTTP status never reaches this
/// type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliverySubmitResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(feature = "mock")]
impl MockDeliveryApiService {
    pub fn with_submit(
        mut self,
        access_key: String,
        enquiry: EnquiryRecord,
        result: anyhow::Result<DeliverySubmitResponse>,
    ) -> Self {
        self.expect_submit()
            .once()
            .withf(move |key, enq| *key == access_key && *enq == enquiry)
            .return_once(move |_, _| Box::pin(std::future::ready(result)));
        self
    }
}
