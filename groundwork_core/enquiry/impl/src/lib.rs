use std::sync::Arc;

use groundwork_core_enquiry_contracts::{EnquiryService, EnquirySubmitError};
use groundwork_extern_contracts::delivery::DeliveryApiService;
use groundwork_models::enquiry::{EnquiryRecord, RawEnquiry};
use tracing::{error, warn};

pub mod controller;

#[derive(Debug, Clone)]
pub struct EnquiryServiceImpl<DeliveryApi> {
    delivery_api: DeliveryApi,
    config: EnquiryServiceConfig,
}

#[derive(Debug, Clone)]
pub struct EnquiryServiceConfig {
    pub access_key: Option<Arc<str>>,
}

impl<DeliveryApi> EnquiryServiceImpl<DeliveryApi> {
    pub fn new(delivery_api: DeliveryApi, config: EnquiryServiceConfig) -> Self {
        Self {
            delivery_api,
            config,
        }
    }
}

impl<DeliveryApi> EnquiryService for EnquiryServiceImpl<DeliveryApi>
where
    DeliveryApi: DeliveryApiService,
{
    async fn submit_enquiry(&self, raw: &RawEnquiry) -> Result<(), EnquirySubmitError> {
        let enquiry = EnquiryRecord::validate(raw).map_err(EnquirySubmitError::Validation)?;

        // Fail closed: no key, no network call.
        let Some(access_key) = self.config.access_key.as_deref() else {
            warn!("Delivery gateway access key is not configured, rejecting enquiry");
            return Err(EnquirySubmitError::Unconfigured);
        };

        if let Err(err) = self.delivery_api.submit(access_key, &enquiry).await {
            error!("Failed to deliver enquiry: {err:#}");
            return Err(EnquirySubmitError::Deliver(err));
        }

        Ok(())
    }
}
