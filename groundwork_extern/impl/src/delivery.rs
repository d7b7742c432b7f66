use std::sync::Arc;

use groundwork_extern_contracts::delivery::{DeliveryApiService, DeliverySubmitResponse};
use groundwork_models::enquiry::{
    EnquiryMessage, EnquiryName, EnquiryPhone, EnquiryRecord, Postcode, ServiceChoice,
};
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::HttpClient;

const SUBMIT_ENDPOINT: &str = "https://api.web3forms.com/submit";

#[derive(Debug, Clone)]
pub struct DeliveryApiServiceImpl {
    config: DeliveryApiServiceConfig,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct DeliveryApiServiceConfig {
    submit_endpoint: Arc<Url>,
}

impl DeliveryApiServiceConfig {
    pub fn new(submit_endpoint_override: Option<Url>) -> Self {
        Self {
            submit_endpoint: submit_endpoint_override
                .unwrap_or_else(|| SUBMIT_ENDPOINT.parse().unwrap())
                .into(),
        }
    }
}

impl DeliveryApiServiceImpl {
    pub fn new(config: DeliveryApiServiceConfig) -> Self {
        Self {
            config,
            client: HttpClient::default(),
        }
    }
}

impl DeliveryApiService for DeliveryApiServiceImpl {
    async fn submit(
        &self,
        access_key: &str,
        enquiry: &EnquiryRecord,
    ) -> anyhow::Result<DeliverySubmitResponse> {
        self.client
            .post((*self.config.submit_endpoint).clone())
            .header(ACCEPT, "application/json")
            .json(&SubmitRequest {
                access_key,
                name: &enquiry.name,
                company: &enquiry.company,
                email: enquiry.email.as_str(),
                phone: &enquiry.phone,
                postcode: &enquiry.postcode,
                service: &enquiry.service,
                message: &enquiry.message,
                from_name: &enquiry.name,
                subject: format!("New enquiry from {} - {}", *enquiry.name, *enquiry.service),
            })
            .send()
            .await?
            .error_for_status()?
            .json::<SubmitResponse>()
            .await
            .map(Into::into)
            .map_err(Into::into)
    }
}

#[derive(Serialize)]
struct SubmitRequest<'a> {
    access_key: &'a str,
    name: &'a EnquiryName,
    company: &'a str,
    email: &'a str,
    phone: &'a EnquiryPhone,
    postcode: &'a Postcode,
    service: &'a ServiceChoice,
    message: &'a EnquiryMessage,
    from_name: &'a EnquiryName,
    subject: String,
}

#[derive(Deserialize)]
struct SubmitResponse {
    success: bool,
    #[serde(default)]
    message: String,
}

impl From<SubmitResponse> for DeliverySubmitResponse {
    fn from(value: SubmitResponse) -> Self {
        Self {
            success: value.success,
            message: value.message,
        }
    }
}
