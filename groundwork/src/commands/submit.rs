use clap::Args;
use groundwork_config::Config;
use groundwork_core_enquiry_impl::{
    controller::EnquiryFormController, EnquiryServiceConfig, EnquiryServiceImpl,
};
use groundwork_extern_impl::delivery::{DeliveryApiServiceConfig, DeliveryApiServiceImpl};
use groundwork_models::enquiry::{EnquiryField, SubmissionFailure, SubmissionStatus};

/// Drives one full enquiry form session from the command line.
#[derive(Debug, Args)]
pub struct SubmitCommand {
    #[arg(long)]
    name: String,
    #[arg(long, default_value = "")]
    company: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    postcode: String,
    /// A catalog offering title, or "Other"
    #[arg(long)]
    service: String,
    #[arg(long)]
    message: String,
}

impl SubmitCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let delivery_api = DeliveryApiServiceImpl::new(DeliveryApiServiceConfig::new(
            config.delivery.endpoint_override,
        ));
        let enquiry = EnquiryServiceImpl::new(
            delivery_api,
            EnquiryServiceConfig {
                access_key: config.delivery.access_key.map(Into::into),
            },
        );

        let controller = EnquiryFormController::new(enquiry);
        controller.set_field(EnquiryField::Name, self.name);
        controller.set_field(EnquiryField::Company, self.company);
        controller.set_field(EnquiryField::Email, self.email);
        controller.set_field(EnquiryField::Phone, self.phone);
        controller.set_field(EnquiryField::Postcode, self.postcode);
        controller.set_field(EnquiryField::Service, self.service);
        controller.set_field(EnquiryField::Message, self.message);

        match controller.submit().await {
            SubmissionStatus::Succeeded => {
                println!("Enquiry sent.");
                Ok(())
            }
            SubmissionStatus::Failed(SubmissionFailure::Validation(errors)) => {
                for (field, message) in &errors {
                    eprintln!("{field}: {message}");
                }
                anyhow::bail!("Enquiry rejected by validation")
            }
            SubmissionStatus::Failed(SubmissionFailure::Delivery(message)) => {
                anyhow::bail!("{message}")
            }
            status @ (SubmissionStatus::Idle | SubmissionStatus::Pending) => {
                unreachable!("submit resolved to {status:?}")
            }
        }
    }
}
