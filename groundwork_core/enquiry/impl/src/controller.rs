use std::sync::Mutex;

use groundwork_core_enquiry_contracts::{
    EnquiryService, EnquirySubmitError, DELIVERY_FAILED_MESSAGE,
};
use groundwork_models::enquiry::{EnquiryField, RawEnquiry, SubmissionFailure, SubmissionStatus};
use tokio::sync::watch;

/// Drives the submission life cycle of a single enquiry form session.
///
/// The controller owns the session's raw input draft and its
/// [`SubmissionStatus`]; nothing else may mutate either. Presentation layers
/// observe status transitions through [`subscribe`](Self::subscribe) or poll
/// [`current_status`](Self::current_status), which keeps the state machine
/// independent of any rendering technology.
///
/// `Succeeded` is terminal for the session: a fresh enquiry starts with a
/// fresh controller. No timeout is enforced here; a hung gateway call keeps
/// the session in `Pending` until the transport gives up.
pub struct EnquiryFormController<Enquiry> {
    enquiry: Enquiry,
    status: watch::Sender<SubmissionStatus>,
    draft: Mutex<RawEnquiry>,
}

impl<Enquiry> EnquiryFormController<Enquiry>
where
    Enquiry: EnquiryService,
{
    pub fn new(enquiry: Enquiry) -> Self {
        Self {
            enquiry,
            status: watch::Sender::new(SubmissionStatus::Idle),
            draft: Mutex::default(),
        }
    }

    pub fn current_status(&self) -> SubmissionStatus {
        self.status.borrow().clone()
    }

    /// Subscribes to status transitions.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionStatus> {
        self.status.subscribe()
    }

    /// Returns a snapshot of the raw input draft.
    pub fn input(&self) -> RawEnquiry {
        self.draft.lock().unwrap().clone()
    }

    pub fn set_field(&self, field: EnquiryField, value: String) {
        let mut draft = self.draft.lock().unwrap();
        match field {
            EnquiryField::Name => draft.name = value,
            EnquiryField::Company => draft.company = value,
            EnquiryField::Email => draft.email = value,
            EnquiryField::Phone => draft.phone = value,
            EnquiryField::Postcode => draft.postcode = value,
            EnquiryField::Service => draft.service = value,
            EnquiryField::Message => draft.message = value,
            EnquiryField::Honeypot => draft.honeypot = value,
        }
    }

    /// Runs one submission attempt over the current draft and returns the
    /// resulting status.
    ///
    /// Entering the attempt replaces any previous failure with `Pending`. On
    /// success the draft is cleared; on failure it is preserved so the
    /// visitor can correct and resubmit. A submit while an attempt is
    /// already in flight is ignored: the returned status is `Pending` and
    /// neither the draft nor the in-flight attempt is affected.
    pub async fn submit(&self) -> SubmissionStatus {
        let raw = {
            // Status check and transition happen under the draft lock so two
            // concurrent submits cannot both enter flight.
            let draft = self.draft.lock().unwrap();
            if *self.status.borrow() == SubmissionStatus::Pending {
                return SubmissionStatus::Pending;
            }
            self.status.send_replace(SubmissionStatus::Pending);
            draft.clone()
        };

        let status = match self.enquiry.submit_enquiry(&raw).await {
            Ok(()) => {
                *self.draft.lock().unwrap() = RawEnquiry::default();
                SubmissionStatus::Succeeded
            }
            Err(EnquirySubmitError::Validation(errors)) => {
                SubmissionStatus::Failed(SubmissionFailure::Validation(errors))
            }
            Err(EnquirySubmitError::Unconfigured | EnquirySubmitError::Deliver(_)) => {
                SubmissionStatus::Failed(SubmissionFailure::Delivery(
                    DELIVERY_FAILED_MESSAGE.into(),
                ))
            }
        };
        self.status.send_replace(status.clone());
        status
    }
}
