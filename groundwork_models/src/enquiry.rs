use std::collections::BTreeMap;

use email_address::EmailAddress;
use nutype::nutype;
use serde::{Deserialize, Serialize};

/// Raw form input exactly as entered by the visitor.
///
/// Fields the visitor never touched are empty strings. The `honeypot` field
/// is invisible to human users and stays empty in any legitimate submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEnquiry {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub postcode: String,
    pub service: String,
    pub message: String,
    pub honeypot: String,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EnquiryField {
    Name,
    Company,
    Email,
    Phone,
    Postcode,
    Service,
    Message,
    Honeypot,
}

impl EnquiryField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Company => "company",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Postcode => "postcode",
            Self::Service => "service",
            Self::Message => "message",
            Self::Honeypot => "honeypot",
        }
    }
}

impl std::fmt::Display for EnquiryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One human-readable message per violated field constraint.
pub type FieldErrors = BTreeMap<EnquiryField, String>;

#[nutype(
    validate(len_char_min = 2),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct EnquiryName(String);

#[nutype(
    validate(len_char_min = 10),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct EnquiryPhone(String);

#[nutype(
    validate(len_char_min = 3),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct Postcode(String);

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ServiceChoice(String);

#[nutype(
    validate(len_char_min = 10, len_char_max = 1000),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct EnquiryMessage(String);

/// A fully validated enquiry. An instance exists only if every field
/// constraint held simultaneously at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnquiryRecord {
    pub name: EnquiryName,
    pub company: String,
    pub email: EmailAddress,
    pub phone: EnquiryPhone,
    pub postcode: Postcode,
    pub service: ServiceChoice,
    pub message: EnquiryMessage,
}

impl EnquiryRecord {
    /// Validates raw form input against the enquiry schema.
    ///
    /// Every field constraint is checked independently, so the returned
    /// [`FieldErrors`] contains one message for each violated field rather
    /// than just the first. A non-empty honeypot counts as an ordinary
    /// validation error, giving automated clients no signal that they were
    /// specifically detected.
    ///
    /// Values are not trimmed before length checks.
    pub fn validate(raw: &RawEnquiry) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = EnquiryName::try_new(raw.name.clone())
            .inspect_err(|_| {
                errors.insert(
                    EnquiryField::Name,
                    "Name must be at least 2 characters".into(),
                );
            })
            .ok();

        let email = raw
            .email
            .parse::<EmailAddress>()
            .inspect_err(|_| {
                errors.insert(
                    EnquiryField::Email,
                    "Please enter a valid email address".into(),
                );
            })
            .ok();

        let phone = EnquiryPhone::try_new(raw.phone.clone())
            .inspect_err(|_| {
                errors.insert(
                    EnquiryField::Phone,
                    "Please enter a valid phone number".into(),
                );
            })
            .ok();

        let postcode = Postcode::try_new(raw.postcode.clone())
            .inspect_err(|_| {
                errors.insert(EnquiryField::Postcode, "Please enter your postcode".into());
            })
            .ok();

        let service = ServiceChoice::try_new(raw.service.clone())
            .inspect_err(|_| {
                errors.insert(EnquiryField::Service, "Please select a service".into());
            })
            .ok();

        let message = match EnquiryMessage::try_new(raw.message.clone()) {
            Ok(message) => Some(message),
            Err(EnquiryMessageError::LenCharMinViolated) => {
                errors.insert(
                    EnquiryField::Message,
                    "Message must be at least 10 characters".into(),
                );
                None
            }
            Err(EnquiryMessageError::LenCharMaxViolated) => {
                errors.insert(
                    EnquiryField::Message,
                    "Message must be less than 1000 characters".into(),
                );
                None
            }
        };

        if !raw.honeypot.is_empty() {
            errors.insert(EnquiryField::Honeypot, "Bot detected".into());
        }

        let (Some(name), Some(email), Some(phone), Some(postcode), Some(service), Some(message)) =
            (name, email, phone, postcode, service, message)
        else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            name,
            company: raw.company.clone(),
            email,
            phone,
            postcode,
            service,
            message,
        })
    }
}

/// Life cycle of one enquiry submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(SubmissionFailure),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionFailure {
    /// One or more field constraints were violated. The submission never
    /// left the client.
    Validation(FieldErrors),
    /// Delivery failed. Carries only the generic user-facing message; the
    /// underlying cause is logged, not shown.
    Delivery(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn valid_raw() -> RawEnquiry {
        RawEnquiry {
            name: "Jo Smith".into(),
            company: "".into(),
            email: "jo@example.com".into(),
            phone: "01234567890".into(),
            postcode: "PR1 1AA".into(),
            service: "Fencing".into(),
            message: "Need 200m of stock fencing replaced.".into(),
            honeypot: "".into(),
        }
    }

    #[test]
    fn validate_ok() {
        let record = EnquiryRecord::validate(&valid_raw()).unwrap();

        assert_eq!(*record.name, "Jo Smith");
        assert_eq!(record.company, "");
        assert_eq!(record.email.as_str(), "jo@example.com");
        assert_eq!(*record.phone, "01234567890");
        assert_eq!(*record.postcode, "PR1 1AA");
        assert_eq!(*record.service, "Fencing");
        assert_eq!(*record.message, "Need 200m of stock fencing replaced.");
    }

    #[test]
    fn validate_invalid_email() {
        let raw = RawEnquiry {
            email: "not-an-email".into(),
            ..valid_raw()
        };

        let errors = EnquiryRecord::validate(&raw).unwrap_err();

        assert_eq!(
            errors,
            FieldErrors::from([(
                EnquiryField::Email,
                "Please enter a valid email address".into()
            )])
        );
    }

    #[test]
    fn validate_honeypot_tripped() {
        let raw = RawEnquiry {
            honeypot: "spam".into(),
            ..valid_raw()
        };

        let errors = EnquiryRecord::validate(&raw).unwrap_err();

        assert_eq!(
            errors,
            FieldErrors::from([(EnquiryField::Honeypot, "Bot detected".into())])
        );
    }

    #[test]
    fn validate_honeypot_dominates_invalid_fields() {
        let raw = RawEnquiry {
            honeypot: "spam".into(),
            ..RawEnquiry::default()
        };

        let errors = EnquiryRecord::validate(&raw).unwrap_err();

        assert!(errors.contains_key(&EnquiryField::Honeypot));
        assert!(!errors.is_empty());
    }

    #[test]
    fn validate_message_boundaries() {
        for (len, ok) in [(9, false), (10, true), (1000, true), (1001, false)] {
            let raw = RawEnquiry {
                message: "x".repeat(len),
                ..valid_raw()
            };

            let result = EnquiryRecord::validate(&raw);

            assert_eq!(
                result.is_ok(),
                ok,
                "message of {len} characters should {}",
                if ok { "pass" } else { "fail" }
            );
            if !ok {
                assert!(result.unwrap_err().contains_key(&EnquiryField::Message));
            }
        }
    }

    #[test]
    fn validate_collects_all_errors() {
        let errors = EnquiryRecord::validate(&RawEnquiry::default()).unwrap_err();

        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            vec![
                EnquiryField::Name,
                EnquiryField::Email,
                EnquiryField::Phone,
                EnquiryField::Postcode,
                EnquiryField::Service,
                EnquiryField::Message,
            ]
        );
    }

    #[test]
    fn validate_does_not_trim_whitespace() {
        // Length checks apply to the raw string. A whitespace-only name of
        // sufficient length passes; flagged in DESIGN.md for product sign-off.
        let raw = RawEnquiry {
            name: "  ".into(),
            ..valid_raw()
        };

        EnquiryRecord::validate(&raw).unwrap();
    }

    #[test]
    fn validate_missing_company_is_ok() {
        let raw = RawEnquiry {
            company: "".into(),
            ..valid_raw()
        };

        assert_eq!(EnquiryRecord::validate(&raw).unwrap().company, "");
    }
}
