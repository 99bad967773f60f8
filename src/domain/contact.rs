use thiserror::Error;

/// Draft of the consultation form. Submission stays client-side; a valid
/// request only triggers a confirmation toast and a form reset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("please tell us your name")]
    MissingName,
    #[error("'{0}' does not look like an email address")]
    InvalidEmail(String),
    #[error("please add a short note about your project")]
    MissingMessage,
}

impl ContactRequest {
    /// Checks the draft before "submission". Company is optional.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.trim().to_string()));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }
}

fn looks_like_email(candidate: &str) -> bool {
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ContactRequest {
        ContactRequest {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            company: String::new(),
            message: "We want to automate claim processing.".to_string(),
        }
    }

    #[test]
    fn complete_draft_passes() {
        assert_eq!(draft().validate(), Ok(()));
    }

    #[test]
    fn company_is_optional() {
        let mut request = draft();
        request.company = String::new();
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut request = draft();
        request.name = "   ".to_string();
        assert_eq!(request.validate(), Err(ContactError::MissingName));
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for bad in ["", "ada", "ada@", "@example.com", "ada@localhost", "ada@.com", "ada@com."] {
            let mut request = draft();
            request.email = bad.to_string();
            assert!(
                matches!(request.validate(), Err(ContactError::InvalidEmail(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn empty_message_is_rejected() {
        let mut request = draft();
        request.message = String::new();
        assert_eq!(request.validate(), Err(ContactError::MissingMessage));
    }
}
