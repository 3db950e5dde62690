//! Account sign-up form.
//!
//! Validation is local and runs before the simulated submit; the submit
//! itself always succeeds.

use crate::shared::simulation::Delay;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Optional
    pub company: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_terms: bool,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignUpError {
    #[error("Please fill in all required fields.")]
    MissingRequiredFields,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Please accept the terms and conditions.")]
    TermsNotAccepted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpReceipt {
    pub display_name: String,
    pub email: String,
}

impl SignUpReceipt {
    pub const TITLE: &'static str = "Success";
    pub const DESCRIPTION: &'static str =
        "Account created successfully! Redirecting to dashboard...";
}

impl SignUpForm {
    /// Checks run in order; the first failure is reported.
    pub fn validate(&self) -> Result<(), SignUpError> {
        let required = [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.password,
        ];
        if required.iter().any(|field| field.is_empty()) {
            return Err(SignUpError::MissingRequiredFields);
        }
        if self.password != self.confirm_password {
            return Err(SignUpError::PasswordMismatch);
        }
        if !self.agree_terms {
            return Err(SignUpError::TermsNotAccepted);
        }
        Ok(())
    }
}

pub async fn submit_sign_up<D: Delay>(
    delay: &D,
    submit_ms: u32,
    form: &SignUpForm,
) -> Result<SignUpReceipt, SignUpError> {
    if let Err(e) = form.validate() {
        log::warn!("sign-up rejected: {}", e);
        return Err(e);
    }

    delay.wait(submit_ms).await;

    Ok(SignUpReceipt {
        display_name: format!("{} {}", form.first_name, form.last_name),
        email: form.email.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::simulation::testing::RecordingDelay;
    use futures::executor::block_on;

    fn valid_form() -> SignUpForm {
        SignUpForm {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john@company.com".into(),
            company: String::new(),
            password: "secret".into(),
            confirm_password: "secret".into(),
            agree_terms: true,
        }
    }

    #[test]
    fn test_password_mismatch_does_not_submit() {
        let delay = RecordingDelay::default();
        let form = SignUpForm {
            password: "a".into(),
            confirm_password: "b".into(),
            ..valid_form()
        };
        let result = block_on(submit_sign_up(&delay, 1500, &form));
        assert_eq!(result, Err(SignUpError::PasswordMismatch));
        assert!(delay.waits().is_empty());
    }

    #[test]
    fn test_valid_form_succeeds_after_delay() {
        let delay = RecordingDelay::default();
        let receipt = block_on(submit_sign_up(&delay, 1500, &valid_form())).unwrap();
        assert_eq!(receipt.display_name, "John Doe");
        assert_eq!(receipt.email, "john@company.com");
        assert_eq!(delay.total(), 1500);
    }

    #[test]
    fn test_validation_order() {
        let empty = SignUpForm::default();
        assert_eq!(empty.validate(), Err(SignUpError::MissingRequiredFields));

        let missing_email = SignUpForm {
            email: String::new(),
            confirm_password: "other".into(),
            ..valid_form()
        };
        assert_eq!(missing_email.validate(), Err(SignUpError::MissingRequiredFields));

        let mismatch_and_terms = SignUpForm {
            confirm_password: "other".into(),
            agree_terms: false,
            ..valid_form()
        };
        assert_eq!(mismatch_and_terms.validate(), Err(SignUpError::PasswordMismatch));

        let no_terms = SignUpForm {
            agree_terms: false,
            ..valid_form()
        };
        assert_eq!(no_terms.validate(), Err(SignUpError::TermsNotAccepted));
    }

    #[test]
    fn test_company_is_optional() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(SignUpError::PasswordMismatch.to_string(), "Passwords do not match.");
    }
}
