//! Simulated account-creation submission.
//!
//! Stands in for the real signup endpoint: the whole form is validated,
//! then a fixed delay elapses and the call fails with a configurable
//! probability. At most one submission may be in flight at a time.

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use tokio::sync::{Semaphore, mpsc};
use tokio_util::sync::CancellationToken;

use crate::form::{FormErrors, validate_form};

/// Tunables for the simulated signup call.
#[derive(Debug, Clone)]
pub struct SubmitConfig {
    pub delay: Duration,
    /// Probability in `[0, 1]` that the call fails with a timeout.
    pub failure_probability: f64,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(1500),
            failure_probability: 0.1,
        }
    }
}

#[derive(Error, Debug)]
pub enum SubmitError {
    /// The form failed validation; displays as the banner text.
    #[error("{0}")]
    Invalid(FormErrors),
    #[error("a submission is already in progress")]
    AlreadyPending,
    #[error("Connection timeout")]
    ConnectionTimeout,
    #[error("submission cancelled")]
    Cancelled,
}

/// Runs simulated signup calls, serializing them so at most one is in
/// flight.
pub struct Submitter {
    config: SubmitConfig,
    in_flight: Semaphore,
}

impl Submitter {
    pub fn new(config: SubmitConfig) -> Self {
        Self {
            config,
            in_flight: Semaphore::new(1),
        }
    }

    /// Validates the form, then runs the simulated signup call.
    ///
    /// An invalid form fails fast without occupying the in-flight slot.
    /// Duplicate calls while one submission is pending fail with
    /// [`SubmitError::AlreadyPending`]. The optional token is checked
    /// before and after the simulated delay.
    pub async fn submit(
        &self,
        email: &str,
        password: &SecretString,
        confirm_password: &SecretString,
        token: Option<CancellationToken>,
    ) -> Result<(), SubmitError> {
        let errors = validate_form(email, password, confirm_password);
        if !errors.is_valid() {
            return Err(SubmitError::Invalid(errors));
        }

        let Ok(_permit) = self.in_flight.try_acquire() else {
            return Err(SubmitError::AlreadyPending);
        };

        #[cfg(feature = "tracing")]
        tracing::info!("submission is about to start...");

        if let Some(ref token) = token {
            if token.is_cancelled() {
                return Err(SubmitError::Cancelled);
            }
        }

        tokio::time::sleep(self.config.delay).await;

        if token.as_ref().is_some_and(|t| t.is_cancelled()) {
            return Err(SubmitError::Cancelled);
        }

        if rand::random::<f64>() < self.config.failure_probability {
            #[cfg(feature = "tracing")]
            tracing::warn!("simulated signup call failed");
            return Err(SubmitError::ConnectionTimeout);
        }

        Ok(())
    }

    /// Variant that sends the submission outcome via channel.
    pub async fn submit_tx(
        &self,
        email: &str,
        password: &SecretString,
        confirm_password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<Result<(), SubmitError>>,
    ) {
        let outcome = self
            .submit(email, password, confirm_password, Some(token))
            .await;

        if let Err(e) = tx.send(outcome).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send submission outcome: {}", e);
            let _ = e;
        }
    }
}

impl Default for Submitter {
    fn default() -> Self {
        Self::new(SubmitConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::sync::Arc;

    const VALID_EMAIL: &str = "user@example.com";

    fn valid_password() -> SecretString {
        SecretString::new("Str0ng!Passw0rd".to_string().into())
    }

    fn submitter_with(failure_probability: f64) -> Submitter {
        Submitter::new(SubmitConfig {
            delay: Duration::from_millis(1500),
            failure_probability,
        })
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_submit_success() {
        crate::blacklist::reset_blacklist_for_testing();

        let submitter = submitter_with(0.0);
        let result = submitter
            .submit(VALID_EMAIL, &valid_password(), &valid_password(), None)
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_submit_simulated_failure() {
        crate::blacklist::reset_blacklist_for_testing();

        let submitter = submitter_with(1.0);
        let result = submitter
            .submit(VALID_EMAIL, &valid_password(), &valid_password(), None)
            .await;
        assert!(matches!(result, Err(SubmitError::ConnectionTimeout)));
    }

    #[tokio::test]
    #[serial]
    async fn test_submit_invalid_form_fails_fast() {
        crate::blacklist::reset_blacklist_for_testing();

        let submitter = submitter_with(0.0);
        let empty = SecretString::new("".to_string().into());
        let result = submitter.submit("", &empty, &empty, None).await;

        match result {
            Err(SubmitError::Invalid(errors)) => {
                assert!(!errors.is_valid());
                assert_eq!(
                    errors.banner_message().unwrap(),
                    "Email address is required. Password is required. Please confirm your password"
                );
            }
            other => panic!("Expected Invalid error, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_submit_cancelled() {
        crate::blacklist::reset_blacklist_for_testing();

        let token = CancellationToken::new();
        token.cancel();

        let submitter = submitter_with(0.0);
        let result = submitter
            .submit(VALID_EMAIL, &valid_password(), &valid_password(), Some(token))
            .await;
        assert!(matches!(result, Err(SubmitError::Cancelled)));
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_duplicate_submission_rejected() {
        crate::blacklist::reset_blacklist_for_testing();

        let submitter = Arc::new(submitter_with(0.0));
        let first = {
            let submitter = Arc::clone(&submitter);
            tokio::spawn(async move {
                submitter
                    .submit(VALID_EMAIL, &valid_password(), &valid_password(), None)
                    .await
            })
        };
        // Let the first submission reach its delay and take the slot
        tokio::task::yield_now().await;

        let second = submitter
            .submit(VALID_EMAIL, &valid_password(), &valid_password(), None)
            .await;
        assert!(matches!(second, Err(SubmitError::AlreadyPending)));

        let first = first.await.expect("first submission panicked");
        assert!(first.is_ok());
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_slot_released_after_completion() {
        crate::blacklist::reset_blacklist_for_testing();

        let submitter = submitter_with(0.0);
        for _ in 0..2 {
            let result = submitter
                .submit(VALID_EMAIL, &valid_password(), &valid_password(), None)
                .await;
            assert!(result.is_ok());
        }
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_submit_tx_delivers_outcome() {
        crate::blacklist::reset_blacklist_for_testing();

        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let submitter = submitter_with(0.0);
        submitter
            .submit_tx(VALID_EMAIL, &valid_password(), &valid_password(), token, tx)
            .await;

        let outcome = rx.recv().await.expect("Should receive outcome");
        assert!(outcome.is_ok());
    }
}
