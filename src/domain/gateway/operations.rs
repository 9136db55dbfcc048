use super::error::GatewayError;
use super::in_flight::{InFlight, InFlightGuard};
use super::types::Envelope;
use super::validation::validate_action;
use crate::config::Config;
use crate::domain::toast::ToastKind;
use crate::platform::Platform;
use crate::ports::{NotifierPort, TransportPort};
use crate::time_it;
use serde::Serialize;
use std::sync::Arc;

/// Calls `POST {api_base}/{action}` and turns the envelope into a result,
/// reporting every outcome through the notifier.
pub struct Gateway {
    platform: Platform,
    config: Config,
    transport: Arc<dyn TransportPort>,
    notifier: Arc<dyn NotifierPort>,
    in_flight: InFlight,
}

impl Gateway {
    pub fn new(
        platform: Platform,
        config: Config,
        transport: Arc<dyn TransportPort>,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            platform,
            config,
            transport,
            notifier,
            in_flight: InFlight::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// True while at least one call is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_active()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.count()
    }

    /// Marks a call as in flight until the guard is dropped.
    ///
    /// Lets a caller flip `is_loading` before the call's future is first
    /// polled, then hand the guard to `call_with`.
    pub fn begin(&self) -> InFlightGuard {
        self.in_flight.enter()
    }

    pub async fn call<P>(&self, action: &str, payload: &P) -> Result<Envelope, GatewayError>
    where
        P: Serialize + ?Sized,
    {
        self.call_with(self.begin(), action, payload).await
    }

    /// Same as `call`, released through a guard taken earlier with `begin`.
    pub async fn call_with<P>(
        &self,
        _guard: InFlightGuard,
        action: &str,
        payload: &P,
    ) -> Result<Envelope, GatewayError>
    where
        P: Serialize + ?Sized,
    {
        let label = format!("api:{action}");

        let outcome = time_it!(&label, self.dispatch(action, payload).await);

        match outcome {
            Ok(envelope) => {
                let message = envelope
                    .message()
                    .unwrap_or(&self.config.success_message)
                    .to_string();
                self.platform
                    .logger()
                    .debug(&format!("{label} succeeded: {message}"));
                self.notifier
                    .show(ToastKind::Success, &message, self.config.toast_duration);
                Ok(envelope)
            }
            Err(err) => Err(self.report(err)),
        }
    }

    /// Shows an error toast for `err` unless one was already shown for it.
    pub fn report(&self, mut err: GatewayError) -> GatewayError {
        if !err.is_notified() {
            let message = err.message();
            self.platform.logger().error(&message);
            self.notifier
                .show(ToastKind::Error, &message, self.config.toast_duration);
            err.mark_notified();
        }
        err
    }

    async fn dispatch<P>(&self, action: &str, payload: &P) -> Result<Envelope, GatewayError>
    where
        P: Serialize + ?Sized,
    {
        validate_action(action)?;

        let body = serde_json::to_string(payload)
            .map_err(|e| GatewayError::invalid_payload(e.to_string()))?;

        let response = self
            .transport
            .post_json(&self.config.endpoint(action), body)
            .await?;

        let envelope = Envelope::parse(&response.body)
            .map_err(|e| GatewayError::decode(format!("HTTP {}: {}", response.status, e)))?;

        if envelope.ok {
            Ok(envelope)
        } else {
            let message = envelope
                .message()
                .unwrap_or(&self.config.failure_message)
                .to_string();
            Err(GatewayError::rejected(message, envelope))
        }
    }
}
