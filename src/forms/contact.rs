//! The contact form.

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::forms::booking::CONNECTION_ALERT;
use crate::render::sink::RenderSink;
use crate::types::contact::ContactRequest;
use log::warn;

/// State of the contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> ContactForm {
        ContactForm::default()
    }

    /// Submits the message. Acceptance alerts a thank-you and clears the
    /// form; a rejection or transport failure alerts and leaves the form
    /// populated. Returns whether the message was accepted.
    pub async fn submit<S: RenderSink>(&mut self, api: &ApiClient, sink: &mut S) -> bool {
        let request = ContactRequest {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        };
        match api.send_contact(&request).await {
            Ok(()) => {
                sink.alert("Mensaje enviado. ¡Gracias!");
                self.reset();
                true
            }
            Err(ApiError::Rejected { .. }) => {
                sink.alert("Error al enviar mensaje");
                false
            }
            Err(error) => {
                warn!("Contact submission failed: {}", error);
                sink.alert(CONNECTION_ALERT);
                false
            }
        }
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        *self = ContactForm::default();
    }
}
