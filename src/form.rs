use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error;

pub const CONFIRMATION: &str = "Thank you for requesting a home visit! I will contact you within 24 hours to schedule a convenient time for your child's assessment.";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all required fields")]
    MissingRequired,

    #[error("Please select at least one therapy service")]
    NoServiceSelected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
}

impl Field {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "Your email",
        }
    }
}

/// Decoration flags for a text input, mirroring its focus and fill state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldState {
    pub focused: bool,
    pub has_value: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub services: BTreeSet<String>,
}

impl FormData {
    /// Checks the submission rules in order, reporting the first one broken.
    ///
    /// # Errors
    /// `MissingRequired` when name or email is empty, otherwise
    /// `NoServiceSelected` when no service is picked.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.is_empty() || self.email.is_empty() {
            return Err(FormError::MissingRequired);
        }
        if self.services.is_empty() {
            return Err(FormError::NoServiceSelected);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct IntakeForm {
    pub data: FormData,
    name_state: FieldState,
    email_state: FieldState,
}

impl IntakeForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn field_state(&self, field: Field) -> FieldState {
        match field {
            Field::Name => self.name_state,
            Field::Email => self.email_state,
        }
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.data.name,
            Field::Email => &self.data.email,
        }
    }

    const fn state_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Name => &mut self.name_state,
            Field::Email => &mut self.email_state,
        }
    }

    const fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.data.name,
            Field::Email => &mut self.data.email,
        }
    }

    pub const fn focus(&mut self, field: Field) {
        self.state_mut(field).focused = true;
    }

    pub fn blur(&mut self, field: Field) {
        let has_value = !self.value(field).is_empty();
        let state = self.state_mut(field);
        state.focused = false;
        state.has_value = has_value;
    }

    fn changed(&mut self, field: Field) {
        let has_value = !self.value(field).is_empty();
        self.state_mut(field).has_value = has_value;
    }

    pub fn set_value(&mut self, field: Field, value: &str) {
        value.clone_into(self.value_mut(field));
        self.changed(field);
    }

    pub fn push_char(&mut self, field: Field, c: char) {
        self.value_mut(field).push(c);
        self.changed(field);
    }

    pub fn pop_char(&mut self, field: Field) {
        self.value_mut(field).pop();
        self.changed(field);
    }

    /// Adds the service when `checked`, removes it otherwise. Idempotent.
    pub fn set_service(&mut self, service: &str, checked: bool) {
        if checked {
            self.data.services.insert(service.to_string());
        } else {
            self.data.services.remove(service);
        }
    }

    pub fn toggle_service(&mut self, service: &str) {
        let checked = !self.data.services.contains(service);
        self.set_service(service, checked);
    }

    #[must_use]
    pub fn is_selected(&self, service: &str) -> bool {
        self.data.services.contains(service)
    }

    /// Validates and, on success, clears every field.
    ///
    /// # Errors
    /// Returns the first violated rule; the form is left untouched.
    pub fn submit(&mut self) -> Result<FormData, FormError> {
        match serde_json::to_string(&self.data) {
            Ok(json) => tracing::info!(form = %json, "form submitted"),
            Err(e) => tracing::warn!("could not serialise form: {e}"),
        }

        if let Err(e) = self.data.validate() {
            tracing::debug!(error = %e, "submission rejected");
            return Err(e);
        }

        let accepted = std::mem::take(&mut self.data);
        self.name_state = FieldState::default();
        self.email_state = FieldState::default();
        Ok(accepted)
    }
}
