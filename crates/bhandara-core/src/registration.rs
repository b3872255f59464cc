//! New-location registration handoff.
//!
//! Nothing is submitted anywhere: the form is turned into a plain-text email
//! draft and a `mailto:` URL that the visitor's own mail client opens. Delivery
//! is never observed.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Location};
use crate::CoreError;

/// Delay between handing the draft to the mail client and showing the
/// confirmation.
pub const SUBMIT_SETTLE_DELAY: Duration = Duration::from_secs(1);
/// How long the confirmation stays up before the form resets and closes.
pub const CONFIRMATION_DISPLAY: Duration = Duration::from_secs(2);

const SITE_NAME: &str = "Khaiyye Nahh...";

/// Characters `encodeURIComponent` leaves untouched.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Absent fields deserialize as blank and are caught by [`RegistrationForm::validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub name: String,
    /// Street or area within the city.
    pub location: String,
    pub city: String,
    pub timing: String,
    pub description: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
}

impl RegistrationForm {
    /// Names of required fields left blank, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let required = [
            ("name", self.name.as_str()),
            ("type", self.category.as_str()),
            ("location", self.location.as_str()),
            ("city", self.city.as_str()),
            ("timing", self.timing.as_str()),
            ("description", self.description.as_str()),
            ("contact_name", self.contact_name.as_str()),
            ("contact_email", self.contact_email.as_str()),
        ];

        required
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    /// # Errors
    ///
    /// Returns [`CoreError::MissingFields`] listing every blank required field.
    pub fn validate(&self) -> Result<(), CoreError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::MissingFields(missing))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MailDraft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    /// Build the email draft for a registration.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingFields`] if the form is incomplete.
    pub fn compose(form: &RegistrationForm, recipient: &str) -> Result<Self, CoreError> {
        form.validate()?;

        let subject = format!("New Bhandara Registration: {}", form.name);
        let body = format!(
            "New Bhandara Registration Request\n\
             \n\
             Bhandara Details:\n\
             - Name: {name}\n\
             - Location: {location}\n\
             - City: {city}\n\
             - Timing: {timing}\n\
             - Type: {category}\n\
             - Description: {description}\n\
             \n\
             Contact Information:\n\
             - Contact Name: {contact_name}\n\
             - Email: {contact_email}\n\
             - Phone: {contact_phone}\n\
             \n\
             Submitted via {SITE_NAME} website",
            name = form.name,
            location = form.location,
            city = form.city,
            timing = form.timing,
            category = form.category,
            description = form.description,
            contact_name = form.contact_name,
            contact_email = form.contact_email,
            contact_phone = form.contact_phone.as_deref().unwrap_or_default(),
        );

        Ok(Self {
            recipient: recipient.to_string(),
            subject,
            body,
        })
    }

    #[must_use]
    pub fn mailto_url(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            utf8_percent_encode(&self.subject, COMPONENT),
            utf8_percent_encode(&self.body, COMPONENT),
        )
    }
}

/// Map search URL that opens turn-by-turn directions to a location.
#[must_use]
pub fn directions_url(location: &Location) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={},{}",
        location.lat, location.lng
    )
}

#[cfg(test)]
mod tests {
    use percent_encoding::percent_decode_str;

    use super::*;
    use crate::test_support::location;

    fn complete_form() -> RegistrationForm {
        RegistrationForm {
            name: "Shivaji Park Bhandara".to_string(),
            location: "Shivaji Park, Dadar".to_string(),
            city: "Mumbai".to_string(),
            timing: "Sundays 12 PM".to_string(),
            description: "Khichdi & kadhi for 200 people".to_string(),
            category: Category::CommunityBhandara,
            contact_name: "Asha Patil".to_string(),
            contact_email: "asha@example.org".to_string(),
            contact_phone: None,
        }
    }

    #[test]
    fn complete_form_validates() {
        assert!(complete_form().validate().is_ok());
    }

    #[test]
    fn blank_required_fields_are_reported_in_order() {
        let form = RegistrationForm {
            city: "  ".to_string(),
            contact_email: String::new(),
            ..complete_form()
        };
        let err = form.validate().unwrap_err();
        assert!(
            matches!(err, CoreError::MissingFields(ref f) if f == &vec!["city", "contact_email"]),
            "got {err:?}"
        );
    }

    #[test]
    fn phone_is_optional() {
        let form = RegistrationForm {
            contact_phone: None,
            ..complete_form()
        };
        assert!(form.missing_fields().is_empty());
    }

    #[test]
    fn default_form_reports_every_required_field() {
        let missing = RegistrationForm::default().missing_fields();
        assert_eq!(missing.len(), 7);
        assert!(!missing.contains(&"type"));
    }

    #[test]
    fn compose_builds_subject_and_body() {
        let draft = MailDraft::compose(&complete_form(), "desk@example.org").expect("draft");
        assert_eq!(draft.subject, "New Bhandara Registration: Shivaji Park Bhandara");
        assert!(draft.body.starts_with("New Bhandara Registration Request\n\nBhandara Details:\n"));
        assert!(draft.body.contains("- Type: Community Bhandara\n"));
        assert!(draft.body.contains("- Phone: \n"));
        assert!(draft.body.ends_with("Submitted via Khaiyye Nahh... website"));
    }

    #[test]
    fn compose_refuses_incomplete_form() {
        let result = MailDraft::compose(&RegistrationForm::default(), "desk@example.org");
        assert!(matches!(result, Err(CoreError::MissingFields(_))));
    }

    #[test]
    fn mailto_url_encodes_like_encode_uri_component() {
        let draft = MailDraft::compose(&complete_form(), "desk@example.org").expect("draft");
        let url = draft.mailto_url();

        assert!(url.starts_with(
            "mailto:desk@example.org?subject=New%20Bhandara%20Registration%3A%20Shivaji%20Park%20Bhandara&body="
        ));
        assert!(url.contains("Khichdi%20%26%20kadhi"));
        assert!(url.contains("%0A"));
        assert!(url.contains("Khaiyye%20Nahh..."));

        let encoded_body = url.split("&body=").nth(1).expect("body param");
        let decoded = percent_decode_str(encoded_body)
            .decode_utf8()
            .expect("utf8");
        assert_eq!(decoded, draft.body);
    }

    #[test]
    fn directions_url_points_at_coordinates() {
        let loc = location(1, "Siddhivinayak", "Mumbai", 19.0169, 72.8301);
        assert_eq!(
            directions_url(&loc),
            "https://www.google.com/maps/search/?api=1&query=19.0169,72.8301"
        );
    }
}
