// ============================================================================
// CARGO FORM VIEWMODEL - Add-cargo form + mock submission state machine
// ============================================================================

use chrono::NaiveDate;
use crate::config::DelayConfig;
use crate::errors::ValidationError;
use crate::models::{CargoCategory, Priority, StorageRequirement};
use crate::routes::Route;

pub const MIN_QUANTITY: u8 = 1;
pub const MAX_QUANTITY: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CargoForm {
    pub name: String,
    pub category: Option<CargoCategory>,
    pub quantity: u8,
    pub priority: Priority,
    pub description: String,
    pub expiration_date: Option<NaiveDate>,
    pub storage: Option<StorageRequirement>,
    pub image_attached: bool,
}

impl Default for CargoForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: None,
            quantity: MIN_QUANTITY,
            priority: Priority::default(),
            description: String::new(),
            expiration_date: None,
            storage: None,
            image_attached: false,
        }
    }
}

impl CargoForm {
    /// Slider input; out-of-range values are pulled back into 1..=50
    pub fn set_quantity(&mut self, value: i64) {
        self.quantity = value.clamp(MIN_QUANTITY as i64, MAX_QUANTITY as i64) as u8;
    }

    /// `<input type="date">` value; anything unparsable clears the field
    pub fn set_expiration(&mut self, raw: &str) {
        self.expiration_date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok();
    }

    /// Required fields only. Optional fields are carried untouched.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingRequiredField("name"));
        }
        if self.category.is_none() {
            return Err(ValidationError::MissingRequiredField("category"));
        }
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&self.quantity) {
            return Err(ValidationError::MissingRequiredField("quantity"));
        }
        Ok(())
    }
}

/// Form plus where it is in the mock submission
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CargoSubmission {
    pub form: CargoForm,
    pub phase: SubmissionPhase,
    pub error: Option<ValidationError>,
}

impl CargoSubmission {
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Processing..."
        } else {
            "Add to Inventory"
        }
    }

    /// Validate and enter `Submitting`. A second call while submitting is ignored.
    pub fn submit(&mut self) -> Result<(), ValidationError> {
        if self.phase != SubmissionPhase::Editing {
            return Ok(());
        }
        match self.form.validate() {
            Ok(()) => {
                self.error = None;
                self.phase = SubmissionPhase::Submitting;
                log::info!("📦 [CARGO] Submitting {} x{}", self.form.name, self.form.quantity);
                Ok(())
            }
            Err(e) => {
                log::warn!("⚠️ [CARGO] {}", e);
                self.error = Some(e);
                Err(e)
            }
        }
    }

    /// The mock request always succeeds
    pub fn complete(&mut self) {
        if self.phase == SubmissionPhase::Submitting {
            self.phase = SubmissionPhase::Succeeded;
            log::info!("✅ [CARGO] {} added to inventory", self.form.name);
        }
    }

    /// Where to go, and after how many ms, once the success card is showing
    pub fn redirect_after_success(&self, delays: &DelayConfig) -> Option<(Route, u32)> {
        match self.phase {
            SubmissionPhase::Succeeded => Some((Route::Dashboard, delays.success_redirect_ms)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, category: CargoCategory, quantity: u8) -> CargoSubmission {
        CargoSubmission {
            form: CargoForm {
                name: name.to_string(),
                category: Some(category),
                quantity,
                ..CargoForm::default()
            },
            ..CargoSubmission::default()
        }
    }

    #[test]
    fn empty_name_is_rejected_and_stays_editing() {
        let mut submission = filled("", CargoCategory::Consumables, 1);
        assert_eq!(submission.submit(), Err(ValidationError::MissingRequiredField("name")));
        assert_eq!(submission.phase, SubmissionPhase::Editing);
        assert!(submission.error.is_some());
    }

    #[test]
    fn missing_category_is_rejected() {
        let mut submission = CargoSubmission::default();
        submission.form.name = "O2 Tanks".to_string();
        assert_eq!(submission.submit(), Err(ValidationError::MissingRequiredField("category")));
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let mut submission = filled("O2 Tanks", CargoCategory::Equipment, 0);
        assert_eq!(submission.submit(), Err(ValidationError::MissingRequiredField("quantity")));
    }

    #[test]
    fn valid_form_goes_submitting_then_succeeded() {
        let mut submission = filled("O2 Tanks", CargoCategory::Equipment, 5);
        assert_eq!(submission.submit(), Ok(()));
        assert!(submission.is_submitting());
        assert_eq!(submission.submit_label(), "Processing...");

        // Duplicate submit while pending changes nothing
        assert_eq!(submission.submit(), Ok(()));
        assert!(submission.is_submitting());

        submission.complete();
        assert_eq!(submission.phase, SubmissionPhase::Succeeded);
        assert_eq!(
            submission.redirect_after_success(&DelayConfig::default()),
            Some((Route::Dashboard, 2000))
        );
    }

    #[test]
    fn no_redirect_before_success() {
        let delays = DelayConfig::default();
        let mut submission = filled("O2 Tanks", CargoCategory::Equipment, 5);
        assert_eq!(submission.redirect_after_success(&delays), None);
        submission.submit().unwrap();
        assert_eq!(submission.redirect_after_success(&delays), None);

        let mut rejected = filled("", CargoCategory::Equipment, 5);
        assert!(rejected.submit().is_err());
        assert_eq!(rejected.redirect_after_success(&delays), None);
    }

    #[test]
    fn complete_without_submit_is_ignored() {
        let mut submission = filled("O2 Tanks", CargoCategory::Equipment, 5);
        submission.complete();
        assert_eq!(submission.phase, SubmissionPhase::Editing);
    }

    #[test]
    fn quantity_slider_is_clamped() {
        let mut form = CargoForm::default();
        assert_eq!(form.quantity, 1);
        form.set_quantity(80);
        assert_eq!(form.quantity, 50);
        form.set_quantity(-3);
        assert_eq!(form.quantity, 1);
    }

    #[test]
    fn expiration_date_parses_html_date_values() {
        let mut form = CargoForm::default();
        form.set_expiration("2025-04-30");
        assert_eq!(form.expiration_date, NaiveDate::from_ymd_opt(2025, 4, 30));
        form.set_expiration("");
        assert_eq!(form.expiration_date, None);
    }

    #[test]
    fn optional_fields_are_not_validated() {
        let mut submission = filled("Seeds", CargoCategory::Experiments, 3);
        submission.form.description = String::new();
        submission.form.storage = None;
        assert_eq!(submission.submit(), Ok(()));
    }
}
