use super::decoder;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pattern quoted back to callers when an identifier fails validation. The
/// engine enforces the same rules with explicit character checks.
pub const NINO_PATTERN: &str =
    "^(?!BG|GB|NK|KN|TN|NT|ZZ)[A-CEGHJ-PR-TW-Z][A-CEGHJ-NPR-TW-Z](\\d{6})[A-D]$";

/// Laxer pattern accepted by the legacy v1 endpoint, which predates the
/// prefix restrictions.
pub const LEGACY_NINO_PATTERN: &str = "^[A-Z]{2}(\\d{6})[A-D]$";

/// Top-level request body shared by both endpoints. The claim window and
/// income threshold ride along from the caller but do not influence the
/// stubbed decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityRequest {
    pub person: PersonRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligible_start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligible_end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uc_monthly_income_threshold: Option<f64>,
}

/// The person being checked. The identifier carries the scenario selector;
/// the surname may carry a sentinel value forcing individual verification
/// channels off the happy path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRequest {
    pub nino: String,
    pub surname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children_dobs: Vec<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pregnant_dependant_dob: Option<NaiveDate>,
}

/// Rejection raised by the transport adapter before the engine runs. Names
/// the offending field and the rule it violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl PersonRequest {
    /// Validation applied ahead of the v2 engine: surname present, NINO
    /// matching the full structural pattern.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_surname()?;
        if !decoder::is_well_formed(&self.nino) {
            return Err(ValidationError {
                field: "person.nino",
                message: format!("must match \"{NINO_PATTERN}\""),
            });
        }
        Ok(())
    }

    /// Validation applied ahead of the legacy v1 encoder, which accepts any
    /// two-letter prefix.
    pub fn validate_legacy(&self) -> Result<(), ValidationError> {
        self.validate_surname()?;
        if !is_legacy_well_formed(&self.nino) {
            return Err(ValidationError {
                field: "person.nino",
                message: format!("must match \"{LEGACY_NINO_PATTERN}\""),
            });
        }
        Ok(())
    }

    fn validate_surname(&self) -> Result<(), ValidationError> {
        if self.surname.trim().is_empty() {
            return Err(ValidationError {
                field: "person.surname",
                message: "must not be blank".to_string(),
            });
        }
        Ok(())
    }
}

pub(crate) fn is_legacy_well_formed(nino: &str) -> bool {
    let upper = nino.trim().to_ascii_uppercase();
    let bytes = upper.as_bytes();
    bytes.len() == 9
        && bytes[..2].iter().all(u8::is_ascii_uppercase)
        && bytes[2..8].iter().all(u8::is_ascii_digit)
        && matches!(bytes[8], b'A'..=b'D')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(nino: &str) -> PersonRequest {
        PersonRequest {
            nino: nino.to_string(),
            surname: "Simpson".to_string(),
            date_of_birth: None,
            mobile_phone_number: None,
            email_address: None,
            children_dobs: Vec::new(),
            pregnant_dependant_dob: None,
        }
    }

    #[test]
    fn accepts_a_structurally_valid_person() {
        assert_eq!(person("MC123456A").validate(), Ok(()));
    }

    #[test]
    fn exception_nino_passes_validation_so_the_engine_can_fault() {
        assert_eq!(person("XX999999D").validate(), Ok(()));
    }

    #[test]
    fn rejects_an_invalid_nino_naming_field_and_pattern() {
        let err = person("ab123").validate().expect_err("invalid nino");
        assert_eq!(err.field, "person.nino");
        assert!(err.message.contains(NINO_PATTERN));
    }

    #[test]
    fn rejects_a_blank_surname() {
        let mut request = person("MC123456A");
        request.surname = "  ".to_string();
        let err = request.validate().expect_err("blank surname");
        assert_eq!(err.field, "person.surname");
    }

    #[test]
    fn legacy_validation_accepts_reserved_first_letters() {
        assert_eq!(person("DA000000C").validate_legacy(), Ok(()));
        assert!(person("DA000000C").validate().is_err());
    }

    #[test]
    fn request_round_trips_with_camel_case_keys() {
        let body = serde_json::json!({
            "person": {
                "nino": "MC123456A",
                "surname": "Simpson",
                "mobilePhoneNumber": "07700900000",
                "childrenDobs": ["2024-12-01"],
            },
            "eligibleStartDate": "2025-02-14",
        });
        let request: EligibilityRequest = serde_json::from_value(body).expect("deserializes");
        assert_eq!(request.person.nino, "MC123456A");
        assert_eq!(request.person.children_dobs.len(), 1);
        assert!(request.eligible_start_date.is_some());
        assert!(request.uc_monthly_income_threshold.is_none());
    }
}
