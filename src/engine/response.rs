use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether the stub reports the claimed identity as present in its
/// (simulated) records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdentityOutcome {
    Matched,
    NotMatched,
}

impl IdentityOutcome {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Matched => "MATCHED",
            Self::NotMatched => "NOT_MATCHED",
        }
    }
}

/// Terminal eligibility state for the claim. `NotSet` is only ever reported
/// when the identity match failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EligibilityOutcome {
    Confirmed,
    NotConfirmed,
    Pending,
    NotSet,
}

impl EligibilityOutcome {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "CONFIRMED",
            Self::NotConfirmed => "NOT_CONFIRMED",
            Self::Pending => "PENDING",
            Self::NotSet => "NOT_SET",
        }
    }
}

/// Per-channel verification result for address, postcode, mobile, email and
/// the pregnant-dependant due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationOutcome {
    Matched,
    NotMatched,
    NotHeld,
    NotSupplied,
    NotSet,
}

impl VerificationOutcome {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Matched => "MATCHED",
            Self::NotMatched => "NOT_MATCHED",
            Self::NotHeld => "NOT_HELD",
            Self::NotSupplied => "NOT_SUPPLIED",
            Self::NotSet => "NOT_SET",
        }
    }
}

/// The benefit stream backing a confirmed eligibility decision. The stub
/// only ever simulates Universal Credit claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QualifyingBenefits {
    UniversalCredit,
    NotSet,
}

/// Wire shape returned by the v2 endpoint. Field names follow the upstream
/// DWP contract, hence the camelCase keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResponse {
    pub identity_status: IdentityOutcome,
    pub eligibility_status: EligibilityOutcome,
    pub qualifying_benefits: QualifyingBenefits,
    pub address_line_1_match: VerificationOutcome,
    pub postcode_match: VerificationOutcome,
    pub mobile_phone_match: VerificationOutcome,
    pub email_address_match: VerificationOutcome,
    pub pregnant_dependant_dob_match: VerificationOutcome,
    pub dob_of_children_under_four: Vec<NaiveDate>,
}

impl EligibilityResponse {
    /// Response for a failed identity match: every downstream field is
    /// NOT_SET and the dependant list is empty.
    pub fn identity_match_failed() -> Self {
        Self {
            identity_status: IdentityOutcome::NotMatched,
            eligibility_status: EligibilityOutcome::NotSet,
            qualifying_benefits: QualifyingBenefits::NotSet,
            address_line_1_match: VerificationOutcome::NotSet,
            postcode_match: VerificationOutcome::NotSet,
            mobile_phone_match: VerificationOutcome::NotSet,
            email_address_match: VerificationOutcome::NotSet,
            pregnant_dependant_dob_match: VerificationOutcome::NotSet,
            dob_of_children_under_four: Vec::new(),
        }
    }
}
