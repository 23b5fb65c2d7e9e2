//! Legacy v1 benefits encoding, kept for integration suites that predate
//! the identity-and-eligibility contract.
//!
//! The v1 scheme keys everything off the first identifier letter: `E`
//! eligible, `I` ineligible, `P` pending, `D` no match. The two digits after
//! the prefix carry the child counts exactly as the v2 scheme does, minus
//! the "not encoded" sentinel.

use crate::engine::decoder::{DecodeError, EXCEPTION_NINO};
use crate::engine::request::is_legacy_well_formed;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BenefitsStatus {
    Eligible,
    Ineligible,
    Pending,
    #[serde(rename = "NOMATCH")]
    NoMatch,
}

impl BenefitsStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Eligible => "ELIGIBLE",
            Self::Ineligible => "INELIGIBLE",
            Self::Pending => "PENDING",
            Self::NoMatch => "NOMATCH",
        }
    }
}

/// Wire shape of the v1 endpoint. Child counts and the household identifier
/// are only present on eligible responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitsResponse {
    pub eligibility_status: BenefitsStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_children_under_one: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_children_under_four: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub household_identifier: Option<String>,
}

/// Decodes a legacy identifier into a benefits response. Shares the forced
/// fault identifier with the v2 engine; structural validation happens in
/// the transport adapter.
pub fn evaluate_benefits(nino: &str) -> Result<BenefitsResponse, DecodeError> {
    let normalized = nino.trim().to_ascii_uppercase();
    if normalized == EXCEPTION_NINO {
        return Err(DecodeError::ForcedFault(normalized));
    }
    if !is_legacy_well_formed(&normalized) {
        return Err(DecodeError::Malformed(normalized));
    }
    let bytes = normalized.as_bytes();

    let status = match bytes[0] {
        b'I' => BenefitsStatus::Ineligible,
        b'P' => BenefitsStatus::Pending,
        b'D' => BenefitsStatus::NoMatch,
        _ => BenefitsStatus::Eligible,
    };

    if status != BenefitsStatus::Eligible {
        return Ok(BenefitsResponse {
            eligibility_status: status,
            number_of_children_under_one: None,
            number_of_children_under_four: None,
            household_identifier: None,
        });
    }

    let under_four = bytes[3] - b'0';
    let under_one = (bytes[2] - b'0').min(under_four);
    Ok(BenefitsResponse {
        eligibility_status: BenefitsStatus::Eligible,
        number_of_children_under_one: Some(under_one),
        number_of_children_under_four: Some(under_four),
        household_identifier: Some(household_identifier(&normalized)),
    })
}

// Deterministic per identifier so repeated calls agree, but visibly
// synthetic.
fn household_identifier(nino: &str) -> String {
    format!("HH-{}", &nino[2..8])
}
