use super::decoder::ScenarioCode;
use super::request::PersonRequest;
use super::response::{
    EligibilityOutcome, IdentityOutcome, QualifyingBenefits, VerificationOutcome,
};

/// Per-channel overrides a sentinel surname forces onto an otherwise
/// fully-matched response. `None` leaves the channel at its default.
#[derive(Debug, Clone, Copy)]
struct SentinelOverride {
    address_line_1: Option<VerificationOutcome>,
    postcode: Option<VerificationOutcome>,
    mobile: Option<VerificationOutcome>,
    email: Option<VerificationOutcome>,
}

const NO_OVERRIDE: SentinelOverride = SentinelOverride {
    address_line_1: None,
    postcode: None,
    mobile: None,
    email: None,
};

/// Sentinel surnames reserved by the contract tests. Each entry flips
/// exactly the channels it names and leaves the rest untouched, so tests
/// can exercise every channel combination through the surname alone.
const SENTINEL_SURNAMES: [(&str, SentinelOverride); 8] = [
    (
        "AddressLineOneNotMatched",
        SentinelOverride {
            address_line_1: Some(VerificationOutcome::NotMatched),
            ..NO_OVERRIDE
        },
    ),
    (
        "PostcodeNotMatched",
        SentinelOverride {
            postcode: Some(VerificationOutcome::NotMatched),
            ..NO_OVERRIDE
        },
    ),
    (
        "MobileNotMatched",
        SentinelOverride {
            mobile: Some(VerificationOutcome::NotMatched),
            ..NO_OVERRIDE
        },
    ),
    (
        "EmailNotMatched",
        SentinelOverride {
            email: Some(VerificationOutcome::NotMatched),
            ..NO_OVERRIDE
        },
    ),
    (
        "MobileAndEmailNotMatched",
        SentinelOverride {
            mobile: Some(VerificationOutcome::NotMatched),
            email: Some(VerificationOutcome::NotMatched),
            ..NO_OVERRIDE
        },
    ),
    (
        "MobileNotHeld",
        SentinelOverride {
            mobile: Some(VerificationOutcome::NotHeld),
            ..NO_OVERRIDE
        },
    ),
    (
        "EmailNotHeld",
        SentinelOverride {
            email: Some(VerificationOutcome::NotHeld),
            ..NO_OVERRIDE
        },
    ),
    (
        "MobileAndEmailNotHeld",
        SentinelOverride {
            mobile: Some(VerificationOutcome::NotHeld),
            email: Some(VerificationOutcome::NotHeld),
            ..NO_OVERRIDE
        },
    ),
];

/// Outcome enums for one request, before the dependant list is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedOutcome {
    pub identity: IdentityOutcome,
    pub eligibility: EligibilityOutcome,
    pub qualifying_benefits: QualifyingBenefits,
    pub address_line_1: VerificationOutcome,
    pub postcode: VerificationOutcome,
    pub mobile: VerificationOutcome,
    pub email: VerificationOutcome,
    pub pregnant_dependant_dob: VerificationOutcome,
}

impl ResolvedOutcome {
    /// A failed identity match dominates everything downstream.
    pub fn identity_match_failed() -> Self {
        Self {
            identity: IdentityOutcome::NotMatched,
            eligibility: EligibilityOutcome::NotSet,
            qualifying_benefits: QualifyingBenefits::NotSet,
            address_line_1: VerificationOutcome::NotSet,
            postcode: VerificationOutcome::NotSet,
            mobile: VerificationOutcome::NotSet,
            email: VerificationOutcome::NotSet,
            pregnant_dependant_dob: VerificationOutcome::NotSet,
        }
    }
}

/// Applies the decoded scenario plus the surname/mobile/email special
/// values. Pure and total: unknown surnames simply match everything.
pub fn resolve(code: &ScenarioCode, person: &PersonRequest) -> ResolvedOutcome {
    if code.identity == IdentityOutcome::NotMatched {
        return ResolvedOutcome::identity_match_failed();
    }

    let overrides = sentinel_override(&person.surname);
    let qualifying_benefits = if code.eligibility == EligibilityOutcome::Confirmed {
        QualifyingBenefits::UniversalCredit
    } else {
        QualifyingBenefits::NotSet
    };

    ResolvedOutcome {
        identity: IdentityOutcome::Matched,
        eligibility: code.eligibility,
        qualifying_benefits,
        address_line_1: overrides
            .address_line_1
            .unwrap_or(VerificationOutcome::Matched),
        postcode: overrides.postcode.unwrap_or(VerificationOutcome::Matched),
        mobile: channel_outcome(person.mobile_phone_number.as_deref(), overrides.mobile),
        email: channel_outcome(person.email_address.as_deref(), overrides.email),
        // A supplied due date feeds the dependant rules but is never
        // verified: the stub holds no record to check it against.
        pregnant_dependant_dob: match person.pregnant_dependant_dob {
            Some(_) => VerificationOutcome::NotSet,
            None => VerificationOutcome::NotSupplied,
        },
    }
}

fn sentinel_override(surname: &str) -> SentinelOverride {
    let trimmed = surname.trim();
    SENTINEL_SURNAMES
        .iter()
        .find(|(sentinel, _)| sentinel.eq_ignore_ascii_case(trimmed))
        .map(|(_, overrides)| *overrides)
        .unwrap_or(NO_OVERRIDE)
}

/// Absent channels are NOT_SUPPLIED regardless of any sentinel; present
/// channels fall back to MATCHED when no sentinel names them.
fn channel_outcome(
    value: Option<&str>,
    sentinel: Option<VerificationOutcome>,
) -> VerificationOutcome {
    match value.filter(|supplied| !supplied.trim().is_empty()) {
        None => VerificationOutcome::NotSupplied,
        Some(_) => sentinel.unwrap_or(VerificationOutcome::Matched),
    }
}
