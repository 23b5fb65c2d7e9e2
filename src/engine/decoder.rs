use super::response::{EligibilityOutcome, IdentityOutcome};
use thiserror::Error;

/// Identifier reserved to force the server-error path for fault-injection
/// tests. Checked before any other decoding.
pub const EXCEPTION_NINO: &str = "XX999999D";

/// Prefixes that decode to a failed identity match. Any other valid prefix
/// decodes to a match.
const IDENTITY_FAILED_PREFIXES: [&str; 2] = ["XC", "AB"];

/// Prefixes the NINO grammar reserves; identifiers carrying them are
/// structurally invalid.
const PREFIX_BLACKLIST: [&str; 7] = ["BG", "GB", "NK", "KN", "TN", "NT", "ZZ"];

/// Digit value meaning "no child count encoded in this identifier".
const COUNT_NOT_ENCODED: u8 = 9;

/// Scenario selector decoded from a single identifier. Never re-parsed
/// downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioCode {
    pub identity: IdentityOutcome,
    pub eligibility: EligibilityOutcome,
    pub children: Option<ChildrenCounts>,
}

/// Child counts carried in the identifier's leading digits. A child under
/// one is also under four, so `under_one` never exceeds `under_four`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildrenCounts {
    pub under_one: u8,
    pub under_four: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The designated fault-injection identifier was supplied. Deliberate
    /// test hook, never recovered locally.
    #[error("NINO provided ({0}) has been configured to trigger an Exception")]
    ForcedFault(String),
    /// The identifier fails the structural pattern. Upstream validation
    /// should have rejected it; the engine refuses to guess a scenario.
    #[error("NINO provided ({0}) does not match the required pattern")]
    Malformed(String),
}

/// Checks the identifier against the structural NINO pattern:
/// two prefix letters (first not in DFIQUV, second additionally not O,
/// pair not blacklisted), six digits, suffix A-D. Case-insensitive.
pub fn is_well_formed(nino: &str) -> bool {
    let upper = nino.trim().to_ascii_uppercase();
    let bytes = upper.as_bytes();
    if bytes.len() != 9 {
        return false;
    }
    let first = bytes[0];
    let second = bytes[1];
    if !first.is_ascii_uppercase() || b"DFIQUV".contains(&first) {
        return false;
    }
    if !second.is_ascii_uppercase() || b"DFIQUVO".contains(&second) {
        return false;
    }
    if PREFIX_BLACKLIST.contains(&&upper[..2]) {
        return false;
    }
    if !bytes[2..8].iter().all(u8::is_ascii_digit) {
        return false;
    }
    matches!(bytes[8], b'A'..=b'D')
}

/// Decodes an identifier into its scenario selector.
///
/// The two-letter prefix picks the identity outcome, the second prefix
/// letter the eligibility outcome, and the first two digits the child
/// counts (digit 9 meaning "not encoded").
pub fn decode(nino: &str) -> Result<ScenarioCode, DecodeError> {
    let normalized = nino.trim().to_ascii_uppercase();
    if normalized == EXCEPTION_NINO {
        return Err(DecodeError::ForcedFault(normalized));
    }
    if !is_well_formed(&normalized) {
        return Err(DecodeError::Malformed(normalized));
    }

    let bytes = normalized.as_bytes();
    let identity = if IDENTITY_FAILED_PREFIXES.contains(&&normalized[..2]) {
        IdentityOutcome::NotMatched
    } else {
        IdentityOutcome::Matched
    };
    let eligibility = match bytes[1] {
        b'P' => EligibilityOutcome::Pending,
        b'X' => EligibilityOutcome::NotConfirmed,
        _ => EligibilityOutcome::Confirmed,
    };

    let under_one = bytes[2] - b'0';
    let under_four = bytes[3] - b'0';
    let children = if under_one == COUNT_NOT_ENCODED || under_four == COUNT_NOT_ENCODED {
        None
    } else {
        Some(ChildrenCounts {
            under_one: under_one.min(under_four),
            under_four,
        })
    };

    Ok(ScenarioCode {
        identity,
        eligibility,
        children,
    })
}
