//! The decision engine: decode the identifier into a scenario, resolve the
//! verification outcomes, assemble the response.
//!
//! The engine holds no state between calls. Callers supply the evaluation
//! date so synthetic dependant birth dates stay "under one" / "under four"
//! regardless of when the stub runs, and so tests can pin the output.

pub mod assembler;
pub mod decoder;
pub mod request;
pub mod resolver;
pub mod response;

pub use decoder::{decode, ChildrenCounts, DecodeError, ScenarioCode, EXCEPTION_NINO};
pub use request::{EligibilityRequest, PersonRequest, ValidationError, NINO_PATTERN};
pub use response::{
    EligibilityOutcome, EligibilityResponse, IdentityOutcome, QualifyingBenefits,
    VerificationOutcome,
};
pub use resolver::ResolvedOutcome;

use chrono::NaiveDate;

/// Evaluates a single eligibility request against the scenario its
/// identifier encodes.
///
/// Errors only for the reserved fault-injection identifier and for
/// identifiers that should never have passed upstream validation; every
/// other well-formed request resolves to a deterministic response.
pub fn evaluate_eligibility(
    request: &EligibilityRequest,
    today: NaiveDate,
) -> Result<EligibilityResponse, DecodeError> {
    let code = decoder::decode(&request.person.nino)?;
    let outcome = resolver::resolve(&code, &request.person);
    Ok(assembler::assemble(&code, outcome, &request.person, today))
}
