use super::decoder::{ChildrenCounts, ScenarioCode};
use super::request::PersonRequest;
use super::resolver::ResolvedOutcome;
use super::response::{EligibilityOutcome, EligibilityResponse, IdentityOutcome};
use chrono::{Datelike, Months, NaiveDate};

/// Birth date returned for the "pregnant woman, no children yet" scenario.
/// A fixed reference value the contract tests assert against literally.
fn pregnant_reference_dob() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 7, 1).expect("valid reference date")
}

/// Builds the full wire response from the resolved outcome enums plus the
/// dependant-matching rules.
pub fn assemble(
    code: &ScenarioCode,
    outcome: ResolvedOutcome,
    person: &PersonRequest,
    today: NaiveDate,
) -> EligibilityResponse {
    if outcome.identity == IdentityOutcome::NotMatched {
        return EligibilityResponse::identity_match_failed();
    }

    EligibilityResponse {
        identity_status: outcome.identity,
        eligibility_status: outcome.eligibility,
        qualifying_benefits: outcome.qualifying_benefits,
        address_line_1_match: outcome.address_line_1,
        postcode_match: outcome.postcode,
        mobile_phone_match: outcome.mobile,
        email_address_match: outcome.email,
        pregnant_dependant_dob_match: outcome.pregnant_dependant_dob,
        dob_of_children_under_four: matched_dependants(code, &outcome, person, today),
    }
}

/// Dependant matching. Encoded counts win over whatever the request
/// supplied, which is how the contract tests stage partial matches
/// ("claimed two children, DWP only confirms one").
fn matched_dependants(
    code: &ScenarioCode,
    outcome: &ResolvedOutcome,
    person: &PersonRequest,
    today: NaiveDate,
) -> Vec<NaiveDate> {
    if outcome.eligibility != EligibilityOutcome::Confirmed {
        return Vec::new();
    }

    match code.children {
        Some(counts) => synthetic_children(counts, today),
        None if person.children_dobs.is_empty() => match person.pregnant_dependant_dob {
            Some(_) => vec![pregnant_reference_dob()],
            None => Vec::new(),
        },
        None => person.children_dobs.clone(),
    }
}

/// Generates `under_four` synthetic birth dates: the under-one children six
/// months before `today`, the remainder three years before, both snapped to
/// the first of the month so the ages hold for a whole month of test runs.
fn synthetic_children(counts: ChildrenCounts, today: NaiveDate) -> Vec<NaiveDate> {
    let six_months_old = start_of_month_before(today, 6);
    let three_years_old = start_of_month_before(today, 36);

    let mut dobs = Vec::with_capacity(counts.under_four as usize);
    for _ in 0..counts.under_one {
        dobs.push(six_months_old);
    }
    for _ in counts.under_one..counts.under_four {
        dobs.push(three_years_old);
    }
    dobs
}

fn start_of_month_before(today: NaiveDate, months: u32) -> NaiveDate {
    today
        .checked_sub_months(Months::new(months))
        .and_then(|date| date.with_day(1))
        .unwrap_or(today)
}
