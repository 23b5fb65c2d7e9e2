use chrono::NaiveDate;
use smart_stub::engine::{
    evaluate_eligibility, DecodeError, EligibilityOutcome, EligibilityRequest,
    EligibilityResponse, IdentityOutcome, PersonRequest, QualifyingBenefits, VerificationOutcome,
    EXCEPTION_NINO,
};

const IDENTITY_MATCH_FAILED_NINO: &str = "XC123456A";
const IDENTITY_MATCHED_NOT_ELIGIBLE_NINO: &str = "MX123456A";
const ELIGIBILITY_CONFIRMED_NINO: &str = "MC999999A";
const CONFIRMED_PARTIAL_CHILDREN_MATCH_NINO: &str = "MC219999A";
const CONFIRMED_FULL_CHILDREN_MATCH_NINO: &str = "MC129999A";
const CONFIRMED_NO_CHILDREN_NINO: &str = "MC009999A";

fn evaluation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid evaluation date")
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn six_month_old() -> NaiveDate {
    date(2024, 12, 1)
}

fn three_year_old() -> NaiveDate {
    date(2022, 6, 1)
}

fn two_children() -> Vec<NaiveDate> {
    vec![six_month_old(), three_year_old()]
}

fn a_person(nino: &str, surname: &str) -> PersonRequest {
    PersonRequest {
        nino: nino.to_string(),
        surname: surname.to_string(),
        date_of_birth: Some(date(1985, 12, 31)),
        mobile_phone_number: Some("07700900000".to_string()),
        email_address: Some("lisa@simpson.com".to_string()),
        children_dobs: two_children(),
        pregnant_dependant_dob: None,
    }
}

fn a_request(person: PersonRequest) -> EligibilityRequest {
    EligibilityRequest {
        person,
        eligible_start_date: Some(date(2025, 2, 14)),
        eligible_end_date: Some(date(2025, 3, 1)),
        uc_monthly_income_threshold: Some(408.0),
    }
}

fn a_confirmed_response_with_matches(
    mobile: VerificationOutcome,
    email: VerificationOutcome,
    children: Vec<NaiveDate>,
) -> EligibilityResponse {
    EligibilityResponse {
        identity_status: IdentityOutcome::Matched,
        eligibility_status: EligibilityOutcome::Confirmed,
        qualifying_benefits: QualifyingBenefits::UniversalCredit,
        address_line_1_match: VerificationOutcome::Matched,
        postcode_match: VerificationOutcome::Matched,
        mobile_phone_match: mobile,
        email_address_match: email,
        pregnant_dependant_dob_match: VerificationOutcome::NotSupplied,
        dob_of_children_under_four: children,
    }
}

fn evaluate(person: PersonRequest) -> EligibilityResponse {
    evaluate_eligibility(&a_request(person), evaluation_date()).expect("scenario resolves")
}

#[test]
fn identity_match_failure_dominates_the_whole_response() {
    let person = a_person(IDENTITY_MATCH_FAILED_NINO, "MobileNotHeld");
    assert_eq!(evaluate(person), EligibilityResponse::identity_match_failed());
}

#[test]
fn identity_matched_but_eligibility_not_confirmed() {
    let response = evaluate(a_person(IDENTITY_MATCHED_NOT_ELIGIBLE_NINO, "Simpson"));
    assert_eq!(response.identity_status, IdentityOutcome::Matched);
    assert_eq!(
        response.eligibility_status,
        EligibilityOutcome::NotConfirmed
    );
    assert_eq!(response.qualifying_benefits, QualifyingBenefits::NotSet);
    assert!(response.dob_of_children_under_four.is_empty());
}

#[test]
fn address_sentinel_fails_only_the_address_line() {
    let response = evaluate(a_person(ELIGIBILITY_CONFIRMED_NINO, "AddressLineOneNotMatched"));
    assert_eq!(
        response.address_line_1_match,
        VerificationOutcome::NotMatched
    );
    assert_eq!(response.postcode_match, VerificationOutcome::Matched);
    assert_eq!(response.mobile_phone_match, VerificationOutcome::Matched);
    assert_eq!(response.email_address_match, VerificationOutcome::Matched);
}

#[test]
fn postcode_sentinel_fails_only_the_postcode() {
    let response = evaluate(a_person(ELIGIBILITY_CONFIRMED_NINO, "PostcodeNotMatched"));
    assert_eq!(response.postcode_match, VerificationOutcome::NotMatched);
    assert_eq!(response.address_line_1_match, VerificationOutcome::Matched);
}

#[test]
fn confirmed_with_all_matches_echoes_the_supplied_children() {
    let response = evaluate(a_person(ELIGIBILITY_CONFIRMED_NINO, "Simpson"));
    assert_eq!(
        response,
        a_confirmed_response_with_matches(
            VerificationOutcome::Matched,
            VerificationOutcome::Matched,
            two_children(),
        ),
    );
}

#[test]
fn partial_children_match_returns_only_the_encoded_subset() {
    let sentinel_cases = [
        (
            "MobileNotHeld",
            VerificationOutcome::NotHeld,
            VerificationOutcome::Matched,
        ),
        (
            "EmailNotHeld",
            VerificationOutcome::Matched,
            VerificationOutcome::NotHeld,
        ),
        (
            "MobileAndEmailNotHeld",
            VerificationOutcome::NotHeld,
            VerificationOutcome::NotHeld,
        ),
        (
            "MobileNotMatched",
            VerificationOutcome::NotMatched,
            VerificationOutcome::Matched,
        ),
        (
            "EmailNotMatched",
            VerificationOutcome::Matched,
            VerificationOutcome::NotMatched,
        ),
        (
            "MobileAndEmailNotMatched",
            VerificationOutcome::NotMatched,
            VerificationOutcome::NotMatched,
        ),
    ];

    for (surname, mobile, email) in sentinel_cases {
        let response = evaluate(a_person(CONFIRMED_PARTIAL_CHILDREN_MATCH_NINO, surname));
        assert_eq!(
            response,
            a_confirmed_response_with_matches(mobile, email, vec![six_month_old()]),
            "surname {surname}",
        );
    }
}

#[test]
fn full_children_match_generates_both_synthetic_dependants() {
    let response = evaluate(a_person(CONFIRMED_FULL_CHILDREN_MATCH_NINO, "Simpson"));
    assert_eq!(
        response,
        a_confirmed_response_with_matches(
            VerificationOutcome::Matched,
            VerificationOutcome::Matched,
            two_children(),
        ),
    );
}

#[test]
fn no_children_scenario_returns_an_empty_dependant_list() {
    let mut person = a_person(CONFIRMED_NO_CHILDREN_NINO, "Simpson");
    person.children_dobs = Vec::new();
    let response = evaluate(person);
    assert_eq!(response.eligibility_status, EligibilityOutcome::Confirmed);
    assert!(response.dob_of_children_under_four.is_empty());
}

#[test]
fn pregnant_woman_with_no_children_gets_the_reference_dependant() {
    let mut person = a_person(ELIGIBILITY_CONFIRMED_NINO, "Simpson");
    person.children_dobs = Vec::new();
    person.pregnant_dependant_dob = Some(date(2025, 9, 1));
    let response = evaluate(person);
    assert_eq!(
        response.pregnant_dependant_dob_match,
        VerificationOutcome::NotSet
    );
    assert_eq!(response.dob_of_children_under_four, vec![date(2019, 7, 1)]);
}

#[test]
fn confirmed_pregnant_woman_with_zero_encoded_children_gets_all_matches_and_no_dependants() {
    let mut person = a_person(CONFIRMED_NO_CHILDREN_NINO, "Simpson");
    person.children_dobs = Vec::new();
    person.pregnant_dependant_dob = Some(date(2025, 9, 1));
    let response = evaluate(person);
    assert_eq!(response.identity_status, IdentityOutcome::Matched);
    assert_eq!(response.eligibility_status, EligibilityOutcome::Confirmed);
    assert_eq!(response.address_line_1_match, VerificationOutcome::Matched);
    assert_eq!(response.mobile_phone_match, VerificationOutcome::Matched);
    assert_eq!(
        response.pregnant_dependant_dob_match,
        VerificationOutcome::NotSet
    );
    assert!(response.dob_of_children_under_four.is_empty());
}

#[test]
fn missing_mobile_is_not_supplied_whatever_the_surname() {
    for surname in ["Simpson", "MobileNotHeld", "MobileNotMatched"] {
        let mut person = a_person(CONFIRMED_FULL_CHILDREN_MATCH_NINO, surname);
        person.mobile_phone_number = None;
        let response = evaluate(person);
        assert_eq!(
            response.mobile_phone_match,
            VerificationOutcome::NotSupplied,
            "surname {surname}",
        );
    }
}

#[test]
fn missing_email_is_not_supplied_whatever_the_surname() {
    for surname in ["Simpson", "EmailNotHeld", "EmailNotMatched"] {
        let mut person = a_person(CONFIRMED_FULL_CHILDREN_MATCH_NINO, surname);
        person.email_address = None;
        let response = evaluate(person);
        assert_eq!(
            response.email_address_match,
            VerificationOutcome::NotSupplied,
            "surname {surname}",
        );
    }
}

#[test]
fn exception_nino_raises_a_forced_fault_naming_the_identifier() {
    let err = evaluate_eligibility(
        &a_request(a_person(EXCEPTION_NINO, "Simpson")),
        evaluation_date(),
    )
    .expect_err("forced fault");
    assert!(matches!(err, DecodeError::ForcedFault(_)));
    assert_eq!(
        err.to_string(),
        "NINO provided (XX999999D) has been configured to trigger an Exception",
    );
}

#[test]
fn evaluation_is_deterministic_for_identical_input() {
    let request = a_request(a_person(CONFIRMED_FULL_CHILDREN_MATCH_NINO, "Simpson"));
    let first = evaluate_eligibility(&request, evaluation_date()).expect("resolves");
    let second = evaluate_eligibility(&request, evaluation_date()).expect("resolves");
    assert_eq!(first, second);
}
