use latihan::calculator::{
    CalculatorInput, ClaimCategory, LevyEstimate, ACCOMMODATION_ADDON_PER_PAX_DAY,
    MEALS_ADDON_PER_PAX_DAY,
};

fn base_input() -> CalculatorInput {
    CalculatorInput {
        employees: 50,
        average_basic_salary: 3_500.0,
        average_fixed_allowance: 500.0,
        category: ClaimCategory::PublicProgram,
        training_days: 2,
        participants: 20,
        course_fee: 20_000.0,
        include_meals: false,
        include_accommodation: false,
    }
}

#[test]
fn worked_example_from_the_levy_guidelines() {
    // 50 employees at RM3,500 basic + RM500 allowance contribute RM2,000 a
    // month, RM24,000 a year; a RM20,000 public programme over two days is
    // claimable up to RM16,000.
    let estimate = LevyEstimate::compute(&base_input());

    assert_eq!(estimate.monthly_levy, 2_000.0);
    assert_eq!(estimate.annual_levy, 24_000.0);
    assert_eq!(estimate.claimable_course_fee, 16_000.0);
}

#[test]
fn course_fee_clamp_holds_across_all_schemes() {
    for category in ClaimCategory::ordered() {
        let mut input = base_input();
        input.category = category;
        input.training_days = 3;
        input.course_fee = 1_000_000.0;

        let estimate = LevyEstimate::compute(&input);
        assert_eq!(
            estimate.claimable_course_fee,
            category.course_fee_cap_per_day() * 3.0,
            "scheme {}",
            category.slug()
        );
    }
}

#[test]
fn addons_raise_the_per_pax_base_but_total_stays_clamped() {
    let mut with_addons = base_input();
    with_addons.include_meals = true;
    with_addons.include_accommodation = true;

    let plain = LevyEstimate::compute(&base_input());
    let boosted = LevyEstimate::compute(&with_addons);

    // both add-ons together add exactly RM200 per pax per day before the
    // participant/day multiplication
    assert_eq!(
        MEALS_ADDON_PER_PAX_DAY + ACCOMMODATION_ADDON_PER_PAX_DAY,
        200.0
    );
    // the grand total is clamped back to cap * participants * days, so the
    // boosted allowance cannot exceed the plain one
    assert_eq!(boosted.claimable_allowance, plain.claimable_allowance);
    assert_eq!(
        plain.claimable_allowance,
        ClaimCategory::PublicProgram.allowance_cap_per_pax_day() * 20.0 * 2.0
    );
}

#[test]
fn net_payout_is_ninety_six_percent_for_any_total() {
    for participants in [0_u32, 1, 7, 35] {
        let mut input = base_input();
        input.participants = participants;
        let estimate = LevyEstimate::compute(&input);
        let expected = estimate.total_claimable * 0.96;
        assert!(
            (estimate.net_after_service_fee - expected).abs() < 1e-9,
            "participants={participants}"
        );
    }
}

#[test]
fn calculator_input_deserializes_from_form_payload() {
    let input: CalculatorInput = serde_json::from_str(
        r#"{
            "employees": 120,
            "average_basic_salary": 2800,
            "category": "in-house",
            "training_days": 1,
            "participants": 30,
            "course_fee": 15000,
            "include_meals": true
        }"#,
    )
    .expect("payload deserializes");

    assert_eq!(input.category, ClaimCategory::InHouse);
    assert_eq!(input.average_fixed_allowance, 0.0);
    assert!(input.include_meals);
    assert!(!input.include_accommodation);

    let estimate = LevyEstimate::compute(&input);
    assert_eq!(estimate.monthly_levy, 2_800.0 * 120.0 * 0.01);
    assert_eq!(estimate.claimable_course_fee, 12_000.0);
}
