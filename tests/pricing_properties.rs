use boost_desk::pricing::{
    compute, compute_credit_farming_price, compute_powerleveling_price, CreditTier,
    OrderConfiguration, TankClass,
};

const EPSILON: f64 = 1e-9;

/// quantity * unit * (1 - discount) * (1.3 if excluded)
fn expected_final(unit_price: f64, quantity: f64, discount_percent: u32, exclude: bool) -> f64 {
    let after_discount = quantity * unit_price * (1.0 - f64::from(discount_percent) / 100.0);
    if exclude {
        after_discount * 1.3
    } else {
        after_discount
    }
}

#[test]
fn credit_farming_matches_formula_across_range() {
    // (quantity, discount percent written out by hand)
    let cases = [
        (1.0, 0),
        (1.5, 0),
        (7.0, 0),
        (19.99, 0),
        (20.0, 10),
        (33.0, 10),
        (39.5, 10),
        (40.0, 15),
        (55.0, 15),
        (69.9, 15),
        (70.0, 20),
        (150.0, 20),
    ];
    let tiers = [(CreditTier::Under2500, 4.0), (CreditTier::Over2500, 5.0)];

    for (tier, unit_price) in tiers {
        for (quantity, percent) in cases {
            for exclude in [false, true] {
                let breakdown = compute_credit_farming_price(tier, quantity, exclude);
                let expected = expected_final(unit_price, quantity, percent, exclude);
                assert_eq!(breakdown.discount_percent, percent, "quantity {quantity}");
                assert!(
                    (breakdown.final_price - expected).abs() < EPSILON,
                    "{tier} {quantity}M exclude={exclude}: got {}, expected {expected}",
                    breakdown.final_price
                );
            }
        }
    }
}

#[test]
fn known_totals() {
    let b = compute_credit_farming_price(CreditTier::Over2500, 70.0, true);
    assert!((b.final_price - 364.0).abs() < EPSILON);

    let b = compute_credit_farming_price(CreditTier::Under2500, 33.0, true);
    assert!((b.final_price - 154.44).abs() < EPSILON);

    let b = compute_credit_farming_price(CreditTier::Under2500, 5.0, false);
    assert!((b.final_price - 20.0).abs() < EPSILON);
}

#[test]
fn breakdown_components_add_up() {
    for tier in CreditTier::ALL {
        for quantity in [3.0, 25.0, 45.0, 80.0] {
            let b = compute_credit_farming_price(tier, quantity, true);
            let recomposed = b.base_price - b.discount_amount + b.surcharge_amount;
            assert!((b.final_price - recomposed).abs() < EPSILON);
        }
    }
}

#[test]
fn discount_boundaries_are_inclusive() {
    let cases = [(19.999, 0), (20.0, 10), (39.999, 10), (40.0, 15), (69.999, 15), (70.0, 20)];

    for (quantity, percent) in cases {
        let b = compute_credit_farming_price(CreditTier::Under2500, quantity, false);
        assert_eq!(b.discount_percent, percent, "quantity {quantity}");
    }
}

#[test]
fn surcharge_is_thirty_percent_of_discounted_price() {
    let without = compute_credit_farming_price(CreditTier::Over2500, 45.0, false);
    let with = compute_credit_farming_price(CreditTier::Over2500, 45.0, true);

    assert_eq!(without.surcharge_amount, 0.0);
    assert!((with.final_price - without.final_price * 1.3).abs() < EPSILON);
}

#[test]
fn below_minimum_prices_at_zero() {
    for quantity in [0.0, 0.25, 0.999, -5.0, f64::NAN, f64::INFINITY] {
        for tier in CreditTier::ALL {
            let b = compute_credit_farming_price(tier, quantity, true);
            assert!(b.is_zero(), "quantity {quantity} should price at zero");
        }
    }
}

#[test]
fn price_grows_with_quantity_within_a_discount_band() {
    let mut previous = 0.0;
    for step in 0..19 {
        let quantity = 1.0 + f64::from(step);
        let price =
            compute_credit_farming_price(CreditTier::Under2500, quantity, false).final_price;
        assert!(price > previous);
        previous = price;
    }
}

#[test]
fn computing_twice_gives_identical_breakdowns() {
    let configuration = OrderConfiguration::CreditFarming {
        tier: CreditTier::Over2500,
        quantity_millions: 42.0,
        exclude_own_boosters: true,
    };

    assert_eq!(compute(&configuration), compute(&configuration));
}

#[test]
fn every_tank_class_costs_one_hundred() {
    for class in TankClass::ALL {
        let b = compute_powerleveling_price(class);
        assert_eq!(b.base_price, 100.0);
        assert_eq!(b.final_price, 100.0);
        assert_eq!(b.discount_percent, 0);
        assert_eq!(b.surcharge_amount, 0.0);
    }
}

#[test]
fn huge_quantities_price_finitely_or_at_zero() {
    let b = compute_credit_farming_price(CreditTier::Under2500, 1e306, false).rounded();
    assert!(b.final_price.is_finite());
    assert!((b.final_price - 3.2e306).abs() / 3.2e306 < EPSILON);

    let b = compute_credit_farming_price(CreditTier::Over2500, f64::MAX, true);
    assert!(b.is_zero());
}
