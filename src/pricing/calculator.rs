use crate::pricing::discount::VOLUME_DISCOUNTS;
use crate::pricing::models::{CreditTier, OrderConfiguration, PriceBreakdown, TankClass};

/// Smallest credit-farming order, in millions of credits
pub const MINIMUM_QUANTITY_MILLIONS: f64 = 1.0;

/// Extra charge when the farmer may not use the customer's own boosters
pub const OWN_BOOSTERS_SURCHARGE_PERCENT: u32 = 30;

/// Price a credit-farming order.
///
/// Quantities below the minimum or not finite price at zero instead of
/// failing, as does any quantity whose price would overflow `f64`. The
/// surcharge is taken on the already discounted amount.
pub fn compute_credit_farming_price(
    tier: CreditTier,
    quantity_millions: f64,
    exclude_own_boosters: bool,
) -> PriceBreakdown {
    if !quantity_millions.is_finite() || quantity_millions < MINIMUM_QUANTITY_MILLIONS {
        return PriceBreakdown::zero();
    }

    let base_price = quantity_millions * tier.unit_price();
    let discount_percent = VOLUME_DISCOUNTS.percent_for(quantity_millions);
    let discount_amount = base_price * percent_of(discount_percent);
    let after_discount = base_price - discount_amount;

    let surcharge_amount = if exclude_own_boosters {
        after_discount * percent_of(OWN_BOOSTERS_SURCHARGE_PERCENT)
    } else {
        0.0
    };
    let final_price = after_discount + surcharge_amount;

    // amounts past f64::MAX cannot be priced
    if !final_price.is_finite() {
        return PriceBreakdown::zero();
    }

    PriceBreakdown {
        base_price,
        discount_percent,
        discount_amount,
        surcharge_amount,
        final_price,
    }
}

/// Whether a quantity gets a non-zero price, i.e. it is at least the minimum
/// and its price stays within `f64` range
pub fn is_priceable(tier: CreditTier, quantity_millions: f64, exclude_own_boosters: bool) -> bool {
    !compute_credit_farming_price(tier, quantity_millions, exclude_own_boosters).is_zero()
}

fn percent_of(percent: u32) -> f64 {
    f64::from(percent) / 100.0
}

/// Price a powerleveling order: one flat fee per tank class
pub fn compute_powerleveling_price(tank_class: TankClass) -> PriceBreakdown {
    let flat_price = tank_class.flat_price();
    PriceBreakdown {
        base_price: flat_price,
        discount_percent: 0,
        discount_amount: 0.0,
        surcharge_amount: 0.0,
        final_price: flat_price,
    }
}

pub fn compute(configuration: &OrderConfiguration) -> PriceBreakdown {
    match *configuration {
        OrderConfiguration::CreditFarming {
            tier,
            quantity_millions,
            exclude_own_boosters,
        } => compute_credit_farming_price(tier, quantity_millions, exclude_own_boosters),
        OrderConfiguration::Powerleveling { tank_class } => compute_powerleveling_price(tank_class),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_order_without_discount() {
        let breakdown = compute_credit_farming_price(CreditTier::Under2500, 5.0, false);

        assert_eq!(breakdown.base_price, 20.0);
        assert_eq!(breakdown.discount_percent, 0);
        assert_eq!(breakdown.discount_amount, 0.0);
        assert_eq!(breakdown.surcharge_amount, 0.0);
        assert_eq!(breakdown.final_price, 20.0);
    }

    #[test]
    fn test_surcharge_applies_after_discount() {
        let breakdown = compute_credit_farming_price(CreditTier::Over2500, 70.0, true);

        assert_eq!(breakdown.base_price, 350.0);
        assert_eq!(breakdown.discount_percent, 20);
        assert_eq!(breakdown.rounded().discount_amount, 70.0);
        assert_eq!(breakdown.rounded().surcharge_amount, 84.0);
        assert_eq!(breakdown.rounded().final_price, 364.0);
    }

    #[test]
    fn test_below_minimum_is_zero() {
        for quantity in [0.999, 0.5, 0.0, -3.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            for tier in CreditTier::ALL {
                let breakdown = compute_credit_farming_price(tier, quantity, true);
                assert!(breakdown.is_zero(), "quantity {} tier {}", quantity, tier);
            }
        }
    }

    #[test]
    fn test_huge_quantity_stays_finite() {
        let breakdown = compute_credit_farming_price(CreditTier::Under2500, 1e306, true);
        assert_eq!(breakdown.discount_percent, 20);
        assert!(breakdown.final_price.is_finite());
        assert!(breakdown.final_price > 0.0);
        assert!(is_priceable(CreditTier::Under2500, 1e306, true));
    }

    #[test]
    fn test_overflowing_price_is_zero() {
        for tier in CreditTier::ALL {
            let breakdown = compute_credit_farming_price(tier, 1e308, true);
            assert!(breakdown.is_zero(), "tier {}", tier);
            assert!(!is_priceable(tier, 1e308, false));
        }
    }

    #[test]
    fn test_minimum_is_priced() {
        let breakdown = compute_credit_farming_price(CreditTier::Over2500, 1.0, false);
        assert_eq!(breakdown.final_price, 5.0);
    }

    #[test]
    fn test_powerleveling_is_flat() {
        for class in TankClass::ALL {
            let breakdown = compute_powerleveling_price(class);
            assert_eq!(breakdown.base_price, 100.0);
            assert_eq!(breakdown.final_price, 100.0);
            assert_eq!(breakdown.discount_percent, 0);
            assert_eq!(breakdown.surcharge_amount, 0.0);
        }
    }

    #[test]
    fn test_compute_dispatches_on_service() {
        let credit = OrderConfiguration::CreditFarming {
            tier: CreditTier::Under2500,
            quantity_millions: 20.0,
            exclude_own_boosters: false,
        };
        assert_eq!(compute(&credit).discount_percent, 10);
        assert_eq!(compute(&credit).rounded().final_price, 72.0);

        let level = OrderConfiguration::Powerleveling { tank_class: TankClass::Td };
        assert_eq!(compute(&level), compute_powerleveling_price(TankClass::Td));
    }
}
