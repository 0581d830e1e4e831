use serde::Serialize;

/// One rung of a volume discount ladder
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiscountStep {
    /// Inclusive lower bound, in millions of credits
    pub min_quantity_millions: f64,
    pub percent: u32,
}

/// Volume discounts, ordered from the highest threshold down.
///
/// The first step whose minimum is reached wins, so a quantity sitting exactly
/// on a boundary gets the larger discount.
#[derive(Debug, Clone, Copy)]
pub struct DiscountLadder {
    steps: &'static [DiscountStep],
}

/// 20-39M: 10%, 40-69M: 15%, 70M+: 20%
pub const VOLUME_DISCOUNTS: DiscountLadder = DiscountLadder::new(&[
    DiscountStep {
        min_quantity_millions: 70.0,
        percent: 20,
    },
    DiscountStep {
        min_quantity_millions: 40.0,
        percent: 15,
    },
    DiscountStep {
        min_quantity_millions: 20.0,
        percent: 10,
    },
]);

impl DiscountLadder {
    /// `steps` must be sorted by descending `min_quantity_millions`
    pub const fn new(steps: &'static [DiscountStep]) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &'static [DiscountStep] {
        self.steps
    }

    /// Discount percent for `quantity_millions`, 0 below the lowest rung
    pub fn percent_for(&self, quantity_millions: f64) -> u32 {
        self.steps
            .iter()
            .find(|step| quantity_millions >= step.min_quantity_millions)
            .map(|step| step.percent)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_descend() {
        let steps = VOLUME_DISCOUNTS.steps();
        assert!(steps
            .windows(2)
            .all(|pair| pair[0].min_quantity_millions > pair[1].min_quantity_millions));
    }

    #[test]
    fn test_boundaries_belong_to_higher_step() {
        let cases = [
            (1.0, 0),
            (19.999, 0),
            (20.0, 10),
            (39.999, 10),
            (40.0, 15),
            (69.999, 15),
            (70.0, 20),
            (10_000.0, 20),
        ];
        for (quantity, expected) in cases {
            assert_eq!(
                VOLUME_DISCOUNTS.percent_for(quantity),
                expected,
                "quantity {}",
                quantity
            );
        }
    }

    #[test]
    fn test_below_and_nan_get_nothing() {
        assert_eq!(VOLUME_DISCOUNTS.percent_for(-50.0), 0);
        assert_eq!(VOLUME_DISCOUNTS.percent_for(f64::NAN), 0);
    }

    #[test]
    fn test_custom_ladder() {
        static STEPS: [DiscountStep; 1] = [DiscountStep {
            min_quantity_millions: 5.0,
            percent: 50,
        }];
        let ladder = DiscountLadder::new(&STEPS);
        assert_eq!(ladder.percent_for(4.0), 0);
        assert_eq!(ladder.percent_for(5.0), 50);
    }
}
