use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player skill bracket used to price credit farming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreditTier {
    #[serde(rename = "under-2500")]
    Under2500,
    #[serde(rename = "over-2500")]
    Over2500,
}

impl CreditTier {
    pub const ALL: [CreditTier; 2] = [CreditTier::Under2500, CreditTier::Over2500];

    /// Price in USD per million credits
    pub fn unit_price(self) -> f64 {
        match self {
            CreditTier::Under2500 => 4.0,
            CreditTier::Over2500 => 5.0,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            CreditTier::Under2500 => "under-2500",
            CreditTier::Over2500 => "over-2500",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CreditTier::Under2500 => "Under 2500 WN8",
            CreditTier::Over2500 => "More than 2500 WN8",
        }
    }
}

impl fmt::Display for CreditTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Vehicle class offered for powerleveling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TankClass {
    Lt,
    Mt,
    Ht,
    Td,
    Spg,
}

impl TankClass {
    pub const ALL: [TankClass; 5] = [
        TankClass::Lt,
        TankClass::Mt,
        TankClass::Ht,
        TankClass::Td,
        TankClass::Spg,
    ];

    /// Flat price in USD for levelling one class from tier I to tier X
    pub fn flat_price(self) -> f64 {
        match self {
            TankClass::Lt | TankClass::Mt | TankClass::Ht | TankClass::Td | TankClass::Spg => 100.0,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            TankClass::Lt => "lt",
            TankClass::Mt => "mt",
            TankClass::Ht => "ht",
            TankClass::Td => "td",
            TankClass::Spg => "spg",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TankClass::Lt => "Light Tanks (LT)",
            TankClass::Mt => "Medium Tanks (MT)",
            TankClass::Ht => "Heavy Tanks (HT)",
            TankClass::Td => "Tank Destroyers (TD)",
            TankClass::Spg => "SPG (Artillery)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TankClass::Lt => "Fast scouts with excellent view range",
            TankClass::Mt => "Versatile all-rounders",
            TankClass::Ht => "Heavily armored frontline warriors",
            TankClass::Td => "Long-range damage dealers",
            TankClass::Spg => "Indirect fire support",
        }
    }
}

impl fmt::Display for TankClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CreditTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        CreditTier::ALL
            .into_iter()
            .find(|tier| tier.id() == wanted)
            .ok_or_else(|| format!("unknown tier '{}' (expected under-2500 or over-2500)", s))
    }
}

impl FromStr for TankClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        TankClass::ALL
            .into_iter()
            .find(|class| class.id() == wanted)
            .ok_or_else(|| format!("unknown tank class '{}' (expected lt, mt, ht, td or spg)", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    CreditFarming,
    Powerleveling,
}

impl ServiceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceKind::CreditFarming => "credit-farming",
            ServiceKind::Powerleveling => "powerleveling",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the calculator needs to price one order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "service", rename_all = "kebab-case")]
pub enum OrderConfiguration {
    CreditFarming {
        tier: CreditTier,
        quantity_millions: f64,
        exclude_own_boosters: bool,
    },
    Powerleveling {
        tank_class: TankClass,
    },
}

impl OrderConfiguration {
    pub fn service(&self) -> ServiceKind {
        match self {
            OrderConfiguration::CreditFarming { .. } => ServiceKind::CreditFarming,
            OrderConfiguration::Powerleveling { .. } => ServiceKind::Powerleveling,
        }
    }
}

/// Price breakdown for an order
///
/// Values carry full `f64` precision; call [`PriceBreakdown::rounded`] before
/// showing them to a customer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base_price: f64,
    pub discount_percent: u32,
    pub discount_amount: f64,
    pub surcharge_amount: f64,
    pub final_price: f64,
}

impl PriceBreakdown {
    /// Create a zero-cost breakdown
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Copy with every monetary field rounded to cents
    pub fn rounded(&self) -> Self {
        Self {
            base_price: round_cents(self.base_price),
            discount_percent: self.discount_percent,
            discount_amount: round_cents(self.discount_amount),
            surcharge_amount: round_cents(self.surcharge_amount),
            final_price: round_cents(self.final_price),
        }
    }
}

/// Beyond this magnitude an `f64` has no fractional cents left to round
const WHOLE_CENTS_THRESHOLD: f64 = 4_503_599_627_370_496.0 / 100.0;

/// Round half away from zero to two decimal places
pub fn round_cents(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= WHOLE_CENTS_THRESHOLD {
        return value;
    }
    (value * 100.0).round() / 100.0
}

/// Render an amount as `$1234.50`
pub fn format_usd(value: f64) -> String {
    format!("${:.2}", round_cents(value))
}
