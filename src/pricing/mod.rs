pub mod calculator;
pub mod catalog;
pub mod discount;
pub mod models;

pub use calculator::{compute, compute_credit_farming_price, compute_powerleveling_price};
pub use catalog::{catalog, Catalog};
pub use discount::{DiscountLadder, DiscountStep, VOLUME_DISCOUNTS};
pub use models::{
    format_usd, round_cents, CreditTier, OrderConfiguration, PriceBreakdown, ServiceKind,
    TankClass,
};
