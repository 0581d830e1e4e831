use serde::Serialize;

use crate::orders::GameServer;
use crate::pricing::calculator::{MINIMUM_QUANTITY_MILLIONS, OWN_BOOSTERS_SURCHARGE_PERCENT};
use crate::pricing::discount::{DiscountStep, VOLUME_DISCOUNTS};
use crate::pricing::models::{CreditTier, TankClass};

#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub currency: &'static str,
    pub credit_tiers: Vec<CreditTierEntry>,
    pub volume_discounts: Vec<DiscountStep>,
    pub minimum_quantity_millions: f64,
    pub surcharge_percent: u32,
    pub tank_classes: Vec<TankClassEntry>,
    pub servers: Vec<ServerEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreditTierEntry {
    pub id: CreditTier,
    pub label: &'static str,
    pub unit_price: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TankClassEntry {
    pub id: TankClass,
    pub label: &'static str,
    pub description: &'static str,
    pub flat_price: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServerEntry {
    pub id: GameServer,
    pub label: &'static str,
}

/// Snapshot of every price table the calculator uses
pub fn catalog() -> Catalog {
    Catalog {
        currency: "USD",
        credit_tiers: CreditTier::ALL
            .into_iter()
            .map(|tier| CreditTierEntry {
                id: tier,
                label: tier.label(),
                unit_price: tier.unit_price(),
            })
            .collect(),
        volume_discounts: VOLUME_DISCOUNTS.steps().to_vec(),
        minimum_quantity_millions: MINIMUM_QUANTITY_MILLIONS,
        surcharge_percent: OWN_BOOSTERS_SURCHARGE_PERCENT,
        tank_classes: TankClass::ALL
            .into_iter()
            .map(|class| TankClassEntry {
                id: class,
                label: class.label(),
                description: class.description(),
                flat_price: class.flat_price(),
            })
            .collect(),
        servers: GameServer::ALL
            .into_iter()
            .map(|server| ServerEntry {
                id: server,
                label: server.label(),
            })
            .collect(),
    }
}
