//! Order intake
//!
//! Turns a customer's order form into a priced [`SubmittedOrder`], hands it to
//! an [`OrderSink`] and answers with an [`OrderReceipt`]. Nothing is stored
//! here; what happens to an accepted order is up to the sink.

pub mod intake;
pub mod sink;
pub mod validation;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::pricing::{CreditTier, OrderConfiguration, PriceBreakdown, ServiceKind, TankClass};

pub use intake::OrderIntake;
pub use sink::{LogSink, OrderSink};

/// Game region the booster will log into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameServer {
    Na,
    Eu,
    Asia,
    Ru,
}

impl GameServer {
    pub const ALL: [GameServer; 4] = [
        GameServer::Na,
        GameServer::Eu,
        GameServer::Asia,
        GameServer::Ru,
    ];

    pub fn id(self) -> &'static str {
        match self {
            GameServer::Na => "na",
            GameServer::Eu => "eu",
            GameServer::Asia => "asia",
            GameServer::Ru => "ru",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameServer::Na => "North America",
            GameServer::Eu => "Europe",
            GameServer::Asia => "Asia",
            GameServer::Ru => "Russia",
        }
    }
}

impl fmt::Display for GameServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for GameServer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        GameServer::ALL
            .into_iter()
            .find(|server| server.id() == wanted)
            .ok_or_else(|| format!("Unknown server '{}'", s.trim()))
    }
}

/// Contact fields shared by every order form, as typed by the customer
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub discord_tag: String,
    #[serde(default)]
    pub server: String,
    #[serde(default)]
    pub additional_info: Option<String>,
}

/// Contact fields after validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderContact {
    pub email: String,
    pub discord_tag: String,
    pub server: GameServer,
    pub additional_info: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreditFarmOrderRequest {
    #[serde(flatten)]
    pub contact: ContactForm,
    pub tier: CreditTier,
    #[serde(default)]
    pub quantity_millions: f64,
    #[serde(default)]
    pub exclude_own_boosters: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PowerlevelingOrderRequest {
    #[serde(flatten)]
    pub contact: ContactForm,
    #[serde(default)]
    pub tank_class: Option<TankClass>,
}

/// A validated, priced order as handed to the [`OrderSink`]
#[derive(Debug, Clone, Serialize)]
pub struct SubmittedOrder {
    pub order_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub contact: OrderContact,
    pub configuration: OrderConfiguration,
    pub breakdown: PriceBreakdown,
}

/// What the customer gets back after submitting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub service: ServiceKind,
    pub breakdown: PriceBreakdown,
    pub total: String,
    pub confirmation: String,
}
