use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::metrics;
use crate::pricing::{
    compute_credit_farming_price, compute_powerleveling_price, format_usd, CreditTier,
    PriceBreakdown, ServiceKind, TankClass,
};

#[derive(Debug, Clone, Deserialize)]
pub struct CreditFarmQuoteRequest {
    pub tier: CreditTier,
    /// Missing means an empty input field, which prices at zero
    #[serde(default)]
    pub quantity_millions: f64,
    #[serde(default)]
    pub exclude_own_boosters: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PowerlevelingQuoteRequest {
    pub tank_class: TankClass,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub service: ServiceKind,
    pub breakdown: PriceBreakdown,
    pub total: String,
}

impl QuoteResponse {
    fn new(service: ServiceKind, breakdown: PriceBreakdown) -> Self {
        Self {
            service,
            breakdown: breakdown.rounded(),
            total: format_usd(breakdown.final_price),
        }
    }
}

/// Handle POST /v1/quotes/credit-farm
pub async fn quote_credit_farm(Json(request): Json<CreditFarmQuoteRequest>) -> Json<QuoteResponse> {
    let breakdown = compute_credit_farming_price(
        request.tier,
        request.quantity_millions,
        request.exclude_own_boosters,
    );

    debug!(
        tier = %request.tier,
        quantity_millions = request.quantity_millions,
        exclude_own_boosters = request.exclude_own_boosters,
        final_price = breakdown.final_price,
        "Quoted credit farming"
    );
    metrics::record_quote(ServiceKind::CreditFarming.as_str());

    Json(QuoteResponse::new(ServiceKind::CreditFarming, breakdown))
}

/// Handle POST /v1/quotes/powerleveling
pub async fn quote_powerleveling(
    Json(request): Json<PowerlevelingQuoteRequest>,
) -> Json<QuoteResponse> {
    let breakdown = compute_powerleveling_price(request.tank_class);

    debug!(tank_class = %request.tank_class, "Quoted powerleveling");
    metrics::record_quote(ServiceKind::Powerleveling.as_str());

    Json(QuoteResponse::new(ServiceKind::Powerleveling, breakdown))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_quote_credit_farm_rounds_for_display() {
        let Json(quote) = quote_credit_farm(Json(CreditFarmQuoteRequest {
            tier: CreditTier::Under2500,
            quantity_millions: 33.0,
            exclude_own_boosters: true,
        }))
        .await;

        // 132 base, 10% off -> 118.8, +30% -> 154.44
        assert_eq!(quote.service, ServiceKind::CreditFarming);
        assert_eq!(quote.breakdown.discount_percent, 10);
        assert_eq!(quote.breakdown.final_price, 154.44);
        assert_eq!(quote.total, "$154.44");
    }

    #[tokio::test]
    async fn test_quote_credit_farm_empty_amount() {
        let request: CreditFarmQuoteRequest =
            serde_json::from_str(r#"{"tier": "over-2500"}"#).unwrap();
        let Json(quote) = quote_credit_farm(Json(request)).await;

        assert!(quote.breakdown.is_zero());
        assert_eq!(quote.total, "$0.00");
    }

    #[tokio::test]
    async fn test_quote_powerleveling() {
        let Json(quote) = quote_powerleveling(Json(PowerlevelingQuoteRequest {
            tank_class: TankClass::Lt,
        }))
        .await;

        assert_eq!(quote.total, "$100.00");
        assert_eq!(quote.breakdown.discount_percent, 0);
    }
}
