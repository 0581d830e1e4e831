use async_trait::async_trait;
use tracing::info;

use crate::error::AppError;
use crate::logging::{MaskedEmail, MaskedHandle};
use crate::orders::SubmittedOrder;
use crate::pricing::OrderConfiguration;

/// Destination for accepted orders.
///
/// Implementations forward the order to whatever fulfils it (a CRM, a queue,
/// a chat webhook). An error here is reported to the customer as a failed
/// submission.
#[async_trait]
pub trait OrderSink: Send + Sync + 'static {
    /// Sink name used in logs
    fn name(&self) -> &str;

    async fn submit(&self, order: &SubmittedOrder) -> Result<(), AppError>;
}

/// Writes each order to the structured log and nothing else
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

#[async_trait]
impl OrderSink for LogSink {
    fn name(&self) -> &str {
        "log"
    }

    async fn submit(&self, order: &SubmittedOrder) -> Result<(), AppError> {
        let detail = match order.configuration {
            OrderConfiguration::CreditFarming {
                tier,
                quantity_millions,
                exclude_own_boosters,
            } => format!(
                "tier={} quantity_millions={} exclude_own_boosters={}",
                tier, quantity_millions, exclude_own_boosters
            ),
            OrderConfiguration::Powerleveling { tank_class } => {
                format!("tank_class={}", tank_class)
            }
        };

        info!(
            order_id = %order.order_id,
            service = %order.configuration.service(),
            server = %order.contact.server,
            email = %MaskedEmail::new(&order.contact.email),
            discord_tag = %MaskedHandle::new(&order.contact.discord_tag),
            has_notes = order.contact.additional_info.is_some(),
            base_price = order.breakdown.base_price,
            discount_percent = order.breakdown.discount_percent,
            surcharge_amount = order.breakdown.surcharge_amount,
            final_price = order.breakdown.final_price,
            detail = %detail,
            "Order received"
        );

        Ok(())
    }
}
