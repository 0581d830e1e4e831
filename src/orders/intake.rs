use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::IntakeConfig;
use crate::error::AppError;
use crate::metrics;
use crate::orders::sink::OrderSink;
use crate::orders::validation::{validate_contact, validate_quantity, validate_tank_class};
use crate::orders::{
    CreditFarmOrderRequest, OrderContact, OrderReceipt, PowerlevelingOrderRequest, SubmittedOrder,
};
use crate::pricing::{compute, format_usd, OrderConfiguration, ServiceKind};

/// Validates, prices and forwards orders
#[derive(Clone)]
pub struct OrderIntake {
    sink: Arc<dyn OrderSink>,
}

impl OrderIntake {
    pub fn new(sink: Arc<dyn OrderSink>) -> Self {
        Self { sink }
    }

    pub fn sink_name(&self) -> &str {
        self.sink.name()
    }

    pub async fn submit_credit_farm(
        &self,
        request: CreditFarmOrderRequest,
        settings: &IntakeConfig,
    ) -> Result<OrderReceipt, AppError> {
        let mut errors = Vec::new();
        let contact = validate_contact(&request.contact, &mut errors);
        validate_quantity(
            request.tier,
            request.quantity_millions,
            request.exclude_own_boosters,
            &mut errors,
        );

        let contact = match contact {
            Some(contact) if errors.is_empty() => contact,
            _ => return Err(reject(ServiceKind::CreditFarming, errors)),
        };

        let configuration = OrderConfiguration::CreditFarming {
            tier: request.tier,
            quantity_millions: request.quantity_millions,
            exclude_own_boosters: request.exclude_own_boosters,
        };
        self.accept(contact, configuration, settings).await
    }

    pub async fn submit_powerleveling(
        &self,
        request: PowerlevelingOrderRequest,
        settings: &IntakeConfig,
    ) -> Result<OrderReceipt, AppError> {
        let mut errors = Vec::new();
        let contact = validate_contact(&request.contact, &mut errors);
        let tank_class = validate_tank_class(request.tank_class, &mut errors);

        let (contact, tank_class) = match (contact, tank_class) {
            (Some(contact), Some(tank_class)) if errors.is_empty() => (contact, tank_class),
            _ => return Err(reject(ServiceKind::Powerleveling, errors)),
        };

        let configuration = OrderConfiguration::Powerleveling { tank_class };
        self.accept(contact, configuration, settings).await
    }

    async fn accept(
        &self,
        contact: OrderContact,
        configuration: OrderConfiguration,
        settings: &IntakeConfig,
    ) -> Result<OrderReceipt, AppError> {
        let service = configuration.service();
        let order = SubmittedOrder {
            order_id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            contact,
            configuration,
            breakdown: compute(&configuration),
        };

        debug!(order_id = %order.order_id, sink = self.sink.name(), "Forwarding order to sink");

        if let Err(e) = self.sink.submit(&order).await {
            metrics::record_order_rejection(service.as_str(), "sink_error");
            return Err(e);
        }

        metrics::record_order(
            service.as_str(),
            order.contact.server.id(),
            order.breakdown.final_price,
        );

        Ok(OrderReceipt {
            order_id: order.order_id,
            submitted_at: order.submitted_at,
            service,
            breakdown: order.breakdown.rounded(),
            total: format_usd(order.breakdown.final_price),
            confirmation: confirmation_message(&order, settings.contact_window_minutes),
        })
    }
}

fn reject(service: ServiceKind, errors: Vec<crate::error::FieldError>) -> AppError {
    warn!(
        service = %service,
        fields = ?errors.iter().map(|e| e.field).collect::<Vec<_>>(),
        "Order rejected by validation"
    );
    metrics::record_order_rejection(service.as_str(), "validation");
    AppError::Validation(errors)
}

/// Text shown to the customer once the order went through
pub fn confirmation_message(order: &SubmittedOrder, contact_window_minutes: u32) -> String {
    let summary = match order.configuration {
        OrderConfiguration::CreditFarming {
            tier,
            quantity_millions,
            exclude_own_boosters,
        } => {
            let boosters = if exclude_own_boosters {
                "Dont use Silver boosters (+30%)"
            } else {
                "Will use them"
            };
            format!(
                "WN8 Tier: {}\nSilver Boosters: {}\nAmount: {}M credits\nTotal: {}",
                tier.label(),
                boosters,
                quantity_millions,
                format_usd(order.breakdown.final_price)
            )
        }
        OrderConfiguration::Powerleveling { tank_class } => format!(
            "Tank Type: {}\nPrice: {}",
            tank_class.label(),
            format_usd(order.breakdown.final_price)
        ),
    };

    format!(
        "Order submitted!\n\n{}\n\nWe will contact you within {} minutes.",
        summary, contact_window_minutes
    )
}
