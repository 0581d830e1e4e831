use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::error::AppError;
use crate::handlers::AppState;
use crate::orders::{CreditFarmOrderRequest, OrderReceipt, PowerlevelingOrderRequest};

/// Handle POST /v1/orders/credit-farm
pub async fn submit_credit_farm(
    State(state): State<AppState>,
    Json(request): Json<CreditFarmOrderRequest>,
) -> Result<(StatusCode, Json<OrderReceipt>), AppError> {
    let config = state.config.load_full();
    let receipt = state
        .intake
        .submit_credit_farm(request, &config.intake)
        .await?;

    info!(
        order_id = %receipt.order_id,
        total = %receipt.total,
        "Credit farming order accepted"
    );

    Ok((StatusCode::CREATED, Json(receipt)))
}

/// Handle POST /v1/orders/powerleveling
pub async fn submit_powerleveling(
    State(state): State<AppState>,
    Json(request): Json<PowerlevelingOrderRequest>,
) -> Result<(StatusCode, Json<OrderReceipt>), AppError> {
    let config = state.config.load_full();
    let receipt = state
        .intake
        .submit_powerleveling(request, &config.intake)
        .await?;

    info!(
        order_id = %receipt.order_id,
        total = %receipt.total,
        "Powerleveling order accepted"
    );

    Ok((StatusCode::CREATED, Json(receipt)))
}
