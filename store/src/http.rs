//! HTTP surface of the store.
//!
//! Every failure body is `{"error": <string>}`; the statuses mirror
//! the page's expectations: 500 for configuration and upstream
//! failures, 400 for sold-out.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::{error, info};

use anodize_spectrum::{clamp_level, Spectrum};

use crate::inventory::InventoryError;
use crate::stripe::{LineItem, SessionRequest, StripeError};
use crate::{AppState, Finish};

const PRODUCT_NAME: &str = "Titanium RC Chassis";
const PRODUCT_IMAGE: &str =
    "https://via.placeholder.com/600x400/7F00FF/FFFFFF?text=Titanium+Chassis";

pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Stripe not configured")]
    NotConfigured,
    #[error("Product is sold out")]
    SoldOut,
    #[error("Failed to create checkout session")]
    Inventory(#[source] InventoryError),
    #[error("Failed to create checkout session")]
    Provider(#[source] StripeError),
}

impl CheckoutError {
    fn status(&self) -> StatusCode {
        match self {
            CheckoutError::SoldOut => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn inventory_handler(State(state): State<AppState>) -> Response {
    match state.inventory.remaining().await {
        Ok(remaining) => Json(json!({
            "remaining": remaining,
            "total": state.config.total_units,
        }))
        .into_response(),
        Err(err) => {
            error!(error = %err, "inventory fetch failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR,
                           "Failed to fetch inventory")
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub finish: Option<Finish>,
    pub anodize_t: Option<f64>,
}

pub(crate) async fn checkout_handler(
    State(state): State<AppState>,
    Json(req): Json<CheckoutRequest>,
) -> Response {
    match create_checkout(&state, req).await {
        Ok(url) => {
            info!(route = "/api/checkout", "checkout session created");
            Json(json!({ "url": url })).into_response()
        }
        Err(err) => {
            match &err {
                CheckoutError::Provider(source) => {
                    error!(error = %source, "checkout session creation failed");
                }
                CheckoutError::Inventory(source) => {
                    error!(error = %source,
                           "inventory lookup failed during checkout");
                }
                refusal => info!(reason = %refusal, "checkout refused"),
            }
            error_response(err.status(), &err.to_string())
        }
    }
}

async fn create_checkout(
    state: &AppState,
    req: CheckoutRequest,
) -> Result<String, CheckoutError> {
    let level = clamp_level(req.anodize_t.unwrap_or(0.));
    let rendered = Spectrum.at_level(level);
    let finish = req.finish.unwrap_or(Finish::Anodized);

    let stripe = state.stripe.as_ref().ok_or(CheckoutError::NotConfigured)?;
    let remaining = state.inventory
        .remaining()
        .await
        .map_err(CheckoutError::Inventory)?;
    if remaining == 0 {
        return Err(CheckoutError::SoldOut);
    }

    let line_item = match &state.config.stripe_price_id {
        Some(id) => LineItem::Price(id.clone()),
        None => {
            let description = match finish {
                Finish::RawMachined =>
                    "Premium titanium chassis - Raw machined finish".to_string(),
                Finish::Anodized => format!(
                    "Premium titanium chassis - {} ({}V)",
                    rendered.label, rendered.voltage
                ),
            };
            LineItem::Inline {
                name: PRODUCT_NAME.to_string(),
                description,
                image_url: PRODUCT_IMAGE.to_string(),
                unit_amount_cents: state.config.unit_amount_cents,
            }
        }
    };
    // Serial numbers count up from 1 as the run sells down.
    let serial = state.config.total_units + 1 - remaining.min(state.config.total_units);
    let session = SessionRequest {
        line_item,
        metadata: vec![
            ("finish".to_string(), finish.to_string()),
            ("product_type".to_string(), "titanium-chassis".to_string()),
            ("anodize_level".to_string(), level.to_string()),
            ("anodize_voltage".to_string(), rendered.voltage.to_string()),
            ("anodize_color".to_string(), rendered.label.to_string()),
            ("serial_number".to_string(), serial.to_string()),
        ],
        success_url: format!("{}/success?session_id={{CHECKOUT_SESSION_ID}}",
                             state.config.site_url),
        cancel_url: state.config.site_url.clone(),
    };
    stripe
        .create_checkout_session(&session)
        .await
        .map_err(CheckoutError::Provider)
}

#[derive(Debug, Serialize)]
pub(crate) struct AnodizeView {
    level: f64,
    voltage: u16,
    hex: String,
    label: &'static str,
    finish: Finish,
}

fn render_selection(selection: &crate::AnodizeSelection) -> AnodizeView {
    let rendered = Spectrum.at_level(selection.level());
    AnodizeView {
        level: selection.level(),
        voltage: rendered.voltage,
        hex: rendered.hex(),
        label: rendered.label,
        finish: selection.finish(),
    }
}

pub(crate) async fn anodize_get_handler(
    State(state): State<AppState>,
) -> Json<AnodizeView> {
    let selection = state.selection.read().await;
    Json(render_selection(&selection))
}

#[derive(Debug, Deserialize)]
pub struct AnodizeUpdate {
    pub level: Option<f64>,
    pub finish: Option<Finish>,
}

pub(crate) async fn anodize_put_handler(
    State(state): State<AppState>,
    Json(update): Json<AnodizeUpdate>,
) -> Json<AnodizeView> {
    let mut selection = state.selection.write().await;
    if let Some(level) = update.level {
        selection.set_level(level);
    }
    if let Some(finish) = update.finish {
        selection.set_finish(finish);
    }
    Json(render_selection(&selection))
}

#[derive(Debug, Serialize)]
pub(crate) struct StopView {
    voltage: u16,
    hex: String,
    label: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SpectrumView {
    gradient: &'static str,
    stops: Vec<StopView>,
}

pub(crate) async fn spectrum_handler() -> Json<SpectrumView> {
    let stops = Spectrum.stops()
        .iter()
        .map(|s| StopView {
            voltage: s.voltage as u16,
            hex: anodize_spectrum::css_hex(s.color),
            label: s.label,
        })
        .collect();
    Json(SpectrumView { gradient: Spectrum.css_gradient(), stops })
}
