//! Storefront service for the limited-run titanium chassis.
//!
//! Thin glue around [`anodize_spectrum`]: a checkout endpoint that
//! forwards the selected finish and anodize level to Stripe, an
//! inventory endpoint, and the shared anodize selection the page
//! widgets read and write.

#![forbid(unsafe_code)]

pub mod config;
pub mod http;
pub mod inventory;
pub mod stripe;

use std::fmt;
use std::sync::Arc;
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use anodize_spectrum::clamp_level;
pub use config::StoreConfig;
use inventory::InventorySource;
use stripe::StripeClient;

/// Surface finish of the chassis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Finish {
    RawMachined,
    Anodized,
}

impl fmt::Display for Finish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finish::RawMachined => write!(f, "raw-machined"),
            Finish::Anodized => write!(f, "anodized"),
        }
    }
}

/// The client-session anodize selection, shared across handlers.
///
/// The level is clamped to \[0, 1\] on every write.
#[derive(Debug, Clone, Copy)]
pub struct AnodizeSelection {
    level: f64,
    finish: Finish,
}

impl Default for AnodizeSelection {
    fn default() -> Self {
        Self { level: 0., finish: Finish::Anodized }
    }
}

impl AnodizeSelection {
    pub fn level(&self) -> f64 { self.level }

    pub fn finish(&self) -> Finish { self.finish }

    pub fn set_level(&mut self, level: f64) {
        self.level = clamp_level(level);
    }

    pub fn set_finish(&mut self, finish: Finish) {
        self.finish = finish;
    }
}

/// Everything a handler needs, passed explicitly.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<StoreConfig>,
    pub selection: Arc<RwLock<AnodizeSelection>>,
    pub inventory: Arc<dyn InventorySource>,
    pub stripe: Option<Arc<StripeClient>>,
}

impl AppState {
    /// Build the state from a configuration and an inventory source.
    /// The Stripe client exists only when a secret key is configured.
    pub fn new(config: StoreConfig, inventory: Arc<dyn InventorySource>) -> Self {
        let stripe = config.stripe_secret_key.clone().map(|key| {
            Arc::new(StripeClient::new(reqwest::Client::new(), key))
        });
        Self {
            config: Arc::new(config),
            selection: Arc::new(RwLock::new(AnodizeSelection::default())),
            inventory,
            stripe,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(http::healthz_handler))
        .route("/api/inventory", get(http::inventory_handler))
        .route("/api/checkout", post(http::checkout_handler))
        .route("/api/anodize",
               get(http::anodize_get_handler).put(http::anodize_put_handler))
        .route("/api/spectrum", get(http::spectrum_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_clamps_on_write() {
        let mut sel = AnodizeSelection::default();
        sel.set_level(2.0);
        assert_eq!(sel.level(), 1.0);
        sel.set_level(-0.5);
        assert_eq!(sel.level(), 0.0);
        sel.set_level(f64::NAN);
        assert_eq!(sel.level(), 0.0);
        sel.set_level(0.37);
        assert_eq!(sel.level(), 0.37);
    }

    #[test]
    fn finish_round_trips_through_serde() {
        let v = serde_json::to_string(&Finish::RawMachined).unwrap();
        assert_eq!(v, "\"raw-machined\"");
        let f: Finish = serde_json::from_str("\"anodized\"").unwrap();
        assert_eq!(f, Finish::Anodized);
        assert_eq!(Finish::RawMachined.to_string(), "raw-machined");
    }
}
