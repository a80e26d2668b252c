use std::env;

/// Service configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Payment provider credential.  Absent means checkout is refused
    /// with a configuration error, never retried.
    pub stripe_secret_key: Option<String>,
    /// Pre-created Stripe price.  Absent means inline price data is
    /// sent with each session.
    pub stripe_price_id: Option<String>,
    /// Base URL for success/cancel redirects.
    pub site_url: String,
    /// Listen address.
    pub bind: String,
    /// Unit price in cents.
    pub unit_amount_cents: u64,
    /// Size of the production run.
    pub total_units: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            stripe_secret_key: None,
            stripe_price_id: None,
            site_url: "http://localhost:3000".to_string(),
            bind: "0.0.0.0:3000".to_string(),
            unit_amount_cents: 29_900,
            total_units: 50,
        }
    }
}

fn env_string(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(default)
}

impl StoreConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            stripe_secret_key: env::var("STRIPE_SECRET_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            stripe_price_id: env::var("STRIPE_PRICE_ID")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            site_url: env_string("SITE_URL", &defaults.site_url),
            bind: env_string("STORE_BIND", &defaults.bind),
            unit_amount_cents: env_u64("STORE_UNIT_AMOUNT_CENTS",
                                       defaults.unit_amount_cents),
            total_units: env_u32("STORE_TOTAL_UNITS", defaults.total_units),
        }
    }
}
