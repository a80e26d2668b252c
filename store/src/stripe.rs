//! Minimal Stripe Checkout client.
//!
//! Only the one call the store needs: create a hosted checkout session
//! and hand back its redirect URL.  Requests are form-encoded the way
//! the Stripe API expects (`line_items[0][price]` style keys).

use serde_json::Value;
use thiserror::Error;

const SESSIONS_URL: &str = "https://api.stripe.com/v1/checkout/sessions";

#[derive(Debug, Error)]
pub enum StripeError {
    #[error("stripe request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("stripe returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("stripe response carried no session url")]
    MissingUrl,
}

/// What to charge for: a pre-created price, or inline price data.
#[derive(Debug, Clone)]
pub enum LineItem {
    Price(String),
    Inline {
        name: String,
        description: String,
        image_url: String,
        unit_amount_cents: u64,
    },
}

/// A checkout session to be created, quantity 1.
#[derive(Debug, Clone)]
pub struct SessionRequest {
    pub line_item: LineItem,
    pub metadata: Vec<(String, String)>,
    pub success_url: String,
    pub cancel_url: String,
}

pub struct StripeClient {
    http: reqwest::Client,
    secret_key: String,
}

impl StripeClient {
    pub fn new(http: reqwest::Client, secret_key: String) -> Self {
        Self { http, secret_key }
    }

    /// Create a card-payment checkout session and return its URL.
    pub async fn create_checkout_session(
        &self,
        req: &SessionRequest,
    ) -> Result<String, StripeError> {
        let mut form: Vec<(String, String)> = vec![
            ("mode".into(), "payment".into()),
            ("payment_method_types[0]".into(), "card".into()),
            ("success_url".into(), req.success_url.clone()),
            ("cancel_url".into(), req.cancel_url.clone()),
            ("line_items[0][quantity]".into(), "1".into()),
            ("shipping_address_collection[allowed_countries][0]".into(),
             "US".into()),
            ("shipping_address_collection[allowed_countries][1]".into(),
             "CA".into()),
            ("phone_number_collection[enabled]".into(), "true".into()),
        ];
        match &req.line_item {
            LineItem::Price(id) => {
                form.push(("line_items[0][price]".into(), id.clone()));
            }
            LineItem::Inline { name, description, image_url,
                               unit_amount_cents } => {
                form.push(("line_items[0][price_data][currency]".into(),
                           "usd".into()));
                form.push(("line_items[0][price_data][product_data][name]".into(),
                           name.clone()));
                form.push(("line_items[0][price_data][product_data][description]".into(),
                           description.clone()));
                form.push(("line_items[0][price_data][product_data][images][0]".into(),
                           image_url.clone()));
                form.push(("line_items[0][price_data][unit_amount]".into(),
                           unit_amount_cents.to_string()));
            }
        }
        for (key, value) in &req.metadata {
            form.push((format!("metadata[{key}]"), value.clone()));
        }

        let response = self.http
            .post(SESSIONS_URL)
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await?;
        let status = response.status();
        let body: Value = response.json().await?;
        if !status.is_success() {
            let message = body["error"]["message"]
                .as_str()
                .unwrap_or("unknown error")
                .to_string();
            return Err(StripeError::Api { status: status.as_u16(), message });
        }
        body["url"]
            .as_str()
            .map(str::to_string)
            .ok_or(StripeError::MissingUrl)
    }
}
