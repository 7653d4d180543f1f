//! Plans, subscription and usage
//!
//! All billing endpoints use named envelopes (`{plans}`, `{subscription}`,
//! `{usage}`).

use crate::error::Result;
use crate::http::ApiClient;
use crate::models::payment::SubscribeRequest;
use crate::models::{Plan, Subscription, Usage};

use super::path_id;

#[derive(Debug, Clone)]
pub struct PaymentService {
    api: ApiClient,
}

impl PaymentService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /payment/plans` → `{plans}`
    pub async fn plans(&self) -> Result<Vec<Plan>> {
        self.api.get_field("/payment/plans", "plans").await
    }

    /// `GET /payment/subscription` → `{subscription}`; `null` when none
    pub async fn subscription(&self) -> Result<Option<Subscription>> {
        self.api
            .get_field("/payment/subscription", "subscription")
            .await
    }

    /// `POST /payment/subscription` → `{subscription}`
    pub async fn subscribe(&self, plan_id: &str) -> Result<Subscription> {
        let plan_id = path_id("plan", plan_id)?.to_string();
        self.api
            .post_field(
                "/payment/subscription",
                &SubscribeRequest { plan_id },
                "subscription",
            )
            .await
    }

    /// `DELETE /payment/subscription` → `{subscription}`
    pub async fn cancel_subscription(&self) -> Result<Subscription> {
        self.api
            .delete_field("/payment/subscription", "subscription")
            .await
    }

    /// `GET /payment/usage` → `{usage}`
    pub async fn usage(&self) -> Result<Usage> {
        self.api.get_field("/payment/usage", "usage").await
    }
}
