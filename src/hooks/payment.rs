//! Plans, subscription and usage

use crate::context::AppContext;
use crate::error::Result;
use crate::models::{Plan, Subscription, Usage};
use crate::query::{Mutation, QueryState};

use super::{fetcher, keys};

#[derive(Debug, Clone)]
pub struct PaymentHook {
    ctx: AppContext,
}

impl PaymentHook {
    pub fn new(ctx: &AppContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    pub async fn plans(&self) -> QueryState<Vec<Plan>> {
        let service = self.ctx.services().payment.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::plans(),
                fetcher(service, |s| async move { s.plans().await }),
            )
            .await
    }

    /// `data` is `Some(None)` when the account has no subscription
    pub async fn subscription(&self) -> QueryState<Option<Subscription>> {
        let service = self.ctx.services().payment.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::subscription(),
                fetcher(service, |s| async move { s.subscription().await }),
            )
            .await
    }

    pub async fn usage(&self) -> QueryState<Usage> {
        let service = self.ctx.services().payment.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::usage(),
                fetcher(service, |s| async move { s.usage().await }),
            )
            .await
    }

    pub async fn subscribe(&self, plan_id: &str) -> Result<Subscription> {
        let service = &self.ctx.services().payment;
        Mutation::new("subscribe")
            .invalidates(keys::payment())
            .writes_to(|_: &Subscription| keys::subscription())
            .success_toast("Subscription updated")
            .run(self.ctx.query_client(), self.ctx.notifier(), || {
                service.subscribe(plan_id)
            })
            .await
    }

    pub async fn cancel(&self) -> Result<Subscription> {
        let service = &self.ctx.services().payment;
        Mutation::new("cancel_subscription")
            .invalidates(keys::payment())
            .writes_to(|_: &Subscription| keys::subscription())
            .success_toast("Subscription canceled")
            .run(self.ctx.query_client(), self.ctx.notifier(), || {
                service.cancel_subscription()
            })
            .await
    }
}
