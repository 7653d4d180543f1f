//! Write operations against the query cache

use std::future::Future;

use metrics::increment_counter;
use serde::Serialize;

use crate::error::Result;
use crate::notify::Notifier;

use super::{QueryClient, QueryKey};

type KeyFn<T> = Box<dyn Fn(&T) -> QueryKey + Send + Sync>;

/// A named write with its cache side effects
///
/// On success removed keys are dropped, invalidated prefixes are marked for
/// refetch, the returned value is written under the detail key (when one is
/// declared) and the optional success toast is published. On failure an error toast is published and
/// the cache is left exactly as it was.
pub struct Mutation<T> {
    name: &'static str,
    invalidates: Vec<QueryKey>,
    removes: Vec<QueryKey>,
    writes_to: Option<KeyFn<T>>,
    success_toast: Option<String>,
}

impl<T> std::fmt::Debug for Mutation<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mutation")
            .field("name", &self.name)
            .field("invalidates", &self.invalidates)
            .field("removes", &self.removes)
            .field("writes_to", &self.writes_to.is_some())
            .field("success_toast", &self.success_toast)
            .finish()
    }
}

impl<T: Serialize> Mutation<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            invalidates: Vec::new(),
            removes: Vec::new(),
            writes_to: None,
            success_toast: None,
        }
    }

    /// Invalidate every key under `prefix` after success
    pub fn invalidates(mut self, prefix: QueryKey) -> Self {
        self.invalidates.push(prefix);
        self
    }

    /// Drop every key under `prefix` after success
    pub fn removes(mut self, prefix: QueryKey) -> Self {
        self.removes.push(prefix);
        self
    }

    /// Store the returned value under the key computed from it
    pub fn writes_to<F>(mut self, key: F) -> Self
    where
        F: Fn(&T) -> QueryKey + Send + Sync + 'static,
    {
        self.writes_to = Some(Box::new(key));
        self
    }

    pub fn success_toast(mut self, message: impl Into<String>) -> Self {
        self.success_toast = Some(message.into());
        self
    }

    /// Execute `op` with the write retry policy and apply cache effects
    pub async fn run<F, Fut>(self, client: &QueryClient, notifier: &Notifier, op: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        match client.mutation_retry().run(self.name, op).await {
            Ok(value) => {
                for prefix in &self.removes {
                    client.remove_queries(prefix).await;
                }
                for prefix in &self.invalidates {
                    client.invalidate_queries(prefix).await;
                }
                if let Some(key_fn) = &self.writes_to {
                    let key = key_fn(&value);
                    if let Err(e) = client.set_query_data(&key, &value).await {
                        tracing::warn!(mutation = self.name, %key, "Could not cache result: {}", e);
                    }
                }
                increment_counter!("mutations_total", "status" => "success");
                tracing::debug!(mutation = self.name, "Mutation succeeded");
                if let Some(message) = self.success_toast {
                    notifier.success(message);
                }
                Ok(value)
            }
            Err(error) => {
                increment_counter!("mutations_total", "status" => "error");
                tracing::error!(mutation = self.name, "Mutation failed: {}", error);
                notifier.report(&error);
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QueryConfig;
    use crate::error::CollabError;
    use crate::notify::ToastLevel;

    fn client() -> QueryClient {
        QueryClient::new(&QueryConfig {
            retry_base_delay_ms: 1,
            retry_max_delay_ms: 1,
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_success_invalidates_and_writes_detail() {
        let client = client();
        let notifier = Notifier::new();
        let mut toasts = notifier.subscribe();
        let list = QueryKey::new(["documents", "list"]);
        client.set_query_data(&list, &vec!["a"]).await.unwrap();

        let created = Mutation::new("create_document")
            .invalidates(QueryKey::new(["documents"]))
            .writes_to(|name: &String| QueryKey::new(["documents", "detail"]).with(name.clone()))
            .success_toast("Document created")
            .run(&client, &notifier, || async { Ok("b".to_string()) })
            .await
            .unwrap();

        assert_eq!(created, "b");
        assert!(client.peek::<Vec<String>>(&list).await.is_stale);
        let detail: Option<String> = client
            .get_query_data(&QueryKey::new(["documents", "detail", "b"]))
            .await;
        assert_eq!(detail.as_deref(), Some("b"));
        assert_eq!(toasts.try_recv().unwrap().level, ToastLevel::Success);
    }

    #[tokio::test]
    async fn test_failure_reports_and_leaves_cache() {
        let client = client();
        let notifier = Notifier::new();
        let mut toasts = notifier.subscribe();
        let list = QueryKey::new(["team", "members"]);
        client.set_query_data(&list, &vec!["m1"]).await.unwrap();
        let before = client.get_raw(&list).await;

        let result: Result<String> = Mutation::new("invite_member")
            .invalidates(QueryKey::new(["team"]))
            .run(&client, &notifier, || async {
                Err(CollabError::Validation("email is required".into()))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(client.get_raw(&list).await, before);
        assert!(!client.peek::<Vec<String>>(&list).await.is_stale);
        let toast = toasts.try_recv().unwrap();
        assert_eq!(toast.level, ToastLevel::Error);
        assert_eq!(toast.message, "email is required");
    }
}
