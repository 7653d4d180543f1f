//! Query cache, retry policy and mutations
//!
//! Every data-query hook reads through [`QueryClient`]; every write goes
//! through a [`Mutation`] so invalidation happens in one place.

pub mod client;
pub mod key;
pub mod mutation;
pub mod retry;
pub mod state;

pub use client::QueryClient;
pub use key::QueryKey;
pub use mutation::Mutation;
pub use retry::RetryPolicy;
pub use state::QueryState;
