//! Query handling: local filtering, remote lookups and result publication.
//!
//! A [`SearchSession`] ties the pieces together. Each text change gets a new
//! sequence number from the [`QuerySequencer`], local matches are published
//! immediately by the [`ResultAggregator`], and the remote lookup runs on a
//! worker thread. Replies are only applied if their sequence is still the
//! latest one.

mod aggregator;
mod commands;
mod config;
mod dedupe;
mod filter;
mod sequencer;
mod session;
mod worker;

pub use aggregator::{FnSink, ResultAggregator, ResultSink, SubscriptionId, combine};
pub use config::SearchOptions;
pub use dedupe::dedupe;
pub use filter::filter;
pub use sequencer::{QuerySequencer, SessionState};
pub use session::SearchSession;
