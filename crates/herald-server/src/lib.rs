//! # herald-server
//!
//! Webhook fulfillment for the conversational platform.
//!
//! A request flows through a fixed pipeline: normalize the query, read the
//! announcement store, match, then either format the matched record or ask
//! the generative model. [`bootstrap`] builds the immutable [`AppContext`]
//! once at startup; [`routes`] exposes it over HTTP.

pub mod bootstrap;
pub mod context;
pub mod error;
pub mod fulfillment;
pub mod logging;
pub mod routes;
pub mod server;

pub use context::AppContext;
pub use error::FulfillmentError;
pub use fulfillment::{Fulfillment, Outcome, fulfill};
