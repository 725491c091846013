//! Client for the Samples REST API.
//!
//! List routes return one page at a time. [`pagination::lazy_get`] (blocking)
//! and [`Client::lazy_get`] (async) hide the cursor bookkeeping and expose
//! every domain object of a listing as one lazily fetched sequence.

mod client;
mod errors;
pub mod pagination;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::pagination::{lazy_get, lazy_stream, LazyGet, Page, PageFetcher, PageRequest};
pub use self::query::{
    ApiRequest, GetStatus, ObservationQuery, ObservedPropertyQuery, ProjectQuery, Query,
    QueryCommon, SamplingLocationQuery,
};
