//! Listing domain: canonical records, the curated catalog, the pure filter
//! engine, and the source gateway with its provider chain and synthetic
//! fallback.

pub mod catalog;
pub mod domain;
pub mod filter;
pub mod gateway;
mod router;

pub use catalog::JobCatalog;
pub use domain::{
    Connection, ConnectionStrength, Experience, IdentifiedStrength, Industry, Job, JobPosition,
    JobType,
};
pub use filter::JobFilter;
pub use gateway::{
    GatewaySettings, ListingGateway, ListingProvider, ListingQuery, ProviderError, RawListing,
    SearchReport, SearchRequest,
};
pub use router::{listing_router, ListingContext};
