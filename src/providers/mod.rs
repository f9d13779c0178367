//! Upstream provider integrations
//!
//! One module per provider. Each owns its upstream response shapes (private
//! serde structs), the normalized output record returned to the caller, the
//! pure mapping between the two, and a fetch function that builds the
//! provider URL from the configuration and runs call → map.

pub mod events;
pub mod location;
pub mod movies;
pub mod trails;
pub mod weather;
pub mod yelp;
