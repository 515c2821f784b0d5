//! Typed query parameters for the Punk beer API.
//!
//! The crate turns [`BeerFilter`](beers::BeerFilter) values into the
//! `key=value` pairs the `/beers` endpoint understands, and joins them into a
//! query string with [`BeersRequest`](beers::BeersRequest).
//!
//! # Quick Start
//!
//! ```
//! use punk_api_rs::prelude::*;
//!
//! let request = BeersRequest::new()
//!     .with_filter(BeerFilter::abv(Condition::Greater, 6.5))
//!     .with_filter(BeerFilter::beer_name("Punk IPA"));
//!
//! assert_eq!(request.to_query_string().unwrap(), "abv_gt=6.5&beer_name=Punk_IPA");
//! ```

pub mod beers;
pub mod error;
pub mod prelude;
