//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```
//! use punk_api_rs::prelude::*;
//!
//! // Now you have access to:
//! // - BeerFilter, Condition (filter descriptions)
//! // - BeersRequest (query string builder)
//! // - QueryParameter, Parameter, QueryPair (serialized parameters)
//! // - Error, Result (error handling)
//! ```

// Filter descriptions
pub use crate::beers::{BeerFilter, Condition, RangeField};

// Serialized parameters
pub use crate::beers::{
    DateParameter, Parameter, QueryPair, QueryParameter, RangeParameter, StringParameter,
};

// Request building
pub use crate::beers::{BeersRequest, DEFAULT_BASE_URL, QUERY_KEYS};

// Date handling
pub use crate::beers::{format_brew_date, parse_brew_date, BREW_DATE_FORMAT};

// Error types
pub use crate::error::{Error, Result};
