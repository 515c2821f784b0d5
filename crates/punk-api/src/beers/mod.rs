//! Query parameters for the `/beers` endpoint.
//!
//! A [`BeerFilter`] describes one search constraint. Each filter resolves to
//! exactly one [`Parameter`], whose key and value go into the query string.
//!
//! # Keys
//!
//! | Filter | Key |
//! |---|---|
//! | `Abv`, `Ibu`, `Ebc` | `abv_gt`, `abv_lt`, `ibu_gt`, `ibu_lt`, `ebc_gt`, `ebc_lt` |
//! | `BeerName` | `beer_name` |
//! | `Yeast`, `Hops`, `Malt`, `Food` | `yeast`, `hops`, `malt`, `food` |
//! | `Brewed` | `brewed_gt`, `brewed_lt` |
//! | `Ids` | `ids` |
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use punk_api_rs::beers::{BeerFilter, Condition, QueryParameter};
//!
//! let brewed = NaiveDate::from_ymd_opt(2010, 5, 1).unwrap();
//! let param = BeerFilter::brewed(Condition::Lower, brewed).parameter();
//! assert_eq!(param.key(), "brewed_lt");
//! assert_eq!(param.value(), "05-2010");
//! ```

mod condition;
mod date_format;
mod filter;
mod parameter;
mod request;

pub use condition::Condition;
pub use date_format::{format_brew_date, parse_brew_date, BREW_DATE_FORMAT};
pub use filter::BeerFilter;
pub use parameter::{
    DateParameter, Parameter, QueryPair, QueryParameter, RangeField, RangeParameter,
    StringParameter,
};
pub use request::{BeersRequest, DEFAULT_BASE_URL, QUERY_KEYS};

#[cfg(test)]
mod tests;
