//! Filter descriptions for the `/beers` endpoint.

use chrono::NaiveDate;

use super::condition::Condition;
use super::parameter::{
    DateParameter, Parameter, QueryParameter, RangeField, RangeParameter, StringParameter,
};

/// One search constraint on the beers catalogue.
///
/// Each filter resolves to exactly one query parameter. Filters are never
/// merged: two `Abv` filters produce two `abv_*` parameters.
///
/// # Examples
///
/// ```
/// use punk_api_rs::beers::{BeerFilter, Condition};
///
/// let filter = BeerFilter::ibu(Condition::Lower, 40.0);
/// assert_eq!(filter.to_pair(), ("ibu_lt".to_string(), "40".to_string()));
///
/// let filter = BeerFilter::food("Mango Bisque");
/// assert_eq!(filter.to_pair(), ("food".to_string(), "Mango_Bisque".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum BeerFilter {
    // ==================== Range Filters ====================
    /// Alcohol by volume above or below `value`.
    Abv { condition: Condition, value: f32 },

    /// Bitterness above or below `value`.
    Ibu { condition: Condition, value: f32 },

    /// Color above or below `value`.
    Ebc { condition: Condition, value: f32 },

    // ==================== String Filters ====================
    /// Beers whose name matches.
    BeerName(String),

    /// Beers brewed with the named yeast.
    Yeast(String),

    /// Beers brewed with the named hops.
    Hops(String),

    /// Beers brewed with the named malt.
    Malt(String),

    /// Beers that pair with the named food.
    Food(String),

    // ==================== Date Filter ====================
    /// Beers first brewed after or before the month of `date`.
    Brewed { condition: Condition, date: NaiveDate },

    // ==================== Id Filter ====================
    /// Beers with one of the given ids.
    Ids(Vec<i64>),
}

impl BeerFilter {
    /// Creates an alcohol-by-volume filter.
    pub fn abv(condition: Condition, value: f32) -> Self {
        BeerFilter::Abv { condition, value }
    }

    /// Creates a bitterness filter.
    pub fn ibu(condition: Condition, value: f32) -> Self {
        BeerFilter::Ibu { condition, value }
    }

    /// Creates a color filter.
    pub fn ebc(condition: Condition, value: f32) -> Self {
        BeerFilter::Ebc { condition, value }
    }

    /// Creates a range filter over the given field.
    pub fn range(field: RangeField, condition: Condition, value: f32) -> Self {
        match field {
            RangeField::Abv => BeerFilter::abv(condition, value),
            RangeField::Ibu => BeerFilter::ibu(condition, value),
            RangeField::Ebc => BeerFilter::ebc(condition, value),
        }
    }

    /// Creates a beer name filter.
    pub fn beer_name(value: impl Into<String>) -> Self {
        BeerFilter::BeerName(value.into())
    }

    /// Creates a yeast filter.
    pub fn yeast(value: impl Into<String>) -> Self {
        BeerFilter::Yeast(value.into())
    }

    /// Creates a hops filter.
    pub fn hops(value: impl Into<String>) -> Self {
        BeerFilter::Hops(value.into())
    }

    /// Creates a malt filter.
    pub fn malt(value: impl Into<String>) -> Self {
        BeerFilter::Malt(value.into())
    }

    /// Creates a food pairing filter.
    pub fn food(value: impl Into<String>) -> Self {
        BeerFilter::Food(value.into())
    }

    /// Creates a brew date filter.
    pub fn brewed(condition: Condition, date: NaiveDate) -> Self {
        BeerFilter::Brewed { condition, date }
    }

    /// Creates an id list filter. Order is kept as given.
    pub fn ids(ids: impl IntoIterator<Item = i64>) -> Self {
        BeerFilter::Ids(ids.into_iter().collect())
    }

    /// Resolves this filter to its query parameter.
    pub fn parameter(&self) -> Parameter {
        match self {
            BeerFilter::Abv { condition, value } => {
                RangeParameter::new(RangeField::Abv, *condition, *value).into()
            }
            BeerFilter::Ibu { condition, value } => {
                RangeParameter::new(RangeField::Ibu, *condition, *value).into()
            }
            BeerFilter::Ebc { condition, value } => {
                RangeParameter::new(RangeField::Ebc, *condition, *value).into()
            }
            BeerFilter::BeerName(value) => StringParameter::new("beer_name", value).into(),
            BeerFilter::Yeast(value) => StringParameter::new("yeast", value).into(),
            BeerFilter::Hops(value) => StringParameter::new("hops", value).into(),
            BeerFilter::Malt(value) => StringParameter::new("malt", value).into(),
            BeerFilter::Food(value) => StringParameter::new("food", value).into(),
            BeerFilter::Brewed { condition, date } => {
                DateParameter::new("brewed", *condition, *date).into()
            }
            BeerFilter::Ids(ids) => StringParameter::ids(ids).into(),
        }
    }

    /// Resolves this filter straight to its key and value.
    pub fn to_pair(&self) -> (String, String) {
        self.parameter().to_pair()
    }
}
