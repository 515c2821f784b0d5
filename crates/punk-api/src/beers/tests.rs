//! Tests for filter translation and request building.

use std::collections::HashSet;

use chrono::NaiveDate;

use super::*;

fn brew_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2010, 5, 17).unwrap()
}

/// One filter of every variant, with both conditions for the dated and ranged ones.
fn every_filter() -> Vec<BeerFilter> {
    let mut filters = Vec::new();
    for condition in Condition::ALL {
        for field in RangeField::ALL {
            filters.push(BeerFilter::range(field, condition, 4.5));
        }
        filters.push(BeerFilter::brewed(condition, brew_date()));
    }
    filters.extend([
        BeerFilter::beer_name("Punk IPA"),
        BeerFilter::yeast("Wyeast 1056"),
        BeerFilter::hops("Amarillo"),
        BeerFilter::malt("Maris Otter"),
        BeerFilter::food("Mango Bisque"),
        BeerFilter::ids([1, 2]),
    ]);
    filters
}

// ==================== Translation Tests ====================

#[test]
fn test_range_filters() {
    assert_eq!(
        BeerFilter::abv(Condition::Greater, 8.0).to_pair(),
        ("abv_gt".to_string(), "8".to_string())
    );
    assert_eq!(
        BeerFilter::abv(Condition::Lower, 4.7).to_pair(),
        ("abv_lt".to_string(), "4.7".to_string())
    );
    assert_eq!(
        BeerFilter::ibu(Condition::Greater, 60.0).to_pair(),
        ("ibu_gt".to_string(), "60".to_string())
    );
    assert_eq!(
        BeerFilter::ebc(Condition::Lower, 12.5).to_pair(),
        ("ebc_lt".to_string(), "12.5".to_string())
    );
}

#[test]
fn test_range_constructor_matches_variant() {
    assert_eq!(
        BeerFilter::range(RangeField::Ibu, Condition::Lower, 30.0),
        BeerFilter::Ibu {
            condition: Condition::Lower,
            value: 30.0
        }
    );
}

#[test]
fn test_string_filters() {
    let cases = [
        (BeerFilter::beer_name("Mango Bisque"), "beer_name"),
        (BeerFilter::yeast("Mango Bisque"), "yeast"),
        (BeerFilter::hops("Mango Bisque"), "hops"),
        (BeerFilter::malt("Mango Bisque"), "malt"),
        (BeerFilter::food("Mango Bisque"), "food"),
    ];
    for (filter, key) in cases {
        assert_eq!(filter.to_pair(), (key.to_string(), "Mango_Bisque".to_string()));
    }
}

#[test]
fn test_string_without_spaces_unchanged() {
    assert_eq!(BeerFilter::hops("Cascade").to_pair().1, "Cascade");
}

#[test]
fn test_string_no_case_folding_or_trimming() {
    assert_eq!(BeerFilter::food(" Spicy  Curry ").to_pair().1, "_Spicy__Curry_");
}

#[test]
fn test_brewed_filter() {
    let param = BeerFilter::brewed(Condition::Greater, brew_date()).parameter();
    assert_eq!(param.key(), "brewed_gt");
    assert_eq!(param.value(), "05-2010");

    let param = BeerFilter::brewed(Condition::Lower, brew_date()).parameter();
    assert_eq!(param.key(), "brewed_lt");
}

#[test]
fn test_ids_filter() {
    assert_eq!(BeerFilter::ids([]).to_pair(), ("ids".to_string(), String::new()));
    assert_eq!(BeerFilter::ids([5]).to_pair().1, "5");
    assert_eq!(BeerFilter::ids([5, 6, 7]).to_pair().1, "5|6|7");
    assert_eq!(BeerFilter::ids([7, 5, 6]).to_pair().1, "7|5|6");
}

#[test]
fn test_parameter_kind_per_variant() {
    assert!(matches!(
        BeerFilter::abv(Condition::Greater, 1.0).parameter(),
        Parameter::Range(_)
    ));
    assert!(matches!(BeerFilter::malt("x").parameter(), Parameter::String(_)));
    assert!(matches!(BeerFilter::ids([1]).parameter(), Parameter::String(_)));
    assert!(matches!(
        BeerFilter::brewed(Condition::Lower, brew_date()).parameter(),
        Parameter::Date(_)
    ));
}

#[test]
fn test_translation_is_idempotent() {
    for filter in every_filter() {
        let first = filter.parameter();
        let second = filter.parameter();
        assert_eq!(first.key(), second.key());
        assert_eq!(first.value(), second.value());
    }
}

#[test]
fn test_every_key_is_reachable() {
    let produced: HashSet<String> = every_filter().iter().map(|f| f.to_pair().0).collect();
    let known: HashSet<String> = QUERY_KEYS.iter().map(|k| k.to_string()).collect();
    assert_eq!(produced, known);
}

#[test]
fn test_concurrent_date_translation() {
    let filter = BeerFilter::brewed(Condition::Greater, brew_date());

    let results: Vec<Vec<(String, String)>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..16)
            .map(|_| scope.spawn(|| (0..500).map(|_| filter.to_pair()).collect::<Vec<_>>()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let expected = ("brewed_gt".to_string(), "05-2010".to_string());
    for batch in results {
        assert!(batch.iter().all(|pair| *pair == expected));
    }
}

// ==================== Request Tests ====================

#[test]
fn test_empty_request() {
    let request = BeersRequest::new();
    assert!(request.is_empty());
    assert!(request.pairs().is_empty());
    assert_eq!(request.to_query_string().unwrap(), "");
    assert_eq!(
        request.url(DEFAULT_BASE_URL).unwrap(),
        "https://api.punkapi.com/v2/beers"
    );
}

#[test]
fn test_request_preserves_order() {
    let request = BeersRequest::new()
        .with_filter(BeerFilter::food("cheese"))
        .with_filter(BeerFilter::abv(Condition::Lower, 5.0))
        .with_filter(BeerFilter::beer_name("Trashy Blonde"));

    let keys: Vec<String> = request.pairs().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["food", "abv_lt", "beer_name"]);
}

#[test]
fn test_request_keeps_duplicates() {
    let request = BeersRequest::new()
        .with_filter(BeerFilter::abv(Condition::Greater, 4.0))
        .with_filter(BeerFilter::abv(Condition::Greater, 6.0));

    assert_eq!(request.filter_count(), 2);
    assert_eq!(request.to_query_string().unwrap(), "abv_gt=4&abv_gt=6");
}

#[test]
fn test_request_pagination_after_filters() {
    let request = BeersRequest::new()
        .with_page(2)
        .with_per_page(25)
        .with_filter(BeerFilter::yeast("American Ale"));

    assert_eq!(
        request.to_query_string().unwrap(),
        "yeast=American_Ale&page=2&per_page=25"
    );
}

#[test]
fn test_request_pagination_only_is_not_empty() {
    let request = BeersRequest::new().with_page(1);
    assert!(!request.is_empty());
    assert_eq!(request.filter_count(), 0);
}

#[test]
fn test_is_empty_matches_pairs() {
    let requests = [
        BeersRequest::new(),
        BeersRequest::new().with_page(3),
        BeersRequest::new().with_per_page(10),
        BeersRequest::new().with_filter(BeerFilter::ids([])),
    ];
    for request in requests {
        assert_eq!(request.is_empty(), request.pairs().is_empty());
    }
}

#[test]
fn test_request_encodes_values() {
    let request = BeersRequest::new()
        .with_filter(BeerFilter::food("fish & chips"))
        .with_filter(BeerFilter::ids([1, 2]));

    assert_eq!(
        request.to_query_string().unwrap(),
        "food=fish_%26_chips&ids=1%7C2"
    );
}

#[test]
fn test_request_url_trims_trailing_slash() {
    let request = BeersRequest::new().with_filter(BeerFilter::ids([3]));
    assert_eq!(
        request.url("http://localhost:8080/v2/").unwrap(),
        "http://localhost:8080/v2/beers?ids=3"
    );
}

#[test]
fn test_request_collect_and_extend() {
    let mut request: BeersRequest = vec![BeerFilter::hops("Citra")].into_iter().collect();
    request.extend([BeerFilter::malt("Pale")]);
    request.push(BeerFilter::ids([]));

    assert_eq!(
        request.pairs(),
        vec![
            ("hops".to_string(), "Citra".to_string()),
            ("malt".to_string(), "Pale".to_string()),
            ("ids".to_string(), String::new()),
        ]
    );
    assert_eq!(request.filters().len(), 3);
}

#[test]
fn test_query_pairs() {
    let request = BeersRequest::new().with_filter(BeerFilter::ebc(Condition::Greater, 20.0));
    assert_eq!(
        request.query_pairs(),
        vec![QueryPair {
            key: "ebc_gt".to_string(),
            value: "20".to_string()
        }]
    );
}
