//! Query command implementation.
//!
//! Turns command line filters into a `/beers` query string, JSON document,
//! or full URL.

use punk_api_rs::beers::{BeerFilter, BeersRequest, Condition, RangeField};

use super::config::Config;
use super::{CommandContext, Result};
use crate::cli::{OutputFormat, QueryArgs};

/// Builds the request described by the command line flags.
///
/// Filters are added in the order of [`QueryArgs`] fields, which matches
/// the key order of `punk keys`.
pub fn build_request(args: &QueryArgs) -> BeersRequest {
    let ranges = [
        (RangeField::Abv, Condition::Greater, args.abv_gt),
        (RangeField::Abv, Condition::Lower, args.abv_lt),
        (RangeField::Ibu, Condition::Greater, args.ibu_gt),
        (RangeField::Ibu, Condition::Lower, args.ibu_lt),
        (RangeField::Ebc, Condition::Greater, args.ebc_gt),
        (RangeField::Ebc, Condition::Lower, args.ebc_lt),
    ];

    let mut request: BeersRequest = ranges
        .into_iter()
        .filter_map(|(field, condition, value)| {
            value.map(|v| BeerFilter::range(field, condition, v))
        })
        .collect();

    if let Some(ref name) = args.beer_name {
        request.push(BeerFilter::beer_name(name.as_str()));
    }
    if let Some(ref yeast) = args.yeast {
        request.push(BeerFilter::yeast(yeast.as_str()));
    }
    if let Some(date) = args.brewed_gt {
        request.push(BeerFilter::brewed(Condition::Greater, date));
    }
    if let Some(date) = args.brewed_lt {
        request.push(BeerFilter::brewed(Condition::Lower, date));
    }
    if let Some(ref hops) = args.hops {
        request.push(BeerFilter::hops(hops.as_str()));
    }
    if let Some(ref malt) = args.malt {
        request.push(BeerFilter::malt(malt.as_str()));
    }
    if let Some(ref food) = args.food {
        request.push(BeerFilter::food(food.as_str()));
    }
    if let Some(ref ids) = args.ids {
        request.push(BeerFilter::ids(ids.iter().copied()));
    }

    if let Some(page) = args.page {
        request = request.with_page(page);
    }
    if let Some(per_page) = args.per_page {
        request = request.with_per_page(per_page);
    }

    request
}

/// Picks the output format: `--json` beats `--url`, which beats the config.
fn output_format(ctx: &CommandContext, args: &QueryArgs, config: &Config) -> OutputFormat {
    if ctx.json_output {
        OutputFormat::Json
    } else if args.url {
        OutputFormat::Url
    } else {
        config.output.format.unwrap_or_default()
    }
}

/// Executes the query command.
pub fn execute(ctx: &CommandContext, args: &QueryArgs, config: &Config) -> Result<()> {
    let request = build_request(args);
    let base_url = config.base_url();

    tracing::debug!(filters = request.filter_count(), base_url, "building beers query");

    match output_format(ctx, args, config) {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "query": request.to_query_string()?,
                "url": request.url(base_url)?,
                "params": request.query_pairs(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Url => println!("{}", request.url(base_url)?),
        OutputFormat::Query => println!("{}", request.to_query_string()?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ctx(json_output: bool) -> CommandContext {
        CommandContext {
            json_output,
            use_colors: false,
            quiet: false,
        }
    }

    #[test]
    fn test_build_request_empty() {
        let request = build_request(&QueryArgs::default());
        assert!(request.is_empty());
    }

    #[test]
    fn test_build_request_orders_filters() {
        let args = QueryArgs {
            food: Some("burger".to_string()),
            ids: Some(vec![3, 1]),
            abv_lt: Some(7.0),
            ibu_gt: Some(20.0),
            brewed_gt: NaiveDate::from_ymd_opt(2009, 2, 1),
            beer_name: Some("Buzz".to_string()),
            per_page: Some(5),
            ..QueryArgs::default()
        };

        let keys: Vec<String> = build_request(&args)
            .pairs()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(
            keys,
            ["abv_lt", "ibu_gt", "beer_name", "brewed_gt", "food", "ids", "per_page"]
        );
    }

    #[test]
    fn test_build_request_values() {
        let args = QueryArgs {
            ebc_gt: Some(10.5),
            malt: Some("Extra Pale".to_string()),
            brewed_lt: NaiveDate::from_ymd_opt(2012, 11, 1),
            ..QueryArgs::default()
        };

        assert_eq!(
            build_request(&args).to_query_string().unwrap(),
            "ebc_gt=10.5&brewed_lt=11-2012&malt=Extra_Pale"
        );
    }

    #[test]
    fn test_output_format_precedence() {
        let mut config = Config::default();
        config.output.format = Some(OutputFormat::Url);

        let args = QueryArgs::default();
        assert_eq!(output_format(&ctx(false), &args, &config), OutputFormat::Url);
        assert_eq!(output_format(&ctx(true), &args, &config), OutputFormat::Json);

        let args = QueryArgs {
            url: true,
            ..QueryArgs::default()
        };
        assert_eq!(
            output_format(&ctx(false), &args, &Config::default()),
            OutputFormat::Url
        );
        assert_eq!(
            output_format(&ctx(false), &QueryArgs::default(), &Config::default()),
            OutputFormat::Query
        );
    }
}
