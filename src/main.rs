//! Storefront Listings - filter, sort and slice exported record snapshots

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use serde::{de::DeserializeOwned, Serialize};
use storefront_listings::domain::records::{ActivityLog, ApiKey, InventoryItem, Product, Review, Role, Transaction};
use storefront_listings::listing::{
    apply_filters, rank_by, DatePreset, FilterCriterion, ListingQuery, PageRequest, RangeValue, Record, SortKey,
};
use storefront_listings::{catalog, Config, Locale, MessageBundle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "storefront-listings", version, about = "Filter, sort and slice storefront record snapshots")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a listing query over a snapshot and print the result set as JSON
    List(ListArgs),
    /// Rank customers by completed transaction volume
    TopCustomers {
        #[arg(short, long)]
        input: PathBuf,
        /// Defaults to STOREFRONT_TOP_N
        #[arg(short, long)]
        limit: Option<usize>,
        /// Only transactions in this currency (required when customers pay in several)
        #[arg(long)]
        currency: Option<String>,
    },
    /// Print sort and date-range labels for a locale
    Labels {
        #[arg(long)]
        locale: Option<Locale>,
        /// Extra message tables, {"vi": {"key": "text"}}
        #[arg(long)]
        messages: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind { Products, Activity, Inventory, Transactions, Roles, Reviews, ApiKeys }

#[derive(Debug, Args)]
struct ListArgs {
    #[arg(value_enum)]
    kind: Kind,
    /// JSON snapshot: an array, {"data": [...]} or null
    #[arg(short, long)]
    input: PathBuf,
    /// Listing query as JSON; the flags below are added to it
    #[arg(long)]
    query: Option<PathBuf>,
    #[arg(short, long)]
    search: Option<String>,
    /// FIELD=VALUE exact match ("all" switches it off)
    #[arg(long = "eq", value_parser = parse_assignment)]
    equals: Vec<(String, String)>,
    /// FIELD=VALUE membership in a list field
    #[arg(long = "has", value_parser = parse_assignment)]
    any_of: Vec<(String, String)>,
    /// FIELD=BOUND inclusive lower bound (number or RFC 3339 time)
    #[arg(long, value_parser = parse_assignment)]
    min: Vec<(String, String)>,
    /// FIELD=BOUND inclusive upper bound
    #[arg(long, value_parser = parse_assignment)]
    max: Vec<(String, String)>,
    /// FIELD=BOUND exclusive upper bound
    #[arg(long, value_parser = parse_assignment)]
    below: Vec<(String, String)>,
    /// FIELD=PRESET: today, this_week, this_month or last_month
    #[arg(long, value_parser = parse_assignment)]
    within: Vec<(String, String)>,
    /// price-low, price-high, name, newest or oldest
    #[arg(long)]
    sort: Option<String>,
    #[arg(long)]
    offset: Option<usize>,
    #[arg(long)]
    limit: Option<usize>,
    #[arg(long, conflicts_with_all = ["offset", "limit", "top"])]
    page: Option<usize>,
    #[arg(long, requires = "page")]
    per_page: Option<usize>,
    /// Only the first STOREFRONT_TOP_N rows
    #[arg(long, conflicts_with_all = ["offset", "limit"])]
    top: bool,
}

fn parse_assignment(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => Ok((field.trim().to_string(), value.trim().to_string())),
        _ => Err(format!("expected FIELD=VALUE, got `{raw}`")),
    }
}

fn parse_bound(raw: &str) -> Result<RangeValue> {
    if let Ok(n) = Decimal::from_str(raw) {
        return Ok(RangeValue::Number(n));
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(t) => Ok(RangeValue::Timestamp(t.with_timezone(&Utc))),
        Err(_) => bail!("`{raw}` is neither a number nor an RFC 3339 timestamp"),
    }
}

fn build_query(args: &ListArgs, config: &Config) -> Result<ListingQuery> {
    let mut query = match &args.query {
        Some(path) => {
            let json = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))?
        }
        None => ListingQuery::new(),
    };

    if let Some(q) = &args.search {
        query = query.with_criterion(FilterCriterion::search(q));
    }
    for (field, value) in &args.equals {
        query = query.with_criterion(FilterCriterion::equals(field, value));
    }
    for (field, value) in &args.any_of {
        query = query.with_criterion(FilterCriterion::any_of(field, value));
    }

    // min/max/below on the same field form one range
    let mut ranges: BTreeMap<&str, (Option<RangeValue>, Option<RangeValue>, bool)> = BTreeMap::new();
    for (field, raw) in &args.min {
        ranges.entry(field).or_default().0 = Some(parse_bound(raw)?);
    }
    for (field, raw) in &args.max {
        ranges.entry(field).or_default().1 = Some(parse_bound(raw)?);
    }
    for (field, raw) in &args.below {
        let range = ranges.entry(field).or_default();
        range.1 = Some(parse_bound(raw)?);
        range.2 = true;
    }
    for (field, (min, max, exclusive)) in ranges {
        let criterion = FilterCriterion::range(field, min, max);
        query = query.with_criterion(if exclusive { criterion.exclusive_upper() } else { criterion });
    }

    let now = Utc::now();
    for (field, name) in &args.within {
        let preset = DatePreset::parse(name).with_context(|| format!("unknown date preset `{name}`"))?;
        query = query.with_criterion(preset.criterion(field, now));
    }

    if let Some(sort) = &args.sort {
        let key = SortKey::parse(sort);
        if key == SortKey::Unsorted {
            tracing::warn!(sort = %sort, "unknown sort key, keeping snapshot order");
        }
        query = query.sorted_by(key);
    }

    if args.top {
        query = query.window(0, config.top_n);
    } else if let Some(page) = args.page {
        query = query.page(PageRequest::new(page, config.page_size(args.per_page))?);
    } else if args.offset.is_some() || args.limit.is_some() {
        query.offset = args.offset.unwrap_or(0);
        query.limit = args.limit;
    }
    Ok(query)
}

fn completed_in(currency: Option<&str>) -> Vec<FilterCriterion> {
    let mut criteria = vec![FilterCriterion::equals("status", "completed")];
    if let Some(code) = currency {
        criteria.push(FilterCriterion::equals("currency", code.trim().to_uppercase()));
    }
    criteria
}

fn list<R: Record + Clone + Serialize + DeserializeOwned>(args: &ListArgs, query: &ListingQuery) -> Result<()> {
    let records: Vec<R> = catalog::load_records(&args.input)
        .with_context(|| format!("loading {}", args.input.display()))?;
    let result = query.run(&records);
    tracing::info!(total = result.total, matched = result.matched, shown = result.items.len(), "listing ready");
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    let config = Config::from_env()?;

    match Cli::parse().command {
        Command::List(args) => {
            let query = build_query(&args, &config)?;
            tracing::debug!(?query, "listing query");
            match args.kind {
                Kind::Products => list::<Product>(&args, &query),
                Kind::Activity => list::<ActivityLog>(&args, &query),
                Kind::Inventory => list::<InventoryItem>(&args, &query),
                Kind::Transactions => list::<Transaction>(&args, &query),
                Kind::Roles => list::<Role>(&args, &query),
                Kind::Reviews => list::<Review>(&args, &query),
                Kind::ApiKeys => list::<ApiKey>(&args, &query),
            }
        }
        Command::TopCustomers { input, limit, currency } => {
            let txs: Vec<Transaction> = catalog::load_records(&input).with_context(|| format!("loading {}", input.display()))?;
            let completed = apply_filters(&txs, &completed_in(currency.as_deref()));
            let top = rank_by(&completed, Transaction::customer, Transaction::amount, limit.unwrap_or(config.top_n))
                .context("pass --currency to rank one currency at a time")?;
            println!("{}", serde_json::to_string_pretty(&top)?);
            Ok(())
        }
        Command::Labels { locale, messages } => {
            let mut bundle = MessageBundle::builtin();
            if let Some(path) = messages {
                let json = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
                bundle.merge(MessageBundle::from_json(config.default_locale, &json)?);
            }
            let locale = locale.unwrap_or(config.default_locale);
            for key in SortKey::OPTIONS {
                println!("{}\t{}", key, bundle.sort_label(locale, key));
            }
            for preset in DatePreset::ALL {
                println!("{}\t{}", preset.as_str(), bundle.preset_label(locale, preset));
            }
            Ok(())
        }
    }
}
