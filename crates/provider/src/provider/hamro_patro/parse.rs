//! HTML scraping for the Hamro Patro pages.
//!
//! Each parser turns one page into the JSON object the provider contract
//! promises. Elements that are missing are skipped; a page that yields
//! nothing at all is an error.

use scraper::{ElementRef, Html, Selector};
use serde_json::{Map, Number, Value};

use super::Page;
use crate::errors::ProviderError;

/// Output field and CSS selector for each piece of the home page header.
const DATE_TIME_FIELDS: [(&str, &str); 5] = [
    ("nepaliDate", ".date .nep"),
    ("englishDate", ".date .eng"),
    ("time", ".time span"),
    ("tithi", ".events .tithi"),
    ("event", ".events .event"),
];

const RASHIFAL_ITEM: &str = ".item";
const RASHIFAL_HEADING: &str = "h3";
const RASHIFAL_TEXT: &str = ".desc";

const GOLD_ITEM: &str = ".gold-silver li";
const GOLD_NAME: &str = ".name";
const GOLD_PRICE: &str = ".price";

const FOREX_ROW: &str = "table tr";
const FOREX_CELL: &str = "td";

/// Stamp shown above the gold and forex tables.
const MARKET_DATE: &str = ".market-date";

pub fn parse_date_time(html: &str) -> Result<Value, ProviderError> {
    let page = Page::Home.name();
    let document = Html::parse_document(html);

    let mut fields = Map::new();
    for (name, css) in DATE_TIME_FIELDS {
        let selector = selector(page, css)?;
        if let Some(text) = first_text(&document, &selector) {
            fields.insert(name.to_string(), Value::String(text));
        }
    }

    if fields.is_empty() {
        return Err(ProviderError::parse(page, "no date or time found"));
    }
    Ok(Value::Object(fields))
}

pub fn parse_horoscope(html: &str) -> Result<Value, ProviderError> {
    let page = Page::Rashifal.name();
    let document = Html::parse_document(html);
    let item = selector(page, RASHIFAL_ITEM)?;
    let heading = selector(page, RASHIFAL_HEADING)?;
    let desc = selector(page, RASHIFAL_TEXT)?;

    let mut signs = Map::new();
    for element in document.select(&item) {
        let Some(name) = first_child_text(element, &heading) else {
            continue;
        };
        let Some(prediction) = first_child_text(element, &desc) else {
            continue;
        };
        let slug = sign_slug(&name);
        if slug.is_empty() {
            continue;
        }
        signs.insert(slug, Value::String(prediction));
    }

    if signs.is_empty() {
        return Err(ProviderError::parse(page, "no horoscope entries found"));
    }
    Ok(Value::Object(signs))
}

pub fn parse_gold_prices(html: &str) -> Result<Value, ProviderError> {
    let page = Page::Gold.name();
    let document = Html::parse_document(html);
    let item = selector(page, GOLD_ITEM)?;
    let name = selector(page, GOLD_NAME)?;
    let price = selector(page, GOLD_PRICE)?;

    let mut prices = Map::new();
    for element in document.select(&item) {
        let (Some(label), Some(amount)) = (
            first_child_text(element, &name),
            first_child_text(element, &price),
        ) else {
            continue;
        };

        let mut entry = Map::new();
        entry.insert("price".to_string(), parse_amount(&amount));
        if let Some(unit) = unit_of(&label) {
            entry.insert("unit".to_string(), Value::String(unit.to_string()));
        }
        prices.insert(label, Value::Object(entry));
    }

    if prices.is_empty() {
        return Err(ProviderError::parse(page, "no price rows found"));
    }
    insert_market_date(&document, page, &mut prices)?;
    Ok(Value::Object(prices))
}

pub fn parse_exchange_rates(html: &str) -> Result<Value, ProviderError> {
    let page = Page::Forex.name();
    let document = Html::parse_document(html);
    let row = selector(page, FOREX_ROW)?;
    let cell = selector(page, FOREX_CELL)?;

    let mut rates = Map::new();
    for element in document.select(&row) {
        let cells: Vec<String> = element.select(&cell).map(text_of).collect();
        let [label, unit, buy, sell, ..] = cells.as_slice() else {
            continue;
        };

        let mut entry = Map::new();
        entry.insert("unit".to_string(), parse_amount(unit));
        entry.insert("buy".to_string(), parse_amount(buy));
        entry.insert("sell".to_string(), parse_amount(sell));
        rates.insert(currency_code(label), Value::Object(entry));
    }

    if rates.is_empty() {
        return Err(ProviderError::parse(page, "no rate rows found"));
    }
    insert_market_date(&document, page, &mut rates)?;
    Ok(Value::Object(rates))
}

fn selector(page: &'static str, css: &str) -> Result<Selector, ProviderError> {
    Selector::parse(css)
        .map_err(|e| ProviderError::parse(page, format!("invalid selector `{css}`: {e}")))
}

/// Element text with runs of whitespace collapsed to single spaces.
fn text_of(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(|chunk| chunk.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .map(text_of)
        .find(|text| !text.is_empty())
}

fn first_child_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .map(text_of)
        .find(|text| !text.is_empty())
}

fn insert_market_date(
    document: &Html,
    page: &'static str,
    target: &mut Map<String, Value>,
) -> Result<(), ProviderError> {
    let stamp = selector(page, MARKET_DATE)?;
    if let Some(date) = first_text(document, &stamp) {
        target.insert("date".to_string(), Value::String(date));
    }
    Ok(())
}

/// "Mesh (मेष)" -> "mesh"
fn sign_slug(heading: &str) -> String {
    let name = heading.split('(').next().unwrap_or(heading);
    name.trim().to_lowercase()
}

/// "Gold Hallmark - tola" -> "tola"
fn unit_of(label: &str) -> Option<&str> {
    label
        .rsplit_once(" - ")
        .map(|(_, unit)| unit.trim())
        .filter(|unit| !unit.is_empty())
}

/// "U.S. Dollar (USD)" -> "USD"; labels without a code are kept whole.
fn currency_code(label: &str) -> String {
    label
        .rsplit_once('(')
        .and_then(|(_, rest)| rest.split_once(')'))
        .map(|(code, _)| code.trim())
        .filter(|code| !code.is_empty())
        .unwrap_or(label)
        .to_string()
}

/// Reads the first number in `raw`, ignoring any currency prefix and
/// thousands separators. Text that holds no number is kept as a string.
fn parse_amount(raw: &str) -> Value {
    let digits: String = raw
        .trim_start_matches(|c: char| !c.is_ascii_digit())
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .filter(|c| *c != ',')
        .collect();
    let digits = digits.trim_end_matches('.');

    if let Ok(whole) = digits.parse::<i64>() {
        return Value::from(whole);
    }
    digits
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(raw.trim().to_string()))
}
