// shop/model/mod.rs - Catalog view model shared by every layer
//
// These structs travel between the product source, the filter engine and the
// JSON API. Numeric shop inputs arrive as free text and are parsed leniently:
// anything that does not parse is treated as "not set".

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Label of the "no restriction" entry in the category list
pub const ALL_CATEGORIES: &str = "All";

/// Categories offered by the shop sidebar. Products may carry any other value.
pub const KNOWN_CATEGORIES: &[&str] = &[
    "Devotional Items",
    "Prasadam",
    "Handicrafts",
    "Clothing",
    "Souvenirs",
];

/// Product as shown in the shop (read-only view of a catalog row)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub category: String,
    pub vendor: String,
    pub rating: Decimal,
    pub review_count: i32,
    pub in_stock: bool,
    pub is_authentic: bool,
    pub featured: bool,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Product {
    /// Whether the card shows a struck-through original price
    pub fn has_discount(&self) -> bool {
        matches!(self.original_price, Some(original) if original > self.price)
    }

    /// Whole-number "% OFF" badge value
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= self.price || original <= Decimal::ZERO {
            return None;
        }

        ((original - self.price) / original * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
    }

    /// Amount saved per unit, zero when there is no discount
    pub fn savings(&self) -> Decimal {
        match self.original_price {
            Some(original) if original > self.price => original - self.price,
            _ => Decimal::ZERO,
        }
    }

    /// Number of filled stars out of five
    pub fn filled_stars(&self) -> u8 {
        self.rating.floor().to_u8().unwrap_or(0).min(5)
    }

    pub fn price_label(&self) -> String {
        format_rupees(self.price)
    }

    pub fn original_price_label(&self) -> Option<String> {
        if self.has_discount() {
            self.original_price.map(format_rupees)
        } else {
            None
        }
    }

    pub fn cart_button_label(&self) -> &'static str {
        if self.in_stock {
            "Add to Cart"
        } else {
            "Notify When Available"
        }
    }
}

/// Format an amount as "₹1,299" (fraction shown only when non-zero)
pub fn format_rupees(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let text = rounded.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if fraction.trim_end_matches('0').is_empty() {
        format!("{sign}₹{grouped}")
    } else {
        format!("{sign}₹{grouped}.{fraction:0<2}")
    }
}

/// Category restriction
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// "All" (any case) or a blank value means no restriction
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_CATEGORIES) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(trimmed.to_string())
        }
    }
}

/// Predicates chosen by the shopper. All of them must hold (AND).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub text: String,
    pub category: CategoryFilter,
    pub price_min: Option<Decimal>,
    pub price_max: Option<Decimal>,
    pub in_stock_only: bool,
    pub min_rating: Option<Decimal>,
}

impl SearchCriteria {
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
            && self.category == CategoryFilter::All
            && self.price_min.is_none()
            && self.price_max.is_none()
            && !self.in_stock_only
            && self.min_rating.is_none()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOption {
    /// Keep source order
    #[default]
    Relevance,
    Featured,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    Newest,
}

impl SortOption {
    pub const ALL: [SortOption; 6] = [
        SortOption::Relevance,
        SortOption::Featured,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::RatingDesc,
        SortOption::Newest,
    ];

    /// Parse a sort key from the shop's select box. Unknown keys keep source order.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "featured" => SortOption::Featured,
            "price-low" | "price_asc" | "price-asc" => SortOption::PriceAsc,
            "price-high" | "price_desc" | "price-desc" => SortOption::PriceDesc,
            "rating" | "rating_desc" | "rating-desc" => SortOption::RatingDesc,
            "newest" => SortOption::Newest,
            other => {
                if !other.is_empty() && other != "relevance" {
                    tracing::debug!("Unknown sort key '{}', keeping source order", other);
                }
                SortOption::Relevance
            }
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SortOption::Relevance => "relevance",
            SortOption::Featured => "featured",
            SortOption::PriceAsc => "price-low",
            SortOption::PriceDesc => "price-high",
            SortOption::RatingDesc => "rating",
            SortOption::Newest => "newest",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOption::Relevance => write!(f, "Relevance"),
            SortOption::Featured => write!(f, "Featured"),
            SortOption::PriceAsc => write!(f, "Price: Low to High"),
            SortOption::PriceDesc => write!(f, "Price: High to Low"),
            SortOption::RatingDesc => write!(f, "Highest Rated"),
            SortOption::Newest => write!(f, "Newest"),
        }
    }
}

/// Zero-based page request. `page_size == 0` returns everything on one page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    pub fn offset(&self) -> usize {
        (self.page as usize).saturating_mul(self.page_size as usize)
    }
}

/// Facet count for the category sidebar
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    pub value: String,
    pub count: usize,
}

/// One page of filtered, sorted products
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogPage {
    pub products: Vec<Product>,
    /// Products matching every predicate
    pub total_count: usize,
    /// Products in the source before filtering
    pub catalog_size: usize,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub category_facets: Vec<FacetCount>,
    pub summary: String,
}

impl CatalogPage {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

/// "Showing N of M products" line above the grid
pub fn result_summary(shown: usize, catalog_size: usize) -> String {
    format!("Showing {} of {} products", shown, catalog_size)
}

/// Raw shop controls as they arrive from a query string.
///
/// Every field is free text; `to_criteria` decides what is usable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub sort: Option<String>,
    pub in_stock: Option<String>,
    pub min_rating: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl ShopQuery {
    pub fn to_criteria(&self) -> SearchCriteria {
        SearchCriteria {
            text: self.q.as_deref().map(str::trim).unwrap_or_default().to_string(),
            category: self
                .category
                .as_deref()
                .map(CategoryFilter::from_input)
                .unwrap_or_default(),
            price_min: parse_decimal_input("min_price", self.min_price.as_deref()),
            price_max: parse_decimal_input("max_price", self.max_price.as_deref()),
            in_stock_only: parse_flag(self.in_stock.as_deref()),
            min_rating: parse_decimal_input("min_rating", self.min_rating.as_deref()),
        }
    }

    pub fn sort(&self) -> SortOption {
        self.sort.as_deref().map(SortOption::from_key).unwrap_or_default()
    }

    /// Page request with the page size falling back to `default_size` and
    /// kept within `1..=max_size`. A zero from the query string is not
    /// "everything": that meaning is reserved for requests built in code.
    pub fn page_request(&self, default_size: u32, max_size: u32) -> PageRequest {
        let page = parse_u32_input("page", self.page.as_deref()).unwrap_or(0);
        let page_size = parse_u32_input("page_size", self.page_size.as_deref())
            .filter(|&size| size > 0)
            .unwrap_or(default_size)
            .min(max_size)
            .max(1);
        PageRequest { page, page_size }
    }
}

/// Parse a numeric text field; blank or malformed input means "not set"
pub fn parse_decimal_input(field: &str, input: Option<&str>) -> Option<Decimal> {
    let trimmed = input?.trim();
    if trimmed.is_empty() {
        return None;
    }
    match Decimal::from_str(trimmed) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!("Ignoring malformed {} '{}': {}", field, trimmed, e);
            None
        }
    }
}

fn parse_u32_input(field: &str, input: Option<&str>) -> Option<u32> {
    let trimmed = input?.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<u32>() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!("Ignoring malformed {} '{}': {}", field, trimmed, e);
            None
        }
    }
}

fn parse_flag(input: Option<&str>) -> bool {
    matches!(
        input.map(|s| s.trim().to_ascii_lowercase()).as_deref(),
        Some("true" | "1" | "yes" | "on")
    )
}
