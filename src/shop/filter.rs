// shop/filter.rs - Catalog filter/sort engine
//
// Pure functions over a borrowed product slice. Nothing here mutates the
// source records: results are new vectors, so the same catalog can be
// re-filtered on every keystroke.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::shop::model::*;

/// A boolean test applied to one product to decide inclusion
pub trait ProductPredicate {
    fn matches(&self, product: &Product) -> bool;

    /// Facet counts skip predicates of their own dimension
    fn kind(&self) -> PredicateKind {
        PredicateKind::Custom
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PredicateKind {
    Text,
    Category,
    Price,
    Stock,
    Rating,
    Custom,
}

impl<F> ProductPredicate for F
where
    F: Fn(&Product) -> bool,
{
    fn matches(&self, product: &Product) -> bool {
        self(product)
    }
}

/// Case-insensitive substring match on name or description
#[derive(Clone, Debug)]
pub struct TextMatch {
    needle: String,
}

impl TextMatch {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
        }
    }
}

impl ProductPredicate for TextMatch {
    fn matches(&self, product: &Product) -> bool {
        self.needle.is_empty()
            || product.name.to_lowercase().contains(&self.needle)
            || product.description.to_lowercase().contains(&self.needle)
    }

    fn kind(&self) -> PredicateKind {
        PredicateKind::Text
    }
}

#[derive(Clone, Debug)]
pub struct CategoryMatch {
    category: String,
}

impl CategoryMatch {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }
}

impl ProductPredicate for CategoryMatch {
    fn matches(&self, product: &Product) -> bool {
        product.category == self.category
    }

    fn kind(&self) -> PredicateKind {
        PredicateKind::Category
    }
}

/// Inclusive price bounds; a missing side is unbounded
#[derive(Clone, Debug, Default)]
pub struct PriceRange {
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
}

impl ProductPredicate for PriceRange {
    fn matches(&self, product: &Product) -> bool {
        self.min.map_or(true, |min| product.price >= min)
            && self.max.map_or(true, |max| product.price <= max)
    }

    fn kind(&self) -> PredicateKind {
        PredicateKind::Price
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct InStockOnly;

impl ProductPredicate for InStockOnly {
    fn matches(&self, product: &Product) -> bool {
        product.in_stock
    }

    fn kind(&self) -> PredicateKind {
        PredicateKind::Stock
    }
}

#[derive(Clone, Copy, Debug)]
pub struct MinRating(pub Decimal);

impl ProductPredicate for MinRating {
    fn matches(&self, product: &Product) -> bool {
        product.rating >= self.0
    }

    fn kind(&self) -> PredicateKind {
        PredicateKind::Rating
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Price,
    Rating,
    CreatedAt,
    Featured,
    Name,
    ReviewCount,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub direction: Direction,
}

/// Ordered sort keys. Later keys break ties of earlier ones; remaining ties
/// keep input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortSpec {
    keys: Vec<SortKey>,
}

impl SortSpec {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn then(mut self, field: SortField, direction: Direction) -> Self {
        self.keys.push(SortKey { field, direction });
        self
    }

    pub fn is_noop(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        self.keys.iter().fold(Ordering::Equal, |acc, key| {
            acc.then_with(|| {
                let ordering = match key.field {
                    SortField::Price => a.price.cmp(&b.price),
                    SortField::Rating => a.rating.cmp(&b.rating),
                    SortField::CreatedAt => a.created_at.cmp(&b.created_at),
                    SortField::Featured => a.featured.cmp(&b.featured),
                    SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
                    SortField::ReviewCount => a.review_count.cmp(&b.review_count),
                };
                match key.direction {
                    Direction::Ascending => ordering,
                    Direction::Descending => ordering.reverse(),
                }
            })
        })
    }
}

impl From<SortOption> for SortSpec {
    fn from(option: SortOption) -> Self {
        match option {
            SortOption::Relevance => SortSpec::none(),
            SortOption::Featured => SortSpec::none().then(SortField::Featured, Direction::Descending),
            SortOption::PriceAsc => SortSpec::none().then(SortField::Price, Direction::Ascending),
            SortOption::PriceDesc => SortSpec::none().then(SortField::Price, Direction::Descending),
            SortOption::RatingDesc => SortSpec::none().then(SortField::Rating, Direction::Descending),
            SortOption::Newest => SortSpec::none().then(SortField::CreatedAt, Direction::Descending),
        }
    }
}

/// A conjunction of predicates plus ordering and paging
#[derive(Default)]
pub struct CatalogQuery {
    predicates: Vec<Box<dyn ProductPredicate>>,
    sort: SortSpec,
    page: PageRequest,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the predicate set for the active criteria only
    pub fn from_criteria(criteria: &SearchCriteria) -> Self {
        let mut query = Self::new();

        if !criteria.text.trim().is_empty() {
            query = query.with_predicate(TextMatch::new(&criteria.text));
        }
        if let CategoryFilter::Only(category) = &criteria.category {
            query = query.with_predicate(CategoryMatch::new(category.clone()));
        }
        if criteria.price_min.is_some() || criteria.price_max.is_some() {
            query = query.with_predicate(PriceRange {
                min: criteria.price_min,
                max: criteria.price_max,
            });
        }
        if criteria.in_stock_only {
            query = query.with_predicate(InStockOnly);
        }
        if let Some(rating) = criteria.min_rating {
            query = query.with_predicate(MinRating(rating));
        }

        query
    }

    pub fn with_predicate<P>(mut self, predicate: P) -> Self
    where
        P: ProductPredicate + 'static,
    {
        self.predicates.push(Box::new(predicate));
        self
    }

    pub fn sorted_by(mut self, sort: impl Into<SortSpec>) -> Self {
        self.sort = sort.into();
        self
    }

    pub fn paginate(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }

    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.predicates.iter().all(|p| p.matches(product))
    }

    fn matches_except(&self, product: &Product, skipped: PredicateKind) -> bool {
        self.predicates
            .iter()
            .filter(|p| p.kind() != skipped)
            .all(|p| p.matches(product))
    }

    fn select<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut selected: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();
        if !self.sort.is_noop() {
            // sort_by is stable
            selected.sort_by(|a, b| self.sort.compare(a, b));
        }
        selected
    }

    /// Filter and sort without paging
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        self.select(products).into_iter().cloned().collect()
    }

    /// Filter, sort, page and count category facets
    pub fn run(&self, products: &[Product]) -> CatalogPage {
        let selected = self.select(products);
        let total_count = selected.len();

        let page_products: Vec<Product> = if self.page.page_size == 0 {
            if self.page.page == 0 {
                selected.into_iter().cloned().collect()
            } else {
                Vec::new()
            }
        } else {
            selected
                .into_iter()
                .skip(self.page.offset())
                .take(self.page.page_size as usize)
                .cloned()
                .collect()
        };

        let category_facets = count_categories(
            products
                .iter()
                .filter(|p| self.matches_except(p, PredicateKind::Category)),
        );

        tracing::debug!(
            "Catalog query: {} predicates, {} of {} matched, page {} ({} shown)",
            self.predicates.len(),
            total_count,
            products.len(),
            self.page.page,
            page_products.len()
        );

        CatalogPage {
            summary: result_summary(page_products.len(), products.len()),
            products: page_products,
            total_count,
            catalog_size: products.len(),
            page: self.page.page,
            page_size: self.page.page_size,
            total_pages: total_pages(total_count, self.page.page_size),
            category_facets,
        }
    }
}

/// Filter by `criteria` and order by `sort`. The input is left untouched.
pub fn filter_and_sort(products: &[Product], criteria: &SearchCriteria, sort: SortOption) -> Vec<Product> {
    CatalogQuery::from_criteria(criteria).sorted_by(sort).apply(products)
}

/// Category counts over a product list, most common first
pub fn category_facets(products: &[Product]) -> Vec<FacetCount> {
    count_categories(products.iter())
}

fn count_categories<'a>(products: impl Iterator<Item = &'a Product>) -> Vec<FacetCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for product in products {
        *counts.entry(product.category.as_str()).or_default() += 1;
    }

    let mut facets: Vec<FacetCount> = counts
        .into_iter()
        .map(|(value, count)| FacetCount {
            value: value.to_string(),
            count,
        })
        .collect();
    // names are already ascending, stable sort keeps that for equal counts
    facets.sort_by(|a, b| b.count.cmp(&a.count));
    facets
}

fn total_pages(total_count: usize, page_size: u32) -> u32 {
    if total_count == 0 {
        0
    } else if page_size == 0 {
        1
    } else {
        total_count.div_ceil(page_size as usize) as u32
    }
}
