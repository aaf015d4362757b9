// catalog_property_tests.rs - Properties of filter_and_sort over random catalogs

use chrono::NaiveDateTime;
use marketplace_catalog::shop::filter::CatalogQuery;
use marketplace_catalog::shop::filter_and_sort;
use marketplace_catalog::shop::model::{
    CategoryFilter, PageRequest, Product, SearchCriteria, ShopQuery, SortOption,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

const CATEGORIES: &[&str] = &["A", "B", "C"];
const WORDS: &[&str] = &["bell", "Brass", "silk", "MALA", "incense"];

fn arb_product() -> impl Strategy<Value = Product> {
    (
        0..CATEGORIES.len(),
        0..WORDS.len(),
        0..WORDS.len(),
        0i64..5_000,
        0i64..=50,
        any::<bool>(),
        any::<bool>(),
        0i64..1_000_000,
    )
        .prop_map(|(cat, name, desc, price, rating, in_stock, featured, secs)| Product {
            id: String::new(),
            name: format!("{} item", WORDS[name]),
            description: format!("made of {}", WORDS[desc]),
            price: Decimal::from(price),
            original_price: None,
            category: CATEGORIES[cat].to_string(),
            vendor: "Vendor".to_string(),
            rating: Decimal::new(rating, 1),
            review_count: 0,
            in_stock,
            is_authentic: true,
            featured,
            image_url: None,
            created_at: NaiveDateTime::default() + chrono::Duration::seconds(secs),
        })
}

fn arb_catalog() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(arb_product(), 0..40).prop_map(|mut products| {
        for (i, product) in products.iter_mut().enumerate() {
            product.id = i.to_string();
        }
        products
    })
}

fn arb_sort() -> impl Strategy<Value = SortOption> {
    prop::sample::select(SortOption::ALL.to_vec())
}

fn arb_criteria() -> impl Strategy<Value = SearchCriteria> {
    (
        prop::option::of(0..WORDS.len()),
        prop::option::of(0..CATEGORIES.len()),
        prop::option::of(0i64..5_000),
        prop::option::of(0i64..5_000),
        any::<bool>(),
    )
        .prop_map(|(word, cat, min, max, in_stock_only)| SearchCriteria {
            text: word.map(|w| WORDS[w].to_uppercase()).unwrap_or_default(),
            category: cat
                .map(|c| CategoryFilter::Only(CATEGORIES[c].to_string()))
                .unwrap_or_default(),
            price_min: min.map(Decimal::from),
            price_max: max.map(Decimal::from),
            in_stock_only,
            min_rating: None,
        })
}

proptest! {
    #[test]
    fn empty_criteria_with_relevance_is_identity(catalog in arb_catalog()) {
        let result = filter_and_sort(&catalog, &SearchCriteria::default(), SortOption::Relevance);
        prop_assert_eq!(result, catalog);
    }

    #[test]
    fn category_filter_is_subset_of_unfiltered(catalog in arb_catalog(), cat in 0..CATEGORIES.len()) {
        let criteria = SearchCriteria {
            category: CategoryFilter::Only(CATEGORIES[cat].to_string()),
            ..Default::default()
        };
        let filtered = filter_and_sort(&catalog, &criteria, SortOption::Relevance);
        let all = filter_and_sort(&catalog, &SearchCriteria::default(), SortOption::Relevance);

        prop_assert!(filtered.iter().all(|p| p.category == CATEGORIES[cat]));
        prop_assert!(filtered.iter().all(|p| all.contains(p)));
    }

    #[test]
    fn price_sorts_are_monotonic(catalog in arb_catalog(), criteria in arb_criteria()) {
        let asc = filter_and_sort(&catalog, &criteria, SortOption::PriceAsc);
        prop_assert!(asc.windows(2).all(|w| w[0].price <= w[1].price));

        let desc = filter_and_sort(&catalog, &criteria, SortOption::PriceDesc);
        prop_assert!(desc.windows(2).all(|w| w[0].price >= w[1].price));
    }

    #[test]
    fn filtering_is_idempotent(catalog in arb_catalog(), criteria in arb_criteria(), sort in arb_sort()) {
        let once = filter_and_sort(&catalog, &criteria, sort);
        let twice = filter_and_sort(&once, &criteria, sort);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sorting_is_stable(catalog in arb_catalog(), criteria in arb_criteria(), sort in arb_sort()) {
        // ids are input positions, so equal keys must keep ascending ids
        let result = filter_and_sort(&catalog, &criteria, sort);
        let spec: marketplace_catalog::shop::filter::SortSpec = sort.into();
        for pair in result.windows(2) {
            if spec.compare(&pair[0], &pair[1]) == std::cmp::Ordering::Equal {
                let a: usize = pair[0].id.parse().unwrap();
                let b: usize = pair[1].id.parse().unwrap();
                prop_assert!(a < b);
            }
        }
    }

    #[test]
    fn every_result_satisfies_every_predicate(catalog in arb_catalog(), criteria in arb_criteria()) {
        let query = CatalogQuery::from_criteria(&criteria);
        let result = filter_and_sort(&catalog, &criteria, SortOption::Relevance);
        prop_assert!(result.iter().all(|p| query.matches(p)));
        let excluded = catalog.iter().filter(|p| !result.contains(p));
        for product in excluded {
            prop_assert!(!query.matches(product));
        }
    }

    #[test]
    fn malformed_min_price_behaves_like_no_bound(catalog in arb_catalog(), junk in "[a-z]{1,6}") {
        let malformed = ShopQuery { min_price: Some(junk), ..Default::default() };
        let unset = ShopQuery::default();
        prop_assert_eq!(
            filter_and_sort(&catalog, &malformed.to_criteria(), SortOption::Relevance),
            filter_and_sort(&catalog, &unset.to_criteria(), SortOption::Relevance)
        );
    }

    #[test]
    fn pages_concatenate_to_full_result(catalog in arb_catalog(), sort in arb_sort(), size in 1u32..8) {
        let full = filter_and_sort(&catalog, &SearchCriteria::default(), sort);
        let mut paged = Vec::new();
        let mut page = 0;
        loop {
            let chunk = CatalogQuery::new()
                .sorted_by(sort)
                .paginate(PageRequest::new(page, size))
                .run(&catalog)
                .products;
            if chunk.is_empty() {
                break;
            }
            paged.extend(chunk);
            page += 1;
        }
        prop_assert_eq!(paged, full);
    }
}
