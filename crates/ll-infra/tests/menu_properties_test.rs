use std::collections::HashSet;

use ll_core::menu::{MenuCategory, MenuItem, MenuItemId, Price};
use ll_infra::LocalStore;
use proptest::prelude::*;

fn category_strategy() -> impl Strategy<Value = MenuCategory> {
    prop::sample::select(MenuCategory::ALL.to_vec())
}

fn menu_strategy() -> impl Strategy<Value = Vec<MenuItem>> {
    prop::collection::vec(
        ("[A-Za-zÀ-ÿ ]{1,16}", 0u32..10_000, category_strategy()),
        0..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(idx, (name, cents, category))| MenuItem {
                id: MenuItemId::new(idx.to_string()),
                name,
                price: Price::new(f64::from(cents) / 100.0).unwrap(),
                category,
                description: None,
                image: None,
            })
            .collect()
    })
}

fn ids(items: &[MenuItem]) -> HashSet<String> {
    items.iter().map(|i| i.id.to_string()).collect()
}

/// Char-by-char case-insensitive substring match over a sliding window.
fn matches_ignoring_case(name: &str, query: &str) -> bool {
    let fold = |c: char| c.to_lowercase().collect::<String>();
    let name: Vec<String> = name.chars().map(fold).collect();
    let query: Vec<String> = query.chars().map(fold).collect();
    query.is_empty() || name.windows(query.len()).any(|window| window == query.as_slice())
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn replace_then_list_returns_exactly_the_new_menu(
        first in menu_strategy(),
        second in menu_strategy(),
    ) {
        let rt = runtime();
        let (listed, expected) = rt.block_on(async {
            let store = LocalStore::open_in_memory().unwrap();
            let menu = store.menu_repository();
            menu.replace_all(&first).await.unwrap();
            menu.replace_all(&second).await.unwrap();
            (menu.list_all().await.unwrap(), second.clone())
        });

        prop_assert_eq!(listed.len(), expected.len());
        prop_assert_eq!(ids(&listed), ids(&expected));
        for item in &listed {
            prop_assert!(expected.contains(item));
        }
    }

    #[test]
    fn search_returns_exactly_the_matching_subset(
        items in menu_strategy(),
        query in "[A-Za-zÀ-ÿ]{0,3}",
    ) {
        let rt = runtime();
        let found = rt.block_on(async {
            let store = LocalStore::open_in_memory().unwrap();
            let menu = store.menu_repository();
            menu.replace_all(&items).await.unwrap();
            menu.search_by_name(&query).await.unwrap()
        });

        let expected: HashSet<String> = items
            .iter()
            .filter(|i| matches_ignoring_case(&i.name, &query))
            .map(|i| i.id.to_string())
            .collect();
        prop_assert_eq!(ids(&found), expected);
        if query.is_empty() {
            prop_assert_eq!(found.len(), items.len());
        }
    }

    #[test]
    fn category_filter_partitions_the_menu(items in menu_strategy()) {
        let rt = runtime();
        let per_category = rt.block_on(async {
            let store = LocalStore::open_in_memory().unwrap();
            let menu = store.menu_repository();
            menu.replace_all(&items).await.unwrap();
            let mut all = Vec::new();
            for category in MenuCategory::ALL {
                all.push((category, menu.find_by_category(category).await.unwrap()));
            }
            all
        });

        let mut total = 0;
        for (category, found) in per_category {
            prop_assert!(found.iter().all(|i| i.category == category));
            total += found.len();
        }
        prop_assert_eq!(total, items.len());
    }
}

#[test]
fn search_matches_known_names() {
    let names = ["Greek Salad", "Caesar Salad", "Crème Brûlée", "Iced Tea", "50% Off Soup"];
    let items: Vec<MenuItem> = names
        .iter()
        .enumerate()
        .map(|(idx, name)| MenuItem {
            id: MenuItemId::new(idx.to_string()),
            name: name.to_string(),
            price: Price::new(5.0).unwrap(),
            category: MenuCategory::Mains,
            description: None,
            image: None,
        })
        .collect();

    let cases: [(&str, &[&str]); 6] = [
        ("salad", &["Greek Salad", "Caesar Salad"]),
        ("SALAD", &["Greek Salad", "Caesar Salad"]),
        ("BRÛLÉE", &["Crème Brûlée"]),
        ("e", &["Greek Salad", "Caesar Salad", "Crème Brûlée", "Iced Tea"]),
        ("%", &["50% Off Soup"]),
        ("_", &[]),
    ];

    let rt = runtime();
    let store = LocalStore::open_in_memory().unwrap();
    let menu = store.menu_repository();
    rt.block_on(menu.replace_all(&items)).unwrap();

    for (query, expected) in cases {
        let found = rt.block_on(menu.search_by_name(query)).unwrap();
        let found: HashSet<&str> = found.iter().map(|i| i.name.as_str()).collect();
        let expected: HashSet<&str> = expected.iter().copied().collect();
        assert_eq!(found, expected, "query {query:?}");
    }
}
