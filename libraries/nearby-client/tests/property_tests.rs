//! Property tests for locally fabricated records.

use nearby_client::offline::{
    email_local_part, offline_login, offline_provider, IdGenerator, OFFLINE_TOKEN_PREFIX,
};
use nearby_core::{CreateProviderRequest, ProviderLocation, ServiceItemDto};
use proptest::prelude::*;

fn request_with_prices(prices: &[f64]) -> CreateProviderRequest {
    CreateProviderRequest {
        business_name: "Prop Co".into(),
        profession: "Tester".into(),
        category: "qa".into(),
        description: String::new(),
        experience: String::new(),
        location: ProviderLocation {
            city: "Shymkent".into(),
            district: "Center".into(),
            address: "Tauke Khan 1".into(),
            postal_code: "160000".into(),
        },
        services: prices
            .iter()
            .map(|p| ServiceItemDto::new("Item", *p, "30m"))
            .collect(),
        features: Vec::new(),
        image: None,
        working_hours: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_price_from_is_minimum_service_price(
        prices in prop::collection::vec(0.0f64..10_000.0, 1..20)
    ) {
        let request = request_with_prices(&prices);
        let provider = offline_provider(1, &request).unwrap();

        let expected = prices.iter().copied().fold(f64::INFINITY, f64::min);
        prop_assert_eq!(provider.price_from, expected);
        prop_assert!(prices.iter().all(|p| provider.price_from <= *p));
        prop_assert_eq!(provider.services.len(), prices.len());
    }

    #[test]
    fn prop_offline_login_name_is_local_part(
        local in "[a-z0-9._-]{0,16}",
        domain in "[a-z]{1,10}\\.[a-z]{2,4}",
    ) {
        let email = format!("{}@{}", local, domain);
        let auth = offline_login(&email);

        prop_assert_eq!(&auth.user.name, &local);
        prop_assert_eq!(&auth.user.email, &email);
        prop_assert!(auth.token.starts_with(OFFLINE_TOKEN_PREFIX));
    }

    #[test]
    fn prop_local_part_is_prefix_without_at(email in "[^@]{0,12}(@[^@]{0,12}){0,2}") {
        let local = email_local_part(&email);

        prop_assert!(email.starts_with(local));
        prop_assert!(!local.contains('@'));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_ids_never_repeat(count in 1usize..500) {
        let ids = IdGenerator::new();
        let mut generated: Vec<i64> = (0..count).map(|_| ids.next_id()).collect();
        let total = generated.len();

        generated.dedup();
        prop_assert_eq!(generated.len(), total);
    }
}
