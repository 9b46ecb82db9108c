use cplan_catalog::hash::bucket_index;
use cplan_catalog::*;
use proptest::prelude::*;
use std::num::NonZeroU32;

fn identifier() -> impl Strategy<Value = String> {
    "[A-Za-z]{2,4}[0-9]{3}"
}

proptest! {
    #[test]
    fn hash_is_deterministic_and_in_range(key in ".*", buckets in 1_u32..10_000) {
        let buckets = NonZeroU32::new(buckets).unwrap();
        let first = bucket_index(&key, buckets);
        prop_assert!(first < buckets.get());
        prop_assert_eq!(first, bucket_index(&key, buckets));
    }

    #[test]
    fn every_insert_is_counted_and_found(
        ids in proptest::collection::vec(identifier(), 0..64),
        buckets in 1_u32..50,
    ) {
        let mut table = ChainedHashTable::with_buckets(buckets).unwrap();
        for (i, id) in ids.iter().enumerate() {
            table.insert(Course::new(id.as_str(), format!("course {i}"), Vec::<String>::new())).unwrap();
        }

        prop_assert_eq!(table.len(), ids.len());
        for id in &ids {
            let first = ids.iter().position(|other| other.eq_ignore_ascii_case(id)).unwrap();
            let found = table.search(&id.to_lowercase()).unwrap();
            prop_assert_eq!(found.name(), format!("course {first}"));
        }
    }

    #[test]
    fn list_all_is_sorted_and_complete(
        ids in proptest::collection::vec(identifier(), 0..64),
        buckets in 1_u32..50,
    ) {
        let mut table = ChainedHashTable::with_buckets(buckets).unwrap();
        for id in &ids {
            table.insert(Course::new(id.as_str(), "x", Vec::<String>::new())).unwrap();
        }

        let listed = table.list_all();
        prop_assert_eq!(listed.len(), table.len());
        prop_assert!(listed.windows(2).all(|w| w[0].identifier() <= w[1].identifier()));
    }

    #[test]
    fn verbatim_mode_finds_uppercase_identifiers(
        ids in proptest::collection::vec("[A-Z]{2,4}[0-9]{3}", 1..32),
    ) {
        let mut table = ChainedHashTable::builder().buckets(17).key_mode(KeyMode::Verbatim).build().unwrap();
        for id in &ids {
            table.insert(Course::new(id.as_str(), "x", Vec::<String>::new())).unwrap();
        }
        for id in &ids {
            prop_assert!(table.search(&id.to_lowercase()).is_some());
        }
    }
}
