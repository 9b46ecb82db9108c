use cplan_catalog::*;

fn course(id: &str, name: &str, prerequisites: &[&str]) -> Course {
    Course::new(id, name, prerequisites.iter().copied())
}

fn scenario_a() -> ChainedHashTable {
    let mut table = ChainedHashTable::with_buckets(10).unwrap();
    table.insert(course("CS101", "Intro", &[])).unwrap();
    table.insert(course("CS102", "Data Structures", &["CS101"])).unwrap();
    table
}

#[test]
fn test_insert_and_list_in_identifier_order() {
    let table = scenario_a();
    assert_eq!(table.len(), 2);

    let listed = table.list_all();
    let ids: Vec<&str> = listed.iter().map(Course::identifier).collect();
    assert_eq!(ids, ["CS101", "CS102"]);
    assert_eq!(listed[1].prerequisites(), ["CS101"]);
}

#[test]
fn test_lowercase_identifier_found_by_uppercase_search() {
    let mut table = ChainedHashTable::with_buckets(10).unwrap();
    table.insert(course("cs101", "Intro", &[])).unwrap();

    let found = table.search("CS101").expect("case-insensitive match");
    assert_eq!(found.identifier(), "cs101", "identifier is stored verbatim");
    assert_eq!(found.name(), "Intro");
}

#[test]
fn test_missing_identifier_is_none() {
    let table = scenario_a();
    // MATH999 hashes into the same bucket as CS101, so the chain is walked and exhausted.
    assert_eq!(table.hash("MATH999"), table.hash("CS101"));
    assert!(table.search("MATH999").is_none());
    assert!(ChainedHashTable::new().search("NONEXISTENT").is_none());
}

#[test]
fn test_duplicates_are_kept_and_first_wins() {
    let mut table = ChainedHashTable::with_buckets(10).unwrap();
    table.insert(course("CS101", "Intro", &[])).unwrap();
    table.insert(course("CS101", "Intro (revised)", &[])).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.search("cs101").unwrap().name(), "Intro");
    assert_eq!(table.list_all().len(), 2);
}

#[test]
fn test_search_returns_an_independent_copy() {
    let table = scenario_a();
    let first = table.search("CS102").unwrap();
    drop(first);
    assert_eq!(table.search("CS102").unwrap().prerequisites(), ["CS101"]);
}

#[test]
fn test_mixed_case_search_terms() {
    let table = scenario_a();
    for term in ["cs102", "Cs102", "cS102", "CS102"] {
        assert_eq!(table.search(term).map(|c| c.name().to_owned()).as_deref(), Some("Data Structures"));
    }
}

#[test]
fn test_list_all_is_byte_ordered() {
    let mut table = ChainedHashTable::with_buckets(4).unwrap();
    for id in ["MATH201", "CSCI300", "csci100", "CSCI101", "CSCI200"] {
        table.insert(course(id, "x", &[])).unwrap();
    }

    let ids: Vec<String> = table.list_all().iter().map(|c| c.identifier().to_owned()).collect();
    // Uppercase letters sort before lowercase ones.
    assert_eq!(ids, ["CSCI101", "CSCI200", "CSCI300", "MATH201", "csci100"]);
}

#[test]
fn test_single_bucket_degenerates_to_one_chain() {
    let mut table = ChainedHashTable::with_buckets(1).unwrap();
    for id in ["B2", "A1", "C3"] {
        assert_eq!(table.insert(course(id, "x", &[])).unwrap(), 0);
    }

    assert_eq!(table.chain(0).collect::<Vec<_>>(), ["B2", "A1", "C3"]);
    assert_eq!(table.stats().longest_chain, 3);
    assert!(table.search("a1").is_some());
}

#[test]
fn test_zero_buckets_rejected() {
    let err = ChainedHashTable::with_buckets(0).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidBucketCount { .. }));
    assert!(err.to_string().starts_with("Invalid bucket count"));
}
