// StringHashMap unit test suite.
//
// Each test documents what behavior is being verified and which
// invariants are assumed or asserted. The core invariants exercised:
// - Latest write wins: `get(k)` returns the value of the most recent `set`.
// - Counting: `len()` = distinct keys set - keys successfully removed.
// - Growth: reaching the load factor doubles the bucket count before `set`
//   returns, and every key survives the redistribution.
// - Clear: empties the map and keeps the bucket count.
// - Absence: `None` is distinct from an empty-string value.
use chainmap::{ConfigError, StringHashMap, TableConfig, DEFAULT_INITIAL_BUCKETS};
use std::collections::BTreeSet;

// Test: the four-bucket walkthrough.
// Assumes: load factor 0.75, so the third distinct key reaches 3/4.
// Verifies: growth to 8 buckets, all values retrievable, removal accounting.
#[test]
fn four_bucket_walkthrough() {
    let mut m = StringHashMap::with_capacity_and_load_factor(4, 0.75).unwrap();
    m.set("a", "1");
    m.set("b", "2");
    assert_eq!(m.len(), 2);
    assert_eq!(m.bucket_count(), 4);

    m.set("c", "3");
    assert_eq!(m.bucket_count(), 8);
    assert_eq!(m.get("a"), Some("1"));
    assert_eq!(m.get("b"), Some("2"));
    assert_eq!(m.get("c"), Some("3"));

    assert_eq!(m.remove("b").as_deref(), Some("2"));
    assert_eq!(m.get("b"), None);
    assert_eq!(m.len(), 2);
}

// Test: overwrite semantics.
// Verifies: second `set` on a key returns the old value and keeps `len`.
#[test]
fn overwrite_keeps_length() {
    let mut m = StringHashMap::new();
    assert_eq!(m.set("k", "v1"), None);
    assert_eq!(m.set("k", "v2").as_deref(), Some("v1"));
    assert_eq!(m.len(), 1);
    assert_eq!(m.get("k"), Some("v2"));
}

// Test: removing absent keys.
// Verifies: `None` returned, `len` unchanged, including on a fresh map
// whose buckets hold no chain yet.
#[test]
fn remove_absent_is_noop() {
    let mut m = StringHashMap::new();
    assert_eq!(m.remove("nope"), None);
    m.set("a", "1");
    assert_eq!(m.remove("nope"), None);
    assert_eq!(m.len(), 1);
    assert_eq!(m.remove("a").as_deref(), Some("1"));
    assert_eq!(m.remove("a"), None);
    assert_eq!(m.len(), 0);
    assert!(m.is_empty());
}

// Test: clear.
// Verifies: everything absent, `len() == 0`, bucket count unchanged, map reusable.
#[test]
fn clear_empties_and_keeps_buckets() {
    let mut m = StringHashMap::with_capacity_and_load_factor(4, 0.75).unwrap();
    for i in 0..10 {
        m.set(format!("key{i}"), format!("value{i}"));
    }
    let buckets = m.bucket_count();
    assert!(buckets > 4);
    m.clear();
    assert_eq!(m.len(), 0);
    assert_eq!(m.bucket_count(), buckets);
    for i in 0..10 {
        assert_eq!(m.get(&format!("key{i}")), None);
        assert!(!m.contains_key(&format!("key{i}")));
    }
    assert!(m.keys().is_empty());

    m.set("again", "yes");
    assert_eq!(m.get("again"), Some("yes"));
    assert_eq!(m.len(), 1);
}

// Test: repeated growth under a sustained workload.
// Assumes: default configuration.
// Verifies: every key retrievable, ratio below threshold, bucket count a
// power-of-two multiple of the default.
#[test]
fn many_inserts_survive_growth() {
    let mut m = StringHashMap::new();
    for i in 0..2_000 {
        m.set(format!("key{i}"), i.to_string());
        assert!((m.len() as f64 / m.bucket_count() as f64) < m.load_factor());
    }
    assert_eq!(m.len(), 2_000);
    for i in 0..2_000 {
        assert_eq!(m.get(&format!("key{i}")), Some(i.to_string().as_str()));
    }
    assert_eq!(m.bucket_count() % DEFAULT_INITIAL_BUCKETS, 0);
    assert!((m.bucket_count() / DEFAULT_INITIAL_BUCKETS).is_power_of_two());
}

// Test: growth is exact doubling.
// Verifies: the bucket count only changes on the triggering insert, and by 2x.
#[test]
fn growth_doubles_exactly() {
    let mut m = StringHashMap::with_capacity_and_load_factor(8, 0.75).unwrap();
    let mut growths = Vec::new();
    for i in 0..100 {
        let before = m.bucket_count();
        m.set(format!("k{i}"), "v");
        if m.bucket_count() != before {
            assert_eq!(m.bucket_count(), before * 2);
            growths.push(m.len());
        }
    }
    // 6/8, 12/16, 24/32, 48/64, 96/128
    assert_eq!(growths, vec![6, 12, 24, 48, 96]);
}

// Test: removal never shrinks.
#[test]
fn remove_never_shrinks() {
    let mut m = StringHashMap::with_capacity_and_load_factor(2, 0.75).unwrap();
    for i in 0..20 {
        m.set(format!("k{i}"), "v");
    }
    let buckets = m.bucket_count();
    for i in 0..20 {
        m.remove(&format!("k{i}"));
    }
    assert!(m.is_empty());
    assert_eq!(m.bucket_count(), buckets);
}

// Test: snapshots.
// Verifies: `keys`, `values`, `entries` cover exactly the live entries and
// agree with `iter`.
#[test]
fn snapshots_cover_live_entries() {
    let mut m = StringHashMap::new();
    for (k, v) in [("key1", "value1"), ("key2", "value2"), ("key3", "value3")] {
        m.set(k, v);
    }
    m.remove("key2");

    let keys: BTreeSet<String> = m.keys().into_iter().collect();
    assert_eq!(
        keys,
        ["key1", "key3"].iter().map(|s| s.to_string()).collect::<BTreeSet<String>>()
    );
    let values: BTreeSet<String> = m.values().into_iter().collect();
    assert_eq!(
        values,
        ["value1", "value3"].iter().map(|s| s.to_string()).collect::<BTreeSet<String>>()
    );
    let from_iter: Vec<(String, String)> = m
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(m.entries(), from_iter);
}

// Test: determinism of enumeration for a given state.
#[test]
fn enumeration_is_deterministic() {
    let build = || {
        let mut m = StringHashMap::new();
        for i in 0..50 {
            m.set(format!("k{i}"), format!("v{i}"));
        }
        m
    };
    assert_eq!(build().entries(), build().entries());
}

// Test: absence vs empty value.
#[test]
fn empty_value_is_present() {
    let mut m = StringHashMap::new();
    m.set("k", "");
    assert_eq!(m.get("k"), Some(""));
    assert!(m.contains_key("k"));
    assert_eq!(m.get("other"), None);
}

// Test: unicode keys hash by scalar value and behave like any other key.
#[test]
fn unicode_keys() {
    let mut m = StringHashMap::with_capacity_and_load_factor(2, 0.75).unwrap();
    for k in ["ключ", "鍵", "clé", "🔑"] {
        m.set(k, k.to_uppercase());
    }
    assert_eq!(m.len(), 4);
    assert_eq!(m.get("clé"), Some("CLÉ"));
    assert_eq!(m.get("🔑"), Some("🔑"));
}

// Test: configuration errors.
#[test]
fn invalid_configuration_rejected() {
    assert_eq!(
        StringHashMap::with_capacity_and_load_factor(0, 0.75).unwrap_err(),
        ConfigError::ZeroBuckets
    );
    assert!(matches!(
        StringHashMap::with_capacity_and_load_factor(4, -1.0),
        Err(ConfigError::InvalidLoadFactor(_))
    ));
    let m = StringHashMap::with_config(TableConfig::new().with_load_factor(2.0)).unwrap();
    assert_eq!(m.bucket_count(), 16);
    assert_eq!(m.load_factor(), 2.0);
}

// Test: collection traits route through `set`.
#[test]
fn collect_and_extend() {
    let mut m: StringHashMap = vec![("a", "1"), ("b", "2"), ("a", "3")].into_iter().collect();
    assert_eq!(m.len(), 2);
    assert_eq!(m.get("a"), Some("3"));
    m.extend([("c".to_string(), "4".to_string())]);
    assert_eq!(m.len(), 3);
    let n = (&m).into_iter().count();
    assert_eq!(n, 3);
}

// Test: debug rendering.
// Verifies: one line per bucket, every entry appears exactly once.
#[test]
fn display_has_a_line_per_bucket() {
    let mut m = StringHashMap::new();
    m.set("key1", "value1");
    m.set("key2", "value2");
    let s = m.to_string();
    assert_eq!(s.lines().count(), m.bucket_count());
    assert_eq!(s.matches("( key1: value1 )").count(), 1);
    assert_eq!(s.matches("( key2: value2 )").count(), 1);
    assert!(s.lines().all(|l| l.ends_with("nil")));
    assert_eq!(m.to_display_string(), s);
}
