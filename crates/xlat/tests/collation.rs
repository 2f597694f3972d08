//! Fixture-driven collation tests.
//!
//! Each fixture in `tests/fixtures/collation.json` gives a sort map (and
//! optionally a width map) in map-file syntax, plus string pairs with their
//! expected order.
//!
//! Run: cargo test -p xlat --test collation

use std::cmp::Ordering;
use std::path::PathBuf;

use serde::Deserialize;
use xlat::{Collator, load_table};

#[derive(Debug, Deserialize)]
struct Fixture {
    name: String,
    sort: String,
    #[serde(default)]
    width: Option<String>,
    cases: Vec<Case>,
}

#[derive(Debug, Deserialize)]
struct Case {
    a: String,
    b: String,
    order: Expected,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Expected {
    Less,
    Equal,
    Greater,
}

impl From<Expected> for Ordering {
    fn from(e: Expected) -> Ordering {
        match e {
            Expected::Less => Ordering::Less,
            Expected::Equal => Ordering::Equal,
            Expected::Greater => Ordering::Greater,
        }
    }
}

fn load_fixtures() -> Vec<Fixture> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/collation.json");
    let text = std::fs::read_to_string(&path).expect("failed to read collation fixtures");
    serde_json::from_str(&text).expect("invalid collation fixtures")
}

#[test]
fn fixtures_match_expected_order() {
    let fixtures = load_fixtures();
    assert!(!fixtures.is_empty());

    let mut failures = Vec::new();
    for fixture in &fixtures {
        let sort = load_table(fixture.sort.as_bytes(), "sort")
            .unwrap_or_else(|e| panic!("{}: {e}", fixture.name))
            .unwrap_or_else(|| panic!("{}: empty sort map", fixture.name));
        let width = fixture.width.as_ref().map(|w| {
            load_table(w.as_bytes(), "width")
                .unwrap_or_else(|e| panic!("{}: {e}", fixture.name))
                .unwrap_or_else(|| panic!("{}: empty width map", fixture.name))
        });
        let collator = Collator::new(Some(&sort), width.as_ref());

        for case in &fixture.cases {
            let got = collator.compare(case.a.as_bytes(), case.b.as_bytes());
            let want = Ordering::from(case.order);
            if got != Some(want) {
                failures.push(format!(
                    "{}: {:?} vs {:?}: expected {want:?}, got {got:?}",
                    fixture.name, case.a, case.b
                ));
            }
        }
    }
    assert!(failures.is_empty(), "collation mismatches:\n{}", failures.join("\n"));
}

#[test]
fn fixtures_are_antisymmetric() {
    for fixture in load_fixtures() {
        let Some(sort) = load_table(fixture.sort.as_bytes(), "sort").unwrap() else {
            continue;
        };
        let collator = Collator::new(Some(&sort), None);
        for case in &fixture.cases {
            let forward = collator.compare(case.a.as_bytes(), case.b.as_bytes());
            let backward = collator.compare(case.b.as_bytes(), case.a.as_bytes());
            assert_eq!(forward.map(Ordering::reverse), backward, "{}", fixture.name);
        }
    }
}
