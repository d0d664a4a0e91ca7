//! Mapping table construction.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use strichliste_core::mapping::{MappingTable, MetricGroups};

fn groups(yaml: &str) -> MetricGroups {
    serde_yaml::from_str(yaml).expect("groups must parse")
}

#[test]
fn builds_lookup_by_article() {
    let g = groups(
        r#"
drinks:
  - { name: "Coffee", article: "coffee", category: "hot", factor: 1.5 }
  - { name: "Mate", article: "club-mate", category: "cold", factor: 1.0 }
deposits:
  - { name: "Bottle", article: "pfand", category: "glass", factor: 0.08 }
"#,
    );
    let table = MappingTable::from_groups(&g);

    assert_eq!(table.len(), 3);
    assert!(table.collisions().is_empty());

    let coffee = table.get("coffee").expect("coffee mapped");
    assert_eq!(coffee.group, "drinks");
    assert_eq!(coffee.definition.name, "Coffee");
    assert_eq!(coffee.definition.category, "hot");
    assert_eq!(coffee.definition.factor, 1.5);

    assert_eq!(table.get("pfand").unwrap().group, "deposits");
    assert!(table.get("tea").is_none());
}

#[test]
fn later_definition_wins_and_is_recorded() {
    // groups are visited in key order: "a_first" before "b_second"
    let g = groups(
        r#"
b_second:
  - { name: "Coffee Large", article: "coffee", category: "hot", factor: 2.0 }
a_first:
  - { name: "Coffee", article: "coffee", category: "hot", factor: 1.0 }
"#,
    );
    let table = MappingTable::from_groups(&g);

    assert_eq!(table.len(), 1);
    let m = table.get("coffee").unwrap();
    assert_eq!(m.group, "b_second");
    assert_eq!(m.definition.factor, 2.0);

    let c = &table.collisions()[0];
    assert_eq!(c.article, "coffee");
    assert_eq!(c.replaced_group, "a_first");
    assert_eq!(c.winning_group, "b_second");
}

#[test]
fn duplicate_within_one_group_uses_list_order() {
    let g = groups(
        r#"
drinks:
  - { name: "Old", article: "coffee", category: "hot", factor: 1.0 }
  - { name: "New", article: "coffee", category: "hot", factor: 3.0 }
"#,
    );
    let table = MappingTable::from_groups(&g);
    assert_eq!(table.get("coffee").unwrap().definition.name, "New");
    assert_eq!(table.collisions().len(), 1);
}

#[test]
fn unknown_definition_field_rejected() {
    let res: Result<MetricGroups, _> = serde_yaml::from_str(
        r#"
drinks:
  - { name: "Coffee", article: "coffee", category: "hot", factr: 1.0 }
"#,
    );
    assert!(res.is_err());
}

#[test]
fn empty_config_gives_empty_table() {
    let table = MappingTable::from_groups(&MetricGroups::new());
    assert!(table.is_empty());
}
