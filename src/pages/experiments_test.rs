use super::*;

#[test]
fn experiment_href_formats_expected_path() {
    assert_eq!(experiment_href(7), "/experiments/7");
}

#[test]
fn toggle_expansion_opens_then_closes() {
    let mut expanded = HashSet::new();
    toggle_expansion(&mut expanded, 1);
    assert!(expanded.contains(&1));
    toggle_expansion(&mut expanded, 1);
    assert!(!expanded.contains(&1));
}

#[test]
fn toggle_expansion_rows_are_independent() {
    let mut expanded = HashSet::new();
    toggle_expansion(&mut expanded, 1);
    toggle_expansion(&mut expanded, 2);
    toggle_expansion(&mut expanded, 1);
    assert!(!expanded.contains(&1));
    assert!(expanded.contains(&2));
}
