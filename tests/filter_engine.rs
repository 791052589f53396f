// tests/filter_engine.rs
//
// Filter semantics over hand-built tables.
use std::collections::BTreeSet;

use peg_selector::config::options::EmptySelection;
use peg_selector::filter::FilterCriteria;
use peg_selector::schema::{Columns, Field};
use peg_selector::{
    CriteriaError, MolecularWeight, Record, Table, apply_filters, count_matches,
    derive_filter_domains,
};

fn rec(name: &str, partner: &str, arch: &str, group: &str, mw: Option<f64>) -> Record {
    Record {
        name: Some(name.into()),
        partner: Some(partner.into()),
        architecture: Some(arch.into()),
        reactivity: Some(group.into()),
        molecular_weight: mw.map(MolecularWeight::from_kda),
        ..Default::default()
    }
}

fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn names(t: &Table) -> Vec<&str> {
    t.iter().map(|r| r.name.as_deref().unwrap_or("")).collect()
}

fn sample() -> Table {
    Table::from_records(vec![
        rec("PEG 20K NHS", "NOF", "Linear", "NHS Ester", Some(20.0)),
        rec("mPEG Maleimide", "JenKem", "Linear", "Maleimide", Some(5.0)),
        rec("4-Arm Amine", "JenKem", "4-Arm", "Amine", Some(10.0)),
        rec("Azide", "Nanocs", "Branched", "Azide", None),
        rec("8-Arm Thiol", "NOF", "8-Arm", "Thiol", Some(40.0)),
    ])
}

#[test]
fn partner_and_range_pick_one_of_two() {
    let t = Table::from_records(vec![
        rec("A", "X", "Linear", "NHS", Some(10.0)),
        rec("B", "Y", "Linear", "NHS", Some(30.0)),
    ]);
    let c = FilterCriteria {
        partners: set(&["X"]),
        molecular_weight_range: Some((0.0, 20.0)),
        ..Default::default()
    };
    let out = apply_filters(&t, &c).unwrap();
    assert_eq!(names(&out), vec!["A"]);
    assert_eq!(count_matches(&out), 1);
}

#[test]
fn empty_criteria_returns_table_unchanged() {
    let t = sample();
    let out = apply_filters(&t, &FilterCriteria::default()).unwrap();
    assert_eq!(out, t);
}

#[test]
fn name_query_is_case_insensitive_substring() {
    let t = sample();
    let mut c = FilterCriteria::default();
    c.set_name_query("peg");
    assert_eq!(names(&apply_filters(&t, &c).unwrap()), vec!["PEG 20K NHS", "mPEG Maleimide"]);

    c.set_name_query("ARM");
    assert_eq!(names(&apply_filters(&t, &c).unwrap()), vec!["4-Arm Amine", "8-Arm Thiol"]);
}

#[test]
fn blank_name_query_is_no_constraint() {
    let mut c = FilterCriteria::default();
    c.set_name_query("   ");
    assert_eq!(c.name_query, None);
}

#[test]
fn missing_name_never_matches_a_query() {
    let mut nameless = rec("x", "NOF", "Linear", "NHS", Some(1.0));
    nameless.name = None;
    let t = Table::from_records(vec![nameless]);

    let mut c = FilterCriteria::default();
    assert_eq!(apply_filters(&t, &c).unwrap().len(), 1);
    c.set_name_query("x");
    assert!(apply_filters(&t, &c).unwrap().is_empty());
}

#[test]
fn range_is_inclusive_and_drops_missing_weight() {
    let t = sample();
    let c = FilterCriteria { molecular_weight_range: Some((5.0, 20.0)), ..Default::default() };
    let out = apply_filters(&t, &c).unwrap();
    assert_eq!(names(&out), vec!["PEG 20K NHS", "mPEG Maleimide", "4-Arm Amine"]);
    assert!(out.iter().all(|r| r.name.as_deref() != Some("Azide")));
}

#[test]
fn inverted_range_is_rejected() {
    let c = FilterCriteria { molecular_weight_range: Some((30.0, 10.0)), ..Default::default() };
    let err = apply_filters(&sample(), &c).unwrap_err();
    assert_eq!(err, CriteriaError::InvertedRange { min: 30.0, max: 10.0 });
}

#[test]
fn nan_bound_is_rejected() {
    let c = FilterCriteria { molecular_weight_range: Some((f64::NAN, 10.0)), ..Default::default() };
    assert!(apply_filters(&sample(), &c).is_err());
}

#[test]
fn criteria_are_conjunctive_and_order_preserving() {
    let t = sample();
    let c = FilterCriteria {
        partners: set(&["NOF", "JenKem"]),
        architectures: set(&["Linear", "8-Arm"]),
        molecular_weight_range: Some((0.0, 100.0)),
        ..Default::default()
    };
    let out = apply_filters(&t, &c).unwrap();
    assert_eq!(names(&out), vec!["PEG 20K NHS", "mPEG Maleimide", "8-Arm Thiol"]);

    // output is a subsequence of the input
    let mut src = t.iter();
    for r in out.iter() {
        assert!(src.any(|s| s == r));
    }
}

#[test]
fn refiltering_changes_nothing() {
    let t = sample();
    let c = FilterCriteria {
        reactivities: set(&["Amine", "Thiol", "NHS Ester"]),
        molecular_weight_range: Some((10.0, 40.0)),
        ..Default::default()
    };
    let once = apply_filters(&t, &c).unwrap();
    let twice = apply_filters(&once, &c).unwrap();
    assert_eq!(once, twice);
    assert_eq!(apply_filters(&t, &c).unwrap(), once);
}

#[test]
fn widening_never_reduces_matches() {
    let t = sample();
    let narrow = FilterCriteria {
        partners: set(&["NOF"]),
        molecular_weight_range: Some((10.0, 20.0)),
        ..Default::default()
    };
    let wider_set = FilterCriteria { partners: set(&["NOF", "JenKem"]), ..narrow.clone() };
    let wider_range = FilterCriteria { molecular_weight_range: Some((0.0, 40.0)), ..narrow.clone() };

    let n = apply_filters(&t, &narrow).unwrap().len();
    assert!(apply_filters(&t, &wider_set).unwrap().len() >= n);
    assert!(apply_filters(&t, &wider_range).unwrap().len() >= n);
}

#[test]
fn unknown_category_value_matches_nothing() {
    let c = FilterCriteria { partners: set(&["Nobody"]), ..Default::default() };
    assert!(apply_filters(&sample(), &c).unwrap().is_empty());
}

#[test]
fn missing_category_value_only_fails_when_filtered() {
    let mut r = rec("Mystery", "NOF", "Linear", "NHS", Some(3.0));
    r.application = None;
    let t = Table::from_records(vec![r]);

    assert_eq!(apply_filters(&t, &FilterCriteria::default()).unwrap().len(), 1);
    let c = FilterCriteria { applications: set(&["Hydrogels"]), ..Default::default() };
    assert!(apply_filters(&t, &c).unwrap().is_empty());
}

#[test]
fn picked_values_over_an_absent_column_match_nothing() {
    let fields = [Field::Name, Field::Partner, Field::Architecture, Field::Reactivity, Field::MolecularWeight];
    let t = Table::new(Columns::from_fields(fields), sample().iter().cloned().collect());

    let c = FilterCriteria { applications: set(&["Hydrogels"]), ..Default::default() };
    assert!(apply_filters(&t, &c).unwrap().is_empty());
    assert!(t.iter().all(|r| !c.matches(r)));

    for policy in [EmptySelection::NoConstraint, EmptySelection::MatchNothing] {
        let d = derive_filter_domains(&t).unwrap();
        let c = FilterCriteria::initial(&d, policy);
        assert_eq!(apply_filters(&t, &c).unwrap().len(), t.len());
    }
}

#[test]
fn blank_cells_are_selectable_under_match_nothing() {
    let mut r = rec("Unbranded", "", "Linear", "NHS", Some(2.0));
    r.partner = None;
    let mut records: Vec<Record> = sample().iter().cloned().collect();
    records.push(r);
    let t = Table::from_records(records);

    let d = derive_filter_domains(&t).unwrap();
    assert!(d.has_blanks(Field::Partner));
    assert!(!d.has_blanks(Field::Architecture));

    let mut c = FilterCriteria::initial(&d, EmptySelection::MatchNothing);
    assert_eq!(apply_filters(&t, &c).unwrap().len(), t.len());

    c.blanks.remove(&Field::Partner);
    let out = apply_filters(&t, &c).unwrap();
    assert_eq!(out.len(), t.len() - 1);
    assert!(!names(&out).contains(&"Unbranded"));

    c.partners.clear();
    c.blanks.insert(Field::Partner);
    assert_eq!(names(&apply_filters(&t, &c).unwrap()), vec!["Unbranded"]);
}

#[test]
fn empty_selection_policy_is_switchable() {
    let t = sample();

    let no_constraint = FilterCriteria::default();
    assert_eq!(apply_filters(&t, &no_constraint).unwrap().len(), t.len());

    let match_nothing = FilterCriteria { empty_selection: EmptySelection::MatchNothing, ..Default::default() };
    assert!(apply_filters(&t, &match_nothing).unwrap().is_empty());

    assert_eq!(EmptySelection::from_means_all(true), EmptySelection::NoConstraint);
    assert_eq!(EmptySelection::from_means_all(false), EmptySelection::MatchNothing);
}

#[test]
fn match_nothing_starts_with_full_domain_selected() {
    let t = sample();
    let d = derive_filter_domains(&t).unwrap();
    let c = FilterCriteria::initial(&d, EmptySelection::MatchNothing);
    assert_eq!(c.partners, d.partners);
    assert_eq!(apply_filters(&t, &c).unwrap().len(), t.len());

    let c = FilterCriteria::initial(&d, EmptySelection::NoConstraint);
    assert!(c.partners.is_empty());
}

#[test]
fn domains_are_sorted_distinct_with_integer_bounds() {
    let mut t = sample().records().to_vec();
    t.push(rec("Odd", "Avanti", "Linear", "Lipid", Some(2.5)));
    t.push(rec("Odder", "Avanti", "Linear", "Lipid", Some(40.2)));
    let d = derive_filter_domains(&Table::from_records(t)).unwrap();

    assert_eq!(d.partners.iter().collect::<Vec<_>>(), vec!["Avanti", "JenKem", "NOF", "Nanocs"]);
    assert_eq!(
        d.architectures.iter().collect::<Vec<_>>(),
        vec!["4-Arm", "8-Arm", "Branched", "Linear"]
    );
    assert!(d.applications.is_empty());
    assert_eq!(d.molecular_weight, Some((2, 41)));
}

#[test]
fn domains_without_weights_have_no_bounds() {
    let t = Table::from_records(vec![rec("A", "X", "Linear", "NHS", None)]);
    assert_eq!(derive_filter_domains(&t).unwrap().molecular_weight, None);
}

#[test]
fn count_is_bounded_by_table_size() {
    let t = sample();
    let out = apply_filters(&t, &FilterCriteria { partners: set(&["NOF"]), ..Default::default() }).unwrap();
    assert!(count_matches(&out) <= count_matches(&t));
    assert_eq!(count_matches(&out), 2);
    assert_eq!(count_matches(&Table::default()), 0);
}
