#![cfg(test)]
use preflight_core::journal::{self, AuditStatus, ForestAudit, ManifestError};
use tempfile::TempDir;

use crate::utils;

#[test]
fn missing_forest_does_not_hide_the_next_one() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("Forests");
    utils::make_journals(&base.join("B").join("Journals"), 3);
    let manifest = utils::write_manifest(
        tmp.path(),
        "<assignment><forest-name>A</forest-name></assignment>\
         <assignment><forest-name>B</forest-name></assignment>",
    );

    let audits: Vec<ForestAudit> = journal::audit(&manifest, &base, 2).unwrap().collect();

    assert_eq!(audits.len(), 2);
    assert_eq!(audits[0].forest_name, "A");
    assert!(audits[0].outcome.is_err());
    assert_eq!(audits[1].forest_name, "B");
    assert_eq!(audits[1].journal_count(), Some(3));
}

#[test]
fn custom_data_directory_is_searched_under_forests() {
    let tmp = TempDir::new().unwrap();
    let custom = tmp.path().join("custom");
    utils::make_journals(&custom.join("Forests").join("Meters").join("Journals"), 2);
    let manifest = utils::write_manifest(
        tmp.path(),
        &format!(
            "<assignment><forest-name>Meters</forest-name>\
             <data-directory>{}</data-directory></assignment>",
            custom.display()
        ),
    );

    let audits: Vec<ForestAudit> =
        journal::audit(&manifest, &tmp.path().join("Forests"), 2).unwrap().collect();

    assert_eq!(audits.len(), 1);
    assert_eq!(audits[0].journal_count(), Some(2));
    assert_eq!(audits[0].status, AuditStatus::Ok);
}

#[test]
fn empty_manifest_is_an_empty_audit() {
    let tmp = TempDir::new().unwrap();
    let manifest = utils::write_manifest(tmp.path(), "");
    let audits: Vec<ForestAudit> = journal::audit(&manifest, tmp.path(), 2).unwrap().collect();
    assert!(audits.is_empty());
}

#[test]
fn malformed_manifest_is_reported() {
    let tmp = TempDir::new().unwrap();
    let manifest = tmp.path().join("assignments.xml");
    std::fs::write(&manifest, "<assignments><assignment>").unwrap();

    let result = journal::audit(&manifest, tmp.path(), 2);
    assert!(matches!(result, Err(ManifestError::Parse { .. })));
}
