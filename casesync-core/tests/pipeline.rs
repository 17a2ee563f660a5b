//! End-to-end pipeline scenarios on temporary trees.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use casesync_core::{run, DecodePolicy, ReconcileAction, ReconcileConfig};

fn run_on(root: &Path) -> casesync_core::PipelineReport {
    run(&ReconcileConfig::new(root)).unwrap()
}

/// Snapshot of every file under a root: relative path -> bytes.
fn tree_contents(root: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut contents = BTreeMap::new();
    for entry in walkdir::WalkDir::new(root) {
        let entry = entry.unwrap();
        if entry.file_type().is_file() {
            let relative = entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .into_owned();
            contents.insert(relative, fs::read(entry.path()).unwrap());
        }
    }
    contents
}

#[test]
fn scenario_mixed_casing_reference() {
    // Foo.h on disk, bar.h includes it as "foo.h".
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Foo.h"), "int foo();\n").unwrap();
    fs::write(dir.path().join("bar.h"), "#include \"foo.h\"\n").unwrap();

    let report = run_on(dir.path());

    assert_eq!(report.conflicts, 1);
    assert_eq!(report.reconcile.stats.copied, 1);
    assert_eq!(
        fs::read(dir.path().join("foo.h")).unwrap(),
        b"int foo();\n"
    );

    let copies: Vec<_> = report
        .reconcile
        .actions
        .iter()
        .filter_map(|a| match a {
            ReconcileAction::Copied { src, dst } => Some((src.clone(), dst.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(copies, vec![("Foo.h".into(), "foo.h".into())]);

    // bar.h participates in no conflict and is kept untouched.
    assert!(report
        .reconcile
        .actions
        .contains(&ReconcileAction::Kept { path: "bar.h".into() }));
}

#[test]
fn scenario_single_unreferenced_header() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("unique.h"), "u\n").unwrap();

    let report = run_on(dir.path());

    assert_eq!(report.conflicts, 0);
    assert_eq!(report.reconcile.stats.copied, 0);
    assert_eq!(
        report.reconcile.actions,
        vec![ReconcileAction::Kept { path: "unique.h".into() }]
    );
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn scenario_self_consistent_tree() {
    // weird.h exists and is only ever referenced by its exact spelling.
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("weird.h"), "w\n").unwrap();
    fs::write(dir.path().join("user.h"), "#include \"weird.h\"\n").unwrap();

    let report = run_on(dir.path());

    assert_eq!(report.conflicts, 0);
    assert_eq!(report.reconcile.stats.copied, 0);
    assert_eq!(tree_contents(dir.path()).len(), 2);
}

#[test]
fn completeness_three_spellings() {
    // One on-disk casing plus two distinct reference casings: every
    // spelling in the group must exist afterwards with identical bytes.
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Mixed.h"), "m\n").unwrap();
    fs::write(dir.path().join("a.h"), "#include \"mixed.h\"\n").unwrap();
    fs::write(dir.path().join("b.h"), "#include <MIXED.H>\n").unwrap();

    let report = run_on(dir.path());

    assert_eq!(report.conflicts, 1);
    assert_eq!(report.reconcile.stats.copied, 2);
    for spelling in ["Mixed.h", "mixed.h", "MIXED.H"] {
        assert_eq!(fs::read(dir.path().join(spelling)).unwrap(), b"m\n");
    }
}

#[test]
fn basename_only_extraction() {
    // Directory components in the include target never affect the index,
    // and the copy lands next to the conflicted file.
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/winbase.h"), "wb\n").unwrap();
    fs::write(
        dir.path().join("top.h"),
        "#include \"some/deep/path/WinBase.h\"\n",
    )
    .unwrap();

    let report = run_on(dir.path());

    assert_eq!(report.conflicts, 1);
    assert_eq!(
        fs::read(dir.path().join("sub/WinBase.h")).unwrap(),
        b"wb\n"
    );
    assert!(!dir.path().join("some").exists());
}

#[test]
fn conflicts_resolved_within_each_directory() {
    // The same conflict group applies wherever a matching file lives.
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("um")).unwrap();
    fs::create_dir(dir.path().join("shared")).unwrap();
    fs::write(dir.path().join("um/Config.h"), "um\n").unwrap();
    fs::write(dir.path().join("shared/config.h"), "shared\n").unwrap();

    let report = run_on(dir.path());

    // Key "config.h" has spellings {Config.h, config.h}; each file gets
    // the sibling spelling seeded from its own content.
    assert_eq!(report.conflicts, 1);
    assert_eq!(report.reconcile.stats.copied, 2);
    assert_eq!(fs::read(dir.path().join("um/config.h")).unwrap(), b"um\n");
    assert_eq!(
        fs::read(dir.path().join("shared/Config.h")).unwrap(),
        b"shared\n"
    );
}

#[test]
fn idempotence() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Foo.h"), "f\n").unwrap();
    fs::write(
        dir.path().join("bar.h"),
        "#include \"foo.h\"\n#include <FOO.H>\n",
    )
    .unwrap();

    run_on(dir.path());
    let after_first = tree_contents(dir.path());

    let second = run_on(dir.path());
    let after_second = tree_contents(dir.path());

    // File set and byte content are a fixed point after one run. The
    // second run re-copies identical bytes, which is harmless.
    assert_eq!(after_first, after_second);
    assert!(second.reconcile.stats.copied > 0);
}

#[test]
fn reference_only_conflicts_do_not_copy() {
    // Two disagreeing references to a header that is not in the tree:
    // the group survives pruning but no on-disk file carries its key.
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.h"), "#include <External.h>\n").unwrap();
    fs::write(dir.path().join("b.h"), "#include <external.h>\n").unwrap();

    let report = run_on(dir.path());

    assert_eq!(report.conflicts, 1);
    assert_eq!(report.reconcile.stats.copied, 0);
    assert_eq!(tree_contents(dir.path()).len(), 2);
}

#[test]
fn dry_run_leaves_tree_untouched() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Foo.h"), "f\n").unwrap();
    fs::write(dir.path().join("bar.h"), "#include \"foo.h\"\n").unwrap();

    let mut config = ReconcileConfig::new(dir.path());
    config.dry_run = true;
    let report = run(&config).unwrap();

    assert_eq!(report.reconcile.stats.copied, 1);
    assert!(!dir.path().join("foo.h").exists());
}

#[test]
fn strict_decode_fails_on_invalid_header() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("broken.h"), b"\xff\xfe\n").unwrap();

    let mut config = ReconcileConfig::new(dir.path());
    config.decode_policy = DecodePolicy::Strict;
    assert!(run(&config).is_err());

    // The default lossy policy shrugs and completes.
    assert_eq!(run_on(dir.path()).reconcile.stats.copied, 0);
}

#[test]
fn json_report_shape() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Foo.h"), "f\n").unwrap();
    fs::write(dir.path().join("bar.h"), "#include \"foo.h\"\n").unwrap();

    let report = run_on(dir.path());
    let value: serde_json::Value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["scan"]["headers"], 2);
    assert_eq!(value["conflicts"], 1);
    assert_eq!(value["reconcile"]["stats"]["copied"], 1);
}
