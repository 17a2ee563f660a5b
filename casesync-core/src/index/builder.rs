//! Pure build step merging disk seeds with extracted references.

use std::collections::BTreeSet;

use super::AlternativeSet;

/// Merge per-file reference sets into the scanner's seed index, then prune.
///
/// Every reference basename lands under its lowercase key, creating new
/// entries for names never seen on disk (library headers maintained
/// outside the tree, typically). The pruned result is the authoritative
/// conflict set and is treated as read-only by the reconcile phase.
pub fn build_index<I>(seeds: AlternativeSet, references: I) -> AlternativeSet
where
    I: IntoIterator<Item = BTreeSet<String>>,
{
    let mut index = seeds;
    for file_references in references {
        index.extend(file_references);
    }
    index.prune();
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn references_merge_into_seeds() {
        let mut seeds = AlternativeSet::new();
        seeds.insert("Foo.h");
        seeds.insert("bar.h");

        let index = build_index(seeds, vec![refs(&["foo.h"])]);
        let spellings = index.get("foo.h").unwrap();
        assert_eq!(spellings.len(), 2);
        assert!(spellings.contains("Foo.h"));
        assert!(spellings.contains("foo.h"));
    }

    #[test]
    fn reference_only_keys_survive_when_conflicted() {
        // Two files disagree on the casing of a header that is not in
        // the tree at all.
        let index = build_index(
            AlternativeSet::new(),
            vec![refs(&["External.h"]), refs(&["external.h"])],
        );
        assert_eq!(index.get("external.h").unwrap().len(), 2);
    }

    #[test]
    fn unconflicted_entries_are_pruned() {
        let mut seeds = AlternativeSet::new();
        seeds.insert("bar.h");

        let index = build_index(seeds, vec![refs(&["bar.h", "vector"])]);
        assert!(index.is_empty());
    }
}
