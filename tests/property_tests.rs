use proptest::prelude::*;

use udiff::diff::{Change, EditOp, hunk, myers};

/// Line sequences drawn from a small alphabet so equal runs and repeated
/// lines show up often.
fn arb_lines() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec((0u8..4).prop_map(|b| vec![b'a' + b]), 0..60)
}

/// Replay a script against the original sequence.
fn apply(script: &[EditOp], original: &[Vec<u8>], modified: &[Vec<u8>]) -> Vec<Vec<u8>> {
    script
        .iter()
        .filter_map(|op| match op.change {
            Change::Equal => Some(original[op.orig].clone()),
            Change::Insert => Some(modified[op.modified].clone()),
            Change::Remove => None,
        })
        .collect()
}

fn non_equal_count(script: &[EditOp]) -> usize {
    script
        .iter()
        .filter(|op| op.change != Change::Equal)
        .count()
}

/// Insert/remove edit distance by dynamic programming, the oracle the
/// engine's minimality is checked against.
fn edit_distance(a: &[Vec<u8>], b: &[Vec<u8>]) -> usize {
    let n = a.len();
    let m = b.len();
    let mut dp = vec![vec![0usize; m + 1]; n + 1];

    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=m {
        dp[0][j] = j;
    }
    for i in 1..=n {
        for j in 1..=m {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1]
            } else {
                1 + dp[i - 1][j].min(dp[i][j - 1])
            };
        }
    }
    dp[n][m]
}

proptest! {
    #[test]
    fn test_script_reproduces_modified(original in arb_lines(), modified in arb_lines()) {
        let script = myers::edit_script(&original, &modified).unwrap();
        prop_assert_eq!(apply(&script, &original, &modified), modified);
    }

    #[test]
    fn test_script_walks_original(original in arb_lines(), modified in arb_lines()) {
        let script = myers::edit_script(&original, &modified).unwrap();
        let walked: Vec<Vec<u8>> = script
            .iter()
            .filter(|op| op.change != Change::Insert)
            .map(|op| original[op.orig].clone())
            .collect();
        prop_assert_eq!(walked, original);
    }

    #[test]
    fn test_script_is_minimal(original in arb_lines(), modified in arb_lines()) {
        let script = myers::edit_script(&original, &modified).unwrap();
        prop_assert_eq!(non_equal_count(&script), edit_distance(&original, &modified));
    }

    #[test]
    fn test_identity_diff_is_all_equal(original in arb_lines()) {
        let script = myers::edit_script(&original, &original).unwrap();
        prop_assert_eq!(script.len(), original.len());
        prop_assert!(script.iter().all(|op| op.change == Change::Equal));
    }

    #[test]
    fn test_swap_symmetry(original in arb_lines(), modified in arb_lines()) {
        let forward = myers::edit_script(&original, &modified).unwrap();
        let backward = myers::edit_script(&modified, &original).unwrap();

        let count = |script: &[EditOp], change: Change| {
            script.iter().filter(|op| op.change == change).count()
        };

        prop_assert_eq!(count(&forward, Change::Equal), count(&backward, Change::Equal));
        prop_assert_eq!(count(&forward, Change::Insert), count(&backward, Change::Remove));
        prop_assert_eq!(count(&forward, Change::Remove), count(&backward, Change::Insert));
    }

    #[test]
    fn test_indices_are_monotone(original in arb_lines(), modified in arb_lines()) {
        let script = myers::edit_script(&original, &modified).unwrap();
        for window in script.windows(2) {
            prop_assert!(window[0].orig <= window[1].orig);
            prop_assert!(window[0].modified <= window[1].modified);
        }
    }

    #[test]
    fn test_hunks_cover_every_change_once(
        original in arb_lines(),
        modified in arb_lines(),
        context in 0usize..5,
    ) {
        let script = myers::edit_script(&original, &modified).unwrap();
        let hunks = hunk::assemble(&script, context);

        // Ordered and non-overlapping.
        for pair in hunks.windows(2) {
            prop_assert!(pair[0].end < pair[1].start);
        }

        let mut covered = vec![0usize; script.len()];
        for hunk in &hunks {
            for slot in &mut covered[hunk.start..=hunk.end] {
                *slot += 1;
            }
        }
        for (pos, op) in script.iter().enumerate() {
            if op.change == Change::Equal {
                prop_assert!(covered[pos] <= 1);
            } else {
                prop_assert_eq!(covered[pos], 1);
            }
        }
    }

    #[test]
    fn test_hunk_headers_match_bodies(
        original in arb_lines(),
        modified in arb_lines(),
        context in 0usize..5,
    ) {
        let script = myers::edit_script(&original, &modified).unwrap();
        for hunk in hunk::assemble(&script, context) {
            let ops = &script[hunk.start..=hunk.end];
            let origs = ops.iter().filter(|op| op.change != Change::Insert).count();
            let mods = ops.iter().filter(|op| op.change != Change::Remove).count();
            prop_assert_eq!(hunk.orig_count, origs);
            prop_assert_eq!(hunk.mod_count, mods);
            prop_assert!(origs > 0 || mods > 0);
        }
    }

    #[test]
    fn test_hunk_line_ranges_are_consistent(
        original in arb_lines(),
        modified in arb_lines(),
        context in 0usize..5,
    ) {
        let script = myers::edit_script(&original, &modified).unwrap();
        for hunk in hunk::assemble(&script, context) {
            if hunk.orig_count > 0 {
                prop_assert!(hunk.orig_start >= 1);
                prop_assert!(hunk.orig_start + hunk.orig_count - 1 <= original.len());
            }
            if hunk.mod_count > 0 {
                prop_assert!(hunk.mod_start >= 1);
                prop_assert!(hunk.mod_start + hunk.mod_count - 1 <= modified.len());
            }
        }
    }
}
