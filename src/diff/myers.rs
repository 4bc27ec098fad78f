use tracing::{Level, debug, span};

use crate::diff::{Change, EditOp, EditScript};
use crate::errors::DiffError;

/// Furthest-reaching search state, indexed by diagonal `k = x - y`.
///
/// Each diagonal stores the furthest `x` reached so far together with the
/// script prefix that produced it. Prefixes are cloned when a path branches
/// off a neighbouring diagonal, so no two diagonals ever share a growing
/// list.
struct Frontier {
    reach: Vec<usize>,
    history: Vec<EditScript>,
    offset: isize,
}

impl Frontier {
    fn new(bound: usize) -> Result<Self, DiffError> {
        let size = 2 * bound + 1;

        let mut reach = Vec::new();
        reach
            .try_reserve_exact(size)
            .map_err(|_| DiffError::Resource("edit graph state".to_string()))?;
        reach.resize(size, 0);

        let mut history = Vec::new();
        history
            .try_reserve_exact(size)
            .map_err(|_| DiffError::Resource("edit graph state".to_string()))?;
        history.resize_with(size, Vec::new);

        Ok(Self {
            reach,
            history,
            offset: bound as isize,
        })
    }

    fn index(&self, k: isize) -> usize {
        (k + self.offset) as usize
    }

    fn reach(&self, k: isize) -> usize {
        self.reach[self.index(k)]
    }

    fn history(&self, k: isize) -> &EditScript {
        &self.history[self.index(k)]
    }

    fn store(&mut self, k: isize, x: usize, history: EditScript) {
        let index = self.index(k);
        self.reach[index] = x;
        self.history[index] = history;
    }
}

/// Compute a minimal edit script from `original` to `modified`.
///
/// Implements the greedy forward search of 'An O(ND) Difference Algorithm'
/// by Eugene W. Myers (<http://www.xmailserver.org/diff2.pdf>): for growing
/// edit counts `d`, track the furthest-reaching point on every diagonal
/// `k = x - y` of the edit graph, extending along equal lines (the snake)
/// after each non-diagonal step. An insertion step is taken at the lower
/// boundary of the diagonal band, and whenever the neighbour diagonal above
/// strictly out-reaches the one below; the strict comparison decides how
/// removals and insertions interleave at ambiguous positions.
///
/// # Errors
///
/// Returns [`DiffError::EditScriptExhausted`] if the search runs past `d =
/// N + M` without reaching the end of both sequences (impossible for valid
/// inputs), and [`DiffError::Resource`] if the per-diagonal state cannot be
/// allocated.
pub fn edit_script(original: &[Vec<u8>], modified: &[Vec<u8>]) -> Result<EditScript, DiffError> {
    let n = original.len();
    let m = modified.len();
    let bound = n + m;

    let span = span!(
        Level::DEBUG,
        "edit_script",
        original_lines = n,
        modified_lines = m
    );
    let _guard = span.enter();

    if bound == 0 {
        return Ok(EditScript::new());
    }

    let mut frontier = Frontier::new(bound)?;

    for d in 0..=bound as isize {
        let mut k = -d;
        while k <= d {
            // Insertion step at the band boundary, or when the diagonal
            // above strictly out-reaches the diagonal below.
            let insert = k == -d || (k != d && frontier.reach(k - 1) < frontier.reach(k + 1));

            let (mut x, mut history) = if insert {
                (frontier.reach(k + 1), frontier.history(k + 1).clone())
            } else {
                (frontier.reach(k - 1) + 1, frontier.history(k - 1).clone())
            };
            #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
            let mut y = (x as isize - k) as usize;

            // Record the non-diagonal edge that entered this diagonal. Steps
            // landing outside either sequence belong to dead paths and leave
            // no trace.
            if insert {
                if y >= 1 && y <= m {
                    history.push(EditOp::new(Change::Insert, x, y - 1));
                }
            } else if x <= n {
                history.push(EditOp::new(Change::Remove, x - 1, y));
            }

            // Snake: follow the run of equal lines.
            while x < n && y < m && original[x] == modified[y] {
                history.push(EditOp::new(Change::Equal, x, y));
                x += 1;
                y += 1;
            }

            if x >= n && y >= m {
                debug!(edits = d, operations = history.len(), "edit script found");
                return Ok(history);
            }

            frontier.store(k, x, history);
            k += 2;
        }
    }

    Err(DiffError::EditScriptExhausted)
}
