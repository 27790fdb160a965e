use std::collections::HashMap;

use crate::{StoryGraphError, StoryGraphResult};

/// Visit state for the iterative depth-first traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Compute the longest-path depth of every node over a predecessor relation.
///
/// `predecessors` maps a node to the nodes that must come before it. A node
/// with no predecessors has depth 0; otherwise its depth is
/// 1 + max(depth of each predecessor). The candidate set is always seeded
/// with 0, so a predecessor list that is present but empty is equivalent to
/// an absent one.
///
/// Uses an explicit stack with in-progress markers rather than native
/// recursion, so cyclic or pathologically deep input fails predictably with
/// `CyclicDependency` instead of overflowing the call stack.
pub fn longest_path_ranks(
    nodes: &[i64],
    predecessors: &HashMap<i64, Vec<i64>>,
) -> StoryGraphResult<HashMap<i64, i32>> {
    let mut ranks: HashMap<i64, i32> = HashMap::new();
    let mut marks: HashMap<i64, Mark> = HashMap::new();

    for &node in nodes {
        if marks.get(&node) != Some(&Mark::Done) {
            visit(node, predecessors, &mut ranks, &mut marks)?;
        }
    }

    Ok(ranks)
}

fn visit(
    start: i64,
    predecessors: &HashMap<i64, Vec<i64>>,
    ranks: &mut HashMap<i64, i32>,
    marks: &mut HashMap<i64, Mark>,
) -> StoryGraphResult<()> {
    // Each frame is (node, index of the next predecessor to examine)
    let mut stack: Vec<(i64, usize)> = vec![(start, 0)];
    marks.insert(start, Mark::InProgress);

    while let Some((node, idx)) = stack.last_mut() {
        let node = *node;
        let preds = predecessors.get(&node).map(Vec::as_slice).unwrap_or(&[]);

        if *idx < preds.len() {
            let next = preds[*idx];
            *idx += 1;

            match marks.get(&next) {
                Some(Mark::InProgress) => {
                    return Err(StoryGraphError::CyclicDependency(next));
                }
                Some(Mark::Done) => {}
                None => {
                    marks.insert(next, Mark::InProgress);
                    stack.push((next, 0));
                }
            }
        } else {
            let mut rank = 0;
            for pred in preds {
                if let Some(pred_rank) = ranks.get(pred) {
                    rank = rank.max(pred_rank + 1);
                }
            }
            ranks.insert(node, rank);
            marks.insert(node, Mark::Done);
            stack.pop();
        }
    }

    Ok(())
}
