use std::collections::HashMap;

use storygraph_core::graph::longest_path_ranks;
use storygraph_core::StoryGraphResult;

use crate::{StoryId, Workspace};

/// Offset applied to completed stories when sinking them toward one end of
/// the rank axis. Large enough that a completed story always sorts before
/// any incomplete one, whatever its true dependency depth.
pub const COMPLETED_SINK_OFFSET: i32 = -100;

/// Compute the raw rank of every story in the workspace.
///
/// A story with no blockers has rank 0; otherwise its rank is 1 + the
/// maximum rank among its blockers. Raw ranks may be sparse or negative;
/// graph assembly normalizes them to a dense zero-based axis afterwards.
///
/// With `sink_completed`, completed stories are biased by
/// `COMPLETED_SINK_OFFSET` so finished work clusters at one extreme of the
/// axis. This is a presentation policy, not a correctness rule, and is off
/// by default.
///
/// Fails with `CyclicDependency` if the blocker relation contains a cycle.
pub fn compute_raw_ranks(
    workspace: &Workspace,
    sink_completed: bool,
) -> StoryGraphResult<HashMap<StoryId, i32>> {
    let story_ids: Vec<StoryId> = workspace.stories().iter().map(|s| s.id).collect();
    let mut ranks = longest_path_ranks(&story_ids, workspace.blocker_map())?;

    if sink_completed {
        for story in workspace.stories() {
            if story.completed {
                if let Some(rank) = ranks.get_mut(&story.id) {
                    *rank += COMPLETED_SINK_OFFSET;
                }
            }
        }
    }

    Ok(ranks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Project, Story, StoryLink};
    use storygraph_core::StoryGraphError;

    fn story(id: StoryId, blocker_ids: &[StoryId]) -> Story {
        Story {
            id,
            name: format!("Story {id}"),
            blocked: false,
            completed: false,
            project_id: 10,
            links: blocker_ids
                .iter()
                .map(|&subject_id| StoryLink {
                    kind: "object".to_string(),
                    subject_id,
                })
                .collect(),
        }
    }

    fn workspace(stories: Vec<Story>) -> Workspace {
        Workspace::resolve(
            stories,
            vec![Project {
                id: 10,
                name: "Backend".to_string(),
                color: "blue".to_string(),
            }],
        )
    }

    #[test]
    fn test_unblocked_story_has_rank_zero() {
        let ws = workspace(vec![story(1, &[])]);
        let ranks = compute_raw_ranks(&ws, false).unwrap();
        assert_eq!(ranks[&1], 0);
    }

    #[test]
    fn test_rank_is_one_plus_max_blocker_rank() {
        let ws = workspace(vec![story(1, &[]), story(2, &[1]), story(3, &[1, 2])]);
        let ranks = compute_raw_ranks(&ws, false).unwrap();
        assert_eq!(ranks[&1], 0);
        assert_eq!(ranks[&2], 1);
        assert_eq!(ranks[&3], 2);
    }

    #[test]
    fn test_dangling_blocker_does_not_count() {
        // Story 2 references a story outside the batch; its rank computes
        // as if it had one fewer blocker.
        let ws = workspace(vec![story(1, &[]), story(2, &[1, 999])]);
        let ranks = compute_raw_ranks(&ws, false).unwrap();
        assert_eq!(ranks[&2], 1);
    }

    #[test]
    fn test_sink_completed_biases_rank() {
        let mut done = story(1, &[]);
        done.completed = true;
        let ws = workspace(vec![done, story(2, &[1])]);

        let ranks = compute_raw_ranks(&ws, true).unwrap();
        assert_eq!(ranks[&1], COMPLETED_SINK_OFFSET);
        assert_eq!(ranks[&2], 1);
    }

    #[test]
    fn test_sink_completed_off_by_default_path() {
        let mut done = story(1, &[]);
        done.completed = true;
        let ws = workspace(vec![done]);

        let ranks = compute_raw_ranks(&ws, false).unwrap();
        assert_eq!(ranks[&1], 0);
    }

    #[test]
    fn test_cycle_is_an_error() {
        let ws = workspace(vec![story(1, &[3]), story(2, &[1]), story(3, &[2])]);
        let err = compute_raw_ranks(&ws, false).unwrap_err();
        assert!(matches!(err, StoryGraphError::CyclicDependency(_)));
    }
}
