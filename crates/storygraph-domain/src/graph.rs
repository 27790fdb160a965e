use std::collections::{BTreeSet, HashMap};

use storygraph_core::StoryGraphResult;

use crate::node::{fill_color_for, DEFAULT_OUTLINE_COLOR};
use crate::rank::compute_raw_ranks;
use crate::{Node, Workspace};

/// Options for graph assembly.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphOptions {
    /// Bias completed stories to one extreme of the rank axis.
    pub sink_completed: bool,
}

/// The assembled dependency graph: one node per story plus the sorted
/// indexes that drive deterministic serialization.
///
/// Node order is the order stories were supplied; the rank and project
/// indexes are sorted and deduplicated. Renderers iterate the indexes and
/// filter the node list, never an unordered map.
#[derive(Debug, Clone)]
pub struct Graph {
    pub name: String,
    pub nodes: Vec<Node>,
    /// Distinct normalized ranks, ascending. Dense: 0..N.
    pub ranks: Vec<i32>,
    /// Distinct project names, lexicographic. May include the empty string
    /// when some story's project could not be resolved.
    pub projects: Vec<String>,
    pub project_colors: HashMap<String, String>,
}

impl Graph {
    /// Assemble the graph for a resolved workspace.
    ///
    /// Two-pass ranking: compute every raw rank first, then map the sorted
    /// distinct raw values onto a dense zero-based axis and apply the
    /// mapping uniformly. A cyclic blocker relation aborts assembly; no
    /// partial graph is produced.
    pub fn build(
        name: &str,
        workspace: &Workspace,
        options: &GraphOptions,
    ) -> StoryGraphResult<Graph> {
        let raw_ranks = compute_raw_ranks(workspace, options.sink_completed)?;

        let mut nodes = Vec::with_capacity(workspace.story_count());
        let mut all_raw_ranks = BTreeSet::new();
        let mut all_projects = BTreeSet::new();
        let mut project_colors = HashMap::new();

        for story in workspace.stories() {
            let (project, color) = match workspace.project_of(story) {
                Some(p) => (p.name.clone(), p.color.clone()),
                None => (String::new(), DEFAULT_OUTLINE_COLOR.to_string()),
            };

            let rank = raw_ranks.get(&story.id).copied().unwrap_or(0);
            all_raw_ranks.insert(rank);
            all_projects.insert(project.clone());
            if !project.is_empty() {
                // Last-seen wins; the color is project-level, so duplicates
                // across stories of one project are harmless.
                project_colors.insert(project.clone(), color.clone());
            }

            nodes.push(Node {
                id: story.id,
                label: story.name.clone(),
                project,
                color,
                fill_color: fill_color_for(story).to_string(),
                rank,
                blockers: workspace.blockers_of(story.id).to_vec(),
                blocks: workspace.blocks_of(story.id).to_vec(),
                completed: story.completed,
            });
        }

        // Normalize: each distinct raw rank maps to its position in the
        // ascending sequence, yielding a gap-free 0-based axis however
        // sparse or negative the raw values were.
        let normalized: HashMap<i32, i32> = all_raw_ranks
            .iter()
            .enumerate()
            .map(|(i, &raw)| (raw, i as i32))
            .collect();
        for node in &mut nodes {
            node.rank = normalized[&node.rank];
        }

        Ok(Graph {
            name: name.to_string(),
            nodes,
            ranks: (0..normalized.len() as i32).collect(),
            projects: all_projects.into_iter().collect(),
            project_colors,
        })
    }

    /// Nodes belonging to a project, in supply order.
    pub fn nodes_in_project<'a>(&'a self, project: &'a str) -> impl Iterator<Item = &'a Node> {
        self.nodes.iter().filter(move |n| n.project == project)
    }

    /// Nodes at a normalized rank, in supply order.
    pub fn nodes_at_rank(&self, rank: i32) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.rank == rank)
    }
}
