//! DOT serialization of the assembled graph.
//!
//! Pure and deterministic: rendering the same graph twice yields
//! byte-identical output. Iteration always runs over the graph's sorted
//! rank/project indexes and the supply-ordered node list.

pub mod writer;

use crate::node::DEFAULT_OUTLINE_COLOR;
use crate::{Graph, Node};
use writer::DotWriter;

/// Which way dependency edges are drawn. Both are draws of the same
/// relation; a rendering uses exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeDirection {
    /// `blocker -> { everything it blocks }`, grouped per source node.
    #[default]
    Forward,
    /// One `blocker -> blocked` statement per resolved blocker.
    Backward,
}

/// How nodes are grouped for rank alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grouping {
    /// One invisible rank=same cluster per distinct rank, over all nodes.
    #[default]
    FlatRank,
    /// Labeled, colored cluster per project, with rank=same groups per
    /// project/rank pair inside it.
    ProjectRank,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub edge_direction: EdgeDirection,
    pub grouping: Grouping,
}

/// Render the graph as a DOT document.
pub fn render(graph: &Graph, options: &RenderOptions) -> String {
    let mut w = DotWriter::new();

    write_header(&mut w, graph, options);
    match options.grouping {
        Grouping::FlatRank => {
            write_nodes_by_project(&mut w, graph);
            write_edges(&mut w, graph, options.edge_direction);
            write_flat_rank_groups(&mut w, graph);
        }
        Grouping::ProjectRank => {
            write_project_clusters(&mut w, graph);
            write_edges(&mut w, graph, options.edge_direction);
        }
    }
    w.line(0, "}");

    w.finish()
}

fn write_header(w: &mut DotWriter, graph: &Graph, options: &RenderOptions) {
    w.line(0, &format!("digraph \"{}\" {{", escape(&graph.name)));
    w.line(1, "layout=\"dot\";");
    w.line(1, "rankdir=LR;");
    w.line(1, "ranksep=2;");
    if options.grouping == Grouping::ProjectRank {
        // rank=same inside clusters is only honored with the new ranking
        // algorithm.
        w.line(1, "newrank=true;");
    }
    w.line(
        1,
        "node[shape=\"box\",style=\"filled\",fillcolor=\"white\",penwidth=\"3\"];",
    );
    w.line(1, &format!("label=\"{}\";", escape(&graph.name)));
}

fn write_nodes_by_project(w: &mut DotWriter, graph: &Graph) {
    for project in &graph.projects {
        for node in graph.nodes_in_project(project) {
            w.line(1, &node_statement(node));
        }
    }
}

fn write_project_clusters(w: &mut DotWriter, graph: &Graph) {
    let mut cluster = 0;
    for project in &graph.projects {
        if project.is_empty() {
            // Ungrouped stories: no cluster, but they still get rank groups.
            for node in graph.nodes_in_project(project) {
                w.line(1, &node_statement(node));
            }
            write_rank_groups_for_project(w, graph, project, 1);
            continue;
        }

        let color = graph
            .project_colors
            .get(project)
            .map(String::as_str)
            .unwrap_or(DEFAULT_OUTLINE_COLOR);
        w.line(1, &format!("subgraph cluster_p{cluster} {{"));
        w.line(2, &format!("label=\"{}\";", escape(project)));
        w.line(2, &format!("color=\"{}\";", escape(color)));
        for node in graph.nodes_in_project(project) {
            w.line(2, &node_statement(node));
        }
        write_rank_groups_for_project(w, graph, project, 2);
        w.line(1, "}");
        cluster += 1;
    }
}

fn write_edges(w: &mut DotWriter, graph: &Graph, direction: EdgeDirection) {
    match direction {
        EdgeDirection::Forward => {
            for node in &graph.nodes {
                if node.blocks.is_empty() {
                    continue;
                }
                let targets: Vec<String> =
                    node.blocks.iter().map(|id| format!("node{id}")).collect();
                w.line(
                    1,
                    &format!("node{} -> {{ {} }};", node.id, targets.join(" ")),
                );
            }
        }
        EdgeDirection::Backward => {
            for node in &graph.nodes {
                for blocker in &node.blockers {
                    w.line(1, &format!("node{} -> node{};", blocker, node.id));
                }
            }
        }
    }
}

fn write_flat_rank_groups(w: &mut DotWriter, graph: &Graph) {
    for &rank in &graph.ranks {
        let members: Vec<String> = graph
            .nodes_at_rank(rank)
            .map(|n| format!("node{}", n.id))
            .collect();
        w.line(
            1,
            &format!(
                "subgraph cluster_rank_{rank} {{ style=invis; rank=same; {} }}",
                members.join(", ")
            ),
        );
    }
}

fn write_rank_groups_for_project(w: &mut DotWriter, graph: &Graph, project: &str, depth: usize) {
    for &rank in &graph.ranks {
        let members: Vec<String> = graph
            .nodes_at_rank(rank)
            .filter(|n| n.project == project)
            .map(|n| format!("node{}", n.id))
            .collect();
        if members.is_empty() {
            continue;
        }
        w.line(
            depth,
            &format!("{{ rank=same; {}; }}", members.join("; ")),
        );
    }
}

fn node_statement(node: &Node) -> String {
    format!(
        "node{}[label=\"{} ({})\",fillcolor=\"{}\",color=\"{}\"];",
        node.id,
        escape(&node.label),
        node.rank,
        escape(&node.fill_color),
        escape(&node.color),
    )
}

/// Escape a string for use inside a double-quoted DOT string literal.
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
