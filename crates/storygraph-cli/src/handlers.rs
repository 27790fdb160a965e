use std::fs;

use storygraph_client::{ClubhouseClient, GetWorkspaceParams, StorySource};
use storygraph_domain::{render, Graph, GraphOptions, Project, RenderOptions, Story, Workspace};

use crate::cli::{FetchArgs, GraphArgs, RenderFileArgs};

pub async fn fetch(args: FetchArgs) -> anyhow::Result<()> {
    let client = ClubhouseClient::new(args.token)?;
    let params = GetWorkspaceParams {
        only_projects: args.projects,
    };

    let workspace = client.get_workspace(params).await?;
    tracing::info!(stories = workspace.story_count(), "resolved workspace");

    render_workspace(&workspace, &args.graph)
}

pub fn render_files(args: RenderFileArgs) -> anyhow::Result<()> {
    let stories: Vec<Story> = serde_json::from_str(&fs::read_to_string(&args.stories)?)?;
    let projects: Vec<Project> = serde_json::from_str(&fs::read_to_string(&args.projects)?)?;

    let workspace = Workspace::resolve(stories, projects);
    render_workspace(&workspace, &args.graph)
}

fn render_workspace(workspace: &Workspace, args: &GraphArgs) -> anyhow::Result<()> {
    let graph_options = GraphOptions {
        sink_completed: args.sink_completed,
    };
    let graph = Graph::build(&args.name, workspace, &graph_options)?;

    let render_options = RenderOptions {
        edge_direction: args.edges.into(),
        grouping: args.grouping.into(),
    };
    let doc = render(&graph, &render_options);

    match &args.output {
        Some(path) => fs::write(path, doc)?,
        None => print!("{doc}"),
    }

    Ok(())
}
