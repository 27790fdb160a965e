use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn storygraph() -> Command {
    Command::cargo_bin("storygraph").unwrap()
}

fn write_fixtures(dir: &Path, stories: &str, projects: &str) -> (String, String) {
    let stories_path = dir.join("stories.json");
    let projects_path = dir.join("projects.json");
    fs::write(&stories_path, stories).unwrap();
    fs::write(&projects_path, projects).unwrap();
    (
        stories_path.to_str().unwrap().to_string(),
        projects_path.to_str().unwrap().to_string(),
    )
}

const CHAIN_STORIES: &str = r#"[
    {"id": 1, "name": "Design schema", "blocked": false, "completed": false,
     "project_id": 10, "story_links": []},
    {"id": 2, "name": "Build API", "blocked": true, "completed": false,
     "project_id": 10,
     "story_links": [{"type": "object", "subject_id": 1}]}
]"#;

const BACKEND_PROJECT: &str = r#"[{"id": 10, "name": "Backend", "color": "blue"}]"#;

#[test]
fn test_render_chain_to_stdout() {
    let dir = tempdir().unwrap();
    let (stories, projects) = write_fixtures(dir.path(), CHAIN_STORIES, BACKEND_PROJECT);

    storygraph()
        .args(["render", "--stories", &stories, "--projects", &projects])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("digraph \"All Projects\" {"))
        .stdout(predicate::str::contains(
            "node1[label=\"Design schema (0)\",fillcolor=\"white\",color=\"blue\"];",
        ))
        .stdout(predicate::str::contains(
            "node2[label=\"Build API (1)\",fillcolor=\"red\",color=\"blue\"];",
        ))
        .stdout(predicate::str::contains("node1 -> { node2 };"));
}

#[test]
fn test_render_project_rank_grouping() {
    let dir = tempdir().unwrap();
    let (stories, projects) = write_fixtures(dir.path(), CHAIN_STORIES, BACKEND_PROJECT);

    storygraph()
        .args([
            "render",
            "--stories",
            &stories,
            "--projects",
            &projects,
            "--grouping",
            "project-rank",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("subgraph cluster_p0 {"))
        .stdout(predicate::str::contains("label=\"Backend\";"))
        .stdout(predicate::str::contains("color=\"blue\";"));
}

#[test]
fn test_render_backward_edges() {
    let dir = tempdir().unwrap();
    let (stories, projects) = write_fixtures(dir.path(), CHAIN_STORIES, BACKEND_PROJECT);

    storygraph()
        .args([
            "render",
            "--stories",
            &stories,
            "--projects",
            &projects,
            "--edges",
            "backward",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("node1 -> node2;"))
        .stdout(predicate::str::contains("-> {").not());
}

#[test]
fn test_render_to_output_file() {
    let dir = tempdir().unwrap();
    let (stories, projects) = write_fixtures(dir.path(), CHAIN_STORIES, BACKEND_PROJECT);
    let output = dir.path().join("graph.dot");

    storygraph()
        .args([
            "render",
            "--stories",
            &stories,
            "--projects",
            &projects,
            "--output",
            output.to_str().unwrap(),
            "--name",
            "Sprint 12",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let doc = fs::read_to_string(&output).unwrap();
    assert!(doc.starts_with("digraph \"Sprint 12\" {"));
    assert!(doc.ends_with("}\n"));
}

#[test]
fn test_render_empty_workspace() {
    let dir = tempdir().unwrap();
    let (stories, projects) = write_fixtures(dir.path(), "[]", "[]");

    storygraph()
        .args(["render", "--stories", &stories, "--projects", &projects])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("digraph \"All Projects\" {"))
        .stdout(predicate::str::ends_with("}\n"));
}

#[test]
fn test_render_cycle_fails_without_output() {
    let cyclic = r#"[
        {"id": 1, "name": "A", "project_id": 10,
         "story_links": [{"type": "object", "subject_id": 3}]},
        {"id": 2, "name": "B", "project_id": 10,
         "story_links": [{"type": "object", "subject_id": 1}]},
        {"id": 3, "name": "C", "project_id": 10,
         "story_links": [{"type": "object", "subject_id": 2}]}
    ]"#;
    let dir = tempdir().unwrap();
    let (stories, projects) = write_fixtures(dir.path(), cyclic, BACKEND_PROJECT);

    storygraph()
        .args(["render", "--stories", &stories, "--projects", &projects])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cyclic dependency"));
}

#[test]
fn test_render_sink_completed_flag() {
    let sunk = r#"[
        {"id": 1, "name": "Done", "completed": true, "project_id": 10, "story_links": []},
        {"id": 2, "name": "Open", "project_id": 10, "story_links": []}
    ]"#;
    let dir = tempdir().unwrap();
    let (stories, projects) = write_fixtures(dir.path(), sunk, BACKEND_PROJECT);

    // Completed story sinks below the open one instead of sharing rank 0.
    storygraph()
        .args([
            "render",
            "--stories",
            &stories,
            "--projects",
            &projects,
            "--sink-completed",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("label=\"Done (0)\""))
        .stdout(predicate::str::contains("label=\"Open (1)\""));
}

#[test]
fn test_missing_stories_file_fails() {
    let dir = tempdir().unwrap();
    let (_, projects) = write_fixtures(dir.path(), "[]", "[]");

    storygraph()
        .args([
            "render",
            "--stories",
            dir.path().join("nope.json").to_str().unwrap(),
            "--projects",
            &projects,
        ])
        .assert()
        .failure();
}

#[test]
fn test_completions_generates_script() {
    storygraph()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("storygraph"));
}
