//! End-to-end tests for the select → classify → build → persist → reload
//! pipeline, exercised against real temp-dir stores.

use std::fs;
use tempfile::tempdir;
use warp_wizard_config::{
    Command, CommandGroup, DirectoryLinkStore, GroupStore, LaunchConfig, LaunchConfigStore,
    LaunchTab, LayoutNode, SplitDirection, WizardPaths,
};
use warp_wizard_layout::{LayoutMode, build, classify};

fn selection() -> Vec<Command> {
    vec![
        Command::one_off("git pull"),
        Command::one_off("npm install"),
        Command::long_running("npm start", Some("app")),
        Command::long_running("npm run worker", Some("worker")),
        Command::long_running("npm run docs", None),
    ]
}

#[test]
fn test_full_pipeline_roundtrips_through_disk() {
    let temp = tempdir().unwrap();
    let paths = WizardPaths::under_home(temp.path());
    paths.ensure().unwrap();

    let (one_off, long_running) = classify(&selection());
    let tabs = build(
        &one_off,
        &long_running,
        "/home/user/project",
        LayoutMode::Panes,
        4,
    )
    .unwrap();

    // One-off tab plus one pane tab for the three long-running commands.
    assert_eq!(tabs.len(), 2);

    let config = LaunchConfig::single_window("My Project", tabs);
    let store = LaunchConfigStore::new(&paths.launch_config_dir);
    let saved_path = store.save(&config).unwrap();
    assert_eq!(saved_path.file_name().unwrap(), "my-project.yaml");

    let loaded = store.load(&saved_path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_pane_grid_shape_on_disk() {
    let temp = tempdir().unwrap();
    let store = LaunchConfigStore::new(temp.path());

    let long_running: Vec<Command> = (0..5)
        .map(|i| Command::long_running(format!("server-{i}"), None))
        .collect();
    let tabs = build(&[], &long_running, "/srv/app", LayoutMode::Panes, 4).unwrap();
    let path = store
        .save(&LaunchConfig::single_window("grid", tabs))
        .unwrap();

    let loaded = store.load(&path).unwrap();
    let tabs = &loaded.windows[0].tabs;
    assert_eq!(tabs.len(), 2);

    match &tabs[0].layout {
        LayoutNode::Split(split) => {
            assert_eq!(split.split_direction, SplitDirection::Horizontal);
            assert_eq!(split.panes.len(), 2);
        }
        LayoutNode::Commands(_) => panic!("first tab should be a split"),
    }
    match &tabs[1].layout {
        LayoutNode::Split(split) => {
            assert_eq!(split.split_direction, SplitDirection::Vertical);
            assert_eq!(split.panes.len(), 1);
        }
        LayoutNode::Commands(_) => panic!("second tab should be a split"),
    }
}

#[test]
fn test_directory_link_replay_cycle() {
    let temp = tempdir().unwrap();
    let paths = WizardPaths::under_home(temp.path());
    paths.ensure().unwrap();

    let store = LaunchConfigStore::new(&paths.launch_config_dir);
    let links = DirectoryLinkStore::new(&paths.directory_links_file);

    let tabs = vec![LaunchTab::untitled(LayoutNode::commands(
        "/work/api",
        vec![warp_wizard_config::CommandSpec {
            exec: "make run".to_string(),
        }],
    ))];
    let path = store
        .save(&LaunchConfig::single_window("api", tabs))
        .unwrap();

    let project_dir = std::path::Path::new("/work/api");
    links.link(project_dir, &path).unwrap();

    // Replay: look up the link, load, and read the name Warp would be asked
    // to activate.
    let linked = links.get(project_dir).unwrap().unwrap();
    let config = store.load(std::path::Path::new(&linked)).unwrap();
    assert_eq!(config.name, "api");

    assert!(links.unlink(project_dir).unwrap());
    assert!(links.get(project_dir).unwrap().is_none());
}

#[test]
fn test_group_detection_feeds_the_builder() {
    let temp = tempdir().unwrap();
    let paths = WizardPaths::under_home(temp.path());
    paths.ensure().unwrap();

    let groups = GroupStore::new(&paths.group_file);
    groups
        .add(CommandGroup {
            name: "node".to_string(),
            detect_files: vec!["package.json".to_string()],
            commands: vec![
                Command::one_off("npm install"),
                Command::long_running("npm start", Some("dev")),
            ],
        })
        .unwrap();

    let project = tempdir().unwrap();
    fs::write(project.path().join("package.json"), "{}").unwrap();

    let detected = groups.detect(project.path()).unwrap().unwrap();
    let (one_off, long_running) = classify(&detected.commands);
    let tabs = build(
        &one_off,
        &long_running,
        &project.path().to_string_lossy(),
        LayoutMode::Tabs,
        1,
    )
    .unwrap();

    assert_eq!(tabs.len(), 2);
    assert_eq!(tabs[0].title, None);
    assert_eq!(tabs[1].title.as_deref(), Some("dev"));
}

#[test]
fn test_malformed_files_never_activate() {
    let temp = tempdir().unwrap();
    let store = LaunchConfigStore::new(temp.path());

    let path = temp.path().join("broken.yaml");
    fs::write(&path, "windows:\n  - tabs: []\n").unwrap();
    assert!(store.load(&path).is_err());

    fs::write(&path, "not: valid: yaml: [[[").unwrap();
    assert!(store.load(&path).is_err());
}

#[test]
fn test_collision_suffixes_accumulate_across_saves() {
    let temp = tempdir().unwrap();
    let store = LaunchConfigStore::new(temp.path());

    let config = LaunchConfig::single_window(
        "My App!",
        vec![LaunchTab::untitled(LayoutNode::commands(
            "/tmp",
            vec![warp_wizard_config::CommandSpec {
                exec: "ls".to_string(),
            }],
        ))],
    );

    let first = store.save(&config).unwrap();
    let second = store.save(&config).unwrap();
    assert_eq!(first.file_name().unwrap(), "my-app-.yaml");
    assert_eq!(second.file_name().unwrap(), "my-app--1.yaml");
}
