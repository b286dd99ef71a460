//! End-to-end editor flows through `AnalysisHost`.

use std::fs;

use nukita::base::LineCol;
use nukita::config::{MAX_RECENT_PROJECTS, Settings};
use nukita::hir::Location;
use nukita::ide::{AnalysisHost, TokenType};
use nukita::project::{ProjectManager, ShellFlavor};

#[test]
fn test_edit_save_reindex_flow() {
    let dir = tempfile::tempdir().unwrap();
    let mut host = AnalysisHost::new(ProjectManager::new().with_shell(ShellFlavor::Posix));
    let project = host.create_project("shapes", dir.path(), None).unwrap();
    let main = project.root.join("src/main.ad");

    fs::write(&main, "fun square(n) {\n  return n * n\n}\n").unwrap();
    assert_eq!(host.goto_definition("square"), None);

    host.reindex();
    let target = host
        .goto_definition_at("print(square(4))", LineCol::new(0, 8))
        .unwrap();
    assert_eq!(target.symbol, "square");
    assert_eq!(target.location, Location::new(&main, 1));

    let refs = host.find_references_at("n", LineCol::new(0, 1)).unwrap();
    assert_eq!(refs.references.iter().map(|l| l.line).collect::<Vec<_>>(), vec![1, 2, 2]);
}

#[test]
fn test_run_command_for_active_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut host = AnalysisHost::new(ProjectManager::new().with_shell(ShellFlavor::Posix));
    let project = host
        .create_project("runner", dir.path(), Some("build-linux/adascript"))
        .unwrap();
    fs::create_dir_all(project.root.join("build-linux")).unwrap();
    fs::write(project.root.join("build-linux/adascript"), "").unwrap();

    let file = project.root.join("src/main.ad");
    assert_eq!(
        host.run_command(Some(&file)).unwrap(),
        "./build-linux/adascript src/main.ad"
    );
}

#[test]
fn test_recent_projects_persist_through_settings() {
    let dir = tempfile::tempdir().unwrap();
    let settings_path = dir.path().join("cfg/settings.json");

    let mut settings = Settings::load(&settings_path);
    let mut host = AnalysisHost::from_settings(&settings);
    let mut roots = Vec::new();
    for i in 0..MAX_RECENT_PROJECTS + 2 {
        let project = host
            .create_project(&format!("p{i}"), dir.path(), None)
            .unwrap();
        roots.push(project.root);
    }
    // Reopening moves an entry back to the front without duplicating it.
    host.open_project(&roots[5]).unwrap();

    host.save_recent_into(&mut settings);
    settings.save(&settings_path).unwrap();

    let reloaded = Settings::load(&settings_path);
    let recent: Vec<_> = reloaded.recent_projects.iter().collect();
    assert_eq!(recent.len(), MAX_RECENT_PROJECTS);
    assert_eq!(recent[0], roots[5]);
    assert_eq!(recent[1], roots[MAX_RECENT_PROJECTS + 1]);
    assert!(!recent.contains(&roots[0].as_path()));
}

#[test]
fn test_highlight_and_check_editor_text() {
    let host = AnalysisHost::default();
    let text = "fun f(x) {\n  return len(x\n}";

    let tokens = host.semantic_tokens(text);
    assert_eq!(tokens[0].token_type, TokenType::Keyword);
    assert_eq!(tokens[1].token_type, TokenType::Function);
    assert!(tokens.iter().any(|t| t.line == 1 && t.token_type == TokenType::Function));

    let diagnostics = host.check_syntax(text, None);
    let messages: Vec<_> = diagnostics.iter().map(|d| d.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            "Line 3: Unmatched closing '}'",
            "Line 1: Missing closing '}'",
            "Line 2: Missing closing ')'",
        ]
    );
}
