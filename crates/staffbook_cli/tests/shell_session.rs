use staffbook_cli::prompt::PromptSource;
use staffbook_cli::shell::Shell;
use staffbook_core::RosterService;
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::PathBuf;
use tempfile::TempDir;

/// Scripted input provider: replays canned lines, then reports end of input.
struct ScriptedPrompt {
    lines: VecDeque<String>,
}

impl ScriptedPrompt {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|line| line.to_string()).collect(),
        }
    }
}

impl PromptSource for ScriptedPrompt {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

fn roster_file(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("employees.csv");
    fs::write(&path, contents).unwrap();
    path
}

fn run_session(path: &PathBuf, script: &[&str]) {
    let service = RosterService::open(path).unwrap();
    let mut shell = Shell::new(service, ScriptedPrompt::new(script));
    shell.run().unwrap();
}

#[test]
fn exit_saves_and_leaves_the_file_intact() {
    let dir = TempDir::new().unwrap();
    let path = roster_file(&dir, "1,Ann,Lee,a@x,20\n");

    run_session(&path, &["5"]);

    assert_eq!(fs::read_to_string(&path).unwrap(), "1,Ann,Lee,a@x,20\n");
}

#[test]
fn add_flow_appends_a_record_with_the_next_free_id() {
    let dir = TempDir::new().unwrap();
    let path = roster_file(&dir, "1,Ann,Lee,a@x,20\n");

    run_session(&path, &["3", "Bo", "Ng", "b@x", "15.5", "5"]);

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "1,Ann,Lee,a@x,20\n2,Bo,Ng,b@x,15.5\n"
    );
}

#[test]
fn add_fills_an_id_gap_left_by_an_earlier_removal() {
    let dir = TempDir::new().unwrap();
    let path = roster_file(&dir, "1,Ann,Lee,a@x,20\n3,Cy,Ott,c@x,18\n");

    run_session(&path, &["3", "Bo", "Ng", "b@x", "15", "5"]);

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "1,Ann,Lee,a@x,20\n3,Cy,Ott,c@x,18\n2,Bo,Ng,b@x,15\n"
    );
}

#[test]
fn modify_flow_keeps_current_values_on_empty_input() {
    let dir = TempDir::new().unwrap();
    let path = roster_file(&dir, "1,Ann,Lee,a@x,20\n");

    run_session(&path, &["2", "1", "", "", "new@x", "", "5"]);

    assert_eq!(fs::read_to_string(&path).unwrap(), "1,Ann,Lee,new@x,20\n");
}

#[test]
fn modify_reprompts_until_a_known_id_is_given() {
    let dir = TempDir::new().unwrap();
    let path = roster_file(&dir, "1,Ann,Lee,a@x,20\n");

    run_session(&path, &["2", "9", "1", "", "", "", "", "5"]);

    assert_eq!(fs::read_to_string(&path).unwrap(), "1,Ann,Lee,a@x,20\n");
}

#[test]
fn remove_flow_deletes_the_record_and_persists() {
    let dir = TempDir::new().unwrap();
    let path = roster_file(&dir, "1,Ann,Lee,a@x,20\n2,Bo,Ng,b@x,15\n");

    run_session(&path, &["4", "1", "5"]);

    assert_eq!(fs::read_to_string(&path).unwrap(), "2,Bo,Ng,b@x,15\n");
}

#[test]
fn remove_reprompts_on_an_unknown_id() {
    let dir = TempDir::new().unwrap();
    let path = roster_file(&dir, "1,Ann,Lee,a@x,20\n");

    run_session(&path, &["4", "7", "1", "5"]);

    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn invalid_menu_selections_reprompt_without_side_effects() {
    let dir = TempDir::new().unwrap();
    let path = roster_file(&dir, "1,Ann,Lee,a@x,20\n");

    run_session(&path, &["abc", "9", "0", "5"]);

    assert_eq!(fs::read_to_string(&path).unwrap(), "1,Ann,Lee,a@x,20\n");
}

#[test]
fn end_of_input_mid_add_cancels_and_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    let path = roster_file(&dir, "1,Ann,Lee,a@x,20\n");

    // Input ends after the first name prompt; nothing is inserted.
    run_session(&path, &["3", "Bo"]);

    assert_eq!(fs::read_to_string(&path).unwrap(), "1,Ann,Lee,a@x,20\n");
}
