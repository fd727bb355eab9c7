use std::fs;
use std::io::Cursor;

use image::RgbaImage;
use picture_viewer::AppController;
use picture_viewer::events::ViewerAction;
use picture_viewer::scan::ScanOptions;
use picture_viewer::shell::{PLACEHOLDER, Shell};
use tempfile::tempdir;

fn run(input: &str) -> String {
    let mut shell = Shell::new(
        Cursor::new(input.to_string()),
        Vec::new(),
        AppController::new(),
        ScanOptions::default(),
    );
    shell.run().unwrap();
    String::from_utf8(shell.into_output()).unwrap()
}

#[test]
fn empty_start_prints_placeholder() {
    let out = run("n\np\nc\n");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec![PLACEHOLDER; 4]);
}

#[test]
fn open_and_navigate_folder() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    RgbaImage::new(3, 2).save(root.join("a.png")).unwrap();
    RgbaImage::new(5, 7).save(root.join("b.png")).unwrap();

    let input = format!("o {}\nn\nn\np\nq\nn\n", root.display());
    let out = run(&input);
    let lines: Vec<&str> = out.lines().collect();

    let a = format!("[1/2] {}  3x2 (normal)", root.join("a.png").display());
    let b = format!("[2/2] {}  5x7 (normal)", root.join("b.png").display());
    assert_eq!(lines, vec![PLACEHOLDER, a.as_str(), b.as_str(), a.as_str(), b.as_str()]);
}

#[test]
fn unreadable_picture_still_shows_path() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    fs::write(root.join("fake.jpg"), b"x").unwrap();

    let out = run(&format!("open {}\n", root.display()));
    let expected = format!("[1/1] {}", root.join("fake.jpg").display());
    assert_eq!(out.lines().nth(1), Some(expected.as_str()));
}

#[test]
fn bad_folder_and_unknown_commands_keep_running() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("missing");

    let out = run(&format!("o {}\nwat\nr\n \n \nc\n", missing.display()));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[1].starts_with("error: invalid picture folder"));
    assert!(lines[2].starts_with("unknown command: wat"));
    assert!(lines[3].starts_with("error: invalid picture folder"));
    assert_eq!(lines[4], "paused");
    assert_eq!(lines[5], "playing");
    assert_eq!(lines[6], PLACEHOLDER);
}

#[test]
fn dispatch_reports_quit() {
    let mut shell = Shell::new(
        Cursor::new(String::new()),
        Vec::new(),
        AppController::new(),
        ScanOptions::default(),
    );
    assert!(shell.dispatch(ViewerAction::Help).unwrap());
    assert!(!shell.dispatch(ViewerAction::Quit).unwrap());
    assert!(!shell.controller().is_paused());
}

#[test]
fn folder_history_commands() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    let one = root.join("one");
    let two = root.join("two");
    fs::create_dir_all(&one).unwrap();
    fs::create_dir_all(&two).unwrap();
    fs::write(one.join("a.jpg"), b"x").unwrap();
    fs::write(two.join("b.jpg"), b"x").unwrap();

    let input = format!("6\no {}\no {}\nl\n6\n", one.display(), two.display());
    let out = run(&input);
    let lines: Vec<&str> = out.lines().collect();

    let a = format!("[1/1] {}", one.join("a.jpg").display());
    let b = format!("[1/1] {}", two.join("b.jpg").display());
    let expected = vec![
        PLACEHOLDER.to_string(),
        "no folders opened yet".to_string(),
        a.clone(),
        b,
        format!("* {}", two.display()),
        format!("  {}", one.display()),
        format!("folder {}", one.display()),
        a,
    ];
    assert_eq!(lines, expected);
}
