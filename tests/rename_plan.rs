use mvre::rename::{Confirmer, Decision, MoveError, execute};
use mvre::{GroupZero, PathPattern, RenameOptions, RenamePair, plan_renames};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

fn tree(files: &[&str]) -> TempDir {
    let tmp = tempfile::tempdir().expect("tempdir");
    for file in files {
        let path = tmp.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, file.as_bytes()).unwrap();
    }
    tmp
}

fn base(tmp: &TempDir) -> String {
    tmp.path().to_str().expect("utf-8 tempdir").to_string()
}

fn pattern_under(tmp: &TempDir, rest: &str) -> PathPattern {
    PathPattern::literal(&base(tmp)).join(rest)
}

#[test]
fn plan_renames_when_matches_found_then_resolves_in_walk_order() {
    let tmp = tree(&["a2", "a1", "b1"]);
    let dir = base(&tmp);

    let plan = plan_renames(
        &pattern_under(&tmp, r"a(\d)"),
        &format!("{dir}/renamed_$1"),
        &RenameOptions::default(),
    )
    .unwrap();

    assert_eq!(
        plan,
        [
            RenamePair {
                source: format!("{dir}/a1"),
                destination: format!("{dir}/renamed_1"),
            },
            RenamePair {
                source: format!("{dir}/a2"),
                destination: format!("{dir}/renamed_2"),
            },
        ]
    );
}

#[test]
fn plan_renames_when_destination_equals_source_then_drops_pair() {
    let tmp = tree(&["a1", "b1"]);
    let dir = base(&tmp);

    let plan = plan_renames(
        &pattern_under(&tmp, r"(\w)1"),
        &format!("{dir}/a1"),
        &RenameOptions::default(),
    )
    .unwrap();

    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].source, format!("{dir}/b1"));
}

#[test]
fn plan_renames_when_leaf_group_zero_then_moves_into_another_directory() {
    let tmp = tree(&["in/x.txt", "out/keep"]);
    let dir = base(&tmp);
    let options = RenameOptions::builder()
        .group_zero(GroupZero::LeafName)
        .build()
        .unwrap();

    let plan = plan_renames(
        &pattern_under(&tmp, r"in/.*\.txt"),
        &format!("{dir}/out/$0"),
        &options,
    )
    .unwrap();

    assert_eq!(plan[0].destination, format!("{dir}/out/x.txt"));
}

#[test]
fn plan_renames_when_planning_then_moves_nothing() {
    let tmp = tree(&["a1"]);
    let dir = base(&tmp);

    plan_renames(
        &pattern_under(&tmp, "a1"),
        &format!("{dir}/b1"),
        &RenameOptions::default(),
    )
    .unwrap();

    assert!(tmp.path().join("a1").exists());
    assert!(!tmp.path().join("b1").exists());
}

#[test]
fn execute_when_confirmer_answers_then_moves_and_skips_accordingly() {
    let tmp = tree(&["a1", "a2", "a3"]);
    let dir = base(&tmp);
    let options = RenameOptions::default();
    let plan = plan_renames(
        &pattern_under(&tmp, r"a(\d)"),
        &format!("{dir}/b$1"),
        &options,
    )
    .unwrap();

    let answers = Cursor::new(b"n\nmaybe\ny\nq\n".to_vec());
    let mut confirmer = Confirmer::new(answers, Vec::new(), false);
    for pair in &plan {
        match confirmer.confirm(pair).unwrap() {
            Decision::Move => execute(pair, &options).unwrap(),
            Decision::Skip => continue,
            Decision::Quit => break,
        }
    }

    assert!(tmp.path().join("a1").exists());
    assert!(tmp.path().join("b2").exists());
    assert!(!tmp.path().join("a2").exists());
    assert!(tmp.path().join("a3").exists());
    assert!(!tmp.path().join("b3").exists());
}

#[test]
fn execute_when_one_pair_fails_then_others_still_move() {
    let tmp = tree(&["a1", "a2", "b1"]);
    let dir = base(&tmp);
    let options = RenameOptions::default();
    let plan = plan_renames(
        &pattern_under(&tmp, r"a(\d)"),
        &format!("{dir}/b$1"),
        &options,
    )
    .unwrap();

    let results: Vec<_> = plan.iter().map(|pair| execute(pair, &options)).collect();

    assert!(matches!(results[0], Err(MoveError::DestinationExists { .. })));
    assert!(results[1].is_ok());
    assert_eq!(fs::read_to_string(tmp.path().join("b1")).unwrap(), "b1");
    assert_eq!(fs::read_to_string(tmp.path().join("b2")).unwrap(), "a2");
}

#[test]
fn plan_renames_when_pattern_invalid_then_errors() {
    let tmp = tree(&[]);
    let result = plan_renames(&pattern_under(&tmp, "["), "x", &RenameOptions::default());
    assert!(result.is_err());
}
