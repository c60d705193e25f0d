use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use teamdeck_testing::{TestWorld, assertions};

#[test]
fn test_board_plain_shows_lanes_blocked_first() {
    let world = TestWorld::new().with_sample_team().unwrap();
    let result = world.run(&["board"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let out = result.stdout();
    assert!(out.starts_with("Board: 10 tasks, 2 blocked\n"));

    for label in ["Backlog (1)", "Todo (3)", "Doing (2)", "Waiting for Review (1)", "Reviewing (1)", "Done (2)"] {
        assert!(out.contains(label), "missing lane header {label}:\n{out}");
    }

    let doing = out.split("Doing (2)").nth(1).unwrap();
    let migrate = doing.find("T-4").unwrap();
    let login = doing.find("T-3").unwrap();
    assert!(migrate < login, "blocked card must lead the lane:\n{out}");

    assert!(out.contains("-> waiting on credentials"));
    assert!(out.contains("(Alice reviewing)"));
    assert!(out.contains("1h 30m"));
    assert!(out.contains("Agents: 4 total, 1 active, 1 idle, 1 blocked, 1 offline"));
    assert!(out.contains("Completed work: 2 timed tasks, avg 1h 25m (min 45m, max 2h 5m)"));
}

#[test]
fn test_board_plain_agent_on_doing_card_is_working() {
    let world = TestWorld::new()
        .with_sample_team()
        .unwrap()
        .with_sql("UPDATE agents SET status = 'active', current_task_id = 'T-3' WHERE id = 'a2';")
        .unwrap();
    let result = world.run(&["board"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let out = result.stdout();
    let doing = out.split("Doing (2)").nth(1).unwrap().split("Waiting for Review").next().unwrap();
    assert!(doing.contains("(Bob working)"), "doing lane:\n{doing}");
    assert!(!out.contains("(Bob reviewing)"));
    assert!(out.contains("(Alice reviewing)"));
}

#[test]
fn test_board_json_lanes() {
    let world = TestWorld::new().with_sample_team().unwrap().with_format("json");
    let json = world.run(&["board"]).unwrap().json().unwrap();

    assert_eq!(json["generated_at"], "2026-03-16T12:00:00Z");
    assert!(json.get("date_range").is_none());

    assertions::assert_lane_ids(&json, "backlog", &["T-1"]).unwrap();
    assertions::assert_lane_ids(&json, "todo", &["T-8", "T-9", "T-2"]).unwrap();
    assertions::assert_lane_ids(&json, "doing", &["T-4", "T-3"]).unwrap();
    assertions::assert_lane_ids(&json, "waiting_review", &["T-6"]).unwrap();
    assertions::assert_lane_ids(&json, "reviewing", &["T-5"]).unwrap();
    assertions::assert_lane_ids(&json, "done", &["T-7", "T-10"]).unwrap();

    let summary = &json["content"]["board"]["summary"];
    assert_eq!(summary["total_tasks"], 10);
    assert_eq!(summary["blocked"], 2);
    assert_eq!(summary["per_lane"]["todo"], 3);
    assert_eq!(json["content"]["durations"]["avg_minutes"], 85.0);
}

#[test]
fn test_board_json_card_fields() {
    let world = TestWorld::new().with_sample_team().unwrap().with_format("json");
    let json = world.run(&["board"]).unwrap().json().unwrap();

    let todo = &json["content"]["board"]["lanes"][1]["cards"];
    // resolved from a done history entry, so it falls back to todo but stays blocked
    assert_eq!(todo[0]["id"], "T-8");
    assert_eq!(todo[0]["blocked"], true);
    assert_eq!(todo[0]["duration"], "15d 3h");
    assert_eq!(todo[1]["status"], "cancelled");
    assert_eq!(todo[1]["duration"], "N/A");

    let done = &json["content"]["board"]["lanes"][5]["cards"];
    assert_eq!(done[0]["duration"], "2h 5m");
    assert_eq!(done[1]["duration"], "45m");
}

#[test]
fn test_board_csv_one_row_per_card() {
    let world = TestWorld::new().with_sample_team().unwrap().with_format("csv");
    let result = world.run(&["board"]).unwrap();
    assert!(result.success());

    let lines: Vec<&str> = result.stdout().lines().collect();
    assert_eq!(lines.len(), 11);
    assert!(lines[0].starts_with("lane,id,title,project,status,priority"));
    assert_eq!(
        lines[5],
        "doing,T-4,Migrate DB,Apollo,blocked,high,Cara,2026-03-19,true,waiting on credentials,4d 3h,"
    );
    assert_eq!(
        lines[8],
        "reviewing,T-5,Review API,Apollo,review,normal,Bob,2026-03-20,false,,3d 3h,Alice"
    );
}

#[test]
fn test_board_with_db_override() {
    let world = TestWorld::new().with_sample_team().unwrap();
    let elsewhere = world.temp_dir().join("copy.db");
    std::fs::copy(world.db_path(), &elsewhere).unwrap();
    std::fs::remove_file(world.db_path()).unwrap();

    let mut cmd = cargo_bin_cmd!("teamdeck");
    world
        .configure_command(&mut cmd)
        .arg("--db")
        .arg(&elsewhere)
        .arg("board");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Board: 10 tasks, 2 blocked"));
}

#[test]
fn test_board_missing_database_fails() {
    let world = TestWorld::new();

    let mut cmd = cargo_bin_cmd!("teamdeck");
    world.configure_command(&mut cmd).arg("board");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"))
        .stderr(predicate::str::contains("Database not found"));
}

#[test]
fn test_board_empty_database() {
    let world = TestWorld::new().with_empty_team().unwrap();
    let result = world.run(&["board"]).unwrap();

    assert!(result.success());
    assert!(result.stdout().starts_with("Board: 0 tasks, 0 blocked\n"));
    assert!(result.stdout().contains("(empty)"));
    assert!(result.stdout().contains("Completed work: no recorded durations"));
}

#[test]
fn test_board_rejects_foreign_database() {
    let world = TestWorld::new();
    // an empty file is a valid SQLite database with no tables
    std::fs::File::create(world.db_path()).unwrap();

    let result = world.run(&["board"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("missing table"), "stderr: {}", result.stderr());
}

#[test]
fn test_log_env_enables_debug_output() {
    let world = TestWorld::new()
        .with_sample_team()
        .unwrap()
        .with_env("TEAMDECK_LOG", "debug");
    let result = world.run(&["board"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stderr().contains("board assembled"));
    assert!(result.stdout().starts_with("Board: 10 tasks, 2 blocked\n"));
}

#[test]
fn test_default_log_level_keeps_stderr_quiet() {
    let world = TestWorld::new().with_sample_team().unwrap();
    let result = world.run(&["board"]).unwrap();

    assert!(result.success());
    assert!(result.stderr().is_empty(), "stderr: {}", result.stderr());
}
