//! End-to-end CLI test suite.
//!
//! Tests organized by command group. Each test drives the `memo` binary
//! against a throwaway database.

mod common;

use common::harness::TestEnv;
use predicates::prelude::*;
use serde_json::Value;

fn label_names(note: &Value) -> Vec<String> {
    note["labels"]
        .as_array()
        .expect("labels array")
        .iter()
        .map(|l| l["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

// ===========================================
// add command tests
// ===========================================
mod add_tests {
    use super::*;

    #[test]
    fn test_add_creates_database_and_note() {
        let env = TestEnv::new();

        env.cmd()
            .args(["add", "buy milk"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Created note 1"))
            .stdout(predicate::str::contains("buy milk"));

        assert!(env.db_path().exists(), "database should be created");
    }

    #[test]
    fn test_add_with_existing_and_new_labels() {
        let env = TestEnv::new();
        env.cmd().args(["label", "add", "foo"]).assert().success();
        env.cmd().args(["label", "add", "bar"]).assert().success();

        let output: Value = env
            .cmd()
            .args(["add", "note", "-l", "1", "-l", "new label", "--format", "json"])
            .output_json();

        assert_eq!(label_names(&output["data"]), vec!["foo", "new label"]);

        env.cmd()
            .labels()
            .assert()
            .success()
            .stdout(predicate::str::contains("new label"));
    }

    #[test]
    fn test_add_with_reminder() {
        let env = TestEnv::new();

        let output: Value = env
            .cmd()
            .args([
                "add",
                "dentist",
                "--remind-email",
                "2030-01-01 10:00",
                "--format",
                "json",
            ])
            .output_json();

        let reminders = output["data"]["reminders"].as_array().unwrap();
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0]["kind"], "email");
        assert_eq!(reminders[0]["remind_at"], "2030-01-01T10:00:00Z");
    }

    #[test]
    fn test_add_bad_reminder_reports_field_and_saves_nothing() {
        let env = TestEnv::new();

        env.cmd()
            .args(["add", "note", "-l", "fresh", "--remind-sms", "someday"])
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "reminder_sms: unrecognized date/time 'someday'",
            ))
            .stderr(predicate::str::contains("error: note not saved"));

        env.cmd()
            .ls()
            .assert()
            .success()
            .stdout(predicate::str::contains("No notes found."));
        env.cmd()
            .labels()
            .assert()
            .success()
            .stdout(predicate::str::contains("No labels found."));
    }

    #[test]
    fn test_add_blank_content_fails() {
        let env = TestEnv::new();

        env.cmd()
            .args(["add", "   "])
            .assert()
            .failure()
            .stderr(predicate::str::contains("content: content is required"));
    }

    #[test]
    fn test_add_unknown_label_id_fails() {
        let env = TestEnv::new();

        env.cmd()
            .args(["add", "note", "-l", "42"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("labels: unknown label id 42"));
    }
}

// ===========================================
// edit command tests
// ===========================================
mod edit_tests {
    use super::*;

    #[test]
    fn test_edit_keeps_unmentioned_fields() {
        let env = TestEnv::new();
        let id = env.add_note(
            "original",
            &["-l", "home", "--remind-sms", "2030-05-01 08:00"],
        );

        let output: Value = env
            .cmd()
            .edit(id)
            .args(["--content", "changed"])
            .format_json()
            .output_json();

        assert_eq!(output["data"]["note"]["content"], "changed");
        assert_eq!(label_names(&output["data"]), vec!["home"]);
        assert_eq!(
            output["data"]["reminders"][0]["remind_at"],
            "2030-05-01T08:00:00Z"
        );
    }

    #[test]
    fn test_edit_content_keeps_relative_reminder_and_sent_flag() {
        let env = TestEnv::new();
        let id = env.add_note("note", &["--remind-sms", "+2h", "--expires", "now"]);

        {
            let store = memo::store::SqliteStore::open(&env.db_path()).expect("open database");
            store
                .conn()
                .execute("UPDATE reminders SET sent = 1", [])
                .expect("mark reminder sent");
        }
        let before: Value = env.cmd().show(id).format_json().output_json();

        env.cmd()
            .edit(id)
            .args(["--content", "x"])
            .assert()
            .success();

        let after: Value = env.cmd().show(id).format_json().output_json();
        let reminder = &after["data"]["reminders"][0];
        assert_eq!(after["data"]["note"]["content"], "x");
        assert_eq!(reminder["remind_at"], before["data"]["reminders"][0]["remind_at"]);
        assert_eq!(reminder["sent"], true);
        assert_eq!(
            after["data"]["note"]["expires_at"],
            before["data"]["note"]["expires_at"]
        );
    }

    #[test]
    fn test_edit_empty_reminder_deletes_it() {
        let env = TestEnv::new();
        let id = env.add_note("note", &["--remind-email", "2030-01-01 10:00"]);

        let output: Value = env
            .cmd()
            .edit(id)
            .args(["--remind-email", ""])
            .format_json()
            .output_json();

        assert_eq!(output["data"]["reminders"], Value::Array(Vec::new()));
        env.cmd()
            .args(["reminders"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No reminders found."));
    }

    #[test]
    fn test_edit_replaces_and_clears_labels() {
        let env = TestEnv::new();
        let id = env.add_note("note", &["-l", "a", "-l", "b"]);

        let output: Value = env
            .cmd()
            .edit(id)
            .args(["-l", "c"])
            .format_json()
            .output_json();
        assert_eq!(label_names(&output["data"]), vec!["c"]);

        let output: Value = env
            .cmd()
            .edit(id)
            .args(["--no-labels"])
            .format_json()
            .output_json();
        assert!(label_names(&output["data"]).is_empty());
    }

    #[test]
    fn test_edit_other_users_note_is_not_found() {
        let env = TestEnv::new();
        let id = env.add_note("private", &[]);

        env.cmd()
            .user(2)
            .edit(id)
            .args(["--content", "mine now"])
            .assert()
            .failure()
            .stderr(predicate::str::contains(format!("note not found: {}", id)));

        env.cmd()
            .show(id)
            .assert()
            .success()
            .stdout(predicate::str::contains("private"));
    }

    #[test]
    fn test_edit_with_other_users_label_id_fails() {
        let env = TestEnv::new();
        env.cmd().user(2).args(["label", "add", "theirs"]).assert().success();
        let id = env.add_note("note", &[]);

        env.cmd()
            .edit(id)
            .args(["-l", "1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("labels: unknown label id 1"));
    }
}

// ===========================================
// listing command tests
// ===========================================
mod list_tests {
    use super::*;

    #[test]
    fn test_ls_json_pages() {
        let env = TestEnv::new();
        for i in 0..3 {
            env.add_note(&format!("note {}", i), &[]);
        }

        let output: Value = env
            .cmd()
            .ls()
            .args(["--per-page", "2"])
            .format_json()
            .output_json();

        assert_eq!(output["data"]["page"], 1);
        assert_eq!(output["data"]["has_more"], true);
        assert_eq!(output["data"]["items"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_upcoming_only_lists_open_expiring_notes() {
        let env = TestEnv::new();
        env.add_note("no expiry", &[]);
        let done = env.add_note("finished", &["--expires", "2030-01-01"]);
        env.add_note("soon", &["--expires", "2030-02-01"]);
        env.cmd()
            .args(["done".to_string(), done.to_string()])
            .assert()
            .success()
            .stdout(predicate::str::contains("as done"));

        env.cmd()
            .args(["upcoming"])
            .assert()
            .success()
            .stdout(predicate::str::contains("soon"))
            .stdout(predicate::str::contains("finished").not())
            .stdout(predicate::str::contains("no expiry").not());
    }

    #[test]
    fn test_reminders_due_filters_future() {
        let env = TestEnv::new();
        env.add_note("past", &["--remind-sms", "2000-01-01 00:00"]);
        env.add_note("future", &["--remind-sms", "2999-01-01 00:00"]);

        let output: Value = env
            .cmd()
            .args(["reminders", "--due"])
            .format_json()
            .output_json();

        let items = output["data"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["remind_at"], "2000-01-01T00:00:00Z");
    }

    #[test]
    fn test_reminders_due_includes_reminder_set_for_now() {
        let env = TestEnv::new();
        let id = env.add_note("right away", &["--remind-email", "now"]);

        let output: Value = env
            .cmd()
            .args(["reminders", "--due"])
            .format_json()
            .output_json();

        let items = output["data"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["note_id"], id);
    }
}

// ===========================================
// note lifecycle and label command tests
// ===========================================
mod lifecycle_tests {
    use super::*;

    #[test]
    fn test_rm_deletes_note() {
        let env = TestEnv::new();
        let id = env.add_note("temporary", &[]);

        env.cmd()
            .args(["rm".to_string(), id.to_string()])
            .assert()
            .success();

        env.cmd()
            .show(id)
            .assert()
            .failure()
            .stderr(predicate::str::contains("note not found"));
    }

    #[test]
    fn test_label_add_rejects_duplicates_and_numbers() {
        let env = TestEnv::new();
        env.cmd().args(["label", "add", "work"]).assert().success();

        env.cmd()
            .args(["label", "add", "work"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("label 'work' already exists"));
        env.cmd()
            .args(["label", "add", "123"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid label name"));
    }

    #[test]
    fn test_label_rm_detaches_from_notes() {
        let env = TestEnv::new();
        let id = env.add_note("note", &["-l", "gone"]);

        env.cmd().args(["label", "rm", "1"]).assert().success();

        let output: Value = env.cmd().show(id).format_json().output_json();
        assert!(label_names(&output["data"]).is_empty());
    }

    #[test]
    fn test_invalid_id_argument() {
        let env = TestEnv::new();

        env.cmd()
            .args(["show", "abc"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid note id: 'abc'"));
    }
}

// ===========================================
// config and misc tests
// ===========================================
mod config_tests {
    use super::*;

    #[test]
    fn test_config_sets_user_and_label_color() {
        let env = TestEnv::new();
        env.write_config("user = 7\nlabel_color = 3\n");

        env.add_note("configured", &["-l", "tinted"]);

        let output: Value = env.cmd().labels().format_json().output_json();
        assert_eq!(output["data"][0]["color"], 3);

        env.cmd()
            .user(1)
            .labels()
            .assert()
            .success()
            .stdout(predicate::str::contains("No labels found."));
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let env = TestEnv::new();
        env.write_config("user = \"seven\"\n");

        env.cmd()
            .ls()
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse config file"));
    }

    #[test]
    fn test_completions_do_not_need_database() {
        let env = TestEnv::new();

        env.cmd()
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("memo"));

        assert!(!env.db_path().exists());
    }
}
