/*!
 * Spawn Plan Tests
 * Descriptor resolution into concrete launch parameters
 */

use ecosystem_config::{AppDescriptor, ExecMode, SpawnPlan, INSTANCE_ID_ENV};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::path::PathBuf;

#[test]
fn test_direct_execution() {
    let desc = AppDescriptor::new("api", "/srv/api/bin/serve", "/srv/api")
        .with_args("--host 0.0.0.0 --port 3000");

    let plan = SpawnPlan::resolve(&desc).unwrap();

    assert_eq!(plan.app, "api");
    assert_eq!(plan.command, PathBuf::from("/srv/api/bin/serve"));
    assert_eq!(plan.args, vec!["--host", "0.0.0.0", "--port", "3000"]);
    assert_eq!(plan.working_dir, PathBuf::from("/srv/api"));
    assert_eq!(plan.exec_mode, ExecMode::Fork);
    assert!(!plan.is_clustered());
}

#[test]
fn test_wrapped_execution_prepends_script() {
    let desc = AppDescriptor::new("api", "app.py", "/srv/api")
        .with_interpreter("python3")
        .with_args("--debug");

    let plan = SpawnPlan::resolve(&desc).unwrap();

    assert_eq!(plan.command, PathBuf::from("python3"));
    assert_eq!(plan.args, vec!["/srv/api/app.py", "--debug"]);
}

#[test]
fn test_relative_script_resolved_against_cwd() {
    let desc = AppDescriptor::new("api", "bin/../run", "/srv/api");
    let plan = SpawnPlan::resolve(&desc).unwrap();
    assert_eq!(plan.command, PathBuf::from("/srv/api/run"));
}

#[test]
fn test_one_worker_per_instance() {
    let desc = AppDescriptor::new("api", "/srv/api/run", "/srv/api")
        .with_instances(3)
        .with_exec_mode(ExecMode::Cluster);

    let plan = SpawnPlan::resolve(&desc).unwrap();

    assert_eq!(plan.worker_count(), 3);
    assert!(plan.is_clustered());
    for (i, worker) in plan.workers.iter().enumerate() {
        assert_eq!(worker.replica, i as u32);
        assert_eq!(
            worker.env.get(INSTANCE_ID_ENV).map(String::as_str),
            Some(i.to_string().as_str())
        );
    }
}

#[test]
fn test_worker_env_keeps_user_values() {
    let desc = AppDescriptor::new("api", "/srv/api/run", "/srv/api")
        .with_instances(2)
        .with_env_var("PYTHONUNBUFFERED", "1")
        .with_env_var(INSTANCE_ID_ENV, "override-me");

    let plan = SpawnPlan::resolve(&desc).unwrap();

    for worker in &plan.workers {
        // User env survives untouched except at the replica-index key
        assert_eq!(
            worker.env.get("PYTHONUNBUFFERED").map(String::as_str),
            Some("1")
        );
        assert_eq!(
            worker.env.get(INSTANCE_ID_ENV).map(String::as_str),
            Some(worker.replica.to_string().as_str())
        );
    }
}

#[test]
fn test_empty_args_resolve_to_empty_vector() {
    let desc = AppDescriptor::new("api", "/srv/api/run", "/srv/api");
    let plan = SpawnPlan::resolve(&desc).unwrap();
    assert!(plan.args.is_empty());
}

#[test]
fn test_quoted_args_survive_resolution() {
    let desc = AppDescriptor::new("api", "/srv/api/run", "/srv/api")
        .with_args(r#"--label 'two words' --msg "say \"hi\"""#);

    let plan = SpawnPlan::resolve(&desc).unwrap();
    assert_eq!(plan.args, vec!["--label", "two words", "--msg", r#"say "hi""#]);
}

#[test]
fn test_unterminated_quote_fails_resolution() {
    let desc = AppDescriptor::new("api", "/srv/api/run", "/srv/api").with_args("'open");
    assert!(SpawnPlan::resolve(&desc).is_err());
}

proptest! {
    /// Plain words joined by single spaces tokenize back to themselves
    #[test]
    fn prop_plain_words_round_trip(words in proptest::collection::vec("[a-zA-Z0-9_./:-]{1,12}", 0..8)) {
        let desc = AppDescriptor::new("api", "/srv/api/run", "/srv/api")
            .with_args(words.join(" "));
        let plan = SpawnPlan::resolve(&desc).unwrap();
        prop_assert_eq!(plan.args, words);
    }
}
