#[cfg(test)]
mod plan_loading_tests {
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    use netchaos::config_loader::{build_plans, load_config, load_plans, PlanError};

    fn write_plan(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_plan() {
        let file = write_plan(
            r#"
faults:
  - name: "db-latency"
    action: "delay"
    interval: "5m"
    duration: "30s"
    ports: "5432,6432"
    targets: ["10.0.0.5", "10.1.2.3/16"]
  - name: "cache-partition"
    action: "partition"
    duration: "2m"
"#,
        );

        let plans = load_plans(file.path()).unwrap();
        assert_eq!(plans.len(), 2);

        let db = &plans[0];
        assert_eq!(db.interval, Duration::from_secs(300));
        assert_eq!(db.duration, Duration::from_secs(30));
        assert_eq!(db.ports, vec!["5432", "6432"]);
        assert_eq!(db.targets[0].to_string(), "10.0.0.5/32");
        assert_eq!(db.targets[1].to_string(), "10.1.0.0/16");

        let cache = &plans[1];
        assert!(cache.is_one_shot());
        assert_eq!(cache.duration, Duration::from_secs(120));
    }

    #[test]
    fn test_custom_action_list() {
        let file = write_plan(
            r#"
general:
  actions: ["blackhole"]
faults:
  - name: "edge"
    action: "blackhole"
    duration: "1s"
  - name: "edge-delay"
    action: "delay"
    duration: "1s"
"#,
        );

        let config = load_config(file.path()).unwrap();
        match build_plans(&config).unwrap_err() {
            PlanError::UnsupportedAction { fault, action, allowed } => {
                assert_eq!(fault, "edge-delay");
                assert_eq!(action, "delay");
                assert_eq!(allowed, "blackhole");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_duration_not_shorter_than_interval() {
        let file = write_plan(
            r#"
faults:
  - name: "overlap"
    action: "loss"
    interval: "10s"
    duration: "10s"
"#,
        );

        let err = load_plans(file.path()).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("overlap"), "{}", message);
        assert!(message.contains("duration must be shorter than interval"), "{}", message);
    }

    #[test]
    fn test_invalid_port_in_plan() {
        let file = write_plan(
            r#"
faults:
  - name: "web"
    action: "loss"
    duration: "1s"
    ports: "80,99999"
"#,
        );

        let err = load_plans(file.path()).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("99999"), "{}", message);
    }

    #[test]
    fn test_missing_duration_is_rejected() {
        let file = write_plan(
            r#"
faults:
  - name: "web"
    action: "loss"
"#,
        );

        let err = load_plans(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("undefined duration"));
    }

    #[test]
    fn test_structural_errors() {
        let file = write_plan("faults: []\n");
        assert!(load_config(file.path()).is_err());

        let file = write_plan(
            r#"
faults:
  - name: "a"
    action: "delay"
    duration: "1s"
  - name: "a"
    action: "loss"
    duration: "1s"
"#,
        );
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Duplicate fault name"));

        let file = write_plan("faults: [");
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join("absent.yaml")).is_err());
    }
}
