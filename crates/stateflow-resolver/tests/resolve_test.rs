use serde_json::{Value, json};
use stateflow_config::GraphDef;
use stateflow_engine::Flow;
use stateflow_resolver::{InMemoryValidatorRegistry, Resolver, StandardResolver};

const JOBS: &str = r#"{
  "name": "jobs",
  "description": "Lifecycle of a booked job",
  "states": [
    { "name": "potential", "initial": true },
    {
      "name": "pending",
      "from": ["potential"],
      "requires": [
        { "message": "Client email", "fields": [{ "client": "email" }] },
        { "message": "Address", "fields": ["address"] }
      ]
    },
    {
      "name": "lost",
      "from": ["potential", "pending"],
      "priority": -10,
      "requires": [{ "message": "Marked lost", "validator": "is_lost" }]
    },
    {
      "name": "booked",
      "from": ["pending"],
      "requires": [{ "message": "Start time", "fields": ["starts_at"] }]
    }
  ]
}"#;

fn resolver() -> StandardResolver<InMemoryValidatorRegistry> {
  let registry = InMemoryValidatorRegistry::new()
    .with("is_lost", |job: &Value| job["lost"].as_bool().unwrap_or(false));
  StandardResolver::new(registry)
}

fn graph_def() -> GraphDef {
  serde_json::from_str(JOBS).unwrap()
}

#[test]
fn test_configured_graph_walks_to_booked() {
  let graph = resolver().resolve(graph_def()).unwrap();

  let job = json!({
    "client": { "email": "sam@example.com" },
    "address": "1 Main St",
    "starts_at": "2026-01-05T09:00:00Z"
  });
  let result = graph.flow(&job).unwrap();

  assert_eq!(result.state_path(), vec!["potential", "pending", "booked"]);
  assert!(result.current("booked").unwrap());
  assert!(result.visited("pending").unwrap());
  assert!(!result.visited("lost").unwrap());
}

#[test]
fn test_configured_graph_prefers_lost() {
  let graph = resolver().resolve(graph_def()).unwrap();

  let job = json!({
    "client": { "email": "sam@example.com" },
    "address": "1 Main St",
    "lost": true
  });
  let result = graph.flow(&job).unwrap();

  assert_eq!(result.state_path(), vec!["potential", "lost"]);
  assert_eq!(result.current_state_name(), "lost");
}

#[test]
fn test_configured_graph_stays_at_initial() {
  let graph = resolver().resolve(graph_def()).unwrap();

  let result = graph.flow(&json!({ "client": {} })).unwrap();

  assert_eq!(result.state_path(), vec!["potential"]);
  let pending = result.lookup("pending").unwrap();
  assert!(!pending.requirements_met());
  assert_eq!(
    pending.unmet().collect::<Vec<_>>(),
    vec!["Client email", "Address"]
  );
}
