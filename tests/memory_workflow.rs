use reminder::error::{BackendError, DispatchError};
use reminder::gateway::memory::InMemoryGateway;
use reminder::model::CommandRequest;
use reminder::router::Router;
use std::error::Error;

fn dispatch(
    router: &mut Router<InMemoryGateway>,
    command: &str,
    args: &[&str],
) -> Result<String, DispatchError> {
    let request = CommandRequest::new(command, args.iter().copied());
    router
        .dispatch(&request)
        .map(|result| result.payload.unwrap_or_default())
}

#[test]
fn test_full_reminder_lifecycle() {
    let mut router = Router::new(InMemoryGateway::new());

    dispatch(&mut router, "create", &["-t", "Water", "-m", "Drink", "-d", "1h"]).unwrap();
    dispatch(&mut router, "create", &["-t", "Stretch", "-m", "Stand up"]).unwrap();
    assert_eq!(router.gateway().len(), 2);

    dispatch(
        &mut router,
        "edit",
        &["--id", "1", "--id", "2", "--title", "Walk", "-d", "30m"],
    )
    .unwrap();
    let edited = router.gateway().get("2").unwrap();
    assert_eq!(edited.title, "Walk");
    assert_eq!(edited.duration, 1800);
    assert_eq!(router.gateway().get("1").unwrap().title, "Water");

    let all = dispatch(&mut router, "fetch", &["--all"]).unwrap();
    let all: Vec<serde_json::Value> = serde_json::from_str(&all).unwrap();
    assert_eq!(all.len(), 2);

    dispatch(&mut router, "delete", &["--id=1"]).unwrap();
    let rest = dispatch(&mut router, "fetch", &["--all"]).unwrap();
    let rest: Vec<serde_json::Value> = serde_json::from_str(&rest).unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0]["id"], "2");
}

#[test]
fn test_missing_reminder_error_chain() {
    let mut router = Router::new(InMemoryGateway::new());
    let err = dispatch(&mut router, "delete", &["--id", "42"]).unwrap_err();

    assert_eq!(
        err.to_string(),
        "could not delete reminder(s) : reminder not found: 42"
    );
    let cause = err.source().and_then(|s| s.downcast_ref::<BackendError>());
    assert_eq!(cause, Some(&BackendError::NotFound("42".into())));
}

#[test]
fn test_health_of_memory_backend() {
    let mut router = Router::new(InMemoryGateway::with_address("memory://tests"));
    let request = CommandRequest::new("health", Vec::<String>::new());
    let result = router.dispatch(&request).unwrap();
    assert_eq!(
        result.messages[0].content,
        "Backend at memory://tests is healthy"
    );
}
