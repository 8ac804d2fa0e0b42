use crate::db::connection::Database;
use crate::db::feedback::recent_feedback;
use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::sample_state;
use astra::Body;
use http::{Method, Request};

fn post_feedback(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/feedback")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn stored_count(db: &Database) -> usize {
    db.with_conn(|conn| recent_feedback(conn, 100))
        .expect("Failed to read feedback")
        .len()
}

#[test]
fn feedback_is_stored_and_redirects() {
    let state = sample_state();

    let resp = handle(
        post_feedback("nome=Ana&email=ana%40example.org&mensagem=Faltou+o+edital+X"),
        &state,
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 302, "Should redirect after submit");
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/?feedback=ok#feedback"
    );

    let stored = state
        .db
        .with_conn(|conn| recent_feedback(conn, 10))
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name.as_deref(), Some("Ana"));
    assert_eq!(stored[0].email.as_deref(), Some("ana@example.org"));
    assert_eq!(stored[0].message, "Faltou o edital X");
}

#[test]
fn anonymous_feedback_is_accepted() {
    let state = sample_state();

    let resp = handle(post_feedback("nome=&email=&mensagem=Ótimo"), &state).unwrap();
    assert_eq!(resp.status(), 302);

    let stored = state
        .db
        .with_conn(|conn| recent_feedback(conn, 10))
        .unwrap();
    assert_eq!(stored[0].name, None);
    assert_eq!(stored[0].email, None);
}

#[test]
fn blank_message_is_rejected() {
    let state = sample_state();

    let err = handle(post_feedback("nome=Ana&mensagem=+++"), &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(error_to_response(err).status(), 400);

    assert_eq!(stored_count(&state.db), 0);
}

#[test]
fn feedback_requires_post() {
    let state = sample_state();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/feedback")
        .body(Body::empty())
        .unwrap();

    assert!(matches!(handle(req, &state), Err(ServerError::NotFound)));
}
