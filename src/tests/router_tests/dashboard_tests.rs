use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_string, empty_state, sample_state};
use astra::Body;
use http::{Method, Request};

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn dashboard_lists_open_and_closed_editais() {
    let state = sample_state();

    let resp = handle(get("/"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    for title in ["Chamada Universal", "Inova Clima", "Bolsas Mestrado", "Fluxo Contínuo"] {
        assert!(body.contains(title), "missing {title}");
    }
    assert!(body.contains("Editais abertos"));
    assert!(body.contains("Editais encerrados"));
    assert!(body.contains("3 abertos, 1 encerrados"));

    // Open section is sorted by closing date with the undated edital last.
    let universal = body.find("Chamada Universal").unwrap();
    let clima = body.find("Inova Clima").unwrap();
    let continuo = body.find("Fluxo Contínuo").unwrap();
    let mestrado = body.find("Bolsas Mestrado").unwrap();
    assert!(universal < clima && clima < continuo && continuo < mestrado);
}

#[test]
fn closing_soon_card_is_highlighted() {
    let state = sample_state();
    let body = body_string(handle(get("/"), &state).unwrap());

    assert!(body.contains(r#"class="card closing-soon""#));
    assert!(body.contains("(3 dias)"));
}

#[test]
fn deadline_filter_narrows_the_list() {
    let state = sample_state();
    let body = body_string(handle(get("/?prazo=ate-7-dias"), &state).unwrap());

    assert!(body.contains("Chamada Universal"));
    assert!(!body.contains("Inova Clima"));
    assert!(!body.contains("Fluxo Contínuo"));
    assert!(!body.contains("Bolsas Mestrado"));
}

#[test]
fn theme_filter_uses_any_match() {
    let state = sample_state();
    let body = body_string(handle(get("/?tema=Educa%C3%A7%C3%A3o"), &state).unwrap());

    assert!(body.contains("Chamada Universal"));
    assert!(body.contains("Bolsas Mestrado"));
    assert!(!body.contains("Inova Clima"));
    assert!(body.contains(r#"<option value="Educação" selected>"#));
}

#[test]
fn export_link_keeps_the_selection() {
    let state = sample_state();
    let body = body_string(handle(get("/?agencia=FAPESP&prazo=mais-de-7-dias"), &state).unwrap());

    assert!(body.contains(r#"href="/export.xlsx?agencia=FAPESP&amp;prazo=mais-de-7-dias""#));
}

#[test]
fn empty_sheet_renders_an_empty_dashboard() {
    let state = empty_state();

    for uri in ["/", "/?prazo=encerrados", "/?agencia=CNPq&tema=Clima&ano=2025"] {
        let resp = handle(get(uri), &state).expect("Handler failed");
        assert_eq!(resp.status(), 200);
        assert!(body_string(resp).contains("Nenhum edital encontrado"));
    }
}

#[test]
fn feedback_confirmation_is_shown_after_redirect() {
    let state = sample_state();
    let body = body_string(handle(get("/?feedback=ok"), &state).unwrap());
    assert!(body.contains("Obrigado!"));
}

#[test]
fn unknown_path_is_not_found() {
    let state = sample_state();

    let err = handle(get("/nope"), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let resp = error_to_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Página não encontrada"));
}
