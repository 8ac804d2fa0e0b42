use crate::router::handle;
use crate::tests::utils::{body_string, empty_state, sample_state, state_from_csv};
use astra::Body;
use http::{Method, Request};
use serde_json::Value;

fn get_json(state: &crate::router::AppState, uri: &str) -> Value {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json"
    );
    serde_json::from_str(&body_string(resp)).expect("body should be JSON")
}

fn titles(list: &Value) -> Vec<&str> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect()
}

#[test]
fn json_carries_views_and_facets() {
    let state = sample_state();
    let json = get_json(&state, "/api/editais");

    assert_eq!(json["today"], "2025-06-10");
    assert_eq!(
        titles(&json["open"]),
        vec!["Chamada Universal", "Inova Clima", "Fluxo Contínuo"]
    );
    assert_eq!(titles(&json["closed"]), vec!["Bolsas Mestrado"]);

    let universal = &json["open"][0];
    assert_eq!(universal["end_date"], "2025-06-13");
    assert_eq!(universal["themes"], serde_json::json!(["Saúde", "Educação"]));
    assert_eq!(universal["categories"], serde_json::json!(["Auxílio", "Bolsa"]));

    assert_eq!(json["open"][2]["end_date"], Value::Null);
    assert_eq!(json["closed"][0]["link"], Value::Null);

    assert_eq!(
        json["facets"]["agencies"],
        serde_json::json!(["CAPES", "CNPq", "FAPESP", "FINEP"])
    );
    assert_eq!(json["facets"]["closing_years"], serde_json::json!([2025]));
    assert_eq!(
        json["facets"]["required_profiles"],
        serde_json::json!(["Doutor", "Empresa", "Mestre"])
    );
}

#[test]
fn closing_year_filter_drops_undated_editais() {
    let state = sample_state();
    let json = get_json(&state, "/api/editais?ano=2025");

    assert_eq!(titles(&json["open"]), vec!["Chamada Universal", "Inova Clima"]);
    assert_eq!(titles(&json["closed"]), vec!["Bolsas Mestrado"]);
}

#[test]
fn profile_and_agency_filters_combine() {
    let state = sample_state();

    let json = get_json(&state, "/api/editais?perfil=Empresa");
    assert_eq!(titles(&json["open"]), vec!["Inova Clima", "Fluxo Contínuo"]);

    let json = get_json(&state, "/api/editais?perfil=Empresa&agencia=FINEP");
    assert_eq!(titles(&json["open"]), vec!["Fluxo Contínuo"]);
    assert!(json["closed"].as_array().unwrap().is_empty());
}

#[test]
fn profile_filter_is_ignored_without_the_column() {
    let state = state_from_csv("titulo,data_fim\nSem perfil,20/06/2025\n");
    let json = get_json(&state, "/api/editais?perfil=Doutor");

    assert_eq!(titles(&json["open"]), vec!["Sem perfil"]);
    assert_eq!(json["facets"]["required_profiles"], Value::Null);
}

#[test]
fn agency_named_todos_filters_like_any_other() {
    let state = state_from_csv(
        "titulo,agencia,data_fim
Da Todos,Todos,20/06/2025
Do CNPq,CNPq,21/06/2025
",
    );

    let json = get_json(&state, "/api/editais?agencia=Todos");
    assert_eq!(titles(&json["open"]), vec!["Da Todos"]);

    let json = get_json(&state, "/api/editais?agencia=");
    assert_eq!(titles(&json["open"]), vec!["Da Todos", "Do CNPq"]);
}

#[test]
fn closed_filter_only_returns_closed() {
    let state = sample_state();
    let json = get_json(&state, "/api/editais?prazo=encerrados");

    assert!(json["open"].as_array().unwrap().is_empty());
    assert_eq!(titles(&json["closed"]), vec!["Bolsas Mestrado"]);
}

#[test]
fn empty_sheet_gives_empty_views() {
    let state = empty_state();
    let json = get_json(&state, "/api/editais?prazo=mais-de-7-dias&tema=Clima");

    assert!(json["open"].as_array().unwrap().is_empty());
    assert!(json["closed"].as_array().unwrap().is_empty());
}
