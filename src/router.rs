use crate::db::feedback::{insert_feedback, Feedback};
use crate::db::Database;
use crate::domain::{closed_view, filter, open_view, summary, Editais, Facets, FilterCriteria, Record};
use crate::errors::ServerError;
use crate::query::{form_value, parse_criteria, to_query};
use crate::responses::{html_response, json_response, redirect, ResultResp};
use crate::spreadsheets::export_editais_xlsx;
use crate::templates::pages::{dashboard_page, DashboardVm};
use astra::Request;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use std::io::Read;
use std::sync::Arc;
use tracing::{debug, info};

/// Largest feedback form body accepted.
const MAX_FORM_BYTES: u64 = 16 * 1024;

/// Everything a request handler reads. The record set is loaded once and
/// never written, so worker threads share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub editais: Arc<Editais>,
    pub facets: Arc<Facets>,
    pub today: fn() -> NaiveDate,
}

impl AppState {
    pub fn new(db: Database, editais: Editais) -> Self {
        let facets = Facets::collect(&editais);
        Self {
            db,
            editais: Arc::new(editais),
            facets: Arc::new(facets),
            today: local_today,
        }
    }
}

pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// The filtered set for one request, split into its two views.
struct Selection<'a> {
    criteria: FilterCriteria,
    open: Vec<&'a Record>,
    closed: Vec<&'a Record>,
}

fn select<'a>(req: &Request, state: &'a AppState, today: NaiveDate) -> Selection<'a> {
    let criteria = parse_criteria(req.uri().query(), state.editais.has_required_profile);
    let filtered = filter(&state.editais.records, &criteria, today);
    debug!(?criteria, matched = filtered.len(), "filters applied");

    Selection {
        open: open_view(&filtered, today),
        closed: closed_view(&filtered, today),
        criteria,
    }
}

#[derive(Serialize)]
struct EditaisJson<'a> {
    today: NaiveDate,
    open: &'a [&'a Record],
    closed: &'a [&'a Record],
    facets: &'a Facets,
}

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let today = (state.today)();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            let selection = select(&req, state, today);
            let feedback_sent = req
                .uri()
                .query()
                .and_then(|q| form_value(q, "feedback"))
                .is_some_and(|v| v == "ok");

            let filtered: Vec<&Record> = selection
                .open
                .iter()
                .chain(selection.closed.iter())
                .copied()
                .collect();

            let vm = DashboardVm {
                today,
                criteria: &selection.criteria,
                facets: &state.facets,
                by_agency: summary::by_agency(&filtered),
                by_category: summary::by_category(&filtered),
                by_theme: summary::by_theme(&filtered),
                query: to_query(&selection.criteria),
                open: selection.open,
                closed: selection.closed,
                feedback_sent,
            };
            html_response(dashboard_page(&vm))
        }

        ("GET", "/export.xlsx") => {
            let selection = select(&req, state, today);
            info!(
                rows = selection.open.len() + selection.closed.len(),
                "exporting editais workbook"
            );
            export_editais_xlsx(
                &selection.open,
                &selection.closed,
                state.editais.has_required_profile,
                today,
            )
        }

        ("GET", "/api/editais") => {
            let selection = select(&req, state, today);
            json_response(&EditaisJson {
                today,
                open: &selection.open,
                closed: &selection.closed,
                facets: &state.facets,
            })
        }

        ("POST", "/feedback") => {
            let mut body = String::new();
            req.body_mut()
                .reader()
                .take(MAX_FORM_BYTES)
                .read_to_string(&mut body)
                .map_err(|e| ServerError::BadRequest(format!("Formulário inválido: {e}")))?;

            let feedback = Feedback::from_form(
                form_value(&body, "nome").as_deref(),
                form_value(&body, "email").as_deref(),
                form_value(&body, "mensagem").as_deref(),
                Utc::now(),
            )?;

            let id = state.db.with_conn(|conn| insert_feedback(conn, &feedback))?;
            info!(id, "feedback stored");

            redirect("/?feedback=ok#feedback")
        }

        _ => Err(ServerError::NotFound),
    }
}
