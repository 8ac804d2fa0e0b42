use crate::db::connection::{init_db, Database};
use crate::domain::Editais;
use crate::router::AppState;
use crate::source::decode_rows;
use astra::Response;
use chrono::NaiveDate;
use std::io::Read;
use std::ops::Deref;
use tempfile::TempDir;

/// Fixed "today" for every router test.
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
}

pub const SAMPLE_CSV: &str = "\
titulo,agencia,modalidade,tema,tipo_financiamento,perfil exigido (proponente),data_inicio,data_fim,link
Chamada Universal,CNPq,Auxílio;Bolsa,Saúde; Educação,Não reembolsável,Doutor,01/05/2025,13/06/2025,https://example.org/universal
Inova Clima,FAPESP,Subvenção,Clima,Reembolsável,Empresa,01/06/2025,30/07/2025,https://example.org/clima
Bolsas Mestrado,CAPES,Bolsa,Educação,,Mestre,01/01/2025,31/03/2025,
Fluxo Contínuo,FINEP,Subvenção,Tecnologia,,Empresa,, ,https://example.org/continuo
";

/// App state backed by a throwaway DB; the directory goes away with it.
pub struct TestState {
    state: AppState,
    _dir: TempDir,
}

impl Deref for TestState {
    type Target = AppState;

    fn deref(&self) -> &AppState {
        &self.state
    }
}

/// Initialize a fresh test DB in a temp dir using the production schema
pub fn init_test_db() -> (Database, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("editais_test.sqlite");
    let db = Database::new(path.to_string_lossy().into_owned());

    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    (db, dir)
}

fn test_state(editais: Editais) -> TestState {
    let (db, dir) = init_test_db();
    let mut state = AppState::new(db, editais);
    state.today = fixed_today;
    TestState { state, _dir: dir }
}

pub fn state_from_csv(csv: &str) -> TestState {
    let sheet = decode_rows(csv.as_bytes()).expect("sample CSV should decode");
    test_state(Editais::from_sheet(&sheet))
}

pub fn sample_state() -> TestState {
    state_from_csv(SAMPLE_CSV)
}

pub fn empty_state() -> TestState {
    test_state(Editais::default())
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
