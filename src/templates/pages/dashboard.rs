use crate::domain::{Facets, FilterCriteria, Record, Tally};
use crate::templates::components::{edital_card, feedback_form, filter_form, tally_chart};
use crate::templates::desktop_layout;
use chrono::NaiveDate;
use maud::{html, Markup};

pub struct DashboardVm<'a> {
    pub today: NaiveDate,
    pub criteria: &'a FilterCriteria,
    pub facets: &'a Facets,
    pub open: Vec<&'a Record>,
    pub closed: Vec<&'a Record>,
    pub by_agency: Vec<Tally>,
    pub by_category: Vec<Tally>,
    pub by_theme: Vec<Tally>,
    /// Encoded selection, appended to export links.
    pub query: String,
    pub feedback_sent: bool,
}

fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    let total = vm.open.len() + vm.closed.len();

    desktop_layout(
        "Editais",
        html! {
            div class="page" {
                (filter_form(vm.facets, vm.criteria))

                main {
                    h1 { "Editais de fomento" }
                    p {
                        strong { (total) } " editais encontrados ("
                        (vm.open.len()) " abertos, " (vm.closed.len()) " encerrados). "
                        "Atualizado em " (vm.today.format("%d/%m/%Y").to_string()) "."
                    }
                    p {
                        a href=(with_query("/export.xlsx", &vm.query)) { "Baixar planilha" }
                        " · "
                        a href=(with_query("/api/editais", &vm.query)) { "JSON" }
                    }

                    @if total == 0 {
                        div class="card" { p { "Nenhum edital encontrado para os filtros selecionados." } }
                    }

                    @if !vm.open.is_empty() {
                        section id="abertos" {
                            h2 { "Editais abertos" }
                            @for record in &vm.open {
                                (edital_card(record, vm.today))
                            }
                        }
                    }

                    @if !vm.closed.is_empty() {
                        section id="encerrados" {
                            h2 { "Editais encerrados" }
                            @for record in &vm.closed {
                                (edital_card(record, vm.today))
                            }
                        }
                    }

                    @if total > 0 {
                        section id="resumo" {
                            h2 { "Resumo" }
                            div class="charts" {
                                (tally_chart("Editais por agência", &vm.by_agency))
                                (tally_chart("Editais por modalidade", &vm.by_category))
                                (tally_chart("Editais por tema", &vm.by_theme))
                            }
                        }
                    }

                    (feedback_form(vm.feedback_sent))
                }
            }
        },
    )
}
