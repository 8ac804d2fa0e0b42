use crate::domain::{DeadlineFilter, Facets, FilterCriteria};
use crate::query::ALL_AGENCIES;
use maud::{html, Markup};

fn multi_select(label: &str, name: &str, options: &[String], is_selected: &dyn Fn(&str) -> bool) -> Markup {
    html! {
        label for=(name) { (label) }
        select id=(name) name=(name) multiple size="5" {
            @for option in options {
                option value=(option) selected[is_selected(option.as_str())] { (option) }
            }
        }
    }
}

/// Sidebar form. Submits with GET so the selection lives in the URL.
pub fn filter_form(facets: &Facets, criteria: &FilterCriteria) -> Markup {
    let agency = criteria.agency.as_deref();

    html! {
        aside class="filters card" {
            h2 { "Filtros" }
            form method="get" action="/" {
                label for="agencia" { "Agência de fomento" }
                select id="agencia" name="agencia" {
                    option value="" selected[agency.is_none()] { (ALL_AGENCIES) }
                    @for option in &facets.agencies {
                        option value=(option) selected[agency == Some(option.as_str())] { (option) }
                    }
                }

                (multi_select("Modalidade", "modalidade", &facets.categories, &|v: &str| criteria.categories.contains(v)))
                (multi_select("Tema", "tema", &facets.themes, &|v: &str| criteria.themes.contains(v)))

                label for="ano" { "Ano de encerramento" }
                select id="ano" name="ano" multiple size="4" {
                    @for year in &facets.closing_years {
                        option value=(year) selected[criteria.closing_years.contains(year)] { (year) }
                    }
                }

                @if let Some(profiles) = &facets.required_profiles {
                    (multi_select("Perfil exigido", "perfil", profiles, &|v: &str| criteria.required_profiles.contains(v)))
                }

                label for="prazo" { "Prazo de inscrição" }
                select id="prazo" name="prazo" {
                    @for option in DeadlineFilter::ALL {
                        option value=(option.slug()) selected[criteria.deadline == option] { (option.label()) }
                    }
                }

                button type="submit" { "Aplicar filtros" }
                @if !criteria.is_unconstrained() {
                    a href="/" { "Limpar filtros" }
                }
            }
        }
    }
}
