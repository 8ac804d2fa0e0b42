// query.rs
use crate::domain::{DeadlineFilter, FilterCriteria};
use url::form_urlencoded;

/// Label of the "every agency" option in the agency select. The option
/// submits a blank value, so no agency name can clash with it.
pub const ALL_AGENCIES: &str = "Todos";

/// Decodes the dashboard query string into a selection.
///
/// Repeated keys accumulate (`tema=A&tema=B`). Unknown keys, blank values
/// and years that aren't integers are ignored. A blank or missing
/// `agencia` means every agency. A profile selection is
/// dropped when the sheet has no profile column.
pub fn parse_criteria(query: Option<&str>, has_required_profile: bool) -> FilterCriteria {
    let mut criteria = FilterCriteria::default();

    let Some(query) = query else {
        return criteria;
    };

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        match &*key {
            "agencia" => criteria.agency = Some(value.to_string()),
            "modalidade" => {
                criteria.categories.insert(value.to_string());
            }
            "tema" => {
                criteria.themes.insert(value.to_string());
            }
            "ano" => {
                if let Ok(year) = value.parse() {
                    criteria.closing_years.insert(year);
                }
            }
            "prazo" => criteria.deadline = DeadlineFilter::from_slug(value),
            "perfil" if has_required_profile => {
                criteria.required_profiles.insert(value.to_string());
            }
            _ => {}
        }
    }

    criteria
}

/// Encodes a selection back into a query string, so links (exports, JSON)
/// carry the same filters as the page.
pub fn to_query(criteria: &FilterCriteria) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());

    if let Some(agency) = &criteria.agency {
        out.append_pair("agencia", agency);
    }
    for category in &criteria.categories {
        out.append_pair("modalidade", category);
    }
    for theme in &criteria.themes {
        out.append_pair("tema", theme);
    }
    for year in &criteria.closing_years {
        out.append_pair("ano", &year.to_string());
    }
    if criteria.deadline != DeadlineFilter::All {
        out.append_pair("prazo", criteria.deadline.slug());
    }
    for profile in &criteria.required_profiles {
        out.append_pair("perfil", profile);
    }

    out.finish()
}

/// Decodes an `application/x-www-form-urlencoded` body into its first value
/// per key.
pub fn form_value(body: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(body.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
