use crate::domain::criteria::NO_DEADLINE_LABEL;
use crate::domain::{classify, days_left, DeadlineBucket, Record};
use chrono::NaiveDate;
use maud::{html, Markup};
use url::Url;

fn deadline_text(record: &Record, today: NaiveDate) -> String {
    let Some(end) = record.end_date else {
        return NO_DEADLINE_LABEL.to_string();
    };
    let date = end.format("%d/%m/%Y");

    match days_left(end, today) {
        0 => format!("Encerra hoje ({date})"),
        1 => format!("Encerra amanhã ({date})"),
        n if n > 0 => format!("Encerra em {date} ({n} dias)"),
        _ => format!("Encerrado em {date}"),
    }
}

/// Only web links are rendered; anything else in the sheet is dropped.
fn web_link(link: &str) -> Option<Url> {
    Url::parse(link)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
}

pub fn edital_card(record: &Record, today: NaiveDate) -> Markup {
    let bucket = classify(record.end_date, today);
    let soon = bucket == Some(DeadlineBucket::ClosingWithin7Days);
    let closed = bucket == Some(DeadlineBucket::Closed);

    html! {
        article.card.closing-soon[soon].closed[closed] {
            h3 { (record.title) }
            @if let Some(agency) = &record.agency {
                p { strong { "Agência: " } (agency) }
            }
            @if !record.categories.is_empty() {
                p {
                    strong { "Modalidade: " }
                    @for category in &record.categories {
                        span class="badge" { (category) }
                    }
                }
            }
            @if !record.themes.is_empty() {
                p {
                    strong { "Tema: " }
                    @for theme in &record.themes {
                        span class="badge" { (theme) }
                    }
                }
            }
            @if !record.funding_types.is_empty() {
                p { strong { "Financiamento: " } (record.funding_types.join(", ")) }
            }
            @if let Some(profile) = &record.required_profile {
                p { strong { "Perfil exigido: " } (profile) }
            }
            @if let Some(start) = record.start_date {
                p { strong { "Início: " } (start.format("%d/%m/%Y").to_string()) }
            }
            p class="deadline" { (deadline_text(record, today)) }
            @if let Some(link) = record.link.as_deref().and_then(web_link) {
                a href=(link.as_str()) target="_blank" rel="noopener" { "Acessar edital" }
            }
        }
    }
}
