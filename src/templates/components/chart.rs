use crate::domain::Tally;
use maud::{html, Markup};

/// Bars shown per chart; the rest is summarized in one line.
const MAX_BARS: usize = 10;

pub fn tally_chart(title: &str, tallies: &[Tally]) -> Markup {
    let max = tallies.iter().map(|t| t.count).max().unwrap_or(0).max(1);
    let hidden = tallies.len().saturating_sub(MAX_BARS);

    html! {
        div class="card chart" {
            h3 { (title) }
            @if tallies.is_empty() {
                p { "Sem dados" }
            }
            @for tally in tallies.iter().take(MAX_BARS) {
                div class="bar-row" {
                    span class="bar-label" title=(tally.value) { (tally.value) }
                    span class="bar" style={ "width: " (tally.count * 50 / max) "%" } {}
                    span { (tally.count) }
                }
            }
            @if hidden > 0 {
                p { "+ " (hidden) " outros" }
            }
        }
    }
}
