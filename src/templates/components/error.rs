use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Basic error page
pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Erro {status}"),
        html! {
            main class="card" style="max-width: 720px; margin: 4rem auto;" {
                h1 { "Erro " (status) }
                p { (message) }
                p { a href="/" { "← Voltar aos editais" } }
            }
        },
    )
}
