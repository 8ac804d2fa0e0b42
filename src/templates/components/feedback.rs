use maud::{html, Markup};

pub fn feedback_form(sent: bool) -> Markup {
    html! {
        section class="card" id="feedback" {
            h2 { "Envie sua sugestão" }
            @if sent {
                p class="notice" { "Obrigado! Sua mensagem foi registrada." }
            }
            form method="post" action="/feedback" {
                label for="nome" { "Nome (opcional)" }
                input type="text" id="nome" name="nome" autocomplete="name";

                label for="email" { "E-mail (opcional)" }
                input type="email" id="email" name="email" autocomplete="email";

                label for="mensagem" { "Mensagem" }
                textarea id="mensagem" name="mensagem" rows="4" required {}

                button type="submit" { "Enviar" }
            }
        }
    }
}
