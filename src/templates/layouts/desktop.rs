use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2937; background: #f9fafb; }
header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
.page { display: grid; grid-template-columns: 280px 1fr; gap: 1.5rem; padding: 1.5rem; }
aside.filters form { display: flex; flex-direction: column; gap: 0.75rem; }
aside.filters select { width: 100%; padding: 4px; }
.card { background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem; margin-bottom: 1rem; }
.card.closing-soon { border-color: #f59e0b; background: #fffbeb; }
.card.closed { opacity: 0.75; }
.badge { display: inline-block; font-size: 0.8rem; padding: 2px 8px; border-radius: 999px; background: #e5e7eb; margin-right: 4px; }
.deadline { font-weight: 600; }
.bar-row { display: flex; align-items: center; gap: 0.5rem; margin: 2px 0; }
.bar-label { width: 40%; font-size: 0.85rem; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
.bar { background: #524ed2; height: 14px; border-radius: 3px; }
.charts { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 1rem; }
.notice { background: #ecfdf5; border: 1px solid #10b981; padding: 0.75rem; border-radius: 6px; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header {
                    h3 { "Editais de Fomento" }
                    nav {
                        a href="/" { "Início" }
                    }
                }
                (content)
            }
        }
    }
}
