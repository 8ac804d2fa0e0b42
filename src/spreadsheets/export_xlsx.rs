use crate::domain::criteria::NO_DEADLINE_LABEL;
use crate::domain::{classify, Record};
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook, Worksheet};

const DATE_FORMAT: &str = "%d/%m/%Y";

fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, value: &str) -> Result<(), ServerError> {
    sheet
        .write_string(row, col, value)
        .map(|_| ())
        .map_err(|e| ServerError::XlsxError(format!("Failed to write cell ({row}, {col}): {e}")))
}

fn date_text(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Writes the filtered editais, open ones first, as a single worksheet.
pub fn export_editais_xlsx(
    open: &[&Record],
    closed: &[&Record],
    with_profile: bool,
    today: NaiveDate,
) -> ResultResp {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    let mut headers = vec![
        "Título",
        "Agência",
        "Modalidade",
        "Tema",
        "Tipo de financiamento",
    ];
    if with_profile {
        headers.push("Perfil exigido");
    }
    headers.extend(["Início", "Encerramento", "Situação", "Link"]);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, record) in open.iter().chain(closed.iter()).enumerate() {
        let r = (i + 1) as u32;

        let situation = classify(record.end_date, today)
            .map(|b| b.label())
            .unwrap_or(NO_DEADLINE_LABEL);

        let mut cells = vec![
            record.title.clone(),
            record.agency.clone().unwrap_or_default(),
            record.categories.join("; "),
            record.themes.join("; "),
            record.funding_types.join("; "),
        ];
        if with_profile {
            cells.push(record.required_profile.clone().unwrap_or_default());
        }
        cells.extend([
            date_text(record.start_date),
            date_text(record.end_date),
            situation.to_string(),
            record.link.clone().unwrap_or_default(),
        ]);

        for (col, value) in cells.iter().enumerate() {
            write_cell(worksheet, r, col as u16, value)?;
        }
    }

    worksheet.autofit();

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))?;

    xlsx_response(buffer, &format!("editais_{}.xlsx", today.format("%Y-%m-%d")))
}
