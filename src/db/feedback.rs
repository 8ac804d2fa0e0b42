use crate::errors::ServerError;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl Feedback {
    /// Builds a submission from raw form fields. The message is required;
    /// blank name/email are stored as NULL.
    pub fn from_form(
        name: Option<&str>,
        email: Option<&str>,
        message: Option<&str>,
        submitted_at: DateTime<Utc>,
    ) -> Result<Self, ServerError> {
        let clean = |v: Option<&str>| {
            v.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let message = clean(message)
            .ok_or_else(|| ServerError::BadRequest("A mensagem não pode ficar em branco".into()))?;

        Ok(Feedback {
            name: clean(name),
            email: clean(email),
            message,
            submitted_at,
        })
    }
}

pub fn insert_feedback(conn: &Connection, feedback: &Feedback) -> Result<i64, ServerError> {
    conn.execute(
        "INSERT INTO feedback (name, email, message, submitted_at) VALUES (?, ?, ?, ?)",
        params![
            feedback.name,
            feedback.email,
            feedback.message,
            feedback.submitted_at
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert feedback failed: {e}")))?;
    Ok(conn.last_insert_rowid())
}

#[cfg(test)]
pub fn recent_feedback(conn: &Connection, limit: usize) -> Result<Vec<Feedback>, ServerError> {
    let mut stmt = conn
        .prepare(
            "SELECT name, email, message, submitted_at FROM feedback \
             ORDER BY submitted_at DESC, id DESC LIMIT ?",
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params![limit as i64], |row| {
            Ok(Feedback {
                name: row.get(0)?,
                email: row.get(1)?,
                message: row.get(2)?,
                submitted_at: row.get(3)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}
