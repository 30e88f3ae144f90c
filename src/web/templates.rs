//! HTML templates for the form interface

use serde::Serialize;
use std::fmt::Write;
use upon::{fmt as upon_fmt, Engine, Value};

use crate::error::{AppError, AppResult};

const TEMPLATES: &[(&str, &str)] = &[
    ("header", include_str!("../../templates/header.html")),
    ("footer", include_str!("../../templates/footer.html")),
    ("add", include_str!("../../templates/add.html")),
    ("remove", include_str!("../../templates/remove.html")),
    ("search", include_str!("../../templates/search.html")),
    ("books", include_str!("../../templates/books.html")),
    ("stats", include_str!("../../templates/stats.html")),
    ("read", include_str!("../../templates/read.html")),
    ("message", include_str!("../../templates/message.html")),
];

/// Compiled page templates. Every value is HTML-escaped on output.
pub struct Templates {
    engine: Engine<'static>,
}

impl Templates {
    pub fn new() -> AppResult<Self> {
        let mut engine = Engine::new();
        engine.set_default_formatter(&escape_html);
        for (name, source) in TEMPLATES {
            engine.add_template(*name, *source)?;
        }
        Ok(Self { engine })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> AppResult<String> {
        let template = self
            .engine
            .get_template(name)
            .ok_or_else(|| AppError::Internal(format!("Unknown template '{}'", name)))?;
        Ok(template.render(ctx).to_string()?)
    }
}

/// Default formatter: strings are HTML-escaped, everything else is written as is
fn escape_html(f: &mut upon_fmt::Formatter<'_>, value: &Value) -> upon_fmt::Result {
    match value {
        Value::String(s) => {
            for c in s.chars() {
                match c {
                    '&' => f.write_str("&amp;")?,
                    '<' => f.write_str("&lt;")?,
                    '>' => f.write_str("&gt;")?,
                    '"' => f.write_str("&quot;")?,
                    '\'' => f.write_str("&#x27;")?,
                    c => f.write_char(c)?,
                }
            }
        }
        v => upon_fmt::default(f, v)?,
    };
    Ok(())
}

/// Banner shown above a page body
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub kind: &'static str,
    pub text: String,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: "success",
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: "info",
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: "error",
            text: text.into(),
        }
    }
}
