//! Console and JSON output for an edit

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use secpic::{EditReport, Identity, ManufactureDate, Outcome, ValidationError};

/// One identity as shown to the user
#[derive(Debug, Serialize)]
pub struct IdentityView {
    pub game_id: u16,
    pub game_title: &'static str,
    pub serial_number: u32,
    pub digits: String,
    pub date: ManufactureDate,
}

impl From<&Identity> for IdentityView {
    fn from(identity: &Identity) -> Self {
        Self {
            game_id: identity.game_id,
            game_title: identity.game_title(),
            serial_number: identity.serial_number,
            digits: identity.digits().to_string(),
            date: identity.date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub original: IdentityView,
    pub updated: Option<IdentityView>,
    pub rejected: Vec<String>,
    pub written_to: Option<PathBuf>,
    pub backup_created: bool,
}

impl From<&EditReport> for JsonReport {
    fn from(report: &EditReport) -> Self {
        let outcome = &report.revision.outcome;
        Self {
            original: outcome.original().into(),
            updated: match outcome {
                Outcome::Changed { updated, .. } => Some(updated.into()),
                Outcome::Unchanged(_) => None,
            },
            rejected: report
                .revision
                .rejected
                .iter()
                .map(ToString::to_string)
                .collect(),
            written_to: report.written_to.clone(),
            backup_created: report.backup_created,
        }
    }
}

/// Warning lines for a rejected override
pub fn warning_lines(error: &ValidationError) -> [String; 2] {
    let field = error.field.name();
    let mut capitalized = field.to_string();
    if let Some(first) = capitalized.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    [
        format!("Warning: Invalid {} entered", field),
        format!("{} not modified", capitalized),
    ]
}

/// Plain-text report matching the classic tool's output
pub fn write_text(out: &mut impl Write, report: &EditReport, random_serial: bool) -> Result<()> {
    let outcome = &report.revision.outcome;
    let original = outcome.original();

    writeln!(out, "Game detected: {}", original.game_title())?;
    writeln!(out, "Original S/N: {}", original.digits())?;
    writeln!(out, "Original date: {}", original.date)?;

    if random_serial {
        writeln!(out, "Random serial requested")?;
    }

    if let Outcome::Changed { updated, .. } = outcome {
        writeln!(out, "New S/N: {}", updated.digits())?;
        writeln!(out, "New date: {}", updated.date)?;
        if let Some(path) = &report.written_to {
            writeln!(out, "Saving to {}", path.display())?;
        }
    }
    Ok(())
}

pub fn write_json(out: &mut impl Write, report: &EditReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonReport::from(report))?;
    writeln!(out)?;
    Ok(())
}
