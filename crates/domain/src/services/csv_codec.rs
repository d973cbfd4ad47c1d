use crate::entities::{today, UserRecord};
use crate::errors::DomainError;

/// Column names of the fixed seven-column dialect, in export order.
pub const CSV_HEADERS: [&str; 7] = [
    "Username",
    "Email",
    "Password",
    "Birth Date",
    "Address",
    "Phone Number",
    "Registration Date",
];

/// How `decode` treats lines with fewer than six values.
///
/// Lenient is the historical behavior: short lines are dropped without
/// an error. Strict turns the first short line into `InvalidFormat`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
    #[default]
    Lenient,
    Strict,
}

/// Result of a decode: the accepted records plus how many malformed
/// lines were dropped (always zero in strict mode).
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeSummary {
    pub records: Vec<UserRecord>,
    pub dropped_lines: usize,
}

/// Encode a record set as CSV text.
///
/// Header line first, then one line per record with every field wrapped
/// in double quotes. Embedded quotes and commas are NOT escaped: a field
/// containing either produces output that will not round-trip through
/// `decode`. This is a known leniency of the dialect, kept on purpose.
pub fn encode(records: &[UserRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for record in records {
        let fields = [
            &record.username,
            &record.email,
            &record.password,
            &record.birthdate,
            &record.address,
            &record.phone,
            &record.registration_date,
        ];
        let row = fields
            .iter()
            .map(|field| format!("\"{}\"", field))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(row);
    }

    lines.join("\n")
}

/// Decode CSV text into a record set.
///
/// The first line is always skipped as the header (its content is not
/// validated). Each remaining non-blank line is split on commas; every
/// value has its double quotes removed and is trimmed. Lines with at
/// least six values become records, with the seventh value used as the
/// registration date when present and non-empty, else defaulted to
/// today. Completely empty input is rejected as `InvalidFormat`.
pub fn decode(text: &str, mode: DecodeMode) -> Result<DecodeSummary, DomainError> {
    if text.trim().is_empty() {
        return Err(DomainError::InvalidFormat(
            "input is empty or contains no CSV data".to_string(),
        ));
    }

    let mut records = Vec::new();
    let mut dropped_lines = 0;

    for (index, line) in text.split('\n').enumerate() {
        // First line is the header, unconditionally.
        if index == 0 {
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        let values: Vec<String> = line
            .split(',')
            .map(|value| value.replace('"', "").trim().to_string())
            .collect();

        if values.len() < 6 {
            match mode {
                DecodeMode::Lenient => {
                    dropped_lines += 1;
                    continue;
                }
                DecodeMode::Strict => {
                    return Err(DomainError::InvalidFormat(format!(
                        "line {}: expected at least 6 values, found {}",
                        index + 1,
                        values.len()
                    )));
                }
            }
        }

        let registration_date = values
            .get(6)
            .filter(|value| !value.is_empty())
            .cloned()
            .unwrap_or_else(today);

        records.push(UserRecord::with_registration_date(
            values[0].clone(),
            values[1].clone(),
            values[2].clone(),
            values[3].clone(),
            values[4].clone(),
            values[5].clone(),
            registration_date,
        ));
    }

    Ok(DecodeSummary {
        records,
        dropped_lines,
    })
}
