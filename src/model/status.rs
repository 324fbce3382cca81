use strum::Display;

use crate::consts::consts::MISSING_STATUS;

/// Two-valued classification of the raw `status` string a record carries.
///
/// Only a case-insensitive match against `DESAPARECIDO` counts as missing; every other value,
/// including ones the backend may introduce later, is treated as resolved.
///
/// The `Display` form is the label the backend writes when it stores the status.
#[derive(Display, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordStatus {
    #[strum(serialize = "Desaparecido")]
    Missing,
    #[strum(serialize = "Encontrada")]
    Found,
}

impl RecordStatus {
    pub fn classify(raw: &str) -> Self {
        if raw.to_uppercase() == MISSING_STATUS {
            RecordStatus::Missing
        } else {
            RecordStatus::Found
        }
    }

    pub fn is_missing(self) -> bool {
        self == RecordStatus::Missing
    }
}
