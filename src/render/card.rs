use crate::{
    consts::consts::{NOT_AVAILABLE, NOT_INFORMED, RecordId, UNKNOWN_DATE},
    model::{record::MissingPersonRecord, status::RecordStatus},
};

/// What the results area shows. Markup and text renderers both start from this.
#[derive(Clone, Debug, PartialEq)]
pub enum Panel {
    Loading,
    /// Read failure, `detail` is the technical message shown under the headline
    Error { detail: String },
    /// No records to show, distinct from the error panel
    Empty,
    Cards(Vec<RecordCard>),
}

/// Per-card control. Missing records get an action bound to their id, found records a static message.
#[derive(Clone, Debug, PartialEq)]
pub enum CardAction {
    MarkFound(RecordId),
    FoundConfirmation,
}

/// Display-ready fields of one record, with the null handling already applied
#[derive(Clone, Debug, PartialEq)]
pub struct RecordCard {
    pub id: RecordId,
    pub full_name: String,
    pub photo_path: Option<String>,
    pub birth_date: String,
    pub contact_phone: String,
    pub disappearance_day: String,
    pub location: String,
    pub characteristics: String,
    pub status: RecordStatus,
    /// Raw status upper-cased, as shown on the card
    pub status_label: String,
    pub action: CardAction,
}

fn or_sentinel(value: Option<&str>, sentinel: &str) -> String {
    match value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => sentinel.to_string(),
    }
}

impl RecordCard {
    pub fn from_record(record: &MissingPersonRecord) -> Self {
        let status = record.classify_status();

        let action = match status {
            RecordStatus::Missing => CardAction::MarkFound(record.id.clone()),
            RecordStatus::Found => CardAction::FoundConfirmation,
        };

        RecordCard {
            id: record.id.clone(),
            full_name: record.full_name.clone(),
            photo_path: record.photo_path(),
            birth_date: or_sentinel(record.birth_date.as_deref(), NOT_INFORMED),
            contact_phone: or_sentinel(record.contact_phone.as_deref(), NOT_INFORMED),
            disappearance_day: or_sentinel(record.disappearance_day(), UNKNOWN_DATE),
            location: format!("{} - {}", record.city(), record.state()),
            characteristics: or_sentinel(record.characteristics.as_deref(), NOT_AVAILABLE),
            status,
            status_label: record.status.to_uppercase(),
            action,
        }
    }
}

/// Builds the panel for a sequence of records, keeping their order.
///
/// Reads nothing but its argument, so rendering the same records twice gives the same panel.
pub fn render_records<'a, I>(records: I) -> Panel
where
    I: IntoIterator<Item = &'a MissingPersonRecord>,
{
    let cards: Vec<RecordCard> = records.into_iter().map(RecordCard::from_record).collect();

    if cards.is_empty() {
        return Panel::Empty;
    }

    Panel::Cards(cards)
}
