use crate::consts::consts::{
    EMPTY_RESULTS_MESSAGE, FOUND_CONFIRMATION, LOADING_MESSAGE, LOAD_FAILED_HEADLINE,
    LOAD_FAILED_HINT, MARK_FOUND_BUTTON_LABEL, TECHNICAL_DETAIL_PREFIX,
};

use super::card::{CardAction, Panel, RecordCard};

fn card_text(card: &RecordCard) -> String {
    let mut lines = vec![
        format!("── {} [{}]", card.full_name, card.id),
        format!("   Nascimento:      {}", card.birth_date),
        format!("   Contato:         {}", card.contact_phone),
        format!("   Desapareceu em:  {}", card.disappearance_day),
        format!("   Local:           {}", card.location),
        format!("   Características: {}", card.characteristics),
    ];

    if let Some(photo_path) = &card.photo_path {
        lines.push(format!("   Foto:            {}", photo_path));
    }

    lines.push(format!("   STATUS: {}", card.status_label));

    match &card.action {
        CardAction::MarkFound(id) => {
            lines.push(format!("   [{}: `:found {}`]", MARK_FOUND_BUTTON_LABEL, id))
        }
        CardAction::FoundConfirmation => lines.push(format!("   {}", FOUND_CONFIRMATION)),
    }

    lines.join("\n")
}

/// Plain-text rendition of a panel for terminals
pub fn to_text(panel: &Panel) -> String {
    match panel {
        Panel::Loading => LOADING_MESSAGE.to_string(),
        Panel::Empty => EMPTY_RESULTS_MESSAGE.to_string(),
        Panel::Error { detail } => format!(
            "❌ {}\n{}\n{} {}",
            LOAD_FAILED_HEADLINE, LOAD_FAILED_HINT, TECHNICAL_DETAIL_PREFIX, detail
        ),
        Panel::Cards(cards) => cards
            .iter()
            .map(card_text)
            .collect::<Vec<String>>()
            .join("\n\n"),
    }
}
