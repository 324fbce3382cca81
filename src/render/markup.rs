use std::fmt::Write;

use crate::consts::consts::{
    EMPTY_RESULTS_MESSAGE, FOUND_CONFIRMATION, LOADING_MESSAGE, LOAD_FAILED_HEADLINE,
    LOAD_FAILED_HINT, MARK_FOUND_BUTTON_LABEL, TECHNICAL_DETAIL_PREFIX,
};

use super::card::{CardAction, Panel, RecordCard};

const MISSING_COLOR: &str = "#ff4e59";
const FOUND_COLOR: &str = "#00cc00";

/// Attribute carried by the mark-found button, click handlers read the record id from it
pub const RECORD_ID_ATTRIBUTE: &str = "data-record-id";

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());

    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

fn detail_line(html: &mut String, label: &str, value: &str) {
    // Writing to a String cannot fail
    let _ = write!(
        html,
        r#"<p class="detalhe-linha"><span class="detalhe-label">{}</span> <span class="detalhe-valor">{}</span></p>"#,
        label,
        escape_html(value)
    );
}

fn card_html(html: &mut String, card: &RecordCard) {
    let name = escape_html(&card.full_name);

    html.push_str(r#"<div class="card-pessoa">"#);

    if let Some(photo_path) = &card.photo_path {
        let _ = write!(
            html,
            r#"<img src="{}" alt="Foto de {}" class="foto-card">"#,
            escape_html(photo_path),
            name
        );
    }

    let _ = write!(html, r#"<div class="card-conteudo"><h2>{}</h2>"#, name);

    detail_line(html, "Nascimento:", &card.birth_date);
    detail_line(html, "Contato:", &card.contact_phone);
    detail_line(html, "Desapareceu em:", &card.disappearance_day);
    detail_line(html, "Local:", &card.location);
    detail_line(html, "Características:", &card.characteristics);

    let status_color = if card.status.is_missing() {
        MISSING_COLOR
    } else {
        FOUND_COLOR
    };

    let _ = write!(
        html,
        r#"<p class="status-alerta" style="color: {};">STATUS: {}</p>"#,
        status_color,
        escape_html(&card.status_label)
    );

    match &card.action {
        CardAction::MarkFound(id) => {
            let _ = write!(
                html,
                r#"<button type="button" class="btn-encontrada" {}="{}">{}</button>"#,
                RECORD_ID_ATTRIBUTE,
                escape_html(id.as_str()),
                MARK_FOUND_BUTTON_LABEL
            );
        }
        CardAction::FoundConfirmation => {
            let _ = write!(
                html,
                r#"<p class="confirmacao-encontrada">{}</p>"#,
                FOUND_CONFIRMATION
            );
        }
    }

    html.push_str("</div></div>");
}

/// Markup for the results container
pub fn to_html(panel: &Panel) -> String {
    match panel {
        Panel::Loading => format!("<p>{}</p>", LOADING_MESSAGE),
        Panel::Empty => format!(r#"<p class="sem-resultados">{}</p>"#, EMPTY_RESULTS_MESSAGE),
        Panel::Error { detail } => format!(
            concat!(
                r#"<div class="erro-carregamento">"#,
                r#"<p class="erro-titulo">❌ {}</p>"#,
                r#"<p class="erro-dica">{}</p>"#,
                r#"<p class="erro-detalhe">{} {}</p>"#,
                "</div>"
            ),
            LOAD_FAILED_HEADLINE,
            LOAD_FAILED_HINT,
            TECHNICAL_DETAIL_PREFIX,
            escape_html(detail)
        ),
        Panel::Cards(cards) => {
            let mut html = String::new();

            for card in cards {
                card_html(&mut html, card);
            }

            html
        }
    }
}
