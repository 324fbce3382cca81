use missing_persons::{
    consts::consts::{
        MARK_FOUND_COMMUNICATION_FAILURE, MARK_FOUND_PATH, MARK_FOUND_PROMPT, MARK_FOUND_SUCCESS,
        RESULTS_ELEMENT_ID, SEARCH_FIELD_ELEMENT_ID,
    },
    filter::filter_records,
    model::record::MissingPersonRecord,
    render::{
        card::render_records,
        markup::{escape_html, to_html, RECORD_ID_ATTRIBUTE},
    },
};
use serde_json::json;

/// Delegated click handler for the mark-found buttons in the results container.
///
/// Confirms, POSTs to the mark-found endpoint and reloads on success. A failed status is shown
/// to the user and the page is left as it was.
fn mark_found_script() -> String {
    // JSON string literals are valid JavaScript string literals
    let settings = json!({
        "resultsId": RESULTS_ELEMENT_ID,
        "attribute": RECORD_ID_ATTRIBUTE,
        "path": MARK_FOUND_PATH,
        "prompt": MARK_FOUND_PROMPT,
        "success": MARK_FOUND_SUCCESS,
        "communicationFailure": MARK_FOUND_COMMUNICATION_FAILURE,
    });

    format!(
        r#"<script>
(function () {{
  const settings = {settings};
  document.getElementById(settings.resultsId).addEventListener("click", async function (event) {{
    const button = event.target.closest("[" + settings.attribute + "]");
    if (!button || !confirm(settings.prompt)) {{
      return;
    }}
    const id = button.getAttribute(settings.attribute);
    try {{
      const response = await fetch(settings.path + "/" + id, {{ method: "POST" }});
      if (response.ok) {{
        alert(settings.success);
        location.reload();
      }} else {{
        alert("Erro ao marcar como encontrada: " + response.status + ". Verifique os logs do servidor.");
      }}
    }} catch (error) {{
      alert(settings.communicationFailure);
    }}
  }});
}})();
</script>"#,
        settings = settings,
    )
}

/// Search page with the results container already filled in.
///
/// The search field submits back to the page, so filtering works without scripts. The
/// mark-found buttons are handled by [`mark_found_script`].
pub fn search_page(records: &[MissingPersonRecord], query: &str) -> String {
    let results = to_html(&render_records(filter_records(records, query)));

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<title>Pessoas Desaparecidas</title>
</head>
<body>
<h1>Pessoas Desaparecidas</h1>
<form method="get" action="/busca">
<input type="search" id="{search_id}" name="q" value="{query}" placeholder="Buscar por nome, cidade, estado ou contato">
</form>
<div id="{results_id}">{results}</div>
{script}
</body>
</html>
"#,
        search_id = SEARCH_FIELD_ELEMENT_ID,
        results_id = RESULTS_ELEMENT_ID,
        query = escape_html(query),
        results = results,
        script = mark_found_script(),
    )
}
