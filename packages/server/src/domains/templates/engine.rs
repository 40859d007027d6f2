use std::collections::HashMap;

use super::catalog::{catalog, Template};

/// Fill a template's placeholders from the supplied variable bindings.
///
/// Returns `None` for an unknown template identifier. The text to fill is
/// whichever of {corps, notes_appel} is populated; the filled copy keeps
/// the other field absent.
pub fn fill(template_key: &str, variables: &HashMap<String, Option<String>>) -> Option<Template> {
    let template = catalog().get(template_key)?;

    let text = non_empty(&template.corps)
        .or_else(|| non_empty(&template.notes_appel))
        .unwrap_or_default();
    let filled = substitute(text, variables);

    Some(Template {
        canal: template.canal.clone(),
        delai: template.delai.clone(),
        sujet: template.sujet.clone(),
        corps: non_empty(&template.corps).map(|_| filled.clone()),
        notes_appel: non_empty(&template.notes_appel).map(|_| filled),
    })
}

/// Replace every `[KEY]` occurrence for keys present in `variables`.
///
/// Matching is case-sensitive and bracket-delimited exact, so a key that
/// is a prefix of another ([TEL] vs [TEL2]) never cross-matches. Keys
/// without a binding stay untouched; a null binding erases the marker.
fn substitute(text: &str, variables: &HashMap<String, Option<String>>) -> String {
    let mut filled = text.to_string();
    for (key, value) in variables {
        let marker = format!("[{key}]");
        filled = filled.replace(&marker, value.as_deref().unwrap_or_default());
    }
    filled
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|text| !text.is_empty())
}
