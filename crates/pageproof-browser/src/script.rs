//! JavaScript snippets evaluated in the page to probe and drive the DOM

use pageproof_core::ReadinessCondition;

/// Quote a string as a JavaScript single-quoted literal
pub fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Expression evaluating to true once a readiness condition holds
pub fn readiness_script(condition: &ReadinessCondition) -> String {
    match &condition.contains_text {
        Some(text) => format!(
            "(() => {{ const el = document.querySelector({sel}); return el !== null && (el.textContent || '').includes({text}); }})()",
            sel = js_string(&condition.selector),
            text = js_string(text),
        ),
        None => format!(
            "document.querySelector({sel}) !== null",
            sel = js_string(&condition.selector),
        ),
    }
}

/// Selector matching elements that expose a given accessible role
///
/// Native elements carry implicit roles, so role=button must also match
/// <button> and button-like inputs, not just [role="button"].
fn role_selector(role: &str) -> String {
    match role {
        "button" => {
            r#"button, [role="button"], input[type="button"], input[type="submit"]"#.to_string()
        }
        "link" => r#"a[href], [role="link"]"#.to_string(),
        "checkbox" => r#"input[type="checkbox"], [role="checkbox"]"#.to_string(),
        other => format!(r#"[role="{}"]"#, other),
    }
}

/// Expression clicking the first element with the given role and
/// accessible name, evaluating to true if a match was clicked
///
/// The accessible name is resolved the way assistive tooling does for
/// simple controls: aria-label first, then a form control's value, then
/// trimmed text content.
pub fn click_by_role_script(role: &str, name: &str) -> String {
    format!(
        "(() => {{ \
           const name = {name}; \
           const candidates = Array.from(document.querySelectorAll({sel})); \
           const target = candidates.find(el => {{ \
             const label = el.getAttribute('aria-label') || el.value || el.textContent || ''; \
             return label.trim() === name; \
           }}); \
           if (!target) return false; \
           target.click(); \
           return true; \
         }})()",
        name = js_string(name),
        sel = js_string(&role_selector(role)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escapes_quotes_and_backslashes() {
        assert_eq!(js_string("plain"), "'plain'");
        assert_eq!(js_string("it's"), r"'it\'s'");
        assert_eq!(js_string(r"a\b"), r"'a\\b'");
        assert_eq!(js_string("line\nbreak"), r"'line\nbreak'");
    }

    #[test]
    fn test_existence_script() {
        let condition = ReadinessCondition::present("#streamer-tasks label");
        assert_eq!(
            readiness_script(&condition),
            "document.querySelector('#streamer-tasks label') !== null"
        );
    }

    #[test]
    fn test_text_content_script() {
        let condition = ReadinessCondition::with_text("#pending-tasks-container", "Do a barrel roll!");
        let script = readiness_script(&condition);
        assert!(script.contains("document.querySelector('#pending-tasks-container')"));
        assert!(script.contains(".includes('Do a barrel roll!')"));
    }

    #[test]
    fn test_selector_with_quotes_survives_embedding() {
        let condition = ReadinessCondition::present(r#"[data-task='first']"#);
        let script = readiness_script(&condition);
        assert!(script.contains(r"[data-task=\'first\']"));
    }

    #[test]
    fn test_role_selector_covers_native_buttons() {
        let selector = role_selector("button");
        assert!(selector.contains("button"));
        assert!(selector.contains(r#"[role="button"]"#));
        assert!(selector.contains(r#"input[type="submit"]"#));
    }

    #[test]
    fn test_role_selector_falls_back_to_role_attribute() {
        assert_eq!(role_selector("tab"), r#"[role="tab"]"#);
    }

    #[test]
    fn test_click_script_embeds_name_and_candidates() {
        let script = click_by_role_script("button", "Approve");
        assert!(script.contains("'Approve'"));
        assert!(script.contains("target.click()"));
        assert!(script.contains("return false"));
    }
}
