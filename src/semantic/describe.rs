// Step descriptions
//
// One human-readable sentence per classified step.

use crate::extractors::base::ActionKind;

/// Render the description for one step
///
/// Blank selectors and values are treated as absent.
pub fn describe(
    action: ActionKind,
    element_selector: Option<&str>,
    value: Option<&str>,
    method_name: &str,
) -> String {
    let selector = element_selector.filter(|s| !s.trim().is_empty());
    let value = value.filter(|v| !v.trim().is_empty());

    if action.is_assertion() {
        return describe_assertion(selector, value, method_name);
    }

    let mut description = action.label();
    if let Some(selector) = selector {
        description.push_str(" on element: ");
        description.push_str(selector);
    }
    if let Some(value) = value {
        description.push_str(" with value: ");
        description.push_str(value);
    }
    description
}

fn describe_assertion(selector: Option<&str>, value: Option<&str>, method_name: &str) -> String {
    let lower = method_name.to_lowercase();

    if lower.contains("true") {
        format!("Assert that {} is true", value.unwrap_or("condition"))
    } else if lower.contains("false") {
        format!("Assert that {} is false", value.unwrap_or("condition"))
    } else if lower.contains("equals") {
        let subject = match selector {
            Some(selector) => format!("element {}", selector),
            None => "value".to_string(),
        };
        format!("Assert that {} equals {}", subject, value.unwrap_or("expected value"))
    } else {
        let mut description = String::from("Verify");
        if let Some(selector) = selector {
            description.push_str(" element ");
            description.push_str(selector);
        }
        if let Some(value) = value {
            description.push_str(" with condition: ");
            description.push_str(value);
        }
        description
    }
}
