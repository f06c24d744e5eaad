//! Naming conventions for Angular units.
//!
//! Class names, selectors, and file names are all derived from the same
//! lowercase word-part representation, so a name entered as `FooBar`,
//! `fooBar`, or `FooBarComponent` resolves to the same unit.

/// Split a camel-cased name into lowercase word parts.
///
/// # Examples
///
/// ```
/// use ngsmith_core::name_parts;
///
/// assert_eq!(name_parts("FooBar"), vec!["foo", "bar"]);
/// assert_eq!(name_parts("fooBarBaz"), vec!["foo", "bar", "baz"]);
/// ```
pub fn name_parts(name: &str) -> Vec<String> {
    let trimmed = name.trim();
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in trimmed.chars() {
        if prev_lower && c.is_uppercase() && !current.is_empty() {
            parts.push(current.to_lowercase());
            current = String::new();
        }
        prev_lower = c.is_lowercase();
        current.push(c);
    }

    if !current.is_empty() {
        parts.push(current.to_lowercase());
    }

    parts.retain(|p| !p.is_empty());
    parts
}

/// Name parts for a component, with a trailing `component` word removed
/// so `FooBarComponent` and `FooBar` name the same unit.
pub fn component_name_parts(name: &str) -> Vec<String> {
    let mut parts = name_parts(name);

    if parts.last().is_some_and(|p| p == "component") {
        parts.pop();
    }

    parts
}

/// Join lowercase word parts into a camel-cased identifier.
pub fn camel_case(parts: &[String], capitalize_first: bool) -> String {
    parts
        .iter()
        .enumerate()
        .map(|(index, part)| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => {
                    let first = if capitalize_first || index != 0 {
                        c.to_uppercase().to_string()
                    } else {
                        c.to_lowercase().to_string()
                    };
                    format!("{}{}", first, chars.as_str())
                }
            }
        })
        .collect()
}

/// Lower the first character of an upper-camel-case identifier.
pub fn lower_camel_case(upper_camel_case: &str) -> String {
    let mut chars = upper_camel_case.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => format!("{}{}", c.to_lowercase(), chars.as_str()),
    }
}

/// Kebab-case element selector, prefixed when a prefix is configured.
pub fn selector_name(prefix: &[String], parts: &[String]) -> String {
    if prefix.is_empty() {
        parts.join("-")
    } else {
        format!("{}-{}", prefix.join("-"), parts.join("-"))
    }
}

/// Attribute selector for a directive (lower camel case, prefix folded in).
pub fn directive_selector_name(prefix: &[String], parts: &[String]) -> String {
    let combined: Vec<String> = prefix.iter().chain(parts.iter()).cloned().collect();
    camel_case(&combined, false)
}

/// Class name for a component, e.g. `["foo", "bar"]` -> `FooBarComponent`.
pub fn component_class_name(parts: &[String]) -> String {
    format!("{}Component", camel_case(parts, true))
}

/// Class name for a directive, e.g. `["foo", "bar"]` -> `FooBarDirective`.
pub fn directive_class_name(parts: &[String]) -> String {
    format!("{}Directive", camel_case(parts, true))
}

/// Class name for a module, with the prefix folded in.
pub fn module_class_name(prefix: &[String], parts: &[String]) -> String {
    let combined: Vec<String> = prefix.iter().chain(parts.iter()).cloned().collect();
    format!("{}Module", camel_case(&combined, true))
}

/// File and folder names are the word parts joined without separators.
pub fn joined_name(parts: &[String]) -> String {
    parts.concat()
}

/// Validate a class name entered by the user.
///
/// Accepts upper-camel-case identifiers made of letters, digits, and
/// underscores. Returns the message to show on rejection.
pub fn validate_class_name(name: &str, example: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Name is required".to_string());
    }

    let mut chars = name.chars();
    let first = chars.next().expect("checked non-empty");

    if first.is_ascii_digit() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(
            "Name should be valid javascript token with letters numbers and underscores and no spaces"
                .to_string(),
        );
    }

    if first.is_lowercase() {
        return Err(format!("Name should be upper camel case eg {}", example));
    }

    Ok(())
}
