//! Helper functions available to every template
//!
//! The registry is stateless: each helper is a plain function of its
//! arguments, registered by name on a fresh environment per render.

use minijinja::{Environment, Error, ErrorKind, Value};

use crate::core::models::GOT_PREFIX;

/// Register every helper on an environment
pub fn register(env: &mut Environment<'_>) {
    env.add_function("ast", ast);
    env.add_function("join", join);
    env.add_function("params", params);
    env.add_function("results", results);
    env.add_function("receiver", receiver);
    env.add_function("want", want);
}

/// Render a type expression or an import spec as source text
pub fn ast(value: &Value) -> Result<String, Error> {
    if let Some(text) = value.as_str() {
        return Ok(text.to_string());
    }

    value.get_attr("source")?.as_str().map(str::to_string).ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("ast: cannot render {} as source", value.kind()),
        )
    })
}

/// Join a sequence with a separator
#[must_use]
pub fn join(items: Vec<Value>, separator: &str) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(separator)
}

/// Parameter declarations of a signature view
pub fn params(func: &Value) -> Result<Value, Error> {
    required_attr(func, "params")
}

/// Result declarations of a signature view, trailing error excluded
pub fn results(func: &Value) -> Result<Value, Error> {
    required_attr(func, "results")
}

/// `Receiver.` for methods, empty for functions
pub fn receiver(func: &Value) -> Result<String, Error> {
    let name = required_attr(func, "receiver_name")?;
    Ok(match name.as_str() {
        Some("") | None => String::new(),
        Some(name) => format!("{name}."),
    })
}

/// Rename a result identifier to its expected-value field
///
/// `got1` becomes `want1`, `got1 int` becomes `want1 int`, and any other
/// name is capitalised behind `want` (`err` -> `wantErr`).
#[must_use]
pub fn want(name: &str) -> String {
    if let Some(rest) = name.strip_prefix(GOT_PREFIX) {
        return format!("want{rest}");
    }

    let mut chars = name.chars();
    chars.next().map_or_else(
        || "want".to_string(),
        |first| format!("want{}{}", first.to_uppercase(), chars.as_str()),
    )
}

fn required_attr(value: &Value, attr: &str) -> Result<Value, Error> {
    let found = value.get_attr(attr)?;
    if found.is_undefined() {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("expected a signature view with `{attr}`, got {}", value.kind()),
        ));
    }
    Ok(found)
}
