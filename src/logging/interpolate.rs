//! Positional message interpolation.
//!
//! Used by the fatal path and by numeric dispatch on unknown codes, where
//! arguments are format arguments instead of field pairs.

use serde_json::Value;

use super::fields::display_value;

/// Substitute `{}` placeholders in `template` with `args`, in order.
///
/// `{{` and `}}` produce literal braces. A placeholder with no argument left
/// stays as `{}`. Arguments beyond the last placeholder are appended,
/// space-separated.
pub fn interpolate(template: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        let next = chars.peek().copied();
        match (c, next) {
            ('{', Some('{')) => {
                chars.next();
                out.push('{');
            }
            ('}', Some('}')) => {
                chars.next();
                out.push('}');
            }
            ('{', Some('}')) => {
                chars.next();
                match args.next() {
                    Some(arg) => out.push_str(&display_value(arg)),
                    None => out.push_str("{}"),
                }
            }
            _ => out.push(c),
        }
    }

    for extra in args {
        out.push(' ');
        out.push_str(&display_value(extra));
    }

    out
}
