use super::quote;

use cassandra_record_core::stmt::Value;

/// Substitute `:name` placeholders in raw CQL with quoted values.
///
/// A placeholder matches a whole identifier, so `:domain` does not match the
/// start of `:domain_id`. Placeholders without a value, and any text inside
/// string literals, are left untouched.
pub fn bind<K, V>(template: &str, args: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: Into<Value>,
{
    let args: Vec<(K, Value)> = args.into_iter().map(|(k, v)| (k, v.into())).collect();

    let mut ret = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();
    let mut in_literal = false;

    while let Some((start, ch)) = chars.next() {
        if ch == '\'' {
            in_literal = !in_literal;
            ret.push(ch);
            continue;
        }

        let starts_ident = matches!(chars.peek(), Some((_, next)) if next.is_ascii_alphabetic() || *next == '_');

        if ch != ':' || in_literal || !starts_ident {
            ret.push(ch);
            continue;
        }

        let mut end = start + 1;
        while let Some((i, next)) = chars.peek() {
            if next.is_ascii_alphanumeric() || *next == '_' {
                end = i + next.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        let name = &template[start + 1..end];
        match args.iter().find(|(key, _)| key.as_ref() == name) {
            Some((_, value)) => ret.push_str(&quote(value)),
            None => ret.push_str(&template[start..end]),
        }
    }

    ret
}
