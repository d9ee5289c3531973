use crate::error::{SqlError, SqlResult};

/// Split a `{}` template into the literal fragments around each hole.
pub(super) fn split(template: &str) -> SqlResult<Vec<String>> {
    let mut fragments = Vec::new();
    let mut current = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' => match chars.peek() {
                Some((_, '{')) => {
                    chars.next();
                    current.push('{');
                }
                Some((_, '}')) => {
                    chars.next();
                    fragments.push(std::mem::take(&mut current));
                }
                _ => {
                    return Err(SqlError::template(format!(
                        "unsupported '{{' at byte {pos}; use '{{}}' for a value or '{{{{' for a literal brace"
                    )));
                }
            },
            '}' => match chars.peek() {
                Some((_, '}')) => {
                    chars.next();
                    current.push('}');
                }
                _ => {
                    return Err(SqlError::template(format!(
                        "unmatched '}}' at byte {pos}; use '}}}}' for a literal brace"
                    )));
                }
            },
            c => current.push(c),
        }
    }

    fragments.push(current);
    Ok(fragments)
}
