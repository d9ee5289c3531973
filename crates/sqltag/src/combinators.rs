//! Building larger statements out of smaller ones.

use crate::slot::Slot;
use crate::statement::Statement;

/// Join `pieces` into one statement with `separator` between consecutive
/// pieces, keeping every piece's values bound and in order.
///
/// The trailing fragment of each piece is merged with the separator and the
/// leading fragment of the next one, exactly like [`Statement::append`].
/// Separators only ever go between pieces. Pieces that render to whitespace
/// only, such as an empty nested `glue` or blank raw text, are skipped and
/// never produce a separator.
///
/// The result ends with one space so that a following `append` of, say,
/// `WHERE ...` stays a separate word. Normalised rendering trims it.
///
/// ```ignore
/// use sqltag::{glue, sql};
///
/// let q = glue([sql!("a={}", 1), sql!("b={}", 2)], " , ");
/// assert_eq!(q.text(), "a=$1 , b=$2");
/// ```
pub fn glue<I>(pieces: I, separator: &str) -> Statement
where
    I: IntoIterator<Item = Statement>,
{
    let mut fragments: Vec<String> = Vec::new();
    let mut slots: Vec<Slot> = Vec::new();
    let mut carry: Option<String> = None;

    for piece in pieces.into_iter().filter(|p| !p.is_blank()) {
        let (mut piece_fragments, piece_slots) = piece.into_parts();
        if let Some(prev) = carry.take() {
            if let Some(first) = piece_fragments.first_mut() {
                *first = format!("{prev}{separator}{first}");
            }
        }
        carry = piece_fragments.pop();
        fragments.extend(piece_fragments);
        slots.extend(piece_slots);
    }

    let mut last = carry.unwrap_or_default();
    last.push(' ');
    fragments.push(last);

    Statement::from_parts_unchecked(fragments, slots)
}

/// A comma-separated list with one slot per item, for `IN (...)` and
/// `VALUES ...` clauses.
///
/// Returns `None` when `items` is empty so callers can special-case
/// "nothing to insert" instead of rendering `IN ()`.
///
/// ```ignore
/// use sqltag::{map, sql};
///
/// let ids = [1, 2, 3];
/// let mut q = sql!("SELECT * FROM users WHERE id IN (");
/// q.append(map(ids, |id| id)).append(sql!(")"));
/// assert_eq!(q.text(), "SELECT * FROM users WHERE id IN ($1,$2,$3 )");
/// ```
pub fn map<I, F, S>(items: I, mut f: F) -> Option<Statement>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> S,
    S: Into<Slot>,
{
    let pieces: Vec<Statement> = items
        .into_iter()
        .map(|item| Statement::from_parts_unchecked(vec![String::new(), String::new()], vec![f(item).into()]))
        .collect();

    if pieces.is_empty() {
        return None;
    }
    Some(glue(pieces, ","))
}
