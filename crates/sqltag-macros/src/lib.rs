//! Procedural macros for sqltag
//!
//! Provides the `sql!` template macro.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod template;

/// Build a `sqltag::Statement` from a string literal template.
///
/// # Example
///
/// ```ignore
/// use sqltag::sql;
///
/// let name = "Team 5";
/// let q = sql!("UPDATE teams SET name = {name} WHERE id = {}", 7);
///
/// assert_eq!(q.text(), "UPDATE teams SET name = $1 WHERE id = $2");
/// ```
///
/// # Holes
///
/// - `{}` - the next positional argument
/// - `{ident}` - a variable in scope (cloned, like `format!` captures borrow)
/// - `{{` / `}}` - literal braces
///
/// Every argument is converted with `sqltag::Slot::from`, so plain values are
/// bound as parameters, `Statement`s are nested, and `unsafe_raw(..)` /
/// `quote_ident(..)` are spliced as text. A hole without an argument, an
/// unused argument, or any other `{...}` form is a compile error.
#[proc_macro]
pub fn sql(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as template::SqlInput);
    template::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
