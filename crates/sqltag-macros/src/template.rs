//! `sql!` template parsing and expansion

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Error, Expr, Ident, LitStr, Result, Token};

pub struct SqlInput {
    template: LitStr,
    args: Vec<Expr>,
}

impl Parse for SqlInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let template: LitStr = input.parse()?;
        let mut args = Vec::new();
        if !input.is_empty() {
            input.parse::<Token![,]>()?;
            let rest = Punctuated::<Expr, Token![,]>::parse_terminated(input)?;
            args.extend(rest);
        }
        Ok(Self { template, args })
    }
}

/// One `{...}` in the template.
enum Hole {
    Positional,
    Capture(String),
}

pub fn expand(input: SqlInput) -> Result<TokenStream> {
    let (fragments, holes) = split(&input.template)?;

    let mut positional = input.args.iter();
    let mut slots = Vec::with_capacity(holes.len());

    for hole in holes {
        match hole {
            Hole::Positional => {
                let Some(arg) = positional.next() else {
                    return Err(Error::new(
                        input.template.span(),
                        "sql! template has more `{}` holes than arguments",
                    ));
                };
                slots.push(quote! { ::sqltag::Slot::from(#arg) });
            }
            Hole::Capture(name) => {
                let ident = Ident::new(&name, input.template.span());
                slots.push(quote! {
                    ::sqltag::Slot::from(::core::clone::Clone::clone(&#ident))
                });
            }
        }
    }

    if let Some(extra) = positional.next() {
        return Err(Error::new_spanned(extra, "argument never used by the sql! template"));
    }

    Ok(quote! {
        ::sqltag::Statement::__from_macro(
            &[#(#fragments),*],
            ::std::vec![#(#slots),*],
        )
    })
}

fn split(lit: &LitStr) -> Result<(Vec<String>, Vec<Hole>)> {
    let template = lit.value();
    let mut fragments = Vec::new();
    let mut holes = Vec::new();
    let mut current = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                current.push('{');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(ch) => name.push(ch),
                        None => return Err(Error::new(lit.span(), "unclosed `{` in sql! template")),
                    }
                }
                let name = name.trim();
                let hole = if name.is_empty() {
                    Hole::Positional
                } else if is_valid_ident(name) {
                    Hole::Capture(name.to_string())
                } else {
                    return Err(Error::new(
                        lit.span(),
                        format!("invalid hole `{{{name}}}` in sql! template (expected `{{}}` or `{{ident}}`)"),
                    ));
                };
                fragments.push(std::mem::take(&mut current));
                holes.push(hole);
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                current.push('}');
            }
            '}' => {
                return Err(Error::new(
                    lit.span(),
                    "unmatched `}` in sql! template (use `}}` for a literal brace)",
                ));
            }
            c => current.push(c),
        }
    }

    fragments.push(current);
    Ok((fragments, holes))
}

fn is_valid_ident(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() || first == '_') || s == "_" {
        return false;
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
