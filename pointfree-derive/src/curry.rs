//! Expansion of the `curry!` macro.
//!
//! Two input shapes are accepted:
//!
//! 1. A closure literal, whose parameter count is the arity:
//!    `curry!(|a, b, c| a + b + c)`
//! 2. A function path followed by an explicit arity literal:
//!    `curry!(add_three, 3)`
//!
//! Both expand to a chain of `move` closures. Every closure except the last
//! shares the wrapped function and the arguments collected so far through
//! `Rc`, so each partial application can be called any number of times:
//!
//! ```text
//! {
//!     let __pointfree_function = Rc::new(add_three);
//!     move |__pointfree_argument_0| {
//!         let __pointfree_function = Rc::clone(&__pointfree_function);
//!         let __pointfree_argument_0 = Rc::new(__pointfree_argument_0);
//!         move |__pointfree_argument_1| {
//!             let __pointfree_function = Rc::clone(&__pointfree_function);
//!             let __pointfree_argument_0 = Rc::clone(&__pointfree_argument_0);
//!             let __pointfree_argument_1 = Rc::new(__pointfree_argument_1);
//!             move |__pointfree_argument_2| {
//!                 __pointfree_function(
//!                     Rc::unwrap_or_clone(Rc::clone(&__pointfree_argument_0)),
//!                     Rc::unwrap_or_clone(Rc::clone(&__pointfree_argument_1)),
//!                     __pointfree_argument_2,
//!                 )
//!             }
//!         }
//!     }
//! }
//! ```

use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{Expr, ExprClosure, ExprPath, LitInt, Token};

const MINIMUM_ARITY: usize = 2;

enum CurryInput {
    Closure(ExprClosure),
    Path { function: ExprPath, arity: usize },
}

impl CurryInput {
    fn arity(&self) -> usize {
        match self {
            Self::Closure(closure) => closure.inputs.len(),
            Self::Path { arity, .. } => *arity,
        }
    }

    fn function_tokens(&self) -> TokenStream {
        match self {
            Self::Closure(closure) => quote! { #closure },
            Self::Path { function, .. } => quote! { #function },
        }
    }
}

impl Parse for CurryInput {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let function: Expr = input.parse()?;
        let _: Option<Token![,]> = input.parse()?;

        if input.is_empty() {
            return match function {
                Expr::Closure(closure) => Ok(Self::Closure(closure)),
                Expr::Path(path) => Err(syn::Error::new(
                    path.span(),
                    "curry! needs an arity after a function name: curry!(function_name, 2)",
                )),
                other => Err(syn::Error::new(
                    other.span(),
                    "curry! expects a closure or a function name with an arity",
                )),
            };
        }

        let function = match function {
            Expr::Path(path) => path,
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    "curry! expects a function name or path before the arity",
                ));
            }
        };

        let arity_literal: LitInt = input.parse().map_err(|error| {
            syn::Error::new(error.span(), "curry! expects an integer literal for the arity")
        })?;
        let arity = arity_literal.base10_parse::<usize>()?;
        let _: Option<Token![,]> = input.parse()?;

        if !input.is_empty() {
            return Err(input.error("unexpected tokens after the arity"));
        }

        Ok(Self::Path { function, arity })
    }
}

/// Expands `curry!` input into a nested closure chain.
pub fn expand(input: TokenStream) -> syn::Result<TokenStream> {
    let curry_input: CurryInput = syn::parse2(input)?;
    let arity = curry_input.arity();

    if arity < MINIMUM_ARITY {
        return Err(syn::Error::new(
            Span::call_site(),
            "curry! requires a function with at least 2 arguments",
        ));
    }

    let function = curry_input.function_tokens();
    let arguments: Vec<Ident> = (0..arity)
        .map(|index| format_ident!("__pointfree_argument_{}", index))
        .collect();
    let chain = closure_chain(&arguments);

    Ok(quote! {
        {
            let __pointfree_function = ::std::rc::Rc::new(#function);
            #chain
        }
    })
}

fn closure_chain(arguments: &[Ident]) -> TokenStream {
    let (last, collected) = arguments
        .split_last()
        .map_or((None, arguments), |(last, rest)| (Some(last), rest));

    let forwarded = collected.iter().map(|argument| {
        quote! { ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&#argument)) }
    });
    let mut body = quote! { __pointfree_function(#(#forwarded,)* #last) };
    body = quote! { move |#last| { #body } };

    for (index, argument) in collected.iter().enumerate().rev() {
        let earlier = &collected[..index];
        body = quote! {
            move |#argument| {
                let __pointfree_function = ::std::rc::Rc::clone(&__pointfree_function);
                #(let #earlier = ::std::rc::Rc::clone(&#earlier);)*
                let #argument = ::std::rc::Rc::new(#argument);
                #body
            }
        };
    }

    body
}
