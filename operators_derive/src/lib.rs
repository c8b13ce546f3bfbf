//! Derive macros that synthesize operators from compound assignment and from
//! the `operators::Equal` / `operators::LessThan` primitives.
//!
//! The generated code calls into the `operators` crate, which must be a
//! dependency of the deriving crate.
//!
//! ```
//! use std::ops::{AddAssign, MulAssign};
//! use operators_derive::{Addable, CommutativeMultipliable};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Addable, CommutativeMultipliable)]
//! #[commutative_multipliable(u32)]
//! struct Count(u32);
//!
//! impl AddAssign for Count {
//!     fn add_assign(&mut self, rhs: Self) {
//!         self.0 += rhs.0;
//!     }
//! }
//!
//! impl MulAssign<u32> for Count {
//!     fn mul_assign(&mut self, rhs: u32) {
//!         self.0 *= rhs;
//!     }
//! }
//!
//! assert_eq!(Count(2) + Count(3), Count(5));
//! assert_eq!(Count(2) * 3, Count(6));
//! assert_eq!(3 * Count(2), Count(6));
//! ```
//!
//! A capability whose primitive is missing is rejected when the operator is
//! synthesized:
//!
//! ```compile_fail
//! use operators_derive::Subtractable;
//!
//! #[derive(Clone, Copy, Subtractable)]
//! struct Celsius(f64);
//!
//! let _ = Celsius(1.0) - Celsius(2.0);
//! ```
//!
//! ```compile_fail
//! use operators_derive::{EqualityComparable, LessThanComparable};
//!
//! // No `operators::LessThan` impl.
//! #[derive(EqualityComparable, LessThanComparable)]
//! struct Rank(u8);
//!
//! impl operators::Equal for Rank {
//!     fn equal(&self, other: &Self) -> bool {
//!         self.0 == other.0
//!     }
//! }
//!
//! let _ = Rank(1) < Rank(2);
//! ```

mod operand;
mod substitute;

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{DeriveInput, Generics, Ident, Type, WhereClause, WherePredicate, parse_macro_input, parse_quote};

use operand::{Operand, is_self};

struct Operator {
    op_trait: &'static str,
    assign_trait: &'static str,
    method: &'static str,
    commuted: Option<&'static str>,
}

impl Operator {
    fn ident(name: &str) -> Ident {
        Ident::new(name, Span::call_site())
    }
}

const ADD: Operator = Operator { op_trait: "Add", assign_trait: "AddAssign", method: "add", commuted: Some("add_commuted") };
const SUB: Operator = Operator { op_trait: "Sub", assign_trait: "SubAssign", method: "sub", commuted: None };
const MUL: Operator = Operator { op_trait: "Mul", assign_trait: "MulAssign", method: "mul", commuted: Some("mul_commuted") };
const DIV: Operator = Operator { op_trait: "Div", assign_trait: "DivAssign", method: "div", commuted: None };

/// Synthesizes `T + U` from `T: AddAssign<U>`. Operand types are listed with
/// `#[addable(...)]`; the default is `Self`.
#[proc_macro_derive(Addable, attributes(addable))]
pub fn addable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(arithmetic(&input, &ADD, "addable", false))
}

/// Synthesizes `T - U` from `T: SubAssign<U>`, operands from `#[subtractable(...)]`.
#[proc_macro_derive(Subtractable, attributes(subtractable))]
pub fn subtractable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(arithmetic(&input, &SUB, "subtractable", false))
}

/// Synthesizes `T * U` from `T: MulAssign<U>`, operands from `#[multipliable(...)]`.
#[proc_macro_derive(Multipliable, attributes(multipliable))]
pub fn multipliable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(arithmetic(&input, &MUL, "multipliable", false))
}

/// Synthesizes `T / U` from `T: DivAssign<U>`, operands from `#[dividable(...)]`.
#[proc_macro_derive(Dividable, attributes(dividable))]
pub fn dividable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(arithmetic(&input, &DIV, "dividable", false))
}

/// Synthesizes `T + U` and `U + T` from `T: AddAssign<U>`.
///
/// `#[commutative_addable(i32)]` names concrete operands. A generic parameter
/// of `T` is written `#[commutative_addable(S in f32, f64)]`: `T + S` stays
/// generic while `S + T` is emitted once per listed type.
#[proc_macro_derive(CommutativeAddable, attributes(commutative_addable))]
pub fn commutative_addable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(arithmetic(&input, &ADD, "commutative_addable", true))
}

/// Synthesizes `T * U` and `U * T` from `T: MulAssign<U>`, with the operand
/// syntax of [`CommutativeAddable`](derive.CommutativeAddable.html).
#[proc_macro_derive(CommutativeMultipliable, attributes(commutative_multipliable))]
pub fn commutative_multipliable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(arithmetic(&input, &MUL, "commutative_multipliable", true))
}

/// Implements `PartialEq` from `operators::Equal`, with `!=` as the negation of `==`.
#[proc_macro_derive(EqualityComparable)]
pub fn equality_comparable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let where_clause = bounded(where_clause, parse_quote!(#name #ty_generics: ::operators::Equal));

    let expanded = quote! {
        impl #impl_generics ::core::cmp::PartialEq for #name #ty_generics #where_clause {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                ::operators::Equal::equal(self, other)
            }

            #[inline]
            fn ne(&self, other: &Self) -> bool {
                ::operators::not_equal(self, other)
            }
        }
    };

    TokenStream::from(expanded)
}

/// Implements `PartialOrd` from `operators::LessThan`: `a > b` is `b < a`,
/// `a <= b` is `!(b < a)` and `a >= b` is `!(a < b)`.
#[proc_macro_derive(LessThanComparable)]
pub fn less_than_comparable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let where_clause = bounded(where_clause, parse_quote!(#name #ty_generics: ::operators::LessThan));

    let expanded = quote! {
        impl #impl_generics ::core::cmp::PartialOrd for #name #ty_generics #where_clause {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::operators::partial_order(self, other)
            }

            #[inline]
            fn lt(&self, other: &Self) -> bool {
                ::operators::LessThan::less_than(self, other)
            }

            #[inline]
            fn gt(&self, other: &Self) -> bool {
                ::operators::greater(self, other)
            }

            #[inline]
            fn le(&self, other: &Self) -> bool {
                ::operators::less_equal(self, other)
            }

            #[inline]
            fn ge(&self, other: &Self) -> bool {
                ::operators::greater_equal(self, other)
            }
        }
    };

    TokenStream::from(expanded)
}

fn expand(result: syn::Result<TokenStream2>) -> TokenStream {
    TokenStream::from(result.unwrap_or_else(syn::Error::into_compile_error))
}

fn arithmetic(input: &DeriveInput, op: &Operator, attr: &str, commutative: bool) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (_, ty_generics, _) = input.generics.split_for_impl();
    let self_ty: Type = parse_quote!(#name #ty_generics);

    let mut impls = TokenStream2::new();
    for operand in operand::operands(&input.attrs, attr)? {
        match operand {
            Operand::Type(rhs) if is_self(&rhs) => {
                impls.extend(forward(&input.generics, &self_ty, &self_ty, op));
            }
            Operand::Type(rhs) => {
                impls.extend(forward(&input.generics, &self_ty, &rhs, op));
                if commutative {
                    impls.extend(reversed(&input.generics, &self_ty, &rhs, op));
                }
            }
            Operand::Generic { param, concrete } => {
                if !commutative {
                    return Err(syn::Error::new_spanned(
                        &param,
                        format!("`{param} in ...` is only accepted by commutative derives; write `#[{attr}({param})]`"),
                    ));
                }
                let rhs: Type = parse_quote!(#param);
                impls.extend(forward(&input.generics, &self_ty, &rhs, op));
                for ty in &concrete {
                    let (generics, specialized) = substitute::specialize(&input.generics, name, &param, ty)?;
                    impls.extend(reversed(&generics, &specialized, ty, op));
                }
            }
        }
    }

    Ok(impls)
}

/// `impl Op<rhs> for T`, evaluated as `T ⊕= rhs` on the moved-in left operand.
fn forward(generics: &Generics, self_ty: &Type, rhs: &Type, op: &Operator) -> TokenStream2 {
    let op_trait = Operator::ident(op.op_trait);
    let assign_trait = Operator::ident(op.assign_trait);
    let method = Operator::ident(op.method);

    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let where_clause = bounded(where_clause, parse_quote!(#self_ty: ::core::ops::#assign_trait<#rhs>));

    quote! {
        impl #impl_generics ::core::ops::#op_trait<#rhs> for #self_ty #where_clause {
            type Output = #self_ty;

            #[inline]
            fn #method(self, rhs: #rhs) -> #self_ty {
                ::operators::#method(self, rhs)
            }
        }
    }
}

/// `impl Op<T> for lhs`, evaluated as `T ⊕= lhs` on the moved-in right operand.
fn reversed(generics: &Generics, self_ty: &Type, lhs: &Type, op: &Operator) -> TokenStream2 {
    let op_trait = Operator::ident(op.op_trait);
    let assign_trait = Operator::ident(op.assign_trait);
    let method = Operator::ident(op.method);
    let Some(commuted) = op.commuted.map(Operator::ident) else {
        unreachable!("`{}` has no commutative form", op.op_trait);
    };

    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let where_clause = bounded(where_clause, parse_quote!(#self_ty: ::core::ops::#assign_trait<#lhs>));

    quote! {
        impl #impl_generics ::core::ops::#op_trait<#self_ty> for #lhs #where_clause {
            type Output = #self_ty;

            #[inline]
            fn #method(self, rhs: #self_ty) -> #self_ty {
                ::operators::#commuted(self, rhs)
            }
        }
    }
}

fn bounded(where_clause: Option<&WhereClause>, predicate: WherePredicate) -> WhereClause {
    let mut where_clause = where_clause.cloned().unwrap_or(WhereClause {
        where_token: Default::default(),
        predicates: Punctuated::new(),
    });
    where_clause.predicates.push(predicate);
    where_clause
}
