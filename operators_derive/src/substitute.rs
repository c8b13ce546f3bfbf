use proc_macro2::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::visit_mut::{self, VisitMut};
use syn::{GenericParam, Generics, Ident, Type, WherePredicate, parse_quote};

struct Substitute<'a> {
    param: &'a Ident,
    with: &'a Type,
}

impl VisitMut for Substitute<'_> {
    fn visit_type_mut(&mut self, ty: &mut Type) {
        if let Type::Path(path) = ty {
            if path.qself.is_none() && path.path.is_ident(self.param) {
                *ty = self.with.clone();
                return;
            }
        }
        visit_mut::visit_type_mut(self, ty);
    }
}

/// Removes the type parameter `param` from `generics`, replacing every use of
/// it with `with`. Returns the remaining generics and the specialized self type.
pub fn specialize(
    generics: &Generics,
    name: &Ident,
    param: &Ident,
    with: &Type,
) -> syn::Result<(Generics, Type)> {
    let is_param = |p: &GenericParam| matches!(p, GenericParam::Type(t) if t.ident == *param);
    if !generics.params.iter().any(is_param) {
        return Err(syn::Error::new_spanned(
            param,
            format!("`{param}` is not a type parameter of `{name}`"),
        ));
    }

    let mut specialized = generics.clone();
    specialized.params = Punctuated::new();
    let mut arguments: Vec<TokenStream> = Vec::new();
    let mut lifted: Vec<WherePredicate> = Vec::new();

    for p in &generics.params {
        match p {
            GenericParam::Type(t) if t.ident == *param => {
                arguments.push(quote!(#with));
                if !t.bounds.is_empty() {
                    let bounds = &t.bounds;
                    lifted.push(parse_quote!(#with: #bounds));
                }
            }
            GenericParam::Type(t) => {
                let ident = &t.ident;
                arguments.push(quote!(#ident));
                specialized.params.push(p.clone());
            }
            GenericParam::Lifetime(l) => {
                let lifetime = &l.lifetime;
                arguments.push(quote!(#lifetime));
                specialized.params.push(p.clone());
            }
            GenericParam::Const(c) => {
                let ident = &c.ident;
                arguments.push(quote!(#ident));
                specialized.params.push(p.clone());
            }
        }
    }

    specialized.make_where_clause().predicates.extend(lifted);
    Substitute { param, with }.visit_generics_mut(&mut specialized);

    let self_ty = parse_quote!(#name<#(#arguments),*>);
    Ok((specialized, self_ty))
}
