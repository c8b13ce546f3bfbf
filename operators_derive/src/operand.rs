use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Attribute, Ident, Token, Type};

/// Secondary operand requested through a helper attribute.
pub enum Operand {
    /// A single right-hand type, `Self` included.
    Type(Type),
    /// A generic parameter of the deriving type, plus the concrete types the
    /// reversed impl is expanded to: `S in f32, f64`.
    Generic { param: Ident, concrete: Vec<Type> },
}

struct OperandList(Vec<Operand>);

impl Parse for OperandList {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(Ident) && input.peek2(Token![in]) {
            let param: Ident = input.parse()?;
            input.parse::<Token![in]>()?;
            let concrete = Punctuated::<Type, Token![,]>::parse_terminated(input)?;
            if concrete.is_empty() {
                return Err(input.error("expected at least one concrete type after `in`"));
            }
            return Ok(OperandList(vec![Operand::Generic {
                param,
                concrete: concrete.into_iter().collect(),
            }]));
        }

        let types = Punctuated::<Type, Token![,]>::parse_terminated(input)?;
        Ok(OperandList(types.into_iter().map(Operand::Type).collect()))
    }
}

/// Collects the operands of every `#[name(...)]` attribute, defaulting to `Self`.
pub fn operands(attrs: &[Attribute], name: &str) -> syn::Result<Vec<Operand>> {
    let mut operands = Vec::new();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident(name)) {
        let OperandList(list) = attr.parse_args()?;
        if list.is_empty() {
            return Err(syn::Error::new_spanned(attr, format!("`#[{name}(...)]` lists no operand types")));
        }
        operands.extend(list);
    }
    if operands.is_empty() {
        operands.push(Operand::Type(syn::parse_quote!(Self)));
    }
    Ok(operands)
}

pub fn is_self(ty: &Type) -> bool {
    matches!(ty, Type::Path(path) if path.qself.is_none() && path.path.is_ident("Self"))
}
