use convert_case::{Case, Casing};
use syn::{Attribute, Error, Fields, Ident, ItemEnum, LitStr, Result};

/// Convert `name` to the case named by `case`.
fn apply_case(name: &str, case: &LitStr) -> Result<String> {
    Ok(match case.value().as_str() {
        "lower" | "lowercase" => name.to_case(Case::Lower),
        "UPPER" | "UPPERCASE" => name.to_case(Case::Upper),
        "snake_case" => name.to_case(Case::Snake),
        "SCREAMING_SNAKE_CASE" | "UPPER_SNAKE_CASE" => name.to_case(Case::UpperSnake),
        "kebab-case" => name.to_case(Case::Kebab),
        "SCREAMING-KEBAB-CASE" | "UPPER-KEBAB-CASE" => name.to_case(Case::UpperKebab),
        "camelCase" => name.to_case(Case::Camel),
        "PascalCase" => name.to_case(Case::Pascal),
        "Title Case" => name.to_case(Case::Title),
        _ => {
            return Err(Error::new(
                case.span(),
                format!(
                    "Unsupported case `{}`, use one of: lower, UPPER, snake_case, SCREAMING_SNAKE_CASE, kebab-case, SCREAMING-KEBAB-CASE, camelCase, PascalCase, Title Case",
                    case.value()
                ),
            ));
        }
    })
}

/// Value of `#[stitch(key = "...")]`, if present.
fn attribute_value(attrs: &[Attribute], key: &str) -> Result<Option<LitStr>> {
    let mut result = None;
    for attr in attrs.iter().filter(|v| v.path().is_ident("stitch")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                result = Some(meta.value()?.parse::<LitStr>()?);
                Ok(())
            } else {
                Err(meta.error(format!(
                    "Unexpected attribute, use it like #[stitch({key} = \"...\")]"
                )))
            }
        })?;
    }
    Ok(result)
}

/// Pairs of variant identifier and symbol.
pub(crate) fn decode_symbolic(item: &ItemEnum) -> Result<Vec<(Ident, String)>> {
    let case = attribute_value(&item.attrs, "rename_all")?;
    item.variants
        .iter()
        .map(|variant| {
            if !matches!(variant.fields, Fields::Unit) {
                return Err(Error::new_spanned(
                    variant,
                    "Symbolic can only be derived for enums without fields",
                ));
            }
            let symbol = match attribute_value(&variant.attrs, "name")? {
                Some(v) => v.value(),
                None => {
                    let name = variant.ident.to_string();
                    match &case {
                        Some(case) => apply_case(&name, case)?,
                        None => name,
                    }
                }
            };
            Ok((variant.ident.clone(), symbol))
        })
        .collect()
}
