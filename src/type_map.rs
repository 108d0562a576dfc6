//! The fixed mapping from source types to schema fragments.

use syn::Type;

/// Looks a rendered type name up in the primitive table.
///
/// The table is deliberately small: strings, booleans, the common integer
/// widths and the generic string map. Everything else misses: parameters
/// degrade to a definitions cross-reference, model fields to a placeholder.
pub fn primitive_mapping(type_name: &str) -> Option<&'static str> {
    match type_name {
        "String" | "str" => Some("type: string"),
        "bool" => Some("type: boolean"),
        "i32" | "i64" | "u32" | "u64" => Some("type: integer"),
        "HashMap<String, String>" => Some("$ref: \"#/definitions/StringStringMap\""),
        _ => None,
    }
}

/// Renders a type as the name used for table lookups and cross-references.
///
/// References are stripped, paths reduce to their last segment, and generic
/// arguments render recursively with `, ` separators, so
/// `&std::collections::HashMap<String, String>` comes out as
/// `HashMap<String, String>`.
pub fn type_name(ty: &Type) -> String {
    match ty {
        Type::Reference(reference) => type_name(&reference.elem),
        Type::Paren(paren) => type_name(&paren.elem),
        Type::Group(group) => type_name(&group.elem),
        Type::Path(type_path) => {
            let Some(segment) = type_path.path.segments.last() else {
                return "unknown".to_string();
            };
            let mut name = segment.ident.to_string();
            if let syn::PathArguments::AngleBracketed(arguments) = &segment.arguments {
                let rendered: Vec<String> = arguments
                    .args
                    .iter()
                    .filter_map(|arg| match arg {
                        syn::GenericArgument::Type(inner) => Some(type_name(inner)),
                        _ => None,
                    })
                    .collect();
                if !rendered.is_empty() {
                    name = format!("{}<{}>", name, rendered.join(", "));
                }
            }
            name
        }
        _ => "unknown".to_string(),
    }
}
