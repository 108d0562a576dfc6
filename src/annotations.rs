use syn::{Attribute, Meta};

/// HTTP verbs an exported method can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpVerb {
    /// Lower-case name used as the operation key in the output document.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "get",
            HttpVerb::Post => "post",
            HttpVerb::Put => "put",
            HttpVerb::Delete => "delete",
        }
    }
}

/// The closed vocabulary of annotations this tool understands.
///
/// Every attribute on a scanned node is classified into this enumeration
/// exactly once and the result is matched exhaustively; attributes outside
/// the vocabulary classify to `None` and are ignored wherever they appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationKind {
    /// `#[path("…")]` on a type declaration or a method
    Route(String),
    /// `#[public_api]`; only marked methods are exported
    PublicApi,
    /// `#[get]`, `#[post]`, `#[put]` or `#[delete]`
    Verb(HttpVerb),
    /// `#[path_param("…")]` on a function argument
    PathParam(String),
    /// `#[query_param("…")]` on a function argument
    QueryParam(String),
    /// `#[xml_element]` / `#[xml_element(required = true)]` on a field
    XmlElement { required: bool },
    /// `#[rest_example("…")]` on a field
    Example(String),
}

/// Classifies one attribute against the annotation vocabulary.
///
/// Returns `None` for attributes outside the vocabulary, and for vocabulary
/// attributes whose argument does not have the expected shape: a `#[path]`
/// without a string argument is not a route.
pub fn classify(attr: &Attribute) -> Option<AnnotationKind> {
    let name = attr.path().segments.last()?.ident.to_string();

    match name.as_str() {
        "path" => string_argument(attr).map(AnnotationKind::Route),
        "public_api" => Some(AnnotationKind::PublicApi),
        "get" => Some(AnnotationKind::Verb(HttpVerb::Get)),
        "post" => Some(AnnotationKind::Verb(HttpVerb::Post)),
        "put" => Some(AnnotationKind::Verb(HttpVerb::Put)),
        "delete" => Some(AnnotationKind::Verb(HttpVerb::Delete)),
        "path_param" => string_argument(attr).map(AnnotationKind::PathParam),
        "query_param" => string_argument(attr).map(AnnotationKind::QueryParam),
        "xml_element" => Some(AnnotationKind::XmlElement {
            required: required_flag(attr),
        }),
        "rest_example" => {
            raw_argument(attr).map(|raw| AnnotationKind::Example(unquote_example(&raw)))
        }
        _ => None,
    }
}

/// Extracts the single string argument of an annotation like `#[path("/users")]`.
fn string_argument(attr: &Attribute) -> Option<String> {
    match &attr.meta {
        Meta::List(list) => {
            let raw = list.tokens.to_string();
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.trim_matches('"').to_string())
            }
        }
        _ => None,
    }
}

/// The argument tokens of an annotation, verbatim, quotes preserved.
fn raw_argument(attr: &Attribute) -> Option<String> {
    match &attr.meta {
        Meta::List(list) => {
            let raw = list.tokens.to_string();
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        _ => None,
    }
}

/// Reads `required = true` out of an `#[xml_element(…)]` argument list.
///
/// Other arguments (`name = "…"` and the like) are consumed and ignored;
/// anything unparsable leaves the flag at false.
fn required_flag(attr: &Attribute) -> bool {
    let mut required = false;
    if let Meta::List(_) = &attr.meta {
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("required") {
                let lit: syn::LitBool = meta.value()?.parse()?;
                if lit.value() {
                    required = true;
                }
            } else if let Ok(value) = meta.value() {
                let _: syn::Expr = value.parse()?;
            }
            Ok(())
        });
    }
    required
}

/// Strips the outer quotes of an example literal and un-escapes `\"`.
///
/// The argument arrives as raw token text, so an example written
/// `#[rest_example("\"Rob\"")]` keeps its embedded quotes and the rendered
/// YAML value is `"Rob"`, while `#[rest_example("42")]` renders as `42`.
pub fn unquote_example(raw: &str) -> String {
    let mut example = raw;
    if example.starts_with('"') && example.ends_with('"') && example.len() >= 2 {
        example = &example[1..example.len() - 1];
    }
    example.replace("\\\"", "\"")
}
