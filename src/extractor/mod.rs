//! Extraction of endpoint entries and model schemas from parsed files.
//!
//! Two concerns live here, each implemented as a visitor over the syntax
//! tree (the tree walk itself is supplied by [`syn::visit`]):
//!
//! - [`endpoint`] finds the route-annotated type declaration of a file and
//!   records every method passing the export gates into the run's assembler.
//! - [`model`] collects the required list and property descriptors of a
//!   model file, invoked lazily while the definitions section is rendered.
//!
//! The types below are what extraction produces; rendering them into YAML is
//! the assembler's job.

pub mod endpoint;
pub mod model;

use crate::annotations::HttpVerb;

/// One exported operation, recorded under its full path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointEntry {
    /// The resource route concatenated with the method route, as written
    pub full_path: String,
    /// The operation key in the output document
    pub verb: HttpVerb,
    /// The resource route without its leading `/`
    pub tag: String,
    /// First sentence of the doc comment; may be empty, which renders as an
    /// explicit `""`
    pub summary: String,
    /// `None` emits no description line at all (method without a doc
    /// comment); `Some("")` emits an explicit `""`
    pub description: Option<String>,
    /// `None` when no argument carried a location marker; the whole
    /// section is omitted then, body descriptors included
    pub parameters: Option<Vec<ParameterDescriptor>>,
    /// Never empty; a doc comment without response tags gets the single
    /// fallback descriptor
    pub responses: Vec<ResponseDescriptor>,
}

/// Where a parameter value is carried in a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLocation {
    /// Request body; the default for every argument
    Body,
    /// Path segment, set by `#[path_param("…")]`
    Path,
    /// Query string, set by `#[query_param("…")]`
    Query,
}

impl ParameterLocation {
    /// Value of the `in:` line in the output document.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Body => "body",
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
        }
    }
}

/// One parameter of an exported operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    pub location: ParameterLocation,
    /// Declared argument name, or the location marker's argument when one
    /// is present
    pub name: String,
    /// `@param` text for the declared name, or the fixed fallback
    pub description: String,
    pub type_ref: TypeRef,
}

/// How a parameter type renders in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A fragment from the primitive table (`type: integer`, the shared-map
    /// `$ref`, …)
    Primitive(&'static str),
    /// Anything the table does not know, rendered as a definitions
    /// cross-reference under the raw type name
    Model(String),
}

/// One response listed under an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseDescriptor {
    /// Status code or tag the response is keyed by
    pub status: String,
    pub description: String,
    /// Model reference attached by a subsequent `model` tag
    pub schema_ref: Option<String>,
}

impl ResponseDescriptor {
    /// A response opened by a `@response.representation.<code>.doc` tag.
    pub fn documented(status: &str, description: String) -> Self {
        Self {
            status: status.to_string(),
            description,
            schema_ref: None,
        }
    }

    /// The fixed entry substituted when a doc comment specifies no
    /// responses at all.
    pub fn fallback() -> Self {
        Self {
            status: "default".to_string(),
            description: "Nothing specified in Javadoc".to_string(),
            schema_ref: None,
        }
    }
}

/// Schema collected from one model file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelSchema {
    /// Names of fields marked `required = true`, in declaration order
    pub required: Vec<String>,
    /// Gated fields in declaration order
    pub properties: Vec<PropertyDescriptor>,
}

/// One model field that passed the XML-element gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: String,
    /// Fragment from the primitive table, or the `type: object` placeholder
    /// when the lookup missed
    pub type_fragment: &'static str,
    /// `Some` whenever the field has a doc comment, even an empty one
    pub description: Option<String>,
    /// Only rendered together with a description; empty means absent
    pub example: String,
}
