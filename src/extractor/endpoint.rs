use log::{debug, warn};
use std::collections::HashMap;
use syn::{visit::Visit, Attribute, FnArg, Pat, Signature};

use crate::annotations::{classify, AnnotationKind};
use crate::assembler::DocumentAssembler;
use crate::extractor::{
    EndpointEntry, ParameterDescriptor, ParameterLocation, ResponseDescriptor, TypeRef,
};
use crate::javadoc::{self, DocBlock};
use crate::parser::ParsedUnit;
use crate::type_map;

/// Summary substituted when an exported method has no doc comment.
const NO_JAVADOC: &str = "No Javadoc found";

/// Description substituted when no `@param` tag matches a parameter.
const NO_PARAM_TAG: &str = "No @param tag found for this parameter";

/// Records every exported operation of one parsed file into the assembler.
///
/// A file contributes entries only when one of its type declarations
/// carries a route annotation. The first such declaration supplies the
/// resource path and the tag; every method of the file is then inspected
/// against the per-method gates.
///
/// # Arguments
///
/// * `unit` - The parsed source file
/// * `assembler` - The run's assembler, which receives entries and model
///   registrations
pub fn extract_endpoints(unit: &ParsedUnit, assembler: &mut DocumentAssembler) {
    let mut check = ResourceCheck { route: None };
    check.visit_file(&unit.tree);

    let Some(class_path) = check.route else {
        debug!(
            "No route-annotated declaration in {}, skipping",
            unit.path.display()
        );
        return;
    };
    let tag = class_path
        .strip_prefix('/')
        .unwrap_or(&class_path)
        .to_string();

    let mut lister = MethodLister {
        class_path: &class_path,
        tag: &tag,
        assembler,
    };
    lister.visit_file(&unit.tree);
}

/// Finds the route annotation that marks a file as a resource declaration.
struct ResourceCheck {
    route: Option<String>,
}

impl ResourceCheck {
    fn inspect(&mut self, attrs: &[Attribute]) {
        if self.route.is_some() {
            return;
        }
        for attr in attrs {
            if let Some(AnnotationKind::Route(path)) = classify(attr) {
                self.route = Some(path);
                return;
            }
        }
    }
}

impl<'ast> Visit<'ast> for ResourceCheck {
    fn visit_item_impl(&mut self, node: &'ast syn::ItemImpl) {
        self.inspect(&node.attrs);
        syn::visit::visit_item_impl(self, node);
    }

    fn visit_item_trait(&mut self, node: &'ast syn::ItemTrait) {
        self.inspect(&node.attrs);
        syn::visit::visit_item_trait(self, node);
    }
}

/// Visits every method of a resource file and records the ones passing the
/// export gates.
struct MethodLister<'a> {
    class_path: &'a str,
    tag: &'a str,
    assembler: &'a mut DocumentAssembler,
}

impl MethodLister<'_> {
    fn inspect_method(&mut self, attrs: &[Attribute], sig: &Signature) {
        let mut route = None;
        let mut published = false;
        let mut verb = None;

        for attr in attrs {
            match classify(attr) {
                Some(AnnotationKind::Route(path)) => route = Some(path),
                Some(AnnotationKind::PublicApi) => published = true,
                // Several verb annotations leave the last one standing
                Some(AnnotationKind::Verb(v)) => verb = Some(v),
                _ => {}
            }
        }

        let Some(route) = route else {
            return;
        };
        if !published {
            return;
        }
        let Some(verb) = verb else {
            warn!(
                "Method {} carries route and publish annotations but no verb, skipping",
                sig.ident
            );
            return;
        };

        let full_path = format!("{}{}", self.class_path, route);

        let (summary, description, responses, param_docs) = match javadoc::doc_text(attrs) {
            None => (
                NO_JAVADOC.to_string(),
                None,
                vec![ResponseDescriptor::fallback()],
                HashMap::new(),
            ),
            Some(text) => {
                let block = javadoc::parse_doc(&text);
                for model in &block.models {
                    self.assembler.register_model(model);
                }
                let DocBlock {
                    summary,
                    description,
                    responses,
                    params,
                    ..
                } = block;
                let responses = if responses.is_empty() {
                    vec![ResponseDescriptor::fallback()]
                } else {
                    responses
                };
                (summary, Some(description), responses, params)
            }
        };

        let parameters = collect_parameters(sig, &param_docs);

        self.assembler.record_entry(EndpointEntry {
            full_path,
            verb,
            tag: self.tag.to_string(),
            summary,
            description,
            parameters,
            responses,
        });
    }
}

impl<'ast> Visit<'ast> for MethodLister<'_> {
    fn visit_impl_item_fn(&mut self, node: &'ast syn::ImplItemFn) {
        self.inspect_method(&node.attrs, &node.sig);
        syn::visit::visit_impl_item_fn(self, node);
    }

    fn visit_trait_item_fn(&mut self, node: &'ast syn::TraitItemFn) {
        self.inspect_method(&node.attrs, &node.sig);
        syn::visit::visit_trait_item_fn(self, node);
    }
}

/// Builds the parameter descriptors of one exported method.
///
/// Every typed argument starts as an in-body parameter under its declared
/// name; a location marker overrides both the location and the exposed
/// name. When no argument carries a marker the whole section is omitted,
/// so the return value distinguishes `None` from `Some` with body entries.
fn collect_parameters(
    sig: &Signature,
    param_docs: &HashMap<String, String>,
) -> Option<Vec<ParameterDescriptor>> {
    let mut descriptors = Vec::new();
    let mut any_located = false;

    for input in &sig.inputs {
        // The receiver is not a parameter
        let FnArg::Typed(pat_type) = input else {
            continue;
        };
        let declared = match pat_type.pat.as_ref() {
            Pat::Ident(pat_ident) => pat_ident.ident.to_string(),
            _ => continue,
        };

        let mut location = ParameterLocation::Body;
        let mut name = declared.clone();
        for attr in &pat_type.attrs {
            match classify(attr) {
                Some(AnnotationKind::PathParam(exposed)) => {
                    location = ParameterLocation::Path;
                    name = exposed;
                    any_located = true;
                }
                Some(AnnotationKind::QueryParam(exposed)) => {
                    location = ParameterLocation::Query;
                    name = exposed;
                    any_located = true;
                }
                _ => {}
            }
        }

        // The doc lookup runs on the declared name, not the exposed one
        let description = javadoc::doc_to_line(
            param_docs
                .get(&declared)
                .map(String::as_str)
                .unwrap_or(NO_PARAM_TAG),
        );

        let type_name = type_map::type_name(&pat_type.ty);
        let type_ref = match type_map::primitive_mapping(&type_name) {
            Some(fragment) => TypeRef::Primitive(fragment),
            None => TypeRef::Model(type_name),
        };

        descriptors.push(ParameterDescriptor {
            location,
            name,
            description,
            type_ref,
        });
    }

    if any_located {
        Some(descriptors)
    } else {
        None
    }
}
