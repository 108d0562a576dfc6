use log::warn;
use syn::visit::Visit;

use crate::annotations::{classify, AnnotationKind};
use crate::extractor::{ModelSchema, PropertyDescriptor};
use crate::javadoc;
use crate::parser::ParsedUnit;
use crate::type_map;

/// Placeholder fragment for field types outside the primitive table.
const UNMAPPED_TYPE: &str = "type: object";

/// Collects the schema of one model file.
///
/// Every named struct field carrying the XML-element marker becomes a
/// property, in declaration order; fields without the marker are invisible.
/// The file's type declarations themselves need no annotation.
pub fn extract_model(unit: &ParsedUnit) -> ModelSchema {
    let mut lister = FieldLister {
        schema: ModelSchema::default(),
    };
    lister.visit_file(&unit.tree);
    lister.schema
}

/// Visits every struct field and keeps the gated ones.
struct FieldLister {
    schema: ModelSchema,
}

impl<'ast> Visit<'ast> for FieldLister {
    fn visit_field(&mut self, node: &'ast syn::Field) {
        let Some(ident) = &node.ident else {
            return;
        };
        let name = ident.to_string();

        let mut gated = false;
        let mut required = false;
        let mut example = String::new();
        for attr in &node.attrs {
            match classify(attr) {
                Some(AnnotationKind::XmlElement { required: flag }) => {
                    gated = true;
                    if flag {
                        required = true;
                    }
                }
                Some(AnnotationKind::Example(text)) => example = text,
                _ => {}
            }
        }
        if !gated {
            return;
        }

        if required {
            self.schema.required.push(name.clone());
        }

        let type_name = type_map::type_name(&node.ty);
        let type_fragment = match type_map::primitive_mapping(&type_name) {
            Some(fragment) => fragment,
            None => {
                warn!(
                    "No type mapping for field {} of type {}, emitting an object placeholder",
                    name, type_name
                );
                UNMAPPED_TYPE
            }
        };

        let description = javadoc::doc_text(&node.attrs).map(|text| javadoc::doc_to_line(&text));

        self.schema.properties.push(PropertyDescriptor {
            name,
            type_fragment,
            description,
            example,
        });
    }
}
