//! Run state and rendering of the final document.
//!
//! One [`DocumentAssembler`] exists per run. Endpoint extraction feeds it
//! entries and model registrations; [`DocumentAssembler::assemble`] then
//! renders the YAML text, resolving each registered model to its source
//! file at that point and not before.
//!
//! The output layout is fixed down to the byte: consumers of the previous
//! generation of this tool diff the generated document, so indentation,
//! quoting and section order are deliberate and covered by tests.

use anyhow::Result;
use indexmap::IndexMap;
use log::{debug, warn};

use crate::extractor::model::extract_model;
use crate::extractor::{
    EndpointEntry, ModelSchema, ParameterDescriptor, ParameterLocation, ResponseDescriptor,
    TypeRef,
};
use crate::parser;
use crate::scanner::SourceIndex;

/// Mutable state of one generation run plus the rendering of its result.
pub struct DocumentAssembler {
    /// Header template spliced verbatim after the version line
    header: String,
    /// Entries grouped by full path, both levels in insertion order
    entries: IndexMap<String, Vec<EndpointEntry>>,
    /// Referenced model names, first occurrence wins
    models: Vec<String>,
}

impl DocumentAssembler {
    pub fn new(header: String) -> Self {
        Self {
            header,
            entries: IndexMap::new(),
            models: Vec::new(),
        }
    }

    /// Appends an entry under its full path.
    pub fn record_entry(&mut self, entry: EndpointEntry) {
        self.entries
            .entry(entry.full_path.clone())
            .or_default()
            .push(entry);
    }

    /// Registers a model name for the definitions section.
    ///
    /// Duplicate registrations are dropped; the first one fixes the
    /// position of the model's definition.
    pub fn register_model(&mut self, model: &str) {
        if !self.models.iter().any(|known| known == model) {
            self.models.push(model.to_string());
        }
    }

    /// Recorded entries grouped by path.
    pub fn entries(&self) -> &IndexMap<String, Vec<EndpointEntry>> {
        &self.entries
    }

    /// Registered model names in definition order.
    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Number of recorded entries across every path.
    pub fn entry_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Renders the document.
    ///
    /// The index is consulted once per registered model to find the file
    /// the definition body comes from; a model without a file (or with one
    /// that does not parse) keeps its bare object stub.
    ///
    /// # Errors
    ///
    /// Returns an error when a root directory cannot be listed during
    /// model resolution. Resolution misses are not errors.
    pub fn assemble(&self, index: &SourceIndex) -> Result<String> {
        debug!(
            "Assembling document with {} paths and {} models",
            self.entries.len(),
            self.models.len()
        );

        let mut yaml = String::new();
        yaml.push_str("swagger: \"2.0\"\n");
        yaml.push_str(&self.header);
        yaml.push_str("paths:\n");
        for (path, entries) in &self.entries {
            yaml.push_str(&format!("  {}:\n", path));
            for entry in entries {
                render_entry(&mut yaml, entry);
            }
        }

        if !self.models.is_empty() {
            self.render_definitions(&mut yaml, index)?;
        }

        Ok(yaml)
    }

    fn render_definitions(&self, yaml: &mut String, index: &SourceIndex) -> Result<()> {
        yaml.push_str("definitions:\n");
        yaml.push_str("  StringStringMap:\n");
        yaml.push_str("    additionalProperties:\n");
        yaml.push_str("      type: string\n");

        for model in &self.models {
            yaml.push_str(&format!("  {}:\n", model));
            yaml.push_str("    type: object\n");

            let file_name = format!("{}.rs", last_segment(model));
            debug!("Resolving model {} to {}", model, file_name);
            let Some(source) = index.find_by_name(&file_name)? else {
                warn!("Model file {} not found for {}", file_name, model);
                continue;
            };
            match parser::parse_unit(&source.path) {
                Ok(unit) => render_model(yaml, &extract_model(&unit)),
                Err(error) => {
                    warn!(
                        "Failed to inspect model file {}: {:#}",
                        source.path.display(),
                        error
                    );
                }
            }
        }
        Ok(())
    }
}

fn render_entry(yaml: &mut String, entry: &EndpointEntry) {
    yaml.push_str(&format!("    {}:\n", entry.verb.as_str()));
    yaml.push_str("      tags:\n");
    yaml.push_str(&format!("       - {}\n", entry.tag));
    yaml.push_str(&format!(
        "      summary: {}\n",
        quoted_if_empty(&entry.summary)
    ));
    if let Some(description) = &entry.description {
        yaml.push_str(&format!(
            "      description: {}\n",
            quoted_if_empty(description)
        ));
    }
    if let Some(parameters) = &entry.parameters {
        yaml.push_str("      parameters:\n");
        for parameter in parameters {
            render_parameter(yaml, parameter);
        }
    }
    yaml.push_str("      responses:\n");
    for response in &entry.responses {
        render_response(yaml, response);
    }
}

fn render_parameter(yaml: &mut String, parameter: &ParameterDescriptor) {
    yaml.push_str(&format!("        - in: {}\n", parameter.location.as_str()));
    yaml.push_str(&format!("          name: {}\n", parameter.name));
    yaml.push_str(&format!(
        "          description: {}\n",
        parameter.description
    ));
    yaml.push_str("          required: true\n");

    match &parameter.type_ref {
        TypeRef::Primitive(fragment) => {
            // Plain type fragments sit flat on path and query parameters;
            // everything else nests under a schema key
            if fragment.starts_with("type:") && parameter.location != ParameterLocation::Body {
                yaml.push_str(&format!("          {}\n", fragment));
            } else {
                yaml.push_str("          schema:\n");
                yaml.push_str(&format!("            {}\n", fragment));
            }
        }
        TypeRef::Model(name) => {
            yaml.push_str("          schema:\n");
            yaml.push_str(&format!("            $ref: \"#/definitions/{}\"\n", name));
        }
    }
}

fn render_response(yaml: &mut String, response: &ResponseDescriptor) {
    if response.status == "default" {
        yaml.push_str("        default:\n");
    } else {
        yaml.push_str(&format!("        \"{}\":\n", response.status));
    }
    yaml.push_str(&format!("          description: {}\n", response.description));
    if let Some(model) = &response.schema_ref {
        yaml.push_str("          schema:\n");
        yaml.push_str(&format!("            $ref: \"#/definitions/{}\"\n", model));
    }
}

fn render_model(yaml: &mut String, schema: &ModelSchema) {
    if !schema.required.is_empty() {
        yaml.push_str("    required:\n");
        for name in &schema.required {
            yaml.push_str(&format!("      - {}\n", name));
        }
    }
    yaml.push_str("    properties:\n");
    for property in &schema.properties {
        yaml.push_str(&format!("      {}:\n", property.name));
        yaml.push_str(&format!("        {}\n", property.type_fragment));
        if let Some(description) = &property.description {
            yaml.push_str(&format!("        description: {}\n", description));
            if !property.example.is_empty() {
                yaml.push_str(&format!("        example: {}\n", property.example));
            }
        }
    }
}

/// Empty scalars render as an explicit `""` so the key keeps a value.
fn quoted_if_empty(text: &str) -> &str {
    if text.is_empty() {
        "\"\""
    } else {
        text
    }
}

/// Last segment of a dot- or `::`-qualified model name.
fn last_segment(model: &str) -> &str {
    let tail = model.rsplit("::").next().unwrap_or(model);
    tail.rsplit('.').next().unwrap_or(tail)
}
