// Verifies model resolution and entry ordering across several source roots
use std::fs;
use std::path::Path;
use swagger_from_source::assembler::DocumentAssembler;
use swagger_from_source::extractor::endpoint::extract_endpoints;
use swagger_from_source::parser;
use swagger_from_source::scanner::SourceIndex;
use tempfile::TempDir;

fn write_source(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create directories");
    }
    fs::write(path, content).expect("Failed to write source file");
}

fn generate(roots: Vec<&TempDir>, header: &str) -> String {
    let index = SourceIndex::new(roots.iter().map(|r| r.path().to_path_buf()).collect());
    let sources = index.enumerate().expect("Failed to enumerate source files");

    let mut assembler = DocumentAssembler::new(header.to_string());
    for source in &sources {
        let unit = parser::parse_unit(&source.path).expect("Failed to parse source file");
        extract_endpoints(&unit, &mut assembler);
    }

    assembler
        .assemble(&index)
        .expect("Failed to assemble document")
}

const HEADER: &str = "info:\n  title: Cross Root API\n";

#[test]
fn test_model_resolution_across_roots() {
    let resource = r#"
#[path("/devices")]
impl DeviceResource {
    /// Registers a device.
    ///
    /// @response.representation.200.doc The registered device
    /// @response.representation.200.model models.Device
    #[path("/register")]
    #[public_api]
    #[post]
    pub fn register(&self) -> Device {
        unimplemented!()
    }
}
"#;

    let model = r#"
pub struct Device {
    /// Serial number burned into the device.
    #[xml_element(required = true)]
    pub serial: String,
}
"#;

    let root_a = TempDir::new().expect("Failed to create temp directory");
    let root_b = TempDir::new().expect("Failed to create temp directory");
    write_source(root_a.path(), "rest/device_resource.rs", resource);
    write_source(root_b.path(), "models/Device.rs", model);

    let document = generate(vec![&root_a, &root_b], HEADER);

    assert!(
        document.contains("$ref: \"#/definitions/models.Device\""),
        "The response should reference the model"
    );
    assert!(
        document.contains(
            "  models.Device:\n    type: object\n    required:\n      - serial\n"
        ),
        "The model file from the second root should fill the definition"
    );
    assert!(
        document.contains("        description: Serial number burned into the device.\n"),
        "Field documentation should survive resolution"
    );
}

#[test]
fn test_earlier_root_wins_for_duplicate_models() {
    let resource = r#"
#[path("/users")]
impl UserResource {
    /// Fetches the current user.
    ///
    /// @response.representation.200.doc The current user
    /// @response.representation.200.model models.User
    #[path("/me")]
    #[public_api]
    #[get]
    pub fn me(&self) -> User {
        unimplemented!()
    }
}
"#;

    let model_a = r#"
pub struct User {
    #[xml_element]
    pub id: i64,
}
"#;

    let model_b = r#"
pub struct User {
    #[xml_element]
    pub nickname: String,
}
"#;

    let root_a = TempDir::new().expect("Failed to create temp directory");
    let root_b = TempDir::new().expect("Failed to create temp directory");
    write_source(root_a.path(), "user_resource.rs", resource);
    write_source(root_a.path(), "User.rs", model_a);
    write_source(root_b.path(), "User.rs", model_b);

    let document = generate(vec![&root_a, &root_b], HEADER);

    assert!(
        document.contains("      id:\n        type: integer\n"),
        "The definition should come from the first root"
    );
    assert!(
        !document.contains("nickname"),
        "The duplicate in the second root should stay shadowed"
    );
}

#[test]
fn test_entries_accumulate_across_roots_in_seed_order() {
    let alpha = r#"
#[path("/alpha")]
impl AlphaResource {
    /// Speaks first.
    #[path("/hello")]
    #[public_api]
    #[get]
    pub fn hello(&self) {}
}
"#;

    let beta = r#"
#[path("/beta")]
impl BetaResource {
    /// Speaks second.
    #[path("/hello")]
    #[public_api]
    #[get]
    pub fn hello(&self) {}
}
"#;

    let root_a = TempDir::new().expect("Failed to create temp directory");
    let root_b = TempDir::new().expect("Failed to create temp directory");
    write_source(root_a.path(), "alpha_resource.rs", alpha);
    write_source(root_b.path(), "beta_resource.rs", beta);

    let document = generate(vec![&root_a, &root_b], HEADER);

    let alpha_at = document
        .find("  /alpha/hello:\n")
        .expect("The first root should contribute its endpoint");
    let beta_at = document
        .find("  /beta/hello:\n")
        .expect("The second root should contribute its endpoint");
    assert!(
        alpha_at < beta_at,
        "Paths should appear in root seeding order"
    );
}
