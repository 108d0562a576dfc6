//! User data model.

use std::collections::HashMap;

pub struct User {
    /// Unique id of the user.
    #[xml_element(required = true)]
    #[rest_example("42")]
    pub id: i64,

    /// Login name as shown in the UI.
    #[xml_element(required = true)]
    #[rest_example("\"Rob\"")]
    pub name: String,

    /// Free-form per-user settings.
    #[xml_element]
    pub settings: HashMap<String, String>,

    #[xml_element]
    pub active: bool,

    pub password_hash: String,
}
