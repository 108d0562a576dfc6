//! REST resource for user administration.

use crate::models::User;

pub struct UserResource;

#[path("/users")]
impl UserResource {
    /// Lists every user.
    ///
    /// @response.representation.200.doc The full user list
    #[path("/all")]
    #[public_api]
    #[get]
    pub fn all(&self) -> Vec<User> {
        unimplemented!()
    }

    /// Fetches a user. Looks the user up by its numeric id.
    ///
    /// @param id numeric id of the user
    /// @response.representation.200.doc The requested user
    /// @response.representation.200.model models.User
    /// @response.representation.404.doc No user with this id exists
    #[path("/{id}")]
    #[public_api]
    #[get]
    pub fn user(&self, #[path_param("id")] id: i64) -> User {
        unimplemented!()
    }

    /// Creates a user. Returns the new id.
    ///
    /// @param user the payload describing the new user
    /// @response.representation.200.doc The freshly created user
    /// @response.representation.200.model models.User
    #[path("/new")]
    #[public_api]
    #[post]
    pub fn create(&self, user: User) -> i64 {
        unimplemented!()
    }

    #[path("/{id}")]
    #[public_api]
    #[delete]
    pub fn remove(&self, #[path_param("id")] id: i64) {
        unimplemented!()
    }

    pub fn audit(&self) {}
}
