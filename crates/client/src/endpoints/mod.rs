//! REST API endpoint implementations.
//!
//! Each function performs one request against the deployment server and
//! receives the authenticated `Session` explicitly.

mod applications;
mod auth;
mod request;
mod server;
mod serverclasses;
pub mod url_encoding;

pub use applications::{bind_serverclass_to_app, list_deployment_apps};
pub use auth::login;
pub use request::send_request;
pub use server::reload;
pub use serverclasses::{
    add_host_to_serverclass, create_serverclass, list_serverclasses, set_allow_list,
};
pub use url_encoding::encode_path_segment;
