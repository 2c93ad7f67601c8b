//! Value types shared by the search pipeline and its collaborators.

mod contact;
mod identity;
mod query;
mod remote_user;
mod result;

pub use contact::Contact;
pub use identity::{Identity, IdentityError};
pub use query::Query;
pub use remote_user::RemoteUser;
pub use result::{Publication, SearchEntry, SearchPhase, SearchResult, Section};
