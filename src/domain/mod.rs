//! Pure domain types: users, sessions, the restaurant aggregate, and the
//! field-level validation error vocabulary. Nothing here touches the
//! network or storage.

mod errors;
pub mod restaurant;
mod session;
mod user;

pub use errors::{FieldCode, FieldError, ValidationErrors};
pub use restaurant::{Restaurant, RestaurantDraft};
pub use session::{PersistedSession, PersistedState, Session};
pub use user::User;
