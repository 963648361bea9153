//! Session and data orchestration for the customer portal.
//!
//! ARCHITECTURE
//! ============
//! The portal front end renders a different dashboard per account segment
//! (individual customer, internal support, premium installer, ...). This
//! crate owns the only stateful part of that: a [`SessionController`] that
//! signs in once at startup, resolves the account to a [`UserType`], loads
//! the segment's [`DataBundle`], and publishes everything as one reactive
//! [`Session`] value over a watch channel. Rendering components consume
//! read-only [`SessionView`] snapshots; all mutation goes through
//! [`SessionController::switch_user_type`] and [`SessionController::logout`].
//!
//! The authenticator and resolver are capability traits injected at
//! construction, so the mock transports in [`services`] can be swapped for
//! real ones without touching the controller.

pub mod controller;
pub mod services;
pub mod session;
pub mod user_type;

pub use controller::{SessionController, UsageError};
pub use services::auth::{AuthError, AuthSuccess, Authenticator, Credentials, DirectoryAuthenticator};
pub use services::resolver::{BundleUserInfo, CatalogResolver, DataBundle, DataResolver, ResolveError};
pub use session::{Identity, Phase, Session, SessionView};
pub use user_type::UserType;
