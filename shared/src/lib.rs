//! UI-independent core of the branch website: the admin sign-in gate, the
//! REST envelope and route map, the generic admin CRUD tab, and the helpers
//! behind the public landing sections.
//!
//! Everything here builds for both native targets (tests) and `wasm32`
//! (the Yew frontend).

pub mod auth;
pub mod contact;
pub mod crud;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod memory;
pub mod models;
pub mod resource;
pub mod session;
pub mod site;

pub use auth::{Access, AuthGate, CredentialVerifier, Guard, VerifiedIdentity, VerifyFlight};
pub use contact::ContactInfo;
pub use crud::{CrudController, ResourceApi, TabEvent, TabPhase, TabState, UploadedImage, WriteOp};
pub use endpoints::Endpoints;
pub use envelope::{decode_envelope, Envelope};
pub use error::ApiError;
pub use resource::{Editing, FormState, Record, ResourceKind};
pub use session::{Session, SessionStore, UserIdentity};
