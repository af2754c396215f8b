//! Client side of the adoption platform.
//!
//! The logged-in user is carried in an explicit [`SessionContext`] returned
//! by [`AdoptionClient::login`] and passed to [`AdoptionFormFlow::submit`].
//!
//! ```no_run
//! use adoption_client::client::DEFAULT_BASE_URL;
//! use adoption_client::{AdoptionClient, AdoptionFormDraft, AdoptionFormFlow, PetRef};
//!
//! # async fn run() -> Result<(), adoption_client::ClientError> {
//! let client = AdoptionClient::new(DEFAULT_BASE_URL)?;
//! let session = client.login("alice", "secret1").await?;
//!
//! let flow = AdoptionFormFlow::new(client);
//! let mut draft = AdoptionFormDraft {
//!     phone_no: "555-0100".to_string(),
//!     living_situation: "House with a garden".to_string(),
//!     previous_experience: "Two cats".to_string(),
//!     family_composition: "Two adults".to_string(),
//! };
//! let pet = PetRef { id: "64b7f0c2a1".to_string(), name: "Rex".to_string() };
//!
//! let notification = flow.submit(&mut draft, &session, &pet).await;
//! println!("{}", notification.message);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod errors;
pub mod flow;
pub mod form;
pub mod notification;
pub mod session;

pub use client::AdoptionApi;
pub use client::AdoptionClient;
pub use client::Registration;
pub use errors::ClientError;
pub use flow::AdoptionFormFlow;
pub use form::AdoptionFormDraft;
pub use form::AdoptionRequest;
pub use form::PetRef;
pub use notification::Notification;
pub use notification::Severity;
pub use session::CurrentUser;
pub use session::SessionContext;
