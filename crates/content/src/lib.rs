// ABOUTME: Destination-side content script: maps MovieRecord fields onto an admin form.
// ABOUTME: Re-exports the page model, mapping controller, stores, notifications and message protocol.

//! Content - the mapping half of reelcopy.
//!
//! A [`MappingController`] shows a modal on a recognized admin [`Page`], lets
//! the user pick which form control receives each movie field, persists that
//! [`FieldMapping`] through a [`MappingStore`], and fills the chosen controls.
//! [`ContentScript`] exposes both halves behind the `getMovieInfo` /
//! `setupMapping` message protocol.

pub mod catalog;
pub mod controller;
pub mod error;
pub mod field;
pub mod fill;
pub mod mapping;
pub mod modal;
pub mod notify;
pub mod options;
pub mod page;
pub mod protocol;
pub mod store;

pub use crate::catalog::{CatalogEntry, DestinationFieldCatalog};
pub use crate::controller::{MappingController, SaveOutcome};
pub use crate::error::{ErrorCode, MappingError};
pub use crate::field::{DomField, FormField};
pub use crate::fill::FillReport;
pub use crate::mapping::{FieldMapping, SemanticKey};
pub use crate::notify::{Dismissal, Notifier, Severity};
pub use crate::options::{ControllerBuilder, Options};
pub use crate::page::{DispatchedEvent, EventKind, Page};
pub use crate::protocol::{ContentScript, Request, Response};
pub use crate::store::{JsonFileStore, MappingStore, MemoryStore, StorageScope, StoreError, MAPPING_KEY};
