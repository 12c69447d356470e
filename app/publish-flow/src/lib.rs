//! Client core for the content-publishing workflow
//!
//! A resumable multi-step wizard: collect metadata, resolve the
//! series/episode association, then drive the three-phase publish protocol
//! (ensure-draft, upload-binary, finalize) against the platform API.
//!
//! The controller owns all in-memory state and never touches the network;
//! the service layer talks to the API through the `PlatformApi` seam from
//! `vidora-api`.

pub mod config;
pub mod error;
pub mod flow;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{FlowError, Result};
pub use flow::{Advance, FlowStateController, Retreat};
pub use services::drafts::DraftStore;
pub use services::publish::{PublishEvent, PublishOutcome, PublishPipeline};
pub use services::series::SeriesDirectory;
