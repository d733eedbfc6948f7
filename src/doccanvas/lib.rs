//! # Doccanvas Architecture
//!
//! Doccanvas is a **UI-agnostic document composition library**: the data
//! model, validation, and backward-compatibility rules behind a
//! canvas-style document/proposal editor. The dashboard web editor, the
//! mobile client, and the PDF renderer are all thin consumers of the model
//! defined here; the bundled CLI is just one more client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                     │
//! │  - Parses arguments, formats output, owns the terminal     │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                        │
//! │  - Thin facade, returns structured Result types            │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                             │
//! │  - Pure business logic over model values                   │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Model + Storage (model, ident, resolve, validate, store/) │
//! │  - Value objects, precedence rules, DocumentStore trait    │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Compatibility Contract
//!
//! A page carries its content in one of two representations: the current
//! freeform element list, or the legacy `areas_content` slot map written
//! by pre-freeform clients. Both must stay readable forever; which one is
//! authoritative is decided by a single pure precedence rule (non-empty
//! `elements` wins). See [`resolve`] — that rule is the one genuinely
//! subtle behavior in this crate and nothing else is allowed to reimplement
//! it.
//!
//! Serialized field names (`x_pct`, `fontSize`, `areas_content`, ...) are
//! part of the contract with already-persisted documents and must not
//! change. [`validate`] keeps malformed persisted elements from ever
//! aborting a page load: bad elements are dropped and reported, the rest
//! of the document survives.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns
//! `Result<CmdResult>`, and never touches stdout, stderr, or
//! `std::process::exit`. The same core serves the CLI, a REST backend, or
//! any other client.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`model`]: Core data types (`Document`, `DocumentPage`, `DocElement`)
//! - [`ident`]: Element identifier generation (time + random base 36)
//! - [`resolve`]: Content precedence resolution (`PageContent`)
//! - [`validate`]: Lenient decoding and doctor checks
//! - [`store`]: Storage abstraction and implementations
//! - [`error`]: Error types
//! - `args`/`main`: Argument parsing and printing for the binary (not part
//!   of the lib API)

pub mod api;
pub mod commands;
pub mod error;
pub mod ident;
pub mod model;
pub mod resolve;
pub mod store;
pub mod validate;
