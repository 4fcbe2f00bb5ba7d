//! Preview assembly for extracted file sets
//!
//!     This crate turns the ordered file set produced by `pageforge-extract`
//!     into one self-contained HTML document that can be handed to an
//!     isolated rendering surface (an embedded frame, a file on disk).
//!
//! Architecture
//!
//!     - assemble.rs: the assembly pipeline (entry selection, concatenation,
//!       injection) plus the placeholder documents for degenerate file sets
//!     - strip.rs: removal of external stylesheet/script references the
//!       generated markup may carry, so re-injection never double-loads
//!     - assets/: the baseline stylesheet and the runtime harness shipped
//!       inside every assembled document
//!
//!     This is a pure lib: assembly is a deterministic function of the file
//!     set, recomputed in full on every call. There is no incremental update
//!     and no cached partial state to go stale.
//!
//!     The assembled document contains its own error containment: the
//!     harness forwards console output to the hosting page, renders runtime
//!     failures as dismissible overlay banners, and intercepts anchor clicks
//!     and form submissions so the preview cannot navigate itself away. The
//!     only outbound references that survive assembly are the fixed runtime
//!     trio (React, ReactDOM, Babel standalone) needed for JSX-bearing
//!     generated code.

mod assemble;
mod strip;

pub use assemble::assemble;
