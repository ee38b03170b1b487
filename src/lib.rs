//! Codebase hygiene for The Sound Studio source tree.
//!
//! Two tools share this library:
//! - `replace_headers` rewrites the header comment of every project-owned
//!   `.h`/`.cpp` file to the canonical form ([`HeaderRewriter`]).
//! - `validate_codebase` runs the release-readiness checks and reports every
//!   violation ([`Validator`]).
//!
//! Both are built from one [`ProjectProfile`], so they always agree on which
//! files are project-owned.

pub mod config;
pub mod error;
pub mod header;
pub mod logging;
pub mod policy;
pub mod profile;
pub mod rewrite;
pub mod selector;
pub mod text;
pub mod validate;

pub use config::{DEFAULT_SOURCE_DIR, ProjectArgs, ProjectLayout, ReplaceHeadersArgs, ValidateArgs};
pub use error::{HygieneError, HygieneResult};
pub use header::{HeaderBlock, HeaderMatcher, HeaderTemplate};
pub use logging::{LoggingConfig, init_logging};
pub use policy::ExclusionPolicy;
pub use profile::ProjectProfile;
pub use rewrite::{HeaderRewriter, RewriteKind, RewriteSummary};
pub use selector::FileSelector;
pub use validate::{CheckId, RuleSet, ValidationReport, Validator, ViolationRecord};
