//! # CLI Module
//!
//! Command-line interface for the stub generator binary.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Generate the Python stub package tree from a product install:
//!
//! ```bash
//! clrstubs-gen generate --install-dir /opt/product/v251 --out stubs
//! ```
//!
//! Options:
//! - `--install-dir <DIR>` - Product install holding metadata and XML docs
//!   (falls back to the `STUBS_INSTALL_DIR` environment variable)
//! - `--out <DIR>` - Output directory for the generated tree
//! - `--assembly <NAME>` - Assembly to generate, repeatable (defaults to the
//!   built-in Mechanical assembly list)
//! - `--package-root <DOTTED>` - Dotted package path the tree installs under
//! - `--product-version <X.Y>` - Version for the package docstring (defaults
//!   to the version encoded in the install directory name)
//! - `--clean` - Remove a previous output tree before generating
//!
//! ### `clean`
//!
//! Remove a previously generated tree:
//!
//! ```bash
//! clrstubs-gen clean --out stubs
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, Cli, Commands};
