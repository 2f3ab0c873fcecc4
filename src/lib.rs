//! # clrstubs
//!
//! **clrstubs** generates Python stub packages from .NET assembly reflection
//! metadata and the XML documentation files shipped next to the assemblies.
//!
//! ## Overview
//!
//! Scriptable products embed a CLR API surface that Python users drive through
//! a bridge at runtime. Editors and type checkers cannot see through the
//! bridge, so this crate materializes the API surface as an importable package
//! tree of annotated stub classes: real signatures, real docstrings, no
//! behavior.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - **[`assembly`]** - Assembly metadata model, loading and publication filtering
//! - **[`docs`]** - XML documentation parsing and doc-key construction
//! - **[`pytype`]** - CLR to Python type-name normalization
//! - **[`extract`]** - Property and method extraction into intermediate records
//! - **[`generator`]** - Stub emission, package layout and import back-fill
//! - **[`pipeline`]** - End-to-end generation driver
//! - **[`cli`]** - Command-line interface for the `clrstubs-gen` binary
//!
//! ## Generation Flow
//!
//! ```text
//! <assembly>.json ──► assembly::load ──► extract ──► generator::emit
//! <assembly>.xml  ──► docs::DocIndex ──────┘              │
//!                                                         ▼
//!                              generator::package (one init per namespace)
//!                                                         │
//!                                                         ▼
//!                              generator::imports (back-fill pass)
//! ```
//!
//! Generation is two sequential passes over the output tree: every namespace
//! package is written first, then each `__init__.py` is rewritten to import
//! its child subpackages so the whole dotted namespace is importable.
//!
//! ## Usage
//!
//! ```bash
//! clrstubs-gen generate --install-dir /opt/product/v251 --out stubs
//! ```

pub mod assembly;
pub mod cli;
pub mod docs;
pub mod extract;
pub mod generator;
pub mod pipeline;
pub mod pytype;
