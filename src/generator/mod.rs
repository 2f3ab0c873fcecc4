//! # Generator Module
//!
//! The generator module turns extracted assembly metadata into a Python stub
//! package tree, one subpackage per CLR namespace.
//!
//! ## Overview
//!
//! Generation produces an importable package hierarchy that carries type
//! shape and documentation only:
//! - **Enums** - Python `Enum` classes with literal members
//! - **Classes** - Stub classes with typed property and method signatures
//! - **Docstrings** - Summaries pulled from the assembly's XML documentation
//! - **Package Inits** - Child-package imports back-filled across the tree
//!
//! ## Architecture
//!
//! Namespace content is string-built; only the fixed-shape top-level init
//! goes through an Askama template:
//!
//! ```text
//! Assembly Metadata → Extraction → Emission → Package Tree → Import Back-fill
//! ```
//!
//! 1. **Emission** - Renders enums, classes, properties and methods to source
//! 2. **Package Builder** - Writes one `__init__.py` per namespace
//! 3. **Templates** - Renders the top-level package init
//! 4. **Import Back-fill** - Rewrites inits so every subpackage is importable
//!
//! ## Generated Structure
//!
//! A generated tree has this structure:
//!
//! ```text
//! out/
//! ├── __init__.py             # Product docstring, domain-root import
//! └── Ansys/
//!     ├── __init__.py         # Child-package imports
//!     └── ACT/
//!         ├── __init__.py
//!         └── Core/
//!             └── __init__.py # Enums and classes of Ansys.ACT.Core
//! ```
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin clrstubs-gen -- generate \
//!     --install-dir /opt/product/v251 \
//!     --out stubs
//! ```

mod emit;
mod imports;
mod package;
mod templates;

pub use emit::{write_class, write_docstring, write_enum, write_enum_field, write_method, write_property};
pub use imports::{add_init_imports, write_domain_root_init};
pub use package::write_module;
pub use templates::{write_root_init, RootInitTemplateData};
