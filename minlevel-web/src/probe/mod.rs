//! Level probes.
//!
//! Each submodule logs from its own module path, so each one is a separate
//! category that can be given its own levels. Every probe answers a single
//! yes/no question about what the active dispatcher let through.

pub mod above;
pub mod below;
pub mod bydefault;
pub mod promote;
