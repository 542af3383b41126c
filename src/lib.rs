//! Workspace-level end-to-end tests for the registrar crates; see `tests/`.
