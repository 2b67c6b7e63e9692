//! Integration tests for the CDR color workspace.
//!
//! End-to-end checks across crates: JSON document fixtures fed through
//! [`cdr_doc::DocumentState`], ICC profiles written to disk and read back
//! through the stream entry point, and golden tables for the closed-form
//! color models.

pub mod golden;
pub mod profiles;

/// The bundled example document.
pub fn document_fixture() -> cdr_doc::DocumentFile {
    serde_json::from_str(include_str!("../fixtures/document.json"))
        .unwrap_or_else(|e| panic!("document.json is malformed: {e}"))
}
