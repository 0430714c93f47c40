//! ChronoShift UI Components
//!
//! Dioxus building blocks for the converter page: buttons, a labelled text
//! input, and the single-character digit box used by the segmented time
//! input.
//!
//! ## Palette
//!
//! - **Blue (#2563eb)**: active toggles, focus rings, accents
//! - **Slate (#334155 / #f8fafc)**: text and surfaces
//! - **Amber (#fffbeb)**: hover hint on inactive toggles

pub mod components;

pub use components::*;
