//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices,
//! reducing linking overhead.
//!
//! Structure:
//! - helpers: Engine builder and gesture helpers
//! - integration: Multi-event gesture workflows end-to-end
//! - unit: Single-component tests (store, marquee, settings, loading, render)
