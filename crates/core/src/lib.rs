//! PointsBridge core: the translation layer between the public JSON API and
//! the legacy XML rewards backend.
//!
//! - [`backend`] is the seam to the legacy system: the
//!   [`backend::RewardsBackend`] trait, its reqwest implementation, and the
//!   XML document codecs.
//! - [`listing`] emulates filtered, paged customer lists on top of a backend
//!   that can only return the full collection.
//! - [`points`] runs the two-phase (write, then confirm) points flow.
//! - [`api`] is the axum surface tying the pieces together.

pub mod api;
pub mod backend;
pub mod listing;
pub mod points;
