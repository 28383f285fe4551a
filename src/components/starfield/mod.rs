//! Ambient star field background.
//!
//! A fixed population of stars drifts across a full-viewport canvas, wrapping
//! at the edges and twinkling between two opacity bounds:
//! - [`StarField`] owns the population and its per-frame update rule
//! - [`Surface`] abstracts the 2D target so the frame logic runs off-canvas
//! - [`StarfieldCanvas`] wires everything to `requestAnimationFrame`
//!
//! # Example
//!
//! ```ignore
//! use starfolio::components::starfield::{StarfieldCanvas, StarStyle};
//!
//! let style = StarStyle { count: 80, ..StarStyle::default() };
//! view! { <StarfieldCanvas config=style /> }
//! ```

mod component;
pub mod particles;
pub mod render;
pub mod surface;
pub mod theme;

pub use component::StarfieldCanvas;
pub use particles::{RandomSource, Star, StarField};
pub use surface::{CanvasSurface, Glow, Surface};
pub use theme::{Color, StarStyle};
