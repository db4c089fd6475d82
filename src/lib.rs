//! Shape model and pointer interaction engine for a freehand drawing surface.
//!
//! Users draw polylines and place text labels, then select and transform
//! them with the pointer. This crate owns the shapes and the interaction
//! state machine. The host feeds pointer events to the [`Engine`], draws
//! through its own [`render::RenderSink`], and reacts to the returned
//! [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Pointer state machine, selection, and host actions |
//! | [`shape`] | Polyline and text shapes and their shared capabilities |
//! | [`store`] | Z-ordered shape collection |
//! | [`input`] | Tools, gesture states, and interaction modes |
//! | [`hit`] | Corner handles and the scale math they drive |
//! | [`geom`] | Points, bounds, and distance queries |
//! | [`render`] | Primitive draw-command trait and scene traversal |
//! | [`config`] | Default styles, loadable from JSON |
//! | [`consts`] | Shared numeric constants (tolerances, hit radii, scale floor) |

pub mod config;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod input;
pub mod render;
pub mod shape;
pub mod store;

pub use engine::{Action, Engine};
pub use geom::{Bounds, Point};
pub use shape::{Shape, ShapeId, ShapeOps};
