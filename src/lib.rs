//! blendfx evaluates transitions between two video frames, one pixel at a time.
//!
//! A transition is configured once from strings, primed once per frame format, and then
//! evaluated concurrently for every output pixel:
//!
//! - Build an [`EngineConfig`] (or load one from JSON) and call [`Engine::configure`]
//! - Prime the resulting [`EngineContext`] for a [`FrameFormat`]
//! - Render frames with [`render_frame`] / [`FrameRenderer`], or drive
//!   [`PrimedEngine::evaluate`] from your own pixel loop through a [`PixelSource`]
//!
//! Progress runs from 0 (frame A) to 1 (frame B). Easings follow CSS (`linear()`,
//! `cubic-bezier()`, `steps()`) plus the classic Penner families.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod color;
mod easing;
mod engine;
mod foundation;
mod params;
mod render;
mod transitions;

pub use crate::foundation::core::{ColorModel, Fps, FrameFormat};
pub use crate::foundation::error::{FxError, FxResult};
pub use crate::foundation::math::{Vec2, Vec4};

pub use crate::color::blend::BlendMode;
pub use crate::color::literal::{ColorArg, parse_color};
pub use crate::color::texture::Texture;
pub use crate::easing::css::{CssLinear, CubicBezier, JumpPolicy, LinearStop, Steps};
pub use crate::easing::parse::parse_easing;
pub use crate::easing::standard::{EaseFamily, EaseMode};
pub use crate::easing::{Easing, EasingSpec};
pub use crate::params::args::{ArgList, RawArg};
pub use crate::params::table::{MAX_SLOTS, ParamSlot, ParamTable, ParamValue};

pub use crate::engine::config::{EngineConfig, Reverse};
pub use crate::engine::context::{Engine, EngineContext, PrimedEngine};
pub use crate::render::frame::{FramePair, PlaneFrame};
pub use crate::render::pipeline::{FrameRenderer, RenderThreading, render_frame};
pub use crate::transitions::fragment::{Fragment, PixelSource, Transition, Which};
pub use crate::transitions::registry::{TransitionKind, parse_transition};
