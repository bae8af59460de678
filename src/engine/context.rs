//! Configure once, prime per frame format, evaluate per pixel.
//!
//! [`EngineContext`] holds everything resolved from configuration strings. Priming it against a
//! [`FrameFormat`] runs the transition's parameter declarations exactly once and yields a
//! [`PrimedEngine`], which is immutable and shared by every worker thread.

use std::fmt;

use crate::easing::parse::parse_easing;
use crate::easing::{Easing, EasingSpec};
use crate::engine::config::{EngineConfig, Reverse};
use crate::foundation::core::{Fps, FrameFormat};
use crate::foundation::error::FxResult;
use crate::foundation::math::{Vec2, Vec4};
use crate::params::args::ArgList;
use crate::params::table::{Declarations, ParamTable, PrimingContext};
use crate::transitions::fragment::{Fragment, PixelSource, Transition, Which};
use crate::transitions::registry::{TransitionKind, parse_transition};

/// Entry point for building transition contexts.
#[derive(Clone, Copy, Debug, Default)]
pub struct Engine;

impl Engine {
    /// Resolve the easing and transition named in `config`.
    ///
    /// Every configuration error (unknown names, malformed arguments, invalid durations) is
    /// reported here, never while rendering.
    #[tracing::instrument(skip_all, fields(transition = %config.transition))]
    pub fn configure(config: &EngineConfig) -> FxResult<EngineContext> {
        config.validate()?;
        let easing = match config.easing.as_deref() {
            Some(s) => parse_easing(s)?,
            None => None,
        };
        let (kind, args) = parse_transition(&config.transition)?;
        tracing::debug!(kind = kind.name(), args = args.len(), eased = easing.is_some(), "configured");
        Ok(EngineContext::new(kind, args, easing, config.duration_secs)
            .with_reverse(config.reverse)
            .with_fps(config.fps))
    }
}

/// A configured, not yet primed transition.
#[derive(Clone, Debug)]
pub struct EngineContext {
    kind: TransitionKind,
    args: ArgList,
    easing: Option<Easing>,
    reverse: Reverse,
    duration_secs: f64,
    fps: Fps,
}

impl EngineContext {
    /// Context for `kind` with raw `args`, optionally eased.
    pub fn new(
        kind: TransitionKind,
        args: ArgList,
        easing: Option<EasingSpec>,
        duration_secs: f64,
    ) -> Self {
        Self {
            kind,
            args,
            easing: easing.map(|spec| Easing::new(spec, duration_secs)),
            reverse: Reverse::default(),
            duration_secs,
            fps: Fps::default(),
        }
    }

    /// Replace the reversal flags.
    pub fn with_reverse(mut self, reverse: Reverse) -> Self {
        self.reverse = reverse;
        self
    }

    /// Replace the frame rate.
    pub fn with_fps(mut self, fps: Fps) -> Self {
        self.fps = fps;
        self
    }

    /// The configured catalog entry.
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// The bound easing, if any.
    pub fn easing(&self) -> Option<&Easing> {
        self.easing.as_ref()
    }

    /// Run the parameter declarations for frames of `format`.
    #[tracing::instrument(skip(self), fields(transition = self.kind.name()))]
    pub fn prime(&self, format: FrameFormat) -> FxResult<PrimedEngine> {
        format.validate()?;
        let ctx = PrimingContext {
            model: format.model,
            ratio: format.ratio(),
            duration_secs: self.duration_secs,
            fps: self.fps.as_f64(),
        };
        let mut decl = Declarations::new(&self.args, ctx);
        let transition = self.kind.prime(&mut decl)?;
        let params = decl.finish();
        tracing::debug!(slots = params.len(), "primed");
        Ok(PrimedEngine {
            kind: self.kind,
            easing: self.easing.clone(),
            transition,
            params,
            format,
            reverse: self.reverse,
        })
    }
}

/// Exchanges A and B for reversed playback.
struct Swapped<'a>(&'a dyn PixelSource);

impl PixelSource for Swapped<'_> {
    fn sample(&self, which: Which, p: Vec2) -> Vec4 {
        self.0.sample(which.swap(), p)
    }
}

/// A primed transition: read-only, safe to evaluate from many threads at once.
pub struct PrimedEngine {
    kind: TransitionKind,
    easing: Option<Easing>,
    transition: Box<dyn Transition>,
    params: ParamTable,
    format: FrameFormat,
    reverse: Reverse,
}

impl fmt::Debug for PrimedEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimedEngine")
            .field("kind", &self.kind)
            .field("easing", &self.easing)
            .field("params", &self.params.len())
            .field("format", &self.format)
            .field("reverse", &self.reverse)
            .finish_non_exhaustive()
    }
}

impl PrimedEngine {
    /// The primed catalog entry.
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// Resolved parameters in declaration order.
    pub fn params(&self) -> &ParamTable {
        &self.params
    }

    /// Frame format the parameters were primed for.
    pub fn format(&self) -> &FrameFormat {
        &self.format
    }

    /// Map host progress (completed fraction) through the easing.
    pub fn progress(&self, t: f64) -> f64 {
        let Some(easing) = &self.easing else {
            return t;
        };
        if self.reverse.easing {
            1.0 - easing.apply(1.0 - t)
        } else {
            easing.apply(t)
        }
    }

    /// Colour of the pixel at `p`, given eased `progress` and the frame colours `a`/`b` there.
    pub fn evaluate(
        &self,
        progress: f64,
        p: Vec2,
        a: Vec4,
        b: Vec4,
        source: &dyn PixelSource,
    ) -> Vec4 {
        let ratio = self.format.ratio();
        let model = self.format.model;
        if self.reverse.transition {
            let swapped = Swapped(source);
            let frag = Fragment::new(1.0 - progress, p, b, a, ratio, model, &swapped);
            self.transition.evaluate(&frag)
        } else {
            let frag = Fragment::new(progress, p, a, b, ratio, model, source);
            self.transition.evaluate(&frag)
        }
    }

    /// Sample both frames at `p` and evaluate.
    pub fn evaluate_at(&self, progress: f64, p: Vec2, source: &dyn PixelSource) -> Vec4 {
        let a = source.sample(Which::A, p);
        let b = source.sample(Which::B, p);
        self.evaluate(progress, p, a, b, source)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/context.rs"]
mod tests;
