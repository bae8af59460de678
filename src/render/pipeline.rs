//! Frame rendering: one primed engine evaluated over every output pixel, optionally in parallel.

use rayon::prelude::*;

use crate::engine::context::PrimedEngine;
use crate::foundation::error::{FxError, FxResult};
use crate::foundation::math::Vec2;
use crate::render::frame::{FramePair, PlaneFrame, quantize};
use crate::transitions::fragment::{PixelSource, Which};

/// How rows are split into slices and where the slices run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderThreading {
    /// Evaluate slices on a rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Worker count for the pool; `None` lets rayon decide.
    pub threads: Option<usize>,
    /// Rows per work item; 0 is treated as 1.
    pub rows_per_slice: usize,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
            rows_per_slice: 16,
        }
    }
}

/// Reusable renderer bound to one primed engine; owns its thread pool.
pub struct FrameRenderer<'e> {
    engine: &'e PrimedEngine,
    rows_per_slice: usize,
    pool: Option<rayon::ThreadPool>,
}

impl std::fmt::Debug for FrameRenderer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameRenderer")
            .field("engine", &self.engine.kind())
            .field("rows_per_slice", &self.rows_per_slice)
            .field("parallel", &self.pool.is_some())
            .finish()
    }
}

impl<'e> FrameRenderer<'e> {
    /// Renderer for `engine`; builds the pool up front when `threading.parallel` is set.
    pub fn new(engine: &'e PrimedEngine, threading: &RenderThreading) -> FxResult<Self> {
        let pool = if threading.parallel {
            Some(build_thread_pool(threading.threads)?)
        } else {
            None
        };
        Ok(Self {
            engine,
            rows_per_slice: threading.rows_per_slice.max(1),
            pool,
        })
    }

    /// Render the transition of `pair` at host progress `t` (completed fraction, clamped).
    pub fn render(&self, pair: &FramePair<'_>, t: f64) -> FxResult<PlaneFrame> {
        if t.is_nan() {
            return Err(FxError::evaluation("progress must be a number"));
        }
        let format = *self.engine.format();
        if pair.format() != &format {
            return Err(FxError::evaluation(format!(
                "frames are {:?} but the engine was primed for {:?}",
                pair.format(),
                format
            )));
        }

        let progress = self.engine.progress(t.clamp(0.0, 1.0));
        let row_len = format.width as usize * usize::from(format.planes);
        let slice_len = row_len * self.rows_per_slice;
        let mut samples = vec![0u16; format.sample_count()];

        let render_slice = |(index, chunk): (usize, &mut [u16])| {
            let first_row = index * self.rows_per_slice;
            for (r, row) in chunk.chunks_mut(row_len).enumerate() {
                self.render_row(pair, progress, (first_row + r) as u32, row);
            }
        };

        match &self.pool {
            Some(pool) => pool.install(|| {
                samples
                    .par_chunks_mut(slice_len)
                    .enumerate()
                    .for_each(render_slice)
            }),
            None => samples.chunks_mut(slice_len).enumerate().for_each(render_slice),
        }

        PlaneFrame::from_samples(format, samples)
    }

    fn render_row(&self, pair: &FramePair<'_>, progress: f64, y: u32, row: &mut [u16]) {
        let format = self.engine.format();
        let planes = usize::from(format.planes);
        let max = format.max_value();
        let py = 1.0 - f64::from(y) / format.max_y();
        for (x, out) in row.chunks_mut(planes).enumerate() {
            let p = Vec2::new(x as f64 / format.max_x(), py);
            let a = pair.sample(Which::A, p);
            let b = pair.sample(Which::B, p);
            let c = self.engine.evaluate(progress, p, a, b, pair);
            for (o, v) in out.iter_mut().zip(c.0) {
                *o = quantize(v, max);
            }
        }
    }
}

/// Render one output frame of `engine` from `pair` at host progress `t`.
#[tracing::instrument(skip(engine, pair, threading), fields(transition = engine.kind().name()))]
pub fn render_frame(
    engine: &PrimedEngine,
    pair: &FramePair<'_>,
    t: f64,
    threading: &RenderThreading,
) -> FxResult<PlaneFrame> {
    FrameRenderer::new(engine, threading)?.render(pair, t)
}

fn build_thread_pool(threads: Option<usize>) -> FxResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(FxError::config(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| FxError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
