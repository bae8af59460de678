//! Name-keyed catalog of every transition.

use crate::foundation::error::{FxError, FxResult};
use crate::params::args::{ArgList, split_call};
use crate::params::table::Declarations;
use crate::transitions::fragment::{Prime, Transition};
use crate::transitions::mask::{Fan, FanWipe};
use crate::transitions::{blend, curl, mask, noise, perspective, warp};

/// One catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Wedge sweeping around the centre.
    Angular,
    /// Randomly timed vertical or horizontal bars.
    Bars,
    /// Two triangles meeting at the centre.
    BowTie,
    /// Leaf-shaped reveal.
    CannabisLeaf,
    /// Alternating chessboard cells.
    Chessboard,
    /// Corners vanish toward the centre.
    CornerVanish,
    /// Diagonal cross opening outward.
    CrossOut,
    /// Growing diamond.
    Diamond,
    /// Diamond ring opening from the centre.
    DoubleDiamond,
    /// Fan closing toward the centre.
    FanIn,
    /// Fan opening from the centre.
    FanOut,
    /// Fan opening from the bottom.
    FanUp,
    /// Rotating flower shape.
    Flower,
    /// Heart shape.
    Heart,
    /// Pinwheel blades.
    Pinwheel,
    /// Rose-curve mask.
    PolarFunction,
    /// Grid of growing dots.
    PolkaDotsCurtain,
    /// Diagonal sweep of growing squares.
    SquaresWire,
    /// Star with a coloured border.
    StarWipe,
    /// Venetian blinds.
    WindowBlinds,
    /// Horizontal warp crossfade.
    CrossWarp,
    /// Directional warp along a configurable axis.
    DirectionalWarp,
    /// Wavy dream sequence.
    Dreamy,
    /// Concentric ripple.
    Ripple,
    /// Water drop.
    WaterDrop,
    /// Swirl around the centre.
    Swirl,
    /// Rotation of the incoming frame.
    RotateTransition,
    /// Rotate, scale and fade through a background.
    RotateScaleFade,
    /// Rotate and shrink away.
    RotateScaleVanish,
    /// Scaled push along a direction.
    DirectionalScaled,
    /// Kaleidoscope mirror.
    Kaleidoscope,
    /// Colour-driven displacement.
    Morph,
    /// Zoom blur between two centres.
    CrossZoom,
    /// Hexagonal pixelation.
    Hexagonalize,
    /// Scrolling mosaic.
    Mosaic,
    /// Frame rolling away around a corner.
    Rolls,
    /// Slide in or out.
    Slides,
    /// Butterfly-curve displacement with colour fringes.
    ButterflyWaveScrawler,
    /// Epitrochoid ripple.
    CrazyParametricFun,
    /// Crossfade through glowing edges.
    EdgeTransition,
    /// Exponential zoom out of A and into B.
    ExponentialSwish,
    /// Tiles orbiting on Lissajous curves.
    LissajousTiles,
    /// Spinning three-mirror kaleidoscope.
    PowerKaleido,
    /// Rotating cube.
    Cube,
    /// Doors opening onto the incoming frame.
    Doorway,
    /// Frames swapping places in depth.
    Swap,
    /// Book page flip.
    BookFlip,
    /// Frame falling and bouncing out.
    Bounce,
    /// Slide viewer splitting the frame in two.
    StereoViewer,
    /// Page curl exposing the back side.
    InvertedPageCurl,
    /// Page curl at an arbitrary angle.
    SimplePageCurl,
    /// Page curl anchored at the spine.
    SimpleBookCurl,
    /// Per-pixel random dissolve.
    RandomNoiseX,
    /// Dissolve in random squares.
    RandomSquares,
    /// Value-noise dissolve.
    Perlin,
    /// Band of static sweeping across the frame.
    StaticWipe,
    /// Crosshatched dissolve from a centre.
    Crosshatch,
    /// Grid of flipping tiles.
    GridFlip,
    /// Crossfade through a blend mode.
    Blend,
    /// Layered coloured stripes.
    StripeWipe,
    /// Blend mode demonstration.
    TestBlend,
    /// Colour argument demonstration.
    TestTexture,
}

impl TransitionKind {
    /// Every entry in catalog order.
    pub const ALL: [Self; 62] = [
        Self::Angular,
        Self::Bars,
        Self::BowTie,
        Self::CannabisLeaf,
        Self::Chessboard,
        Self::CornerVanish,
        Self::CrossOut,
        Self::Diamond,
        Self::DoubleDiamond,
        Self::FanIn,
        Self::FanOut,
        Self::FanUp,
        Self::Flower,
        Self::Heart,
        Self::Pinwheel,
        Self::PolarFunction,
        Self::PolkaDotsCurtain,
        Self::SquaresWire,
        Self::StarWipe,
        Self::WindowBlinds,
        Self::CrossWarp,
        Self::DirectionalWarp,
        Self::Dreamy,
        Self::Ripple,
        Self::WaterDrop,
        Self::Swirl,
        Self::RotateTransition,
        Self::RotateScaleFade,
        Self::RotateScaleVanish,
        Self::DirectionalScaled,
        Self::Kaleidoscope,
        Self::Morph,
        Self::CrossZoom,
        Self::Hexagonalize,
        Self::Mosaic,
        Self::Rolls,
        Self::Slides,
        Self::ButterflyWaveScrawler,
        Self::CrazyParametricFun,
        Self::EdgeTransition,
        Self::ExponentialSwish,
        Self::LissajousTiles,
        Self::PowerKaleido,
        Self::Cube,
        Self::Doorway,
        Self::Swap,
        Self::BookFlip,
        Self::Bounce,
        Self::StereoViewer,
        Self::InvertedPageCurl,
        Self::SimplePageCurl,
        Self::SimpleBookCurl,
        Self::RandomNoiseX,
        Self::RandomSquares,
        Self::Perlin,
        Self::StaticWipe,
        Self::Crosshatch,
        Self::GridFlip,
        Self::Blend,
        Self::StripeWipe,
        Self::TestBlend,
        Self::TestTexture,
    ];

    /// Canonical configuration name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Angular => "gl_angular",
            Self::Bars => "gl_Bars",
            Self::BowTie => "gl_BowTie",
            Self::CannabisLeaf => "gl_cannabisleaf",
            Self::Chessboard => "gl_chessboard",
            Self::CornerVanish => "gl_CornerVanish",
            Self::CrossOut => "gl_CrossOut",
            Self::Diamond => "gl_Diamond",
            Self::DoubleDiamond => "gl_DoubleDiamond",
            Self::FanIn => "gl_FanIn",
            Self::FanOut => "gl_FanOut",
            Self::FanUp => "gl_FanUp",
            Self::Flower => "gl_Flower",
            Self::Heart => "gl_heart",
            Self::Pinwheel => "gl_pinwheel",
            Self::PolarFunction => "gl_polar_function",
            Self::PolkaDotsCurtain => "gl_PolkaDotsCurtain",
            Self::SquaresWire => "gl_squareswire",
            Self::StarWipe => "gl_StarWipe",
            Self::WindowBlinds => "gl_windowblinds",
            Self::CrossWarp => "gl_crosswarp",
            Self::DirectionalWarp => "gl_directionalwarp",
            Self::Dreamy => "gl_Dreamy",
            Self::Ripple => "gl_ripple",
            Self::WaterDrop => "gl_WaterDrop",
            Self::Swirl => "gl_Swirl",
            Self::RotateTransition => "gl_rotateTransition",
            Self::RotateScaleFade => "gl_rotate_scale_fade",
            Self::RotateScaleVanish => "gl_RotateScaleVanish",
            Self::DirectionalScaled => "gl_DirectionalScaled",
            Self::Kaleidoscope => "gl_kaleidoscope",
            Self::Morph => "gl_morph",
            Self::CrossZoom => "gl_CrossZoom",
            Self::Hexagonalize => "gl_hexagonalize",
            Self::Mosaic => "gl_Mosaic",
            Self::Rolls => "gl_Rolls",
            Self::Slides => "gl_Slides",
            Self::ButterflyWaveScrawler => "gl_ButterflyWaveScrawler",
            Self::CrazyParametricFun => "gl_CrazyParametricFun",
            Self::EdgeTransition => "gl_EdgeTransition",
            Self::ExponentialSwish => "gl_Exponential_Swish",
            Self::LissajousTiles => "gl_Lissajous_Tiles",
            Self::PowerKaleido => "gl_powerKaleido",
            Self::Cube => "gl_cube",
            Self::Doorway => "gl_doorway",
            Self::Swap => "gl_swap",
            Self::BookFlip => "gl_BookFlip",
            Self::Bounce => "gl_Bounce",
            Self::StereoViewer => "gl_StereoViewer",
            Self::InvertedPageCurl => "gl_InvertedPageCurl",
            Self::SimplePageCurl => "gl_SimplePageCurl",
            Self::SimpleBookCurl => "gl_SimpleBookCurl",
            Self::RandomNoiseX => "gl_randomNoisex",
            Self::RandomSquares => "gl_randomsquares",
            Self::Perlin => "gl_perlin",
            Self::StaticWipe => "gl_static_wipe",
            Self::Crosshatch => "gl_crosshatch",
            Self::GridFlip => "gl_GridFlip",
            Self::Blend => "gl_blend",
            Self::StripeWipe => "gl_Stripe_Wipe",
            Self::TestBlend => "test_blend",
            Self::TestTexture => "test_texture",
        }
    }

    /// Look up a name case-insensitively; the `gl_` prefix is optional.
    pub fn from_name(name: &str) -> FxResult<Self> {
        let key = strip_prefix(name.trim());
        Self::ALL
            .into_iter()
            .find(|k| strip_prefix(k.name()).eq_ignore_ascii_case(key))
            .ok_or_else(|| FxError::config(format!("unknown transition '{name}'")))
    }

    /// Declare parameters and build the evaluator.
    pub fn prime(self, decl: &mut Declarations<'_>) -> FxResult<Box<dyn Transition>> {
        match self {
            Self::Angular => boxed::<mask::Angular>(decl),
            Self::Bars => boxed::<mask::Bars>(decl),
            Self::BowTie => boxed::<mask::BowTie>(decl),
            Self::CannabisLeaf => boxed::<mask::CannabisLeaf>(decl),
            Self::Chessboard => boxed::<mask::Chessboard>(decl),
            Self::CornerVanish => boxed::<mask::CornerVanish>(decl),
            Self::CrossOut => boxed::<mask::CrossOut>(decl),
            Self::Diamond => boxed::<mask::Diamond>(decl),
            Self::DoubleDiamond => boxed::<mask::DoubleDiamond>(decl),
            Self::FanIn => Ok(Box::new(FanWipe::prime(Fan::In, decl)?)),
            Self::FanOut => Ok(Box::new(FanWipe::prime(Fan::Out, decl)?)),
            Self::FanUp => Ok(Box::new(FanWipe::prime(Fan::Up, decl)?)),
            Self::Flower => boxed::<mask::Flower>(decl),
            Self::Heart => boxed::<mask::Heart>(decl),
            Self::Pinwheel => boxed::<mask::Pinwheel>(decl),
            Self::PolarFunction => boxed::<mask::PolarFunction>(decl),
            Self::PolkaDotsCurtain => boxed::<mask::PolkaDotsCurtain>(decl),
            Self::SquaresWire => boxed::<mask::SquaresWire>(decl),
            Self::StarWipe => boxed::<mask::StarWipe>(decl),
            Self::WindowBlinds => boxed::<mask::WindowBlinds>(decl),
            Self::CrossWarp => boxed::<warp::CrossWarp>(decl),
            Self::DirectionalWarp => boxed::<warp::DirectionalWarp>(decl),
            Self::Dreamy => boxed::<warp::Dreamy>(decl),
            Self::Ripple => boxed::<warp::Ripple>(decl),
            Self::WaterDrop => boxed::<warp::WaterDrop>(decl),
            Self::Swirl => boxed::<warp::Swirl>(decl),
            Self::RotateTransition => boxed::<warp::RotateTransition>(decl),
            Self::RotateScaleFade => boxed::<warp::RotateScaleFade>(decl),
            Self::RotateScaleVanish => boxed::<warp::RotateScaleVanish>(decl),
            Self::DirectionalScaled => boxed::<warp::DirectionalScaled>(decl),
            Self::Kaleidoscope => boxed::<warp::Kaleidoscope>(decl),
            Self::Morph => boxed::<warp::Morph>(decl),
            Self::CrossZoom => boxed::<warp::CrossZoom>(decl),
            Self::Hexagonalize => boxed::<warp::Hexagonalize>(decl),
            Self::Mosaic => boxed::<warp::Mosaic>(decl),
            Self::Rolls => boxed::<warp::Rolls>(decl),
            Self::Slides => boxed::<warp::Slides>(decl),
            Self::ButterflyWaveScrawler => boxed::<warp::ButterflyWaveScrawler>(decl),
            Self::CrazyParametricFun => boxed::<warp::CrazyParametricFun>(decl),
            Self::EdgeTransition => boxed::<warp::EdgeTransition>(decl),
            Self::ExponentialSwish => boxed::<warp::ExponentialSwish>(decl),
            Self::LissajousTiles => boxed::<warp::LissajousTiles>(decl),
            Self::PowerKaleido => boxed::<warp::PowerKaleido>(decl),
            Self::Cube => boxed::<perspective::Cube>(decl),
            Self::Doorway => boxed::<perspective::Doorway>(decl),
            Self::Swap => boxed::<perspective::Swap>(decl),
            Self::BookFlip => boxed::<perspective::BookFlip>(decl),
            Self::Bounce => boxed::<perspective::Bounce>(decl),
            Self::StereoViewer => boxed::<perspective::StereoViewer>(decl),
            Self::InvertedPageCurl => boxed::<curl::InvertedPageCurl>(decl),
            Self::SimplePageCurl => boxed::<curl::SimplePageCurl>(decl),
            Self::SimpleBookCurl => boxed::<curl::SimpleBookCurl>(decl),
            Self::RandomNoiseX => boxed::<noise::RandomNoiseX>(decl),
            Self::RandomSquares => boxed::<noise::RandomSquares>(decl),
            Self::Perlin => boxed::<noise::Perlin>(decl),
            Self::StaticWipe => boxed::<noise::StaticWipe>(decl),
            Self::Crosshatch => boxed::<noise::Crosshatch>(decl),
            Self::GridFlip => boxed::<noise::GridFlip>(decl),
            Self::Blend => boxed::<blend::Blend>(decl),
            Self::StripeWipe => boxed::<blend::StripeWipe>(decl),
            Self::TestBlend => boxed::<blend::TestBlend>(decl),
            Self::TestTexture => boxed::<blend::TestTexture>(decl),
        }
    }
}

fn strip_prefix(name: &str) -> &str {
    match name.get(..3) {
        Some(p) if p.eq_ignore_ascii_case("gl_") => &name[3..],
        _ => name,
    }
}

fn boxed<T: Prime>(decl: &mut Declarations<'_>) -> FxResult<Box<dyn Transition>> {
    Ok(Box::new(T::prime(decl)?))
}

/// Parse `name` or `name(args)` into a catalog entry and its raw arguments.
pub fn parse_transition(s: &str) -> FxResult<(TransitionKind, ArgList)> {
    let (name, body) = split_call(s)?;
    let kind = TransitionKind::from_name(name)?;
    let args = match body {
        Some(body) => ArgList::parse(body)?,
        None => ArgList::new(),
    };
    Ok((kind, args))
}

#[cfg(test)]
#[path = "../../tests/unit/transitions/registry.rs"]
mod tests;
