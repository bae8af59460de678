use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "blendfx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one transition frame between two images as a PNG.
    Frame(FrameArgs),
    /// Render every frame of a transition into a directory of PNGs.
    Sequence(SequenceArgs),
    /// List transitions, easing families and blend modes.
    List,
}

#[derive(Args, Debug)]
struct TransitionOpts {
    /// Engine configuration JSON; command-line options override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Transition call, e.g. `gl_Diamond(smoothness=0.1)`.
    #[arg(long)]
    transition: Option<String>,

    /// Easing call, e.g. `cubic-in-out` or `steps(4)`.
    #[arg(long)]
    easing: Option<String>,

    /// Reverse flags: 1 reverses the transition, 2 the easing.
    #[arg(long)]
    reverse: Option<u8>,

    /// Transition length in seconds.
    #[arg(long)]
    duration: Option<f64>,

    /// Output frame rate (integer frames per second).
    #[arg(long)]
    fps: Option<u32>,

    /// Render rows on a thread pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for `--parallel`.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Outgoing image (shown at progress 0).
    #[arg(long)]
    from: PathBuf,

    /// Incoming image (shown at progress 1).
    #[arg(long)]
    to: PathBuf,

    /// Completed fraction of the transition.
    #[arg(long)]
    progress: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    opts: TransitionOpts,
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    /// Outgoing image (shown at progress 0).
    #[arg(long)]
    from: PathBuf,

    /// Incoming image (shown at progress 1).
    #[arg(long)]
    to: PathBuf,

    /// Output directory; frames are written as `frame_00000.png`, ...
    #[arg(long)]
    out_dir: PathBuf,

    #[command(flatten)]
    opts: TransitionOpts,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
        Command::List => {
            cmd_list();
            Ok(())
        }
    }
}

fn engine_config(opts: &TransitionOpts) -> anyhow::Result<blendfx::EngineConfig> {
    let mut config = match &opts.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("read config '{}'", path.display()))?;
            blendfx::EngineConfig::from_json_str(&json)
                .with_context(|| format!("parse config '{}'", path.display()))?
        }
        None => {
            let transition = opts
                .transition
                .clone()
                .context("either --transition or --config is required")?;
            blendfx::EngineConfig::new(transition)
        }
    };
    if let Some(t) = &opts.transition {
        config.transition.clone_from(t);
    }
    if let Some(e) = &opts.easing {
        config.easing = Some(e.clone());
    }
    if let Some(bits) = opts.reverse {
        config.reverse = blendfx::Reverse::from_bits(bits);
    }
    if let Some(d) = opts.duration {
        config.duration_secs = d;
    }
    if let Some(fps) = opts.fps {
        config.fps = blendfx::Fps::new(fps, 1)?;
    }
    config.validate()?;
    Ok(config)
}

fn threading(opts: &TransitionOpts) -> blendfx::RenderThreading {
    blendfx::RenderThreading {
        parallel: opts.parallel,
        threads: opts.threads,
        ..blendfx::RenderThreading::default()
    }
}

fn read_frame(path: &Path) -> anyhow::Result<blendfx::PlaneFrame> {
    let img = image::open(path)
        .with_context(|| format!("open image '{}'", path.display()))?
        .to_rgba8();
    Ok(blendfx::PlaneFrame::from_rgba8(&img))
}

fn write_png(frame: &blendfx::PlaneFrame, path: &Path) -> anyhow::Result<()> {
    let img = frame.to_rgba8()?;
    image::save_buffer_with_format(
        path,
        img.as_raw(),
        img.width(),
        img.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn load_pair(from: &Path, to: &Path) -> anyhow::Result<(blendfx::PlaneFrame, blendfx::PlaneFrame)> {
    let a = read_frame(from)?;
    let b = read_frame(to)?;
    if a.format() != b.format() {
        anyhow::bail!(
            "'{}' is {}x{} but '{}' is {}x{}",
            from.display(),
            a.format().width,
            a.format().height,
            to.display(),
            b.format().width,
            b.format().height
        );
    }
    Ok((a, b))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = engine_config(&args.opts)?;
    let (a, b) = load_pair(&args.from, &args.to)?;
    let engine = blendfx::Engine::configure(&config)?.prime(*a.format())?;
    let pair = blendfx::FramePair::new(&a, &b)?;
    let frame = blendfx::render_frame(&engine, &pair, args.progress, &threading(&args.opts))?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    write_png(&frame, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let config = engine_config(&args.opts)?;
    let (a, b) = load_pair(&args.from, &args.to)?;
    let engine = blendfx::Engine::configure(&config)?.prime(*a.format())?;
    let pair = blendfx::FramePair::new(&a, &b)?;
    let renderer = blendfx::FrameRenderer::new(&engine, &threading(&args.opts))?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let count = config.frame_count();
    for i in 0..=count {
        let frame = renderer.render(&pair, config.frame_progress(i))?;
        write_png(&frame, &args.out_dir.join(format!("frame_{i:05}.png")))?;
    }

    eprintln!("wrote {} frames to {}", count + 1, args.out_dir.display());
    Ok(())
}

fn cmd_list() {
    println!("transitions:");
    for kind in blendfx::TransitionKind::ALL {
        println!("  {}", kind.name());
    }
    println!("easings:");
    println!("  linear ease ease-in ease-out ease-in-out step-start step-end");
    println!("  linear(...) cubic-bezier(x1, y1, x2, y2) steps(n[, position])");
    for family in blendfx::EaseFamily::ALL {
        println!("  {0}-in {0}-out {0}-in-out", family.name());
    }
    println!("blend modes:");
    for (i, mode) in blendfx::BlendMode::ALL.iter().enumerate() {
        println!("  {i:>2} {mode:?}");
    }
}
