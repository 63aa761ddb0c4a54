use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use mockly_launch::{
    Cut, Evaluator, FrameIndex, FrameRange, JsonLinesSink, LaunchProps, LaunchVideo,
    RenderThreading, check_render_range, render_to_sink,
};

#[derive(Parser, Debug)]
#[command(name = "mockly-launch", version)]
struct Cli {
    /// Log debug events to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a single frame and print its visual tree as JSON.
    Frame(FrameArgs),
    /// Evaluate a frame range into a JSON-lines file (one frame per line).
    Render(RenderArgs),
    /// Print the sequence table of a cut.
    Timeline(TimelineArgs),
    /// Validate props and timeline without evaluating frames.
    Validate(VideoArgs),
}

#[derive(Args, Debug)]
struct VideoArgs {
    /// Props JSON (`primaryColor`, `accentColor`, `backgroundColor`); defaults when omitted.
    #[arg(long)]
    props: Option<PathBuf>,

    /// Timeline preset.
    #[arg(long, default_value_t = Cut::Launch)]
    cut: Cut,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    video: VideoArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Pretty-print the JSON.
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    video: VideoArgs,

    /// Output JSON-lines path.
    #[arg(long)]
    out: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    from: u64,

    /// Last frame (exclusive); composition end when omitted.
    #[arg(long)]
    to: Option<u64>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Render chunk size in frames.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Share trees between consecutive identical frames.
    #[arg(long, default_value_t = false)]
    static_frame_elision: bool,
}

#[derive(Args, Debug)]
struct TimelineArgs {
    /// Timeline preset.
    #[arg(long, default_value_t = Cut::Launch)]
    cut: Cut,

    /// Print JSON instead of a table.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Timeline(args) => cmd_timeline(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn load_video(args: &VideoArgs) -> anyhow::Result<LaunchVideo> {
    let props = match &args.props {
        Some(path) => LaunchProps::from_path(path)
            .with_context(|| format!("load props '{}'", path.display()))?,
        None => LaunchProps::default(),
    };
    LaunchVideo::new(props, args.cut).with_context(|| format!("build '{}' cut", args.cut))
}

fn create_output(path: &Path) -> anyhow::Result<BufWriter<File>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    Ok(BufWriter::new(f))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let video = load_video(&args.video)?;
    let frame = Evaluator::eval_frame(&video, FrameIndex(args.frame))?;

    let mut out: Box<dyn Write> = match &args.out {
        Some(path) => Box::new(create_output(path)?),
        None => Box::new(std::io::stdout().lock()),
    };
    if args.pretty {
        serde_json::to_writer_pretty(&mut out, &frame)?;
    } else {
        serde_json::to_writer(&mut out, &frame)?;
    }
    writeln!(out)?;
    out.flush()?;

    if let Some(path) = &args.out {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let video = load_video(&args.video)?;
    let end = args.to.unwrap_or_else(|| video.duration_frames());
    let range = FrameRange::new(FrameIndex(args.from), FrameIndex(end))?;
    check_render_range(&video, range)
        .with_context(|| format!("render frames {}..{end}", args.from))?;
    let threading = RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
        static_frame_elision: args.static_frame_elision,
    };

    let mut sink = JsonLinesSink::new(create_output(&args.out)?);
    let stats = render_to_sink(&video, range, &mut sink, &threading)
        .with_context(|| format!("render frames {}..{end}", args.from))?;

    eprintln!(
        "wrote {} ({} frames, {} elided)",
        args.out.display(),
        stats.frames_total,
        stats.frames_elided
    );
    Ok(())
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let timeline = args.cut.timeline();
    let mut out = std::io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &timeline)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{:<18} {:>5} {:>5} {:>5}  scene", "sequence", "from", "to", "len")?;
    for s in timeline.sequences() {
        let r = s.range();
        writeln!(
            out,
            "{:<18} {:>5} {:>5} {:>5}  {}",
            s.name, r.start.0, r.end.0, s.duration, s.scene
        )?;
    }
    Ok(())
}

fn cmd_validate(args: VideoArgs) -> anyhow::Result<()> {
    let video = load_video(&args)?;
    let config = video.config();
    eprintln!(
        "ok: {} cut, {} sequences, {} frames at {:.3} fps ({:.1}s), {}x{}",
        args.cut,
        video.timeline().sequences().len(),
        video.duration_frames(),
        config.fps.as_f64(),
        config.duration_secs(),
        config.canvas.width,
        config.canvas.height
    );
    Ok(())
}
