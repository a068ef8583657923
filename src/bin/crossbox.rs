use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use crossbox::{Canvas, CrossBoxView, FrameRgba};

#[derive(Parser, Debug)]
#[command(name = "crossbox", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate taps and write every animation frame as a PNG sequence.
    Render(RenderArgs),
    /// Run complete tap cycles and write only the final settled frame.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Number of taps to simulate.
    #[arg(long, default_value_t = 5)]
    taps: u32,

    /// Output directory for frame_XXXX.png files.
    #[arg(long)]
    out: PathBuf,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 480)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Print each settle event as a JSON line on stderr.
    #[arg(long)]
    dump_events: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Number of complete tap cycles to run before capturing.
    #[arg(long, default_value_t = 1)]
    taps: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 480)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 800)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut view = CrossBoxView::new(Canvas {
        width: args.width,
        height: args.height,
    })?;

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;

    let mut frame_no = 0u32;
    for _ in 0..args.taps {
        view.tap();
        while view.is_animating() {
            let out = view.paint()?;
            write_png(&args.out.join(format!("frame_{frame_no:04}.png")), &out.frame)?;
            frame_no += 1;
            if let Some(settle) = out.settled
                && args.dump_events
            {
                eprintln!("{}", serde_json::to_string(&settle)?);
            }
        }
    }

    // One idle frame showing the settled chain.
    let out = view.paint()?;
    write_png(&args.out.join(format!("frame_{frame_no:04}.png")), &out.frame)?;
    frame_no += 1;

    eprintln!("wrote {frame_no} frames to {}", args.out.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut view = CrossBoxView::new(Canvas {
        width: args.width,
        height: args.height,
    })?;

    for _ in 0..args.taps {
        view.tap();
        while view.is_animating() {
            view.paint()?;
        }
    }

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let out = view.paint()?;
    write_png(&args.out, &out.frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn write_png(path: &Path, frame: &FrameRgba) -> anyhow::Result<()> {
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}
