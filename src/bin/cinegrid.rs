use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cinegrid", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a composition timeline from a brief, using estimated narration
    /// timing (no synthesis calls).
    Plan(PlanArgs),
    /// Evaluate every scene visible at one frame of a planned timeline.
    Snapshot(SnapshotArgs),
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input brief JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output timeline JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SnapshotArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output snapshot JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Snapshot(args) => cmd_snapshot(args),
    }
}

fn read_brief_json(path: &Path) -> anyhow::Result<cinegrid::VideoBrief> {
    let f = File::open(path).with_context(|| format!("open brief '{}'", path.display()))?;
    let r = BufReader::new(f);
    let brief: cinegrid::VideoBrief =
        serde_json::from_reader(r).with_context(|| "parse brief JSON")?;
    Ok(brief)
}

fn read_timeline_json(path: &Path) -> anyhow::Result<cinegrid::VideoCompositionTimeline> {
    let f = File::open(path).with_context(|| format!("open timeline '{}'", path.display()))?;
    let r = BufReader::new(f);
    let timeline: cinegrid::VideoCompositionTimeline =
        serde_json::from_reader(r).with_context(|| "parse timeline JSON")?;
    Ok(timeline)
}

fn write_json(out: Option<&Path>, json: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, json)
                .with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let brief = read_brief_json(&args.in_path)?;
    brief.validate()?;

    let timesheet = cinegrid::Timesheet::estimate(&brief.narration, brief.timesheet);
    let timeline = cinegrid::assemble(&brief, &timesheet)?;

    let json = serde_json::to_string_pretty(&timeline).with_context(|| "encode timeline JSON")?;
    write_json(args.out.as_deref(), &json)
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct SceneSnapshot {
    scene_index: usize,
    cut_id: u32,
    progress: f64,
    image: cinegrid::EffectSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<cinegrid::TextSnapshot>,
    entrance: cinegrid::TransitionSnapshot,
    exit: cinegrid::TransitionSnapshot,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct FrameSnapshot {
    frame: u64,
    time_secs: f64,
    total_frames: u64,
    scenes: Vec<SceneSnapshot>,
}

fn cmd_snapshot(args: SnapshotArgs) -> anyhow::Result<()> {
    let timeline = read_timeline_json(&args.in_path)?;
    timeline.validate()?;

    let frame = cinegrid::FrameIndex(args.frame);
    let mut scenes = Vec::new();
    for index in timeline.scenes_at(frame) {
        let scene = &timeline.scenes[index];
        let ctx = timeline
            .scene_ctx(index, frame)
            .with_context(|| format!("scene {index} out of range"))?;
        scenes.push(SceneSnapshot {
            scene_index: index,
            cut_id: scene.cut.id,
            progress: ctx.progress(),
            image: cinegrid::eval_image_effect(ctx, &scene.animation),
            text: scene
                .narration
                .is_some()
                .then(|| cinegrid::eval_text(ctx, &scene.animation, scene.caption_chars())),
            entrance: cinegrid::eval_scene_entrance(ctx, &scene.animation),
            exit: cinegrid::eval_scene_exit(ctx, &scene.animation),
        });
    }

    let snapshot = FrameSnapshot {
        frame: args.frame,
        time_secs: timeline.fps.frames_to_secs(args.frame),
        total_frames: timeline.frame_count(),
        scenes,
    };
    let json = serde_json::to_string_pretty(&snapshot).with_context(|| "encode snapshot JSON")?;
    write_json(args.out.as_deref(), &json)
}
