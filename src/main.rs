use std::env;
use std::io;
use std::thread;
use std::time;
use std::time::Duration;

use anyhow::Context;
use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::style;
use crossterm::terminal;
use tracing::debug;
use tracing::info;
use tracing_subscriber::EnvFilter;

use quadbrush::camera::Camera;
use quadbrush::camera::draw_tree;
use quadbrush::events::Event;
use quadbrush::io::convert_event;
use quadbrush::pattern::Pattern;
use quadbrush::quadtree::QuadTree;

const FRAMERATE: u32 = 60;
const FRAMETIME: time::Duration =
    time::Duration::from_millis(((1f64 / FRAMERATE as f64) * 1_000f64) as u64);

/// Frames between brushed splits while the mouse is held
const BRUSH_FRAME_SKIP: u64 = 5;

/// Leaves at this depth stop splitting under the brush
const MAX_DEPTH: u32 = 5;

fn generate(pattern: &Pattern) -> QuadTree {
    let mut tree = QuadTree::new();
    pattern.apply(&mut tree);

    tree
}

/// Split the leaf under the cursor, unless it already sits at [`MAX_DEPTH`].
fn brush(tree: &mut QuadTree, cam: &Camera, col: u16, row: u16) {
    let point = cam.world_at(col, row);

    let Some(leaf) = tree.leaf_at(point) else {
        return;
    };

    if tree.get(leaf).depth < MAX_DEPTH {
        tree.split(leaf);
        debug!("split node {} under {:?}", leaf, point);
    }
}

fn main() -> anyhow::Result<()> {
    // raw mode owns stdout, so logs go to stderr; set RUST_LOG to see them
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let pattern: Pattern = env::args()
        .nth(1)
        .unwrap_or_default()
        .parse()
        .context("Failed to parse seed pattern")?;

    let mut tree = generate(&pattern);
    info!("seeded a tree of {} nodes", tree.len());

    terminal::enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        event::EnableMouseCapture,
        cursor::Hide,
    )?;

    // Get the width and height of the terminal
    let (cols, rows) = terminal::size()?;
    let mut cam = Camera::new(cols, rows);

    let mut frame: u64 = 0;

    loop {
        let t = time::SystemTime::now();

        // Poll event for as long as FRAMETIME
        let (dt, event) = if event::poll(FRAMETIME)? {
            let event = convert_event(event::read()?);
            let dt = t.elapsed()?;

            (dt, event)
        } else {
            (Duration::ZERO, None)
        };

        match event {
            None => {}
            Some(Event::Exit) => break,
            Some(Event::Regenerate) => {
                tree = generate(&pattern);
                info!("regenerated the tree from its seed");
            }
            Some(Event::Brush { col, row }) => {
                if frame % BRUSH_FRAME_SKIP == 0 {
                    brush(&mut tree, &cam, col, row);
                }
            }
            Some(Event::ZoomIn) => cam.zoom_in(),
            Some(Event::ZoomOut) => cam.zoom_out(),
            Some(Event::MoveUp) => cam.move_up(),
            Some(Event::MoveDown) => cam.move_down(),
            Some(Event::MoveLeft) => cam.move_left(),
            Some(Event::MoveRight) => cam.move_right(),
            Some(Event::ResetView) => cam.reset_view(),
            Some(Event::CamResize { cols, rows }) => cam.resize(cols, rows),
        }

        cam.reset();
        draw_tree(&mut cam, &tree);
        let s = cam.render_shaded(tree.height());

        execute!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;

        for line in s.lines() {
            execute!(
                stdout,
                style::Print(line),
                crossterm::cursor::MoveToNextLine(1)
            )?;
        }

        frame += 1;

        let time_left = FRAMETIME.saturating_sub(dt);
        thread::sleep(time_left);
    }

    execute!(
        stdout,
        cursor::Show,
        event::DisableMouseCapture,
        terminal::LeaveAlternateScreen,
    )?;
    terminal::disable_raw_mode()?;

    Ok(())
}
