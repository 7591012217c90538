use std::fs::File;
use std::io::Write;

use crossterm::{
    cursor,
    event::{Event as CrosstermEvent, KeyCode, KeyEventKind},
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
};
use simplelog::{Config, LevelFilter, WriteLogger};

use dragscroll::{
    Axis, DragScrollController, DragScrollOptions, PointerEvent, Rect, ScrollRegion,
    ScrollSurface, Terminal,
};

const BOX_WIDTH: u16 = 12;
const BOX_GAP: u16 = 2;
const BOX_COUNT: u16 = 30;

const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
];

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("carousel.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut term = Terminal::new()?;
    let (width, height) = term.size()?;

    let viewport = Rect::new(2, 2, width.saturating_sub(4), height.saturating_sub(6));
    let content_width = BOX_COUNT * (BOX_WIDTH + BOX_GAP);
    let mut region = ScrollRegion::new(viewport, content_width, viewport.height);

    let mut controller = DragScrollController::new(
        DragScrollOptions::new()
            .axis(Axis::Horizontal)
            .on_drag_start(|event| log::info!("drag started at {:?}", event.position()))
            .on_drag_end(|event| log::info!("drag ended at {:?}", event.position())),
    );
    controller.bind(&region);

    loop {
        draw(&mut term, &region)?;

        for raw_event in term.poll(None)? {
            match &raw_event {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        return Ok(());
                    }
                }
                CrosstermEvent::Resize(new_width, new_height) => {
                    region.set_viewport(Rect::new(
                        2,
                        2,
                        new_width.saturating_sub(4),
                        new_height.saturating_sub(6),
                    ));
                }
                _ => {}
            }

            if let Some(pointer) = PointerEvent::from_crossterm(&raw_event) {
                controller.process_event(&pointer, &mut region);
            }
        }
    }
}

fn draw(term: &mut Terminal, region: &ScrollRegion) -> std::io::Result<()> {
    let viewport = region.bounds();
    let offset = region.scroll_offset();
    let stdout = term.stdout();

    queue!(
        stdout,
        ResetColor,
        cursor::MoveTo(viewport.x, viewport.y.saturating_sub(1)),
        Print(format!(
            "drag to pan | offset {:>4} | q to quit    ",
            offset.x
        )),
    )?;

    for row in viewport.y..viewport.bottom() {
        queue!(stdout, cursor::MoveTo(viewport.x, row))?;
        let mut last_color: Option<Color> = None;

        for col in 0..viewport.width {
            let content_x = col + offset.x;
            let slot = content_x % (BOX_WIDTH + BOX_GAP);
            let color = if slot < BOX_WIDTH {
                let index = (content_x / (BOX_WIDTH + BOX_GAP)) as usize % PALETTE.len();
                Some(PALETTE[index])
            } else {
                None
            };

            if color != last_color {
                match color {
                    Some(c) => queue!(stdout, SetBackgroundColor(c))?,
                    None => queue!(stdout, ResetColor)?,
                }
                last_color = color;
            }
            queue!(stdout, Print(' '))?;
        }
        queue!(stdout, ResetColor)?;
    }

    stdout.flush()?;
    Ok(())
}
