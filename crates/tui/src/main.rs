//! Yule Log - full-screen terminal fireplace with a commit ticker
//!
//! Renders a heat-diffusion fire across the whole terminal. When run inside
//! a git repository the most recent commit subjects scroll across the
//! bottom two rows, with a matching author/age line beneath each subject.
//! Press any key to exit.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package yule-log-tui
//! ```
//!
//! Set `YULE_LOG_GIT_DIR` to point the ticker at a different repository.
//! Without a repository (or without git) the fire runs ticker-free.

use std::io;
use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::style::{Color, Modifier, Style};
use ratatui::DefaultTerminal;
use tracing::{debug, info};
use yule_log_core::{
    glyph_and_color, parse_history_ticker, GitHistorySource, HeatField, HistorySource,
    TickerOverlay, MAX_RECORDS,
};

/// Frame cadence, doubling as the input poll timeout.
const FRAME_DELAY: Duration = Duration::from_millis(30);

/// Bottom rows handed over to the ticker when it is active.
const TICKER_ROWS: usize = 2;

fn main() -> io::Result<()> {
    // Silent unless RUST_LOG is set; stderr keeps the alternate screen clean.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let overlay = build_ticker(&GitHistorySource::from_env());

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, overlay);
    ratatui::restore();
    result
}

/// Fetch and parse history once, before the loop starts.
///
/// Every failure mode (git missing, not a repository, empty or unusable
/// output) just disables the ticker; the fire runs regardless.
fn build_ticker(source: &impl HistorySource) -> Option<TickerOverlay> {
    match source.fetch_raw_history(MAX_RECORDS) {
        Ok(raw) => {
            let pair = parse_history_ticker(&raw);
            if pair.is_none() {
                info!("history held no usable records, ticker disabled");
            }
            pair.map(TickerOverlay::new)
        }
        Err(err) => {
            debug!("history unavailable, ticker disabled: {err}");
            None
        }
    }
}

fn run(terminal: &mut DefaultTerminal, mut overlay: Option<TickerOverlay>) -> io::Result<()> {
    let size = terminal.size()?;
    let (width, height) = (size.width as usize, size.height as usize);
    if width == 0 || height == 0 {
        return Ok(());
    }

    // The ticker needs both bottom rows; on a one-row terminal run fire-only.
    if height < TICKER_ROWS {
        overlay = None;
    }

    // Dimensions are fixed for the session. A mid-run resize does not
    // reflow the buffer; it only changes which cell draws land, handled
    // per cell in the render functions.
    let mut heat = HeatField::new(width, height);
    let mut rng = rand::rng();

    loop {
        heat.inject(&mut rng);
        heat.diffuse();

        terminal.draw(|frame| {
            let buf = frame.buffer_mut();
            render_heat(&heat, overlay.is_some(), buf);
            if let Some(overlay) = &overlay {
                render_ticker(overlay, &heat, buf);
            }
        })?;

        if let Some(overlay) = overlay.as_mut() {
            overlay.advance();
        }

        if event::poll(FRAME_DELAY)? {
            // Only key presses exit; resize and the rest are swallowed so
            // the loop keeps its startup dimensions.
            if matches!(event::read()?, Event::Key(key) if key.kind == KeyEventKind::Press) {
                break;
            }
        }
    }
    Ok(())
}

/// Draw every heat cell, leaving the reserved ticker rows untouched.
///
/// Draws are best-effort: a cell outside the current buffer (the terminal
/// shrank since startup) is skipped, never an error.
fn render_heat(heat: &HeatField, ticker_active: bool, buf: &mut Buffer) {
    let mut rows = heat.height();
    if ticker_active {
        rows -= TICKER_ROWS;
    }
    for row in 0..rows {
        for col in 0..heat.width() {
            let (glyph, band) = glyph_and_color(heat.intensity(row, col));
            if let Some(cell) = buf.cell_mut((col as u16, row as u16)) {
                cell.set_char(glyph);
                cell.set_style(band_style(band));
            }
        }
    }
}

/// Draw both ticker windows into the reserved bottom rows.
fn render_ticker(overlay: &TickerOverlay, heat: &HeatField, buf: &mut Buffer) {
    let width = heat.width();
    draw_ticker_line(&overlay.message_window(width), heat.height() - 2, buf);
    draw_ticker_line(&overlay.meta_window(width), heat.height() - 1, buf);
}

fn draw_ticker_line(text: &str, row: usize, buf: &mut Buffer) {
    for (col, glyph) in text.chars().enumerate() {
        // Windows never contain newlines, but a stray one must not be
        // written into a cell.
        if glyph == '\n' {
            continue;
        }
        if let Some(cell) = buf.cell_mut((col as u16, row as u16)) {
            cell.set_char(glyph);
            cell.set_style(ticker_style());
        }
    }
}

/// Terminal styles for the four heat bands, dark red up to bold yellow.
fn band_style(band: u8) -> Style {
    match band {
        4 => Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        3 => Style::new().fg(Color::Indexed(208)), // dark orange
        2 => Style::new().fg(Color::LightRed),
        _ => Style::new().fg(Color::Red),
    }
}

fn ticker_style() -> Style {
    Style::new().fg(Color::White)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;
    use yule_log_core::TickerPair;

    fn buffer(width: u16, height: u16) -> Buffer {
        Buffer::empty(Rect::new(0, 0, width, height))
    }

    fn overlay(message: &str, meta: &str) -> TickerOverlay {
        TickerOverlay::new(TickerPair {
            message_text: message.to_string(),
            meta_text: meta.to_string(),
        })
    }

    fn row_text(buf: &Buffer, row: u16) -> String {
        (0..buf.area.width)
            .map(|col| buf.cell((col, row)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn heat_render_leaves_ticker_rows_untouched() {
        let mut heat = HeatField::new(8, 5);
        let mut rng = rand::rng();
        for _ in 0..10 {
            heat.inject(&mut rng);
            heat.diffuse();
        }

        let mut buf = buffer(8, 5);
        render_heat(&heat, true, &mut buf);
        // Reserved rows keep the empty buffer's default symbol everywhere
        assert_eq!(row_text(&buf, 3), " ".repeat(8));
        assert_eq!(row_text(&buf, 4), " ".repeat(8));
    }

    #[test]
    fn ticker_lands_on_the_bottom_rows() {
        let heat = HeatField::new(10, 4);
        let mut buf = buffer(10, 4);
        render_ticker(&overlay("messages", "metadata"), &heat, &mut buf);

        assert_eq!(row_text(&buf, 2), "messages  ");
        assert_eq!(row_text(&buf, 3), "metadata  ");
    }

    #[test]
    fn draws_outside_the_buffer_are_skipped() {
        // Heat field sized for a larger terminal than the buffer provides,
        // as after a mid-run shrink
        let mut heat = HeatField::new(20, 10);
        let mut rng = rand::rng();
        heat.inject(&mut rng);
        heat.diffuse();

        let mut buf = buffer(5, 3);
        render_heat(&heat, false, &mut buf);
        render_ticker(&overlay("msg", "meta"), &heat, &mut buf);
        // Reaching here without a panic is the property under test; the
        // ticker rows (8 and 9) were entirely off-buffer.
        assert_eq!(buf.area.height, 3);
    }

    #[test]
    fn newline_characters_are_never_drawn() {
        let mut buf = buffer(6, 1);
        draw_ticker_line("ab\ncd\n", 0, &mut buf);
        let row = row_text(&buf, 0);
        assert!(!row.contains('\n'));
        assert_eq!(&row[0..2], "ab");
    }

    #[test]
    fn band_styles_are_distinct() {
        let styles: Vec<Style> = (1..=4).map(band_style).collect();
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(band_style(4).add_modifier.contains(Modifier::BOLD));
    }
}
