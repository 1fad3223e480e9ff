//! Raster export of a quiz result.
//!
//! The card is drawn directly into an RGBA buffer: the type code in large
//! glyphs, one bar per dimension split at the first pole's percentage, and
//! the elapsed time.

mod font;

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use persona_core::model::{TraitLetter, TypeCode};
use persona_core::time::ElapsedTime;

use crate::error::ExportError;
use crate::quiz::QuizResult;
use font::{GLYPH_HEIGHT, GLYPH_WIDTH, glyph, is_set};

pub const CARD_WIDTH: u32 = 600;
pub const CARD_HEIGHT: u32 = 460;

const BACKGROUND: Rgba<u8> = Rgba([250, 248, 244, 255]);
const HEADER: Rgba<u8> = Rgba([64, 72, 140, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const FIRST_POLE: Rgba<u8> = Rgba([64, 72, 140, 255]);
const SECOND_POLE: Rgba<u8> = Rgba([214, 170, 90, 255]);
const INK: Rgba<u8> = Rgba([40, 40, 48, 255]);
const MUTED: Rgba<u8> = Rgba([160, 160, 168, 255]);

const HEADER_HEIGHT: u32 = 140;
const CODE_SCALE: u32 = 12;
const ROWS_TOP: u32 = 170;
const ROW_HEIGHT: u32 = 64;
const BAR_LEFT: u32 = 80;
const BAR_WIDTH: u32 = 440;
const BAR_HEIGHT: u32 = 20;

/// One dimension as drawn on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRow {
    pub first: TraitLetter,
    pub first_percent: u32,
    pub second: TraitLetter,
    pub second_percent: u32,
    pub winner: TraitLetter,
}

/// Display data for the exported image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub code: TypeCode,
    pub rows: [CardRow; 4],
    pub elapsed: ElapsedTime,
}

impl ResultCard {
    #[must_use]
    pub fn from_result(result: &QuizResult) -> Self {
        let scores = *result.scores();
        let rows = scores.map(|score| {
            let (first, second) = score.dimension.poles();
            let (first_percent, second_percent) = score.rounded();
            CardRow {
                first,
                first_percent,
                second,
                second_percent,
                winner: score.winner,
            }
        });
        Self {
            code: result.code(),
            rows,
            elapsed: result.elapsed(),
        }
    }

    #[must_use]
    pub fn render(&self) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(CARD_WIDTH, CARD_HEIGHT, BACKGROUND);
        fill_rect(&mut img, 0, 0, CARD_WIDTH, HEADER_HEIGHT, HEADER);

        let code = self.code.to_string();
        let code_x = centered_x(&code, CODE_SCALE);
        draw_text(&mut img, &code, code_x, 28, CODE_SCALE, WHITE);

        for (i, row) in (0_u32..).zip(self.rows.iter()) {
            draw_row(&mut img, ROWS_TOP + i * ROW_HEIGHT, row);
        }

        let elapsed = format!("{}:{:02}", self.elapsed.minutes, self.elapsed.seconds);
        let elapsed_y = ROWS_TOP + 4 * ROW_HEIGHT;
        draw_text(&mut img, &elapsed, centered_x(&elapsed, 2), elapsed_y, 2, MUTED);

        img
    }

    /// Encodes the rendered card as PNG.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Image` if encoding fails.
    pub fn render_png(&self) -> Result<Vec<u8>, ExportError> {
        let mut buffer = Vec::new();
        DynamicImage::ImageRgba8(self.render())
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
        Ok(buffer)
    }
}

/// File name for an exported result, e.g. `persona-INTJ.png`.
#[must_use]
pub fn export_file_name(code: TypeCode) -> String {
    format!("persona-{code}.png")
}

/// Renders `result` and writes it into `dir`, creating the directory if needed.
///
/// # Errors
///
/// Returns `ExportError` if rendering or writing fails.
pub fn export_result(result: &QuizResult, dir: &Path) -> Result<PathBuf, ExportError> {
    let bytes = ResultCard::from_result(result).render_png()?;
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(result.code()));
    std::fs::write(&path, bytes)?;
    tracing::info!(path = %path.display(), code = %result.code(), "exported result image");
    Ok(path)
}

//
// ─── DRAWING ──────────────────────────────────────────────────────────────────
//

fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, w: u32, h: u32, color: Rgba<u8>) {
    let x_end = (x + w).min(img.width());
    let y_end = (y + h).min(img.height());
    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, color);
        }
    }
}

fn draw_row(img: &mut RgbaImage, top: u32, row: &CardRow) {
    let letter_color = |letter: TraitLetter| if letter == row.winner { INK } else { MUTED };

    draw_text(img, &row.first.to_string(), 40, top, 4, letter_color(row.first));
    draw_text(img, &row.second.to_string(), 540, top, 4, letter_color(row.second));

    let split = BAR_WIDTH * row.first_percent.min(100) / 100;
    let bar_top = top + 4;
    fill_rect(img, BAR_LEFT, bar_top, split, BAR_HEIGHT, FIRST_POLE);
    fill_rect(img, BAR_LEFT + split, bar_top, BAR_WIDTH - split, BAR_HEIGHT, SECOND_POLE);

    let label_top = bar_top + BAR_HEIGHT + 8;
    let first_label = format!("{}%", row.first_percent);
    draw_text(img, &first_label, BAR_LEFT, label_top, 2, INK);
    let second_label = format!("{}%", row.second_percent);
    let second_x = (BAR_LEFT + BAR_WIDTH).saturating_sub(text_width(&second_label, 2));
    draw_text(img, &second_label, second_x, label_top, 2, INK);
}

fn text_width(text: &str, scale: u32) -> u32 {
    let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    (chars * (GLYPH_WIDTH + 1) * scale).saturating_sub(scale)
}

fn centered_x(text: &str, scale: u32) -> u32 {
    CARD_WIDTH.saturating_sub(text_width(text, scale)) / 2
}

fn draw_text(img: &mut RgbaImage, text: &str, x: u32, y: u32, scale: u32, color: Rgba<u8>) {
    let mut cursor = x;
    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            for row in 0..GLYPH_HEIGHT {
                for col in 0..GLYPH_WIDTH {
                    if is_set(&rows, col, row) {
                        fill_rect(img, cursor + col * scale, y + row * scale, scale, scale, color);
                    }
                }
            }
        }
        cursor += (GLYPH_WIDTH + 1) * scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use persona_core::model::{Answer, Choice, QuestionId};
    use persona_core::time::fixed_now;

    fn result(letters: &str) -> QuizResult {
        let answers = letters
            .chars()
            .zip(1_u32..)
            .map(|(c, id)| {
                Answer::new(QuestionId::new(id), Choice::A, TraitLetter::from_char(c).unwrap())
            })
            .collect();
        let start = fixed_now();
        QuizResult::build(answers, [3, 3, 2, 2], start, start + Duration::seconds(95))
    }

    #[test]
    fn card_rows_follow_rounded_scores() {
        let card = ResultCard::from_result(&result("EEISSNTTPJ"));
        assert_eq!(card.code.to_string(), "ESTJ");
        assert_eq!(card.rows[0].first_percent, 67);
        assert_eq!(card.rows[0].second_percent, 33);
        assert_eq!(card.rows[2].first_percent, 100);
        assert_eq!(card.elapsed.total_secs(), 95);
    }

    #[test]
    fn render_draws_header_and_bars() {
        let card = ResultCard::from_result(&result("EEESSSTTJJ"));
        let img = card.render();

        assert_eq!(img.dimensions(), (CARD_WIDTH, CARD_HEIGHT));
        assert_eq!(*img.get_pixel(2, 2), HEADER);
        // Every dimension is 100% first pole, so the whole bar is first-pole colour.
        let bar_y = ROWS_TOP + 4 + BAR_HEIGHT / 2;
        assert_eq!(*img.get_pixel(BAR_LEFT + BAR_WIDTH - 1, bar_y), FIRST_POLE);
        assert_eq!(*img.get_pixel(BAR_LEFT - 2, bar_y), BACKGROUND);
    }

    #[test]
    fn png_bytes_decode_back() {
        let bytes = ResultCard::from_result(&result("IINNNFFPPE")).render_png().unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), CARD_WIDTH);
        assert_eq!(decoded.height(), CARD_HEIGHT);
    }

    #[test]
    fn file_name_embeds_code() {
        let code: TypeCode = "INFJ".parse().unwrap();
        assert_eq!(export_file_name(code), "persona-INFJ.png");
    }
}
