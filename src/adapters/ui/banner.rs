//! Startup banner with a vertical gradient (TRANSCRIPTS).

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Ink blue (#1d4ed8).
const INK_BLUE: (u8, u8, u8) = (0x1d, 0x4e, 0xd8);
/// Chalk green (#34d399).
const CHALK_GREEN: (u8, u8, u8) = (0x34, 0xd3, 0x99);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let mix = |x: u8, y: u8| (f64::from(x) * (1.0 - t) + f64::from(y) * t).round() as u8;
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Render `text` with the built-in figlet font. Falls back to the plain text.
fn ascii_art(text: &str) -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(text).map(|fig| fig.to_string()))
        .unwrap_or_else(|| format!("{}\n", text))
}

/// Prints "TRANSCRIPTS" in figlet ASCII, shaded from ink blue to chalk green, then the version.
pub fn print_welcome() {
    let mut out = stdout();
    let art = ascii_art("TRANSCRIPTS");
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(INK_BLUE, CHALK_GREEN, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: CHALK_GREEN.0,
        g: CHALK_GREEN.1,
        b: CHALK_GREEN.2,
    }));
    let _ = out.execute(Print(format!("v{}\r\n", version)));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp_rgb(INK_BLUE, CHALK_GREEN, 0.0), INK_BLUE);
        assert_eq!(lerp_rgb(INK_BLUE, CHALK_GREEN, 1.0), CHALK_GREEN);
    }

    #[test]
    fn test_ascii_art_is_multiline() {
        assert!(ascii_art("T").lines().count() > 1);
    }
}
