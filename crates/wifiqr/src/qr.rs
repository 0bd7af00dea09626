//! QR code rendering for terminals and SVG files.

use std::path::Path;

use qrcode::QrCode;
use qrcode::render::{svg, unicode};

use crate::error::CliError;

fn build(payload: &str) -> Result<QrCode, CliError> {
    QrCode::new(payload.as_bytes()).map_err(|e| CliError::QrRender {
        reason: e.to_string(),
    })
}

/// Render `payload` with half-block characters, two modules per line.
///
/// Colors are inverted so the code reads correctly on dark terminals.
pub fn render_terminal(payload: &str) -> Result<String, CliError> {
    let code = build(payload)?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .build())
}

/// Render `payload` as SVG markup at least `size` pixels on each edge.
pub fn render_svg(payload: &str, size: u32) -> Result<String, CliError> {
    let code = build(payload)?;
    Ok(code
        .render()
        .min_dimensions(size, size)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}

pub fn write_svg(payload: &str, size: u32, path: &Path) -> Result<(), CliError> {
    let markup = render_svg(payload, size)?;
    std::fs::write(path, markup)?;
    tracing::info!(path = %path.display(), "wrote QR code");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const PAYLOAD: &str = "WIFI:T:WPA;S:Home;P:secret;H:false;;";

    #[test]
    fn terminal_rendering_uses_half_blocks() {
        let art = render_terminal(PAYLOAD).unwrap();
        assert!(art.lines().count() > 10);
        assert!(art.contains('\u{2580}') || art.contains('\u{2584}') || art.contains('\u{2588}'));
    }

    #[test]
    fn svg_rendering_is_markup() {
        let svg = render_svg(PAYLOAD, 256).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("#000000"));
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let huge = format!("WIFI:S:{};;", "x".repeat(8000));
        assert!(matches!(
            render_terminal(&huge),
            Err(CliError::QrRender { .. })
        ));
    }
}
