use fractic_server_error::ServerError;

use crate::presentation::{export::CardRenderer, profile_card::ProfileCard};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
// The card's y is the line top, SVG's default anchor is the baseline.
const TEXT_ATTRS: &str =
    "dominant-baseline=\"hanging\" font-family=\"monospace\" font-size=\"11\"";

/// Renders the card as a standalone SVG document.
pub struct SvgCardRenderer;

impl SvgCardRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SvgCardRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

impl CardRenderer for SvgCardRenderer {
    fn extension(&self) -> &'static str {
        "svg"
    }

    fn render(&self, card: &ProfileCard) -> Result<Vec<u8>, ServerError> {
        let mut svg = format!(
            "<svg xmlns=\"{ns}\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            ns = SVG_NS,
            w = card.width,
            h = card.height
        );
        svg.push_str(&format!(
            "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
            card.background
        ));
        for line in &card.lines {
            svg.push_str(&format!(
                "  <text x=\"{}\" y=\"{}\" fill=\"{}\" {}>{}</text>\n",
                line.x,
                line.y,
                line.color,
                TEXT_ATTRS,
                escape(&line.text)
            ));
        }
        svg.push_str("</svg>\n");
        Ok(svg.into_bytes())
    }
}
