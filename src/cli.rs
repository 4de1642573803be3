// Command line interface module
// Parses styling and hosting options into a FoldStyle

use crate::style::{Color, FoldStyle};
use clap::Parser;

/// rfold - A fold/turn corner card widget for Wayland
#[derive(Parser, Debug)]
#[command(name = "rfold")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Front face color of the peeled corner
    #[arg(long, default_value = "#808080", value_parser = parse_color)]
    pub fold_color: Color,

    /// Back face color shown in the mirrored region
    #[arg(long, default_value = "#FFFFFF", value_parser = parse_color)]
    pub mirror_color: Color,

    /// Base card background color
    #[arg(long, default_value = "#FAFAF5", value_parser = parse_color)]
    pub card_color: Color,

    /// Title text drawn at the top-left of the card
    #[arg(long)]
    pub title: Option<String>,

    /// Title text color
    #[arg(long, default_value = "#212121", value_parser = parse_color)]
    pub title_color: Color,

    /// Title font size in pixels
    #[arg(long, default_value = "16.0")]
    pub title_size: f32,

    /// Size text drawn below the title
    #[arg(long)]
    pub size_text: Option<String>,

    /// Size text color
    #[arg(long, default_value = "#757575", value_parser = parse_color)]
    pub size_color: Color,

    /// Size text font size in pixels
    #[arg(long, default_value = "12.0")]
    pub size_size: f32,

    /// Left margin for both labels in pixels
    #[arg(long, default_value = "12.0")]
    pub text_margin_left: f32,

    /// Vertical offset of the size label from the card top in pixels
    #[arg(long, default_value = "22.0")]
    pub size_margin_top: f32,

    /// Initial fold width from the bottom-right corner in pixels
    #[arg(long, default_value = "48.0")]
    pub fold_width: f32,

    /// Initial fold height from the bottom-right corner in pixels
    #[arg(long, default_value = "48.0")]
    pub fold_height: f32,

    /// Card surface width in pixels
    #[arg(short = 'W', long, default_value = "300")]
    pub width: u32,

    /// Card surface height in pixels
    #[arg(short = 'H', long, default_value = "200")]
    pub height: u32,

    /// Disable GPU rendering and use CPU rendering only
    #[arg(long, default_value = "false")]
    pub cpu: bool,
}

impl Args {
    /// Whether GPU rendering should be attempted (default true)
    pub fn use_gpu(&self) -> bool {
        !self.cpu
    }

    /// Build the immutable widget style from the parsed flags
    pub fn style(&self) -> FoldStyle {
        FoldStyle {
            fold_color: self.fold_color,
            mirror_color: self.mirror_color,
            card_color: self.card_color,
            title_text: self.title.clone(),
            title_color: self.title_color,
            title_size: self.title_size,
            size_text: self.size_text.clone(),
            size_color: self.size_color,
            size_size: self.size_size,
            text_margin_left: self.text_margin_left,
            size_margin_top: self.size_margin_top,
            fold_width: self.fold_width,
            fold_height: self.fold_height,
        }
    }
}

/// Parse a CLI color value (#RRGGBB or #AARRGGBB)
fn parse_color(s: &str) -> Result<Color, String> {
    s.parse()
        .map_err(|e: crate::style::ColorParseError| e.to_string())
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build_the_default_style() {
        let args = Args::parse_from(["rfold"]);
        assert_eq!(args.style(), FoldStyle::default());
        assert_eq!(args.width, 300);
        assert_eq!(args.height, 200);
        assert!(args.use_gpu());
    }

    #[test]
    fn color_and_label_overrides() {
        let args = Args::parse_from([
            "rfold",
            "--fold-color",
            "#FF0000",
            "--title",
            "report.pdf",
            "--size-text",
            "2.4 MB",
            "--cpu",
        ]);
        let style = args.style();
        assert_eq!(style.fold_color, Color::rgb(255, 0, 0));
        assert_eq!(style.title_text.as_deref(), Some("report.pdf"));
        assert_eq!(style.size_text.as_deref(), Some("2.4 MB"));
        assert!(!args.use_gpu());
    }

    #[test]
    fn bad_color_is_a_cli_error() {
        assert!(Args::try_parse_from(["rfold", "--fold-color", "red"]).is_err());
    }
}
