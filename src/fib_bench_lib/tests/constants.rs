use anstyle::AnsiColor;
use anstyle::Color;
use anstyle::Style;

use crate::constants::style_from_fg;

/// `style_from_fg` sets exactly the requested foreground color.
#[test]
fn style_builds_fg_color() {
    assert_eq!(
        style_from_fg(AnsiColor::Red),
        Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)))
    );
}
