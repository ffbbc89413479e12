use anstyle::AnsiColor;
use anstyle::Color;
use anstyle::Style;

/// The input to the benchmarked computation, fixed at compile time.
pub const BENCH_INPUT: u64 = 40;

/// Create a style with a defined foreground color.
pub const fn style_from_fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

/// The styling for the benchmarked routine's name.
pub const PRIMARY_STYLE: Style = style_from_fg(AnsiColor::Green).bold();

/// The styling for error messages.
pub const ERROR_STYLE: Style = style_from_fg(AnsiColor::Red).bold();

/// The styling for help messages.
pub const HELP_STYLE: Style = style_from_fg(AnsiColor::Green).bold().underline();

#[cfg(test)]
#[path = "tests/constants.rs"]
mod tests;
