use crossterm::style::{Attribute, Color};
use ordinal_pick_core::definitions::{ColorDefinition, ThemeDefinition};
use ordinal_pick_core::error::{Error, Result};
use ordinal_pick_core::render::SpanStyle;

/// Trait for converting color definitions to terminal colors
pub trait AsTermColor {
    fn as_crossterm_color(&self) -> Result<Option<Color>>;
}

impl AsTermColor for ColorDefinition {
    fn as_crossterm_color(&self) -> Result<Option<Color>> {
        let defined_count = [self.rgb.is_some(), self.ansi.is_some(), self.name.is_some()]
            .iter()
            .filter(|&&x| x)
            .count();

        // Error if more than one field is defined
        if defined_count > 1 {
            return Err(Error::MultipleColorTypes);
        }

        // Convert to crossterm Color
        Ok(match (self.rgb, self.ansi, &self.name) {
            (Some((r, g, b)), None, None) => Some(Color::Rgb { r, g, b }),
            (None, Some(ansi), None) => Some(Color::AnsiValue(ansi)),
            (None, None, Some(name)) => Some(match name.to_lowercase().as_str() {
                "black" => Color::Black,
                "darkgrey" => Color::DarkGrey,
                "red" => Color::Red,
                "darkred" => Color::DarkRed,
                "green" => Color::Green,
                "darkgreen" => Color::DarkGreen,
                "yellow" => Color::Yellow,
                "darkyellow" => Color::DarkYellow,
                "blue" => Color::Blue,
                "darkblue" => Color::DarkBlue,
                "magenta" => Color::Magenta,
                "darkmagenta" => Color::DarkMagenta,
                "cyan" => Color::Cyan,
                "darkcyan" => Color::DarkCyan,
                "white" => Color::White,
                "grey" => Color::Grey,
                _ => return Err(Error::UnknownColorName(name.to_string())),
            }),
            (None, None, None) => None,
            _ => unreachable!(), // This case is prevented by the earlier check
        })
    }
}

/// Helper function to resolve an optional color, falling back to `default`
fn color_or(color_definition: Option<&ColorDefinition>, default: Color) -> Result<Color> {
    match color_definition {
        None => Ok(default),
        Some(color_definition) => Ok(color_definition.as_crossterm_color()?.unwrap_or(default)),
    }
}

/// Terminal colors for the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub pointer: Color,
    pub ordinal: Color,
    pub help: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            pointer: Color::Cyan,
            ordinal: Color::Green,
            help: Color::Cyan,
            error: Color::Red,
        }
    }
}

/// How one span is drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermStyle {
    pub foreground: Option<Color>,
    pub attributes: Vec<Attribute>,
}

impl Theme {
    /// Builds the theme from the definition file, keeping defaults for
    /// colors it does not set.
    ///
    /// # Errors
    ///
    /// Returns an error if a color sets more than one of `rgb`, `ansi` and
    /// `name`, or names an unknown color.
    pub fn from_definition(theme: Option<&ThemeDefinition>) -> Result<Self> {
        let defaults = Self::default();
        let Some(theme) = theme else {
            return Ok(defaults);
        };

        Ok(Self {
            pointer: color_or(theme.pointer.as_ref(), defaults.pointer)?,
            ordinal: color_or(theme.ordinal.as_ref(), defaults.ordinal)?,
            help: color_or(theme.help.as_ref(), defaults.help)?,
            error: color_or(theme.error.as_ref(), defaults.error)?,
        })
    }

    #[must_use]
    pub fn style_for(&self, style: SpanStyle) -> TermStyle {
        let (foreground, attributes) = match style {
            SpanStyle::Plain | SpanStyle::Unchecked => (None, vec![]),
            SpanStyle::Prefix => (Some(Color::Green), vec![]),
            SpanStyle::Message => (None, vec![Attribute::Bold]),
            SpanStyle::HelpKey => (Some(self.help), vec![Attribute::Bold]),
            SpanStyle::Answer | SpanStyle::Pointer | SpanStyle::Highlighted => {
                (Some(self.pointer), vec![])
            }
            SpanStyle::Ordinal => (Some(self.ordinal), vec![]),
            SpanStyle::Disabled | SpanStyle::Separator | SpanStyle::Hint => {
                (None, vec![Attribute::Dim])
            }
            SpanStyle::Error => (Some(self.error), vec![]),
        };

        TermStyle {
            foreground,
            attributes,
        }
    }
}
