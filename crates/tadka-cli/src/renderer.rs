//! Terminal rendering for the markdown produced by `tadka_core::display`.

use std::io::{self, Write};

use anyhow::{Context, Result};
use termimad::{
    crossterm::style::{Attribute, Color},
    Alignment, MadSkin, StyledChar,
};

/// Prints display markdown, styled through a termimad skin unless plain
/// output was asked for.
pub struct TerminalRenderer {
    skin: Option<MadSkin>,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        Self {
            skin: rich_enabled.then(kitchen_skin),
        }
    }

    /// Render markdown text to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        self.render_to(&mut io::stdout().lock(), markdown)
    }

    pub fn render_to<W: Write>(&self, out: &mut W, markdown: &str) -> Result<()> {
        match &self.skin {
            Some(skin) => skin
                .write_text_on(out, markdown)
                .context("Failed to render markdown")?,
            None => out
                .write_all(markdown.as_bytes())
                .context("Failed to write output")?,
        }
        out.flush().context("Failed to flush output")
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Recipe title, section, step and hint headings in descending depth.
fn kitchen_skin() -> MadSkin {
    let mut skin = MadSkin::default();
    for header in &mut skin.headers {
        header.align = Alignment::Left;
    }
    skin.headers[0].set_fg(Color::DarkYellow);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.headers[1].set_fg(Color::Yellow);
    skin.headers[2].set_fg(Color::Green);
    skin.headers[3].set_fg(Color::Cyan);

    // ingredient names and step bullets
    skin.bold.set_fg(Color::Green);
    skin.bullet = StyledChar::from_fg_char(Color::DarkYellow, '•');
    skin.inline_code.set_bg(Color::AnsiValue(238));
    skin
}
