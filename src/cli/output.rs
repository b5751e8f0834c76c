//! Handles the user-facing listings printed by the CLI.
//!
//! Generated C goes through [`OutputSet`](crate::runtime::OutputSet); this module only
//! covers the informational modes (`-d` and `--list-macros`).

use std::io::{self, IsTerminal, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::{macros::MacroRegistry, mpi::MpiApi, WrapError, WrapResult};

// ============================================================================
// CORE OUTPUT FUNCTIONS
// ============================================================================

/// Prints every extracted prototype, one per line, in header order.
pub fn print_declarations(api: &MpiApi) -> WrapResult<()> {
    let mut stdout = io::stdout().lock();
    write_declarations(&mut stdout, api).map_err(|e| WrapError::io("writing declarations", e))
}

/// Prints the built-in macros with their arity, highlighting body macros.
pub fn print_macros(registry: &MacroRegistry) -> WrapResult<()> {
    let mut stdout = StandardStream::stdout(color_choice());
    write_macros(&mut stdout, registry).map_err(|e| WrapError::io("writing macro list", e))
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn color_choice() -> ColorChoice {
    if io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn write_declarations(out: &mut impl Write, api: &MpiApi) -> io::Result<()> {
    for decl in api.iter() {
        writeln!(out, "{decl}")?;
    }
    Ok(())
}

fn write_macros(out: &mut impl WriteColor, registry: &MacroRegistry) -> io::Result<()> {
    for mac in registry.iter() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(out, "{:<10}", mac.name)?;
        out.reset()?;
        write!(out, " {}", mac.arity)?;
        if mac.has_body {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            write!(out, "  ... {{{{end{}}}}}", mac.name)?;
            out.reset()?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::NoColor;

    #[test]
    fn macro_listing_marks_bodies() {
        let mut out = NoColor::new(Vec::new());
        write_macros(&mut out, &MacroRegistry::builtin()).expect("write");
        let text = String::from_utf8(out.into_inner()).expect("utf8");
        assert!(text.lines().any(|l| l.starts_with("fn ") && l.ends_with("{{endfn}}")));
        assert!(text.lines().any(|l| l.starts_with("zip ") && !l.contains("{{end")));
    }
}
