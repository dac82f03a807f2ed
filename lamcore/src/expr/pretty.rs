//! RcDoc-based pretty-printer with termcolor annotations for [`Expr`].
//!
//! Role
//! - Convert an expression into an annotated document suitable for
//!   width-aware rendering.
//! - Provide colored output for terminals (TTY-aware) and plain strings for
//!   logs/tests.
//!
//! Naming
//! - Binder identifiers are opaque integers. The first time one is seen in a
//!   depth-first, left-to-right walk it is assigned the next display name
//!   (`a`..`z`, then `v0`, `v1`, ...); every later occurrence reuses it, so
//!   the rendering of a given tree is deterministic.
//!
//! Layout
//! - Abstractions render parenthesized: `(λa. body)`.
//! - Application operands are separated by a space; only a right operand
//!   that is itself an application is parenthesized, so left-associativity
//!   stays visually implicit.
//! - Host leaves render opaquely: `[8 bytes]`, `<inc>`.

use std::io::{self, Write};

use pretty::{FmtWrite, RcDoc, RenderAnnotated};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::binder::Binder;
use crate::expr::Expr;

/// Styles used to annotate parts of the pretty-printed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Punct,  // parentheses, lambda dots
    Binder, // λ introductions
    Ident,  // variable occurrences
    Host,   // opaque host leaves
}

impl Style {
    fn to_color_spec(self) -> ColorSpec {
        let mut s = ColorSpec::new();
        match self {
            Style::Punct => {
                s.set_dimmed(true);
            }
            Style::Binder => {
                s.set_fg(Some(Color::Cyan)).set_bold(true);
            }
            Style::Ident => {
                s.set_fg(Some(Color::Green)).set_bold(true);
            }
            Style::Host => {
                s.set_fg(Some(Color::Magenta));
            }
        }
        s
    }
}

fn punct(s: &'static str) -> RcDoc<'static, Style> {
    RcDoc::as_string(s).annotate(Style::Punct)
}

/// Display names handed out in first-occurrence order.
#[derive(Default)]
struct NameTable {
    seen: Vec<Binder>,
}

impl NameTable {
    fn name_for(&mut self, binder: Binder) -> String {
        let idx = match self.seen.iter().position(|s| *s == binder) {
            Some(idx) => idx,
            None => {
                self.seen.push(binder);
                self.seen.len() - 1
            }
        };
        if idx < 26 {
            char::from(b'a' + idx as u8).to_string()
        } else {
            format!("v{}", idx - 26)
        }
    }
}

fn to_doc(e: &Expr, names: &mut NameTable) -> RcDoc<'static, Style> {
    match e {
        Expr::Var(b) => RcDoc::as_string(names.name_for(*b)).annotate(Style::Ident),
        Expr::Lambda { arg, body } => punct("(")
            .append(RcDoc::as_string(format!("λ{}", names.name_for(*arg))).annotate(Style::Binder))
            .append(punct("."))
            .append(RcDoc::space())
            .append(to_doc(body, names))
            .append(punct(")"))
            .group(),
        Expr::Call { func, arg } => {
            // Build the function document first so names are assigned
            // left-to-right.
            let func_doc = to_doc(func, names);
            let arg_doc = if arg.is_call() {
                punct("(").append(to_doc(arg, names)).append(punct(")"))
            } else {
                to_doc(arg, names)
            };
            func_doc.append(RcDoc::space()).append(arg_doc).group()
        }
        Expr::HostValue(v) => {
            RcDoc::as_string(format!("[{} bytes]", v.len())).annotate(Style::Host)
        }
        Expr::HostFn(f) => {
            let label = if f.label().is_empty() { "fun" } else { f.label() };
            RcDoc::as_string(format!("<{label}>")).annotate(Style::Host)
        }
    }
}

// A writer that maps Style annotations to termcolor ColorSpec on a WriteColor sink.
struct ColorWriter<'w, W: WriteColor + Write> {
    out: &'w mut W,
}

impl<'a, 'w, W: WriteColor + Write> RenderAnnotated<'a, Style> for ColorWriter<'w, W> {
    fn push_annotation(&mut self, ann: &'a Style) -> io::Result<()> {
        self.out.set_color(&ann.to_color_spec())
    }
    fn pop_annotation(&mut self) -> io::Result<()> {
        self.out.reset()
    }
}

impl<'w, W: WriteColor + Write> pretty::Render for ColorWriter<'w, W> {
    type Error = io::Error;
    fn write_str(&mut self, s: &str) -> io::Result<usize> {
        self.out.write_all(s.as_bytes())?;
        Ok(s.len())
    }
    fn write_str_all(&mut self, s: &str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())
    }
    fn fail_doc(&self) -> Self::Error {
        io::Error::other("render failed")
    }
}

/// Render a document to a `termcolor::WriteColor` with width-aware layout.
fn render_to<W: WriteColor + Write>(
    doc: &RcDoc<'_, Style>,
    width: usize,
    out: &mut W,
) -> io::Result<()> {
    let mut cw = ColorWriter { out };
    doc.render_raw(width, &mut cw)
}

/// Convenience: retrieve the width of the terminal, or 80 if it cannot be determined.
fn terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

/// Pretty-printing conveniences for expressions.
pub trait PrettyExpr {
    /// Build an RcDoc representation of this expression with style
    /// annotations. Useful for composing or rendering manually.
    fn pretty_doc(&self) -> RcDoc<'static, Style>;

    /// Render this expression with colors to any termcolor writer at the given width.
    fn pretty_render_to<W: WriteColor + Write>(&self, width: usize, out: &mut W) -> io::Result<()>;

    /// Print this expression to stdout with colors (TTY-aware), at auto-detected width.
    fn pretty_print(&self) -> io::Result<()>;

    /// Format this expression into a plain string (no colors).
    fn pretty_string(&self) -> String;
}

impl PrettyExpr for Expr {
    fn pretty_doc(&self) -> RcDoc<'static, Style> {
        let mut names = NameTable::default();
        to_doc(self, &mut names)
    }

    fn pretty_render_to<W: WriteColor + Write>(&self, width: usize, out: &mut W) -> io::Result<()> {
        let doc = self.pretty_doc();
        render_to(&doc, width, out)
    }

    fn pretty_print(&self) -> io::Result<()> {
        let stdout = StandardStream::stdout(ColorChoice::Auto);
        let mut stdout = stdout.lock();
        let doc = self.pretty_doc();
        render_to(&doc, terminal_width(), &mut stdout)
    }

    fn pretty_string(&self) -> String {
        let mut buf = String::new();
        let _ = self.pretty_doc().render_fmt(80, &mut buf);
        buf
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut w = FmtWrite::new(f);
        let doc = self.pretty_doc();
        doc.render_raw(80, &mut w)
    }
}
