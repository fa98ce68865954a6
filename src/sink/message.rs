use crate::types::alloc_type::{Cow, String};
use crate::types::{ArgVec, TagVec};
use core::fmt::{self, Display, Write};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tag carried by every message the crate emits.
pub const TAG_FLOW: &str = "errflow";
/// Tag for a logged error that was not suppressed when it arrived.
pub const TAG_ERROR: &str = "error";
/// Tag for an error that lost a combine step.
pub const TAG_SUPPRESSED: &str = "suppressed-error";
/// Tag for a cleanup error dropped because the frame was unwinding from a panic.
pub const TAG_DISCARDED: &str = "discarded-error";

/// Payload delivered to a [`LogSink`](super::LogSink).
///
/// `format` is a template with `{}` placeholders filled from `args` in order;
/// `{{` and `}}` escape literal braces.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LogMessage {
    pub format: Cow<'static, str>,
    pub args: ArgVec,
    pub stack: Option<String>,
    pub tags: TagVec,
}

impl LogMessage {
    /// Creates a message with the given template and no arguments.
    #[inline]
    pub fn new<F>(format: F) -> Self
    where
        F: Into<Cow<'static, str>>,
    {
        Self { format: format.into(), ..Default::default() }
    }

    /// Appends a rendered argument.
    #[inline]
    pub fn arg<A: Display>(mut self, arg: A) -> Self {
        let mut rendered = String::new();
        let _ = write!(rendered, "{}", arg);
        self.args.push(rendered);
        self
    }

    /// Appends a tag.
    #[inline]
    pub fn tag<T>(mut self, tag: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        self.tags.push(tag.into());
        self
    }

    /// Sets the stack context.
    #[inline]
    pub fn with_stack(mut self, stack: Option<String>) -> Self {
        self.stack = stack;
        self
    }

    /// Returns `true` if the message carries `tag`.
    #[inline]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Builds the message emitted for a delivered error.
    pub(crate) fn for_error<E: Display>(error: &E, kind: &'static str) -> Self {
        Self::new("{}").arg(error).classified(kind)
    }

    /// Attaches the stack and the `errflow` + `kind` tags.
    pub(crate) fn classified(self, kind: &'static str) -> Self {
        self.with_stack(capture_stack()).tag(TAG_FLOW).tag(kind)
    }

    /// Fills the template. Missing arguments render as `{}`, extra ones are ignored.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.format.len() + 16);
        let mut args = self.args.iter();
        let mut chars = self.format.chars().peekable();

        while let Some(c) = chars.next() {
            match (c, chars.peek()) {
                ('{', Some('{')) | ('}', Some('}')) => {
                    chars.next();
                    out.push(c);
                },
                ('{', Some('}')) => {
                    chars.next();
                    match args.next() {
                        Some(arg) => out.push_str(arg),
                        None => out.push_str("{}"),
                    }
                },
                _ => out.push(c),
            }
        }
        out
    }
}

impl Display for LogMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(feature = "std")]
fn capture_stack() -> Option<String> {
    use std::backtrace::{Backtrace, BacktraceStatus};

    let backtrace = Backtrace::capture();
    match backtrace.status() {
        BacktraceStatus::Captured => Some(backtrace.to_string()),
        _ => None,
    }
}

#[cfg(not(feature = "std"))]
fn capture_stack() -> Option<String> {
    None
}
