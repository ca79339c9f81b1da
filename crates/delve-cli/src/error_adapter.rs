//! Error adapter for converting CliError to miette diagnostics.
//!
//! This module provides the bridge between the standard error types of the
//! library and CLI and miette's rich diagnostic formatting.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use delve::DelveError;

use crate::error::CliError;

/// Adapter rendering a [`CliError`] through miette.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            CliError::Io(_) => "delve::io",
            CliError::Json(_) => "delve::json",
            CliError::Config(_) | CliError::Generate(DelveError::Config(_)) => "delve::config",
            CliError::Generate(DelveError::Graph(_)) => "delve::graph",
            CliError::Generate(DelveError::Placement(_)) => "delve::placement",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            CliError::Generate(DelveError::Placement(_)) => {
                "raise the search budget or relax the room size ranges"
            }
            CliError::Generate(DelveError::Graph(_)) => {
                "every room must be reachable from \"start\" through matching parent and children entries"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Wrap a [`CliError`] so it can be rendered by miette.
pub fn to_reportable(err: &CliError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}
