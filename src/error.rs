// License: MIT
// Copyright © 2026 The one-line-diagram Authors

//! This module defines the `Error` struct and the `ErrorKind` enum, which are
//! used to represent errors that can occur in the library, and the
//! `DiagramErrors` collection in which they accumulate for a single diagram.

/// A macro for defining the `ErrorKind` enum, the `Display` implementation for
/// it, and the constructors for the `Error` struct.
macro_rules! ErrorKind {
    ($(
        ($kind:ident, $ctor:ident)
    ),*) => {
        /// The kind of error that occurred.
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub enum ErrorKind {
            $(
                $kind,
            )*
        }

        impl std::fmt::Display for ErrorKind {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        Self::$kind => write!(f, "{}", stringify!($kind)),
                    )*
                }
            }
        }

        /// Constructors for [`Error`].
        impl Error {
            $(
                #[doc = concat!(
                    "Creates a new [`Error`] with the `",
                    stringify!($kind),
                    "` kind and the given description."
                )]
                pub(crate) fn $ctor(desc: impl Into<String>) -> crate::Error {
                    Self {
                        kind: ErrorKind::$kind,
                        desc: desc.into(),
                    }
                }
            )*
        }
    };
}

ErrorKind!(
    (Calculation, calculation),
    (DataIntegrity, data_integrity),
    (EntityNotFound, entity_not_found),
    (Internal, internal),
    (InvalidGraph, invalid_graph),
    (Layout, layout)
);

/// An error that can occur while loading a catalog or while generating a
/// one-line diagram from it.
#[derive(Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    desc: String,
}

impl Error {
    /// Returns the kind of the error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the description of the error.
    pub fn description(&self) -> &str {
        &self.desc
    }

    /// Returns `true` if the error aborts the generation of a diagram.
    ///
    /// Data-integrity problems only cause the offending part of the catalog
    /// to be skipped.
    pub fn is_fatal(&self) -> bool {
        self.kind != ErrorKind::DataIntegrity
    }

    /// Prefixes the description with `context`, keeping the kind.
    pub(crate) fn with_context(self, context: impl std::fmt::Display) -> Self {
        Self {
            kind: self.kind,
            desc: format!("{context}: {}", self.desc),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.desc)
    }
}

impl std::error::Error for Error {}

/// All the errors collected while generating a single diagram.
///
/// Generation doesn't stop at the first failure, so that several problems in
/// the upstream data can be fixed in one go.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiagramErrors(Vec<Error>);

impl DiagramErrors {
    pub(crate) fn push(&mut self, error: Error) {
        self.0.push(error);
    }

    pub(crate) fn extend(&mut self, errors: impl IntoIterator<Item = Error>) {
        self.0.extend(errors);
    }

    /// Returns `true` if any of the collected errors is fatal.
    pub fn has_fatal(&self) -> bool {
        self.0.iter().any(Error::is_fatal)
    }

    /// Returns the collected errors, in the order they were found.
    pub fn errors(&self) -> &[Error] {
        &self.0
    }

    /// Returns an iterator over the fatal errors only.
    pub fn fatal(&self) -> impl Iterator<Item = &Error> {
        self.0.iter().filter(|e| e.is_fatal())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn into_inner(self) -> Vec<Error> {
        self.0
    }
}

impl From<Error> for DiagramErrors {
    fn from(error: Error) -> Self {
        Self(vec![error])
    }
}

impl std::fmt::Display for DiagramErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for DiagramErrors {}
