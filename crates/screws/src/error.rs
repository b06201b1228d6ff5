use std::fmt;

use thiserror::Error;

/// Resolve the path of the enclosing function at compile time.
macro_rules! function_name {
    () => {{
        fn probe() {}
        fn type_name_of<F>(_: F) -> &'static str {
            std::any::type_name::<F>()
        }
        let name = type_name_of(probe);
        let name = name.strip_suffix("::probe").unwrap_or(name);
        name.trim_end_matches("::{{closure}}")
    }};
}

/// Build a [`ScrewError`](crate::ScrewError) carrying the call-site location.
macro_rules! screw_error {
    ($kind:expr) => {
        $crate::error::ScrewError::new($kind, file!(), function_name!(), line!())
    };
}

/// Numeric evidence collected when a matrix fails the rotation check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationDiagnostics {
    /// Determinant of the matrix.
    pub determinant: f64,
    /// Squared norms of the three columns.
    pub column_norms: [f64; 3],
    /// Dot products of the column pairs (0,1), (0,2) and (1,2).
    pub column_dots: [f64; 3],
}

impl fmt::Display for RotationDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "determinant: {:.6}, col0norm = {:.6}, col1norm = {:.6}, col2norm = {:.6}, \
             col01norm = {:.6}, col02norm = {:.6}, col12norm = {:.6}",
            self.determinant,
            self.column_norms[0],
            self.column_norms[1],
            self.column_norms[2],
            self.column_dots[0],
            self.column_dots[1],
            self.column_dots[2],
        )
    }
}

/// The category of a [`ScrewError`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScrewErrorKind {
    /// A supplied or computed 3x3 matrix is not a proper rotation.
    #[error("Rotation matrix not orthonormal ({0})")]
    InvalidRotation(RotationDiagnostics),

    /// Only the `x`, `y` and `z` elementary axes exist.
    #[error("Only x, y, z are supported as axes, got '{0}'")]
    InvalidAxis(char),

    /// The angle is outside `[0, 2pi)`.
    #[error("Only angles within [0, 2pi) are supported, got {angle}")]
    OutOfRange {
        /// The rejected angle, in radians.
        angle: f64,
    },

    /// Normalisation or element-wise division by zero.
    #[error("Division by zero attempted")]
    DivisionByZero,

    /// Element access outside the matrix.
    #[error("Index ({row}, {col}) out of bounds")]
    IndexOutOfBounds {
        /// The requested row.
        row: usize,
        /// The requested column.
        col: usize,
    },
}

/// Error raised by the screw types, with the location where it was detected.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}")]
pub struct ScrewError {
    kind: ScrewErrorKind,
    file: &'static str,
    function: &'static str,
    line: u32,
}

impl ScrewError {
    /// Create a new error. Prefer the crate-internal `screw_error!` macro, which fills in the
    /// location.
    pub fn new(kind: ScrewErrorKind, file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            kind,
            file,
            function,
            line,
        }
    }

    /// The category of the error.
    pub fn kind(&self) -> &ScrewErrorKind {
        &self.kind
    }

    /// Human readable message, without location.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Source file where the error was raised.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// Function where the error was raised.
    pub fn function(&self) -> &'static str {
        self.function
    }

    /// Line where the error was raised.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Full diagnostic string, message plus location.
    pub fn diagnostic(&self) -> String {
        format!(
            "Encountered: `{}`, in file `{}`, function `{}`, line `{}`.",
            self.kind, self.file, self.function, self.line
        )
    }
}
