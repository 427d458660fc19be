use thiserror::Error;

/// Top-level error type for the mould kernel.
#[derive(Debug, Error)]
pub enum MouldError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Violations of the closed-manifold invariant.
///
/// These are fatal: they mean the input was not a closed 2-manifold or the
/// kernel has a bug. The volume involved must not be used afterwards.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("no face contains the directed edge {from} -> {to}")]
    EdgeNotFound { from: usize, to: usize },

    #[error("vertex {vertex} is not part of face {face}")]
    VertexNotInFace { vertex: usize, face: usize },

    #[error("vertex index {index} is out of range for {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cut plane separates vertices but no section edge was found")]
    NoSection,

    #[error("section loop starting at vertex {start} cannot continue from vertex {stuck_at}")]
    SectionNotClosed { start: usize, stuck_at: usize },

    #[error("section vertex {vertex} lies off the cut plane (value {value})")]
    SectionOffPlane { vertex: usize, value: f64 },

    #[error("face ring around vertex {vertex} does not close")]
    RingNotClosed { vertex: usize },

    #[error("directed edge {from} -> {to} is used by {count} faces")]
    NotClosed { from: usize, to: usize, count: usize },
}

/// Errors related to kernel operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("vertex index {0} does not fit in a 32-bit index buffer")]
    IndexOverflow(usize),
}

/// Convenience type alias for results using [`MouldError`].
pub type Result<T> = std::result::Result<T, MouldError>;
