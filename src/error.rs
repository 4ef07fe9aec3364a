#[derive(Debug)]
pub enum TableError {
    /// The distribution has no entries.
    Empty,
    /// A weight is negative, NaN, or infinite.
    BadWeight { index: usize, value: f64 },
    /// The weights do not sum to 1.0 within tolerance.
    BadSum { sum: f64 },
    /// Label count disagrees with the distribution length.
    LabelMismatch { labels: usize, weights: usize },
    /// A batch of zero samples was requested.
    BadSampleCount { n: usize },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::Empty => write!(f, "distribution is empty"),
            TableError::BadWeight { index, value } => {
                write!(
                    f,
                    "distribution contains an invalid weight at index {index}: {value}"
                )
            }
            TableError::BadSum { sum } => {
                write!(f, "distribution sums to {sum}, expected 1.0")
            }
            TableError::LabelMismatch { labels, weights } => {
                write!(f, "got {labels} labels for {weights} weights")
            }
            TableError::BadSampleCount { n } => {
                write!(f, "sample count must be positive, got {n}")
            }
        }
    }
}

impl std::error::Error for TableError {}
