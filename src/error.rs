use std::error::Error;
use std::fmt::{Display, Formatter};

/// Possible errors that arise when consuming a minimum spanning tree sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MstError {
    /// The graph gained an edge after the sequence was created.
    ConcurrentStructuralChange,
    /// The sequence was advanced past its last edge.
    ExhaustedSequence,
}

impl Error for MstError {}

impl Display for MstError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            MstError::ConcurrentStructuralChange => {
                "The graph was modified after the spanning tree sequence was created"
            }
            MstError::ExhaustedSequence => "The spanning tree sequence has no more edges",
        };
        write!(f, "{message}")
    }
}

/// Possible errors that arise when building or rendering a map of cities.
#[derive(Debug, Clone, PartialEq)]
pub enum CityMapError {
    Io(String),
    InvalidRecord(String),
    EmptyDataset,
    Mst(MstError),
}

impl Error for CityMapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CityMapError::Mst(err) => Some(err),
            _ => None,
        }
    }
}

impl Display for CityMapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            CityMapError::Io(msg) => format!("Unable to read city data: {msg}"),
            CityMapError::InvalidRecord(msg) => format!("Invalid city record: {msg}"),
            CityMapError::EmptyDataset => String::from("No valid city records were found"),
            CityMapError::Mst(err) => format!("Spanning tree error: {err}"),
        };
        write!(f, "{message}")
    }
}

impl From<MstError> for CityMapError {
    fn from(err: MstError) -> Self {
        CityMapError::Mst(err)
    }
}

impl From<std::io::Error> for CityMapError {
    fn from(err: std::io::Error) -> Self {
        CityMapError::Io(err.to_string())
    }
}
