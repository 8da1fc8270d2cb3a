use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum SinkError {
    #[snafu(display("Report sink was closed by the reader"))]
    Closed {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("Failed to write report"))]
    Write {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: std::io::Error,
    },
}

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to render report"))]
    Render {
        #[snafu(implicit)]
        location: Location,
        source: SinkError,
    },
}

impl From<std::io::Error> for SinkError {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        let location = std::panic::Location::caller();
        let location = Location::new(location.file(), location.line(), location.column());
        match error.kind() {
            std::io::ErrorKind::BrokenPipe => SinkError::Closed { location },
            _ => SinkError::Write { location, error },
        }
    }
}

impl SinkError {
    pub fn is_closed(&self) -> bool {
        matches!(self, SinkError::Closed { .. })
    }
}
