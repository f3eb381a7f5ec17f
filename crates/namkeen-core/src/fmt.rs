use std::error;

pub type BoxedError = Box<dyn error::Error + Send + Sync + 'static>;

/// Render an error and its source chain on a single line.
///
/// `Display` on most error types prints only the outermost message;
/// for log lines we want the whole chain, `": "`-joined.
pub fn error_chain(err: &dyn error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(err) = source {
        out.push_str(": ");
        out.push_str(&err.to_string());
        source = err.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use std::io;

    use snafu::{ResultExt as _, Snafu};

    use super::*;

    #[derive(Debug, Snafu)]
    #[snafu(display("can't load sellers"))]
    struct LoadError {
        source: io::Error,
    }

    #[test]
    fn chain_joins_sources() {
        // Needs an error whose Display does NOT already cover its
        // source (io::Error's does, which would hide the joining).
        let err = Err::<(), _>(io::Error::new(io::ErrorKind::NotFound, "no such file"))
            .context(LoadSnafu)
            .unwrap_err();
        assert_eq!(error_chain(&err), "can't load sellers: no such file");
    }

    #[test]
    fn single_error_prints_alone() {
        let err = io::Error::new(io::ErrorKind::Other, "boom");
        assert_eq!(error_chain(&err), "boom");
    }
}
