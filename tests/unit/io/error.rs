//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use tilegrid::GridError;
    use tilegrid::io::error::{invalid_parameter, invalid_placement};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = GridError::FileSystem {
            path: "/tmp/layout.txt".into(),
            operation: "write",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("/tmp/layout.txt"));
        assert!(message.contains("file not found"));
    }

    // Tests OutOfBounds formatting includes position and size
    // Verified by omitting dimensions from message
    #[test]
    fn test_out_of_bounds_error() {
        let error = GridError::OutOfBounds {
            position: [3, -1],
            dimensions: (3, 2),
        };

        let message = error.to_string();
        assert!(message.contains("(3, -1)"));
        assert!(message.contains("3x2"));
        assert!(error.source().is_none());
    }

    // Tests InvalidParameter helper fills all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("width", &20_000, &"must not exceed 10000");

        let message = error.to_string();
        assert!(message.contains("width"));
        assert!(message.contains("20000"));
        assert!(message.contains("must not exceed 10000"));
    }

    // Tests InvalidPlacement helper keeps the raw input
    // Verified by omitting input from message
    #[test]
    fn test_invalid_placement_error() {
        let error = invalid_placement("1,x", &"expected 3 comma-separated integers");

        let message = error.to_string();
        assert!(message.contains("'1,x'"));
        assert!(message.contains("expected 3"));
    }

    // Tests plain I/O errors convert into FileSystem errors
    // Verified by mapping to InvalidParameter instead
    #[test]
    fn test_from_io_error() {
        let error: GridError =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed").into();

        let GridError::FileSystem { path, .. } = &error else {
            unreachable!("Expected FileSystem error type");
        };
        assert_eq!(path, &PathBuf::from("<stdout>"));
        assert!(error.source().is_some());
    }
}
