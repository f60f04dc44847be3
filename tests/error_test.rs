use std::io;

use touch::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed");
    let err: Error = dialoguer::Error::IO(io_err).into();

    match err {
        Error::PromptError(_) => (),
        _ => panic!("Expected PromptError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::FileExistsError { path: "main.rs".to_string() };
    assert_eq!(
        err.to_string(),
        "Cannot proceed: file 'main.rs' already exists and overwrite was not confirmed."
    );

    let err = Error::FileCreateError {
        path: "dir/main.rs".to_string(),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.to_string(), "Could not create file 'dir/main.rs'. Original error: denied");
}
