use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GridlensError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        GridlensError::source("x")
            .to_string()
            .contains("source error:")
    );
    assert!(
        GridlensError::capture("x")
            .to_string()
            .contains("capture error:")
    );
    assert!(
        GridlensError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GridlensError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
