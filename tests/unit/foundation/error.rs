use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FxError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        FxError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        FxError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FxError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn anyhow_converts_with_question_mark() {
    fn fails() -> FxResult<()> {
        Err(anyhow::anyhow!("nested"))?;
        Ok(())
    }
    let err = fails().unwrap_err();
    assert!(matches!(err, FxError::Other(_)));
}
