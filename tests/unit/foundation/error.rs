use super::*;

#[test]
fn constructors_map_to_variants_and_prefix_display() {
    let e = LaunchError::validation("bad props");
    assert!(matches!(e, LaunchError::Validation(_)));
    assert_eq!(e.to_string(), "validation error: bad props");

    let e = LaunchError::animation("bad table");
    assert!(matches!(e, LaunchError::Animation(_)));
    assert_eq!(e.to_string(), "animation error: bad table");

    assert!(matches!(
        LaunchError::evaluation("x"),
        LaunchError::Evaluation(_)
    ));
    assert!(matches!(LaunchError::serde("x"), LaunchError::Serde(_)));
}

#[test]
fn serde_json_errors_become_serde_variant() {
    let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let e: LaunchError = err.into();
    assert!(matches!(e, LaunchError::Serde(_)));
}

#[test]
fn io_and_anyhow_errors_become_other() {
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let e: LaunchError = io.into();
    assert!(matches!(e, LaunchError::Other(_)));
    assert!(e.to_string().contains("pipe closed"));

    let e: LaunchError = anyhow::anyhow!("boom").into();
    assert_eq!(e.to_string(), "boom");
}

#[test]
fn launch_result_propagates_with_question_mark() {
    fn inner() -> LaunchResult<u32> {
        Err(LaunchError::validation("nope"))
    }
    fn outer() -> LaunchResult<u32> {
        let v = inner()?;
        Ok(v + 1)
    }
    assert!(outer().is_err());
}
