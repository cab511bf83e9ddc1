use super::*;

#[test]
fn test_build_produces_usable_config() {
    let ctx = AppContext::build();

    // Whatever the host machine's config says, the resolved values must be
    // usable: a non-empty zone identifier and a valid week anchor mapping.
    assert!(!ctx.config.zone.default.is_empty());
    let _ = ctx.config.week.start.weekday();
}
