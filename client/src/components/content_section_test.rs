use super::*;

#[test]
fn placeholder_delay_staggers_by_slot() {
    assert_eq!(placeholder_delay(0), 0.0);
    assert!((placeholder_delay(1) - 0.2).abs() < 1e-12);
    assert!((placeholder_delay(2) - 0.4).abs() < 1e-12);
}

#[test]
fn placeholder_fade_style_includes_delay() {
    let fade = PLACEHOLDER_FADE.with_delay(placeholder_delay(2));
    assert_eq!(animation_css("placeholder-fade", fade, false), "placeholder-fade 0.50s ease-out 0.40s 1 both");
}

fn settled_with(result: Result<Option<String>, StoreError>) -> LoadStatus<String> {
    let mut status = LoadStatus::default();
    assert!(status.begin());
    status.resolve(settle(SectionPath::Projects, result));
    status
}

#[test]
fn failed_reads_settle_empty() {
    assert_eq!(settled_with(Err(StoreError::Status(503))), LoadStatus::LoadedEmpty);
    assert_eq!(settled_with(Err(StoreError::Decode("expected a map".to_owned()))), LoadStatus::LoadedEmpty);
    assert_eq!(settled_with(Err(StoreError::Network("offline".to_owned()))), LoadStatus::LoadedEmpty);
}

#[test]
fn missing_path_settles_empty() {
    assert_eq!(settled_with(Ok(None)), LoadStatus::LoadedEmpty);
}

#[test]
fn present_content_settles_loaded() {
    let status = settled_with(Ok(Some("hero".to_owned())));
    assert_eq!(status, LoadStatus::Loaded("hero".to_owned()));
    assert!(status.is_settled());
}
