//! Document and record classification tests

use crate::extract::{DocumentKind, SourceRecord};
use serde_json::json;

#[test]
fn test_detect_document_kind() {
    assert_eq!(
        DocumentKind::detect(&json!({"ig_stories": []})),
        Some(DocumentKind::Stories)
    );
    assert_eq!(
        DocumentKind::detect(&json!({"timelineObjects": []})),
        Some(DocumentKind::Timeline)
    );
    assert_eq!(DocumentKind::detect(&json!({"ig_stories": {}})), None);
    assert_eq!(DocumentKind::detect(&json!({"other": []})), None);
    assert_eq!(DocumentKind::detect(&json!([1, 2, 3])), None);
}

#[test]
fn test_records_of_document() {
    let document = json!({"timelineObjects": [{"placeVisit": {}}, {"activitySegment": {}}]});
    assert_eq!(DocumentKind::Timeline.records(&document).len(), 2);
    assert!(DocumentKind::Stories.records(&document).is_empty());
}

#[test]
fn test_classify_timeline_objects() {
    let visit = json!({"placeVisit": {"location": {}}});
    let segment = json!({"activitySegment": {"distance": 10}});
    let unknown = json!({"somethingElse": {}});

    assert!(matches!(
        SourceRecord::classify(DocumentKind::Timeline, &visit),
        SourceRecord::PlaceVisit(_)
    ));
    assert!(matches!(
        SourceRecord::classify(DocumentKind::Timeline, &segment),
        SourceRecord::ActivitySegment(_)
    ));
    assert_eq!(
        SourceRecord::classify(DocumentKind::Timeline, &unknown),
        SourceRecord::Unrecognized
    );
}

#[test]
fn test_classify_passes_inner_payload() {
    let visit = json!({"placeVisit": {"location": {"name": "Home"}}});
    match SourceRecord::classify(DocumentKind::Timeline, &visit) {
        SourceRecord::PlaceVisit(payload) => {
            assert_eq!(payload["location"]["name"], json!("Home"))
        }
        other => panic!("Expected PlaceVisit, got {:?}", other),
    }
}

#[test]
fn test_classify_stories() {
    let story = json!({"uri": "media/stories/x.jpg"});
    assert!(matches!(
        SourceRecord::classify(DocumentKind::Stories, &story),
        SourceRecord::Story(_)
    ));
    assert_eq!(
        SourceRecord::classify(DocumentKind::Stories, &json!("not an object")),
        SourceRecord::Unrecognized
    );
}
