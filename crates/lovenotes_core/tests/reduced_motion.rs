mod common;

use common::timeline;
use lovenotes_core::ObserverRole;

#[test]
fn reduced_motion_renders_and_reveals_everything_at_startup() {
    let mut timeline = timeline(10, 4);
    timeline.start(true);

    assert_eq!(timeline.shown(), 10);
    assert_eq!(timeline.surface().cards().len(), 10);
    assert_eq!(timeline.surface().visible_count(), 10);
    assert_eq!(timeline.surface().sentinel_count(), 0);
    assert!(timeline.proximity().observed(ObserverRole::Reveal).is_empty());
}

#[test]
fn reduced_motion_produces_the_same_cards_as_scrolling() {
    let mut instant = timeline(10, 4);
    instant.start(true);

    let mut staged = timeline(10, 4);
    staged.start(false);
    while staged.render_batch() > 0 {}
    staged.reveal_all_immediately();

    assert_eq!(instant.surface().cards(), staged.surface().cards());
    assert_eq!(instant.surface().to_html(), staged.surface().to_html());
}
