mod common;

use common::{scroll_to, timeline};
use lovenotes_core::{ObserverRole, ProximityEntry, TimelineSurface};

#[test]
fn cards_reveal_once_and_stop_being_observed() {
    let mut timeline = timeline(4, 4);
    timeline.start(false);
    let first = timeline.surface().note_elements()[0];
    let entries = [
        ProximityEntry::intersecting(first),
        ProximityEntry::intersecting(first),
    ];

    assert_eq!(timeline.handle_reveal(&entries), 1);
    assert_eq!(timeline.handle_reveal(&entries), 0);
    assert_eq!(timeline.surface().visible_count(), 1);
    assert!(!timeline
        .proximity()
        .observed(ObserverRole::Reveal)
        .contains(&first));
}

#[test]
fn inset_trigger_zone_reveals_only_sufficiently_visible_cards() {
    // Cards sit at 0, 220, 440, 660. The trigger zone ends at 752 (800 - 6%),
    // so the fourth card shows 92 of 200 px (46%) and the rest are hidden.
    let mut timeline = timeline(8, 8);
    timeline.start(false);

    scroll_to(&mut timeline, 0.0);
    assert_eq!(timeline.surface().visible_count(), 4);

    // Card five at 880 needs 28px inside the zone: 880 + 28 - 752 = 156.
    scroll_to(&mut timeline, 150.0);
    assert_eq!(timeline.surface().visible_count(), 4);
    scroll_to(&mut timeline, 160.0);
    assert_eq!(timeline.surface().visible_count(), 5);
}

#[test]
fn new_batches_only_register_cards_that_are_not_yet_visible() {
    let mut timeline = timeline(8, 4);
    timeline.start(false);
    // The first four cards are revealed and the sentinel loads cards 5..=8.
    scroll_to(&mut timeline, 0.0);
    assert_eq!(timeline.surface().visible_count(), 4);
    assert_eq!(timeline.shown(), 8);

    let observed = timeline.proximity().observed(ObserverRole::Reveal);
    assert_eq!(observed.len(), 4);
    for element in observed {
        assert!(!timeline.surface().is_visible(element));
    }
}
