use jumbo::vessel::Key;

use crate::common::{created_vessel, press};

#[test]
fn test_lights_toggle_creates_and_deletes_emitters() {
    let (mut vessel, mut host) = created_vessel("Boeing747_400");
    let configured = vessel.config().lighting.as_ref().unwrap().lights.len();

    assert!(press(&mut vessel, &mut host, Key::F));
    assert!(vessel.lighting().lights_on);
    assert_eq!(host.live_lights(), configured);

    assert!(press(&mut vessel, &mut host, Key::F));
    assert!(!vessel.lighting().lights_on);
    assert_eq!(host.live_lights(), 0);
    assert_eq!(host.lights_deleted, configured);
}

#[test]
fn test_beacons_are_independent_of_lights() {
    let (mut vessel, mut host) = created_vessel("Boeing747_8");
    assert!(press(&mut vessel, &mut host, Key::B));
    assert_eq!(host.active_beacons(), host.beacon_count());
    assert_eq!(host.live_lights(), 0);

    assert!(press(&mut vessel, &mut host, Key::F));
    assert!(press(&mut vessel, &mut host, Key::B));
    assert_eq!(host.active_beacons(), 0);
    assert!(host.live_lights() > 0);
}

#[test]
fn test_classic_has_no_lights() {
    let (mut vessel, mut host) = created_vessel("Boeing747_100");
    assert!(!press(&mut vessel, &mut host, Key::F));
    assert!(!press(&mut vessel, &mut host, Key::B));
    assert_eq!(host.beacon_count(), 0);
}
