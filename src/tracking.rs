use std::rc::Rc;
use yew::prelude::*;

/// Vertical offset past which the header switches to its scrolled look.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Share of a section's area that has to be in the viewport to activate it.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// One entry of an intersection observer batch, keyed by section position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sighting {
    pub index: usize,
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl Sighting {
    pub fn qualifies(&self) -> bool {
        self.is_intersecting && self.ratio >= VISIBILITY_THRESHOLD
    }
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Section to highlight for a batch of sightings.
///
/// When several sections qualify in the same batch the one that comes first
/// in document order wins, regardless of the order the browser reported them.
pub fn topmost_qualifying(sightings: &[Sighting], section_count: usize) -> Option<usize> {
    sightings
        .iter()
        .filter(|sighting| sighting.index < section_count && sighting.qualifies())
        .map(|sighting| sighting.index)
        .min()
}

#[derive(Clone, Debug, PartialEq)]
pub enum TrackerAction {
    /// Observer subscribed to the given sections, in document order.
    VisibilityAttached(Vec<&'static str>),
    VisibilityDetached,
    Intersections(Vec<Sighting>),
    ScrollAttached,
    ScrollDetached,
    Scrolled(f64),
}

/// Header tracking state: the active section label and the scrolled flag.
///
/// Each flag has its own attach/detach lifecycle and only moves while its
/// source is attached.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackerState {
    labels: Vec<&'static str>,
    visibility_attached: bool,
    scroll_attached: bool,
    active_label: Option<&'static str>,
    scrolled: bool,
}

impl TrackerState {
    pub fn active_label(&self) -> Option<&'static str> {
        self.active_label
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }
}

impl Reducible for TrackerState {
    type Action = TrackerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            TrackerAction::VisibilityAttached(labels) => {
                // The active label has to name one of the sections now observed.
                if next.active_label.is_some_and(|label| !labels.contains(&label)) {
                    next.active_label = None;
                }
                next.labels = labels;
                next.visibility_attached = true;
            }
            TrackerAction::VisibilityDetached => next.visibility_attached = false,
            TrackerAction::Intersections(sightings) => {
                if !next.visibility_attached {
                    return self;
                }
                // No qualifying section leaves the previous label in place.
                if let Some(index) = topmost_qualifying(&sightings, next.labels.len()) {
                    next.active_label = Some(next.labels[index]);
                }
            }
            TrackerAction::ScrollAttached => next.scroll_attached = true,
            TrackerAction::ScrollDetached => next.scroll_attached = false,
            TrackerAction::Scrolled(offset) => {
                if !next.scroll_attached || !offset.is_finite() {
                    return self;
                }
                next.scrolled = is_scrolled(offset);
            }
        }

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sighting(index: usize, ratio: f64) -> Sighting {
        Sighting {
            index,
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }

    fn attached() -> Rc<TrackerState> {
        Rc::new(TrackerState::default())
            .reduce(TrackerAction::VisibilityAttached(vec!["Demo", "Contrast"]))
            .reduce(TrackerAction::ScrollAttached)
    }

    #[test]
    fn scroll_threshold_boundary() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(51.0));
    }

    #[test]
    fn scrolled_flag_follows_last_offset() {
        let state = attached().reduce(TrackerAction::Scrolled(51.0));
        assert!(state.scrolled());
        let state = state.reduce(TrackerAction::Scrolled(50.0));
        assert!(!state.scrolled());
    }

    #[test]
    fn non_finite_offset_is_ignored() {
        let state = attached()
            .reduce(TrackerAction::Scrolled(80.0))
            .reduce(TrackerAction::Scrolled(f64::NAN));
        assert!(state.scrolled());
    }

    #[test]
    fn no_active_label_before_first_intersection() {
        let state = attached();
        assert_eq!(state.active_label(), None);
        assert!(!state.scrolled());
    }

    #[test]
    fn first_qualifying_sighting_activates_section() {
        let state = attached().reduce(TrackerAction::Intersections(vec![sighting(0, 0.75)]));
        assert_eq!(state.active_label(), Some("Demo"));
    }

    #[test]
    fn sub_threshold_sighting_does_not_activate() {
        let state = attached().reduce(TrackerAction::Intersections(vec![sighting(1, 0.4)]));
        assert_eq!(state.active_label(), None);
    }

    #[test]
    fn leaving_view_keeps_last_label() {
        let state = attached()
            .reduce(TrackerAction::Intersections(vec![sighting(1, 0.6)]))
            .reduce(TrackerAction::Intersections(vec![sighting(1, 0.3)]))
            .reduce(TrackerAction::Intersections(vec![Sighting {
                index: 1,
                ratio: 0.0,
                is_intersecting: false,
            }]));
        assert_eq!(state.active_label(), Some("Contrast"));
    }

    #[test]
    fn topmost_section_wins_simultaneous_crossings() {
        let state = attached().reduce(TrackerAction::Intersections(vec![
            sighting(1, 0.9),
            sighting(0, 0.5),
        ]));
        assert_eq!(state.active_label(), Some("Demo"));
    }

    #[test]
    fn unknown_section_index_is_ignored() {
        let state = attached().reduce(TrackerAction::Intersections(vec![sighting(7, 1.0)]));
        assert_eq!(state.active_label(), None);
        assert_eq!(topmost_qualifying(&[sighting(7, 1.0)], 2), None);
    }

    #[test]
    fn sections_never_in_view_never_become_active() {
        let mut state = attached();
        for ratio in [0.5, 0.8, 1.0, 0.2] {
            state = state.reduce(TrackerAction::Intersections(vec![sighting(0, ratio)]));
            assert_ne!(state.active_label(), Some("Contrast"));
        }
    }

    #[test]
    fn events_before_attach_are_ignored() {
        let state = Rc::new(TrackerState::default())
            .reduce(TrackerAction::Scrolled(300.0))
            .reduce(TrackerAction::Intersections(vec![sighting(0, 1.0)]));
        assert!(!state.scrolled());
        assert_eq!(state.active_label(), None);
    }

    #[test]
    fn detach_freezes_both_flags() {
        let state = attached()
            .reduce(TrackerAction::Intersections(vec![sighting(0, 0.6)]))
            .reduce(TrackerAction::Scrolled(10.0))
            .reduce(TrackerAction::VisibilityDetached)
            .reduce(TrackerAction::ScrollDetached);

        let after = state
            .clone()
            .reduce(TrackerAction::Intersections(vec![sighting(1, 1.0)]))
            .reduce(TrackerAction::Scrolled(400.0));

        assert!(Rc::ptr_eq(&state, &after));
        assert_eq!(after.active_label(), Some("Demo"));
        assert!(!after.scrolled());
    }

    #[test]
    fn reattach_uses_new_section_list() {
        let state = attached()
            .reduce(TrackerAction::Intersections(vec![sighting(0, 0.9)]))
            .reduce(TrackerAction::VisibilityDetached)
            .reduce(TrackerAction::VisibilityAttached(vec!["Pricing"]));
        assert_eq!(state.active_label(), None);

        let state = state.reduce(TrackerAction::Intersections(vec![sighting(0, 0.9)]));
        assert_eq!(state.active_label(), Some("Pricing"));
    }

    #[test]
    fn reattach_keeps_label_still_declared() {
        let state = attached()
            .reduce(TrackerAction::Intersections(vec![sighting(1, 0.7)]))
            .reduce(TrackerAction::VisibilityDetached)
            .reduce(TrackerAction::VisibilityAttached(vec!["Contrast", "Pricing"]));
        assert_eq!(state.active_label(), Some("Contrast"));
    }

    #[test]
    fn unchanged_state_is_not_reallocated() {
        let state = attached().reduce(TrackerAction::Scrolled(10.0));
        let again = state.clone().reduce(TrackerAction::Scrolled(20.0));
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn mount_scroll_unmount_scenario() {
        let state = attached().reduce(TrackerAction::Intersections(vec![sighting(1, 0.6)]));
        assert_eq!(state.active_label(), Some("Contrast"));

        let state = state.reduce(TrackerAction::Scrolled(120.0));
        assert!(state.scrolled());

        let state = state.reduce(TrackerAction::Scrolled(10.0));
        assert!(!state.scrolled());

        let state = state
            .reduce(TrackerAction::VisibilityDetached)
            .reduce(TrackerAction::ScrollDetached)
            .reduce(TrackerAction::Scrolled(300.0));
        assert!(!state.scrolled());
        assert_eq!(state.active_label(), Some("Contrast"));
    }
}
