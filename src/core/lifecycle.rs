/// Page lifecycle events the app reacts to (`pagehide` / `pageshow`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageTransition {
    Hide,
    Show,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleAction {
    Teardown,
    Mount,
    Keep,
}

/// Decide what a page transition does to the running app.
///
/// `persisted` is `PageTransitionEvent.persisted`: the page is entering or
/// leaving the back/forward cache. A hidden page always releases its loop
/// and listeners; a page restored from the cache mounts again. A fresh load
/// is mounted by `start`, so its `pageshow` changes nothing.
pub fn lifecycle_action(
    transition: PageTransition,
    persisted: bool,
    mounted: bool,
) -> LifecycleAction {
    match transition {
        PageTransition::Hide if mounted => LifecycleAction::Teardown,
        PageTransition::Show if persisted && !mounted => LifecycleAction::Mount,
        _ => LifecycleAction::Keep,
    }
}
