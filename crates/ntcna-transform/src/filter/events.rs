/// Notifications emitted by the filter engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    /// The user set a filter value. Drives `apply_filters` while the
    /// auto-apply link is attached.
    UserChanged { column: String },
    /// The engine moved a filter's value to the bounds of the current subset.
    BoundsAdjusted { column: String },
    /// `filtered` was recomputed.
    Filtered { rows: usize },
    /// The source table was replaced and every filter reset to full extent.
    SourceReset { rows: usize },
}

impl FilterEvent {
    pub fn is_user_change(&self) -> bool {
        matches!(self, FilterEvent::UserChanged { .. })
    }
}

/// Receives every engine event, including bound adjustments made while the
/// auto-apply link is detached, so widgets can refresh.
pub trait FilterObserver {
    fn on_filter_event(&mut self, event: &FilterEvent);
}

impl<F> FilterObserver for F
where
    F: FnMut(&FilterEvent),
{
    fn on_filter_event(&mut self, event: &FilterEvent) {
        self(event);
    }
}
