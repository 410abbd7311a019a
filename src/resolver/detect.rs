use super::track::TrackRecord;

/// Single-slot store for the track the previous cycle resolved. One of these
/// lives for the resolver's whole lifetime; it is read and replaced exactly
/// once per cycle.
#[derive(Debug, Default)]
pub struct LastTrackSlot {
    last: Option<TrackRecord>,
}

impl LastTrackSlot {
    /// Whether `chosen` is the track the previous cycle resolved, compared by
    /// the (title, artist, album) triple. The retained record is replaced
    /// unconditionally, whatever the comparison says.
    pub fn observe(&mut self, chosen: &TrackRecord) -> bool {
        let same = self
            .last
            .as_ref()
            .is_some_and(|last| last.identity() == chosen.identity());
        self.last = Some(chosen.clone());
        same
    }

    #[allow(dead_code, reason = "lets an embedding caller clear retained state")]
    pub fn reset(&mut self) {
        self.last = None;
    }
}
