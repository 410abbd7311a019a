use super::track::TrackRecord;

/// Sorts the cycle's collected records oldest-first and takes the newest one.
/// Unstamped records sort before stamped ones; when stamps tie, the sort is
/// stable so the later insertion wins. That tie-break is arbitrary, not a
/// policy guarantee.
pub fn choose_newest(mut collected: Vec<TrackRecord>) -> Option<TrackRecord> {
    collected.sort_by_key(|track| track.observed_at);
    collected.pop()
}
