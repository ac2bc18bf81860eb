use std::sync::Arc;

use crate::application::vote_snapshot::VoteSnapshotReader;

#[derive(Clone)]
pub struct AppState {
    pub snapshot_reader: Arc<VoteSnapshotReader>,
}

impl AppState {
    pub fn new(snapshot_reader: VoteSnapshotReader) -> Self {
        Self {
            snapshot_reader: Arc::new(snapshot_reader),
        }
    }
}
