/// Serializes the plug-in state into `dest`.
///
/// Nothing is persisted yet, so `dest` is left untouched.
pub fn save_state(dest: &mut Vec<u8>) {
    tracing::debug!(existing = dest.len(), "saving plug-in state (empty)");
}

/// Restores the plug-in state from a chunk previously produced by the host.
///
/// Any chunk is accepted and ignored.
pub fn load_state(data: &[u8]) {
    tracing::debug!(bytes = data.len(), "ignoring plug-in state chunk");
}
