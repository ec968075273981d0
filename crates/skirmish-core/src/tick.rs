/// Per-frame tick inputs handed to the tree by the host.
///
/// `frame` is a monotonically increasing counter; the debug observation layer
/// uses it to tag snapshots, so hosts that drive a probe should source it from
/// the probe's frame bookkeeping rather than inventing their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub frame: u64,
    pub dt_seconds: f32,
}

impl TickContext {
    pub fn new(frame: u64, dt_seconds: f32) -> Self {
        Self { frame, dt_seconds }
    }
}
