use std::sync::atomic::{AtomicU64, Ordering};

use crate::identifiers::InstanceId;

static INSTANCE_COUNT: AtomicU64 = AtomicU64::new(0);

/// Returns the next instance id: "1", "2", ... in creation order.
pub fn generate_instance_id() -> InstanceId {
    let id = INSTANCE_COUNT.fetch_add(1, Ordering::Relaxed) + 1;
    InstanceId::new(id.to_string())
}
