//! # Observability
//!
//! Structured logging for actor-based programs. The runtime logs actor lifecycle
//! (`Actor started`, `Shutdown`) and every request (`Create`, `Get`, `Watch`, `Delete`,
//! `Action`) with the entity type and id as fields; clients add `#[instrument]` spans.
//!
//! ```bash
//! RUST_LOG=info cargo run    # one line per committed change
//! RUST_LOG=debug cargo run   # payloads and actions
//! ```
//!
//! With `RUST_LOG=info` a tracked order reads like:
//!
//! ```text
//! INFO Actor started entity_type="OrderTracking"
//! INFO Created entity_type="OrderTracking" id=ORD1 size=1
//! INFO Driver started order_id=ORD1 every=15s
//! INFO Action ok entity_type="OrderTracking" id=ORD1
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Module paths are hidden (`with_target(false)`); the `entity_type` field says which
/// actor a line came from. Calling it twice is harmless: the second call is ignored.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
