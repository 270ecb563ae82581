//! Vehicle State Snapshot
//!
//! Provides the per-frame read-only view of vehicle and device signals that
//! the metrics panel evaluates against. Produced once per frame by the
//! upstream state bus; consumers only ever borrow it.

mod snapshot;

pub use snapshot::{
    DeviceThermals, GpsFix, LaneGeometry, LeadTrack, PowerChannels, TrafficCounts, UnitSystem,
    VehicleStateSnapshot,
};
