//! Recording tab strip notifications as serializable events.

mod protocol;
mod recorder;

pub use protocol::{TabStripEvent, TabStripEventData};
pub use recorder::EventRecorder;
