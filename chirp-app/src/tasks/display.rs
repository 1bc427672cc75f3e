//! Display task
//!
//! Plays the LED controller: forwards sensor samples to the pane and pulls
//! frames, on every view change and at the animation rate.

use std::io::Stdout;

use embassy_futures::select::{select3, Either3};
use embassy_time::{Duration, Ticker};
use log::{info, warn};

use chirp_display::{FrameSink, LedPane};

use crate::channels::{SENSOR_CHANNEL, VIEW_CHANGED};
use crate::preview::{PaneHandle, TerminalSink};

/// Display task - drives the terminal preview
#[embassy_executor::task]
pub async fn display_task(
    pane: &'static mut PaneHandle,
    mut sink: TerminalSink<Stdout>,
    frame_ms: u32,
) {
    info!(
        "Display task started (frame {} ms, keep_awake={})",
        frame_ms,
        pane.keep_awake()
    );

    let mut ticker = Ticker::every(Duration::from_millis(frame_ms.max(1) as u64));

    loop {
        if let Either3::First(sample) =
            select3(SENSOR_CHANNEL.receive(), VIEW_CHANGED.wait(), ticker.next()).await
        {
            pane.gesture(&sample);
            continue;
        }

        if !pane.is_enabled() || !sink.is_ready() {
            continue;
        }

        let frame = pane.render();
        if let Err(e) = sink.show(&frame) {
            warn!("Failed to draw frame: {:?}", e);
        }
    }
}
