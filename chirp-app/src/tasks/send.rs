//! Send task
//!
//! Performs one send at a time with a bounded wait and reports the result
//! to the controller.

use embassy_time::{with_timeout, Duration};
use log::{debug, info, warn};

use chirp_core::send::{perform, SendOutcome, SendRequest};
use chirp_core::traits::{ApiError, MessagingApi};

use crate::api::DryRunApi;
use crate::channels::{SEND_OUTCOME, SEND_REQUEST};

/// Send task - runs requests from the controller
#[embassy_executor::task]
pub async fn send_task(api: &'static DryRunApi, timeout_ms: u32) {
    info!("Send task started (timeout {} ms)", timeout_ms);

    let timeout = Duration::from_millis(timeout_ms as u64);

    loop {
        let request = SEND_REQUEST.receive().await;
        debug!("Sending {} ({:?})", request.id, request.delivery());

        let outcome = send_with_timeout(api, &request, timeout).await;
        SEND_OUTCOME.send(outcome).await;
    }
}

/// Run one send, giving up after `timeout`
///
/// A send that does not answer in time is reported as
/// [`ApiError::Timeout`].
pub async fn send_with_timeout<A: MessagingApi>(
    api: &A,
    request: &SendRequest,
    timeout: Duration,
) -> SendOutcome {
    match with_timeout(timeout, perform(api, request)).await {
        Ok(outcome) => outcome,
        Err(_) => {
            warn!(
                "Send of {} timed out after {} ms",
                request.id,
                timeout.as_millis()
            );
            SendOutcome {
                id: request.id.clone(),
                result: Err(ApiError::Timeout),
            }
        }
    }
}
