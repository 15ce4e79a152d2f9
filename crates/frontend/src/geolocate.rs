//! One-shot device geolocation.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use relief_shared::ResolveError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Browser error codes for a failed position request.
const PERMISSION_DENIED: u16 = 1;
const POSITION_UNAVAILABLE: u16 = 2;
const TIMEOUT: u16 = 3;

/// Ask the device for its current coordinates.
///
/// Resolves exactly once: either the coordinates or one structured error.
pub async fn current_position() -> Result<(f64, f64), ResolveError> {
    let window = web_sys::window().ok_or(ResolveError::Unsupported)?;
    let geolocation = window
        .navigator()
        .geolocation()
        .map_err(|_| ResolveError::Unsupported)?;

    let (tx, rx) = oneshot::channel();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let on_success = {
        let tx = tx.clone();
        Closure::once(move |position: web_sys::Position| {
            let coords = position.coords();
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Ok((coords.latitude(), coords.longitude())));
            }
        })
    };
    let on_failure = {
        let tx = tx.clone();
        Closure::once(move |error: web_sys::PositionError| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Err(decode_error(error.code(), error.message())));
            }
        })
    };

    geolocation
        .get_current_position_with_error_callback(
            on_success.as_ref().unchecked_ref(),
            Some(on_failure.as_ref().unchecked_ref()),
        )
        .map_err(|_| ResolveError::Unsupported)?;

    rx.await
        .map_err(|_| ResolveError::Unavailable("position request dropped".into()))?
}

fn decode_error(code: u16, message: String) -> ResolveError {
    match code {
        PERMISSION_DENIED => ResolveError::PermissionDenied(message),
        POSITION_UNAVAILABLE => ResolveError::Unavailable(message),
        TIMEOUT => ResolveError::Timeout(message),
        _ => ResolveError::Unavailable(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_maps_browser_codes() {
        assert_eq!(
            decode_error(PERMISSION_DENIED, "denied".into()),
            ResolveError::PermissionDenied("denied".into())
        );
        assert_eq!(
            decode_error(POSITION_UNAVAILABLE, "gone".into()),
            ResolveError::Unavailable("gone".into())
        );
        assert_eq!(
            decode_error(TIMEOUT, "slow".into()),
            ResolveError::Timeout("slow".into())
        );
    }

    #[test]
    fn test_decode_error_unknown_code_is_unavailable() {
        assert_eq!(
            decode_error(9, "?".into()),
            ResolveError::Unavailable("?".into())
        );
    }
}
