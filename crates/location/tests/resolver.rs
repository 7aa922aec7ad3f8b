
use checkin_location::{GeoPoint, LocationError, Tier, acquire_location};
use pretty_assertions::assert_eq;

use self::provider::{MockGeolocation, Scripted};

const SAO_PAULO: GeoPoint = GeoPoint::new(-23.55, -46.63);

#[tokio::test]
async fn precise_fix_skips_degraded_tier() {
    let device = MockGeolocation::new([Scripted::Fix(SAO_PAULO)]);

    let point = acquire_location(&device).await.expect("should resolve");

    assert_eq!(point, SAO_PAULO);
    assert_eq!(device.requests(), vec![Tier::Precise.options()]);
}

#[tokio::test]
async fn falls_back_to_degraded_tier() {
    let device = MockGeolocation::new([
        Scripted::Fail(LocationError::PositionUnavailable),
        Scripted::Fix(SAO_PAULO),
    ]);

    let point = acquire_location(&device).await.expect("should resolve");

    assert_eq!(point, SAO_PAULO);
    assert_eq!(device.requests(), vec![Tier::Precise.options(), Tier::Degraded.options()]);
}

#[tokio::test]
async fn reports_degraded_tier_error() {
    let device = MockGeolocation::new([
        Scripted::Fail(LocationError::PermissionDenied),
        Scripted::Fail(LocationError::PositionUnavailable),
    ]);

    let err = acquire_location(&device).await.expect_err("should fail");

    assert_eq!(err, LocationError::PositionUnavailable);
    assert_eq!(device.requests().len(), 2);
}

#[tokio::test]
async fn permission_denied_on_both_tiers() {
    let device = MockGeolocation::new([
        Scripted::Fail(LocationError::PermissionDenied),
        Scripted::Fail(LocationError::PermissionDenied),
    ]);

    let err = acquire_location(&device).await.expect_err("should fail");

    assert_eq!(err, LocationError::PermissionDenied);
    assert_eq!(err.to_string(), "location permission denied");
}

#[tokio::test]
async fn unsupported_fails_fast() {
    let device = MockGeolocation::unsupported();

    let err = acquire_location(&device).await.expect_err("should fail");

    assert_eq!(err, LocationError::Unsupported);
    assert!(device.requests().is_empty());
}

#[tokio::test(start_paused = true)]
async fn provider_ignoring_deadline_times_out() {
    let device = MockGeolocation::new([Scripted::Hang, Scripted::Hang]);

    let err = acquire_location(&device).await.expect_err("should time out");

    assert_eq!(err, LocationError::Timeout);
    assert_eq!(device.requests().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn precise_timeout_then_degraded_fix() {
    let device = MockGeolocation::new([Scripted::Hang, Scripted::Fix(SAO_PAULO)]);

    let point = acquire_location(&device).await.expect("should resolve");

    assert_eq!(point, SAO_PAULO);
}
