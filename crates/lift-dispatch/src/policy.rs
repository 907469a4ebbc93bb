//! The `DispatchPolicy` trait: the pluggable seam for hall-call assignment.

use lift_car::{Elevator, ElevatorRegistry, EventSink};
use lift_core::{ElevatorId, LiftError, LiftResult};
use tracing::info;

use crate::HallRequest;

/// Chooses which car serves a hall call.
///
/// # Contract
///
/// `select` receives every car in registry (creation) order and returns the
/// index of the chosen one, or `None` if no car can serve the call.  It must
/// only return indices of `Active` cars.
///
/// Implementations must be deterministic: the same fleet state and request
/// always yield the same choice.
///
/// # Example
///
/// ```rust,ignore
/// /// Always the first active car.
/// struct FirstActive;
///
/// impl DispatchPolicy for FirstActive {
///     fn select(&self, _req: &HallRequest, cars: &[Elevator]) -> Option<usize> {
///         cars.iter().position(|c| c.is_active())
///     }
/// }
/// ```
pub trait DispatchPolicy: Send + Sync + 'static {
    fn select(&self, request: &HallRequest, cars: &[Elevator]) -> Option<usize>;

    /// Short name for logs.
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Pick a car with `policy` and queue the request floor on it.
///
/// Fails with `NoElevatorsAvailable` when the policy finds no car.  Any error
/// from the winner's `schedule_car_request` is passed through.
pub fn assign_elevator_to_hall_request<P, S>(
    policy:   &P,
    request:  &HallRequest,
    registry: &mut ElevatorRegistry,
    sink:     &mut S,
) -> LiftResult<ElevatorId>
where
    P: DispatchPolicy + ?Sized,
    S: EventSink,
{
    let slot = policy
        .select(request, registry.get_all())
        .ok_or(LiftError::NoElevatorsAvailable)?;
    let id = registry
        .by_slot(slot)
        .map(|car| car.id.clone())
        .ok_or(LiftError::NoElevatorsAvailable)?;

    info!(elevator = %id, floor = request.floor, direction = %request.direction, policy = policy.name(), "hall call assigned");
    registry.machine(&id, sink)?.schedule_car_request(request.floor)?;
    Ok(id)
}
