//! Invariant checks for inbound vehicle lists.

use crate::error::{FleetError, FleetResult};
use crate::vehicle::Vehicle;
use std::collections::HashSet;

/// Check that ids are non-empty and unique and that every numeric field is
/// finite. Reports the first violation in list order.
pub fn validate_fleet(vehicles: &[Vehicle]) -> FleetResult<()> {
    let mut seen = HashSet::with_capacity(vehicles.len());
    for vehicle in vehicles {
        if vehicle.id.is_empty() {
            return Err(FleetError::EmptyId);
        }
        if !seen.insert(vehicle.id.as_str()) {
            return Err(FleetError::DuplicateId {
                id: vehicle.id.clone(),
            });
        }
        for (field, value) in [
            ("lat", vehicle.lat),
            ("lng", vehicle.lng),
            ("rating", vehicle.rating),
        ] {
            if !value.is_finite() {
                return Err(FleetError::NonFinite {
                    id: vehicle.id.clone(),
                    field,
                    value,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::VehicleStatus;

    fn unit(id: &str) -> Vehicle {
        Vehicle::new(id, VehicleStatus::Active, "Acme", "Jo", 1.0, 2.0, 4.0)
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert!(validate_fleet(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = validate_fleet(&[unit("A"), unit("B"), unit("A")]).unwrap_err();
        assert_eq!(err, FleetError::DuplicateId { id: "A".to_string() });
    }

    #[test]
    fn test_empty_id_rejected() {
        assert_eq!(validate_fleet(&[unit("")]), Err(FleetError::EmptyId));
    }

    #[test]
    fn test_nan_coordinate_rejected() {
        let mut vehicle = unit("A");
        vehicle.lng = f64::NAN;
        let err = validate_fleet(&[vehicle]).unwrap_err();
        assert!(matches!(err, FleetError::NonFinite { field: "lng", .. }));
    }
}
