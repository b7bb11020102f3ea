//! Motor preset catalog.
//!
//! Free speeds and stall torques for motors commonly found on FTC drive
//! bases. Entries without a published stall torque carry `None` and can only
//! feed speed-side calculations.

use dc_core::Real;

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorSpec {
    pub name: &'static str,
    pub free_speed_rpm: Real,
    pub stall_torque_nm: Option<Real>,
}

pub const MOTOR_CATALOG: &[MotorSpec] = &[
    MotorSpec {
        name: "REV HD Hex",
        free_speed_rpm: 6000.0,
        stall_torque_nm: Some(3.2),
    },
    MotorSpec {
        name: "REV Core Hex",
        free_speed_rpm: 7200.0,
        stall_torque_nm: Some(1.6),
    },
    MotorSpec {
        name: "goBILDA 5202 (312 RPM)",
        free_speed_rpm: 312.0,
        stall_torque_nm: Some(3.6),
    },
    MotorSpec {
        name: "goBILDA 5202 (435 RPM)",
        free_speed_rpm: 435.0,
        stall_torque_nm: Some(2.6),
    },
    MotorSpec {
        name: "goBILDA 5202 (1150 RPM)",
        free_speed_rpm: 1150.0,
        stall_torque_nm: None,
    },
    MotorSpec {
        name: "NeveRest 20",
        free_speed_rpm: 340.0,
        stall_torque_nm: Some(3.7),
    },
    MotorSpec {
        name: "NeveRest 40",
        free_speed_rpm: 160.0,
        stall_torque_nm: Some(7.0),
    },
    MotorSpec {
        name: "NeveRest 60",
        free_speed_rpm: 105.0,
        stall_torque_nm: None,
    },
];

/// Case-insensitive lookup by preset name.
pub fn find_motor(name: &str) -> Option<&'static MotorSpec> {
    MOTOR_CATALOG
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let motor = find_motor("rev hd hex").unwrap();
        assert_eq!(motor.free_speed_rpm, 6000.0);
        assert_eq!(motor.stall_torque_nm, Some(3.2));
    }

    #[test]
    fn unknown_name_misses() {
        assert!(find_motor("CIM").is_none());
    }

    #[test]
    fn catalog_names_are_unique() {
        for (i, a) in MOTOR_CATALOG.iter().enumerate() {
            for b in &MOTOR_CATALOG[i + 1..] {
                assert!(!a.name.eq_ignore_ascii_case(b.name));
            }
        }
    }
}
