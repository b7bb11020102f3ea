// dc-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, AngularVelocity as UomAngularVelocity, Force as UomForce,
    Length as UomLength, Mass as UomMass, Ratio as UomRatio, Time as UomTime,
    Torque as UomTorque, Velocity as UomVelocity,
};

// Public canonical quantity types (f64). Drivetrain work mixes imperial and
// metric units, so values are constructed in the unit they are quoted in and
// converted through the unit system.
pub type Accel = UomAcceleration;
pub type AngVel = UomAngularVelocity;
pub type Force = UomForce;
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Ratio = UomRatio;
pub type Time = UomTime;
pub type Torque = UomTorque;
pub type Velocity = UomVelocity;

#[inline]
pub fn inches(v: f64) -> Length {
    use uom::si::length::inch;
    Length::new::<inch>(v)
}

#[inline]
pub fn feet(v: f64) -> Length {
    use uom::si::length::foot;
    Length::new::<foot>(v)
}

#[inline]
pub fn fps(v: f64) -> Velocity {
    use uom::si::velocity::foot_per_second;
    Velocity::new::<foot_per_second>(v)
}

#[inline]
pub fn rpm(v: f64) -> AngVel {
    use uom::si::angular_velocity::revolution_per_minute;
    AngVel::new::<revolution_per_minute>(v)
}

#[inline]
pub fn nm(v: f64) -> Torque {
    use uom::si::torque::newton_meter;
    Torque::new::<newton_meter>(v)
}

#[inline]
pub fn lb(v: f64) -> Mass {
    use uom::si::mass::pound;
    Mass::new::<pound>(v)
}

#[inline]
pub fn lbf(v: f64) -> Force {
    use uom::si::force::pound_force;
    Force::new::<pound_force>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Bare-`f64` conversion helpers for the formula layer.
///
/// The factors come out of the unit system rather than being typed in by
/// hand, so 0.3048 and friends live in exactly one place.
pub mod conversions {
    use super::*;

    #[inline]
    pub fn ft_per_s_to_m_per_s(v: f64) -> f64 {
        use uom::si::velocity::{foot_per_second, meter_per_second};
        Velocity::new::<foot_per_second>(v).get::<meter_per_second>()
    }

    #[inline]
    pub fn ft_per_s_to_mph(v: f64) -> f64 {
        use uom::si::velocity::{foot_per_second, mile_per_hour};
        Velocity::new::<foot_per_second>(v).get::<mile_per_hour>()
    }

    #[inline]
    pub fn inches_to_feet(v: f64) -> f64 {
        use uom::si::length::{foot, inch};
        Length::new::<inch>(v).get::<foot>()
    }
}

pub mod constants {
    pub const INCHES_PER_FOOT: f64 = 12.0;
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
}
