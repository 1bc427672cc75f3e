//! Raw samples from the gesture sensor

/// Touch location flags reported by the sensor
///
/// More than one flag can be set when the finger sits between zones; all
/// flags clear means the sensor had no valid location for that sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Location {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
    pub center: bool,
}

impl Location {
    /// No valid location
    pub const NONE: Self = Self {
        north: false,
        south: false,
        east: false,
        west: false,
        center: false,
    };

    /// Touch on the west edge only
    pub const fn west() -> Self {
        Self {
            west: true,
            ..Self::NONE
        }
    }

    /// Touch on the east edge only
    pub const fn east() -> Self {
        Self {
            east: true,
            ..Self::NONE
        }
    }
}

/// One sensor report
///
/// `tap` and `double_tap` are the sensor's per-interval "active" flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureSample {
    pub touch_active: bool,
    pub tap: bool,
    pub double_tap: bool,
    pub location: Location,
}

impl GestureSample {
    /// Finger resting at a location, no gesture edge
    pub const fn touch(location: Location) -> Self {
        Self {
            touch_active: true,
            tap: false,
            double_tap: false,
            location,
        }
    }

    /// Tap edge; the sensor reports a blank location with it
    pub const fn tap() -> Self {
        Self {
            touch_active: false,
            tap: true,
            double_tap: false,
            location: Location::NONE,
        }
    }

    /// Double-tap edge
    pub const fn double_tap() -> Self {
        Self {
            touch_active: false,
            tap: false,
            double_tap: true,
            location: Location::NONE,
        }
    }
}
