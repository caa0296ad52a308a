use foundation::math::Vec3;

/// Placement of one volume.
///
/// `tilt_rad` is a rotation around a single horizontal axis; the reveal
/// driver uses it for the settle wobble and snaps it back to zero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub scale: Vec3,
    pub tilt_rad: f64,
}

impl Transform {
    pub fn identity() -> Self {
        Self::at(Vec3::ZERO)
    }

    /// Full-scale, untilted transform at `position`.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            scale: Vec3::splat(1.0),
            tilt_rad: 0.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Visibility {
    pub visible: bool,
}

impl Visibility {
    pub fn visible() -> Self {
        Self { visible: true }
    }

    pub fn hidden() -> Self {
        Self { visible: false }
    }
}

/// Vertical extent of a volume, recorded at spawn.
///
/// `base_z` is the resting elevation of the volume's origin; the reveal
/// animation starts from `buried_z()` and rises back to `base_z`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Footprint {
    pub height: f64,
    pub base_z: f64,
}

impl Footprint {
    pub fn new(height: f64, base_z: f64) -> Self {
        Self { height, base_z }
    }

    pub fn buried_z(&self) -> f64 {
        self.base_z - self.height
    }
}
