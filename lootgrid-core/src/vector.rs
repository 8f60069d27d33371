use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Error type for vector operations.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum VectorError {
    #[error("division of vector by zero scalar")]
    DivisionByZero,
}

/// A 3D vector over f64 components.
///
/// All operations are by-value and never mutate an operand. Angles are
/// always expressed in degrees; host orientation data in other units must
/// be converted before it reaches this type (see `PlayerPose`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }

    /// Squared length of the vector.
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Length (magnitude) of the vector.
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Scales every component by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        Vec3::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Divides every component by `divisor`.
    ///
    /// A divisor of zero is an error, not a silent default.
    pub fn divide(self, divisor: f64) -> Result<Self, VectorError> {
        if divisor == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(Vec3::new(self.x / divisor, self.y / divisor, self.z / divisor))
    }

    /// Rotates the x,y components about the vertical axis by `degrees`;
    /// z is unchanged. `rotate_z(90.0)` derives the perpendicular of a
    /// horizontal facing vector.
    pub fn rotate_z(self, degrees: f64) -> Self {
        let rad = degrees.to_radians();
        let (sin, cos) = rad.sin_cos();
        Vec3::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
            self.z,
        )
    }

    /// Returns the unit vector in this direction, or the zero vector when
    /// the magnitude is zero. Never fails.
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            Vec3::ZERO
        } else {
            Vec3::new(self.x / len, self.y / len, self.z / len)
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        self.scale(rhs)
    }
}

/// Converts a yaw/pitch pair (degrees) into a unit direction vector via the
/// standard spherical-to-Cartesian conversion.
pub fn direction_from_yaw_pitch(yaw_deg: f64, pitch_deg: f64) -> Vec3 {
    let yaw = yaw_deg.to_radians();
    let pitch = pitch_deg.to_radians();
    let cos_pitch = pitch.cos();
    Vec3::new(yaw.cos() * cos_pitch, yaw.sin() * cos_pitch, pitch.sin()).normalized()
}
