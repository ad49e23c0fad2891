//! Screen-to-world hit testing for the cursor.
//!
//! A ray is cast from the view camera through the cursor and tested against
//! every [`HitShape`](super::components::HitShape) with the slab method. The
//! nearest box within range is the blocking hit.

use bevy::prelude::*;

use crate::resources::ViewCamera;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorRay {
    pub origin: Vec3,
    /// Unit length.
    pub direction: Vec3,
}

impl CursorRay {
    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorHit {
    pub entity: Entity,
    pub distance: f32,
    pub point: Vec3,
}

/// Ray through `cursor` (viewport pixels, origin top-left). `None` when the
/// cursor lies outside the viewport or the viewport is empty.
pub fn cursor_ray(camera: &ViewCamera, cursor: Vec2) -> Option<CursorRay> {
    let size = camera.viewport;
    if size.x <= 0.0 || size.y <= 0.0 {
        return None;
    }
    if cursor.x < 0.0 || cursor.y < 0.0 || cursor.x > size.x || cursor.y > size.y {
        return None;
    }

    let ndc_x = 2.0 * cursor.x / size.x - 1.0;
    let ndc_y = 1.0 - 2.0 * cursor.y / size.y;

    let rotation = camera.rotation();
    let forward = rotation * Vec3::NEG_Z;
    let right = rotation * Vec3::X;
    let up = rotation * Vec3::Y;

    let half_fov_tan = (camera.fov_y * 0.5).tan();
    let aspect = size.x / size.y;

    let direction =
        (forward + right * (ndc_x * half_fov_tan * aspect) + up * (ndc_y * half_fov_tan))
            .normalize();

    Some(CursorRay {
        origin: camera.position,
        direction,
    })
}

/// Distance along the ray to the box, or `None` on a miss. A ray starting inside
/// the box hits its far side.
pub fn ray_aabb_intersect(ray: &CursorRay, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray.origin[axis];
        let dir = ray.direction[axis];

        if dir.abs() < 1e-8 {
            // parallel to this slab
            if origin < min[axis] || origin > max[axis] {
                return None;
            }
            continue;
        }

        let inv = 1.0 / dir;
        let t1 = (min[axis] - origin) * inv;
        let t2 = (max[axis] - origin) * inv;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
    }

    if t_max < t_min || t_max < 0.0 {
        return None;
    }
    Some(if t_min >= 0.0 { t_min } else { t_max })
}

/// Nearest box hit by `ray` within `max_distance`.
pub fn pick<I>(ray: &CursorRay, shapes: I, max_distance: f32) -> Option<CursorHit>
where
    I: IntoIterator<Item = (Entity, Vec3, Vec3)>,
{
    shapes
        .into_iter()
        .filter_map(|(entity, center, half_extents)| {
            let distance = ray_aabb_intersect(ray, center - half_extents, center + half_extents)?;
            (distance <= max_distance).then_some((entity, distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(entity, distance)| CursorHit {
            entity,
            distance,
            point: ray.at(distance),
        })
}
