use raylib::prelude::Vector3;

#[inline]
pub fn vec3_from_rl(v: Vector3) -> blockyard_geom::Vec3 {
    blockyard_geom::Vec3::new(v.x, v.y, v.z)
}

#[inline]
pub fn vec3_to_rl(v: blockyard_geom::Vec3) -> Vector3 {
    Vector3::new(v.x, v.y, v.z)
}
