use super::types::{Locatable, Projection};

/// Counter-clockwise angle in (−π, π] from the +x axis to the line `a → b`,
/// measured after projecting both locations.
pub fn angle<A, B, P>(a: &A, b: &B, projection: &P) -> f64
where
    A: Locatable + ?Sized,
    B: Locatable + ?Sized,
    P: Projection + ?Sized,
{
    let pa = projection.forward(a.location());
    let pb = projection.forward(b.location());
    (pb.y - pa.y).atan2(pb.x - pa.x)
}
