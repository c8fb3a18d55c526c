use crate::geopoint::GeoPoint;

/// One L-shaped detour: origin to corner, then corner to destination.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Candidate {
    pub origin: GeoPoint,
    pub corner: GeoPoint,
    pub destination: GeoPoint,
}

impl Candidate {
    pub fn first_leg(&self) -> (GeoPoint, GeoPoint) {
        (self.origin, self.corner)
    }

    pub fn second_leg(&self) -> (GeoPoint, GeoPoint) {
        (self.corner, self.destination)
    }
}

/// The two corners of the rectangle spanned by `origin` and `destination`.
///
/// The first turns after travelling along the origin's parallel, the second
/// after travelling along the origin's meridian. The order is only an
/// iteration order.
pub fn generate_corners(origin: &GeoPoint, destination: &GeoPoint) -> [GeoPoint; 2] {
    [
        GeoPoint::new(origin.lat, destination.lng),
        GeoPoint::new(destination.lat, origin.lng),
    ]
}

pub fn generate_candidates(origin: &GeoPoint, destination: &GeoPoint) -> [Candidate; 2] {
    generate_corners(origin, destination).map(|corner| Candidate {
        origin: *origin,
        corner,
        destination: *destination,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_share_one_coordinate_with_each_end() {
        let origin = GeoPoint::new(19.40, -99.17);
        let destination = GeoPoint::new(19.45, -99.10);

        let corners = generate_corners(&origin, &destination);
        assert_eq!(corners.len(), 2);

        for corner in corners {
            let shares_with_origin =
                (corner.lat == origin.lat) as u8 + (corner.lng == origin.lng) as u8;
            let shares_with_destination =
                (corner.lat == destination.lat) as u8 + (corner.lng == destination.lng) as u8;
            assert_eq!(shares_with_origin, 1);
            assert_eq!(shares_with_destination, 1);
        }

        assert_eq!(corners[0], GeoPoint::new(19.40, -99.10));
        assert_eq!(corners[1], GeoPoint::new(19.45, -99.17));
    }

    #[test]
    fn test_corners_collapse_on_shared_latitude() {
        let origin = GeoPoint::new(19.40, -99.17);
        let destination = GeoPoint::new(19.40, -99.10);

        let [first, second] = generate_corners(&origin, &destination);
        assert!(first.is_near(&destination));
        assert!(second.is_near(&origin));
    }

    #[test]
    fn test_candidate_legs_meet_at_corner() {
        let origin = GeoPoint::new(19.40, -99.17);
        let destination = GeoPoint::new(19.45, -99.10);

        for candidate in generate_candidates(&origin, &destination) {
            assert_eq!(candidate.first_leg().0, origin);
            assert_eq!(candidate.first_leg().1, candidate.corner);
            assert_eq!(candidate.second_leg().0, candidate.corner);
            assert_eq!(candidate.second_leg().1, destination);
        }
    }
}
